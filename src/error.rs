// Error types surfaced by the harness

use std::fmt;
use std::io;

/// Failure to load a program image into the emulator
#[derive(Debug)]
pub enum ImageLoadError {
    /// The file could not be opened or read
    Io(io::Error),

    /// The file was empty
    Empty,

    /// The image does not fit between the load address and $FFFF
    TooLarge { len: usize, capacity: usize },
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageLoadError::Io(err) => write!(f, "failed to read program image: {}", err),
            ImageLoadError::Empty => write!(f, "program image is empty"),
            ImageLoadError::TooLarge { len, capacity } => write!(
                f,
                "program image is {} bytes but only {} fit at the load address",
                len, capacity
            ),
        }
    }
}

impl std::error::Error for ImageLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageLoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ImageLoadError {
    fn from(err: io::Error) -> Self {
        ImageLoadError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ImageLoadError::Empty;
        assert_eq!(err.to_string(), "program image is empty");

        let err = ImageLoadError::TooLarge {
            len: 40000,
            capacity: 32768,
        };
        assert!(err.to_string().contains("40000"));
        assert!(err.to_string().contains("32768"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: ImageLoadError = io_err.into();
        assert!(matches!(err, ImageLoadError::Io(_)));
    }
}
