// Harness configuration
//
// Settings for the program-image harness, persisted as TOML next to the
// binary. Every field has a default matching the classic test contract:
// image at $8000, entry at $8000, result byte at $F001.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Harness settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Where the program image is loaded
    pub load_address: u16,

    /// Initial program counter
    pub entry_point: u16,

    /// Address the program stores its result byte to
    pub sentinel_address: u16,

    /// Scheduler-step limit guarding against programs that never finish
    pub max_steps: u64,

    /// Emit a per-instruction trace line at `trace` log level
    pub trace: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            load_address: 0x8000,
            entry_point: 0x8000,
            sentinel_address: 0xF001,
            max_steps: 50_000_000,
            trace: false,
        }
    }
}

impl HarnessConfig {
    /// Load settings from a TOML file, falling back to defaults
    ///
    /// A missing file is normal (first run); a malformed one logs a warning
    /// and uses defaults rather than refusing to start.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => config,
                Err(err) => {
                    warn!("ignoring malformed {}: {}", path.display(), err);
                    HarnessConfig::default()
                }
            },
            Err(_) => HarnessConfig::default(),
        }
    }

    /// Persist settings as TOML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let text = toml::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, text)
    }
}
