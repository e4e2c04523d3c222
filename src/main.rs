// Program-image harness
//
// Loads a raw 6502 binary into the emulated machine, runs it until the
// sentinel byte goes nonzero, and reports that byte as the exit code.

use std::env;
use std::fs;
use std::process;

use log::{error, info};

use nes_core::{Emulator, HarnessConfig, ImageLoadError};

/// Harness settings file, read if present beside the working directory
const CONFIG_FILE: &str = "harness.toml";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <program image>", args[0]);
        process::exit(1);
    }

    match run(&args[1]) {
        Ok(Some(result)) => {
            info!("sentinel reported {}", result);
            println!("result: {}", result);
            process::exit(result as i32);
        }
        Ok(None) => {
            eprintln!("program made no report within the step limit");
            process::exit(1);
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn run(path: &str) -> Result<Option<u8>, ImageLoadError> {
    let config = HarnessConfig::load_or_default(CONFIG_FILE);
    let image = load_image(path, &config)?;

    let mut emulator = Emulator::with_config(config.clone());
    emulator.load_program(&image);
    info!(
        "loaded {} bytes at ${:04X}, entry ${:04X}",
        image.len(),
        config.load_address,
        config.entry_point
    );

    Ok(emulator.run_until_sentinel())
}

fn load_image(path: &str, config: &HarnessConfig) -> Result<Vec<u8>, ImageLoadError> {
    let image = fs::read(path)?;
    if image.is_empty() {
        return Err(ImageLoadError::Empty);
    }

    let capacity = 0x10000 - config.load_address as usize;
    if image.len() > capacity {
        return Err(ImageLoadError::TooLarge {
            len: image.len(),
            capacity,
        });
    }

    Ok(image)
}
