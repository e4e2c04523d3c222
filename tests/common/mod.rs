// Shared helpers for program-driven integration tests
//
// Tests here assemble small 6502 programs by hand, load them at the
// harness's default address, and run them through the full machine.

#![allow(dead_code)]

use nes_core::{Emulator, HarnessConfig};

/// Default program origin, matching the harness contract
pub const ORIGIN: u16 = 0x8000;

/// Build an emulator with `program` loaded at $8000 and PC pointing at it
pub fn emulator_with_program(program: &[u8]) -> Emulator {
    let mut emulator = Emulator::new();
    emulator.load_program(program);
    emulator
}

/// Same, with a reduced step limit for tests that expect a timeout
pub fn emulator_with_limit(program: &[u8], max_steps: u64) -> Emulator {
    let config = HarnessConfig {
        max_steps,
        ..HarnessConfig::default()
    };
    let mut emulator = Emulator::with_config(config);
    emulator.load_program(program);
    emulator
}

/// Execute `count` scheduler steps
pub fn step_n(emulator: &mut Emulator, count: u32) {
    for _ in 0..count {
        emulator.step();
    }
}
