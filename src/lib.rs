// NES emulator core
// 6502 CPU interpreter, 2C02 PPU pipeline, and the memory bus between them.

// Public modules
pub mod bus;
pub mod cpu;
pub mod emulator;
pub mod error;
pub mod ppu;

// Re-export main types for convenience
pub use bus::Bus;
pub use cpu::Cpu;
pub use emulator::{Emulator, HarnessConfig};
pub use error::ImageLoadError;
pub use ppu::{Mirroring, Ppu};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_components() {
        // All core components can be instantiated
        let _cpu = Cpu::new();
        let _ppu = Ppu::new();
        let _bus = Bus::new();
        let _emulator = Emulator::new();
    }
}
