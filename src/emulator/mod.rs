// Emulator module - lockstep CPU/PPU co-simulation
//
// The scheduler is single-threaded and cooperative: one host step runs at
// most one CPU instruction (or burns one DMA stall tick), then ticks the
// PPU three times (NTSC). CPU bus traffic therefore completes before the
// PPU cycles of the same step, and anything the PPU signals (vblank flag,
// NMI) is observed by the next CPU instruction.

mod config;

pub use config::HarnessConfig;

use log::trace;

use crate::bus::Bus;
use crate::cpu::Cpu;

/// PPU dots per scheduler step (NTSC 3:1 against the CPU)
const PPU_TICKS_PER_STEP: u32 = 3;

/// The whole machine: CPU, bus (which owns the PPU), and scheduler state
pub struct Emulator {
    cpu: Cpu,
    bus: Bus,
    config: HarnessConfig,

    /// Remaining scheduler ticks the CPU is stalled by OAM DMA
    dma_stall: u32,
}

impl Emulator {
    /// Create an emulator with default harness settings
    pub fn new() -> Self {
        Self::with_config(HarnessConfig::default())
    }

    /// Create an emulator with explicit harness settings
    pub fn with_config(config: HarnessConfig) -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            config,
            dma_stall: 0,
        }
    }

    /// Reset the machine: CPU re-vectors through $FFFC, stalls are dropped
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
        self.dma_stall = 0;
    }

    /// Run one scheduler step
    ///
    /// Order within a step: service a pending NMI, execute one CPU
    /// instruction (unless DMA-stalled), then tick the PPU three times. A
    /// $4014 write stalls the CPU for 513 ticks, plus one when the cycle
    /// counter is odd at trigger time; the PPU keeps running throughout.
    ///
    /// # Returns
    /// `true` when the PPU completed a frame during this step.
    pub fn step(&mut self) -> bool {
        if self.dma_stall > 0 {
            self.dma_stall -= 1;
        } else {
            if self.bus.ppu().nmi_pending() {
                self.bus.ppu_mut().clear_nmi();
                self.cpu.nmi(&mut self.bus);
            }

            self.cpu.step(&mut self.bus);

            if let Some(stall) = self.bus.take_dma_stall() {
                self.dma_stall = stall as u32 + (self.cpu.cycles & 1) as u32;
            }
        }

        let mut frame_done = false;
        for _ in 0..PPU_TICKS_PER_STEP {
            frame_done |= self.bus.ppu_mut().tick();
        }
        frame_done
    }

    /// Step until the PPU finishes the current frame
    pub fn run_frame(&mut self) {
        while !self.step() {}
    }

    /// Run until the configured sentinel byte goes nonzero
    ///
    /// This is the test-harness contract: the program under test reports
    /// its result by storing a nonzero byte at the sentinel address.
    ///
    /// # Returns
    /// The sentinel byte, or `None` if the step limit ran out first.
    pub fn run_until_sentinel(&mut self) -> Option<u8> {
        for _ in 0..self.config.max_steps {
            let sentinel = self.bus.read(self.config.sentinel_address);
            if sentinel != 0 {
                return Some(sentinel);
            }

            if self.config.trace && self.dma_stall == 0 {
                trace!("{}", self.cpu.trace(&mut self.bus));
            }
            self.step();
        }
        None
    }

    /// Load a program image and point the CPU at the configured entry
    pub fn load_program(&mut self, image: &[u8]) {
        self.bus.load_program(image, self.config.load_address);
        self.cpu.pc = self.config.entry_point;
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_ticks_ppu_three_times() {
        let mut emulator = Emulator::new();
        // Park the CPU on NOPs
        emulator.bus_mut().load_program(&[0xEA; 16], 0x8000);
        emulator.cpu_mut().pc = 0x8000;

        emulator.step();
        assert_eq!(emulator.bus().ppu().cycle(), 3, "3 PPU dots per step");
    }

    #[test]
    fn test_nmi_consumed_between_instructions() {
        let mut emulator = Emulator::new();
        emulator.bus_mut().load_program(&[0xEA; 16], 0x8000);
        emulator.bus_mut().load_program(&[0xEA; 4], 0x9000);
        emulator.bus_mut().write_u16(0xFFFA, 0x9000);
        emulator.cpu_mut().pc = 0x8000;

        emulator.bus_mut().ppu_mut().nmi_pending = true;
        emulator.step();

        assert_eq!(
            emulator.cpu().pc,
            0x9001,
            "NMI vectored, then one instruction ran at the handler"
        );
        assert!(!emulator.bus().ppu().nmi_pending(), "the edge is consumed");
    }

    #[test]
    fn test_dma_stalls_cpu_but_not_ppu() {
        let mut emulator = Emulator::new();
        // STA $4014 with A = 0x02, then NOPs
        emulator
            .bus_mut()
            .load_program(&[0xA9, 0x02, 0x8D, 0x14, 0x40, 0xEA], 0x8000);
        emulator.cpu_mut().pc = 0x8000;

        emulator.step(); // LDA #$02
        emulator.step(); // STA $4014 triggers the transfer
        let pc_after_dma = emulator.cpu().pc;

        let stall = 513 + (emulator.cpu().cycles & 1) as u32;
        for _ in 0..stall {
            emulator.step();
            assert_eq!(emulator.cpu().pc, pc_after_dma, "CPU stalled");
        }

        emulator.step();
        assert_eq!(emulator.cpu().pc, pc_after_dma + 1, "stall drained");
        assert!(
            emulator.bus().ppu().scanline() >= 4,
            "PPU kept ticking through the stall"
        );
    }

    #[test]
    fn test_run_until_sentinel() {
        let config = HarnessConfig {
            sentinel_address: 0xF001,
            ..HarnessConfig::default()
        };
        let mut emulator = Emulator::with_config(config);

        // LDA #$2A; STA $F001; loop forever
        emulator.load_program(&[0xA9, 0x2A, 0x8D, 0x01, 0xF0, 0x4C, 0x05, 0x80]);

        assert_eq!(emulator.run_until_sentinel(), Some(0x2A));
    }

    #[test]
    fn test_sentinel_step_limit() {
        let config = HarnessConfig {
            max_steps: 100,
            ..HarnessConfig::default()
        };
        let mut emulator = Emulator::with_config(config);

        // Infinite loop, sentinel never written
        emulator.load_program(&[0x4C, 0x00, 0x80]);

        assert_eq!(emulator.run_until_sentinel(), None);
    }
}
