// CPU execution and trace logging

use log::warn;

use crate::bus::Bus;
use crate::cpu::addressing::{AddressingMode, Operand};
use crate::cpu::opcodes::{OpcodeInfo, OPCODE_TABLE};
use crate::cpu::Cpu;

impl Cpu {
    /// Execute one instruction
    ///
    /// Fetches the opcode at PC, resolves the operand for its addressing
    /// mode (advancing PC past the operand bytes), and runs the operation.
    /// Unassigned opcodes log a diagnostic and execute as NOPs; execution
    /// always continues.
    ///
    /// # Returns
    /// The instruction's base cycle cost.
    pub fn step(&mut self, bus: &mut Bus) -> u8 {
        let opcode_pc = self.pc;
        let opcode = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);

        let info = &OPCODE_TABLE[opcode as usize];
        let operand = self.resolve_operand(info.mode, bus);

        self.execute_instruction(opcode, opcode_pc, operand, bus);

        self.cycles = self.cycles.wrapping_add(info.cycles as u64);
        info.cycles
    }

    /// Dispatch one decoded instruction
    #[allow(clippy::too_many_lines)]
    fn execute_instruction(&mut self, opcode: u8, opcode_pc: u16, operand: Operand, bus: &mut Bus) {
        match opcode {
            // Load/store
            0xA9 | 0xA5 | 0xB5 | 0xAD | 0xBD | 0xB9 | 0xA1 | 0xB1 => self.lda(bus, operand),
            0xA2 | 0xA6 | 0xB6 | 0xAE | 0xBE => self.ldx(bus, operand),
            0xA0 | 0xA4 | 0xB4 | 0xAC | 0xBC => self.ldy(bus, operand),
            0x85 | 0x95 | 0x8D | 0x9D | 0x99 | 0x81 | 0x91 => self.sta(bus, operand),
            0x86 | 0x96 | 0x8E => self.stx(bus, operand),
            0x84 | 0x94 | 0x8C => self.sty(bus, operand),

            // Register transfers
            0xAA => self.tax(),
            0xA8 => self.tay(),
            0x8A => self.txa(),
            0x98 => self.tya(),
            0xBA => self.tsx(),
            0x9A => self.txs(),

            // Arithmetic
            0x69 | 0x65 | 0x75 | 0x6D | 0x7D | 0x79 | 0x61 | 0x71 => self.adc(bus, operand),
            0xE9 | 0xE5 | 0xF5 | 0xED | 0xFD | 0xF9 | 0xE1 | 0xF1 => self.sbc(bus, operand),
            0xE6 | 0xF6 | 0xEE | 0xFE => self.inc(bus, operand),
            0xC6 | 0xD6 | 0xCE | 0xDE => self.dec(bus, operand),
            0xE8 => self.inx(),
            0xC8 => self.iny(),
            0xCA => self.dex(),
            0x88 => self.dey(),

            // Shift/rotate
            0x0A | 0x06 | 0x16 | 0x0E | 0x1E => self.asl(bus, operand),
            0x4A | 0x46 | 0x56 | 0x4E | 0x5E => self.lsr(bus, operand),
            0x2A | 0x26 | 0x36 | 0x2E | 0x3E => self.rol(bus, operand),
            0x6A | 0x66 | 0x76 | 0x6E | 0x7E => self.ror(bus, operand),

            // Bitwise
            0x29 | 0x25 | 0x35 | 0x2D | 0x3D | 0x39 | 0x21 | 0x31 => self.and(bus, operand),
            0x09 | 0x05 | 0x15 | 0x0D | 0x1D | 0x19 | 0x01 | 0x11 => self.ora(bus, operand),
            0x49 | 0x45 | 0x55 | 0x4D | 0x5D | 0x59 | 0x41 | 0x51 => self.eor(bus, operand),
            0x24 | 0x2C => self.bit(bus, operand),

            // Compare
            0xC9 | 0xC5 | 0xD5 | 0xCD | 0xDD | 0xD9 | 0xC1 | 0xD1 => self.cmp(bus, operand),
            0xE0 | 0xE4 | 0xEC => self.cpx(bus, operand),
            0xC0 | 0xC4 | 0xCC => self.cpy(bus, operand),

            // Branches
            0x90 => self.bcc(operand),
            0xB0 => self.bcs(operand),
            0xF0 => self.beq(operand),
            0x30 => self.bmi(operand),
            0xD0 => self.bne(operand),
            0x10 => self.bpl(operand),
            0x50 => self.bvc(operand),
            0x70 => self.bvs(operand),

            // Jumps and subroutines
            0x4C | 0x6C => self.jmp(operand),
            0x20 => self.jsr(bus, operand),
            0x60 => self.rts(bus),
            0x00 => self.brk(bus),
            0x40 => self.rti(bus),

            // Stack
            0x48 => self.pha(bus),
            0x68 => self.pla(bus),
            0x08 => self.php(bus),
            0x28 => self.plp(bus),

            // Flag operations
            0x18 => self.clc(),
            0x38 => self.sec(),
            0x58 => self.cli(),
            0x78 => self.sei(),
            0xD8 => self.cld(),
            0xF8 => self.sed(),
            0xB8 => self.clv(),

            // Other
            0xEA => self.nop(),

            _ => {
                warn!(
                    "unknown opcode ${:02X} at ${:04X}; executing as NOP",
                    opcode, opcode_pc
                );
            }
        }
    }

    /// Format a one-line execution trace for the instruction at PC
    ///
    /// Layout: address, raw bytes, disassembly, register file, cycle count.
    /// The harness emits this per instruction when tracing is enabled.
    pub fn trace(&self, bus: &mut Bus) -> String {
        let pc = self.pc;
        let opcode = bus.read(pc);
        let info = &OPCODE_TABLE[opcode as usize];

        let byte2 = if info.bytes >= 2 {
            bus.read(pc.wrapping_add(1))
        } else {
            0
        };
        let byte3 = if info.bytes >= 3 {
            bus.read(pc.wrapping_add(2))
        } else {
            0
        };

        let hex_bytes = match info.bytes {
            2 => format!("{:02X} {:02X}   ", opcode, byte2),
            3 => format!("{:02X} {:02X} {:02X}", opcode, byte2, byte3),
            _ => format!("{:02X}      ", opcode),
        };

        let disassembly = disassemble(pc, info, byte2, byte3);

        format!(
            "{:04X}  {}  {:<14}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            pc, hex_bytes, disassembly, self.a, self.x, self.y, self.status, self.sp, self.cycles
        )
    }
}

/// Render mnemonic + operand for one decoded instruction
fn disassemble(pc: u16, info: &OpcodeInfo, byte2: u8, byte3: u8) -> String {
    let abs = u16::from_le_bytes([byte2, byte3]);
    match info.mode {
        AddressingMode::Implied => info.mnemonic.to_string(),
        AddressingMode::Accumulator => format!("{} A", info.mnemonic),
        AddressingMode::Immediate => format!("{} #${:02X}", info.mnemonic, byte2),
        AddressingMode::ZeroPage => format!("{} ${:02X}", info.mnemonic, byte2),
        AddressingMode::ZeroPageX => format!("{} ${:02X},X", info.mnemonic, byte2),
        AddressingMode::ZeroPageY => format!("{} ${:02X},Y", info.mnemonic, byte2),
        AddressingMode::Relative => {
            let target = pc
                .wrapping_add(2)
                .wrapping_add(byte2 as i8 as i16 as u16);
            format!("{} ${:04X}", info.mnemonic, target)
        }
        AddressingMode::Absolute => format!("{} ${:04X}", info.mnemonic, abs),
        AddressingMode::AbsoluteX => format!("{} ${:04X},X", info.mnemonic, abs),
        AddressingMode::AbsoluteY => format!("{} ${:04X},Y", info.mnemonic, abs),
        AddressingMode::Indirect => format!("{} (${:04X})", info.mnemonic, abs),
        AddressingMode::IndexedIndirect => format!("{} (${:02X},X)", info.mnemonic, byte2),
        AddressingMode::IndirectIndexed => format!("{} (${:02X}),Y", info.mnemonic, byte2),
    }
}
