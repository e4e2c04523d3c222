// Load and store instructions

use crate::bus::Bus;
use crate::cpu::addressing::Operand;

impl crate::cpu::Cpu {
    /// LDA - load accumulator. Flags: Z, N.
    pub fn lda(&mut self, bus: &mut Bus, operand: Operand) {
        self.a = self.read_operand(bus, operand);
        self.update_zero_and_negative_flags(self.a);
    }

    /// LDX - load X. Flags: Z, N.
    pub fn ldx(&mut self, bus: &mut Bus, operand: Operand) {
        self.x = self.read_operand(bus, operand);
        self.update_zero_and_negative_flags(self.x);
    }

    /// LDY - load Y. Flags: Z, N.
    pub fn ldy(&mut self, bus: &mut Bus, operand: Operand) {
        self.y = self.read_operand(bus, operand);
        self.update_zero_and_negative_flags(self.y);
    }

    /// STA - store accumulator. No flags.
    pub fn sta(&mut self, bus: &mut Bus, operand: Operand) {
        bus.write(operand.address(), self.a);
    }

    /// STX - store X. No flags.
    pub fn stx(&mut self, bus: &mut Bus, operand: Operand) {
        bus.write(operand.address(), self.x);
    }

    /// STY - store Y. No flags.
    pub fn sty(&mut self, bus: &mut Bus, operand: Operand) {
        bus.write(operand.address(), self.y);
    }
}
