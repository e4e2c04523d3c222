// Bitwise logic instructions

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::flags;

impl crate::cpu::Cpu {
    /// AND - bitwise AND into A. Flags: Z, N.
    pub fn and(&mut self, bus: &mut Bus, operand: Operand) {
        self.a &= self.read_operand(bus, operand);
        self.update_zero_and_negative_flags(self.a);
    }

    /// ORA - bitwise OR into A. Flags: Z, N.
    pub fn ora(&mut self, bus: &mut Bus, operand: Operand) {
        self.a |= self.read_operand(bus, operand);
        self.update_zero_and_negative_flags(self.a);
    }

    /// EOR - bitwise exclusive OR into A. Flags: Z, N.
    pub fn eor(&mut self, bus: &mut Bus, operand: Operand) {
        self.a ^= self.read_operand(bus, operand);
        self.update_zero_and_negative_flags(self.a);
    }

    /// BIT - test bits against A
    ///
    /// Z from A & M, N and V copied straight from bits 7 and 6 of the
    /// memory byte. A is not modified.
    pub fn bit(&mut self, bus: &mut Bus, operand: Operand) {
        let m = self.read_operand(bus, operand);
        self.update_flag(flags::ZERO, (self.a & m) == 0);
        self.update_flag(flags::NEGATIVE, m & 0x80 != 0);
        self.update_flag(flags::OVERFLOW, m & 0x40 != 0);
    }
}
