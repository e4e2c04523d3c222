// Shift and rotate instructions
//
// All four operate on either the accumulator or a memory location via the
// tagged operand; the memory forms are read-modify-write. The carry flag
// receives the bit shifted out (bit 7 going left, bit 0 going right), and
// the rotates feed the old carry into the vacated bit.

use crate::bus::Bus;
use crate::cpu::addressing::Operand;

impl crate::cpu::Cpu {
    /// Apply a shift/rotate to the operand target and update Z/N
    fn modify_shift_target(
        &mut self,
        bus: &mut Bus,
        operand: Operand,
        f: impl Fn(&mut Self, u8) -> u8,
    ) {
        match operand {
            Operand::Accumulator => {
                let value = self.a;
                let result = f(self, value);
                self.a = result;
                self.update_zero_and_negative_flags(result);
            }
            Operand::Address(addr) => {
                let value = bus.read(addr);
                let result = f(self, value);
                bus.write(addr, result);
                self.update_zero_and_negative_flags(result);
            }
            Operand::None => unreachable!("shift without a target"),
        }
    }

    /// ASL - arithmetic shift left: C <- [76543210] <- 0
    pub fn asl(&mut self, bus: &mut Bus, operand: Operand) {
        self.modify_shift_target(bus, operand, |cpu, value| {
            cpu.set_carry(value & 0x80 != 0);
            value << 1
        });
    }

    /// LSR - logical shift right: 0 -> [76543210] -> C
    pub fn lsr(&mut self, bus: &mut Bus, operand: Operand) {
        self.modify_shift_target(bus, operand, |cpu, value| {
            cpu.set_carry(value & 0x01 != 0);
            value >> 1
        });
    }

    /// ROL - rotate left through carry: C <- [76543210] <- C
    pub fn rol(&mut self, bus: &mut Bus, operand: Operand) {
        self.modify_shift_target(bus, operand, |cpu, value| {
            let carry_in = if cpu.get_carry() { 1 } else { 0 };
            cpu.set_carry(value & 0x80 != 0);
            (value << 1) | carry_in
        });
    }

    /// ROR - rotate right through carry: C -> [76543210] -> C
    pub fn ror(&mut self, bus: &mut Bus, operand: Operand) {
        self.modify_shift_target(bus, operand, |cpu, value| {
            let carry_in = if cpu.get_carry() { 0x80 } else { 0 };
            cpu.set_carry(value & 0x01 != 0);
            (value >> 1) | carry_in
        });
    }
}
