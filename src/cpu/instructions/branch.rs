// Branch instructions
//
// The relative mode resolves the target before dispatch, so every branch is
// a flag test plus an optional PC assignment. An untaken branch leaves PC at
// the byte after the displacement operand.

use crate::cpu::addressing::Operand;
use crate::cpu::flags;

impl crate::cpu::Cpu {
    /// Take the branch when the flag matches the wanted state
    fn branch_if(&mut self, operand: Operand, flag: u8, wanted: bool) {
        if self.get_flag(flag) == wanted {
            self.pc = operand.address();
        }
    }

    /// BCC - branch if carry clear
    pub fn bcc(&mut self, operand: Operand) {
        self.branch_if(operand, flags::CARRY, false);
    }

    /// BCS - branch if carry set
    pub fn bcs(&mut self, operand: Operand) {
        self.branch_if(operand, flags::CARRY, true);
    }

    /// BEQ - branch if zero set
    pub fn beq(&mut self, operand: Operand) {
        self.branch_if(operand, flags::ZERO, true);
    }

    /// BNE - branch if zero clear
    pub fn bne(&mut self, operand: Operand) {
        self.branch_if(operand, flags::ZERO, false);
    }

    /// BMI - branch if negative set
    pub fn bmi(&mut self, operand: Operand) {
        self.branch_if(operand, flags::NEGATIVE, true);
    }

    /// BPL - branch if negative clear
    pub fn bpl(&mut self, operand: Operand) {
        self.branch_if(operand, flags::NEGATIVE, false);
    }

    /// BVS - branch if overflow set
    pub fn bvs(&mut self, operand: Operand) {
        self.branch_if(operand, flags::OVERFLOW, true);
    }

    /// BVC - branch if overflow clear
    pub fn bvc(&mut self, operand: Operand) {
        self.branch_if(operand, flags::OVERFLOW, false);
    }
}
