use super::{Cpu, CpuResult, constants::*};
use crate::mmu::Mmu;

// The pre-CB rotate encodings. Same shifts as their CB twins, but Z is
// always cleared instead of computed from the result.
impl Cpu {
    fn rotate_a(&mut self, rotated: u8) -> CpuResult<u8> {
        self.regs.a = rotated;
        self.regs.set_flag(FLAG_Z, false);
        Ok(0)
    }

    pub fn op_rlca(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        let rotated = self.rlc(self.regs.a);
        self.rotate_a(rotated)
    }
    pub fn op_rla(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        let rotated = self.rl(self.regs.a);
        self.rotate_a(rotated)
    }
    pub fn op_rrca(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        let rotated = self.rrc(self.regs.a);
        self.rotate_a(rotated)
    }
    pub fn op_rra(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        let rotated = self.rr(self.regs.a);
        self.rotate_a(rotated)
    }
}
