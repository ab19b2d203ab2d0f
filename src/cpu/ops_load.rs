use super::{Cpu, CpuResult};
use crate::mmu::Mmu;

// --- Load and Stack Implementations ---
impl Cpu {
    // LD r, r' (0x40-0x7F block, minus HALT)
    ld_r_r!(op_ld_b_b: b <- b);
    ld_r_r!(op_ld_b_c: b <- c);
    ld_r_r!(op_ld_b_d: b <- d);
    ld_r_r!(op_ld_b_e: b <- e);
    ld_r_r!(op_ld_b_h: b <- h);
    ld_r_r!(op_ld_b_l: b <- l);
    ld_r_r!(op_ld_b_a: b <- a);
    ld_r_r!(op_ld_c_b: c <- b);
    ld_r_r!(op_ld_c_c: c <- c);
    ld_r_r!(op_ld_c_d: c <- d);
    ld_r_r!(op_ld_c_e: c <- e);
    ld_r_r!(op_ld_c_h: c <- h);
    ld_r_r!(op_ld_c_l: c <- l);
    ld_r_r!(op_ld_c_a: c <- a);
    ld_r_r!(op_ld_d_b: d <- b);
    ld_r_r!(op_ld_d_c: d <- c);
    ld_r_r!(op_ld_d_d: d <- d);
    ld_r_r!(op_ld_d_e: d <- e);
    ld_r_r!(op_ld_d_h: d <- h);
    ld_r_r!(op_ld_d_l: d <- l);
    ld_r_r!(op_ld_d_a: d <- a);
    ld_r_r!(op_ld_e_b: e <- b);
    ld_r_r!(op_ld_e_c: e <- c);
    ld_r_r!(op_ld_e_d: e <- d);
    ld_r_r!(op_ld_e_e: e <- e);
    ld_r_r!(op_ld_e_h: e <- h);
    ld_r_r!(op_ld_e_l: e <- l);
    ld_r_r!(op_ld_e_a: e <- a);
    ld_r_r!(op_ld_h_b: h <- b);
    ld_r_r!(op_ld_h_c: h <- c);
    ld_r_r!(op_ld_h_d: h <- d);
    ld_r_r!(op_ld_h_e: h <- e);
    ld_r_r!(op_ld_h_h: h <- h);
    ld_r_r!(op_ld_h_l: h <- l);
    ld_r_r!(op_ld_h_a: h <- a);
    ld_r_r!(op_ld_l_b: l <- b);
    ld_r_r!(op_ld_l_c: l <- c);
    ld_r_r!(op_ld_l_d: l <- d);
    ld_r_r!(op_ld_l_e: l <- e);
    ld_r_r!(op_ld_l_h: l <- h);
    ld_r_r!(op_ld_l_l: l <- l);
    ld_r_r!(op_ld_l_a: l <- a);
    ld_r_r!(op_ld_a_b: a <- b);
    ld_r_r!(op_ld_a_c: a <- c);
    ld_r_r!(op_ld_a_d: a <- d);
    ld_r_r!(op_ld_a_e: a <- e);
    ld_r_r!(op_ld_a_h: a <- h);
    ld_r_r!(op_ld_a_l: a <- l);
    ld_r_r!(op_ld_a_a: a <- a);

    // LD r, (HL)
    ld_via_hlp!(op_ld_b_hlp: b <- hlp);
    ld_via_hlp!(op_ld_c_hlp: c <- hlp);
    ld_via_hlp!(op_ld_d_hlp: d <- hlp);
    ld_via_hlp!(op_ld_e_hlp: e <- hlp);
    ld_via_hlp!(op_ld_h_hlp: h <- hlp);
    ld_via_hlp!(op_ld_l_hlp: l <- hlp);
    ld_via_hlp!(op_ld_a_hlp: a <- hlp);

    // LD (HL), r
    ld_via_hlp!(op_ld_hlp_b: hlp <- b);
    ld_via_hlp!(op_ld_hlp_c: hlp <- c);
    ld_via_hlp!(op_ld_hlp_d: hlp <- d);
    ld_via_hlp!(op_ld_hlp_e: hlp <- e);
    ld_via_hlp!(op_ld_hlp_h: hlp <- h);
    ld_via_hlp!(op_ld_hlp_l: hlp <- l);
    ld_via_hlp!(op_ld_hlp_a: hlp <- a);

    // LD r, d8
    ld_r_d8!(op_ld_b_d8: b);
    ld_r_d8!(op_ld_c_d8: c);
    ld_r_d8!(op_ld_d_d8: d);
    ld_r_d8!(op_ld_e_d8: e);
    ld_r_d8!(op_ld_h_d8: h);
    ld_r_d8!(op_ld_l_d8: l);
    ld_r_d8!(op_ld_a_d8: a);

    // LD (HL), d8
    pub fn op_ld_hlp_d8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let value = self.read_d8(mmu);
        mmu.write_byte(self.regs.hl(), value);
        Ok(0)
    }

    // LD rr, d16 / LD SP, d16
    pub fn op_ld_bc_d16(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let value = self.read_d16(mmu);
        self.regs.set_bc(value);
        Ok(0)
    }
    pub fn op_ld_de_d16(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let value = self.read_d16(mmu);
        self.regs.set_de(value);
        Ok(0)
    }
    pub fn op_ld_hl_d16(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let value = self.read_d16(mmu);
        self.regs.set_hl(value);
        Ok(0)
    }
    pub fn op_ld_sp_d16(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.sp = self.read_d16(mmu);
        Ok(0)
    }

    // Indirect loads through BC/DE
    pub fn op_ld_bcp_a(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        mmu.write_byte(self.regs.bc(), self.regs.a);
        Ok(0)
    }
    pub fn op_ld_dep_a(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        mmu.write_byte(self.regs.de(), self.regs.a);
        Ok(0)
    }
    pub fn op_ld_a_bcp(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.a = mmu.read_byte(self.regs.bc());
        Ok(0)
    }
    pub fn op_ld_a_dep(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.a = mmu.read_byte(self.regs.de());
        Ok(0)
    }

    // LD (HL+)/(HL-), A and the reverse
    pub fn op_ld_hli_a(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let hl = self.regs.hl();
        mmu.write_byte(hl, self.regs.a);
        self.regs.set_hl(hl.wrapping_add(1));
        Ok(0)
    }
    pub fn op_ld_hld_a(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let hl = self.regs.hl();
        mmu.write_byte(hl, self.regs.a);
        self.regs.set_hl(hl.wrapping_sub(1));
        Ok(0)
    }
    pub fn op_ld_a_hli(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let hl = self.regs.hl();
        self.regs.a = mmu.read_byte(hl);
        self.regs.set_hl(hl.wrapping_add(1));
        Ok(0)
    }
    pub fn op_ld_a_hld(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let hl = self.regs.hl();
        self.regs.a = mmu.read_byte(hl);
        self.regs.set_hl(hl.wrapping_sub(1));
        Ok(0)
    }

    // Absolute loads
    pub fn op_ld_a16_sp(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let addr = self.read_d16(mmu);
        mmu.write_word(addr, self.regs.sp);
        Ok(0)
    }
    pub fn op_ld_a16_a(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let addr = self.read_d16(mmu);
        mmu.write_byte(addr, self.regs.a);
        Ok(0)
    }
    pub fn op_ld_a_a16(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let addr = self.read_d16(mmu);
        self.regs.a = mmu.read_byte(addr);
        Ok(0)
    }

    // High-page loads (0xFF00 + offset)
    pub fn op_ldh_a8_a(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let offset = self.read_d8(mmu);
        mmu.write_byte(0xFF00 | offset as u16, self.regs.a);
        Ok(0)
    }
    pub fn op_ldh_a_a8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let offset = self.read_d8(mmu);
        self.regs.a = mmu.read_byte(0xFF00 | offset as u16);
        Ok(0)
    }
    pub fn op_ld_cp_a(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        mmu.write_byte(0xFF00 | self.regs.c as u16, self.regs.a);
        Ok(0)
    }
    pub fn op_ld_a_cp(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.a = mmu.read_byte(0xFF00 | self.regs.c as u16);
        Ok(0)
    }

    // Stack pointer transfers
    pub fn op_ld_sp_hl(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.sp = self.regs.hl();
        Ok(0)
    }
    // Same flag derivation as ADD SP, r8: H and C from the low byte.
    pub fn op_ld_hl_sp_r8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        use super::{FLAG_C, FLAG_H, FLAG_N, FLAG_Z};
        let offset = self.read_r8(mmu) as i16 as u16;
        let sp = self.regs.sp;
        let result = sp.wrapping_add(offset);
        self.regs.set_hl(result);
        self.regs.set_flag(FLAG_Z | FLAG_N, false);
        self.regs
            .set_flag(FLAG_H, (sp ^ offset ^ result) & 0x0010 != 0);
        self.regs
            .set_flag(FLAG_C, (sp ^ offset ^ result) & 0x0100 != 0);
        Ok(0)
    }

    // PUSH rr / POP rr
    pub fn op_push_bc(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.push_word(self.regs.bc(), mmu);
        Ok(0)
    }
    pub fn op_push_de(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.push_word(self.regs.de(), mmu);
        Ok(0)
    }
    pub fn op_push_hl(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.push_word(self.regs.hl(), mmu);
        Ok(0)
    }
    pub fn op_push_af(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.push_word(self.regs.af(), mmu);
        Ok(0)
    }
    pub fn op_pop_bc(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let value = self.pop_word(mmu);
        self.regs.set_bc(value);
        Ok(0)
    }
    pub fn op_pop_de(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let value = self.pop_word(mmu);
        self.regs.set_de(value);
        Ok(0)
    }
    pub fn op_pop_hl(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let value = self.pop_word(mmu);
        self.regs.set_hl(value);
        Ok(0)
    }
    pub fn op_pop_af(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        // set_af forces the low nibble of F to zero.
        let value = self.pop_word(mmu);
        self.regs.set_af(value);
        Ok(0)
    }
}
