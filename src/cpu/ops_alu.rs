use super::{Cpu, CpuResult, constants::*};
use crate::mmu::Mmu;

// --- ALU Implementations ---
impl Cpu {
    // ADD A, r / ADD A, (HL) / ADD A, d8
    alu_a!(op_add_a_b: add_a(b, false));
    alu_a!(op_add_a_c: add_a(c, false));
    alu_a!(op_add_a_d: add_a(d, false));
    alu_a!(op_add_a_e: add_a(e, false));
    alu_a!(op_add_a_h: add_a(h, false));
    alu_a!(op_add_a_l: add_a(l, false));
    alu_a!(op_add_a_hlp: add_a(hlp, false));
    alu_a!(op_add_a_a: add_a(a, false));
    pub fn op_add_a_d8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let value = self.read_d8(mmu);
        self.add_a(value, false);
        Ok(0)
    }

    // ADC A, r / ADC A, (HL) / ADC A, d8
    alu_a!(op_adc_a_b: add_a(b, true));
    alu_a!(op_adc_a_c: add_a(c, true));
    alu_a!(op_adc_a_d: add_a(d, true));
    alu_a!(op_adc_a_e: add_a(e, true));
    alu_a!(op_adc_a_h: add_a(h, true));
    alu_a!(op_adc_a_l: add_a(l, true));
    alu_a!(op_adc_a_hlp: add_a(hlp, true));
    alu_a!(op_adc_a_a: add_a(a, true));
    pub fn op_adc_a_d8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let value = self.read_d8(mmu);
        self.add_a(value, true);
        Ok(0)
    }

    // SUB A, r / SUB A, (HL) / SUB A, d8
    alu_a!(op_sub_a_b: sub_a(b, false));
    alu_a!(op_sub_a_c: sub_a(c, false));
    alu_a!(op_sub_a_d: sub_a(d, false));
    alu_a!(op_sub_a_e: sub_a(e, false));
    alu_a!(op_sub_a_h: sub_a(h, false));
    alu_a!(op_sub_a_l: sub_a(l, false));
    alu_a!(op_sub_a_hlp: sub_a(hlp, false));
    alu_a!(op_sub_a_a: sub_a(a, false));
    pub fn op_sub_a_d8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let value = self.read_d8(mmu);
        self.sub_a(value, false);
        Ok(0)
    }

    // SBC A, r / SBC A, (HL) / SBC A, d8
    alu_a!(op_sbc_a_b: sub_a(b, true));
    alu_a!(op_sbc_a_c: sub_a(c, true));
    alu_a!(op_sbc_a_d: sub_a(d, true));
    alu_a!(op_sbc_a_e: sub_a(e, true));
    alu_a!(op_sbc_a_h: sub_a(h, true));
    alu_a!(op_sbc_a_l: sub_a(l, true));
    alu_a!(op_sbc_a_hlp: sub_a(hlp, true));
    alu_a!(op_sbc_a_a: sub_a(a, true));
    pub fn op_sbc_a_d8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let value = self.read_d8(mmu);
        self.sub_a(value, true);
        Ok(0)
    }

    // AND A, r / AND A, (HL) / AND A, d8
    alu_a!(op_and_a_b: and_a(b, false));
    alu_a!(op_and_a_c: and_a(c, false));
    alu_a!(op_and_a_d: and_a(d, false));
    alu_a!(op_and_a_e: and_a(e, false));
    alu_a!(op_and_a_h: and_a(h, false));
    alu_a!(op_and_a_l: and_a(l, false));
    alu_a!(op_and_a_hlp: and_a(hlp, false));
    alu_a!(op_and_a_a: and_a(a, false));
    pub fn op_and_a_d8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let value = self.read_d8(mmu);
        self.and_a(value, false);
        Ok(0)
    }

    // XOR A, r / XOR A, (HL) / XOR A, d8
    alu_a!(op_xor_a_b: xor_a(b, false));
    alu_a!(op_xor_a_c: xor_a(c, false));
    alu_a!(op_xor_a_d: xor_a(d, false));
    alu_a!(op_xor_a_e: xor_a(e, false));
    alu_a!(op_xor_a_h: xor_a(h, false));
    alu_a!(op_xor_a_l: xor_a(l, false));
    alu_a!(op_xor_a_hlp: xor_a(hlp, false));
    alu_a!(op_xor_a_a: xor_a(a, false));
    pub fn op_xor_a_d8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let value = self.read_d8(mmu);
        self.xor_a(value, false);
        Ok(0)
    }

    // OR A, r / OR A, (HL) / OR A, d8
    alu_a!(op_or_a_b: or_a(b, false));
    alu_a!(op_or_a_c: or_a(c, false));
    alu_a!(op_or_a_d: or_a(d, false));
    alu_a!(op_or_a_e: or_a(e, false));
    alu_a!(op_or_a_h: or_a(h, false));
    alu_a!(op_or_a_l: or_a(l, false));
    alu_a!(op_or_a_hlp: or_a(hlp, false));
    alu_a!(op_or_a_a: or_a(a, false));
    pub fn op_or_a_d8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let value = self.read_d8(mmu);
        self.or_a(value, false);
        Ok(0)
    }

    // CP A, r / CP A, (HL) / CP A, d8
    alu_a!(op_cp_a_b: cp_a(b, false));
    alu_a!(op_cp_a_c: cp_a(c, false));
    alu_a!(op_cp_a_d: cp_a(d, false));
    alu_a!(op_cp_a_e: cp_a(e, false));
    alu_a!(op_cp_a_h: cp_a(h, false));
    alu_a!(op_cp_a_l: cp_a(l, false));
    alu_a!(op_cp_a_hlp: cp_a(hlp, false));
    alu_a!(op_cp_a_a: cp_a(a, false));
    pub fn op_cp_a_d8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let value = self.read_d8(mmu);
        self.cp_a(value, false);
        Ok(0)
    }

    // INC r / INC (HL)
    step_r8!(op_inc_b: b, inc_u8);
    step_r8!(op_inc_c: c, inc_u8);
    step_r8!(op_inc_d: d, inc_u8);
    step_r8!(op_inc_e: e, inc_u8);
    step_r8!(op_inc_h: h, inc_u8);
    step_r8!(op_inc_l: l, inc_u8);
    step_r8!(op_inc_a: a, inc_u8);
    pub fn op_inc_hlp(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let addr = self.regs.hl();
        let value = mmu.read_byte(addr);
        let result = self.inc_u8(value);
        mmu.write_byte(addr, result);
        Ok(0)
    }

    // DEC r / DEC (HL)
    step_r8!(op_dec_b: b, dec_u8);
    step_r8!(op_dec_c: c, dec_u8);
    step_r8!(op_dec_d: d, dec_u8);
    step_r8!(op_dec_e: e, dec_u8);
    step_r8!(op_dec_h: h, dec_u8);
    step_r8!(op_dec_l: l, dec_u8);
    step_r8!(op_dec_a: a, dec_u8);
    pub fn op_dec_hlp(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let addr = self.regs.hl();
        let value = mmu.read_byte(addr);
        let result = self.dec_u8(value);
        mmu.write_byte(addr, result);
        Ok(0)
    }

    // ADD HL, rr / ADD HL, SP
    pub fn op_add_hl_bc(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.add_hl(self.regs.bc());
        Ok(0)
    }
    pub fn op_add_hl_de(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.add_hl(self.regs.de());
        Ok(0)
    }
    pub fn op_add_hl_hl(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.add_hl(self.regs.hl());
        Ok(0)
    }
    pub fn op_add_hl_sp(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.add_hl(self.regs.sp);
        Ok(0)
    }

    // ADD SP, r8 (H and C come from the low byte of the addition)
    pub fn op_add_sp_r8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let offset = self.read_r8(mmu) as i16 as u16;
        let sp = self.regs.sp;
        let result = sp.wrapping_add(offset);
        self.regs.sp = result;
        self.regs.set_flag(FLAG_Z | FLAG_N, false);
        self.regs
            .set_flag(FLAG_H, (sp ^ offset ^ result) & 0x0010 != 0);
        self.regs
            .set_flag(FLAG_C, (sp ^ offset ^ result) & 0x0100 != 0);
        Ok(0)
    }

    // INC rr / INC SP (16-bit inc/dec leave the flags untouched)
    pub fn op_inc_bc(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.set_bc(self.regs.bc().wrapping_add(1));
        Ok(0)
    }
    pub fn op_inc_de(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.set_de(self.regs.de().wrapping_add(1));
        Ok(0)
    }
    pub fn op_inc_hl(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.set_hl(self.regs.hl().wrapping_add(1));
        Ok(0)
    }
    pub fn op_inc_sp(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        Ok(0)
    }

    // DEC rr / DEC SP
    pub fn op_dec_bc(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.set_bc(self.regs.bc().wrapping_sub(1));
        Ok(0)
    }
    pub fn op_dec_de(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.set_de(self.regs.de().wrapping_sub(1));
        Ok(0)
    }
    pub fn op_dec_hl(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.set_hl(self.regs.hl().wrapping_sub(1));
        Ok(0)
    }
    pub fn op_dec_sp(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        Ok(0)
    }
}
