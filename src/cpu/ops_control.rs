use super::{Cpu, CpuResult, RunState, constants::*};
use crate::error::CoreError;
use crate::mmu::Mmu;

// --- Control Flow Implementations ---
impl Cpu {
    // NOP
    pub fn op_nop(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        Ok(0)
    }

    // JP a16 / JP HL / JP cc, a16
    fn conditional_jp_a16(&mut self, condition: bool, mmu: &Mmu) -> CpuResult<u8> {
        let addr = self.read_d16(mmu);
        if condition {
            self.regs.pc = addr;
            Ok(1) // Taken: 4 M-cycles total
        } else {
            Ok(0) // Not taken: 3 M-cycles total
        }
    }
    pub fn op_jp_a16(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.pc = self.read_d16(mmu);
        Ok(0)
    }
    pub fn op_jp_hl(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.pc = self.regs.hl();
        Ok(0)
    }
    pub fn op_jp_nz_a16(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_jp_a16(!self.regs.flag(FLAG_Z), mmu)
    }
    pub fn op_jp_z_a16(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_jp_a16(self.regs.flag(FLAG_Z), mmu)
    }
    pub fn op_jp_nc_a16(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_jp_a16(!self.regs.flag(FLAG_C), mmu)
    }
    pub fn op_jp_c_a16(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_jp_a16(self.regs.flag(FLAG_C), mmu)
    }

    // JR r8 / JR cc, r8 (signed displacement relative to the next instruction)
    fn conditional_jr(&mut self, condition: bool, mmu: &Mmu) -> CpuResult<u8> {
        let offset = self.read_r8(mmu);
        if condition {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
            Ok(1) // Taken: 3 M-cycles total
        } else {
            Ok(0) // Not taken: 2 M-cycles total
        }
    }
    pub fn op_jr_r8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let offset = self.read_r8(mmu);
        self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
        Ok(0)
    }
    pub fn op_jr_nz_r8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_jr(!self.regs.flag(FLAG_Z), mmu)
    }
    pub fn op_jr_z_r8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_jr(self.regs.flag(FLAG_Z), mmu)
    }
    pub fn op_jr_nc_r8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_jr(!self.regs.flag(FLAG_C), mmu)
    }
    pub fn op_jr_c_r8(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_jr(self.regs.flag(FLAG_C), mmu)
    }

    // CALL a16 / CALL cc, a16 (pushes the post-operand PC)
    fn conditional_call_a16(&mut self, condition: bool, mmu: &mut Mmu) -> CpuResult<u8> {
        let addr = self.read_d16(mmu);
        if condition {
            self.push_word(self.regs.pc, mmu);
            self.regs.pc = addr;
            Ok(3) // Taken: 6 M-cycles total
        } else {
            Ok(0) // Not taken: 3 M-cycles total
        }
    }
    pub fn op_call_a16(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        let addr = self.read_d16(mmu);
        self.push_word(self.regs.pc, mmu);
        self.regs.pc = addr;
        Ok(0)
    }
    pub fn op_call_nz_a16(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_call_a16(!self.regs.flag(FLAG_Z), mmu)
    }
    pub fn op_call_z_a16(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_call_a16(self.regs.flag(FLAG_Z), mmu)
    }
    pub fn op_call_nc_a16(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_call_a16(!self.regs.flag(FLAG_C), mmu)
    }
    pub fn op_call_c_a16(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_call_a16(self.regs.flag(FLAG_C), mmu)
    }

    // RET / RET cc / RETI
    fn conditional_ret(&mut self, condition: bool, mmu: &mut Mmu) -> CpuResult<u8> {
        if condition {
            self.regs.pc = self.pop_word(mmu);
            Ok(3) // Taken: 5 M-cycles total
        } else {
            Ok(0) // Not taken: 2 M-cycles total
        }
    }
    pub fn op_ret(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.pc = self.pop_word(mmu);
        Ok(0)
    }
    pub fn op_ret_nz(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_ret(!self.regs.flag(FLAG_Z), mmu)
    }
    pub fn op_ret_z(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_ret(self.regs.flag(FLAG_Z), mmu)
    }
    pub fn op_ret_nc(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_ret(!self.regs.flag(FLAG_C), mmu)
    }
    pub fn op_ret_c(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.conditional_ret(self.regs.flag(FLAG_C), mmu)
    }
    pub fn op_reti(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.pc = self.pop_word(mmu);
        self.ime = true;
        self.ime_scheduled = false;
        Ok(0)
    }

    // RST t (call to t * 0x08)
    fn rst(&mut self, vector: u16, mmu: &mut Mmu) -> CpuResult<u8> {
        self.push_word(self.regs.pc, mmu);
        self.regs.pc = vector;
        Ok(0)
    }
    pub fn op_rst_00h(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.rst(0x0000, mmu)
    }
    pub fn op_rst_08h(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.rst(0x0008, mmu)
    }
    pub fn op_rst_10h(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.rst(0x0010, mmu)
    }
    pub fn op_rst_18h(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.rst(0x0018, mmu)
    }
    pub fn op_rst_20h(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.rst(0x0020, mmu)
    }
    pub fn op_rst_28h(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.rst(0x0028, mmu)
    }
    pub fn op_rst_30h(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.rst(0x0030, mmu)
    }
    pub fn op_rst_38h(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        self.rst(0x0038, mmu)
    }

    // Interrupt master enable. DI is immediate, EI lands after the next
    // instruction.
    pub fn op_di(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.ime = false;
        self.ime_scheduled = false;
        Ok(0)
    }
    pub fn op_ei(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.ime_scheduled = true;
        Ok(0)
    }

    pub fn op_halt(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        if !self.ime && self.pending_interrupts(mmu) != 0 {
            // HALT bug: with IME clear and an interrupt already pending the
            // CPU falls straight through.
            log::warn!(
                "HALT bug at PC={:#06X}: IME=0 with pending interrupts",
                self.instruction_pc
            );
        } else {
            self.state = RunState::Halted;
        }
        Ok(0)
    }

    pub fn op_stop(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        // The operand byte is consumed; hardware expects 0x00 there.
        let padding = self.read_d8(mmu);
        if padding != 0 {
            log::warn!(
                "STOP at PC={:#06X} followed by {:#04X} instead of 0x00",
                self.instruction_pc,
                padding
            );
        }
        self.state = RunState::Stopped;
        Ok(0)
    }

    // Flags
    pub fn op_scf(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.set_flag(FLAG_N | FLAG_H, false);
        self.regs.set_flag(FLAG_C, true);
        Ok(0)
    }
    pub fn op_ccf(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        let carry = self.regs.flag(FLAG_C);
        self.regs.set_flag(FLAG_N | FLAG_H, false);
        self.regs.set_flag(FLAG_C, !carry);
        Ok(0)
    }

    // Misc ALU
    pub fn op_cpl(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.regs.a = !self.regs.a;
        self.regs.set_flag(FLAG_N | FLAG_H, true);
        Ok(0)
    }
    pub fn op_daa(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        self.daa();
        Ok(0)
    }

    // --- Reserved Opcode Handler ---
    pub fn handle_invalid_opcode(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        Err(CoreError::UnimplementedOpcode {
            opcode: self.fetched_opcode,
            cb_prefixed: false,
        })
    }

    // Never dispatched: step() descends into the CB table before the primary
    // entry for 0xCB is consulted.
    pub fn op_prefix_cb(&mut self, _mmu: &mut Mmu) -> CpuResult<u8> {
        Err(CoreError::UnimplementedOpcode {
            opcode: 0xCB,
            cb_prefixed: false,
        })
    }
}
