use super::{Cpu, CpuResult};
use crate::mmu::Mmu;
use lazy_static::lazy_static;

/// One decoded operation: table metadata plus its executor. `cycles` is
/// the base M-cycle cost (the not-taken cost for conditionals); the
/// executor returns the extra M-cycles of a taken branch.
#[derive(Clone)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub description: &'static str,
    pub length: u8,
    pub cycles: u8,
    pub execute: fn(&mut Cpu, &mut Mmu) -> CpuResult<u8>,
}

impl Instruction {
    pub const fn new(
        mnemonic: &'static str,
        description: &'static str,
        length: u8,
        cycles: u8,
        execute: fn(&mut Cpu, &mut Mmu) -> CpuResult<u8>,
    ) -> Self {
        Instruction {
            mnemonic,
            description,
            length,
            cycles,
            execute,
        }
    }

    /// Explicit marker for the eleven opcodes the DMG reserves.
    pub const fn invalid() -> Self {
        Instruction {
            mnemonic: "INVALID",
            description: "Reserved on the DMG; decoding it is fatal.",
            length: 1,
            cycles: 1,
            execute: Cpu::handle_invalid_opcode,
        }
    }
}

macro_rules! instr {
    ($mne:expr, $desc:expr, $len:expr, $cyc:expr, $exec:expr) => {
        Instruction::new($mne, $desc, $len, $cyc, $exec)
    };
}
macro_rules! invalid {
    () => {
        Instruction::invalid()
    };
}

lazy_static! {
    // Primary instruction table (0x00 - 0xFF). Cycle counts are M-cycles.
    pub static ref INSTRUCTIONS: [Instruction; 256] = [
        // --- 0x00 ---
        instr!("NOP", "No operation.", 1, 1, Cpu::op_nop), // 00
        instr!("LD BC, d16", "Load a 16-bit immediate into BC.", 3, 3, Cpu::op_ld_bc_d16), // 01
        instr!("LD (BC), A", "Store A at the address in BC.", 1, 2, Cpu::op_ld_bcp_a), // 02
        instr!("INC BC", "Increment BC; flags untouched.", 1, 2, Cpu::op_inc_bc), // 03
        instr!("INC B", "Increment B.", 1, 1, Cpu::op_inc_b), // 04
        instr!("DEC B", "Decrement B.", 1, 1, Cpu::op_dec_b), // 05
        instr!("LD B, d8", "Load an 8-bit immediate into B.", 2, 2, Cpu::op_ld_b_d8), // 06
        instr!("RLCA", "Rotate A left circular; Z cleared.", 1, 1, Cpu::op_rlca), // 07
        instr!("LD (a16), SP", "Store SP at a 16-bit address.", 3, 5, Cpu::op_ld_a16_sp), // 08
        instr!("ADD HL, BC", "Add BC to HL.", 1, 2, Cpu::op_add_hl_bc), // 09
        instr!("LD A, (BC)", "Load A from the address in BC.", 1, 2, Cpu::op_ld_a_bcp), // 0A
        instr!("DEC BC", "Decrement BC; flags untouched.", 1, 2, Cpu::op_dec_bc), // 0B
        instr!("INC C", "Increment C.", 1, 1, Cpu::op_inc_c), // 0C
        instr!("DEC C", "Decrement C.", 1, 1, Cpu::op_dec_c), // 0D
        instr!("LD C, d8", "Load an 8-bit immediate into C.", 2, 2, Cpu::op_ld_c_d8), // 0E
        instr!("RRCA", "Rotate A right circular; Z cleared.", 1, 1, Cpu::op_rrca), // 0F
        // --- 0x10 ---
        instr!("STOP", "Stop the system clock until the host resumes.", 2, 1, Cpu::op_stop), // 10
        instr!("LD DE, d16", "Load a 16-bit immediate into DE.", 3, 3, Cpu::op_ld_de_d16), // 11
        instr!("LD (DE), A", "Store A at the address in DE.", 1, 2, Cpu::op_ld_dep_a), // 12
        instr!("INC DE", "Increment DE; flags untouched.", 1, 2, Cpu::op_inc_de), // 13
        instr!("INC D", "Increment D.", 1, 1, Cpu::op_inc_d), // 14
        instr!("DEC D", "Decrement D.", 1, 1, Cpu::op_dec_d), // 15
        instr!("LD D, d8", "Load an 8-bit immediate into D.", 2, 2, Cpu::op_ld_d_d8), // 16
        instr!("RLA", "Rotate A left through carry; Z cleared.", 1, 1, Cpu::op_rla), // 17
        instr!("JR r8", "Jump by a signed 8-bit displacement.", 2, 3, Cpu::op_jr_r8), // 18
        instr!("ADD HL, DE", "Add DE to HL.", 1, 2, Cpu::op_add_hl_de), // 19
        instr!("LD A, (DE)", "Load A from the address in DE.", 1, 2, Cpu::op_ld_a_dep), // 1A
        instr!("DEC DE", "Decrement DE; flags untouched.", 1, 2, Cpu::op_dec_de), // 1B
        instr!("INC E", "Increment E.", 1, 1, Cpu::op_inc_e), // 1C
        instr!("DEC E", "Decrement E.", 1, 1, Cpu::op_dec_e), // 1D
        instr!("LD E, d8", "Load an 8-bit immediate into E.", 2, 2, Cpu::op_ld_e_d8), // 1E
        instr!("RRA", "Rotate A right through carry; Z cleared.", 1, 1, Cpu::op_rra), // 1F
        // --- 0x20 ---
        instr!("JR NZ, r8", "Jump by a signed displacement if Z is clear.", 2, 2, Cpu::op_jr_nz_r8), // 20
        instr!("LD HL, d16", "Load a 16-bit immediate into HL.", 3, 3, Cpu::op_ld_hl_d16), // 21
        instr!("LD (HL+), A", "Store A at HL, then increment HL.", 1, 2, Cpu::op_ld_hli_a), // 22
        instr!("INC HL", "Increment HL; flags untouched.", 1, 2, Cpu::op_inc_hl), // 23
        instr!("INC H", "Increment H.", 1, 1, Cpu::op_inc_h), // 24
        instr!("DEC H", "Decrement H.", 1, 1, Cpu::op_dec_h), // 25
        instr!("LD H, d8", "Load an 8-bit immediate into H.", 2, 2, Cpu::op_ld_h_d8), // 26
        instr!("DAA", "Decimal-adjust A after a BCD add or subtract.", 1, 1, Cpu::op_daa), // 27
        instr!("JR Z, r8", "Jump by a signed displacement if Z is set.", 2, 2, Cpu::op_jr_z_r8), // 28
        instr!("ADD HL, HL", "Add HL to itself.", 1, 2, Cpu::op_add_hl_hl), // 29
        instr!("LD A, (HL+)", "Load A from HL, then increment HL.", 1, 2, Cpu::op_ld_a_hli), // 2A
        instr!("DEC HL", "Decrement HL; flags untouched.", 1, 2, Cpu::op_dec_hl), // 2B
        instr!("INC L", "Increment L.", 1, 1, Cpu::op_inc_l), // 2C
        instr!("DEC L", "Decrement L.", 1, 1, Cpu::op_dec_l), // 2D
        instr!("LD L, d8", "Load an 8-bit immediate into L.", 2, 2, Cpu::op_ld_l_d8), // 2E
        instr!("CPL", "Complement A; sets N and H.", 1, 1, Cpu::op_cpl), // 2F
        // --- 0x30 ---
        instr!("JR NC, r8", "Jump by a signed displacement if C is clear.", 2, 2, Cpu::op_jr_nc_r8), // 30
        instr!("LD SP, d16", "Load a 16-bit immediate into SP.", 3, 3, Cpu::op_ld_sp_d16), // 31
        instr!("LD (HL-), A", "Store A at HL, then decrement HL.", 1, 2, Cpu::op_ld_hld_a), // 32
        instr!("INC SP", "Increment SP; flags untouched.", 1, 2, Cpu::op_inc_sp), // 33
        instr!("INC (HL)", "Increment the byte at HL.", 1, 3, Cpu::op_inc_hlp), // 34
        instr!("DEC (HL)", "Decrement the byte at HL.", 1, 3, Cpu::op_dec_hlp), // 35
        instr!("LD (HL), d8", "Store an 8-bit immediate at HL.", 2, 3, Cpu::op_ld_hlp_d8), // 36
        instr!("SCF", "Set the carry flag.", 1, 1, Cpu::op_scf), // 37
        instr!("JR C, r8", "Jump by a signed displacement if C is set.", 2, 2, Cpu::op_jr_c_r8), // 38
        instr!("ADD HL, SP", "Add SP to HL.", 1, 2, Cpu::op_add_hl_sp), // 39
        instr!("LD A, (HL-)", "Load A from HL, then decrement HL.", 1, 2, Cpu::op_ld_a_hld), // 3A
        instr!("DEC SP", "Decrement SP; flags untouched.", 1, 2, Cpu::op_dec_sp), // 3B
        instr!("INC A", "Increment A.", 1, 1, Cpu::op_inc_a), // 3C
        instr!("DEC A", "Decrement A.", 1, 1, Cpu::op_dec_a), // 3D
        instr!("LD A, d8", "Load an 8-bit immediate into A.", 2, 2, Cpu::op_ld_a_d8), // 3E
        instr!("CCF", "Complement the carry flag.", 1, 1, Cpu::op_ccf), // 3F
        // --- 0x40 ---
        instr!("LD B, B", "Copy B into B.", 1, 1, Cpu::op_ld_b_b), // 40
        instr!("LD B, C", "Copy C into B.", 1, 1, Cpu::op_ld_b_c), // 41
        instr!("LD B, D", "Copy D into B.", 1, 1, Cpu::op_ld_b_d), // 42
        instr!("LD B, E", "Copy E into B.", 1, 1, Cpu::op_ld_b_e), // 43
        instr!("LD B, H", "Copy H into B.", 1, 1, Cpu::op_ld_b_h), // 44
        instr!("LD B, L", "Copy L into B.", 1, 1, Cpu::op_ld_b_l), // 45
        instr!("LD B, (HL)", "Load B from the address in HL.", 1, 2, Cpu::op_ld_b_hlp), // 46
        instr!("LD B, A", "Copy A into B.", 1, 1, Cpu::op_ld_b_a), // 47
        instr!("LD C, B", "Copy B into C.", 1, 1, Cpu::op_ld_c_b), // 48
        instr!("LD C, C", "Copy C into C.", 1, 1, Cpu::op_ld_c_c), // 49
        instr!("LD C, D", "Copy D into C.", 1, 1, Cpu::op_ld_c_d), // 4A
        instr!("LD C, E", "Copy E into C.", 1, 1, Cpu::op_ld_c_e), // 4B
        instr!("LD C, H", "Copy H into C.", 1, 1, Cpu::op_ld_c_h), // 4C
        instr!("LD C, L", "Copy L into C.", 1, 1, Cpu::op_ld_c_l), // 4D
        instr!("LD C, (HL)", "Load C from the address in HL.", 1, 2, Cpu::op_ld_c_hlp), // 4E
        instr!("LD C, A", "Copy A into C.", 1, 1, Cpu::op_ld_c_a), // 4F
        // --- 0x50 ---
        instr!("LD D, B", "Copy B into D.", 1, 1, Cpu::op_ld_d_b), // 50
        instr!("LD D, C", "Copy C into D.", 1, 1, Cpu::op_ld_d_c), // 51
        instr!("LD D, D", "Copy D into D.", 1, 1, Cpu::op_ld_d_d), // 52
        instr!("LD D, E", "Copy E into D.", 1, 1, Cpu::op_ld_d_e), // 53
        instr!("LD D, H", "Copy H into D.", 1, 1, Cpu::op_ld_d_h), // 54
        instr!("LD D, L", "Copy L into D.", 1, 1, Cpu::op_ld_d_l), // 55
        instr!("LD D, (HL)", "Load D from the address in HL.", 1, 2, Cpu::op_ld_d_hlp), // 56
        instr!("LD D, A", "Copy A into D.", 1, 1, Cpu::op_ld_d_a), // 57
        instr!("LD E, B", "Copy B into E.", 1, 1, Cpu::op_ld_e_b), // 58
        instr!("LD E, C", "Copy C into E.", 1, 1, Cpu::op_ld_e_c), // 59
        instr!("LD E, D", "Copy D into E.", 1, 1, Cpu::op_ld_e_d), // 5A
        instr!("LD E, E", "Copy E into E.", 1, 1, Cpu::op_ld_e_e), // 5B
        instr!("LD E, H", "Copy H into E.", 1, 1, Cpu::op_ld_e_h), // 5C
        instr!("LD E, L", "Copy L into E.", 1, 1, Cpu::op_ld_e_l), // 5D
        instr!("LD E, (HL)", "Load E from the address in HL.", 1, 2, Cpu::op_ld_e_hlp), // 5E
        instr!("LD E, A", "Copy A into E.", 1, 1, Cpu::op_ld_e_a), // 5F
        // --- 0x60 ---
        instr!("LD H, B", "Copy B into H.", 1, 1, Cpu::op_ld_h_b), // 60
        instr!("LD H, C", "Copy C into H.", 1, 1, Cpu::op_ld_h_c), // 61
        instr!("LD H, D", "Copy D into H.", 1, 1, Cpu::op_ld_h_d), // 62
        instr!("LD H, E", "Copy E into H.", 1, 1, Cpu::op_ld_h_e), // 63
        instr!("LD H, H", "Copy H into H.", 1, 1, Cpu::op_ld_h_h), // 64
        instr!("LD H, L", "Copy L into H.", 1, 1, Cpu::op_ld_h_l), // 65
        instr!("LD H, (HL)", "Load H from the address in HL.", 1, 2, Cpu::op_ld_h_hlp), // 66
        instr!("LD H, A", "Copy A into H.", 1, 1, Cpu::op_ld_h_a), // 67
        instr!("LD L, B", "Copy B into L.", 1, 1, Cpu::op_ld_l_b), // 68
        instr!("LD L, C", "Copy C into L.", 1, 1, Cpu::op_ld_l_c), // 69
        instr!("LD L, D", "Copy D into L.", 1, 1, Cpu::op_ld_l_d), // 6A
        instr!("LD L, E", "Copy E into L.", 1, 1, Cpu::op_ld_l_e), // 6B
        instr!("LD L, H", "Copy H into L.", 1, 1, Cpu::op_ld_l_h), // 6C
        instr!("LD L, L", "Copy L into L.", 1, 1, Cpu::op_ld_l_l), // 6D
        instr!("LD L, (HL)", "Load L from the address in HL.", 1, 2, Cpu::op_ld_l_hlp), // 6E
        instr!("LD L, A", "Copy A into L.", 1, 1, Cpu::op_ld_l_a), // 6F
        // --- 0x70 ---
        instr!("LD (HL), B", "Store B at the address in HL.", 1, 2, Cpu::op_ld_hlp_b), // 70
        instr!("LD (HL), C", "Store C at the address in HL.", 1, 2, Cpu::op_ld_hlp_c), // 71
        instr!("LD (HL), D", "Store D at the address in HL.", 1, 2, Cpu::op_ld_hlp_d), // 72
        instr!("LD (HL), E", "Store E at the address in HL.", 1, 2, Cpu::op_ld_hlp_e), // 73
        instr!("LD (HL), H", "Store H at the address in HL.", 1, 2, Cpu::op_ld_hlp_h), // 74
        instr!("LD (HL), L", "Store L at the address in HL.", 1, 2, Cpu::op_ld_hlp_l), // 75
        instr!("HALT", "Suspend execution until an interrupt is pending.", 1, 1, Cpu::op_halt), // 76
        instr!("LD (HL), A", "Store A at the address in HL.", 1, 2, Cpu::op_ld_hlp_a), // 77
        instr!("LD A, B", "Copy B into A.", 1, 1, Cpu::op_ld_a_b), // 78
        instr!("LD A, C", "Copy C into A.", 1, 1, Cpu::op_ld_a_c), // 79
        instr!("LD A, D", "Copy D into A.", 1, 1, Cpu::op_ld_a_d), // 7A
        instr!("LD A, E", "Copy E into A.", 1, 1, Cpu::op_ld_a_e), // 7B
        instr!("LD A, H", "Copy H into A.", 1, 1, Cpu::op_ld_a_h), // 7C
        instr!("LD A, L", "Copy L into A.", 1, 1, Cpu::op_ld_a_l), // 7D
        instr!("LD A, (HL)", "Load A from the address in HL.", 1, 2, Cpu::op_ld_a_hlp), // 7E
        instr!("LD A, A", "Copy A into A.", 1, 1, Cpu::op_ld_a_a), // 7F
        // --- 0x80 ---
        instr!("ADD A, B", "Add B to A.", 1, 1, Cpu::op_add_a_b), // 80
        instr!("ADD A, C", "Add C to A.", 1, 1, Cpu::op_add_a_c), // 81
        instr!("ADD A, D", "Add D to A.", 1, 1, Cpu::op_add_a_d), // 82
        instr!("ADD A, E", "Add E to A.", 1, 1, Cpu::op_add_a_e), // 83
        instr!("ADD A, H", "Add H to A.", 1, 1, Cpu::op_add_a_h), // 84
        instr!("ADD A, L", "Add L to A.", 1, 1, Cpu::op_add_a_l), // 85
        instr!("ADD A, (HL)", "Add the byte at HL to A.", 1, 2, Cpu::op_add_a_hlp), // 86
        instr!("ADD A, A", "Add A to A.", 1, 1, Cpu::op_add_a_a), // 87
        instr!("ADC A, B", "Add B and the carry to A.", 1, 1, Cpu::op_adc_a_b), // 88
        instr!("ADC A, C", "Add C and the carry to A.", 1, 1, Cpu::op_adc_a_c), // 89
        instr!("ADC A, D", "Add D and the carry to A.", 1, 1, Cpu::op_adc_a_d), // 8A
        instr!("ADC A, E", "Add E and the carry to A.", 1, 1, Cpu::op_adc_a_e), // 8B
        instr!("ADC A, H", "Add H and the carry to A.", 1, 1, Cpu::op_adc_a_h), // 8C
        instr!("ADC A, L", "Add L and the carry to A.", 1, 1, Cpu::op_adc_a_l), // 8D
        instr!("ADC A, (HL)", "Add the byte at HL and the carry to A.", 1, 2, Cpu::op_adc_a_hlp), // 8E
        instr!("ADC A, A", "Add A and the carry to A.", 1, 1, Cpu::op_adc_a_a), // 8F
        // --- 0x90 ---
        instr!("SUB A, B", "Subtract B from A.", 1, 1, Cpu::op_sub_a_b), // 90
        instr!("SUB A, C", "Subtract C from A.", 1, 1, Cpu::op_sub_a_c), // 91
        instr!("SUB A, D", "Subtract D from A.", 1, 1, Cpu::op_sub_a_d), // 92
        instr!("SUB A, E", "Subtract E from A.", 1, 1, Cpu::op_sub_a_e), // 93
        instr!("SUB A, H", "Subtract H from A.", 1, 1, Cpu::op_sub_a_h), // 94
        instr!("SUB A, L", "Subtract L from A.", 1, 1, Cpu::op_sub_a_l), // 95
        instr!("SUB A, (HL)", "Subtract the byte at HL from A.", 1, 2, Cpu::op_sub_a_hlp), // 96
        instr!("SUB A, A", "Subtract A from A.", 1, 1, Cpu::op_sub_a_a), // 97
        instr!("SBC A, B", "Subtract B and the carry from A.", 1, 1, Cpu::op_sbc_a_b), // 98
        instr!("SBC A, C", "Subtract C and the carry from A.", 1, 1, Cpu::op_sbc_a_c), // 99
        instr!("SBC A, D", "Subtract D and the carry from A.", 1, 1, Cpu::op_sbc_a_d), // 9A
        instr!("SBC A, E", "Subtract E and the carry from A.", 1, 1, Cpu::op_sbc_a_e), // 9B
        instr!("SBC A, H", "Subtract H and the carry from A.", 1, 1, Cpu::op_sbc_a_h), // 9C
        instr!("SBC A, L", "Subtract L and the carry from A.", 1, 1, Cpu::op_sbc_a_l), // 9D
        instr!("SBC A, (HL)", "Subtract the byte at HL and the carry from A.", 1, 2, Cpu::op_sbc_a_hlp), // 9E
        instr!("SBC A, A", "Subtract A and the carry from A.", 1, 1, Cpu::op_sbc_a_a), // 9F
        // --- 0xA0 ---
        instr!("AND A, B", "AND B into A.", 1, 1, Cpu::op_and_a_b), // A0
        instr!("AND A, C", "AND C into A.", 1, 1, Cpu::op_and_a_c), // A1
        instr!("AND A, D", "AND D into A.", 1, 1, Cpu::op_and_a_d), // A2
        instr!("AND A, E", "AND E into A.", 1, 1, Cpu::op_and_a_e), // A3
        instr!("AND A, H", "AND H into A.", 1, 1, Cpu::op_and_a_h), // A4
        instr!("AND A, L", "AND L into A.", 1, 1, Cpu::op_and_a_l), // A5
        instr!("AND A, (HL)", "AND the byte at HL into A.", 1, 2, Cpu::op_and_a_hlp), // A6
        instr!("AND A, A", "AND A into A.", 1, 1, Cpu::op_and_a_a), // A7
        instr!("XOR A, B", "XOR B into A.", 1, 1, Cpu::op_xor_a_b), // A8
        instr!("XOR A, C", "XOR C into A.", 1, 1, Cpu::op_xor_a_c), // A9
        instr!("XOR A, D", "XOR D into A.", 1, 1, Cpu::op_xor_a_d), // AA
        instr!("XOR A, E", "XOR E into A.", 1, 1, Cpu::op_xor_a_e), // AB
        instr!("XOR A, H", "XOR H into A.", 1, 1, Cpu::op_xor_a_h), // AC
        instr!("XOR A, L", "XOR L into A.", 1, 1, Cpu::op_xor_a_l), // AD
        instr!("XOR A, (HL)", "XOR the byte at HL into A.", 1, 2, Cpu::op_xor_a_hlp), // AE
        instr!("XOR A, A", "XOR A into A.", 1, 1, Cpu::op_xor_a_a), // AF
        // --- 0xB0 ---
        instr!("OR A, B", "OR B into A.", 1, 1, Cpu::op_or_a_b), // B0
        instr!("OR A, C", "OR C into A.", 1, 1, Cpu::op_or_a_c), // B1
        instr!("OR A, D", "OR D into A.", 1, 1, Cpu::op_or_a_d), // B2
        instr!("OR A, E", "OR E into A.", 1, 1, Cpu::op_or_a_e), // B3
        instr!("OR A, H", "OR H into A.", 1, 1, Cpu::op_or_a_h), // B4
        instr!("OR A, L", "OR L into A.", 1, 1, Cpu::op_or_a_l), // B5
        instr!("OR A, (HL)", "OR the byte at HL into A.", 1, 2, Cpu::op_or_a_hlp), // B6
        instr!("OR A, A", "OR A into A.", 1, 1, Cpu::op_or_a_a), // B7
        instr!("CP A, B", "Compare B against A; A unchanged.", 1, 1, Cpu::op_cp_a_b), // B8
        instr!("CP A, C", "Compare C against A; A unchanged.", 1, 1, Cpu::op_cp_a_c), // B9
        instr!("CP A, D", "Compare D against A; A unchanged.", 1, 1, Cpu::op_cp_a_d), // BA
        instr!("CP A, E", "Compare E against A; A unchanged.", 1, 1, Cpu::op_cp_a_e), // BB
        instr!("CP A, H", "Compare H against A; A unchanged.", 1, 1, Cpu::op_cp_a_h), // BC
        instr!("CP A, L", "Compare L against A; A unchanged.", 1, 1, Cpu::op_cp_a_l), // BD
        instr!("CP A, (HL)", "Compare the byte at HL against A; A unchanged.", 1, 2, Cpu::op_cp_a_hlp), // BE
        instr!("CP A, A", "Compare A against A; A unchanged.", 1, 1, Cpu::op_cp_a_a), // BF
        // --- 0xC0 ---
        instr!("RET NZ", "Return if Z is clear.", 1, 2, Cpu::op_ret_nz), // C0
        instr!("POP BC", "Pop BC off the stack.", 1, 3, Cpu::op_pop_bc), // C1
        instr!("JP NZ, a16", "Jump to a 16-bit address if Z is clear.", 3, 3, Cpu::op_jp_nz_a16), // C2
        instr!("JP a16", "Jump to a 16-bit address.", 3, 4, Cpu::op_jp_a16), // C3
        instr!("CALL NZ, a16", "Call a 16-bit address if Z is clear.", 3, 3, Cpu::op_call_nz_a16), // C4
        instr!("PUSH BC", "Push BC onto the stack.", 1, 4, Cpu::op_push_bc), // C5
        instr!("ADD A, d8", "Add an 8-bit immediate to A.", 2, 2, Cpu::op_add_a_d8), // C6
        instr!("RST 00H", "Call the fixed vector 0x0000.", 1, 4, Cpu::op_rst_00h), // C7
        instr!("RET Z", "Return if Z is set.", 1, 2, Cpu::op_ret_z), // C8
        instr!("RET", "Pop the return address into PC.", 1, 4, Cpu::op_ret), // C9
        instr!("JP Z, a16", "Jump to a 16-bit address if Z is set.", 3, 3, Cpu::op_jp_z_a16), // CA
        instr!("PREFIX CB", "Dispatch prefix for the CB table.", 1, 1, Cpu::op_prefix_cb), // CB
        instr!("CALL Z, a16", "Call a 16-bit address if Z is set.", 3, 3, Cpu::op_call_z_a16), // CC
        instr!("CALL a16", "Push PC and jump to a 16-bit address.", 3, 6, Cpu::op_call_a16), // CD
        instr!("ADC A, d8", "Add an 8-bit immediate and the carry to A.", 2, 2, Cpu::op_adc_a_d8), // CE
        instr!("RST 08H", "Call the fixed vector 0x0008.", 1, 4, Cpu::op_rst_08h), // CF
        // --- 0xD0 ---
        instr!("RET NC", "Return if C is clear.", 1, 2, Cpu::op_ret_nc), // D0
        instr!("POP DE", "Pop DE off the stack.", 1, 3, Cpu::op_pop_de), // D1
        instr!("JP NC, a16", "Jump to a 16-bit address if C is clear.", 3, 3, Cpu::op_jp_nc_a16), // D2
        invalid!(), // D3
        instr!("CALL NC, a16", "Call a 16-bit address if C is clear.", 3, 3, Cpu::op_call_nc_a16), // D4
        instr!("PUSH DE", "Push DE onto the stack.", 1, 4, Cpu::op_push_de), // D5
        instr!("SUB A, d8", "Subtract an 8-bit immediate from A.", 2, 2, Cpu::op_sub_a_d8), // D6
        instr!("RST 10H", "Call the fixed vector 0x0010.", 1, 4, Cpu::op_rst_10h), // D7
        instr!("RET C", "Return if C is set.", 1, 2, Cpu::op_ret_c), // D8
        instr!("RETI", "Return and enable interrupts.", 1, 4, Cpu::op_reti), // D9
        instr!("JP C, a16", "Jump to a 16-bit address if C is set.", 3, 3, Cpu::op_jp_c_a16), // DA
        invalid!(), // DB
        instr!("CALL C, a16", "Call a 16-bit address if C is set.", 3, 3, Cpu::op_call_c_a16), // DC
        invalid!(), // DD
        instr!("SBC A, d8", "Subtract an 8-bit immediate and the carry from A.", 2, 2, Cpu::op_sbc_a_d8), // DE
        instr!("RST 18H", "Call the fixed vector 0x0018.", 1, 4, Cpu::op_rst_18h), // DF
        // --- 0xE0 ---
        instr!("LDH (a8), A", "Store A in the high page at 0xFF00+a8.", 2, 3, Cpu::op_ldh_a8_a), // E0
        instr!("POP HL", "Pop HL off the stack.", 1, 3, Cpu::op_pop_hl), // E1
        instr!("LD (C), A", "Store A in the high page at 0xFF00+C.", 1, 2, Cpu::op_ld_cp_a), // E2
        invalid!(), // E3
        invalid!(), // E4
        instr!("PUSH HL", "Push HL onto the stack.", 1, 4, Cpu::op_push_hl), // E5
        instr!("AND A, d8", "AND an 8-bit immediate into A.", 2, 2, Cpu::op_and_a_d8), // E6
        instr!("RST 20H", "Call the fixed vector 0x0020.", 1, 4, Cpu::op_rst_20h), // E7
        instr!("ADD SP, r8", "Add a signed 8-bit immediate to SP.", 2, 4, Cpu::op_add_sp_r8), // E8
        instr!("JP HL", "Jump to the address in HL.", 1, 1, Cpu::op_jp_hl), // E9
        instr!("LD (a16), A", "Store A at a 16-bit address.", 3, 4, Cpu::op_ld_a16_a), // EA
        invalid!(), // EB
        invalid!(), // EC
        invalid!(), // ED
        instr!("XOR A, d8", "XOR an 8-bit immediate into A.", 2, 2, Cpu::op_xor_a_d8), // EE
        instr!("RST 28H", "Call the fixed vector 0x0028.", 1, 4, Cpu::op_rst_28h), // EF
        // --- 0xF0 ---
        instr!("LDH A, (a8)", "Load A from the high page at 0xFF00+a8.", 2, 3, Cpu::op_ldh_a_a8), // F0
        instr!("POP AF", "Pop AF; the low nibble of F reads zero.", 1, 3, Cpu::op_pop_af), // F1
        instr!("LD A, (C)", "Load A from the high page at 0xFF00+C.", 1, 2, Cpu::op_ld_a_cp), // F2
        instr!("DI", "Disable interrupts immediately.", 1, 1, Cpu::op_di), // F3
        invalid!(), // F4
        instr!("PUSH AF", "Push AF onto the stack.", 1, 4, Cpu::op_push_af), // F5
        instr!("OR A, d8", "OR an 8-bit immediate into A.", 2, 2, Cpu::op_or_a_d8), // F6
        instr!("RST 30H", "Call the fixed vector 0x0030.", 1, 4, Cpu::op_rst_30h), // F7
        instr!("LD HL, SP+r8", "Load SP plus a signed offset into HL.", 2, 3, Cpu::op_ld_hl_sp_r8), // F8
        instr!("LD SP, HL", "Copy HL into SP.", 1, 2, Cpu::op_ld_sp_hl), // F9
        instr!("LD A, (a16)", "Load A from a 16-bit address.", 3, 4, Cpu::op_ld_a_a16), // FA
        instr!("EI", "Enable interrupts after the next instruction.", 1, 1, Cpu::op_ei), // FB
        invalid!(), // FC
        invalid!(), // FD
        instr!("CP A, d8", "Compare an 8-bit immediate against A.", 2, 2, Cpu::op_cp_a_d8), // FE
        instr!("RST 38H", "Call the fixed vector 0x0038.", 1, 4, Cpu::op_rst_38h), // FF
    ];

    // CB-prefixed instruction table (0x00 - 0xFF). Lengths include the
    // 0xCB prefix byte; so do the cycle counts.
    pub static ref CB_INSTRUCTIONS: [Instruction; 256] = [
        // RLC r / RLC (HL)
        instr!("RLC B", "Rotate left circular.", 2, 2, Cpu::cb_rlc_b), // 00
        instr!("RLC C", "Rotate left circular.", 2, 2, Cpu::cb_rlc_c), // 01
        instr!("RLC D", "Rotate left circular.", 2, 2, Cpu::cb_rlc_d), // 02
        instr!("RLC E", "Rotate left circular.", 2, 2, Cpu::cb_rlc_e), // 03
        instr!("RLC H", "Rotate left circular.", 2, 2, Cpu::cb_rlc_h), // 04
        instr!("RLC L", "Rotate left circular.", 2, 2, Cpu::cb_rlc_l), // 05
        instr!("RLC (HL)", "Rotate left circular.", 2, 4, Cpu::cb_rlc_hlp), // 06
        instr!("RLC A", "Rotate left circular.", 2, 2, Cpu::cb_rlc_a), // 07
        // RRC r / RRC (HL)
        instr!("RRC B", "Rotate right circular.", 2, 2, Cpu::cb_rrc_b), // 08
        instr!("RRC C", "Rotate right circular.", 2, 2, Cpu::cb_rrc_c), // 09
        instr!("RRC D", "Rotate right circular.", 2, 2, Cpu::cb_rrc_d), // 0A
        instr!("RRC E", "Rotate right circular.", 2, 2, Cpu::cb_rrc_e), // 0B
        instr!("RRC H", "Rotate right circular.", 2, 2, Cpu::cb_rrc_h), // 0C
        instr!("RRC L", "Rotate right circular.", 2, 2, Cpu::cb_rrc_l), // 0D
        instr!("RRC (HL)", "Rotate right circular.", 2, 4, Cpu::cb_rrc_hlp), // 0E
        instr!("RRC A", "Rotate right circular.", 2, 2, Cpu::cb_rrc_a), // 0F
        // RL r / RL (HL)
        instr!("RL B", "Rotate left through carry.", 2, 2, Cpu::cb_rl_b), // 10
        instr!("RL C", "Rotate left through carry.", 2, 2, Cpu::cb_rl_c), // 11
        instr!("RL D", "Rotate left through carry.", 2, 2, Cpu::cb_rl_d), // 12
        instr!("RL E", "Rotate left through carry.", 2, 2, Cpu::cb_rl_e), // 13
        instr!("RL H", "Rotate left through carry.", 2, 2, Cpu::cb_rl_h), // 14
        instr!("RL L", "Rotate left through carry.", 2, 2, Cpu::cb_rl_l), // 15
        instr!("RL (HL)", "Rotate left through carry.", 2, 4, Cpu::cb_rl_hlp), // 16
        instr!("RL A", "Rotate left through carry.", 2, 2, Cpu::cb_rl_a), // 17
        // RR r / RR (HL)
        instr!("RR B", "Rotate right through carry.", 2, 2, Cpu::cb_rr_b), // 18
        instr!("RR C", "Rotate right through carry.", 2, 2, Cpu::cb_rr_c), // 19
        instr!("RR D", "Rotate right through carry.", 2, 2, Cpu::cb_rr_d), // 1A
        instr!("RR E", "Rotate right through carry.", 2, 2, Cpu::cb_rr_e), // 1B
        instr!("RR H", "Rotate right through carry.", 2, 2, Cpu::cb_rr_h), // 1C
        instr!("RR L", "Rotate right through carry.", 2, 2, Cpu::cb_rr_l), // 1D
        instr!("RR (HL)", "Rotate right through carry.", 2, 4, Cpu::cb_rr_hlp), // 1E
        instr!("RR A", "Rotate right through carry.", 2, 2, Cpu::cb_rr_a), // 1F
        // SLA r / SLA (HL)
        instr!("SLA B", "Shift left arithmetic.", 2, 2, Cpu::cb_sla_b), // 20
        instr!("SLA C", "Shift left arithmetic.", 2, 2, Cpu::cb_sla_c), // 21
        instr!("SLA D", "Shift left arithmetic.", 2, 2, Cpu::cb_sla_d), // 22
        instr!("SLA E", "Shift left arithmetic.", 2, 2, Cpu::cb_sla_e), // 23
        instr!("SLA H", "Shift left arithmetic.", 2, 2, Cpu::cb_sla_h), // 24
        instr!("SLA L", "Shift left arithmetic.", 2, 2, Cpu::cb_sla_l), // 25
        instr!("SLA (HL)", "Shift left arithmetic.", 2, 4, Cpu::cb_sla_hlp), // 26
        instr!("SLA A", "Shift left arithmetic.", 2, 2, Cpu::cb_sla_a), // 27
        // SRA r / SRA (HL)
        instr!("SRA B", "Shift right arithmetic; bit 7 kept.", 2, 2, Cpu::cb_sra_b), // 28
        instr!("SRA C", "Shift right arithmetic; bit 7 kept.", 2, 2, Cpu::cb_sra_c), // 29
        instr!("SRA D", "Shift right arithmetic; bit 7 kept.", 2, 2, Cpu::cb_sra_d), // 2A
        instr!("SRA E", "Shift right arithmetic; bit 7 kept.", 2, 2, Cpu::cb_sra_e), // 2B
        instr!("SRA H", "Shift right arithmetic; bit 7 kept.", 2, 2, Cpu::cb_sra_h), // 2C
        instr!("SRA L", "Shift right arithmetic; bit 7 kept.", 2, 2, Cpu::cb_sra_l), // 2D
        instr!("SRA (HL)", "Shift right arithmetic; bit 7 kept.", 2, 4, Cpu::cb_sra_hlp), // 2E
        instr!("SRA A", "Shift right arithmetic; bit 7 kept.", 2, 2, Cpu::cb_sra_a), // 2F
        // SWAP r / SWAP (HL)
        instr!("SWAP B", "Swap the nibbles.", 2, 2, Cpu::cb_swap_b), // 30
        instr!("SWAP C", "Swap the nibbles.", 2, 2, Cpu::cb_swap_c), // 31
        instr!("SWAP D", "Swap the nibbles.", 2, 2, Cpu::cb_swap_d), // 32
        instr!("SWAP E", "Swap the nibbles.", 2, 2, Cpu::cb_swap_e), // 33
        instr!("SWAP H", "Swap the nibbles.", 2, 2, Cpu::cb_swap_h), // 34
        instr!("SWAP L", "Swap the nibbles.", 2, 2, Cpu::cb_swap_l), // 35
        instr!("SWAP (HL)", "Swap the nibbles.", 2, 4, Cpu::cb_swap_hlp), // 36
        instr!("SWAP A", "Swap the nibbles.", 2, 2, Cpu::cb_swap_a), // 37
        // SRL r / SRL (HL)
        instr!("SRL B", "Shift right logical.", 2, 2, Cpu::cb_srl_b), // 38
        instr!("SRL C", "Shift right logical.", 2, 2, Cpu::cb_srl_c), // 39
        instr!("SRL D", "Shift right logical.", 2, 2, Cpu::cb_srl_d), // 3A
        instr!("SRL E", "Shift right logical.", 2, 2, Cpu::cb_srl_e), // 3B
        instr!("SRL H", "Shift right logical.", 2, 2, Cpu::cb_srl_h), // 3C
        instr!("SRL L", "Shift right logical.", 2, 2, Cpu::cb_srl_l), // 3D
        instr!("SRL (HL)", "Shift right logical.", 2, 4, Cpu::cb_srl_hlp), // 3E
        instr!("SRL A", "Shift right logical.", 2, 2, Cpu::cb_srl_a), // 3F
        // BIT 0, r / BIT 0, (HL)
        instr!("BIT 0, B", "Test bit 0.", 2, 2, Cpu::cb_bit_0_b), // 40
        instr!("BIT 0, C", "Test bit 0.", 2, 2, Cpu::cb_bit_0_c), // 41
        instr!("BIT 0, D", "Test bit 0.", 2, 2, Cpu::cb_bit_0_d), // 42
        instr!("BIT 0, E", "Test bit 0.", 2, 2, Cpu::cb_bit_0_e), // 43
        instr!("BIT 0, H", "Test bit 0.", 2, 2, Cpu::cb_bit_0_h), // 44
        instr!("BIT 0, L", "Test bit 0.", 2, 2, Cpu::cb_bit_0_l), // 45
        instr!("BIT 0, (HL)", "Test bit 0.", 2, 3, Cpu::cb_bit_0_hlp), // 46
        instr!("BIT 0, A", "Test bit 0.", 2, 2, Cpu::cb_bit_0_a), // 47
        // BIT 1, r / BIT 1, (HL)
        instr!("BIT 1, B", "Test bit 1.", 2, 2, Cpu::cb_bit_1_b), // 48
        instr!("BIT 1, C", "Test bit 1.", 2, 2, Cpu::cb_bit_1_c), // 49
        instr!("BIT 1, D", "Test bit 1.", 2, 2, Cpu::cb_bit_1_d), // 4A
        instr!("BIT 1, E", "Test bit 1.", 2, 2, Cpu::cb_bit_1_e), // 4B
        instr!("BIT 1, H", "Test bit 1.", 2, 2, Cpu::cb_bit_1_h), // 4C
        instr!("BIT 1, L", "Test bit 1.", 2, 2, Cpu::cb_bit_1_l), // 4D
        instr!("BIT 1, (HL)", "Test bit 1.", 2, 3, Cpu::cb_bit_1_hlp), // 4E
        instr!("BIT 1, A", "Test bit 1.", 2, 2, Cpu::cb_bit_1_a), // 4F
        // BIT 2, r / BIT 2, (HL)
        instr!("BIT 2, B", "Test bit 2.", 2, 2, Cpu::cb_bit_2_b), // 50
        instr!("BIT 2, C", "Test bit 2.", 2, 2, Cpu::cb_bit_2_c), // 51
        instr!("BIT 2, D", "Test bit 2.", 2, 2, Cpu::cb_bit_2_d), // 52
        instr!("BIT 2, E", "Test bit 2.", 2, 2, Cpu::cb_bit_2_e), // 53
        instr!("BIT 2, H", "Test bit 2.", 2, 2, Cpu::cb_bit_2_h), // 54
        instr!("BIT 2, L", "Test bit 2.", 2, 2, Cpu::cb_bit_2_l), // 55
        instr!("BIT 2, (HL)", "Test bit 2.", 2, 3, Cpu::cb_bit_2_hlp), // 56
        instr!("BIT 2, A", "Test bit 2.", 2, 2, Cpu::cb_bit_2_a), // 57
        // BIT 3, r / BIT 3, (HL)
        instr!("BIT 3, B", "Test bit 3.", 2, 2, Cpu::cb_bit_3_b), // 58
        instr!("BIT 3, C", "Test bit 3.", 2, 2, Cpu::cb_bit_3_c), // 59
        instr!("BIT 3, D", "Test bit 3.", 2, 2, Cpu::cb_bit_3_d), // 5A
        instr!("BIT 3, E", "Test bit 3.", 2, 2, Cpu::cb_bit_3_e), // 5B
        instr!("BIT 3, H", "Test bit 3.", 2, 2, Cpu::cb_bit_3_h), // 5C
        instr!("BIT 3, L", "Test bit 3.", 2, 2, Cpu::cb_bit_3_l), // 5D
        instr!("BIT 3, (HL)", "Test bit 3.", 2, 3, Cpu::cb_bit_3_hlp), // 5E
        instr!("BIT 3, A", "Test bit 3.", 2, 2, Cpu::cb_bit_3_a), // 5F
        // BIT 4, r / BIT 4, (HL)
        instr!("BIT 4, B", "Test bit 4.", 2, 2, Cpu::cb_bit_4_b), // 60
        instr!("BIT 4, C", "Test bit 4.", 2, 2, Cpu::cb_bit_4_c), // 61
        instr!("BIT 4, D", "Test bit 4.", 2, 2, Cpu::cb_bit_4_d), // 62
        instr!("BIT 4, E", "Test bit 4.", 2, 2, Cpu::cb_bit_4_e), // 63
        instr!("BIT 4, H", "Test bit 4.", 2, 2, Cpu::cb_bit_4_h), // 64
        instr!("BIT 4, L", "Test bit 4.", 2, 2, Cpu::cb_bit_4_l), // 65
        instr!("BIT 4, (HL)", "Test bit 4.", 2, 3, Cpu::cb_bit_4_hlp), // 66
        instr!("BIT 4, A", "Test bit 4.", 2, 2, Cpu::cb_bit_4_a), // 67
        // BIT 5, r / BIT 5, (HL)
        instr!("BIT 5, B", "Test bit 5.", 2, 2, Cpu::cb_bit_5_b), // 68
        instr!("BIT 5, C", "Test bit 5.", 2, 2, Cpu::cb_bit_5_c), // 69
        instr!("BIT 5, D", "Test bit 5.", 2, 2, Cpu::cb_bit_5_d), // 6A
        instr!("BIT 5, E", "Test bit 5.", 2, 2, Cpu::cb_bit_5_e), // 6B
        instr!("BIT 5, H", "Test bit 5.", 2, 2, Cpu::cb_bit_5_h), // 6C
        instr!("BIT 5, L", "Test bit 5.", 2, 2, Cpu::cb_bit_5_l), // 6D
        instr!("BIT 5, (HL)", "Test bit 5.", 2, 3, Cpu::cb_bit_5_hlp), // 6E
        instr!("BIT 5, A", "Test bit 5.", 2, 2, Cpu::cb_bit_5_a), // 6F
        // BIT 6, r / BIT 6, (HL)
        instr!("BIT 6, B", "Test bit 6.", 2, 2, Cpu::cb_bit_6_b), // 70
        instr!("BIT 6, C", "Test bit 6.", 2, 2, Cpu::cb_bit_6_c), // 71
        instr!("BIT 6, D", "Test bit 6.", 2, 2, Cpu::cb_bit_6_d), // 72
        instr!("BIT 6, E", "Test bit 6.", 2, 2, Cpu::cb_bit_6_e), // 73
        instr!("BIT 6, H", "Test bit 6.", 2, 2, Cpu::cb_bit_6_h), // 74
        instr!("BIT 6, L", "Test bit 6.", 2, 2, Cpu::cb_bit_6_l), // 75
        instr!("BIT 6, (HL)", "Test bit 6.", 2, 3, Cpu::cb_bit_6_hlp), // 76
        instr!("BIT 6, A", "Test bit 6.", 2, 2, Cpu::cb_bit_6_a), // 77
        // BIT 7, r / BIT 7, (HL)
        instr!("BIT 7, B", "Test bit 7.", 2, 2, Cpu::cb_bit_7_b), // 78
        instr!("BIT 7, C", "Test bit 7.", 2, 2, Cpu::cb_bit_7_c), // 79
        instr!("BIT 7, D", "Test bit 7.", 2, 2, Cpu::cb_bit_7_d), // 7A
        instr!("BIT 7, E", "Test bit 7.", 2, 2, Cpu::cb_bit_7_e), // 7B
        instr!("BIT 7, H", "Test bit 7.", 2, 2, Cpu::cb_bit_7_h), // 7C
        instr!("BIT 7, L", "Test bit 7.", 2, 2, Cpu::cb_bit_7_l), // 7D
        instr!("BIT 7, (HL)", "Test bit 7.", 2, 3, Cpu::cb_bit_7_hlp), // 7E
        instr!("BIT 7, A", "Test bit 7.", 2, 2, Cpu::cb_bit_7_a), // 7F
        // RES 0, r / RES 0, (HL)
        instr!("RES 0, B", "Clear bit 0.", 2, 2, Cpu::cb_res_0_b), // 80
        instr!("RES 0, C", "Clear bit 0.", 2, 2, Cpu::cb_res_0_c), // 81
        instr!("RES 0, D", "Clear bit 0.", 2, 2, Cpu::cb_res_0_d), // 82
        instr!("RES 0, E", "Clear bit 0.", 2, 2, Cpu::cb_res_0_e), // 83
        instr!("RES 0, H", "Clear bit 0.", 2, 2, Cpu::cb_res_0_h), // 84
        instr!("RES 0, L", "Clear bit 0.", 2, 2, Cpu::cb_res_0_l), // 85
        instr!("RES 0, (HL)", "Clear bit 0.", 2, 4, Cpu::cb_res_0_hlp), // 86
        instr!("RES 0, A", "Clear bit 0.", 2, 2, Cpu::cb_res_0_a), // 87
        // RES 1, r / RES 1, (HL)
        instr!("RES 1, B", "Clear bit 1.", 2, 2, Cpu::cb_res_1_b), // 88
        instr!("RES 1, C", "Clear bit 1.", 2, 2, Cpu::cb_res_1_c), // 89
        instr!("RES 1, D", "Clear bit 1.", 2, 2, Cpu::cb_res_1_d), // 8A
        instr!("RES 1, E", "Clear bit 1.", 2, 2, Cpu::cb_res_1_e), // 8B
        instr!("RES 1, H", "Clear bit 1.", 2, 2, Cpu::cb_res_1_h), // 8C
        instr!("RES 1, L", "Clear bit 1.", 2, 2, Cpu::cb_res_1_l), // 8D
        instr!("RES 1, (HL)", "Clear bit 1.", 2, 4, Cpu::cb_res_1_hlp), // 8E
        instr!("RES 1, A", "Clear bit 1.", 2, 2, Cpu::cb_res_1_a), // 8F
        // RES 2, r / RES 2, (HL)
        instr!("RES 2, B", "Clear bit 2.", 2, 2, Cpu::cb_res_2_b), // 90
        instr!("RES 2, C", "Clear bit 2.", 2, 2, Cpu::cb_res_2_c), // 91
        instr!("RES 2, D", "Clear bit 2.", 2, 2, Cpu::cb_res_2_d), // 92
        instr!("RES 2, E", "Clear bit 2.", 2, 2, Cpu::cb_res_2_e), // 93
        instr!("RES 2, H", "Clear bit 2.", 2, 2, Cpu::cb_res_2_h), // 94
        instr!("RES 2, L", "Clear bit 2.", 2, 2, Cpu::cb_res_2_l), // 95
        instr!("RES 2, (HL)", "Clear bit 2.", 2, 4, Cpu::cb_res_2_hlp), // 96
        instr!("RES 2, A", "Clear bit 2.", 2, 2, Cpu::cb_res_2_a), // 97
        // RES 3, r / RES 3, (HL)
        instr!("RES 3, B", "Clear bit 3.", 2, 2, Cpu::cb_res_3_b), // 98
        instr!("RES 3, C", "Clear bit 3.", 2, 2, Cpu::cb_res_3_c), // 99
        instr!("RES 3, D", "Clear bit 3.", 2, 2, Cpu::cb_res_3_d), // 9A
        instr!("RES 3, E", "Clear bit 3.", 2, 2, Cpu::cb_res_3_e), // 9B
        instr!("RES 3, H", "Clear bit 3.", 2, 2, Cpu::cb_res_3_h), // 9C
        instr!("RES 3, L", "Clear bit 3.", 2, 2, Cpu::cb_res_3_l), // 9D
        instr!("RES 3, (HL)", "Clear bit 3.", 2, 4, Cpu::cb_res_3_hlp), // 9E
        instr!("RES 3, A", "Clear bit 3.", 2, 2, Cpu::cb_res_3_a), // 9F
        // RES 4, r / RES 4, (HL)
        instr!("RES 4, B", "Clear bit 4.", 2, 2, Cpu::cb_res_4_b), // A0
        instr!("RES 4, C", "Clear bit 4.", 2, 2, Cpu::cb_res_4_c), // A1
        instr!("RES 4, D", "Clear bit 4.", 2, 2, Cpu::cb_res_4_d), // A2
        instr!("RES 4, E", "Clear bit 4.", 2, 2, Cpu::cb_res_4_e), // A3
        instr!("RES 4, H", "Clear bit 4.", 2, 2, Cpu::cb_res_4_h), // A4
        instr!("RES 4, L", "Clear bit 4.", 2, 2, Cpu::cb_res_4_l), // A5
        instr!("RES 4, (HL)", "Clear bit 4.", 2, 4, Cpu::cb_res_4_hlp), // A6
        instr!("RES 4, A", "Clear bit 4.", 2, 2, Cpu::cb_res_4_a), // A7
        // RES 5, r / RES 5, (HL)
        instr!("RES 5, B", "Clear bit 5.", 2, 2, Cpu::cb_res_5_b), // A8
        instr!("RES 5, C", "Clear bit 5.", 2, 2, Cpu::cb_res_5_c), // A9
        instr!("RES 5, D", "Clear bit 5.", 2, 2, Cpu::cb_res_5_d), // AA
        instr!("RES 5, E", "Clear bit 5.", 2, 2, Cpu::cb_res_5_e), // AB
        instr!("RES 5, H", "Clear bit 5.", 2, 2, Cpu::cb_res_5_h), // AC
        instr!("RES 5, L", "Clear bit 5.", 2, 2, Cpu::cb_res_5_l), // AD
        instr!("RES 5, (HL)", "Clear bit 5.", 2, 4, Cpu::cb_res_5_hlp), // AE
        instr!("RES 5, A", "Clear bit 5.", 2, 2, Cpu::cb_res_5_a), // AF
        // RES 6, r / RES 6, (HL)
        instr!("RES 6, B", "Clear bit 6.", 2, 2, Cpu::cb_res_6_b), // B0
        instr!("RES 6, C", "Clear bit 6.", 2, 2, Cpu::cb_res_6_c), // B1
        instr!("RES 6, D", "Clear bit 6.", 2, 2, Cpu::cb_res_6_d), // B2
        instr!("RES 6, E", "Clear bit 6.", 2, 2, Cpu::cb_res_6_e), // B3
        instr!("RES 6, H", "Clear bit 6.", 2, 2, Cpu::cb_res_6_h), // B4
        instr!("RES 6, L", "Clear bit 6.", 2, 2, Cpu::cb_res_6_l), // B5
        instr!("RES 6, (HL)", "Clear bit 6.", 2, 4, Cpu::cb_res_6_hlp), // B6
        instr!("RES 6, A", "Clear bit 6.", 2, 2, Cpu::cb_res_6_a), // B7
        // RES 7, r / RES 7, (HL)
        instr!("RES 7, B", "Clear bit 7.", 2, 2, Cpu::cb_res_7_b), // B8
        instr!("RES 7, C", "Clear bit 7.", 2, 2, Cpu::cb_res_7_c), // B9
        instr!("RES 7, D", "Clear bit 7.", 2, 2, Cpu::cb_res_7_d), // BA
        instr!("RES 7, E", "Clear bit 7.", 2, 2, Cpu::cb_res_7_e), // BB
        instr!("RES 7, H", "Clear bit 7.", 2, 2, Cpu::cb_res_7_h), // BC
        instr!("RES 7, L", "Clear bit 7.", 2, 2, Cpu::cb_res_7_l), // BD
        instr!("RES 7, (HL)", "Clear bit 7.", 2, 4, Cpu::cb_res_7_hlp), // BE
        instr!("RES 7, A", "Clear bit 7.", 2, 2, Cpu::cb_res_7_a), // BF
        // SET 0, r / SET 0, (HL)
        instr!("SET 0, B", "Set bit 0.", 2, 2, Cpu::cb_set_0_b), // C0
        instr!("SET 0, C", "Set bit 0.", 2, 2, Cpu::cb_set_0_c), // C1
        instr!("SET 0, D", "Set bit 0.", 2, 2, Cpu::cb_set_0_d), // C2
        instr!("SET 0, E", "Set bit 0.", 2, 2, Cpu::cb_set_0_e), // C3
        instr!("SET 0, H", "Set bit 0.", 2, 2, Cpu::cb_set_0_h), // C4
        instr!("SET 0, L", "Set bit 0.", 2, 2, Cpu::cb_set_0_l), // C5
        instr!("SET 0, (HL)", "Set bit 0.", 2, 4, Cpu::cb_set_0_hlp), // C6
        instr!("SET 0, A", "Set bit 0.", 2, 2, Cpu::cb_set_0_a), // C7
        // SET 1, r / SET 1, (HL)
        instr!("SET 1, B", "Set bit 1.", 2, 2, Cpu::cb_set_1_b), // C8
        instr!("SET 1, C", "Set bit 1.", 2, 2, Cpu::cb_set_1_c), // C9
        instr!("SET 1, D", "Set bit 1.", 2, 2, Cpu::cb_set_1_d), // CA
        instr!("SET 1, E", "Set bit 1.", 2, 2, Cpu::cb_set_1_e), // CB
        instr!("SET 1, H", "Set bit 1.", 2, 2, Cpu::cb_set_1_h), // CC
        instr!("SET 1, L", "Set bit 1.", 2, 2, Cpu::cb_set_1_l), // CD
        instr!("SET 1, (HL)", "Set bit 1.", 2, 4, Cpu::cb_set_1_hlp), // CE
        instr!("SET 1, A", "Set bit 1.", 2, 2, Cpu::cb_set_1_a), // CF
        // SET 2, r / SET 2, (HL)
        instr!("SET 2, B", "Set bit 2.", 2, 2, Cpu::cb_set_2_b), // D0
        instr!("SET 2, C", "Set bit 2.", 2, 2, Cpu::cb_set_2_c), // D1
        instr!("SET 2, D", "Set bit 2.", 2, 2, Cpu::cb_set_2_d), // D2
        instr!("SET 2, E", "Set bit 2.", 2, 2, Cpu::cb_set_2_e), // D3
        instr!("SET 2, H", "Set bit 2.", 2, 2, Cpu::cb_set_2_h), // D4
        instr!("SET 2, L", "Set bit 2.", 2, 2, Cpu::cb_set_2_l), // D5
        instr!("SET 2, (HL)", "Set bit 2.", 2, 4, Cpu::cb_set_2_hlp), // D6
        instr!("SET 2, A", "Set bit 2.", 2, 2, Cpu::cb_set_2_a), // D7
        // SET 3, r / SET 3, (HL)
        instr!("SET 3, B", "Set bit 3.", 2, 2, Cpu::cb_set_3_b), // D8
        instr!("SET 3, C", "Set bit 3.", 2, 2, Cpu::cb_set_3_c), // D9
        instr!("SET 3, D", "Set bit 3.", 2, 2, Cpu::cb_set_3_d), // DA
        instr!("SET 3, E", "Set bit 3.", 2, 2, Cpu::cb_set_3_e), // DB
        instr!("SET 3, H", "Set bit 3.", 2, 2, Cpu::cb_set_3_h), // DC
        instr!("SET 3, L", "Set bit 3.", 2, 2, Cpu::cb_set_3_l), // DD
        instr!("SET 3, (HL)", "Set bit 3.", 2, 4, Cpu::cb_set_3_hlp), // DE
        instr!("SET 3, A", "Set bit 3.", 2, 2, Cpu::cb_set_3_a), // DF
        // SET 4, r / SET 4, (HL)
        instr!("SET 4, B", "Set bit 4.", 2, 2, Cpu::cb_set_4_b), // E0
        instr!("SET 4, C", "Set bit 4.", 2, 2, Cpu::cb_set_4_c), // E1
        instr!("SET 4, D", "Set bit 4.", 2, 2, Cpu::cb_set_4_d), // E2
        instr!("SET 4, E", "Set bit 4.", 2, 2, Cpu::cb_set_4_e), // E3
        instr!("SET 4, H", "Set bit 4.", 2, 2, Cpu::cb_set_4_h), // E4
        instr!("SET 4, L", "Set bit 4.", 2, 2, Cpu::cb_set_4_l), // E5
        instr!("SET 4, (HL)", "Set bit 4.", 2, 4, Cpu::cb_set_4_hlp), // E6
        instr!("SET 4, A", "Set bit 4.", 2, 2, Cpu::cb_set_4_a), // E7
        // SET 5, r / SET 5, (HL)
        instr!("SET 5, B", "Set bit 5.", 2, 2, Cpu::cb_set_5_b), // E8
        instr!("SET 5, C", "Set bit 5.", 2, 2, Cpu::cb_set_5_c), // E9
        instr!("SET 5, D", "Set bit 5.", 2, 2, Cpu::cb_set_5_d), // EA
        instr!("SET 5, E", "Set bit 5.", 2, 2, Cpu::cb_set_5_e), // EB
        instr!("SET 5, H", "Set bit 5.", 2, 2, Cpu::cb_set_5_h), // EC
        instr!("SET 5, L", "Set bit 5.", 2, 2, Cpu::cb_set_5_l), // ED
        instr!("SET 5, (HL)", "Set bit 5.", 2, 4, Cpu::cb_set_5_hlp), // EE
        instr!("SET 5, A", "Set bit 5.", 2, 2, Cpu::cb_set_5_a), // EF
        // SET 6, r / SET 6, (HL)
        instr!("SET 6, B", "Set bit 6.", 2, 2, Cpu::cb_set_6_b), // F0
        instr!("SET 6, C", "Set bit 6.", 2, 2, Cpu::cb_set_6_c), // F1
        instr!("SET 6, D", "Set bit 6.", 2, 2, Cpu::cb_set_6_d), // F2
        instr!("SET 6, E", "Set bit 6.", 2, 2, Cpu::cb_set_6_e), // F3
        instr!("SET 6, H", "Set bit 6.", 2, 2, Cpu::cb_set_6_h), // F4
        instr!("SET 6, L", "Set bit 6.", 2, 2, Cpu::cb_set_6_l), // F5
        instr!("SET 6, (HL)", "Set bit 6.", 2, 4, Cpu::cb_set_6_hlp), // F6
        instr!("SET 6, A", "Set bit 6.", 2, 2, Cpu::cb_set_6_a), // F7
        // SET 7, r / SET 7, (HL)
        instr!("SET 7, B", "Set bit 7.", 2, 2, Cpu::cb_set_7_b), // F8
        instr!("SET 7, C", "Set bit 7.", 2, 2, Cpu::cb_set_7_c), // F9
        instr!("SET 7, D", "Set bit 7.", 2, 2, Cpu::cb_set_7_d), // FA
        instr!("SET 7, E", "Set bit 7.", 2, 2, Cpu::cb_set_7_e), // FB
        instr!("SET 7, H", "Set bit 7.", 2, 2, Cpu::cb_set_7_h), // FC
        instr!("SET 7, L", "Set bit 7.", 2, 2, Cpu::cb_set_7_l), // FD
        instr!("SET 7, (HL)", "Set bit 7.", 2, 4, Cpu::cb_set_7_hlp), // FE
        instr!("SET 7, A", "Set bit 7.", 2, 2, Cpu::cb_set_7_a), // FF
    ];
}
