//! Whole-instruction tests driving the CPU against the MMU with
//! hand-assembled ROM byte sequences.

use mochi::registers::{FLAG_C, FLAG_H, FLAG_N, FLAG_Z};
use mochi::{CoreError, Cpu, Mmu, RunState};

const ENTRY: usize = 0x0100;

/// Post-boot CPU plus an MBC0 image carrying `program` at 0x0100.
fn boot(program: &[u8]) -> (Cpu, Mmu) {
    let mut rom = vec![0u8; 32 * 1024];
    rom[ENTRY..ENTRY + program.len()].copy_from_slice(program);
    boot_rom(rom)
}

fn boot_rom(rom: Vec<u8>) -> (Cpu, Mmu) {
    let mut mmu = Mmu::new();
    mmu.load_rom(&rom).unwrap();
    (Cpu::new(true), mmu)
}

#[test]
fn nop_advances_pc_and_clock() {
    let (mut cpu, mut mmu) = boot(&[0x00]);
    let f_before = cpu.registers().f();

    let cycles = cpu.step(&mut mmu).unwrap();

    assert_eq!(cycles, 1);
    assert_eq!(cpu.pc(), 0x0101);
    assert_eq!(cpu.clock().m_cycles(), 1);
    assert_eq!(cpu.clock().t_cycles(), 4);
    assert_eq!(cpu.registers().f(), f_before);
}

#[test]
fn ld_bc_then_inc_bc() {
    let (mut cpu, mut mmu) = boot(&[0x01, 0x34, 0x12, 0x03]);

    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.registers().bc(), 0x1234);
    cpu.step(&mut mmu).unwrap();

    assert_eq!(cpu.pc(), 0x0104);
    assert_eq!(cpu.registers().bc(), 0x1235);
    assert_eq!(cpu.clock().m_cycles(), 5);
}

#[test]
fn xor_a_clears_a_and_sets_only_z() {
    let (mut cpu, mut mmu) = boot(&[0xAF]);

    cpu.step(&mut mmu).unwrap();

    assert_eq!(cpu.registers().a, 0x00);
    assert_eq!(cpu.registers().f(), 0x80);
    assert_eq!(cpu.pc(), 0x0101);
    assert_eq!(cpu.clock().m_cycles(), 1);
}

#[test]
fn inc_half_carry_at_nibble_boundary() {
    // LD A, 0x0F; INC A
    let (mut cpu, mut mmu) = boot(&[0x3E, 0x0F, 0x3C]);

    cpu.step(&mut mmu).unwrap();
    cpu.step(&mut mmu).unwrap();

    let regs = cpu.registers();
    assert_eq!(regs.a, 0x10);
    assert!(regs.flag(FLAG_H));
    assert!(!regs.flag(FLAG_N));
    assert!(!regs.flag(FLAG_Z));
}

#[test]
fn inc_overflow_wraps_and_sets_z() {
    // LD A, 0xFF; INC A
    let (mut cpu, mut mmu) = boot(&[0x3E, 0xFF, 0x3C]);

    cpu.step(&mut mmu).unwrap();
    cpu.step(&mut mmu).unwrap();

    let regs = cpu.registers();
    assert_eq!(regs.a, 0x00);
    assert!(regs.flag(FLAG_Z));
    assert!(regs.flag(FLAG_H));
    assert!(!regs.flag(FLAG_N));
}

#[test]
fn dec_underflow_wraps_and_sets_h_n() {
    // LD A, 0x00; DEC A
    let (mut cpu, mut mmu) = boot(&[0x3E, 0x00, 0x3D]);

    cpu.step(&mut mmu).unwrap();
    cpu.step(&mut mmu).unwrap();

    let regs = cpu.registers();
    assert_eq!(regs.a, 0xFF);
    assert!(regs.flag(FLAG_H));
    assert!(regs.flag(FLAG_N));
    assert!(!regs.flag(FLAG_Z));
}

#[test]
fn inc16_overflow_leaves_flags_untouched() {
    // LD HL, 0xFFFF; INC HL
    let (mut cpu, mut mmu) = boot(&[0x21, 0xFF, 0xFF, 0x23]);

    cpu.step(&mut mmu).unwrap();
    let f_before = cpu.registers().f();
    cpu.step(&mut mmu).unwrap();

    assert_eq!(cpu.registers().hl(), 0x0000);
    assert_eq!(cpu.registers().f(), f_before);
}

#[test]
fn add_hl_hl_carries_out_of_bit_15() {
    // LD HL, 0x8000; ADD HL, HL
    let (mut cpu, mut mmu) = boot(&[0x21, 0x00, 0x80, 0x29]);
    let z_before = cpu.registers().flag(FLAG_Z);

    cpu.step(&mut mmu).unwrap();
    cpu.step(&mut mmu).unwrap();

    let regs = cpu.registers();
    assert_eq!(regs.hl(), 0x0000);
    assert!(regs.flag(FLAG_C));
    assert!(!regs.flag(FLAG_H));
    assert!(!regs.flag(FLAG_N));
    assert_eq!(regs.flag(FLAG_Z), z_before);
}

#[test]
fn add_hl_half_carries_out_of_bit_11() {
    // LD HL, 0x0FFF; LD BC, 0x0001; ADD HL, BC
    let (mut cpu, mut mmu) = boot(&[0x21, 0xFF, 0x0F, 0x01, 0x01, 0x00, 0x09]);

    for _ in 0..3 {
        cpu.step(&mut mmu).unwrap();
    }

    let regs = cpu.registers();
    assert_eq!(regs.hl(), 0x1000);
    assert!(regs.flag(FLAG_H));
    assert!(!regs.flag(FLAG_C));
}

#[test]
fn call_and_ret_round_trip() {
    let mut rom = vec![0u8; 32 * 1024];
    rom[ENTRY..ENTRY + 3].copy_from_slice(&[0xCD, 0x50, 0x01]); // CALL 0x0150
    rom[0x0150] = 0xC9; // RET
    let (mut cpu, mut mmu) = boot_rom(rom);

    let call_cycles = cpu.step(&mut mmu).unwrap();
    assert_eq!(call_cycles, 6);
    assert_eq!(cpu.pc(), 0x0150);
    assert_eq!(cpu.sp(), 0xFFFC);
    assert_eq!(mmu.read_byte(0xFFFC), 0x03);
    assert_eq!(mmu.read_byte(0xFFFD), 0x01);

    let ret_cycles = cpu.step(&mut mmu).unwrap();
    assert_eq!(ret_cycles, 4);
    assert_eq!(cpu.pc(), 0x0103);
    assert_eq!(cpu.sp(), 0xFFFE);
    assert_eq!(cpu.clock().m_cycles(), 10);
}

#[test]
fn rst_pushes_pc_and_jumps_to_fixed_vector() {
    let (mut cpu, mut mmu) = boot(&[0xEF]); // RST 28H

    let cycles = cpu.step(&mut mmu).unwrap();

    assert_eq!(cycles, 4);
    assert_eq!(cpu.pc(), 0x0028);
    assert_eq!(cpu.sp(), 0xFFFC);
    assert_eq!(mmu.read_word(0xFFFC), 0x0101);
}

#[test]
fn jr_takes_minimum_displacement() {
    let (mut cpu, mut mmu) = boot(&[0x18, 0x80]); // JR -128

    let cycles = cpu.step(&mut mmu).unwrap();

    assert_eq!(cycles, 3);
    assert_eq!(cpu.pc(), 0x0082);
}

#[test]
fn jr_takes_maximum_displacement() {
    let (mut cpu, mut mmu) = boot(&[0x18, 0x7F]); // JR +127

    cpu.step(&mut mmu).unwrap();

    assert_eq!(cpu.pc(), 0x0181);
}

#[test]
fn conditional_jr_charges_for_the_branch_taken() {
    // XOR A sets Z, so JR NZ falls through and JR Z is taken.
    let (mut cpu, mut mmu) = boot(&[0xAF, 0x20, 0x10, 0x28, 0x10]);

    cpu.step(&mut mmu).unwrap();
    let not_taken = cpu.step(&mut mmu).unwrap();
    let taken = cpu.step(&mut mmu).unwrap();

    assert_eq!(not_taken, 2);
    assert_eq!(taken, 3);
    assert_eq!(cpu.pc(), 0x0105 + 0x10);
}

#[test]
fn pop_af_masks_the_flag_low_nibble() {
    // LD BC, 0x12FF; PUSH BC; POP AF
    let (mut cpu, mut mmu) = boot(&[0x01, 0xFF, 0x12, 0xC5, 0xF1]);

    for _ in 0..3 {
        cpu.step(&mut mmu).unwrap();
    }

    assert_eq!(cpu.registers().af(), 0x12F0);
    assert_eq!(cpu.registers().f() & 0x0F, 0);
}

#[test]
fn cb_dispatch_consumes_exactly_one_extra_byte() {
    // SWAP A on the post-boot A=0x01.
    let (mut cpu, mut mmu) = boot(&[0xCB, 0x37]);

    let cycles = cpu.step(&mut mmu).unwrap();

    assert_eq!(cycles, 2);
    assert_eq!(cpu.pc(), 0x0102);
    assert_eq!(cpu.registers().a, 0x10);
    assert_eq!(cpu.registers().f(), 0x00);
}

#[test]
fn cb_bit_on_hl_costs_three_m_cycles() {
    // LD HL, 0xC000; BIT 0, (HL) with WRAM zeroed.
    let (mut cpu, mut mmu) = boot(&[0x21, 0x00, 0xC0, 0xCB, 0x46]);

    cpu.step(&mut mmu).unwrap();
    let cycles = cpu.step(&mut mmu).unwrap();

    assert_eq!(cycles, 3);
    let regs = cpu.registers();
    assert!(regs.flag(FLAG_Z));
    assert!(regs.flag(FLAG_H));
    assert!(!regs.flag(FLAG_N));
}

#[test]
fn daa_adjusts_a_bcd_addition() {
    // 0x45 + 0x38 = 0x7D binary, 83 decimal.
    let (mut cpu, mut mmu) = boot(&[0x3E, 0x45, 0xC6, 0x38, 0x27]);

    for _ in 0..3 {
        cpu.step(&mut mmu).unwrap();
    }

    assert_eq!(cpu.registers().a, 0x83);
    assert!(!cpu.registers().flag(FLAG_C));
}

#[test]
fn daa_adjusts_a_bcd_subtraction() {
    // 0x42 - 0x09 = 0x39 binary, 33 decimal.
    let (mut cpu, mut mmu) = boot(&[0x3E, 0x42, 0xD6, 0x09, 0x27]);

    for _ in 0..3 {
        cpu.step(&mut mmu).unwrap();
    }

    assert_eq!(cpu.registers().a, 0x33);
}

#[test]
fn cpl_sets_n_and_h() {
    let (mut cpu, mut mmu) = boot(&[0x3E, 0x0F, 0x2F]);

    cpu.step(&mut mmu).unwrap();
    cpu.step(&mut mmu).unwrap();

    let regs = cpu.registers();
    assert_eq!(regs.a, 0xF0);
    assert!(regs.flag(FLAG_N));
    assert!(regs.flag(FLAG_H));
}

#[test]
fn scf_then_ccf_toggle_carry() {
    let (mut cpu, mut mmu) = boot(&[0x37, 0x3F]);

    cpu.step(&mut mmu).unwrap();
    assert!(cpu.registers().flag(FLAG_C));
    cpu.step(&mut mmu).unwrap();
    assert!(!cpu.registers().flag(FLAG_C));
    assert!(!cpu.registers().flag(FLAG_N));
    assert!(!cpu.registers().flag(FLAG_H));
}

#[test]
fn high_page_store_lands_in_zero_page_ram() {
    // LD A, 0x55; LDH (0x80), A
    let (mut cpu, mut mmu) = boot(&[0x3E, 0x55, 0xE0, 0x80]);

    cpu.step(&mut mmu).unwrap();
    let cycles = cpu.step(&mut mmu).unwrap();

    assert_eq!(cycles, 3);
    assert_eq!(mmu.read_byte(0xFF80), 0x55);
}

#[test]
fn reserved_opcode_faults_and_consumes_only_the_opcode_byte() {
    let (mut cpu, mut mmu) = boot(&[0xD3, 0x12]);

    let err = cpu.step(&mut mmu).unwrap_err();

    assert_eq!(
        err,
        CoreError::UnimplementedOpcode {
            opcode: 0xD3,
            cb_prefixed: false
        }
    );
    assert_eq!(cpu.pc(), 0x0101);
    assert_eq!(cpu.clock().m_cycles(), 1);
}

#[test]
fn ei_takes_effect_one_instruction_late() {
    let (mut cpu, mut mmu) = boot(&[0xFB, 0x00, 0x00]);
    mmu.write_byte(0xFFFF, 0x01); // enable VBlank; IF already has it pending

    cpu.step(&mut mmu).unwrap(); // EI
    assert!(!cpu.ime());

    // The instruction after EI still runs with interrupts off.
    cpu.step(&mut mmu).unwrap();
    assert!(cpu.ime());
    assert_eq!(cpu.pc(), 0x0102);

    // Now the pending VBlank is delivered.
    let cycles = cpu.step(&mut mmu).unwrap();
    assert_eq!(cycles, 5);
    assert_eq!(cpu.pc(), 0x0040);
    assert_eq!(cpu.sp(), 0xFFFC);
    assert_eq!(mmu.read_word(0xFFFC), 0x0102);
    assert_eq!(mmu.read_byte(0xFF0F) & 0x01, 0);
    assert!(!cpu.ime());
}

#[test]
fn di_takes_effect_immediately() {
    let (mut cpu, mut mmu) = boot(&[0xFB, 0x00, 0xF3, 0x00]);
    mmu.write_byte(0xFFFF, 0x00);

    cpu.step(&mut mmu).unwrap(); // EI
    cpu.step(&mut mmu).unwrap(); // NOP arms IME
    assert!(cpu.ime());
    cpu.step(&mut mmu).unwrap(); // DI
    assert!(!cpu.ime());
}

#[test]
fn halt_idles_until_an_interrupt_is_pending() {
    let (mut cpu, mut mmu) = boot(&[0x76, 0x00]);
    mmu.write_byte(0xFFFF, 0x00); // nothing enabled, nothing pending

    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.state(), RunState::Halted);
    assert_eq!(cpu.pc(), 0x0101);

    let idle = cpu.step(&mut mmu).unwrap();
    assert_eq!(idle, 1);
    assert_eq!(cpu.pc(), 0x0101);

    // A pending interrupt wakes the CPU even with IME clear.
    mmu.write_byte(0xFFFF, 0x01);
    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.state(), RunState::Running);

    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.pc(), 0x0102);
}

#[test]
fn stop_needs_an_explicit_host_resume() {
    let (mut cpu, mut mmu) = boot(&[0x10, 0x00, 0x00]);

    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.state(), RunState::Stopped);
    assert_eq!(cpu.pc(), 0x0102); // the padding byte is consumed

    let idle = cpu.step(&mut mmu).unwrap();
    assert_eq!(idle, 1);
    assert_eq!(cpu.pc(), 0x0102);

    cpu.resume();
    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.pc(), 0x0103);
}

#[test]
fn reset_is_idempotent() {
    let (mut cpu, mut mmu) = boot(&[0x01, 0x34, 0x12, 0x03]);
    cpu.step(&mut mmu).unwrap();
    cpu.step(&mut mmu).unwrap();

    cpu.reset();
    let first = (cpu.registers(), cpu.clock(), cpu.state());
    cpu.reset();
    let second = (cpu.registers(), cpu.clock(), cpu.state());

    assert_eq!(first, second);
    assert_eq!(cpu.pc(), 0x0100);
    assert_eq!(cpu.clock().m_cycles(), 0);
}

#[test]
fn run_executes_at_least_one_instruction() {
    let (mut cpu, mut mmu) = boot(&[0x00, 0x00]);

    cpu.run(&mut mmu, 0).unwrap();

    assert!(cpu.clock().m_cycles() >= 1);
    assert_eq!(cpu.pc(), 0x0101);
}

#[test]
fn run_overshoots_to_an_instruction_boundary() {
    // LD BC, d16 costs 3 M-cycles; a budget of 2 still finishes it.
    let (mut cpu, mut mmu) = boot(&[0x01, 0x34, 0x12, 0x00]);

    cpu.run(&mut mmu, 2).unwrap();

    assert_eq!(cpu.pc(), 0x0103);
    assert_eq!(cpu.clock().m_cycles(), 3);
}

#[test]
fn flag_low_nibble_stays_zero_across_alu_traffic() {
    let (mut cpu, mut mmu) = boot(&[
        0x3E, 0x99, // LD A, 0x99
        0xC6, 0x77, // ADD A, 0x77
        0x27, // DAA
        0xF5, // PUSH AF
        0xF1, // POP AF
        0x2F, // CPL
        0x37, // SCF
    ]);

    for _ in 0..7 {
        cpu.step(&mut mmu).unwrap();
        assert_eq!(cpu.registers().f() & 0x0F, 0);
    }
}

#[test]
fn boot_rom_runs_first_and_unmaps_itself() {
    let mut bios = [0u8; 256];
    // LD A, 0x01; LDH (0x50), A
    bios[..4].copy_from_slice(&[0x3E, 0x01, 0xE0, 0x50]);
    let rom = vec![0u8; 32 * 1024];
    let mut mmu = Mmu::new();
    mmu.load_rom(&rom).unwrap();
    mmu.load_bios(&bios).unwrap();
    let mut cpu = Cpu::new(false);

    assert!(mmu.in_bios());
    assert_eq!(cpu.pc(), 0x0000);
    assert_eq!(cpu.registers().af(), 0x0000);

    cpu.step(&mut mmu).unwrap();
    cpu.step(&mut mmu).unwrap();

    assert!(!mmu.in_bios());
    assert_eq!(cpu.pc(), 0x0004);
}

#[test]
fn disassembles_from_table_metadata() {
    let (cpu, mmu) = boot(&[0x01, 0x34, 0x12, 0xCB, 0x37, 0x00]);

    assert_eq!(cpu.disassemble(0x0100, &mmu), ("LD BC, $1234".to_string(), 3));
    assert_eq!(cpu.disassemble(0x0103, &mmu), ("SWAP A".to_string(), 2));
    assert_eq!(cpu.disassemble(0x0105, &mmu), ("NOP".to_string(), 1));
}
