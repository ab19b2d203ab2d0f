//! The Sharp LR35902 CPU interpreter.

use crate::error::CoreError;
use crate::memory_map;
use crate::memory_map::{
    JOYPAD_INTERRUPT_BIT, LCD_STAT_INTERRUPT_BIT, SERIAL_INTERRUPT_BIT, TIMER_INTERRUPT_BIT,
    VBLANK_INTERRUPT_BIT,
};
use crate::mmu::Mmu;
use crate::registers::Registers;
use instruction::{CB_INSTRUCTIONS, INSTRUCTIONS};

// Declare submodules
mod constants;
#[macro_use]
mod ops_macros;
mod instruction;
mod ops_alu;
mod ops_cb;
mod ops_control;
mod ops_load;
mod ops_rot_shift;

pub use constants::*;
pub use instruction::Instruction;

// Type alias for CPU operation results
pub type CpuResult<T> = Result<T, CoreError>;

/// Machine-cycle accumulator. One M-cycle is four T-cycles on the DMG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    m_cycles: u64,
    t_cycles: u64,
}

impl Clock {
    #[inline(always)]
    pub fn m_cycles(&self) -> u64 {
        self.m_cycles
    }

    #[inline(always)]
    pub fn t_cycles(&self) -> u64 {
        self.t_cycles
    }

    #[inline(always)]
    fn advance(&mut self, m_cycles: u64) {
        self.m_cycles = self.m_cycles.wrapping_add(m_cycles);
        self.t_cycles = self.t_cycles.wrapping_add(m_cycles * 4);
    }

    fn reset(&mut self) {
        self.m_cycles = 0;
        self.t_cycles = 0;
    }
}

/// Execution state per the HALT/STOP contract: `Halted` clears on a pending
/// interrupt, `Stopped` only on an explicit host `resume()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    Halted,
    Stopped,
}

/// The LR35902 CPU state and execution logic.
#[derive(Debug, Clone)]
pub struct Cpu {
    regs: Registers,
    clock: Clock,
    state: RunState,

    ime: bool,           // Interrupt Master Enable
    ime_scheduled: bool, // EI arms IME one instruction late

    // Whether construction skipped the boot ROM; reset() restores the
    // matching power-on register state.
    skip_boot_rom: bool,

    fetched_opcode: u8,  // Last opcode fetched (for error reporting)
    instruction_pc: u16, // PC at the start of the current instruction
}

impl Cpu {
    /// Creates a new CPU. With `skip_boot_rom` the register file takes the
    /// documented DMG post-boot values and execution starts at 0x0100;
    /// otherwise everything is zeroed and execution starts inside the boot
    /// ROM at 0x0000.
    pub fn new(skip_boot_rom: bool) -> Self {
        let mut cpu = Cpu {
            regs: Registers::zeroed(),
            clock: Clock::default(),
            state: RunState::Running,
            ime: false,
            ime_scheduled: false,
            skip_boot_rom,
            fetched_opcode: 0,
            instruction_pc: 0,
        };
        cpu.reset();
        cpu
    }

    /// Restores the power-on state for the configured boot mode and zeroes
    /// the clock. Idempotent.
    pub fn reset(&mut self) {
        self.regs = if self.skip_boot_rom {
            Registers::post_boot()
        } else {
            Registers::zeroed()
        };
        self.clock.reset();
        self.state = RunState::Running;
        self.ime = false;
        self.ime_scheduled = false;
        self.fetched_opcode = 0;
        self.instruction_pc = 0;
    }

    /// Executes one fetch/decode/execute cycle and returns the M-cycles
    /// consumed. Interrupt delivery and HALT/STOP idling also count as one
    /// step each.
    pub fn step(&mut self, mmu: &mut Mmu) -> CpuResult<u8> {
        // EI takes effect one instruction late: the instruction executed in
        // this step still runs with interrupts off.
        let mut ime_just_enabled = false;
        if self.ime_scheduled {
            self.ime = true;
            self.ime_scheduled = false;
            ime_just_enabled = true;
        }

        // Stopped: nothing is dispatched until the host calls resume().
        if self.state == RunState::Stopped {
            self.clock.advance(1);
            return Ok(1);
        }

        // Halted: idle until an interrupt is pending, IME or not. Waking
        // costs one M-cycle; execution resumes on the following step.
        if self.state == RunState::Halted {
            if self.pending_interrupts(mmu) != 0 {
                self.state = RunState::Running;
            }
            self.clock.advance(1);
            return Ok(1);
        }

        // Deliver the highest-priority pending interrupt.
        if self.ime && !ime_just_enabled {
            if let Some(cycles) = self.service_interrupt(mmu) {
                self.clock.advance(cycles as u64);
                return Ok(cycles);
            }
        }

        // --- Fetch ---
        self.instruction_pc = self.regs.pc;
        self.fetched_opcode = mmu.read_byte(self.regs.pc);

        // --- Decode (0xCB descends into the second table) ---
        let instruction: &Instruction = if self.fetched_opcode == 0xCB {
            let cb_opcode = mmu.read_byte(self.regs.pc.wrapping_add(1));
            &CB_INSTRUCTIONS[cb_opcode as usize]
        } else {
            &INSTRUCTIONS[self.fetched_opcode as usize]
        };

        // --- Advance PC past opcode and operands ---
        self.regs.pc = self.regs.pc.wrapping_add(instruction.length as u16);

        // --- Execute ---
        match (instruction.execute)(self, mmu) {
            Ok(extra_cycles) => {
                let cycles = instruction.cycles + extra_cycles;
                self.clock.advance(cycles as u64);
                Ok(cycles)
            }
            Err(error) => {
                // Only the opcode byte of a failing instruction is consumed.
                self.regs.pc = self.instruction_pc.wrapping_add(1);
                self.clock.advance(instruction.cycles as u64);
                log::error!(
                    "CPU fault at PC={:#06X} (opcode {:#04X}): {}",
                    self.instruction_pc,
                    self.fetched_opcode,
                    error
                );
                Err(error)
            }
        }
    }

    /// Steps until the clock reaches `until_m_cycles`, executing at least one
    /// instruction even when the budget is already exhausted.
    pub fn run(&mut self, mmu: &mut Mmu, until_m_cycles: u64) -> CpuResult<()> {
        loop {
            self.step(mmu)?;
            if self.clock.m_cycles >= until_m_cycles {
                return Ok(());
            }
        }
    }

    /// Clears the Stopped state. The Halted state clears on its own when an
    /// interrupt becomes pending.
    pub fn resume(&mut self) {
        if self.state == RunState::Stopped {
            self.state = RunState::Running;
        }
    }

    // --- Interrupts ---

    #[inline(always)]
    fn pending_interrupts(&self, mmu: &Mmu) -> u8 {
        mmu.read_byte(memory_map::IF_ADDR)
            & mmu.read_byte(memory_map::INTERRUPT_ENABLE_REGISTER)
            & 0x1F
    }

    /// Services the highest-priority pending interrupt, if any: clears its
    /// IF bit, pushes PC and jumps to the vector. Returns the M-cycles
    /// consumed.
    fn service_interrupt(&mut self, mmu: &mut Mmu) -> Option<u8> {
        let pending = self.pending_interrupts(mmu);
        if pending == 0 {
            return None;
        }

        self.ime = false;
        self.ime_scheduled = false;

        let (vector, interrupt_bit) = if pending & (1 << VBLANK_INTERRUPT_BIT) != 0 {
            (VBLANK_VECTOR, VBLANK_INTERRUPT_BIT)
        } else if pending & (1 << LCD_STAT_INTERRUPT_BIT) != 0 {
            (LCD_STAT_VECTOR, LCD_STAT_INTERRUPT_BIT)
        } else if pending & (1 << TIMER_INTERRUPT_BIT) != 0 {
            (TIMER_VECTOR, TIMER_INTERRUPT_BIT)
        } else if pending & (1 << SERIAL_INTERRUPT_BIT) != 0 {
            (SERIAL_VECTOR, SERIAL_INTERRUPT_BIT)
        } else {
            (JOYPAD_VECTOR, JOYPAD_INTERRUPT_BIT)
        };

        let if_flags = mmu.read_byte(memory_map::IF_ADDR);
        mmu.write_byte(memory_map::IF_ADDR, if_flags & !(1 << interrupt_bit));
        self.push_word(self.regs.pc, mmu);
        self.regs.pc = vector;
        Some(5)
    }

    // --- Operand Access Helpers ---
    #[inline(always)]
    fn read_d8(&self, mmu: &Mmu) -> u8 {
        mmu.read_byte(self.instruction_pc.wrapping_add(1))
    }
    #[inline(always)]
    fn read_d16(&self, mmu: &Mmu) -> u16 {
        let lo = mmu.read_byte(self.instruction_pc.wrapping_add(1));
        let hi = mmu.read_byte(self.instruction_pc.wrapping_add(2));
        u16::from_le_bytes([lo, hi])
    }
    #[inline(always)]
    fn read_r8(&self, mmu: &Mmu) -> i8 {
        mmu.read_byte(self.instruction_pc.wrapping_add(1)) as i8
    }

    // --- Stack Operations (the stack grows downward) ---
    #[inline(always)]
    fn push_word(&mut self, value: u16, mmu: &mut Mmu) {
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        mmu.write_word(self.regs.sp, value);
    }
    #[inline(always)]
    fn pop_word(&mut self, mmu: &mut Mmu) -> u16 {
        let value = mmu.read_word(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }

    // --- ALU Helpers ---
    //
    // Arithmetic is done widened; carries are recovered from the result.
    // A carry into bit 4 flips bit 4 of `a ^ operand ^ result`, which
    // covers add, subtract and carry-in uniformly.

    fn inc_u8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.regs.set_flag(FLAG_H, (value ^ result) & 0x10 != 0);
        self.regs.set_flag(FLAG_Z, result == 0);
        self.regs.set_flag(FLAG_N, false);
        result
    }
    fn dec_u8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.regs.set_flag(FLAG_H, (value ^ result) & 0x10 != 0);
        self.regs.set_flag(FLAG_Z, result == 0);
        self.regs.set_flag(FLAG_N, true);
        result
    }
    fn add_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let wide = hl as u32 + value as u32;
        self.regs.set_hl(wide as u16);
        self.regs.set_flag(FLAG_H, (hl ^ value ^ wide as u16) & 0x1000 != 0);
        self.regs.set_flag(FLAG_C, wide > 0xFFFF);
        self.regs.set_flag(FLAG_N, false);
    }
    fn add_a(&mut self, value: u8, with_carry: bool) {
        let a = self.regs.a;
        let carry_in = (with_carry && self.regs.flag(FLAG_C)) as u16;
        let wide = a as u16 + value as u16 + carry_in;
        let result = wide as u8;
        self.regs.a = result;
        self.regs.set_flag(FLAG_Z, result == 0);
        self.regs.set_flag(FLAG_H, (a ^ value ^ result) & 0x10 != 0);
        self.regs.set_flag(FLAG_C, wide > 0xFF);
        self.regs.set_flag(FLAG_N, false);
    }
    fn sub_a(&mut self, value: u8, with_carry: bool) {
        let a = self.regs.a;
        let borrow_in = (with_carry && self.regs.flag(FLAG_C)) as u16;
        // A borrow wraps the widened difference past 0xFF.
        let wide = (a as u16)
            .wrapping_sub(value as u16)
            .wrapping_sub(borrow_in);
        let result = wide as u8;
        self.regs.a = result;
        self.regs.set_flag(FLAG_Z, result == 0);
        self.regs.set_flag(FLAG_H, (a ^ value ^ result) & 0x10 != 0);
        self.regs.set_flag(FLAG_C, wide > 0xFF);
        self.regs.set_flag(FLAG_N, true);
    }
    // Shared tail for AND/XOR/OR: only H differs between them.
    fn logic_flags(&mut self, half: bool) {
        self.regs.set_flag(FLAG_Z, self.regs.a == 0);
        self.regs.set_flag(FLAG_H, half);
        self.regs.set_flag(FLAG_N | FLAG_C, false);
    }
    fn and_a(&mut self, value: u8, _with_carry: bool) {
        self.regs.a &= value;
        self.logic_flags(true);
    }
    fn xor_a(&mut self, value: u8, _with_carry: bool) {
        self.regs.a ^= value;
        self.logic_flags(false);
    }
    fn or_a(&mut self, value: u8, _with_carry: bool) {
        self.regs.a |= value;
        self.logic_flags(false);
    }
    // CP derives its flags directly; A is never written.
    fn cp_a(&mut self, value: u8, _with_carry: bool) {
        let a = self.regs.a;
        self.regs.set_flag(FLAG_Z, a == value);
        self.regs.set_flag(FLAG_H, (a & 0x0F) < (value & 0x0F));
        self.regs.set_flag(FLAG_C, a < value);
        self.regs.set_flag(FLAG_N, true);
    }

    // --- Rotate/Shift/Bit Helpers (shared by the CB table) ---

    // Common flag tail: Z from the result, C from the ejected bit, N and H
    // always clear.
    fn shift_flags(&mut self, result: u8, ejected: bool) -> u8 {
        self.regs.set_flag(FLAG_Z, result == 0);
        self.regs.set_flag(FLAG_C, ejected);
        self.regs.set_flag(FLAG_N | FLAG_H, false);
        result
    }
    fn rlc(&mut self, value: u8) -> u8 {
        self.shift_flags((value << 1) | (value >> 7), value & 0x80 != 0)
    }
    fn rrc(&mut self, value: u8) -> u8 {
        self.shift_flags((value >> 1) | (value << 7), value & 0x01 != 0)
    }
    fn rl(&mut self, value: u8) -> u8 {
        let carry_in = self.regs.flag(FLAG_C) as u8;
        self.shift_flags((value << 1) | carry_in, value & 0x80 != 0)
    }
    fn rr(&mut self, value: u8) -> u8 {
        let carry_in = (self.regs.flag(FLAG_C) as u8) << 7;
        self.shift_flags((value >> 1) | carry_in, value & 0x01 != 0)
    }
    fn sla(&mut self, value: u8) -> u8 {
        self.shift_flags(value << 1, value & 0x80 != 0)
    }
    fn sra(&mut self, value: u8) -> u8 {
        // Arithmetic shift keeps the sign bit.
        self.shift_flags(((value as i8) >> 1) as u8, value & 0x01 != 0)
    }
    fn swap(&mut self, value: u8) -> u8 {
        self.shift_flags((value << 4) | (value >> 4), false)
    }
    fn srl(&mut self, value: u8) -> u8 {
        self.shift_flags(value >> 1, value & 0x01 != 0)
    }
    fn test_bit(&mut self, bit: u8, value: u8) {
        self.regs.set_flag(FLAG_Z, value & (1 << bit) == 0);
        self.regs.set_flag(FLAG_H, true);
        self.regs.set_flag(FLAG_N, false);
    }

    /// Decimal-adjusts A after a BCD add or subtract: one composed offset,
    /// applied in the direction N records.
    fn daa(&mut self) {
        let a = self.regs.a;
        let subtract = self.regs.flag(FLAG_N);
        let mut offset = 0u8;
        if self.regs.flag(FLAG_H) || (!subtract && a & 0x0F > 0x09) {
            offset = 0x06;
        }
        // After a subtract the carry passes through untouched; after an add
        // it also latches when the high digit overflows.
        let carry = self.regs.flag(FLAG_C) || (!subtract && a > 0x99);
        if carry {
            offset |= 0x60;
        }
        self.regs.a = if subtract {
            a.wrapping_sub(offset)
        } else {
            a.wrapping_add(offset)
        };
        self.regs.set_flag(FLAG_Z, self.regs.a == 0);
        self.regs.set_flag(FLAG_H, false);
        self.regs.set_flag(FLAG_C, carry);
    }

    // --- Public accessors ---
    #[inline(always)]
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }
    #[inline(always)]
    pub fn sp(&self) -> u16 {
        self.regs.sp
    }
    /// A copy of the whole register file.
    #[inline(always)]
    pub fn registers(&self) -> Registers {
        self.regs
    }
    #[inline(always)]
    pub fn clock(&self) -> Clock {
        self.clock
    }
    #[inline(always)]
    pub fn ime(&self) -> bool {
        self.ime
    }
    #[inline(always)]
    pub fn state(&self) -> RunState {
        self.state
    }
    #[inline(always)]
    pub fn halted(&self) -> bool {
        self.state == RunState::Halted
    }
    #[inline(always)]
    pub fn stopped(&self) -> bool {
        self.state == RunState::Stopped
    }

    // --- Debugging Helpers ---

    /// Formats the instruction at `address` from table metadata. Returns the
    /// rendered mnemonic and the instruction length in bytes.
    pub fn disassemble(&self, address: u16, mmu: &Mmu) -> (String, u8) {
        let opcode = mmu.read_byte(address);
        if opcode == 0xCB {
            let cb_opcode = mmu.read_byte(address.wrapping_add(1));
            (CB_INSTRUCTIONS[cb_opcode as usize].mnemonic.to_string(), 2)
        } else {
            let instr = &INSTRUCTIONS[opcode as usize];
            let operand = match instr.length {
                2 => {
                    let d8 = mmu.read_byte(address.wrapping_add(1));
                    if instr.mnemonic.starts_with("JR")
                        || instr.mnemonic == "ADD SP, r8"
                        || instr.mnemonic == "LD HL, SP+r8"
                    {
                        format!("${:+}", d8 as i8)
                    } else {
                        format!("${:02X}", d8)
                    }
                }
                3 => {
                    let lo = mmu.read_byte(address.wrapping_add(1));
                    let hi = mmu.read_byte(address.wrapping_add(2));
                    format!("${:04X}", u16::from_le_bytes([lo, hi]))
                }
                _ => String::new(),
            };
            let rendered = instr
                .mnemonic
                .replace("d16", &operand)
                .replace("a16", &operand)
                .replace("d8", &operand)
                .replace("r8", &operand)
                .trim_end()
                .to_string();
            (rendered, instr.length)
        }
    }
}
