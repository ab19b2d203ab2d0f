// Flag masks live with the register file; re-exported here so the opcode
// modules keep a single import path.
pub use crate::registers::{FLAG_C, FLAG_H, FLAG_N, FLAG_Z};

// Interrupt vectors (jump targets for the service routines).
pub const VBLANK_VECTOR: u16 = 0x0040;
pub const LCD_STAT_VECTOR: u16 = 0x0048;
pub const TIMER_VECTOR: u16 = 0x0050;
pub const SERIAL_VECTOR: u16 = 0x0058;
pub const JOYPAD_VECTOR: u16 = 0x0060;
