//! Error taxonomy for the CPU/MMU core.

use thiserror::Error;

/// Fatal conditions surfaced to the host. The core never attempts recovery;
/// a failed `step()` leaves the CPU with PC advanced past the opcode byte
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Decode hit a reserved or unimplemented table entry.
    #[error("unimplemented {}opcode {opcode:#04X}", if *cb_prefixed { "CB-prefixed " } else { "" })]
    UnimplementedOpcode { opcode: u8, cb_prefixed: bool },

    /// A bus access landed in a region with no backing store. The built-in
    /// MMU backs every region with a stub buffer, so this only fires for
    /// hosts that replace a region with an absent collaborator.
    #[error("access to unmapped region at {addr:#06X}")]
    UnmappedRegion { addr: u16 },

    /// ROM image was not the 32 KiB an MBC0 cartridge holds.
    #[error("ROM image is {0} bytes, expected 32768 (MBC0)")]
    InvalidRomSize(usize),

    /// Boot ROM image was not exactly 256 bytes.
    #[error("boot ROM image is {0} bytes, expected 256")]
    InvalidBiosSize(usize),

    /// Reserved for timer/DMA extensions; never raised by the core alone.
    #[error("bus contention at {addr:#06X}")]
    BusContention { addr: u16 },
}
