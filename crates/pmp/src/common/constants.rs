//! PMP Encoding Constants.
//!
//! Bit positions and widths of the `pmpcfg` byte and `pmpaddr` register for an
//! RV64 target, plus the shift applied when turning address fields into byte
//! addresses.

/// Number of low address bits dropped by the `pmpaddr` encoding.
pub const PMP_SHIFT: u32 = 2;

/// Target address width in bits.
pub const XLEN: u32 = 64;

/// log2 of the smallest NAPOT granule (8 bytes).
pub const NAPOT_GRANULE_SHIFT: u32 = 3;

/// Size in bytes of an NA4 region.
pub const NA4_SIZE: u64 = 4;

/// Width of the RV64 `pmpaddr` field (address bits 55:2).
pub const PMPADDR_BITS: u32 = 54;

/// Largest value an RV64 `pmpaddr` register can hold.
pub const PMPADDR_MAX: u64 = (1 << PMPADDR_BITS) - 1;

/// Read permission bit of `pmpcfg`.
pub const PMP_R: u8 = 1 << 0;

/// Write permission bit of `pmpcfg`.
pub const PMP_W: u8 = 1 << 1;

/// Execute permission bit of `pmpcfg`.
pub const PMP_X: u8 = 1 << 2;

/// Shift of the two-bit A (address-matching) field of `pmpcfg`.
pub const PMP_A_SHIFT: u8 = 3;

/// Mask of the A field after shifting.
pub const PMP_A_MASK: u8 = 0x3;

/// Lock bit of `pmpcfg`.
pub const PMP_L: u8 = 1 << 7;
