//! Physical Memory Protection (PMP).
//!
//! This module models RISC-V Physical Memory Protection (privileged spec §3.7):
//! decoding `pmpaddr`/`pmpcfg` pairs into regions and resolving accesses against
//! an ordered table of them.
//!
//! PMP supports three address-matching modes besides OFF:
//! - **TOR** (Top of Range): region is `[pmpaddr[i-1], pmpaddr[i])`.
//! - **NA4**: Naturally aligned 4-byte region.
//! - **NAPOT**: Naturally aligned power-of-two region.

/// Entry decoding and address-matching modes.
pub mod entry;
/// Permission sets.
pub mod permissions;
/// Byte regions and containment tests.
pub mod region;
/// Priority scan over decoded entries.
pub mod resolver;
/// Decoded tables.
pub mod table;

pub use entry::{PmpAddrMatch, PmpEntry};
pub use permissions::Permissions;
pub use region::Region;
pub use resolver::{AccessRequest, NoMatchPolicy, Resolution, resolve};
pub use table::{DecodedEntry, PmpTable, decode};
