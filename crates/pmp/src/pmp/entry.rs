//! PMP entry decoding.
//!
//! A PMP entry is the pair of a `pmpaddr` register and its `pmpcfg` byte. Every
//! property of the entry (permissions, lock, matching mode, and the byte region it
//! covers) is computed on demand from those two raw fields, so the flags can never
//! drift out of sync with the configuration byte.

use serde::Serialize;

use super::permissions::Permissions;
use super::region::Region;
use crate::common::constants::{PMP_A_MASK, PMP_A_SHIFT, PMP_L, PMP_R, PMP_W, PMP_X};

/// Address-matching mode extracted from the A field (bits 4:3) of pmpcfg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PmpAddrMatch {
    /// Disabled; the entry matches nothing.
    Off = 0,
    /// Top of Range; region is `[pmpaddr[i-1] << 2, pmpaddr[i] << 2)`.
    Tor = 1,
    /// Naturally aligned 4-byte region.
    Na4 = 2,
    /// Naturally aligned power-of-two region.
    Napot = 3,
}

impl PmpAddrMatch {
    /// Decode from the 2-bit A field; bits above the field are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & PMP_A_MASK {
            0 => Self::Off,
            1 => Self::Tor,
            2 => Self::Na4,
            _ => Self::Napot,
        }
    }

    /// Mode name as printed by reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Tor => "TOR",
            Self::Na4 => "NA4",
            Self::Napot => "NAPOT",
        }
    }
}

impl std::fmt::Display for PmpAddrMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single PMP entry as read from hardware registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PmpEntry {
    /// Raw pmpaddr register value (byte address >> 2).
    addr: u64,
    /// Raw configuration byte from pmpcfg.
    cfg: u8,
}

impl PmpEntry {
    /// Creates an entry from its raw `pmpaddr` value and `pmpcfg` byte.
    ///
    /// Any combination is accepted; width checks against the RV64 `pmpaddr`
    /// field belong to whoever produced the raw values.
    pub const fn new(addr: u64, cfg: u8) -> Self {
        Self { addr, cfg }
    }

    /// Returns the raw address register (not a byte address).
    pub const fn address_register(&self) -> u64 {
        self.addr
    }

    /// Returns the raw configuration byte.
    pub const fn config_byte(&self) -> u8 {
        self.cfg
    }

    /// Returns the address-matching mode.
    pub const fn match_mode(&self) -> PmpAddrMatch {
        PmpAddrMatch::from_bits(self.cfg >> PMP_A_SHIFT)
    }

    /// Returns true if the R (read) permission bit is set.
    pub const fn is_readable(&self) -> bool {
        self.cfg & PMP_R != 0
    }

    /// Returns true if the W (write) permission bit is set.
    pub const fn is_writable(&self) -> bool {
        self.cfg & PMP_W != 0
    }

    /// Returns true if the X (execute) permission bit is set.
    pub const fn is_executable(&self) -> bool {
        self.cfg & PMP_X != 0
    }

    /// Returns true if the L (lock) bit is set.
    pub const fn is_locked(&self) -> bool {
        self.cfg & PMP_L != 0
    }

    /// Returns the R/W/X bits as a permission set.
    pub const fn permissions(&self) -> Permissions {
        Permissions::from_cfg(self.cfg)
    }

    /// Computes the byte region `[start, end)` this entry covers.
    ///
    /// `previous` is the raw address register of the entry evaluated just before
    /// this one, or `None` for entry 0. Only TOR reads it.
    pub const fn region(&self, previous: Option<u64>) -> Region {
        match self.match_mode() {
            PmpAddrMatch::Off => Region::EMPTY,
            PmpAddrMatch::Tor => Region::tor(previous, self.addr),
            PmpAddrMatch::Na4 => Region::na4(self.addr),
            PmpAddrMatch::Napot => Region::napot(self.addr),
        }
    }
}
