//! Byte regions covered by PMP entries.
//!
//! Region arithmetic is carried out in 128 bits so shifted address fields never
//! wrap; bounds that do not fit in 64 bits saturate at `u64::MAX`.

use serde::Serialize;

use crate::common::constants::{NA4_SIZE, NAPOT_GRANULE_SHIFT, PMP_SHIFT, XLEN};

/// A half-open byte range `[start, end)`.
///
/// `start >= end` is an empty region that contains nothing; `(0, 0)` is the
/// canonical "no region" value produced by disabled entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Region {
    /// First byte address covered.
    pub start: u64,
    /// One past the last byte address covered.
    pub end: u64,
}

impl Region {
    /// The empty region `(0, 0)`.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Region spanning the whole address space, `(0, 2^64 - 1)`.
    pub const FULL: Self = Self {
        start: 0,
        end: u64::MAX,
    };

    /// Creates a region from its bounds.
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Returns true if the region covers no bytes.
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of bytes covered.
    pub const fn size(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Point test: `start <= address < end`.
    pub const fn contains(&self, address: u64) -> bool {
        self.start <= address && address < self.end
    }

    /// Returns true if the whole access `[address, address + size)` lies inside.
    ///
    /// Without a size this is the point test. A zero-sized access is contained
    /// when `start <= address <= end` of a non-empty region; an access whose end
    /// does not fit in 64 bits is never contained.
    pub const fn contains_access(&self, address: u64, size: Option<u64>) -> bool {
        if self.is_empty() {
            return false;
        }
        match size {
            None => self.contains(address),
            Some(size) => match address.checked_add(size) {
                Some(access_end) => self.start <= address && access_end <= self.end,
                None => false,
            },
        }
    }

    /// Top-of-range region `[previous << 2, addr << 2)`, starting at 0 for entry 0.
    pub(crate) const fn tor(previous: Option<u64>, addr: u64) -> Self {
        let start = match previous {
            Some(prev) => field_to_byte(prev),
            None => 0,
        };
        Self::from_wide(start, field_to_byte(addr))
    }

    /// Four-byte region starting at `addr << 2`.
    pub(crate) const fn na4(addr: u64) -> Self {
        let base = field_to_byte(addr);
        Self::from_wide(base, base + NA4_SIZE as u128)
    }

    /// Naturally aligned power-of-two region.
    ///
    /// With `t` trailing one bits in `addr`, the region is `2^(t + 5)` bytes: the
    /// two-bit register shift plus the 8-byte minimum granule. The base is the
    /// field with those ones cleared, shifted by two. Fields with any of bits
    /// `t + 1..=t + 3` set yield a base that is not a multiple of the size.
    pub(crate) const fn napot(addr: u64) -> Self {
        let trailing = addr.trailing_ones();
        let log2len = trailing + PMP_SHIFT + NAPOT_GRANULE_SHIFT;
        if log2len >= XLEN {
            return Self::FULL;
        }

        let size = 1u128 << log2len;
        let cleared = (addr >> trailing) << trailing;
        let base = field_to_byte(cleared);
        Self::from_wide(base, base + size)
    }

    const fn from_wide(start: u128, end: u128) -> Self {
        Self {
            start: saturate(start),
            end: saturate(end),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:#010x}, {:#010x})", self.start, self.end)
    }
}

/// Converts an address register field to a byte address.
const fn field_to_byte(field: u64) -> u128 {
    (field as u128) << PMP_SHIFT
}

const fn saturate(value: u128) -> u64 {
    if value > u64::MAX as u128 {
        u64::MAX
    } else {
        value as u64
    }
}
