//! Decoded PMP tables.
//!
//! Decoding is a left-to-right fold: each entry's region is computed with the raw
//! address register of the entry before it, which TOR uses as its lower bound.
//! The resulting table is immutable and can be resolved against any number of
//! times.

use super::entry::{PmpAddrMatch, PmpEntry};
use super::region::Region;
use super::resolver::{AccessRequest, Resolution, resolve};

/// An entry together with its position and computed region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedEntry {
    index: usize,
    entry: PmpEntry,
    region: Region,
}

impl DecodedEntry {
    /// Position in the table (hardware priority, lowest first).
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The raw entry.
    pub const fn entry(&self) -> &PmpEntry {
        &self.entry
    }

    /// Address-matching mode.
    pub const fn mode(&self) -> PmpAddrMatch {
        self.entry.match_mode()
    }

    /// Byte region covered.
    pub const fn region(&self) -> Region {
        self.region
    }
}

/// Decodes `entries` in order, threading each entry's raw address into the next.
pub fn decode(entries: &[PmpEntry]) -> Vec<DecodedEntry> {
    entries
        .iter()
        .enumerate()
        .scan(None, |previous, (index, entry)| {
            let region = entry.region(*previous);
            *previous = Some(entry.address_register());
            Some(DecodedEntry {
                index,
                entry: *entry,
                region,
            })
        })
        .collect()
}

/// An ordered PMP table with every region computed up front.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PmpTable {
    entries: Vec<DecodedEntry>,
}

impl PmpTable {
    /// Decodes `entries` into a table.
    pub fn new(entries: &[PmpEntry]) -> Self {
        Self {
            entries: decode(entries),
        }
    }

    /// Decoded entries in priority order.
    pub fn entries(&self) -> &[DecodedEntry] {
        &self.entries
    }

    /// Decoded entry at `index`.
    pub fn get(&self, index: usize) -> Option<&DecodedEntry> {
        self.entries.get(index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves an access against the table.
    pub fn check(&self, request: &AccessRequest) -> Resolution {
        resolve(&self.entries, request)
    }
}
