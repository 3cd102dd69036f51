//! Permission sets granted by PMP entries.

use std::fmt;

use serde::Serialize;

use crate::common::AccessType;
use crate::common::constants::{PMP_R, PMP_W, PMP_X};

/// The R/W/X bits of a pmpcfg byte.
///
/// Displays as the granted letters joined by commas (`R,W,X`), or `None` when
/// nothing is granted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Permissions {
    /// Loads are allowed.
    pub read: bool,
    /// Stores are allowed.
    pub write: bool,
    /// Instruction fetches are allowed.
    pub execute: bool,
}

impl Permissions {
    /// Grants nothing.
    pub const NONE: Self = Self {
        read: false,
        write: false,
        execute: false,
    };

    /// Grants everything.
    pub const ALL: Self = Self {
        read: true,
        write: true,
        execute: true,
    };

    /// Extracts the R/W/X bits of a configuration byte.
    pub const fn from_cfg(cfg: u8) -> Self {
        Self {
            read: cfg & PMP_R != 0,
            write: cfg & PMP_W != 0,
            execute: cfg & PMP_X != 0,
        }
    }

    /// Returns true if no bit is set.
    pub const fn is_empty(&self) -> bool {
        !(self.read || self.write || self.execute)
    }

    /// Returns true if the bit required by `access` is set.
    pub const fn allows(&self, access: AccessType) -> bool {
        match access {
            AccessType::Read => self.read,
            AccessType::Write => self.write,
            AccessType::Execute => self.execute,
        }
    }

    /// Letters of the granted bits, in R, W, X order.
    pub fn letters(&self) -> Vec<&'static str> {
        [(self.read, "R"), (self.write, "W"), (self.execute, "X")]
            .into_iter()
            .filter_map(|(set, name)| set.then_some(name))
            .collect()
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("None")
        } else {
            f.write_str(&self.letters().join(","))
        }
    }
}
