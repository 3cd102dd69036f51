//! Memory Access Types.
//!
//! This module defines the classification of accesses checked against PMP entries.
//! These types are used for the following:
//! 1. **Permission Validation:** Selecting which of the R/W/X bits an entry must grant.
//! 2. **Configuration:** Parsing the `"R"`, `"W"`, `"X"` access type of a layout file.
//! 3. **Reporting:** Labelling the access in renderer output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PmpError;

/// Type of memory access being checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessType {
    /// Data read access. Requires the R bit.
    #[default]
    #[serde(rename = "R", alias = "r")]
    Read,

    /// Data write access. Requires the W bit.
    #[serde(rename = "W", alias = "w")]
    Write,

    /// Instruction fetch. Requires the X bit.
    #[serde(rename = "X", alias = "x")]
    Execute,
}

impl AccessType {
    /// Single-letter name used in layout files and reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "R",
            Self::Write => "W",
            Self::Execute => "X",
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessType {
    type Err = PmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "R" | "r" => Ok(Self::Read),
            "W" | "w" => Ok(Self::Write),
            "X" | "x" => Ok(Self::Execute),
            other => Err(PmpError::InvalidAccessType(other.to_owned())),
        }
    }
}
