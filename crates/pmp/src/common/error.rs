//! Error definitions.
//!
//! Decoding and resolution never fail; errors only arise at the boundaries where
//! raw numbers enter the model:
//! 1. **Access Validation:** Accesses whose byte range does not fit in 64 bits.
//! 2. **Configuration:** Malformed hex literals and out-of-range register values.
//! 3. **I/O:** Reading and parsing layout files.

use thiserror::Error;

/// Errors produced while validating inputs or loading configuration.
#[derive(Debug, Error)]
pub enum PmpError {
    /// `address + size` does not fit in the 64-bit address space.
    #[error("access at {address:#x} of {size} bytes overflows the 64-bit address space")]
    AccessOverflow {
        /// Start address of the access.
        address: u64,
        /// Size of the access in bytes.
        size: u64,
    },

    /// An address register value is wider than the `pmpaddr` field.
    #[error("pmp entry {index}: address register {value:#x} exceeds the {bits}-bit pmpaddr field")]
    AddressRegisterOutOfRange {
        /// Position of the entry in the table.
        index: usize,
        /// Offending register value.
        value: u64,
        /// Width of the field in bits.
        bits: u32,
    },

    /// A configuration value does not fit in a `pmpcfg` byte.
    #[error("pmp entry {index}: configuration value {value:#x} does not fit in 8 bits")]
    ConfigOutOfRange {
        /// Position of the entry in the table.
        index: usize,
        /// Offending configuration value.
        value: u64,
    },

    /// A field that must hold a hexadecimal literal could not be parsed.
    #[error("{field}: invalid hexadecimal value {value:?}")]
    InvalidHex {
        /// Name of the field being parsed.
        field: String,
        /// Raw text of the field.
        value: String,
    },

    /// An access type other than `R`, `W`, or `X`.
    #[error("invalid access type {0:?}, expected R, W or X")]
    InvalidAccessType(String),

    /// A display range whose start is not below its end.
    #[error("invalid display range [{start:#x}, {end:#x})")]
    InvalidDisplayRange {
        /// Lower bound.
        start: u64,
        /// Upper bound.
        end: u64,
    },

    /// The layout file is not valid JSON for the expected schema.
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The layout file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}
