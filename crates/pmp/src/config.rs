//! Configuration for the PMP visualizer.
//!
//! This module defines the layout file consumed by the visualizer. It provides:
//! 1. **Entries:** The ordered `pmpaddr`/`pmpcfg` pairs, as hexadecimal strings.
//! 2. **Access Check:** An optional address, size, and access type to resolve.
//! 3. **Display Range:** The address window a renderer clamps regions to.
//! 4. **Policy:** How accesses outside every region are treated.
//!
//! Layouts are JSON documents; raw strings are only validated when converted into
//! model types, so a layout can be loaded and inspected before it is checked.
//!
//! # Example
//!
//! ```
//! use pmpviz_core::config::VisualizerConfig;
//!
//! let json = r#"{
//!     "pmp_entries": [ { "addr": "0x20000000", "cfg": "0x0f" } ],
//!     "access_check": "0x1000",
//!     "access_type": "W"
//! }"#;
//! let config = VisualizerConfig::from_json(json)?;
//! let table = config.table()?;
//! assert_eq!(table.entries()[0].region().end, 0x8000_0000);
//! # Ok::<(), pmpviz_core::PmpError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::common::constants::{PMPADDR_BITS, PMPADDR_MAX};
use crate::common::{AccessType, PmpError};
use crate::pmp::{AccessRequest, NoMatchPolicy, PmpEntry, PmpTable};
use crate::report::DisplayRange;

/// Default configuration constants for the visualizer.
mod defaults {
    /// Start of the default display window.
    pub const DISPLAY_START: &str = "0x80000000";

    /// End of the default display window (1 MiB above the start).
    pub const DISPLAY_END: &str = "0x80100000";
}

/// Root visualizer configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisualizerConfig {
    /// PMP entries in priority order.
    #[serde(default)]
    pub pmp_entries: Vec<EntryConfig>,

    /// Address of the access to resolve, as hex.
    #[serde(default)]
    pub access_check: Option<String>,

    /// Size of the access in bytes; absent means a point check.
    #[serde(default)]
    pub access_size: Option<u64>,

    /// Kind of access (defaults to read).
    #[serde(default)]
    pub access_type: AccessType,

    /// Address window shown by renderers.
    #[serde(default)]
    pub cacheable_region: RegionConfig,

    /// Treatment of accesses no entry contains.
    #[serde(default)]
    pub no_match_policy: NoMatchPolicy,
}

/// One entry of the layout, as raw hex strings.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryConfig {
    /// `pmpaddr` value (byte address >> 2).
    pub addr: String,
    /// `pmpcfg` byte.
    pub cfg: String,
}

/// Display window bounds, as raw hex strings.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionConfig {
    /// Lowest displayed address.
    #[serde(default = "RegionConfig::default_start")]
    pub start: String,

    /// One past the highest displayed address.
    #[serde(default = "RegionConfig::default_end")]
    pub end: String,
}

impl RegionConfig {
    fn default_start() -> String {
        defaults::DISPLAY_START.to_owned()
    }

    fn default_end() -> String {
        defaults::DISPLAY_END.to_owned()
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            start: Self::default_start(),
            end: Self::default_end(),
        }
    }
}

impl VisualizerConfig {
    /// Parses a layout from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`PmpError::Json`] if the text does not match the layout schema.
    pub fn from_json(json: &str) -> Result<Self, PmpError> {
        let config: Self = serde_json::from_str(json)?;
        debug!(
            entries = config.pmp_entries.len(),
            access = config.access_check.as_deref(),
            "loaded pmp layout"
        );
        Ok(config)
    }

    /// Reads and parses a layout file.
    ///
    /// # Errors
    ///
    /// Returns [`PmpError::Io`] if the file cannot be read and
    /// [`PmpError::Json`] if it is not a valid layout.
    pub fn from_path(path: &Path) -> Result<Self, PmpError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Converts the layout entries into PMP entries.
    ///
    /// # Errors
    ///
    /// Fails on malformed hex, address registers wider than the RV64 `pmpaddr`
    /// field, and configuration values wider than a byte.
    pub fn entries(&self) -> Result<Vec<PmpEntry>, PmpError> {
        self.pmp_entries
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let addr = parse_hex(&format!("pmp_entries[{index}].addr"), &raw.addr)?;
                if addr > PMPADDR_MAX {
                    return Err(PmpError::AddressRegisterOutOfRange {
                        index,
                        value: addr,
                        bits: PMPADDR_BITS,
                    });
                }
                let cfg = parse_hex(&format!("pmp_entries[{index}].cfg"), &raw.cfg)?;
                let cfg =
                    u8::try_from(cfg).map_err(|_| PmpError::ConfigOutOfRange { index, value: cfg })?;
                Ok(PmpEntry::new(addr, cfg))
            })
            .collect()
    }

    /// Decodes the layout entries into a table.
    ///
    /// # Errors
    ///
    /// See [`VisualizerConfig::entries`].
    pub fn table(&self) -> Result<PmpTable, PmpError> {
        Ok(PmpTable::new(&self.entries()?))
    }

    /// Builds the configured access check, if there is one.
    ///
    /// # Errors
    ///
    /// Fails on a malformed address or an access that overflows 64 bits.
    pub fn access(&self) -> Result<Option<AccessRequest>, PmpError> {
        self.access_check
            .as_deref()
            .map(|raw| {
                let address = parse_hex("access_check", raw)?;
                AccessRequest::new(address, self.access_size, self.access_type)
            })
            .transpose()
    }

    /// Parses the display window.
    ///
    /// # Errors
    ///
    /// Fails on malformed hex or a window whose start is not below its end.
    pub fn display_range(&self) -> Result<DisplayRange, PmpError> {
        let start = parse_hex("cacheable_region.start", &self.cacheable_region.start)?;
        let end = parse_hex("cacheable_region.end", &self.cacheable_region.end)?;
        DisplayRange::new(start, end)
    }
}

/// Parses a hexadecimal literal with an optional `0x` prefix and `_` separators.
///
/// # Errors
///
/// Returns [`PmpError::InvalidHex`] naming `field` when `value` is not hex or
/// does not fit in 64 bits.
pub fn parse_hex(field: &str, value: &str) -> Result<u64, PmpError> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .replace('_', "");

    u64::from_str_radix(&digits, 16).map_err(|_| PmpError::InvalidHex {
        field: field.to_owned(),
        value: value.to_owned(),
    })
}
