//! Renderer-facing facts.
//!
//! The visualizer draws one bar per entry and a marker for the checked access.
//! Everything it needs is computed here: region bounds, flag labels, info lines,
//! visibility within the display window, and the resolution of the access.

use std::fmt;

use serde::Serialize;

use crate::common::{AccessType, PmpError};
use crate::config::VisualizerConfig;
use crate::pmp::{
    AccessRequest, DecodedEntry, NoMatchPolicy, PmpAddrMatch, PmpTable, Region, Resolution,
};

/// Address window a renderer shows; regions are clamped to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayRange {
    start: u64,
    end: u64,
}

impl DisplayRange {
    /// Creates a window `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`PmpError::InvalidDisplayRange`] unless `start < end`.
    pub fn new(start: u64, end: u64) -> Result<Self, PmpError> {
        if start >= end {
            return Err(PmpError::InvalidDisplayRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Lowest displayed address.
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// One past the highest displayed address.
    pub const fn end(&self) -> u64 {
        self.end
    }

    /// Returns true if a non-empty region extends outside the window.
    pub const fn is_partially_visible(&self, region: Region) -> bool {
        !region.is_empty() && (region.start < self.start || region.end > self.end)
    }

    /// Clamps both bounds of `region` into the window.
    pub const fn clamp(&self, region: Region) -> Region {
        Region::new(self.clamp_addr(region.start), self.clamp_addr(region.end))
    }

    const fn clamp_addr(&self, addr: u64) -> u64 {
        if addr < self.start {
            self.start
        } else if addr > self.end {
            self.end
        } else {
            addr
        }
    }
}

/// Everything a renderer draws for one entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    /// Position in the table.
    pub index: usize,
    /// Address-matching mode.
    pub mode: PmpAddrMatch,
    /// First byte covered.
    pub start: u64,
    /// One past the last byte covered.
    pub end: u64,
    /// R bit.
    pub readable: bool,
    /// W bit.
    pub writable: bool,
    /// X bit.
    pub executable: bool,
    /// L bit.
    pub locked: bool,
    /// Region extends outside the display window.
    pub partially_visible: bool,
    /// Region clamped to the display window.
    pub visible: Region,
    /// Bar label, e.g. `PMP0 (R,W,L)`.
    pub label: String,
    /// Info line, e.g. `PMP0: TOR, Start: 0x00000000, End: 0x80000000`.
    pub info: String,
}

impl EntryReport {
    /// Builds the report of one decoded entry.
    pub fn new(decoded: &DecodedEntry, display: &DisplayRange) -> Self {
        let entry = decoded.entry();
        let region = decoded.region();
        let index = decoded.index();

        let mut flags = entry.permissions().letters();
        if entry.is_locked() {
            flags.push("L");
        }
        let label = format!("PMP{index} ({})", flags.join(","));

        let partially_visible = display.is_partially_visible(region);
        let mut info = format!(
            "PMP{index}: {}, Start: 0x{:08x}, End: 0x{:08x}",
            decoded.mode(),
            region.start,
            region.end
        );
        if partially_visible {
            info.push_str(" [Partially visible]");
        }

        Self {
            index,
            mode: decoded.mode(),
            start: region.start,
            end: region.end,
            readable: entry.is_readable(),
            writable: entry.is_writable(),
            executable: entry.is_executable(),
            locked: entry.is_locked(),
            partially_visible,
            visible: display.clamp(region),
            label,
            info,
        }
    }
}

/// Everything a renderer draws for the checked access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccessReport {
    /// Start address.
    pub address: u64,
    /// Size in bytes, if given.
    pub size: Option<u64>,
    /// Kind of access.
    pub access_type: AccessType,
    /// Outcome of the priority scan.
    pub resolution: Resolution,
    /// Final decision after applying the no-match policy.
    pub permitted: bool,
    /// One-line verdict, e.g. `PMP0: R,W,X` or `Perms: No Match`.
    pub summary: String,
}

impl AccessReport {
    /// Resolves `request` against `table` and describes the outcome.
    pub fn new(table: &PmpTable, request: &AccessRequest, policy: NoMatchPolicy) -> Self {
        let resolution = table.check(request);
        let summary = match resolution {
            Resolution::Granted { index, permissions } => format!("PMP{index}: {permissions}"),
            Resolution::Denied { index } => format!("PMP{index}: denied"),
            Resolution::NoMatch => "Perms: No Match".to_owned(),
        };

        Self {
            address: request.address(),
            size: request.size(),
            access_type: request.access_type(),
            resolution,
            permitted: resolution.is_permitted(policy),
            summary,
        }
    }

    /// Marker annotation lines, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Access: 0x{:x}", self.address)];
        if let Some(size) = self.size {
            lines.push(format!("Size: {size} bytes"));
        }
        lines.push(format!("Type: {}", self.access_type));
        lines.push(self.summary.clone());
        lines
    }
}

/// Complete set of facts for one layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Display window.
    pub display: DisplayRange,
    /// Policy applied to unmatched accesses.
    pub policy: NoMatchPolicy,
    /// One report per entry, in priority order.
    pub entries: Vec<EntryReport>,
    /// The access check, if the layout has one.
    pub access: Option<AccessReport>,
}

impl Report {
    /// Validates a layout and computes its report.
    ///
    /// # Errors
    ///
    /// Propagates any validation error of the entries, access, or display range.
    pub fn build(config: &VisualizerConfig) -> Result<Self, PmpError> {
        let table = config.table()?;
        let display = config.display_range()?;
        let access = config.access()?;
        Ok(Self::from_parts(
            &table,
            display,
            access.as_ref(),
            config.no_match_policy,
        ))
    }

    /// Computes a report from already validated parts.
    pub fn from_parts(
        table: &PmpTable,
        display: DisplayRange,
        access: Option<&AccessRequest>,
        policy: NoMatchPolicy,
    ) -> Self {
        Self {
            display,
            policy,
            entries: table
                .entries()
                .iter()
                .map(|decoded| EntryReport::new(decoded, &display))
                .collect(),
            access: access.map(|request| AccessReport::new(table, request, policy)),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}  {}", entry.info, entry.label)?;
        }
        if let Some(access) = &self.access {
            writeln!(f)?;
            for line in access.lines() {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}
