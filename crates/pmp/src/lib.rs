//! RISC-V Physical Memory Protection model.
//!
//! This crate decodes PMP register pairs and resolves memory accesses against them:
//! 1. **Decoder:** Turns raw `pmpaddr`/`pmpcfg` pairs into permissions, matching modes, and byte regions.
//! 2. **Resolver:** Finds the highest-priority entry covering an access and reports its verdict.
//! 3. **Configuration:** Loads entry tables and access checks from JSON layout files.
//! 4. **Reporting:** Produces the per-entry and per-access facts a renderer draws.

/// Common types and constants (access types, errors, field widths).
pub mod common;
/// Visualizer configuration (entry table, access check, display range).
pub mod config;
/// PMP entries, regions, permissions, and the priority resolver.
pub mod pmp;
/// Renderer-facing facts derived from a configuration.
pub mod report;

/// Root configuration type; deserialize with `VisualizerConfig::from_json`.
pub use crate::config::VisualizerConfig;
/// Error type shared by every fallible operation in the crate.
pub use crate::common::PmpError;
/// Decoded entry table; construct with `PmpTable::new`.
pub use crate::pmp::PmpTable;
