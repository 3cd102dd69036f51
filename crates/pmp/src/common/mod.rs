//! Common types shared by the decoder, resolver, and configuration layers.
//!
//! This module provides:
//! 1. **Constants:** Field widths and shifts of the PMP register encoding.
//! 2. **Access Types:** The read/write/execute classification of an access.
//! 3. **Error Handling:** The crate-wide error type.

/// PMP encoding constants.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types.
pub mod error;

pub use constants::{PMP_SHIFT, XLEN};
pub use data::AccessType;
pub use error::PmpError;
