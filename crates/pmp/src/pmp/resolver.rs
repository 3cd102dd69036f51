//! Priority-ordered permission resolution.
//!
//! Entries are scanned in index order, which is hardware priority. The first entry
//! whose region contains the whole access decides the outcome, even when its
//! R/W/X bits deny the access: a containing entry shadows every entry after it.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::permissions::Permissions;
use super::table::DecodedEntry;
use crate::common::{AccessType, PmpError};

/// A memory access to check against the PMP table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessRequest {
    address: u64,
    size: Option<u64>,
    access_type: AccessType,
}

impl AccessRequest {
    /// Creates an access of `size` bytes starting at `address`.
    ///
    /// `None` checks the single byte at `address`; `Some(0)` is an empty access
    /// and is kept distinct.
    ///
    /// # Errors
    ///
    /// Returns [`PmpError::AccessOverflow`] if `address + size` does not fit in
    /// 64 bits.
    pub fn new(
        address: u64,
        size: Option<u64>,
        access_type: AccessType,
    ) -> Result<Self, PmpError> {
        if let Some(size) = size {
            if address.checked_add(size).is_none() {
                return Err(PmpError::AccessOverflow { address, size });
            }
        }
        Ok(Self {
            address,
            size,
            access_type,
        })
    }

    /// Creates a point access with no size.
    pub const fn point(address: u64, access_type: AccessType) -> Self {
        Self {
            address,
            size: None,
            access_type,
        }
    }

    /// Start address of the access.
    pub const fn address(&self) -> u64 {
        self.address
    }

    /// Size of the access in bytes, if one was given.
    pub const fn size(&self) -> Option<u64> {
        self.size
    }

    /// Kind of access.
    pub const fn access_type(&self) -> AccessType {
        self.access_type
    }
}

/// How an access that no entry contains is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoMatchPolicy {
    /// Unmatched accesses are unrestricted.
    #[default]
    Allow,
    /// Unmatched accesses are refused.
    Deny,
}

/// Outcome of resolving an access against a PMP table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    /// Entry `index` contains the access and grants it.
    Granted {
        /// Index of the deciding entry.
        index: usize,
        /// Every permission the entry grants, not only the one requested.
        permissions: Permissions,
    },
    /// Entry `index` contains the access but lacks the required bit.
    Denied {
        /// Index of the deciding entry.
        index: usize,
    },
    /// No entry contains the access.
    NoMatch,
}

impl Resolution {
    /// Index of the deciding entry, if any entry contained the access.
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Granted { index, .. } | Self::Denied { index } => Some(*index),
            Self::NoMatch => None,
        }
    }

    /// Permissions granted; empty for denials and misses.
    pub const fn granted(&self) -> Permissions {
        match self {
            Self::Granted { permissions, .. } => *permissions,
            Self::Denied { .. } | Self::NoMatch => Permissions::NONE,
        }
    }

    /// Returns true if some entry contained the access.
    pub const fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }

    /// Final allow/deny decision, applying `policy` when nothing matched.
    pub const fn is_permitted(&self, policy: NoMatchPolicy) -> bool {
        match self {
            Self::Granted { .. } => true,
            Self::Denied { .. } => false,
            Self::NoMatch => matches!(policy, NoMatchPolicy::Allow),
        }
    }
}

/// Resolves `request` against decoded entries in priority order.
pub fn resolve(entries: &[DecodedEntry], request: &AccessRequest) -> Resolution {
    let access_type = request.access_type();

    for decoded in entries {
        let region = decoded.region();
        if !region.contains_access(request.address(), request.size()) {
            trace!(
                index = decoded.index(),
                start = region.start,
                end = region.end,
                "entry does not contain access"
            );
            continue;
        }

        let permissions = decoded.entry().permissions();
        let resolution = if permissions.allows(access_type) {
            Resolution::Granted {
                index: decoded.index(),
                permissions,
            }
        } else {
            Resolution::Denied {
                index: decoded.index(),
            }
        };
        debug!(
            address = request.address(),
            access = %access_type,
            index = decoded.index(),
            ?resolution,
            "pmp entry decided access"
        );
        return resolution;
    }

    debug!(
        address = request.address(),
        access = %access_type,
        "no pmp entry contains access"
    );
    Resolution::NoMatch
}
