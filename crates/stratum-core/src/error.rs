//! Error types for recoverable exhaustion.
//!
//! Contract violations (bad alignment, out-of-bounds handles) are not
//! represented here: they panic at the call site.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The backing buffer has no room for the request.
    CapacityExceeded {
        /// Number of bytes requested, excluding alignment padding.
        requested: usize,
        /// Bytes left between the cursor and the end of the buffer.
        remaining: usize,
    },
    /// An `ArenaConfig` failed validation.
    InvalidConfig {
        /// Human-readable description of the validation failure.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, {remaining} bytes remaining"
                )
            }
            Self::InvalidConfig { reason } => write!(f, "invalid arena config: {reason}"),
        }
    }
}

impl Error for ArenaError {}

/// Errors from growable list operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// Reallocating to the doubled capacity failed. The list is unchanged.
    GrowthFailed {
        /// Capacity (in elements) the list tried to grow to.
        requested_capacity: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GrowthFailed { requested_capacity } => {
                write!(
                    f,
                    "list growth failed: could not reserve {requested_capacity} elements"
                )
            }
        }
    }
}

impl Error for ListError {}
