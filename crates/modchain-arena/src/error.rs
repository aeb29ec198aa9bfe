//! Allocator error types.

use std::error::Error;
use std::fmt;

/// Errors reported by node allocators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Every slot is occupied and no further page may be added.
    CapacityExceeded {
        /// Total number of node slots the allocator may ever hold.
        capacity: usize,
    },
    /// An [`ArenaConfig`](crate::ArenaConfig) failed validation.
    InvalidConfig {
        /// Which constraint was violated.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "node allocator exhausted: all {capacity} slots in use")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid arena config: {reason}")
            }
        }
    }
}

impl Error for ArenaError {}
