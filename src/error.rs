//! Error taxonomy for roster optimization.
//!
//! Every error is fatal to the call that raised it: there is no partial
//! result and no transient failure mode. Once inputs pass validation the
//! search always produces an [`Allocation`](crate::roster::Allocation).

use thiserror::Error;

/// Errors reported by the roster core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    /// Empty official pool, non-positive station count, or duplicate ids.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Fewer top-tier officials than stations requested.
    #[error("not enough top-tier officials: need {required}, have {actual}")]
    UnsatisfiableConstraint {
        /// Top-tier officials needed (one per station).
        required: usize,
        /// Top-tier officials present in the pool.
        actual: usize,
    },

    /// An official failed entry validation.
    #[error("invalid official '{id}': {reason}")]
    InvalidOfficial { id: String, reason: String },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type RosterResult<T> = Result<T, RosterError>;
