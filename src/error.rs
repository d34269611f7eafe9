//! Error kinds surfaced to callers.
//!
//! All of these are client errors: they are reported synchronously with a
//! descriptive message, never retried internally, and never fatal to the
//! process. The solver itself has no error path for finite inputs.

use std::error::Error as StdError;
use std::fmt;

/// Consolidation and submission failures.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Not exactly three beacons, or a required beacon has no data.
    IncompleteData,
    /// A submission named something outside the fixed beacon set.
    InvalidBeaconName { name: String },
    /// A distance measurement that cannot be used (negative or non-finite).
    InvalidMeasurement { reason: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IncompleteData => write!(
                f,
                "insufficient beacon data: kenobi, skywalker and sato are all required, each exactly once"
            ),
            Error::InvalidBeaconName { name } => write!(f, "unknown beacon name: {}", name),
            Error::InvalidMeasurement { reason } => write!(f, "invalid measurement: {}", reason),
        }
    }
}

impl StdError for Error {}
