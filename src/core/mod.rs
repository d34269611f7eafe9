//! Core data types for the location service.

pub mod types;

pub use types::{Beacon, BeaconName, Point};
