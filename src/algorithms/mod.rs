//! Position estimation algorithms.

pub mod trilateration;

pub use trilateration::Trilateration;
