//! Core data types: plane geometry and beacon identities.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// 2D plane coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// The three fixed beacon identities. Any other name is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeaconName {
    Kenobi,
    Skywalker,
    Sato,
}

impl BeaconName {
    /// Canonical beacon order. Distance extraction and the fragment
    /// tie-break both follow this order.
    pub const ALL: [BeaconName; 3] = [BeaconName::Kenobi, BeaconName::Skywalker, BeaconName::Sato];

    /// Canonical lowercase form of the name.
    pub fn as_str(self) -> &'static str {
        match self {
            BeaconName::Kenobi => "kenobi",
            BeaconName::Skywalker => "skywalker",
            BeaconName::Sato => "sato",
        }
    }

    /// Fixed plane position of the beacon.
    pub fn position(self) -> Point {
        match self {
            BeaconName::Kenobi => Point::new(-500.0, -200.0),
            BeaconName::Skywalker => Point::new(100.0, -100.0),
            BeaconName::Sato => Point::new(500.0, 100.0),
        }
    }
}

impl fmt::Display for BeaconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeaconName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kenobi" => Ok(BeaconName::Kenobi),
            "skywalker" => Ok(BeaconName::Skywalker),
            "sato" => Ok(BeaconName::Sato),
            _ => Err(Error::InvalidBeaconName { name: s.to_string() }),
        }
    }
}

/// One beacon's submission: its measured distance to the emitter and the
/// fragments it overheard at each message position.
#[derive(Debug, Clone, PartialEq)]
pub struct Beacon {
    pub name: String,
    pub distance: f64,
    pub fragments: Vec<String>,
}

impl Beacon {
    pub fn new(name: impl Into<String>, distance: f64, fragments: Vec<String>) -> Self {
        Self {
            name: name.into(),
            distance,
            fragments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("kenobi".parse::<BeaconName>().unwrap(), BeaconName::Kenobi);
        assert_eq!("KENOBI".parse::<BeaconName>().unwrap(), BeaconName::Kenobi);
        assert_eq!(
            "Skywalker".parse::<BeaconName>().unwrap(),
            BeaconName::Skywalker
        );
        assert_eq!("sAtO".parse::<BeaconName>().unwrap(), BeaconName::Sato);
    }

    #[test]
    fn test_unknown_names_fail_to_parse() {
        for name in ["deathstar", "", "kenobi ", "r2d2"] {
            assert!(name.parse::<BeaconName>().is_err(), "{:?} parsed", name);
        }
    }

    #[test]
    fn test_canonical_order_and_positions() {
        assert_eq!(
            BeaconName::ALL,
            [BeaconName::Kenobi, BeaconName::Skywalker, BeaconName::Sato]
        );
        assert_eq!(BeaconName::Kenobi.position(), Point::new(-500.0, -200.0));
        assert_eq!(BeaconName::Skywalker.position(), Point::new(100.0, -100.0));
        assert_eq!(BeaconName::Sato.position(), Point::new(500.0, 100.0));
    }

    #[test]
    fn test_distance() {
        let origin = Point::new(0.0, 0.0);
        assert!((Point::new(3.0, 4.0).distance_to(&origin) - 5.0).abs() < 1e-12);
        assert!(
            (BeaconName::Skywalker.position().distance_to(&origin) - 141.4213562373095).abs()
                < 1e-9
        );
    }
}
