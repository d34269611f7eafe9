//! Wire payload shapes. Marshalling only; every rule lives in the core.

use serde::{Deserialize, Serialize};

use crate::consolidate::Consolidation;
use crate::core::{Beacon, Point};

/// One beacon record inside a one-shot request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeaconPayload {
    pub name: String,
    pub distance: f64,
    /// Fragments the beacon overheard, one entry per message position.
    pub message: Vec<String>,
}

impl From<BeaconPayload> for Beacon {
    fn from(payload: BeaconPayload) -> Self {
        Beacon::new(payload.name, payload.distance, payload.message)
    }
}

/// Body of `POST /topsecret`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidateRequest {
    pub beacons: Vec<BeaconPayload>,
}

/// Body of `POST /topsecret_split/{beacon_name}`; the name rides in the
/// path, not the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeaconReading {
    pub distance: f64,
    pub message: Vec<String>,
}

impl BeaconReading {
    pub fn into_beacon(self, name: &str) -> Beacon {
        Beacon::new(name, self.distance, self.message)
    }
}

/// Successful consolidation body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidateResponse {
    pub position: PositionBody,
    pub message: String,
}

impl From<Consolidation> for ConsolidateResponse {
    fn from(consolidation: Consolidation) -> Self {
        Self {
            position: consolidation.position.into(),
            message: consolidation.message,
        }
    }
}

/// Wire form of a plane position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionBody {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for PositionBody {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// Single-field acknowledgement payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
