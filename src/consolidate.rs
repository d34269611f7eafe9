//! Consolidation: the single place where "exactly three beacons, all
//! present, fixed order" is enforced before the solver and assembler run.

use std::collections::HashMap;

use crate::algorithms::Trilateration;
use crate::core::{Beacon, BeaconName, Point};
use crate::error::Error;
use crate::message;

/// Result of a successful consolidation.
#[derive(Debug, Clone, PartialEq)]
pub struct Consolidation {
    pub position: Point,
    pub message: String,
}

/// Validates a beacon set and drives the solver and assembler over it.
///
/// Both request shapes funnel through here, so the guarantees are identical
/// whether the data arrived in one request or piecemeal through the
/// registry.
pub struct Consolidator {
    solver: Trilateration,
}

impl Consolidator {
    pub fn new() -> Self {
        Self {
            solver: Trilateration::new(),
        }
    }

    /// One-shot consolidation over beacon records supplied together.
    ///
    /// Requires exactly three records resolving to the three required
    /// names. Records with unrecognized names never match a required
    /// identity, and duplicated names collapse to one slot, so either case
    /// surfaces as missing data.
    pub fn consolidate(&self, beacons: &[Beacon]) -> Result<Consolidation, Error> {
        if beacons.len() != 3 {
            return Err(Error::IncompleteData);
        }

        let mut by_name = HashMap::new();
        for beacon in beacons {
            if let Ok(name) = beacon.name.parse::<BeaconName>() {
                by_name.insert(name, beacon.clone());
            }
        }

        self.consolidate_snapshot(&by_name)
    }

    /// Consolidation over a registry snapshot.
    pub fn consolidate_snapshot(
        &self,
        snapshot: &HashMap<BeaconName, Beacon>,
    ) -> Result<Consolidation, Error> {
        let kenobi = snapshot
            .get(&BeaconName::Kenobi)
            .ok_or(Error::IncompleteData)?;
        let skywalker = snapshot
            .get(&BeaconName::Skywalker)
            .ok_or(Error::IncompleteData)?;
        let sato = snapshot.get(&BeaconName::Sato).ok_or(Error::IncompleteData)?;

        for beacon in [kenobi, skywalker, sato] {
            validate_distance(beacon)?;
        }

        let anchors = BeaconName::ALL.map(BeaconName::position);
        let distances = [kenobi.distance, skywalker.distance, sato.distance];

        let position = self.solver.estimate(&anchors, &distances);
        let message = message::assemble([
            kenobi.fragments.as_slice(),
            skywalker.fragments.as_slice(),
            sato.fragments.as_slice(),
        ]);

        Ok(Consolidation { position, message })
    }
}

impl Default for Consolidator {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_distance(beacon: &Beacon) -> Result<(), Error> {
    if !beacon.distance.is_finite() {
        return Err(Error::InvalidMeasurement {
            reason: format!("{} reported a non-finite distance", beacon.name),
        });
    }
    if beacon.distance < 0.0 {
        return Err(Error::InvalidMeasurement {
            reason: format!("{} reported a negative distance", beacon.name),
        });
    }
    Ok(())
}
