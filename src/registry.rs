//! In-memory store for piecemeal beacon submissions.

use std::collections::HashMap;

use dashmap::DashMap;

use crate::core::{Beacon, BeaconName};
use crate::error::Error;

/// Per-name slots holding the most recent submission of each beacon.
///
/// Submissions to different names never contend, and a snapshot observes
/// each entry either before or after a concurrent overwrite, never
/// mid-write; the map itself is the only synchronization. Entries live for
/// the process lifetime unless overwritten or explicitly cleared.
#[derive(Debug, Default)]
pub struct BeaconRegistry {
    slots: DashMap<BeaconName, Beacon>,
}

impl BeaconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite the slot for `name`.
    ///
    /// The path name is authoritative: it is parsed case-insensitively and
    /// its canonical lowercase form replaces whatever the record carried.
    /// An unrecognized name is rejected without touching any slot.
    pub fn submit(&self, name: &str, mut beacon: Beacon) -> Result<BeaconName, Error> {
        let key: BeaconName = name.parse()?;
        beacon.name = key.as_str().to_string();
        self.slots.insert(key, beacon);
        Ok(key)
    }

    /// Clone the current contents. Consolidation works on this immutable
    /// copy, so no registry lock is held across the computation.
    pub fn snapshot(&self) -> HashMap<BeaconName, Beacon> {
        self.slots
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect()
    }

    /// Number of beacons with stored data.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop all stored submissions.
    pub fn clear(&self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn beacon(distance: f64, fragments: &[&str]) -> Beacon {
        Beacon::new("", distance, fragments.iter().map(|f| f.to_string()).collect())
    }

    #[test]
    fn test_submit_then_snapshot() {
        let registry = BeaconRegistry::new();
        registry.submit("kenobi", beacon(100.0, &["a"])).unwrap();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 1);
        let stored = &snapshot[&BeaconName::Kenobi];
        assert_eq!(stored.distance, 100.0);
        assert_eq!(stored.fragments, vec!["a".to_string()]);
    }

    #[test]
    fn test_name_is_normalized_into_the_record() {
        let registry = BeaconRegistry::new();
        let key = registry.submit("KENOBI", beacon(1.0, &[])).unwrap();

        assert_eq!(key, BeaconName::Kenobi);
        assert_eq!(registry.snapshot()[&BeaconName::Kenobi].name, "kenobi");
    }

    #[test]
    fn test_unknown_name_rejected_without_mutation() {
        let registry = BeaconRegistry::new();
        let err = registry.submit("deathstar", beacon(1.0, &[])).unwrap_err();

        assert_eq!(
            err,
            Error::InvalidBeaconName {
                name: "deathstar".to_string()
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_resubmission_overwrites() {
        let registry = BeaconRegistry::new();
        registry.submit("sato", beacon(10.0, &["old"])).unwrap();
        registry.submit("sato", beacon(20.0, &["new"])).unwrap();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[&BeaconName::Sato].distance, 20.0);
        assert_eq!(snapshot[&BeaconName::Sato].fragments, vec!["new".to_string()]);
    }

    #[test]
    fn test_concurrent_submissions_all_land() {
        let registry = Arc::new(BeaconRegistry::new());

        let handles: Vec<_> = ["kenobi", "skywalker", "sato"]
            .into_iter()
            .map(|name| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for round in 0..100 {
                        registry.submit(name, beacon(round as f64, &[])).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 3);
        for name in BeaconName::ALL {
            assert_eq!(snapshot[&name].distance, 99.0);
        }
    }

    #[test]
    fn test_clear_empties_all_slots() {
        let registry = BeaconRegistry::new();
        registry.submit("kenobi", beacon(1.0, &[])).unwrap();
        registry.clear();

        assert!(registry.is_empty());
    }
}
