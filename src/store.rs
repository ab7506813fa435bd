//! Data store seam
//!
//! Users and environmental time series live outside this crate. The traits
//! here are the only lookups the ranking code needs from them;
//! [`InMemoryStore`] serves them from a JSON snapshot.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

use crate::models::{SpotConditions, User};

/// Latest environmental readings per spot
pub trait ConditionsStore: Send + Sync {
    /// Most recent reading for `spot_id`, if any
    fn latest_for_spot(&self, spot_id: &str) -> crate::Result<Option<SpotConditions>>;

    /// Most recent reading for each id, one entry per distinct id in
    /// first-seen order
    fn latest_for_spots(
        &self,
        spot_ids: &[&str],
    ) -> crate::Result<Vec<(String, Option<SpotConditions>)>> {
        let mut seen = HashSet::new();
        spot_ids
            .iter()
            .filter(|id| seen.insert(**id))
            .map(|id| Ok(((*id).to_string(), self.latest_for_spot(id)?)))
            .collect()
    }
}

/// User records by id
pub trait UserStore: Send + Sync {
    fn find_user(&self, user_id: &str) -> crate::Result<Option<User>>;
}

/// Serialized contents of an [`InMemoryStore`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<User>,
    /// Readings in any order; several per spot are allowed
    #[serde(default)]
    pub conditions: Vec<SpotConditions>,
}

/// Store backed by an in-memory snapshot
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    users: HashMap<String, User>,
    latest: HashMap<String, SpotConditions>,
}

impl InMemoryStore {
    /// Index a snapshot, keeping only the newest reading per spot
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let users = snapshot
            .users
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect();

        let mut latest: HashMap<String, SpotConditions> = HashMap::new();
        for reading in snapshot.conditions {
            let is_newer = latest
                .get(&reading.spot_id)
                .is_none_or(|existing| reading.timestamp > existing.timestamp);
            if is_newer {
                latest.insert(reading.spot_id.clone(), reading);
            }
        }

        Self { users, latest }
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        info!(
            "Loaded snapshot from {}: {} users, {} spots with readings",
            path.display(),
            store.users.len(),
            store.latest.len()
        );
        Ok(store)
    }
}

impl ConditionsStore for InMemoryStore {
    fn latest_for_spot(&self, spot_id: &str) -> crate::Result<Option<SpotConditions>> {
        let found = self.latest.get(spot_id).cloned();
        if found.is_none() {
            debug!("No readings for spot {}", spot_id);
        }
        Ok(found)
    }
}

impl UserStore for InMemoryStore {
    fn find_user(&self, user_id: &str) -> crate::Result<Option<User>> {
        Ok(self.users.get(user_id).cloned())
    }
}
