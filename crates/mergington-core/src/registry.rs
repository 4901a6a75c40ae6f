//! In-memory activity registry.
//!
//! The registry maps activity name to [`Activity`] and is the sole source of
//! truth for rosters. Its key set is fixed at construction: activities are
//! never added or removed at runtime, only their participant lists change.
//!
//! Entries live in a `DashMap`, so a `get_mut` guard gives exclusive access
//! to one activity while other activities stay available to concurrent
//! requests. Seed order is kept separately for listing.

use dashmap::DashMap;
use tracing::debug;

use mergington_types::activity::{Activity, ActivityCatalog, ActivitySeed};
use mergington_types::error::{ActivityError, SeedError};

pub struct ActivityRegistry {
    activities: DashMap<String, Activity>,
    /// Activity names in seed order. Immutable after construction.
    order: Vec<String>,
}

impl ActivityRegistry {
    /// Build a registry from a seed catalog, validating every entry.
    ///
    /// Fails on the first malformed entry; see [`validate_seed_entry`].
    pub fn from_seed(seed: Vec<ActivitySeed>) -> Result<Self, SeedError> {
        let activities = DashMap::with_capacity(seed.len());
        let mut order = Vec::with_capacity(seed.len());

        for entry in seed {
            validate_seed_entry(&entry)?;
            if activities.contains_key(&entry.name) {
                return Err(SeedError::DuplicateActivity(entry.name));
            }
            order.push(entry.name.clone());
            activities.insert(entry.name, entry.activity);
        }

        debug!(count = order.len(), "activity registry seeded");
        Ok(Self { activities, order })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Clone of a single activity, if it exists.
    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.get(name).map(|entry| entry.value().clone())
    }

    /// Snapshot of every activity in seed order.
    ///
    /// Each activity is copied under its own read guard, so a snapshot never
    /// observes a half-applied roster change.
    pub fn snapshot(&self) -> ActivityCatalog {
        let mut catalog = ActivityCatalog::new();
        for name in &self.order {
            if let Some(entry) = self.activities.get(name) {
                catalog.push(name.clone(), entry.value().clone());
            }
        }
        catalog
    }

    /// Run `f` with exclusive access to one activity.
    ///
    /// The guard is held for the whole closure, which makes any
    /// check-then-mutate sequence inside it atomic with respect to other
    /// callers. `f` must not call back into the registry for the same name.
    pub fn with_activity_mut<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Activity) -> Result<T, ActivityError>,
    ) -> Result<T, ActivityError> {
        let mut entry = self
            .activities
            .get_mut(name)
            .ok_or(ActivityError::NotFound)?;
        f(entry.value_mut())
    }
}

/// Check a single seed entry.
///
/// Rejects an empty name, blank description or schedule, zero capacity,
/// duplicate or malformed participants, and rosters over capacity.
pub fn validate_seed_entry(entry: &ActivitySeed) -> Result<(), SeedError> {
    let name = &entry.name;
    let activity = &entry.activity;

    if name.trim().is_empty() {
        return Err(SeedError::EmptyName);
    }
    if activity.description.trim().is_empty() {
        return Err(SeedError::BlankField {
            activity: name.clone(),
            field: "description",
        });
    }
    if activity.schedule.trim().is_empty() {
        return Err(SeedError::BlankField {
            activity: name.clone(),
            field: "schedule",
        });
    }
    if activity.max_participants == 0 {
        return Err(SeedError::ZeroCapacity(name.clone()));
    }

    for (i, email) in activity.participants.iter().enumerate() {
        if !email.contains('@') {
            return Err(SeedError::InvalidParticipant {
                activity: name.clone(),
                email: email.clone(),
            });
        }
        if activity.participants[..i].contains(email) {
            return Err(SeedError::DuplicateParticipant {
                activity: name.clone(),
                email: email.clone(),
            });
        }
    }

    if activity.participants.len() > activity.max_participants as usize {
        return Err(SeedError::OverCapacity {
            activity: name.clone(),
            count: activity.participants.len(),
            max: activity.max_participants,
        });
    }

    Ok(())
}
