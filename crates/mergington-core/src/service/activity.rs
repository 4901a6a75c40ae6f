//! Activity roster service.
//!
//! `ActivityService` owns the [`ActivityRegistry`] and implements the three
//! roster use cases: list, signup and withdraw. Every mutating operation runs
//! its membership check and its mutation under the same per-activity guard.

use tracing::{debug, info};

use mergington_types::activity::{
    Activity, ActivityCatalog, RosterAction, RosterChange, SignupRequest, WithdrawRequest,
};
use mergington_types::error::ActivityError;

use crate::registry::ActivityRegistry;

/// Whether signups are refused once an activity reaches capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    /// Reject signups into a full activity with [`ActivityError::Full`].
    #[default]
    Enforce,
    /// Accept signups past `max_participants`.
    Permissive,
}

impl CapacityPolicy {
    pub fn from_enforce_flag(enforce: bool) -> Self {
        if enforce {
            CapacityPolicy::Enforce
        } else {
            CapacityPolicy::Permissive
        }
    }
}

/// Service orchestrating activity rosters.
pub struct ActivityService {
    registry: ActivityRegistry,
    capacity: CapacityPolicy,
}

impl ActivityService {
    pub fn new(registry: ActivityRegistry, capacity: CapacityPolicy) -> Self {
        Self { registry, capacity }
    }

    /// Every activity with its current roster, in seed order.
    pub fn list(&self) -> ActivityCatalog {
        self.registry.snapshot()
    }

    /// A single activity by exact name.
    pub fn get(&self, activity_name: &str) -> Result<Activity, ActivityError> {
        debug!(activity = %activity_name, "looking up activity");
        self.registry
            .get(activity_name)
            .ok_or(ActivityError::NotFound)
    }

    /// Add a participant to an activity's roster.
    ///
    /// Fails with `NotFound` for an unknown activity, `AlreadySignedUp` if
    /// the email is already on the roster, and `Full` when the capacity
    /// policy is `Enforce` and the roster is at `max_participants`.
    pub fn signup(&self, request: &SignupRequest) -> Result<RosterChange, ActivityError> {
        let capacity = self.capacity;

        self.registry
            .with_activity_mut(&request.activity_name, |activity| {
                if activity.has_participant(&request.email) {
                    return Err(ActivityError::AlreadySignedUp);
                }
                if capacity == CapacityPolicy::Enforce && activity.is_full() {
                    return Err(ActivityError::Full);
                }
                activity.participants.push(request.email.clone());
                Ok(())
            })?;

        info!(
            activity = %request.activity_name,
            email = %request.email,
            "participant signed up"
        );

        Ok(RosterChange {
            action: RosterAction::SignedUp,
            activity_name: request.activity_name.clone(),
            email: request.email.clone(),
        })
    }

    /// Remove a participant from an activity's roster.
    ///
    /// Fails with `NotFound` for an unknown activity and
    /// `ParticipantNotFound` when the email is not on the roster.
    pub fn withdraw(&self, request: &WithdrawRequest) -> Result<RosterChange, ActivityError> {
        self.registry
            .with_activity_mut(&request.activity_name, |activity| {
                let position = activity
                    .participants
                    .iter()
                    .position(|p| p == &request.email)
                    .ok_or(ActivityError::ParticipantNotFound)?;
                activity.participants.remove(position);
                Ok(())
            })?;

        info!(
            activity = %request.activity_name,
            email = %request.email,
            "participant removed"
        );

        Ok(RosterChange {
            action: RosterAction::Removed,
            activity_name: request.activity_name.clone(),
            email: request.email.clone(),
        })
    }
}
