use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use std::fmt;

/// An extracurricular activity offered by the school.
///
/// The activity's name is its key in the registry and is not stored here.
/// `participants` keeps signup order; each email appears at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description shown to students.
    pub description: String,
    /// Human-readable recurrence ("Fridays, 3:30 PM - 5:00 PM"). Not parsed.
    pub schedule: String,
    /// Roster capacity.
    pub max_participants: u32,
    /// Signed-up participant emails, in signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining places on the roster (never negative).
    pub fn spots_left(&self) -> u32 {
        self.max_participants
            .saturating_sub(self.participants.len() as u32)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() as u32 >= self.max_participants
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// One entry of a seed catalog: an activity together with its name.
///
/// This is the on-disk shape of `[[activity]]` tables in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySeed {
    pub name: String,
    #[serde(flatten)]
    pub activity: Activity,
}

impl ActivitySeed {
    pub fn new(
        name: &str,
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            activity: Activity {
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        }
    }
}

/// A point-in-time snapshot of every activity, in seed order.
///
/// Serializes as a JSON object keyed by activity name. Key order follows
/// the seed catalog, not alphabetical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    entries: Vec<(String, Activity)>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Callers are responsible for name uniqueness.
    pub fn push(&mut self, name: String, activity: Activity) {
        self.entries.push((name, activity));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

/// Request to add a participant to an activity's roster.
///
/// Built by the transport layer from the activity path segment and the
/// required `email` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub activity_name: String,
    pub email: String,
}

/// Request to remove a participant from an activity's roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawRequest {
    pub activity_name: String,
    pub email: String,
}

/// Which roster mutation a [`RosterChange`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterAction {
    SignedUp,
    Removed,
}

/// Confirmation of a successful signup or withdrawal.
///
/// `Display` renders the user-facing message, e.g.
/// `"Signed up emma@mergington.edu for Chess Club"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterChange {
    pub action: RosterAction,
    pub activity_name: String,
    pub email: String,
}

impl fmt::Display for RosterChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            RosterAction::SignedUp => {
                write!(f, "Signed up {} for {}", self.email, self.activity_name)
            }
            RosterAction::Removed => {
                write!(f, "Removed {} from {}", self.email, self.activity_name)
            }
        }
    }
}
