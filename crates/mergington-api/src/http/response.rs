//! Success response bodies.

use serde::Serialize;

use mergington_types::activity::RosterChange;

/// `{"message": "..."}` confirmation returned by roster mutations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<RosterChange> for MessageResponse {
    fn from(change: RosterChange) -> Self {
        Self {
            message: change.to_string(),
        }
    }
}
