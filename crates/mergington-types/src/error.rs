use thiserror::Error;

/// Errors returned by roster operations.
///
/// The `Display` text is the human-readable detail sent to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,

    #[error("Participant not found in this activity")]
    ParticipantNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity is full")]
    Full,
}

/// Errors raised while loading or validating a seed catalog.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("activity name must not be empty")]
    EmptyName,

    #[error("activity '{0}' is defined more than once")]
    DuplicateActivity(String),

    #[error("activity '{activity}' has an empty {field}")]
    BlankField {
        activity: String,
        field: &'static str,
    },

    #[error("activity '{0}' must allow at least one participant")]
    ZeroCapacity(String),

    #[error("activity '{activity}' lists '{email}' more than once")]
    DuplicateParticipant { activity: String, email: String },

    #[error("activity '{activity}' has an invalid participant email '{email}'")]
    InvalidParticipant { activity: String, email: String },

    #[error("activity '{activity}' seeds {count} participants but allows {max}")]
    OverCapacity {
        activity: String,
        count: usize,
        max: u32,
    },

    #[error("failed to read seed file: {0}")]
    Read(String),

    #[error("failed to parse seed file: {0}")]
    Parse(String),
}
