//! Query parameter extractors.

use serde::Deserialize;

/// Query parameters for the signup endpoint.
#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    /// Participant email. Percent-decoded by the extractor.
    pub email: String,
}
