//! Seed catalog for the activity registry.
//!
//! The registry is populated once at startup, either from the built-in
//! catalog below or from a TOML seed file of `[[activity]]` tables:
//!
//! ```toml
//! [[activity]]
//! name = "Chess Club"
//! description = "Learn strategies and compete in chess tournaments"
//! schedule = "Fridays, 3:30 PM - 5:00 PM"
//! max_participants = 12
//! participants = ["michael@mergington.edu"]
//! ```

use std::path::Path;

use serde::Deserialize;

use mergington_core::registry::ActivityRegistry;
use mergington_types::activity::ActivitySeed;
use mergington_types::error::SeedError;

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default, rename = "activity")]
    activities: Vec<ActivitySeed>,
}

/// The activities offered at Mergington High School.
pub fn default_seed() -> Vec<ActivitySeed> {
    vec![
        ActivitySeed::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        ActivitySeed::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        ActivitySeed::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        ActivitySeed::new(
            "Basketball Team",
            "Competitive basketball training and inter-school games",
            "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
            15,
            &["james@mergington.edu"],
        ),
        ActivitySeed::new(
            "Swimming Club",
            "Swim training, stroke technique and water safety",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            20,
            &["lucas@mergington.edu"],
        ),
        ActivitySeed::new(
            "Art Studio",
            "Explore painting, drawing, and sculpture",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["mia@mergington.edu"],
        ),
        ActivitySeed::new(
            "Drama Club",
            "Act, direct, and produce the school plays",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        ActivitySeed::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            16,
            &["ava@mergington.edu"],
        ),
        ActivitySeed::new(
            "Science Club",
            "Hands-on experiments and science fair projects",
            "Wednesdays, 3:30 PM - 4:30 PM",
            18,
            &["ethan@mergington.edu"],
        ),
    ]
}

/// Parse a TOML seed catalog.
pub fn parse_seed(content: &str) -> Result<Vec<ActivitySeed>, SeedError> {
    let file: SeedFile =
        toml::from_str(content).map_err(|e| SeedError::Parse(e.to_string()))?;
    Ok(file.activities)
}

/// Read and parse a TOML seed catalog from disk.
///
/// Unlike `config.toml`, an explicitly configured seed file must exist and
/// parse; there is no silent fallback to the built-in catalog.
pub async fn load_seed_file(path: &Path) -> Result<Vec<ActivitySeed>, SeedError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SeedError::Read(format!("{}: {e}", path.display())))?;
    let seed = parse_seed(&content)?;
    tracing::debug!(
        path = %path.display(),
        count = seed.len(),
        "loaded seed catalog"
    );
    Ok(seed)
}

/// Build the registry from `seed_file`, or from [`default_seed`] when `None`.
pub async fn build_registry(seed_file: Option<&Path>) -> Result<ActivityRegistry, SeedError> {
    let seed = match seed_file {
        Some(path) => load_seed_file(path).await?,
        None => default_seed(),
    };
    ActivityRegistry::from_seed(seed)
}
