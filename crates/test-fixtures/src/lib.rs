//! Test fixtures for the palate workspace: fluent builders for experiences,
//! profiles, and candidates, plus typed loading of the JSON datasets under
//! `data/`.

pub mod builders;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

use palate_core::models::{CandidateItem, FoodExperience};

/// Root directory of the fixture datasets.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// A chronological experience log for one user who loves spicy food.
pub fn spicy_lover_log() -> Vec<FoodExperience> {
    load_fixture("experiences/spicy_lover.json")
}

/// A small restaurant catalog spanning several cuisines.
pub fn catalog() -> Vec<CandidateItem> {
    load_fixture("catalog/dishes.json")
}
