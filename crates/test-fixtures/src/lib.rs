//! Test fixture loader for Pulse golden scenarios.
//!
//! Provides typed deserialization of the fixture JSON files under `golden/`
//! for tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

use pulse_core::models::{Question, SelectionAlgorithm};

/// Root directory of the golden fixtures.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
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

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// One golden selection case: input candidates, constraints, and expected output.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionScenario {
    pub name: String,
    pub candidates: Vec<Question>,
    pub max_duration_seconds: f64,
    #[serde(default = "default_threshold")]
    pub priority_threshold: u8,
    pub algorithm: SelectionAlgorithm,
    pub expected_ids: Vec<String>,
    pub expected_duration_seconds: f64,
}

fn default_threshold() -> u8 {
    1
}

/// Load every golden selection scenario.
pub fn selection_scenarios() -> Vec<SelectionScenario> {
    list_fixtures("selection")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            load_fixture(&format!("selection/{name}"))
        })
        .collect()
}

/// Load a list of questions from a fixture file.
pub fn load_questions(relative_path: &str) -> Vec<Question> {
    load_fixture(relative_path)
}
