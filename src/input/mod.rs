use std::fs;
use std::path::Path;

use thiserror::Error;

pub mod snapshot;

use crate::model::snapshot::AuditSnapshot;
use crate::model::thresholds::{ProfileError, ScoringProfile};

pub use snapshot::{snapshot_from_str, snapshot_from_value};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid input: {0} must be a JSON object")]
    NotAnObject(&'static str),
    #[error("invalid profile: {0}")]
    InvalidProfile(#[from] ProfileError),
}

pub fn load_snapshot(path: &Path) -> Result<AuditSnapshot, InputError> {
    let text = fs::read_to_string(path)?;
    let snapshot = snapshot_from_str(&text)?;
    tracing::debug!(path = %path.display(), collected = snapshot.collected().len(), "loaded snapshot");
    Ok(snapshot)
}

/// Reads a scoring profile; fields missing from the file keep their defaults.
pub fn load_profile(path: &Path) -> Result<ScoringProfile, InputError> {
    let text = fs::read_to_string(path)?;
    let profile: ScoringProfile = serde_json::from_str(&text)?;
    profile.validate()?;
    Ok(profile)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
