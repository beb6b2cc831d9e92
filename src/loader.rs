//! Task file loading.
//!
//! The store never creates tasks itself; initial data is supplied wholesale
//! at construction time. This module is that external loader: it parses a
//! YAML or JSON task file (dispatched on extension) into the task list the
//! caller hands to [`TaskStore::with_tasks`](crate::store::TaskStore::with_tasks).

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::Task;

/// Errors from loading a task file. This is the only fallible surface in the
/// crate; everything downstream of a loaded collection is infallible.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read task file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid YAML task file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON task file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported task file extension: {0} (expected .yaml, .yml, or .json)")]
    UnsupportedExtension(String),
}

/// On-disk shape of a task file.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskFile {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Load tasks from a YAML or JSON file.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Result<Vec<Task>, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let file: TaskFile = match ext {
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        "json" => serde_json::from_str(&content)?,
        other => return Err(LoadError::UnsupportedExtension(other.to_string())),
    };

    info!(path = %path.display(), count = file.tasks.len(), "loaded task file");
    Ok(file.tasks)
}
