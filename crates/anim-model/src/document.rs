//! The on-disk animation document.
//!
//! A conversion run produces a single JSON document holding the keyframe
//! curves, the timeline bounds, and the scene clock they were computed
//! against. The document is the hand-off point to whatever host applies
//! the animation to an object.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::curve::CurveStore;
use crate::timeline::{SceneClock, TimelineBounds};

/// Top-level animation document (`*.timeline.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDocument {
    /// Schema version.
    pub version: String,

    /// Human-readable name of the animated object.
    pub name: String,

    /// Path of the trajectory log this document was converted from.
    pub source: Option<String>,

    /// Creation timestamp (ISO 8601).
    pub created_at: String,

    /// Scene clock the frame indices were computed against.
    pub clock: SceneClock,

    /// Timeline bounds to apply on the scene.
    pub bounds: TimelineBounds,

    /// Keyframe curves.
    pub curves: CurveStore,
}

impl AnimationDocument {
    /// Create a new document stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        clock: SceneClock,
        bounds: TimelineBounds,
        curves: CurveStore,
    ) -> Self {
        Self {
            version: "1.0".to_string(),
            name: name.into(),
            source: None,
            created_at: chrono::Utc::now().to_rfc3339(),
            clock,
            bounds,
            curves,
        }
    }

    /// Load a document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref().to_path_buf();
        let json = std::fs::read_to_string(&path).map_err(|e| DocumentError::IoError {
            path: path.clone(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| DocumentError::ParseError { path, source: e })
    }

    /// Save the document to disk as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| DocumentError::IoError {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| DocumentError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        std::fs::write(&path, json).map_err(|e| DocumentError::IoError { path, source: e })
    }
}

/// Errors that can occur loading or saving documents.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}
