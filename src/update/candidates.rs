//! Release-metadata document
//!
//! Candidate versions come from an external registry query whose output is
//! handed to the checker as a JSON document:
//!
//! ```json
//! {
//!   "generated_at": "2022-04-01T00:00:00Z",
//!   "dependencies": [
//!     {
//!       "group": "io.grpc",
//!       "artifact": "grpc-bom",
//!       "versions": ["1.45.1", "1.46.0", "1.47.0-RC1"]
//!     }
//!   ]
//! }
//! ```

use crate::error::MetadataError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Candidate versions reported by the registry for one dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyReleases {
    /// Group identifier
    pub group: String,
    /// Artifact name
    pub artifact: String,
    /// Known versions, newest not necessarily last
    pub versions: Vec<String>,
}

/// The full release-metadata document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseMetadata {
    /// When the registry query was performed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    /// Per-dependency candidate versions
    pub dependencies: Vec<DependencyReleases>,
}

impl ReleaseMetadata {
    /// Parses a release-metadata document from JSON content
    pub fn parse(content: &str, path: &Path) -> Result<Self, MetadataError> {
        serde_json::from_str(content)
            .map_err(|e| MetadataError::json_parse_error(path, e.to_string()))
    }

    /// Reads and parses a release-metadata document from a file path
    pub fn load(path: &Path) -> Result<Self, MetadataError> {
        if !path.exists() {
            return Err(MetadataError::not_found(path));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| MetadataError::read_error(path, e))?;
        Self::parse(&content, path)
    }

    /// Looks up candidate versions for a `group:artifact` pair
    pub fn versions_for(&self, group: &str, artifact: &str) -> Option<&[String]> {
        self.dependencies
            .iter()
            .find(|d| d.group == group && d.artifact == artifact)
            .map(|d| d.versions.as_slice())
    }
}
