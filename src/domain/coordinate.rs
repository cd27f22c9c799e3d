//! Typed Maven coordinate
//!
//! A coordinate is the `group:artifact:version` triple used by every
//! declarative input of the catalog:
//! - BOM imports: `com.fasterxml.jackson:jackson-bom:2.13.2.20220328`
//! - Individual pins: `junit:junit:4.13.2`
//!
//! Parsing is done once at the boundary; downstream code only ever sees
//! the typed record, never raw colon-separated strings.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fully qualified `group:artifact:version` coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Group identifier (e.g., `com.google.guava`)
    pub group: String,
    /// Artifact name within the group (e.g., `guava-bom`)
    pub artifact: String,
    /// Pinned version string (e.g., `31.1-jre`)
    pub version: String,
}

impl Coordinate {
    /// Creates a new coordinate from its three parts
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Returns the `group:artifact` module identifier without the version
    pub fn module_id(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

impl FromStr for Coordinate {
    type Err = CatalogError;

    /// Parses a `group:artifact:version` string.
    ///
    /// Exactly two `:` separators are required and every field must be
    /// non-empty; anything else fails fast naming the offending string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [group, artifact, version]
                if !group.is_empty() && !artifact.is_empty() && !version.is_empty() =>
            {
                Ok(Coordinate::new(*group, *artifact, *version))
            }
            _ => Err(CatalogError::malformed_coordinate(s)),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}
