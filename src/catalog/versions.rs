//! Group-to-version lookup table

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flattened group → version lookup built alongside the constraint set
///
/// The table records the *last seen* version for each group across the
/// three declaration categories (BOMs, then sets, then pins). A group
/// declared in more than one category keeps only the value from the
/// category processed last. The table is filled once by the builder and
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionTable {
    versions: HashMap<String, String>,
}

impl VersionTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the version for a group, overwriting any earlier value
    pub(crate) fn record(&mut self, group: impl Into<String>, version: impl Into<String>) {
        self.versions.insert(group.into(), version.into());
    }

    /// Returns the recorded version for a group, if any
    pub fn get(&self, group: &str) -> Option<&str> {
        self.versions.get(group).map(String::as_str)
    }

    /// Number of distinct groups recorded
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Returns true if no groups were recorded
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Iterates (group, version) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.versions
            .iter()
            .map(|(group, version)| (group.as_str(), version.as_str()))
    }
}
