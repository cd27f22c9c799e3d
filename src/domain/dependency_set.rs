//! Grouped version sets

use super::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A set of modules from one group that share a single version
///
/// Example: the `org.mockito` set pins `mockito-core` and
/// `mockito-junit-jupiter` to the same `4.4.0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySet {
    /// Group identifier shared by every module in the set
    pub group: String,
    /// Version shared by every module in the set
    pub version: String,
    /// Artifact names, in declaration order
    pub modules: Vec<String>,
}

impl DependencySet {
    /// Creates a new dependency set
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        modules: Vec<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            modules,
        }
    }

    /// Expands the set into one coordinate per module, preserving order
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.modules
            .iter()
            .map(|module| Coordinate::new(&self.group, module, &self.version))
    }
}

impl fmt::Display for DependencySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{{{}}}:{}",
            self.group,
            self.modules.join(","),
            self.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mockito_set() -> DependencySet {
        DependencySet::new(
            "org.mockito",
            "4.4.0",
            vec![
                "mockito-core".to_string(),
                "mockito-junit-jupiter".to_string(),
            ],
        )
    }

    #[test]
    fn test_dependency_set_new() {
        let set = mockito_set();
        assert_eq!(set.group, "org.mockito");
        assert_eq!(set.version, "4.4.0");
        assert_eq!(set.modules.len(), 2);
    }

    #[test]
    fn test_coordinates_expansion() {
        let coords: Vec<Coordinate> = mockito_set().coordinates().collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new("org.mockito", "mockito-core", "4.4.0"),
                Coordinate::new("org.mockito", "mockito-junit-jupiter", "4.4.0"),
            ]
        );
    }

    #[test]
    fn test_coordinates_preserve_declaration_order() {
        let set = DependencySet::new(
            "io.prometheus",
            "0.15.0",
            vec![
                "simpleclient".to_string(),
                "simpleclient_common".to_string(),
                "simpleclient_httpserver".to_string(),
            ],
        );
        let artifacts: Vec<String> = set.coordinates().map(|c| c.artifact).collect();
        assert_eq!(
            artifacts,
            vec!["simpleclient", "simpleclient_common", "simpleclient_httpserver"]
        );
    }

    #[test]
    fn test_empty_module_list_expands_to_nothing() {
        let set = DependencySet::new("javax.annotation", "1.3.2", vec![]);
        assert_eq!(set.coordinates().count(), 0);
    }

    #[test]
    fn test_display() {
        let display = format!("{}", mockito_set());
        assert_eq!(
            display,
            "org.mockito:{mockito-core,mockito-junit-jupiter}:4.4.0"
        );
    }

    #[test]
    fn test_serde_dependency_set() {
        let set = mockito_set();
        let json = serde_json::to_string(&set).unwrap();
        let parsed: DependencySet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }
}
