//! Catalog file parsing
//!
//! The three declaration categories are read from a single TOML file:
//!
//! ```toml
//! boms = [
//!   "io.grpc:grpc-bom:1.45.1",
//! ]
//!
//! dependencies = [
//!   "junit:junit:4.13.2",
//! ]
//!
//! [[sets]]
//! group = "org.mockito"
//! version = "4.4.0"
//! modules = ["mockito-core", "mockito-junit-jupiter"]
//! ```
//!
//! Coordinate strings are parsed into typed records here, at the boundary;
//! a malformed entry aborts the load naming the offending string.

use crate::domain::{Coordinate, DependencySet};
use crate::error::CatalogError;
use serde::Deserialize;
use std::path::Path;

/// Raw shape of the catalog file as deserialized from TOML
#[derive(Debug, Deserialize)]
struct CatalogFile {
    /// BOM coordinates imported wholesale
    #[serde(default)]
    boms: Vec<String>,
    /// Grouped version sets
    #[serde(default)]
    sets: Vec<SetDecl>,
    /// Individually pinned coordinates
    #[serde(default)]
    dependencies: Vec<String>,
}

/// Raw shape of one `[[sets]]` table
#[derive(Debug, Deserialize)]
struct SetDecl {
    group: String,
    version: String,
    modules: Vec<String>,
}

/// The typed declaration categories loaded from a catalog file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDeclarations {
    /// BOM imports, in declaration order
    pub boms: Vec<Coordinate>,
    /// Grouped version sets, in declaration order
    pub sets: Vec<DependencySet>,
    /// Individual pins, in declaration order
    pub pins: Vec<Coordinate>,
}

impl CatalogDeclarations {
    /// Parses catalog declarations from TOML content
    pub fn parse(content: &str, path: &Path) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| CatalogError::toml_parse_error(path, e.to_string()))?;

        let boms = file
            .boms
            .iter()
            .map(|s| s.parse())
            .collect::<Result<Vec<Coordinate>, _>>()?;

        let sets = file
            .sets
            .into_iter()
            .map(|s| DependencySet::new(s.group, s.version, s.modules))
            .collect();

        let pins = file
            .dependencies
            .iter()
            .map(|s| s.parse())
            .collect::<Result<Vec<Coordinate>, _>>()?;

        Ok(Self { boms, sets, pins })
    }

    /// Reads and parses catalog declarations from a file path
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::not_found(path));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::read_error(path, e))?;
        Self::parse(&content, path)
    }
}
