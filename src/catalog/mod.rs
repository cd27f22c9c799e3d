//! Catalog loading and construction
//!
//! This module provides:
//! - Parsing of the TOML catalog file into typed declarations
//! - The builder that turns declarations into the exported constraint set
//!   and the group → version lookup table

mod builder;
mod manifest;
mod versions;

pub use builder::{build, Catalog};
pub use manifest::CatalogDeclarations;
pub use versions::VersionTable;

use crate::error::CatalogError;
use std::path::Path;

/// Loads a catalog file and builds the catalog in one step
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let decls = CatalogDeclarations::load(path)?;
    Ok(build(&decls.boms, &decls.sets, &decls.pins))
}
