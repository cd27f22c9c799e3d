//! Core domain models for depcat
//!
//! This module contains the fundamental types used throughout the application:
//! - Typed Maven coordinates parsed at the boundary
//! - Grouped version sets (one version shared by several modules)
//! - Platform constraints (enforced BOM imports and individual pins)

mod constraint;
mod coordinate;
mod dependency_set;

pub use constraint::{Constraint, ConstraintKind, ConstraintSet};
pub use coordinate::Coordinate;
pub use dependency_set::DependencySet;
