//! Platform constraints exported by the catalog

use super::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a constraint is applied to consumers of the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    /// An imported BOM, enforced transitively on all consumers
    EnforcedPlatform,
    /// A single pinned `group:artifact:version` constraint
    Pin,
}

/// A single version constraint exported by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// How the constraint is applied
    pub kind: ConstraintKind,
    /// The constrained coordinate
    pub coordinate: Coordinate,
}

impl Constraint {
    /// Creates an enforced-platform constraint from a BOM coordinate
    pub fn enforced_platform(coordinate: Coordinate) -> Self {
        Self {
            kind: ConstraintKind::EnforcedPlatform,
            coordinate,
        }
    }

    /// Creates a pinned constraint
    pub fn pin(coordinate: Coordinate) -> Self {
        Self {
            kind: ConstraintKind::Pin,
            coordinate,
        }
    }

    /// Returns true if this constraint imports a whole BOM
    pub fn is_platform(&self) -> bool {
        self.kind == ConstraintKind::EnforcedPlatform
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConstraintKind::EnforcedPlatform => write!(f, "platform({})", self.coordinate),
            ConstraintKind::Pin => write!(f, "{}", self.coordinate),
        }
    }
}

/// The ordered collection of constraints exported by the platform
///
/// Order matches declaration/processing order: BOM imports first, then
/// expanded set modules, then individual pins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// Creates an empty constraint set
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a constraint, preserving insertion order
    pub fn push(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Iterates constraints in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }

    /// Number of constraints
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if no constraints were declared
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Looks up a constraint by its `group:artifact` module identifier
    pub fn find(&self, group: &str, artifact: &str) -> Option<&Constraint> {
        self.constraints
            .iter()
            .find(|c| c.coordinate.group == group && c.coordinate.artifact == artifact)
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
