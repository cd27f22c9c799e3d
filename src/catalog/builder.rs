//! Catalog builder
//!
//! Assembles the exported constraint set and the group → version lookup
//! table from the three declaration categories. Runs once at load time;
//! the resulting [`Catalog`] is immutable.

use crate::domain::{Constraint, ConstraintSet, Coordinate, DependencySet};

use super::VersionTable;

/// The built platform catalog
///
/// Returned by [`build`] and passed by reference to downstream consumers;
/// there is no shared mutable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Constraints exported to consumers of the platform, in declaration order
    pub constraints: ConstraintSet,
    /// Last-seen version per group across all three categories
    pub versions: VersionTable,
}

/// Builds the catalog from the three declaration categories.
///
/// Processing order is BOMs → sets → pins, preserving input order within
/// each category:
/// - each BOM becomes an enforced-platform constraint;
/// - each set expands to one pin constraint per module;
/// - each pinned dependency becomes a pin constraint verbatim.
///
/// Every processed entry also records `versions[group] = version`, so a
/// group declared in more than one category ends up with the value from
/// the category processed last (pins override sets override BOMs).
pub fn build(boms: &[Coordinate], sets: &[DependencySet], pins: &[Coordinate]) -> Catalog {
    let mut constraints = ConstraintSet::new();
    let mut versions = VersionTable::new();

    for bom in boms {
        constraints.push(Constraint::enforced_platform(bom.clone()));
        versions.record(&bom.group, &bom.version);
    }

    for set in sets {
        for coordinate in set.coordinates() {
            constraints.push(Constraint::pin(coordinate));
            versions.record(&set.group, &set.version);
        }
    }

    for pin in pins {
        constraints.push(Constraint::pin(pin.clone()));
        versions.record(&pin.group, &pin.version);
    }

    Catalog {
        constraints,
        versions,
    }
}
