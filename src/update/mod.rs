//! Update-freshness checking
//!
//! This module provides:
//! - The stability classifier that rejects pre-release upgrade candidates
//! - The release-metadata document supplied by the external registry query
//! - The checker that walks catalog constraints and builds the report

mod candidates;
mod checker;
mod stability;
mod version_order;

pub use candidates::{DependencyReleases, ReleaseMetadata};
pub use checker::{check, ConstraintReport, FreshnessStatus, UpdateReport};
pub use stability::{is_non_stable, is_stable, matching_rule};
pub use version_order::{compare_versions, is_newer};
