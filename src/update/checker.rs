//! Update-freshness check
//!
//! Walks every constraint in the built catalog, compares it against the
//! candidate versions in the release metadata, and reports the latest
//! stable upgrade per constraint. Unstable candidates are rejected by the
//! stability classifier and listed as suppressed instead of suggested.

use crate::catalog::Catalog;
use crate::domain::Constraint;
use crate::update::candidates::ReleaseMetadata;
use crate::update::stability::is_non_stable;
use crate::update::version_order::{compare_versions, is_newer};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Freshness of a single constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum FreshnessStatus {
    /// No stable candidate is newer than the pinned version
    UpToDate,
    /// A newer stable version exists
    Outdated { latest_stable: String },
    /// The release metadata has no entry for this dependency
    Unknown,
}

/// Check result for one constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintReport {
    /// The constraint that was checked
    pub constraint: Constraint,
    /// Freshness verdict
    #[serde(flatten)]
    pub status: FreshnessStatus,
    /// Unstable candidates newer than the pin, rejected from suggestion
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub suppressed: Vec<String>,
}

impl ConstraintReport {
    /// Returns true if a newer stable version was found
    pub fn is_outdated(&self) -> bool {
        matches!(self.status, FreshnessStatus::Outdated { .. })
    }
}

/// The full update report over a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateReport {
    /// Timestamp of the registry query, when the metadata carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    /// One entry per catalog constraint, in catalog order
    pub entries: Vec<ConstraintReport>,
}

impl UpdateReport {
    /// Entries with a newer stable version available
    pub fn outdated(&self) -> impl Iterator<Item = &ConstraintReport> {
        self.entries.iter().filter(|e| e.is_outdated())
    }

    /// Number of outdated constraints
    pub fn outdated_count(&self) -> usize {
        self.outdated().count()
    }

    /// Number of up-to-date constraints
    pub fn up_to_date_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == FreshnessStatus::UpToDate)
            .count()
    }

    /// Number of constraints with no metadata entry
    pub fn unknown_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == FreshnessStatus::Unknown)
            .count()
    }

    /// Total number of suppressed unstable candidates
    pub fn suppressed_count(&self) -> usize {
        self.entries.iter().map(|e| e.suppressed.len()).sum()
    }

    /// Returns true if any constraint has a stable upgrade available
    pub fn has_outdated(&self) -> bool {
        self.entries.iter().any(|e| e.is_outdated())
    }
}

/// Runs the freshness check for every constraint in the catalog
pub fn check(catalog: &Catalog, metadata: &ReleaseMetadata) -> UpdateReport {
    let entries = catalog
        .constraints
        .iter()
        .map(|constraint| check_constraint(constraint, metadata))
        .collect();

    UpdateReport {
        generated_at: metadata.generated_at,
        entries,
    }
}

fn check_constraint(constraint: &Constraint, metadata: &ReleaseMetadata) -> ConstraintReport {
    let coordinate = &constraint.coordinate;
    let Some(candidates) = metadata.versions_for(&coordinate.group, &coordinate.artifact) else {
        return ConstraintReport {
            constraint: constraint.clone(),
            status: FreshnessStatus::Unknown,
            suppressed: Vec::new(),
        };
    };

    let mut suppressed = Vec::new();
    let mut latest_stable: Option<&str> = None;

    for candidate in candidates {
        if !is_newer(candidate, &coordinate.version) {
            continue;
        }
        if is_non_stable(candidate) {
            suppressed.push(candidate.clone());
            continue;
        }
        let newer_than_best = latest_stable
            .map(|best| compare_versions(candidate, best) == std::cmp::Ordering::Greater)
            .unwrap_or(true);
        if newer_than_best {
            latest_stable = Some(candidate);
        }
    }

    let status = match latest_stable {
        Some(version) => FreshnessStatus::Outdated {
            latest_stable: version.to_string(),
        },
        None => FreshnessStatus::UpToDate,
    };

    ConstraintReport {
        constraint: constraint.clone(),
        status,
        suppressed,
    }
}
