//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of the resolved catalog (constraints + version table)
//! - JSON serialization of the update report with summary statistics

use crate::catalog::Catalog;
use crate::output::{OutputFormatter, Verbosity};
use crate::update::{ConstraintReport, UpdateReport};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the resolved catalog
#[derive(Serialize)]
struct JsonCatalog<'a> {
    /// Exported constraints in declaration order
    constraints: Vec<JsonConstraint<'a>>,
    /// Last-seen version per group (sorted for stable output)
    versions: BTreeMap<&'a str, &'a str>,
}

/// JSON representation of a single constraint
#[derive(Serialize)]
struct JsonConstraint<'a> {
    kind: &'static str,
    group: &'a str,
    artifact: &'a str,
    version: &'a str,
}

/// JSON representation of the update report
#[derive(Serialize)]
struct JsonReport<'a> {
    /// Timestamp of the registry query, if the metadata carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: &'a Option<DateTime<Utc>>,
    /// Summary statistics
    summary: JsonSummary,
    /// Per-constraint results
    entries: &'a [ConstraintReport],
}

/// JSON representation of report summary statistics
#[derive(Serialize)]
struct JsonSummary {
    outdated: usize,
    up_to_date: usize,
    unknown: usize,
    suppressed: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format_catalog(&self, catalog: &Catalog, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonCatalog {
            constraints: catalog
                .constraints
                .iter()
                .map(|c| JsonConstraint {
                    kind: if c.is_platform() { "enforced_platform" } else { "pin" },
                    group: &c.coordinate.group,
                    artifact: &c.coordinate.artifact,
                    version: &c.coordinate.version,
                })
                .collect(),
            versions: catalog.versions.iter().collect(),
        };

        write_json(&output, self.verbosity, writer)
    }

    fn format_report(&self, report: &UpdateReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonReport {
            generated_at: &report.generated_at,
            summary: JsonSummary {
                outdated: report.outdated_count(),
                up_to_date: report.up_to_date_count(),
                unknown: report.unknown_count(),
                suppressed: report.suppressed_count(),
            },
            entries: &report.entries,
        };

        write_json(&output, self.verbosity, writer)
    }
}

fn write_json<T: Serialize>(
    value: &T,
    verbosity: Verbosity,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    let json = if verbosity == Verbosity::Quiet {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    writeln!(writer, "{}", json)
}
