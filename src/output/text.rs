//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Colored catalog listing (platform imports, pins, version table size)
//! - Update report display with semantic change type indication
//! - Suppressed-candidate and unknown-entry detail in verbose mode

use crate::catalog::Catalog;
use crate::output::{OutputFormatter, Verbosity};
use crate::update::{FreshnessStatus, UpdateReport};
use colored::Colorize;
use std::io::Write;

/// Semantic version change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes)
    Patch,
    /// Unknown or unparseable
    Unknown,
}

impl VersionChangeType {
    /// Determine the change type between two versions
    pub fn from_versions(old: &str, new: &str) -> Self {
        let parse = |v: &str| -> Option<(u64, u64)> {
            let v = v.strip_prefix('v').unwrap_or(v);
            let mut parts = v.split(['.', '-', ',']).filter_map(|p| p.parse::<u64>().ok());
            Some((parts.next()?, parts.next().unwrap_or(0)))
        };

        match (parse(old), parse(new)) {
            (Some((old_major, old_minor)), Some((new_major, new_minor))) => {
                if new_major != old_major {
                    VersionChangeType::Major
                } else if new_minor != old_minor {
                    VersionChangeType::Minor
                } else {
                    VersionChangeType::Patch
                }
            }
            _ => VersionChangeType::Unknown,
        }
    }

    /// Colorize a version string according to the change type
    fn colorize(&self, version: &str) -> String {
        match self {
            VersionChangeType::Major => version.red().bold().to_string(),
            VersionChangeType::Minor => version.yellow().to_string(),
            VersionChangeType::Patch => version.green().to_string(),
            VersionChangeType::Unknown => version.normal().to_string(),
        }
    }
}

/// Text formatter for terminal display
pub struct TextFormatter {
    verbosity: Verbosity,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_catalog(&self, catalog: &Catalog, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Quiet {
            writeln!(writer, "{}", "Platform constraints".bold())?;
        }

        let mut platforms = 0usize;
        let mut pins = 0usize;
        for constraint in catalog.constraints.iter() {
            if constraint.is_platform() {
                platforms += 1;
                writeln!(writer, "  {}", constraint.to_string().cyan())?;
            } else {
                pins += 1;
                writeln!(writer, "  {}", constraint)?;
            }
        }

        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        writeln!(writer)?;
        writeln!(
            writer,
            "{} constraints ({} platform imports, {} pins), {} groups",
            catalog.constraints.len(),
            platforms,
            pins,
            catalog.versions.len()
        )?;

        if self.verbosity == Verbosity::Verbose {
            writeln!(writer)?;
            writeln!(writer, "{}", "Version table".bold())?;
            let mut pairs: Vec<(&str, &str)> = catalog.versions.iter().collect();
            pairs.sort();
            for (group, version) in pairs {
                writeln!(writer, "  {} = {}", group, version)?;
            }
        }

        Ok(())
    }

    fn format_report(&self, report: &UpdateReport, writer: &mut dyn Write) -> std::io::Result<()> {
        for entry in &report.entries {
            match &entry.status {
                FreshnessStatus::Outdated { latest_stable } => {
                    let coordinate = &entry.constraint.coordinate;
                    let change =
                        VersionChangeType::from_versions(&coordinate.version, latest_stable);
                    writeln!(
                        writer,
                        "  {} {} -> {}",
                        coordinate.module_id(),
                        coordinate.version,
                        change.colorize(latest_stable)
                    )?;
                }
                FreshnessStatus::Unknown if self.verbosity == Verbosity::Verbose => {
                    writeln!(
                        writer,
                        "  {} {}",
                        entry.constraint.coordinate.module_id().dimmed(),
                        "(no release metadata)".dimmed()
                    )?;
                }
                _ => {}
            }

            if self.verbosity == Verbosity::Verbose && !entry.suppressed.is_empty() {
                writeln!(
                    writer,
                    "    suppressed unstable: {}",
                    entry.suppressed.join(", ").dimmed()
                )?;
            }
        }

        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        writeln!(writer)?;
        writeln!(
            writer,
            "{} outdated, {} up to date, {} unknown, {} unstable candidates suppressed",
            report.outdated_count(),
            report.up_to_date_count(),
            report.unknown_count(),
            report.suppressed_count()
        )?;

        Ok(())
    }
}
