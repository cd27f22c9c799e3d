//! depcat - Dependency catalog builder and update-freshness checker
//!
//! Loads a TOML dependency catalog (BOM imports, grouped version sets,
//! individual pins), builds the platform constraint set, and optionally
//! checks the catalog against a release-metadata document, suppressing
//! unstable upgrade candidates.

use clap::Parser;
use depcat::catalog::load_catalog;
use depcat::cli::CliArgs;
use depcat::output::{create_formatter, OutputConfig};
use depcat::update::{check, ReleaseMetadata};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("depcat v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Catalog: {}", args.catalog.display());
    }

    let catalog = load_catalog(&args.catalog)?;

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    let formatter = create_formatter(output_config);
    let mut stdout = io::stdout().lock();

    let exit_code = match &args.updates {
        Some(metadata_path) => {
            if args.verbose {
                eprintln!("Release metadata: {}", metadata_path.display());
            }
            let metadata = ReleaseMetadata::load(metadata_path)?;
            let report = check(&catalog, &metadata);
            formatter.format_report(&report, &mut stdout)?;

            // Non-zero when upgrades are available, so CI can gate on it
            if report.has_outdated() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        None => {
            formatter.format_catalog(&catalog, &mut stdout)?;
            ExitCode::SUCCESS
        }
    };

    stdout.flush()?;
    Ok(exit_code)
}
