//! CLI argument parsing module for depcat

use clap::Parser;
use std::path::PathBuf;

/// Maven-style dependency catalog builder and update-freshness checker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depcat",
    version,
    about = "Dependency catalog builder and update-freshness checker"
)]
pub struct CliArgs {
    /// Catalog file (default: catalog.toml in the current directory)
    #[arg(default_value = "catalog.toml")]
    pub catalog: PathBuf,

    /// Run the update-freshness check against a release-metadata JSON file
    #[arg(long, value_name = "FILE")]
    pub updates: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}
