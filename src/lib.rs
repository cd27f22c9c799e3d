//! depcat - Dependency catalog library
//!
//! This library models a centralized dependency-version catalog for a
//! multi-module build and the freshness check that goes with it:
//! - BOM imports, grouped version sets, and individual pins are parsed
//!   from a TOML catalog file into typed coordinates
//! - The builder flattens them into an exported constraint set plus a
//!   group-to-version lookup table (last write wins across categories)
//! - The update checker compares constraints against externally supplied
//!   release metadata, rejecting unstable candidates

pub mod catalog;
pub mod cli;
pub mod domain;
pub mod error;
pub mod output;
pub mod update;
