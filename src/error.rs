//! Application error types using thiserror
//!
//! Error hierarchy:
//! - CatalogError: Issues with catalog declarations and the catalog file
//! - MetadataError: Issues with the release-metadata document
//! - IoError: File system operation failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Catalog related errors
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Release metadata related errors
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to catalog declarations and the catalog file
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Coordinate string does not have the group:artifact:version shape
    #[error("malformed coordinate '{coordinate}': expected group:artifact:version")]
    MalformedCoordinate { coordinate: String },

    /// Catalog file not found
    #[error("catalog file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read catalog file
    #[error("failed to read catalog file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error in the catalog file
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },
}

/// Errors related to the release-metadata document
#[derive(Error, Debug)]
pub enum MetadataError {
    /// Metadata file not found
    #[error("release metadata file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read metadata file
    #[error("failed to read release metadata file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error in the metadata document
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Generic IO error
    #[error("IO error at {path}: {source}")]
    Generic {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Creates a new MalformedCoordinate error
    pub fn malformed_coordinate(coordinate: impl Into<String>) -> Self {
        CatalogError::MalformedCoordinate {
            coordinate: coordinate.into(),
        }
    }

    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        CatalogError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CatalogError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl MetadataError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        MetadataError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MetadataError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        MetadataError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl IoError {
    /// Creates a new Generic IO error
    pub fn generic(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Generic {
            path: path.into(),
            source,
        }
    }
}
