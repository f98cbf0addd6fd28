//! Error types and handling for featurekit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`primitive`]: Primitive definition validation errors
//! - [`source`]: Source parsing, fetching and archive errors
//! - [`fs`]: File system errors

pub mod fs;
pub mod primitive;
pub mod source;

pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
pub use primitive::{
    duplicate as duplicate_primitive, invalid as invalid_primitive,
    multiple_defined as multiple_primitives_defined, none_defined as no_primitive_defined,
    not_installed as primitive_not_installed,
};
pub use source::{
    extraction_failed, fetch_failed, invalid as invalid_source, not_found as source_not_found,
    unsupported_archive,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for featurekit operations
#[derive(Error, Diagnostic, Debug)]
pub enum FeatureKitError {
    // Primitive validation errors
    #[error("No primitive defined in file {path}")]
    #[diagnostic(
        code(featurekit::primitive::none_defined),
        help("A primitive file needs one document with `kind: aggregation` or `kind: transform`")
    )]
    NoPrimitiveDefined { path: String },

    #[error("More than one primitive defined in file {path}")]
    #[diagnostic(
        code(featurekit::primitive::multiple_defined),
        help("Split these primitives into separate files: {classes}")
    )]
    MultiplePrimitivesDefined { path: String, classes: String },

    #[error("Invalid primitive definition in file {path}: {reason}")]
    #[diagnostic(code(featurekit::primitive::invalid))]
    InvalidPrimitive { path: String, reason: String },

    #[error("Duplicate primitive '{name}' defined in {first} and {second}")]
    #[diagnostic(
        code(featurekit::primitive::duplicate),
        help("Primitive names are case-insensitive and ignore separators; rename one of the classes")
    )]
    DuplicatePrimitive {
        name: String,
        first: String,
        second: String,
    },

    #[error("Primitive '{name}' is not installed")]
    #[diagnostic(
        code(featurekit::primitive::not_installed),
        help("Run 'featurekit list-primitives --installed' to see installed primitives")
    )]
    PrimitiveNotInstalled { name: String },

    // Source errors
    #[error("Invalid primitive source '{input}': {reason}")]
    #[diagnostic(
        code(featurekit::source::invalid),
        help("Valid sources: ./dir, ./bundle.tar.gz, s3://bucket/key.tar.gz, https://host/bundle.tar.gz")
    )]
    InvalidSource { input: String, reason: String },

    #[error("Primitive source not found: {path}")]
    #[diagnostic(code(featurekit::source::not_found))]
    SourceNotFound { path: String },

    #[error("Unsupported archive format: {path}")]
    #[diagnostic(
        code(featurekit::source::unsupported_archive),
        help("Supported archive formats: .tar.gz, .tgz, .zip")
    )]
    UnsupportedArchive { path: String },

    #[error("Failed to extract archive {path}: {reason}")]
    #[diagnostic(code(featurekit::source::extraction_failed))]
    ExtractionFailed { path: String, reason: String },

    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(
        code(featurekit::source::fetch_failed),
        help("Check that the URL is correct and publicly readable")
    )]
    FetchFailed { url: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(featurekit::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(featurekit::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(featurekit::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(featurekit::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for FeatureKitError {
    fn from(err: std::io::Error) -> Self {
        FeatureKitError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FeatureKitError {
    fn from(err: serde_json::Error) -> Self {
        FeatureKitError::IoError {
            message: format!("Failed to serialize JSON: {err}"),
        }
    }
}

impl From<inquire::InquireError> for FeatureKitError {
    fn from(err: inquire::InquireError) -> Self {
        FeatureKitError::IoError {
            message: format!("Failed to read confirmation: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FeatureKitError>;
