//! Error types for the magnus pipelines.
//!
//! This module defines a single error enum covering every failure mode in
//! the application. Errors raised by leaf components propagate unmodified to
//! the pipeline driver; no component catches and suppresses them.

use thiserror::Error;

/// The main error type for magnus operations.
#[derive(Error, Debug)]
pub enum MagnusError {
    /// NetCDF file operation errors
    #[error("NetCDF error: {0}")]
    NetCdf(#[from] netcdf::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A required variable is absent from the gridded source
    #[error("Missing variable: no field matches {name}")]
    MissingVariable { name: String },

    /// More than one field in the source matches a required variable
    #[error("Ambiguous variable: {count} fields match {name}")]
    AmbiguousVariable { name: String, count: usize },

    /// Coordinate values differ between two fields that must be co-registered
    #[error("Coordinate mismatch on {axis} axis: {message}")]
    CoordinateMismatch { axis: String, message: String },

    /// A unit string the converter does not recognize
    #[error("Unsupported unit: {unit}")]
    UnsupportedUnit { unit: String },

    /// A formula was evaluated at a singular point of its domain
    #[error("Domain error: {message}")]
    Domain { message: String },

    /// Failure to access or interpret an input collaborator's data
    #[error("Source read error: {message}")]
    SourceRead { message: String },

    /// Array shape inconsistent with the declared coordinate axes
    #[error("Shape error: {message}")]
    Shape { message: String },
}

/// Convenience type alias for Results with MagnusError
pub type Result<T> = std::result::Result<T, MagnusError>;
