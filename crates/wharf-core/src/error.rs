//! Typed error enums for the core.

use thiserror::Error;

/// Failure while fingerprinting a build configuration.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("failed to serialize build config: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure while stamping a project state snapshot.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to format observation time: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// A `git status --porcelain` line that could not be read.
#[derive(Debug, Error)]
pub enum GitStatusError {
    #[error("malformed status line {line_no}: {line:?}")]
    MalformedLine { line_no: usize, line: String },

    #[error("unknown status code '{code}' on line {line_no}")]
    UnknownCode { line_no: usize, code: char },

    #[error("undecodable quoted path on line {line_no}: {path}")]
    InvalidPath { line_no: usize, path: String },
}

/// A create request that is missing required data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field '{0}' is required")]
    MissingField(&'static str),

    #[error("at least one project is required")]
    NoProjects,

    #[error("project #{index}: {source}")]
    InvalidProject {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}
