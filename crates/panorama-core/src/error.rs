//! Error types for discovery, mode parsing and layout.

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for a single native query.
///
/// `Ok(false)` is the normal end of an index-until-failure enumeration and
/// is never reported as an error.
pub type QueryResult<T> = std::result::Result<T, QueryError>;

/// A native query failed for a reason other than exhaustion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The record's self-reported size did not match its type.
    #[error("{record} size field is {found} bytes, expected {expected}")]
    SizeMismatch {
        record: &'static str,
        expected: usize,
        found: usize,
    },

    /// A device name could not be passed to the OS.
    #[error("invalid device name {0:?}")]
    InvalidName(String),

    /// The OS reported a failure.
    #[error("{call} failed: {message}")]
    Os { call: &'static str, message: String },

    /// The single current-settings query returned nothing.
    #[error("no current display mode for {device}")]
    NoCurrentMode { device: String },

    /// The display subsystem is not available on this platform.
    #[error("display enumeration is not supported on this platform")]
    Unsupported,
}

/// Core error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A native query failed; discovery is aborted.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Device-name and monitor-handle enumerations could not be paired.
    #[error("found {displays} attached displays but {monitors} monitor rectangles")]
    AlignmentMismatch { displays: usize, monitors: usize },

    /// A resolution or refresh-rate string could not be parsed.
    #[error("malformed mode string {0:?}")]
    MalformedModeString(String),

    /// A display index outside the snapshot.
    #[error("no display at index {0}")]
    UnknownDisplay(usize),

    /// Layout inputs cannot produce a finite scale.
    #[error("degenerate layout: {0}")]
    DegenerateLayout(String),
}
