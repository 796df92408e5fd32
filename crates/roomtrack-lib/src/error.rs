use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the roomtrack library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a nearest-node lookup runs against a graph without nodes.
    #[error("graph has no nodes; no route is possible")]
    EmptyGraph,

    /// Raised when a coordinate or radius field is not a valid decimal string.
    #[error("invalid decimal value for {field}: {value:?}")]
    InvalidDecimal { field: &'static str, value: String },

    /// Raised when squaring or summing coordinate differences leaves the decimal range.
    #[error("distance computation overflowed the decimal range")]
    DistanceOverflow,

    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when a SQLite dataset lacks the `Locations` or `Indications` tables.
    #[error("unsupported dataset at {path}; expected Locations and Indications tables")]
    UnsupportedDataset { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the default dataset location")]
    ProjectDirsUnavailable,

    /// Wrapper for SQLite errors.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON dataset parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
