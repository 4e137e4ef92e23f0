//! Error types for trace statistics.
//!
//! Only the input boundary and configuration checks can fail. The analysis
//! pipeline itself never errors: malformed records and unusable sample pairs
//! are skipped and counted in [`crate::Diagnostics`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading tracking data or validating configuration.
#[derive(Debug, Error)]
pub enum TraceStatsError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is valid JSON but not an array of records.
    #[error("expected a JSON array of records, found {found}")]
    InvalidTopLevel { found: &'static str },

    /// An analysis parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TraceStatsError>;
