use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading documents or building queries.
///
/// Matching and searching never fail: a query that finds nothing
/// returns `None` or an empty list.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid attribute constraint '{0}', expected key=value")]
    InvalidAttribute(String),

    #[error("invalid query descriptor: {0}")]
    InvalidQuery(#[from] serde_json::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, QueryError>;
