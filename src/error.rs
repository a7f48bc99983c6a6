//! Error types shared by ingestion, storage and the query service.

use std::path::PathBuf;

use thiserror::Error;

use crate::fetch::ResourceKind;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The upstream request failed or answered with an error status.
    #[error("failed to fetch {kind} from {url}: {source}")]
    Transport {
        kind: ResourceKind,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream body was not a JSON array of records.
    #[error("unexpected {kind} payload: {reason}")]
    Payload { kind: ResourceKind, reason: String },

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("database {0:?} already contains data; rerun with --fresh to rebuild it")]
    StoreNotEmpty(PathBuf),

    #[error("rocket {0} has no launches yet")]
    NoLaunchesForRocket(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("query task failed: {0}")]
    TaskJoin(String),
}
