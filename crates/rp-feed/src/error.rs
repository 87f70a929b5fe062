//! Feed-loading error type.

use thiserror::Error;

use rp_core::CoreError;

/// Errors produced by `rp-feed`.
///
/// Only structural failures end up here.  Individual records with unusable
/// coordinates are skipped and counted in [`Loaded::skipped`](crate::Loaded).
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type FeedResult<T> = Result<T, FeedError>;
