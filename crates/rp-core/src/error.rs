//! Core error type.
//!
//! The geodesy primitives are total and never fail; errors here come from
//! configuration and attribute parsing only.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown {kind} label {label:?}")]
    UnknownLabel { kind: &'static str, label: String },
}

/// Shorthand result type for `rp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
