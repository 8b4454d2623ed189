//! Core error type.
//!
//! `rw-graph` keeps its own `GraphError`; this enum only covers what the core
//! types can get wrong on their own (configuration values).

use thiserror::Error;

/// The error type for `rw-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rw-core`.
pub type CoreResult<T> = Result<T, CoreError>;
