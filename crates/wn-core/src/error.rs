//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where they need it.

use thiserror::Error;

/// The error type for `wn-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `wn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
