//! Shared error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` into them
//! via `From` impls where a core failure can surface.

use thiserror::Error;

/// The base error type for `lift-core` and a common source for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lift-core`.
pub type CoreResult<T> = Result<T, CoreError>;
