//! Shared error type for simple configuration failures.
//!
//! Sub-crates define their own richer error enums (`GraphError`,
//! `ActionError`, `SimError`, …) and convert into or wrap `CoreError` where
//! it fits; most don't need to reach for it at all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
