//! Resolver error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors returned by resolver operations.
///
/// "Nothing found" is never an error: it is an empty list or a
/// [`GroupedResult`](namaste_types::GroupedResult) outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// The caller passed a blank query and strict input checking is enabled.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The record store failed or timed out.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for resolver operations.
pub type ResolverResult<T> = Result<T, ResolverError>;
