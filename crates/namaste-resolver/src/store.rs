//! Record store interface consumed by the resolver.

use std::sync::Arc;

use namaste_types::{Category, CodeRecord};
use thiserror::Error;

/// Errors raised by a record store.
///
/// The resolver never converts these into empty results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not serve the query.
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    /// The query did not complete in time.
    #[error("Record store query timed out after {elapsed_ms} ms")]
    Timeout {
        /// Time waited before giving up, in milliseconds.
        elapsed_ms: u64,
    },

    /// The free-text pattern was rejected by the store.
    #[error("Invalid search pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as received.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type for record store queries.
pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only query interface over NAMASTE code records.
///
/// Implementations must be safe for concurrent reads; the resolver shares a
/// single store across request handlers without locking.
pub trait RecordStore: Send + Sync {
    /// Returns the record with exactly this local code.
    ///
    /// When several records share the code, the one with the highest
    /// confidence score wins; remaining ties go to the lowest `id`.
    fn find_by_local_code(&self, code: &str) -> StoreResult<Option<CodeRecord>>;

    /// Returns every record whose local code or target code equals `code`.
    fn find_by_any_code(&self, code: &str) -> StoreResult<Vec<CodeRecord>>;

    /// Returns the first record mapped to this TM2 code.
    fn find_by_target_code(&self, code: &str) -> StoreResult<Option<CodeRecord>>;

    /// Returns every record of a category.
    fn find_by_category(&self, category: &Category) -> StoreResult<Vec<CodeRecord>>;

    /// Returns records whose title matches `term`, case-insensitively.
    ///
    /// Titles starting with the term come first, then titles containing it.
    fn find_by_title_prefix(&self, term: &str) -> StoreResult<Vec<CodeRecord>>;

    /// Matches an escaped regular expression against each record's description
    /// and TM2 definition, case-insensitively.
    fn free_text_search(&self, escaped_literal: &str) -> StoreResult<Vec<CodeRecord>>;

    /// Returns every record ordered by title.
    fn all_records(&self) -> StoreResult<Vec<CodeRecord>>;
}

impl<T: RecordStore + ?Sized> RecordStore for Arc<T> {
    fn find_by_local_code(&self, code: &str) -> StoreResult<Option<CodeRecord>> {
        (**self).find_by_local_code(code)
    }

    fn find_by_any_code(&self, code: &str) -> StoreResult<Vec<CodeRecord>> {
        (**self).find_by_any_code(code)
    }

    fn find_by_target_code(&self, code: &str) -> StoreResult<Option<CodeRecord>> {
        (**self).find_by_target_code(code)
    }

    fn find_by_category(&self, category: &Category) -> StoreResult<Vec<CodeRecord>> {
        (**self).find_by_category(category)
    }

    fn find_by_title_prefix(&self, term: &str) -> StoreResult<Vec<CodeRecord>> {
        (**self).find_by_title_prefix(term)
    }

    fn free_text_search(&self, escaped_literal: &str) -> StoreResult<Vec<CodeRecord>> {
        (**self).free_text_search(escaped_literal)
    }

    fn all_records(&self) -> StoreResult<Vec<CodeRecord>> {
        (**self).all_records()
    }
}
