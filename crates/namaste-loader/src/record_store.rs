//! Resolver integration.
//!
//! This module implements the resolver's `RecordStore` trait for `CodeStore`,
//! so a loaded file can back code resolution and symptom matching directly.

use namaste_resolver::{RecordStore, StoreError, StoreResult};
use namaste_types::{Category, CodeRecord};
use regex::RegexBuilder;

use crate::CodeStore;

fn owned(records: Vec<&CodeRecord>) -> Vec<CodeRecord> {
    records.into_iter().cloned().collect()
}

/// Implements RecordStore for CodeStore. The store is immutable once loaded.
impl RecordStore for CodeStore {
    fn find_by_local_code(&self, code: &str) -> StoreResult<Option<CodeRecord>> {
        Ok(self.best_for_local_code(code).cloned())
    }

    fn find_by_any_code(&self, code: &str) -> StoreResult<Vec<CodeRecord>> {
        Ok(owned(self.with_any_code(code)))
    }

    fn find_by_target_code(&self, code: &str) -> StoreResult<Option<CodeRecord>> {
        Ok(self.first_with_target(code).cloned())
    }

    fn find_by_category(&self, category: &Category) -> StoreResult<Vec<CodeRecord>> {
        Ok(owned(self.in_category(category)))
    }

    fn find_by_title_prefix(&self, term: &str) -> StoreResult<Vec<CodeRecord>> {
        Ok(owned(self.titles_matching(term)))
    }

    fn free_text_search(&self, escaped_literal: &str) -> StoreResult<Vec<CodeRecord>> {
        let pattern = RegexBuilder::new(escaped_literal)
            .case_insensitive(true)
            .build()
            .map_err(|e| StoreError::InvalidPattern {
                pattern: escaped_literal.to_string(),
                reason: e.to_string(),
            })?;

        Ok(owned(self.matching_text(&pattern)))
    }

    fn all_records(&self) -> StoreResult<Vec<CodeRecord>> {
        Ok(owned(self.sorted_by_title()))
    }
}
