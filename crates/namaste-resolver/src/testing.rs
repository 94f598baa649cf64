//! In-crate test doubles for the record store.

use std::sync::atomic::{AtomicUsize, Ordering};

use namaste_types::{Category, CodeRecord};
use regex::RegexBuilder;

use crate::store::{RecordStore, StoreError, StoreResult};

/// Linear-scan store over a fixed list of records.
#[derive(Debug, Default)]
pub(crate) struct VecStore {
    records: Vec<CodeRecord>,
    free_text_calls: AtomicUsize,
}

impl VecStore {
    pub(crate) fn new(records: Vec<CodeRecord>) -> Self {
        Self {
            records,
            free_text_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn free_text_calls(&self) -> usize {
        self.free_text_calls.load(Ordering::SeqCst)
    }
}

impl RecordStore for VecStore {
    fn find_by_local_code(&self, code: &str) -> StoreResult<Option<CodeRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.local_code == code)
            .max_by(|a, b| {
                a.ranking_score()
                    .total_cmp(&b.ranking_score())
                    .then_with(|| b.id.cmp(&a.id))
            })
            .cloned())
    }

    fn find_by_any_code(&self, code: &str) -> StoreResult<Vec<CodeRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.matches_code(code))
            .cloned()
            .collect())
    }

    fn find_by_target_code(&self, code: &str) -> StoreResult<Option<CodeRecord>> {
        Ok(self
            .records
            .iter()
            .find(|r| r.mapped_target_code() == Some(code))
            .cloned())
    }

    fn find_by_category(&self, category: &Category) -> StoreResult<Vec<CodeRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| &r.category == category)
            .cloned()
            .collect())
    }

    fn find_by_title_prefix(&self, term: &str) -> StoreResult<Vec<CodeRecord>> {
        let term = term.to_lowercase();
        Ok(self
            .records
            .iter()
            .filter(|r| r.local_title.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }

    fn free_text_search(&self, escaped_literal: &str) -> StoreResult<Vec<CodeRecord>> {
        self.free_text_calls.fetch_add(1, Ordering::SeqCst);
        let pattern = RegexBuilder::new(escaped_literal)
            .case_insensitive(true)
            .build()
            .map_err(|e| StoreError::InvalidPattern {
                pattern: escaped_literal.to_string(),
                reason: e.to_string(),
            })?;

        Ok(self
            .records
            .iter()
            .filter(|r| {
                r.local_description
                    .as_deref()
                    .is_some_and(|d| pattern.is_match(d))
                    || r.target_definition
                        .as_deref()
                        .is_some_and(|d| pattern.is_match(d))
            })
            .cloned()
            .collect())
    }

    fn all_records(&self) -> StoreResult<Vec<CodeRecord>> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| a.local_title.cmp(&b.local_title));
        Ok(records)
    }
}

/// Store whose every query fails.
#[derive(Debug, Default)]
pub(crate) struct FailingStore;

impl FailingStore {
    fn fail<T>() -> StoreResult<T> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

impl RecordStore for FailingStore {
    fn find_by_local_code(&self, _code: &str) -> StoreResult<Option<CodeRecord>> {
        Self::fail()
    }

    fn find_by_any_code(&self, _code: &str) -> StoreResult<Vec<CodeRecord>> {
        Self::fail()
    }

    fn find_by_target_code(&self, _code: &str) -> StoreResult<Option<CodeRecord>> {
        Self::fail()
    }

    fn find_by_category(&self, _category: &Category) -> StoreResult<Vec<CodeRecord>> {
        Self::fail()
    }

    fn find_by_title_prefix(&self, _term: &str) -> StoreResult<Vec<CodeRecord>> {
        Self::fail()
    }

    fn free_text_search(&self, _escaped_literal: &str) -> StoreResult<Vec<CodeRecord>> {
        Self::fail()
    }

    fn all_records(&self) -> StoreResult<Vec<CodeRecord>> {
        Self::fail()
    }
}

/// Shorthand for a mapped record with a description.
pub(crate) fn mapped(
    id: &str,
    local_code: &str,
    category: &str,
    target_code: &str,
    score: Option<f64>,
) -> CodeRecord {
    let mut record = CodeRecord::new(id, local_code, format!("Title {id}"), Category::from_tag(category))
        .with_target(target_code, format!("Target {target_code}"));
    record.confidence_score = score;
    record
}
