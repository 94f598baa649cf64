//! Symptom matching.
//!
//! Symptom text is escaped so the store's free-text search treats it as a
//! literal, never as a pattern. No confidence filtering happens here.

use std::collections::HashSet;
use std::time::Instant;

use namaste_types::CodeRecord;

use crate::error::ResolverResult;
use crate::resolver::TerminologyResolver;
use crate::store::RecordStore;

/// Separator used to flatten a list of symptom terms into one query.
pub const TERM_SEPARATOR: &str = ", ";

/// Escapes every regular-expression metacharacter in `query`.
///
/// # Examples
///
/// ```
/// use namaste_resolver::escape_literal;
///
/// assert_eq!(escape_literal("fever.*"), r"fever\.\*");
/// assert_eq!(escape_literal("a(b)c"), r"a\(b\)c");
/// ```
pub fn escape_literal(query: &str) -> String {
    regex::escape(query)
}

/// Joins symptom terms into a single query string.
pub fn join_terms<T: AsRef<str>>(terms: &[T]) -> String {
    terms
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(TERM_SEPARATOR)
}

impl<S: RecordStore> TerminologyResolver<S> {
    /// Records whose description or TM2 definition contains `query`,
    /// case-insensitively.
    ///
    /// Queries shorter than the minimum length (after trimming) yield nothing.
    pub fn match_by_symptoms(&self, query: &str) -> ResolverResult<Vec<CodeRecord>> {
        let started = Instant::now();
        let query = query.trim();

        let matches = if self.is_searchable(query) {
            self.store.free_text_search(&escape_literal(query))?
        } else {
            Vec::new()
        };

        self.observer
            .symptoms_matched(query, matches.len(), started.elapsed());
        Ok(matches)
    }

    /// Joins `terms` with `", "` and searches the result as one query.
    pub fn match_by_symptom_terms<T: AsRef<str>>(
        &self,
        terms: &[T],
    ) -> ResolverResult<Vec<CodeRecord>> {
        self.match_by_symptoms(&join_terms(terms))
    }

    /// Records matching every term.
    ///
    /// Terms too short to search are ignored; if none remain the result is
    /// empty. Order follows the first searchable term's results.
    pub fn match_all_symptoms<T: AsRef<str>>(
        &self,
        terms: &[T],
    ) -> ResolverResult<Vec<CodeRecord>> {
        let started = Instant::now();
        let searchable: Vec<&str> = terms
            .iter()
            .map(|term| term.as_ref().trim())
            .filter(|term| self.is_searchable(term))
            .collect();

        let Some((first, rest)) = searchable.split_first() else {
            return Ok(Vec::new());
        };

        let mut matches = self.store.free_text_search(&escape_literal(first))?;
        for term in rest {
            if matches.is_empty() {
                break;
            }
            let ids: HashSet<String> = self
                .store
                .free_text_search(&escape_literal(term))?
                .into_iter()
                .map(|record| record.id)
                .collect();
            matches.retain(|record| ids.contains(&record.id));
        }

        self.observer.symptoms_matched(
            &searchable.join(" AND "),
            matches.len(),
            started.elapsed(),
        );
        Ok(matches)
    }

    fn is_searchable(&self, query: &str) -> bool {
        query.chars().count() >= self.config.min_query_len
    }
}
