//! Code resolution.
//!
//! Resolves an input code (local or TM2) to the best mapping per
//! traditional-medicine system:
//!
//! 1. A local code that already carries a TM2 mapping pivots the search to
//!    that TM2 code.
//! 2. Every record whose local or TM2 code equals the search key is fetched.
//! 3. Records at or below the confidence threshold are dropped.
//! 4. The highest-confidence record of each category is kept.

use std::time::Instant;

use namaste_types::CodeRecord;

use crate::error::{ResolverError, ResolverResult};
use crate::resolver::TerminologyResolver;
use crate::store::RecordStore;

impl<S: RecordStore> TerminologyResolver<S> {
    /// Resolves a code to at most one record per category.
    ///
    /// Blank input yields an empty list, or `InvalidInput` when the config
    /// rejects blank input. Store failures are returned as errors.
    pub fn resolve_by_code(&self, input: &str) -> ResolverResult<Vec<CodeRecord>> {
        let started = Instant::now();
        let code = input.trim();

        if code.is_empty() {
            if self.config.reject_blank_input {
                return Err(ResolverError::InvalidInput(
                    "code must not be blank".to_string(),
                ));
            }
            self.observer
                .code_resolved(input, code, 0, started.elapsed());
            return Ok(Vec::new());
        }

        let search_key = self.search_key_for(code)?;
        let candidates = self.store.find_by_any_code(&search_key)?;

        let threshold = self.config.confidence_threshold;
        let resolved = best_per_category(
            candidates
                .into_iter()
                .filter(|record| record.exceeds_confidence(threshold)),
        );

        self.observer
            .code_resolved(input, &search_key, resolved.len(), started.elapsed());
        Ok(resolved)
    }

    /// Key used for the broad lookup: the mapped TM2 code of the best record
    /// with this local code, or the code itself.
    fn search_key_for(&self, code: &str) -> ResolverResult<String> {
        let redirected = self
            .store
            .find_by_local_code(code)?
            .and_then(|record| record.mapped_target_code().map(str::to_string));

        Ok(redirected.unwrap_or_else(|| code.to_string()))
    }
}

/// Keeps the highest-confidence record of each category.
///
/// Categories appear in the order they were first seen. On equal scores the
/// earlier record wins.
pub fn best_per_category<I>(records: I) -> Vec<CodeRecord>
where
    I: IntoIterator<Item = CodeRecord>,
{
    records
        .into_iter()
        .fold(Vec::<CodeRecord>::new(), |mut best, record| {
            match best.iter_mut().find(|kept| kept.category == record.category) {
                Some(kept) if record.ranking_score() > kept.ranking_score() => *kept = record,
                Some(_) => {}
                None => best.push(record),
            }
            best
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mapped, FailingStore, VecStore};
    use crate::{ResolverConfig, StoreError};
    use namaste_types::Category;
    use proptest::prelude::*;

    fn resolver(records: Vec<CodeRecord>) -> TerminologyResolver<VecStore> {
        TerminologyResolver::new(VecStore::new(records))
    }

    #[test]
    fn test_blank_input_returns_empty() {
        let resolver = resolver(vec![mapped("1", "A1", "sys-A", "T1", Some(0.9))]);
        assert!(resolver.resolve_by_code("").unwrap().is_empty());
        assert!(resolver.resolve_by_code("   ").unwrap().is_empty());
    }

    #[test]
    fn test_blank_input_rejected_when_strict() {
        let resolver = TerminologyResolver::with_config(VecStore::default(), ResolverConfig::strict());
        assert!(matches!(
            resolver.resolve_by_code("  "),
            Err(ResolverError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_best_record_per_category() {
        let resolver = resolver(vec![
            mapped("1", "A1", "sys-A", "T1", Some(0.9)),
            mapped("2", "A2", "sys-A", "T1", Some(0.7)),
        ]);

        let resolved = resolver.resolve_by_code("T1").unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, "1");
        assert_eq!(resolved[0].confidence_score, Some(0.9));
    }

    #[test]
    fn test_threshold_is_strict() {
        let resolver = resolver(vec![
            mapped("1", "A1", "sys-A", "T1", Some(0.6)),
            mapped("2", "B1", "sys-B", "T1", Some(0.61)),
            mapped("3", "C1", "sys-C", "T1", None),
        ]);

        let resolved = resolver.resolve_by_code("T1").unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, "2");
    }

    #[test]
    fn test_local_code_redirects_to_target_code() {
        let resolver = resolver(vec![
            mapped("1", "A1", "sys-A", "T1", Some(0.9)),
            mapped("2", "B7", "sys-B", "T1", Some(0.8)),
            mapped("3", "C3", "sys-C", "T2", Some(0.95)),
        ]);

        // A1 maps to T1, so every T1 record comes back, one per category.
        let resolved = resolver.resolve_by_code("A1").unwrap();
        let ids: Vec<&str> = resolved.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_redirect_uses_highest_confidence_duplicate() {
        let resolver = resolver(vec![
            mapped("1", "A1", "sys-A", "T1", Some(0.65)),
            mapped("2", "A1", "sys-B", "T2", Some(0.85)),
            mapped("3", "Z9", "sys-C", "T2", Some(0.7)),
        ]);

        let resolved = resolver.resolve_by_code("A1").unwrap();
        let ids: Vec<&str> = resolved.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_unmapped_local_code_searches_itself() {
        let unmapped = CodeRecord::new("1", "U1", "Humma", Category::Unani).with_confidence(0.9);
        let resolver = resolver(vec![unmapped]);

        let resolved = resolver.resolve_by_code(" U1 ").unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].local_code, "U1");
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let resolver = resolver(vec![mapped("1", "A1", "sys-A", "T1", Some(0.9))]);
        assert!(resolver.resolve_by_code("NOPE").unwrap().is_empty());
    }

    #[test]
    fn test_store_error_propagates() {
        let resolver = TerminologyResolver::new(FailingStore);
        let err = resolver.resolve_by_code("A1").unwrap_err();
        assert_eq!(
            err,
            ResolverError::Store(StoreError::Unavailable("connection refused".to_string()))
        );
    }

    #[test]
    fn test_best_per_category_first_seen_wins_ties() {
        let best = best_per_category(vec![
            mapped("1", "A1", "sys-A", "T1", Some(0.8)),
            mapped("2", "B1", "sys-B", "T1", Some(0.7)),
            mapped("3", "A2", "sys-A", "T1", Some(0.8)),
        ]);
        let ids: Vec<&str> = best.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    fn arb_record() -> impl Strategy<Value = (u8, Option<f64>)> {
        (0u8..4, proptest::option::of(0.0f64..=1.0))
    }

    proptest! {
        #[test]
        fn prop_resolution_keeps_best_per_category(specs in proptest::collection::vec(arb_record(), 0..40)) {
            let records: Vec<CodeRecord> = specs
                .iter()
                .enumerate()
                .map(|(i, (cat, score))| {
                    mapped(&format!("{i:03}"), &format!("L{i}"), &format!("sys-{cat}"), "T1", *score)
                })
                .collect();
            let resolver = resolver(records.clone());

            let resolved = resolver.resolve_by_code("T1").unwrap();

            for record in &resolved {
                prop_assert!(record.confidence_score.is_some_and(|s| s > 0.6));
                let category_best = records
                    .iter()
                    .filter(|r| r.category == record.category && r.exceeds_confidence(0.6))
                    .map(CodeRecord::ranking_score)
                    .fold(f64::MIN, f64::max);
                prop_assert_eq!(record.ranking_score(), category_best);
            }

            let mut categories: Vec<&Category> = resolved.iter().map(|r| &r.category).collect();
            let before = categories.len();
            categories.sort();
            categories.dedup();
            prop_assert_eq!(categories.len(), before);

            let expected_categories = records
                .iter()
                .filter(|r| r.exceeds_confidence(0.6))
                .map(|r| &r.category)
                .collect::<std::collections::BTreeSet<_>>();
            prop_assert_eq!(resolved.len(), expected_categories.len());
        }
    }
}
