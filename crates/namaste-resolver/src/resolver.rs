//! The terminology resolver and its simple lookups.
//!
//! Code resolution, symptom matching and disease grouping live in their own
//! modules as further `impl` blocks on [`TerminologyResolver`].

use std::fmt;
use std::sync::Arc;

use namaste_types::{Category, CodeRecord};

use crate::config::ResolverConfig;
use crate::error::ResolverResult;
use crate::observer::{ResolutionObserver, TracingObserver};
use crate::store::RecordStore;

/// Resolves codes and symptom queries against a [`RecordStore`].
///
/// The resolver holds no per-request state and can be shared across threads
/// whenever its store can.
///
/// # Example
///
/// ```ignore
/// use namaste_resolver::TerminologyResolver;
///
/// let resolver = TerminologyResolver::new(store);
/// for record in resolver.resolve_by_code("NAM001")? {
///     println!("{} -> {:?}", record.local_code, record.target_code);
/// }
/// ```
pub struct TerminologyResolver<S> {
    pub(crate) store: S,
    pub(crate) config: ResolverConfig,
    pub(crate) observer: Arc<dyn ResolutionObserver>,
}

impl<S> fmt::Debug for TerminologyResolver<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminologyResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<S: RecordStore> TerminologyResolver<S> {
    /// Creates a resolver with the default config and a tracing observer.
    pub fn new(store: S) -> Self {
        Self::with_config(store, ResolverConfig::default())
    }

    /// Creates a resolver with the given config and a tracing observer.
    pub fn with_config(store: S, config: ResolverConfig) -> Self {
        Self {
            store,
            config,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replaces the observer notified after each operation.
    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the active config.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Title suggestions for search-as-you-type.
    ///
    /// Terms shorter than the minimum query length yield nothing. Results are
    /// cut to `limit`.
    pub fn autocomplete(&self, term: &str, limit: usize) -> ResolverResult<Vec<CodeRecord>> {
        let term = term.trim();
        if term.chars().count() < self.config.min_query_len {
            return Ok(Vec::new());
        }

        let mut suggestions = self.store.find_by_title_prefix(term)?;
        suggestions.truncate(limit);
        Ok(suggestions)
    }

    /// Exact local-code lookup, highest confidence first among duplicates.
    pub fn lookup_local_code(&self, code: &str) -> ResolverResult<Option<CodeRecord>> {
        Ok(self.store.find_by_local_code(code.trim())?)
    }

    /// Every record of a traditional-medicine system.
    pub fn codes_in_category(&self, category: &Category) -> ResolverResult<Vec<CodeRecord>> {
        Ok(self.store.find_by_category(category)?)
    }

    /// TM2 code a local code maps to, if any.
    pub fn translate_to_target(&self, code: &str) -> ResolverResult<Option<String>> {
        Ok(self
            .lookup_local_code(code)?
            .and_then(|record| record.mapped_target_code().map(str::to_string)))
    }

    /// Record mapped to a TM2 code, if any.
    pub fn reverse_translate(&self, target_code: &str) -> ResolverResult<Option<CodeRecord>> {
        Ok(self.store.find_by_target_code(target_code.trim())?)
    }

    /// Every record, ordered by title.
    pub fn all_codes(&self) -> ResolverResult<Vec<CodeRecord>> {
        Ok(self.store.all_records()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mapped, FailingStore, VecStore};
    use crate::ResolverError;

    fn make_resolver() -> TerminologyResolver<VecStore> {
        let mut fever = mapped("1", "AAA-1", "ayurveda", "SM2Z", Some(0.9));
        fever.local_title = "Jvara".to_string();
        let mut fever_siddha = mapped("2", "SA-1", "siddha", "SM2Z", Some(0.7));
        fever_siddha.local_title = "Suram".to_string();
        let mut cough = mapped("3", "AAE-7", "ayurveda", "SF6A", Some(0.8));
        cough.local_title = "Jvaratisara".to_string();
        let unmapped = CodeRecord::new("4", "U-9", "Zukam", Category::Unani);

        TerminologyResolver::new(VecStore::new(vec![fever, fever_siddha, cough, unmapped]))
    }

    #[test]
    fn test_autocomplete_short_term_is_empty() {
        let resolver = make_resolver();
        assert!(resolver.autocomplete("j", 10).unwrap().is_empty());
        assert!(resolver.autocomplete("  j  ", 10).unwrap().is_empty());
    }

    #[test]
    fn test_autocomplete_respects_limit() {
        let resolver = make_resolver();
        assert_eq!(resolver.autocomplete("jvara", 10).unwrap().len(), 2);
        assert_eq!(resolver.autocomplete("jvara", 1).unwrap().len(), 1);
    }

    #[test]
    fn test_translate_to_target() {
        let resolver = make_resolver();
        assert_eq!(
            resolver.translate_to_target("AAA-1").unwrap(),
            Some("SM2Z".to_string())
        );
        assert_eq!(resolver.translate_to_target("U-9").unwrap(), None);
        assert_eq!(resolver.translate_to_target("missing").unwrap(), None);
    }

    #[test]
    fn test_reverse_translate() {
        let resolver = make_resolver();
        let record = resolver.reverse_translate("SF6A").unwrap().unwrap();
        assert_eq!(record.local_code, "AAE-7");
        assert!(resolver.reverse_translate("XX00").unwrap().is_none());
    }

    #[test]
    fn test_codes_in_category() {
        let resolver = make_resolver();
        assert_eq!(resolver.codes_in_category(&Category::Ayurveda).unwrap().len(), 2);
        assert_eq!(resolver.codes_in_category(&Category::Yoga).unwrap().len(), 0);
    }

    #[test]
    fn test_all_codes_sorted_by_title() {
        let resolver = make_resolver();
        let titles: Vec<String> = resolver
            .all_codes()
            .unwrap()
            .into_iter()
            .map(|r| r.local_title)
            .collect();
        assert_eq!(titles, vec!["Jvara", "Jvaratisara", "Suram", "Zukam"]);
    }

    #[test]
    fn test_lookups_propagate_store_errors() {
        let resolver = TerminologyResolver::new(FailingStore);
        assert!(matches!(
            resolver.lookup_local_code("AAA-1"),
            Err(ResolverError::Store(_))
        ));
        assert!(resolver.autocomplete("jvara", 5).is_err());
        assert!(resolver.all_codes().is_err());
    }
}
