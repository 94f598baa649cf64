//! Resolver configuration.

/// Default minimum confidence (exclusive) for code resolution.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Default maximum number of disease groups a grouped search may return.
pub const DEFAULT_MAX_DISEASE_GROUPS: usize = 20;

/// Tunables for [`TerminologyResolver`](crate::TerminologyResolver).
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Records must score strictly above this to survive code resolution.
    pub confidence_threshold: f64,
    /// Grouped searches producing more groups than this return
    /// `TooManyGroups` instead of results.
    pub max_disease_groups: usize,
    /// Minimum trimmed length, in characters, of symptom and autocomplete queries.
    pub min_query_len: usize,
    /// Suggestions returned by autocomplete when the caller gives no limit.
    pub autocomplete_limit: usize,
    /// Fail blank code lookups with `InvalidInput` instead of returning nothing.
    pub reject_blank_input: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            max_disease_groups: DEFAULT_MAX_DISEASE_GROUPS,
            min_query_len: 2,
            autocomplete_limit: 10,
            reject_blank_input: false,
        }
    }
}

impl ResolverConfig {
    /// Creates a config that rejects blank code lookups.
    pub fn strict() -> Self {
        Self {
            reject_blank_input: true,
            ..Self::default()
        }
    }
}
