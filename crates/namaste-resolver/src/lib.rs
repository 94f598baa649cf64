//! # namaste-resolver
//!
//! Terminology resolution and symptom matching between NAMASTE
//! traditional-medicine codes and ICD-11 TM2 codes.
//!
//! The [`TerminologyResolver`] runs three operations against any
//! [`RecordStore`]:
//!
//! - [`resolve_by_code`](TerminologyResolver::resolve_by_code): the best
//!   mapping per traditional-medicine system for a local or TM2 code.
//! - [`match_by_symptoms`](TerminologyResolver::match_by_symptoms): records
//!   whose description or TM2 definition contains the symptom text.
//! - [`group_symptom_matches`](TerminologyResolver::group_symptom_matches):
//!   symptom matches clustered into disease groups by TM2 code.
//!
//! The resolver is stateless. It never retries and never swallows store
//! failures; "nothing found" is an empty list or a [`GroupedResult`] outcome.
//!
//! [`GroupedResult`]: namaste_types::GroupedResult

#![warn(missing_docs)]

mod code;
mod config;
mod error;
mod grouping;
mod observer;
mod resolver;
mod store;
mod symptoms;

#[cfg(test)]
mod testing;

pub use code::best_per_category;
pub use config::{ResolverConfig, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_MAX_DISEASE_GROUPS};
pub use error::{ResolverError, ResolverResult};
pub use grouping::group_candidates;
pub use observer::{NoopObserver, ResolutionObserver, TracingObserver};
pub use resolver::TerminologyResolver;
pub use store::{RecordStore, StoreError, StoreResult};
pub use symptoms::{escape_literal, join_terms, TERM_SEPARATOR};

// Re-export namaste-types for convenience
pub use namaste_types;
