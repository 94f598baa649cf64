//! HTTP handlers for the public and internal terminology APIs.

pub mod internal;
pub mod public;

use serde::Deserialize;

/// `?query=` parameter of symptom searches.
#[derive(Debug, Deserialize)]
pub struct SymptomParams {
    /// Free-text symptom query.
    pub query: String,
}

/// `?query=&limit=` parameters of auto-complete.
#[derive(Debug, Deserialize)]
pub struct AutocompleteParams {
    /// Title fragment.
    pub query: String,
    /// Maximum suggestions; the resolver default applies when absent.
    pub limit: Option<usize>,
}
