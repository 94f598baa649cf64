//! Public API response envelope and payloads.

use axum::response::{IntoResponse, Response};
use axum::Json;
use namaste_resolver::{join_terms, ResolverError};
use namaste_types::{DiseaseGroup, GroupedResult};
use serde::Serialize;

/// Error code for lookups that matched nothing.
pub const NOT_FOUND: &str = "NOT_FOUND";
/// Error code for store failures and timeouts.
pub const SEARCH_ERROR: &str = "SEARCH_ERROR";
/// Error code for input rejected by the resolver.
pub const INVALID_INPUT: &str = "INVALID_INPUT";

/// Envelope wrapping every public API payload.
///
/// Failures are reported in-band with HTTP 200.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminologyResponse<T> {
    /// Whether the operation produced data.
    pub success: bool,
    /// Human-readable failure reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Stable failure code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
    /// The payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> TerminologyResponse<T> {
    /// Successful response carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            error_code: None,
            data: Some(data),
        }
    }

    /// Failed response with a message and code.
    pub fn error(message: impl Into<String>, error_code: &'static str) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            error_code: Some(error_code),
            data: None,
        }
    }

    /// Failed response for a resolver error. Store details are logged, not returned.
    pub fn failed(operation: &str, err: ResolverError) -> Self {
        match err {
            ResolverError::InvalidInput(detail) => Self::error(detail, INVALID_INPUT),
            ResolverError::Store(store_error) => {
                tracing::error!(operation, error = %store_error, "terminology query failed");
                Self::error(format!("{operation} failed"), SEARCH_ERROR)
            }
        }
    }
}

impl<T: Serialize> IntoResponse for TerminologyResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Payload of a grouped symptom search.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedSearchData {
    /// True only when disease groups are returned.
    pub result: bool,
    /// Explanation when no groups are returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Number of groups returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_disease_groups: Option<usize>,
    /// The symptoms as searched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_symptoms: Option<String>,
    /// Number of groups found when over the limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_count: Option<usize>,
    /// The group limit, when exceeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_allowed: Option<usize>,
    /// Groups, highest similarity first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_groups: Option<Vec<DiseaseGroup>>,
}

impl GroupedSearchData {
    fn outcome(result: bool, message: Option<String>) -> Self {
        Self {
            result,
            message,
            total_disease_groups: None,
            matched_symptoms: None,
            result_count: None,
            max_allowed: None,
            disease_groups: None,
        }
    }

    /// Shapes a grouping outcome for the wire.
    pub fn from_outcome(outcome: GroupedResult, symptoms: &[String], max_allowed: usize) -> Self {
        match outcome {
            GroupedResult::NoSymptoms => {
                Self::outcome(false, Some("No symptoms provided".to_string()))
            }
            GroupedResult::NoMatches => Self::outcome(
                false,
                Some(format!("No symptoms found matching: {}", join_terms(symptoms))),
            ),
            GroupedResult::TooManyGroups(count) => Self {
                result_count: Some(count),
                max_allowed: Some(max_allowed),
                ..Self::outcome(
                    false,
                    Some(format!(
                        "Found {count} disease groups. Please refine your symptoms to get {max_allowed} or fewer results."
                    )),
                )
            },
            GroupedResult::Grouped(matches) => Self {
                total_disease_groups: Some(matches.groups.len()),
                matched_symptoms: Some(matches.matched_symptoms),
                disease_groups: Some(matches.groups),
                ..Self::outcome(true, None)
            },
        }
    }
}
