//! Internal terminology endpoints under `/internal/terminology`.
//!
//! Used by other services. Bodies are raw JSON without the public envelope,
//! and failures use HTTP status codes.

use axum::extract::{Path, Query, State};
use axum::Json;
use namaste_types::{Category, CodeRecord};

use crate::error::ApiError;
use crate::server::TerminologyServer;

use super::{AutocompleteParams, SymptomParams};

/// Internal health marker.
pub const SERVICE_UP: &str = "TERMINOLOGY_SERVICE_UP";

/// `GET /search/code/:code`
pub async fn search_by_code(
    State(server): State<TerminologyServer>,
    Path(code): Path<String>,
) -> Result<Json<Vec<CodeRecord>>, ApiError> {
    tracing::info!("Internal code search request for: {}", code);

    let records = server
        .run(move |resolver| resolver.resolve_by_code(&code))
        .await?;
    Ok(Json(records))
}

/// `GET /search/symptoms?query=`
pub async fn search_by_symptoms(
    State(server): State<TerminologyServer>,
    Query(params): Query<SymptomParams>,
) -> Result<Json<Vec<CodeRecord>>, ApiError> {
    tracing::info!("Internal symptom search request for: {}", params.query);

    let records = server
        .run(move |resolver| resolver.match_by_symptoms(&params.query))
        .await?;
    Ok(Json(records))
}

/// `GET /code/:code`: 404 when the local code is unknown.
pub async fn get_code(
    State(server): State<TerminologyServer>,
    Path(code): Path<String>,
) -> Result<Json<CodeRecord>, ApiError> {
    tracing::info!("Internal get code request for: {}", code);

    let query = code.clone();
    server
        .run(move |resolver| resolver.lookup_local_code(&query))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Code not found: {code}")))
}

/// `GET /category/:category`
pub async fn by_category(
    State(server): State<TerminologyServer>,
    Path(category): Path<String>,
) -> Result<Json<Vec<CodeRecord>>, ApiError> {
    tracing::info!("Internal category search request for: {}", category);

    let category = Category::from_tag(&category);
    let records = server
        .run(move |resolver| resolver.codes_in_category(&category))
        .await?;
    Ok(Json(records))
}

/// `GET /autocomplete?query=&limit=`
pub async fn autocomplete(
    State(server): State<TerminologyServer>,
    Query(params): Query<AutocompleteParams>,
) -> Result<Json<Vec<CodeRecord>>, ApiError> {
    let limit = params
        .limit
        .unwrap_or(server.resolver().config().autocomplete_limit);

    let records = server
        .run(move |resolver| resolver.autocomplete(&params.query, limit))
        .await?;
    Ok(Json(records))
}

/// `GET /health`
pub async fn health() -> &'static str {
    SERVICE_UP
}
