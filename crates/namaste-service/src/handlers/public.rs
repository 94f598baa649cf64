//! Public terminology endpoints under `/api/terminology`.
//!
//! Every handler answers HTTP 200 with a [`TerminologyResponse`] envelope;
//! failures are reported through `success`, `message` and `errorCode`.

use axum::extract::{Path, Query, State};
use axum::Json;
use namaste_types::{Category, CodeRecord};
use serde::{Deserialize, Serialize};

use crate::response::{GroupedSearchData, TerminologyResponse, NOT_FOUND};
use crate::server::TerminologyServer;

use super::{AutocompleteParams, SymptomParams};

/// Body of a grouped symptom search.
#[derive(Debug, Deserialize)]
pub struct GroupedSearchRequest {
    /// Symptom terms, joined before searching.
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// A local code and the TM2 code it maps to.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    /// The local code as requested.
    pub code: String,
    /// The mapped TM2 code.
    pub tm2_code: String,
}

/// Service status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `UP` while the process serves requests.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// `GET /search/code/:code`: best mapping per category.
pub async fn search_by_code(
    State(server): State<TerminologyServer>,
    Path(code): Path<String>,
) -> TerminologyResponse<Vec<CodeRecord>> {
    tracing::info!("Code search request for: {}", code);

    let query = code.clone();
    match server.run(move |resolver| resolver.resolve_by_code(&query)).await {
        Ok(records) if records.is_empty() => {
            TerminologyResponse::error(format!("Code not found: {code}"), NOT_FOUND)
        }
        Ok(records) => TerminologyResponse::success(records),
        Err(e) => TerminologyResponse::failed("Code search", e),
    }
}

/// `GET /search/symptoms?query=`: free-text symptom match.
pub async fn search_by_symptoms(
    State(server): State<TerminologyServer>,
    Query(params): Query<SymptomParams>,
) -> TerminologyResponse<Vec<CodeRecord>> {
    tracing::info!("Symptom search request for: {}", params.query);

    match server
        .run(move |resolver| resolver.match_by_symptoms(&params.query))
        .await
    {
        Ok(records) => TerminologyResponse::success(records),
        Err(e) => TerminologyResponse::failed("Symptom search", e),
    }
}

/// `POST /search/symptoms/grouped`: symptom matches grouped by TM2 code.
pub async fn search_grouped(
    State(server): State<TerminologyServer>,
    Json(request): Json<GroupedSearchRequest>,
) -> TerminologyResponse<GroupedSearchData> {
    tracing::info!("Grouped symptom search request for: {:?}", request.symptoms);

    let max_allowed = server.resolver().config().max_disease_groups;
    let symptoms = request.symptoms.clone();
    match server
        .run(move |resolver| resolver.group_symptom_matches(&symptoms))
        .await
    {
        Ok(outcome) => TerminologyResponse::success(GroupedSearchData::from_outcome(
            outcome,
            &request.symptoms,
            max_allowed,
        )),
        Err(e) => TerminologyResponse::failed("Grouped symptom search", e),
    }
}

/// `GET /autocomplete?query=&limit=`: title suggestions.
pub async fn autocomplete(
    State(server): State<TerminologyServer>,
    Query(params): Query<AutocompleteParams>,
) -> TerminologyResponse<Vec<CodeRecord>> {
    let limit = params
        .limit
        .unwrap_or(server.resolver().config().autocomplete_limit);
    tracing::info!(
        "Auto-complete request for query: {} with limit: {}",
        params.query,
        limit
    );

    match server
        .run(move |resolver| resolver.autocomplete(&params.query, limit))
        .await
    {
        Ok(records) => TerminologyResponse::success(records),
        Err(e) => TerminologyResponse::failed("Auto-complete search", e),
    }
}

/// `GET /category/:category`: every code of one system.
pub async fn by_category(
    State(server): State<TerminologyServer>,
    Path(category): Path<String>,
) -> TerminologyResponse<Vec<CodeRecord>> {
    tracing::info!("Category search request for: {}", category);

    let category = Category::from_tag(&category);
    match server
        .run(move |resolver| resolver.codes_in_category(&category))
        .await
    {
        Ok(records) => TerminologyResponse::success(records),
        Err(e) => TerminologyResponse::failed("Category search", e),
    }
}

/// `GET /codes`: every code ordered by title.
pub async fn all_codes(
    State(server): State<TerminologyServer>,
) -> TerminologyResponse<Vec<CodeRecord>> {
    match server.run(|resolver| resolver.all_codes()).await {
        Ok(records) => TerminologyResponse::success(records),
        Err(e) => TerminologyResponse::failed("Code listing", e),
    }
}

/// `GET /code/:code`: exact local-code lookup.
pub async fn get_code(
    State(server): State<TerminologyServer>,
    Path(code): Path<String>,
) -> TerminologyResponse<CodeRecord> {
    let query = code.clone();
    match server
        .run(move |resolver| resolver.lookup_local_code(&query))
        .await
    {
        Ok(Some(record)) => TerminologyResponse::success(record),
        Ok(None) => TerminologyResponse::error(format!("Code not found: {code}"), NOT_FOUND),
        Err(e) => TerminologyResponse::failed("Code lookup", e),
    }
}

/// `GET /translate/:code`: local code to TM2 code.
pub async fn translate(
    State(server): State<TerminologyServer>,
    Path(code): Path<String>,
) -> TerminologyResponse<Translation> {
    let query = code.clone();
    match server
        .run(move |resolver| resolver.translate_to_target(&query))
        .await
    {
        Ok(Some(tm2_code)) => TerminologyResponse::success(Translation { code, tm2_code }),
        Ok(None) => {
            TerminologyResponse::error(format!("No TM2 mapping for code: {code}"), NOT_FOUND)
        }
        Err(e) => TerminologyResponse::failed("Translation", e),
    }
}

/// `GET /reverse/:tm2_code`: TM2 code back to a local record.
pub async fn reverse_translate(
    State(server): State<TerminologyServer>,
    Path(tm2_code): Path<String>,
) -> TerminologyResponse<CodeRecord> {
    let query = tm2_code.clone();
    match server
        .run(move |resolver| resolver.reverse_translate(&query))
        .await
    {
        Ok(Some(record)) => TerminologyResponse::success(record),
        Ok(None) => TerminologyResponse::error(
            format!("No code mapped to TM2 code: {tm2_code}"),
            NOT_FOUND,
        ),
        Err(e) => TerminologyResponse::failed("Reverse translation", e),
    }
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP",
        service: "NAMASTE Terminology Service",
        version: env!("CARGO_PKG_VERSION"),
    })
}
