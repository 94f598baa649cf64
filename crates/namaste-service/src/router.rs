//! Terminology API router.
//!
//! Routes are nested under `/api/terminology` (public, enveloped) and
//! `/internal/terminology` (service-to-service, raw bodies).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{internal, public};
use crate::server::TerminologyServer;

/// Build the terminology router.
pub fn terminology_router(server: TerminologyServer) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let public_routes = Router::new()
        .route("/search/code/:code", get(public::search_by_code))
        .route("/search/symptoms", get(public::search_by_symptoms))
        .route("/search/symptoms/grouped", post(public::search_grouped))
        .route("/autocomplete", get(public::autocomplete))
        .route("/category/:category", get(public::by_category))
        .route("/codes", get(public::all_codes))
        .route("/code/:code", get(public::get_code))
        .route("/translate/:code", get(public::translate))
        .route("/reverse/:tm2_code", get(public::reverse_translate))
        .route("/health", get(public::health))
        .with_state(server.clone());

    let internal_routes = Router::new()
        .route("/search/code/:code", get(internal::search_by_code))
        .route("/search/symptoms", get(internal::search_by_symptoms))
        .route("/code/:code", get(internal::get_code))
        .route("/category/:category", get(internal::by_category))
        .route("/autocomplete", get(internal::autocomplete))
        .route("/health", get(internal::health))
        .with_state(server);

    Router::new()
        .nest("/api/terminology", public_routes)
        .nest("/internal/terminology", internal_routes)
}
