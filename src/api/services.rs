use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};

use super::{
    models::{HealthResponse, SourcesQuery},
    state::AppState,
    validation::validate_query,
};
use crate::api::error::ApiError;
use crate::resolver::ResolutionResult;

/// Source resolution endpoint (GET /sources)
///
/// Validates the query, runs the resolver and returns its result as-is.
/// Upstream failures are not HTTP errors here: the resolver folds them into
/// `error` and the response is still 200. Only a bad query yields 400.
pub async fn get_sources(
    State(state): State<AppState>,
    query: Result<Query<SourcesQuery>, QueryRejection>,
) -> Result<Json<ResolutionResult>, ApiError> {
    let Query(query) = query?;
    let reference = validate_query(query)?;

    tracing::debug!(embed_url = %reference.embed_url, "Resolving sources");
    let result = state.resolver.resolve(&reference).await;

    Ok(Json(result))
}

/// Resolver counters (GET /operators/metrics)
pub async fn get_metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.resolver.metrics().snapshot())
}

pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
