//! Catalog and captured-flag controller.

use crate::{
    extractors::{CatalogParams, RequiredJson},
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use pokedex_core::{CatalogQuery, ErrorResponse};
use pokedex_service::{
    CaptureRequest, CapturedResponse, InvalidateCacheResponse, PokemonListResponse,
    SuccessResponse, TypesResponse,
};
use tracing::debug;

/// Creates the catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pokemon", get(list_pokemon))
        .route("/api/pokemon/captured", get(list_captured))
        .route("/api/pokemon/capture", post(set_captured))
        .route("/api/pokemon/types", get(list_types))
        .route("/api/pokemon/invalidate-cache", post(invalidate_cache))
}

/// List one page of the catalog.
#[utoipa::path(
    get,
    path = "/api/pokemon",
    tag = "pokemon",
    params(CatalogParams),
    responses(
        (status = 200, description = "Page of the filtered, sorted catalog", body = PokemonListResponse),
        (status = 400, description = "Non-integer page or page_size", body = ErrorResponse),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    )
)]
pub async fn list_pokemon(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> ApiResult<PokemonListResponse> {
    let query = CatalogQuery::try_from(params)?;
    let response = state.catalog_service.list_pokemon(query).await?;
    ok(response)
}

/// List captured Pokémon names.
#[utoipa::path(
    get,
    path = "/api/pokemon/captured",
    tag = "pokemon",
    responses(
        (status = 200, description = "Captured names", body = CapturedResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn list_captured(State(state): State<AppState>) -> ApiResult<CapturedResponse> {
    ok(state.catalog_service.list_captured().await?)
}

/// Capture or release a Pokémon.
#[utoipa::path(
    post,
    path = "/api/pokemon/capture",
    tag = "pokemon",
    request_body = CaptureRequest,
    responses(
        (status = 200, description = "Flag updated", body = SuccessResponse),
        (status = 400, description = "Missing body or name", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn set_captured(
    State(state): State<AppState>,
    RequiredJson(request): RequiredJson<CaptureRequest>,
) -> ApiResult<SuccessResponse> {
    debug!("Capture request: {:?}", request);
    state.catalog_service.set_captured(request).await?;
    ok(SuccessResponse::ok())
}

/// List distinct categories.
#[utoipa::path(
    get,
    path = "/api/pokemon/types",
    tag = "pokemon",
    responses(
        (status = 200, description = "Sorted category list", body = TypesResponse),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    )
)]
pub async fn list_types(State(state): State<AppState>) -> ApiResult<TypesResponse> {
    ok(state.catalog_service.list_types().await?)
}

/// Drop both catalog cache entries.
#[utoipa::path(
    post,
    path = "/api/pokemon/invalidate-cache",
    tag = "pokemon",
    responses(
        (status = 200, description = "Cache invalidated", body = InvalidateCacheResponse),
        (status = 503, description = "Cache unavailable", body = InvalidateCacheResponse)
    )
)]
pub async fn invalidate_cache(
    State(state): State<AppState>,
) -> (StatusCode, Json<InvalidateCacheResponse>) {
    let success = state.catalog_service.invalidate_cache().await;
    let status = if success {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(InvalidateCacheResponse::from_outcome(success)))
}
