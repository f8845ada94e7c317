//! Endpoints kept for older clients.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use pokedex_core::{ErrorResponse, Pokemon};

const SPRITE_BASE_URL: &str = "https://img.pokemondb.net/sprites/silver/normal";

/// Creates the legacy router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(all_pokemon))
        .route("/icon/:name", get(icon_url))
}

/// Sprite URL for a Pokémon name.
#[must_use]
pub fn sprite_url(name: &str) -> String {
    format!("{}/{}.png", SPRITE_BASE_URL, name.to_lowercase())
}

/// Full, unpaginated catalog read straight from the provider.
#[utoipa::path(
    get,
    path = "/",
    tag = "legacy",
    responses(
        (status = 200, description = "Every record", body = Vec<Pokemon>),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    )
)]
pub async fn all_pokemon(State(state): State<AppState>) -> ApiResult<Vec<Pokemon>> {
    ok(state.catalog_service.legacy_catalog().await?)
}

/// Sprite URL as a JSON string.
#[utoipa::path(
    get,
    path = "/icon/{name}",
    tag = "legacy",
    params(("name" = String, Path, description = "Pokémon name, any case")),
    responses(
        (status = 200, description = "Sprite URL", body = String)
    )
)]
pub async fn icon_url(Path(name): Path<String>) -> Json<String> {
    Json(sprite_url(&name))
}
