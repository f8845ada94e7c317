//! OpenAPI documentation configuration.

use pokedex_core::{ErrorResponse, Pokemon};
use pokedex_service::{
    CacheHealth, CaptureRequest, CapturedResponse, ComponentHealth, HealthReport,
    InvalidateCacheResponse, PokemonListResponse, ServicesHealth, SuccessResponse, TypesResponse,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Pokedex API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pokedex API",
        version = "1.0.0",
        description = "Paginated, filterable Pokémon catalog with captured flags",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::pokemon_controller::list_pokemon,
        crate::controllers::pokemon_controller::list_captured,
        crate::controllers::pokemon_controller::set_captured,
        crate::controllers::pokemon_controller::list_types,
        crate::controllers::pokemon_controller::invalidate_cache,
        crate::controllers::health_controller::health_check,
        crate::controllers::legacy_controller::all_pokemon,
        crate::controllers::legacy_controller::icon_url,
    ),
    components(
        schemas(
            Pokemon,
            ErrorResponse,
            PokemonListResponse,
            TypesResponse,
            CapturedResponse,
            CaptureRequest,
            SuccessResponse,
            InvalidateCacheResponse,
            HealthReport,
            ServicesHealth,
            CacheHealth,
            ComponentHealth,
        )
    ),
    tags(
        (name = "pokemon", description = "Catalog and captured flags"),
        (name = "health", description = "Health check endpoints"),
        (name = "legacy", description = "Endpoints kept for older clients")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/pokemon",
            "/api/pokemon/capture",
            "/api/pokemon/invalidate-cache",
            "/api/health",
            "/icon/{name}",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {expected}");
        }
    }
}
