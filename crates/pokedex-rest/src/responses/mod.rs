//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pokedex_core::{ErrorResponse, PokedexError};
use tracing::error;

/// Application error type for Axum.
///
/// 5xx errors are logged in full; the body only carries the generic notice.
#[derive(Debug)]
pub struct AppError(pub PokedexError);

impl From<PokedexError> for AppError {
    fn from(err: PokedexError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.is_server_error() {
            error!(error = %self.0, code = self.0.error_code(), "Request failed");
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_keeps_message() {
        let response = AppError(PokedexError::validation("Pokemon name is required")).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Pokemon name is required");
    }

    #[tokio::test]
    async fn test_internal_error_is_generic() {
        let response =
            AppError(PokedexError::Database("password authentication failed".into())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"],
            pokedex_core::GENERIC_ERROR_MESSAGE
        );
    }
}
