//! JSON extractor that rejects missing or unreadable bodies with a 400.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use pokedex_core::PokedexError;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Like [`Json`], but every rejection becomes
/// `400 {"error": "Request body is required"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for RequiredJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!("Rejected request body: {}", rejection);
                Err(AppError(PokedexError::validation("Request body is required")))
            }
        }
    }
}
