//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Message returned to HTTP callers for any 5xx error.
pub const GENERIC_ERROR_MESSAGE: &str = "An internal server error occurred";

/// Unified error type for all layers of the Pokedex service.
#[derive(Error, Debug)]
pub enum PokedexError {
    // ============ Client Errors ============
    /// Malformed client input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    // ============ Availability Errors ============
    /// A non-authoritative dependency required by the operation is down
    #[error("Service degraded: {0}")]
    ServiceDegraded(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Catalog data provider error
    #[error("Data provider error: {0}")]
    Provider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Timeout error
    #[error("Operation timed out: {0}")]
    Timeout(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PokedexError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound { .. } => 404,
            Self::ServiceDegraded(_) => 503,
            Self::Database(_)
            | Self::Provider(_)
            | Self::Configuration(_)
            | Self::Cache(_)
            | Self::Timeout(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::ServiceDegraded(_) => "SERVICE_DEGRADED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Provider(_) => "PROVIDER_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true for errors whose details must not leak to clients.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Message safe to hand back to an HTTP caller.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::ServiceDegraded(message) => message.clone(),
            Self::NotFound { .. } => self.to_string(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a service degraded error.
    #[must_use]
    pub fn degraded<T: Into<String>>(message: T) -> Self {
        Self::ServiceDegraded(message.into())
    }

    /// Creates a data provider error.
    #[must_use]
    pub fn provider<T: Into<String>>(message: T) -> Self {
        Self::Provider(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for PokedexError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut => Self::Timeout(err.to_string()),
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for PokedexError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

impl From<std::io::Error> for PokedexError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(format!("I/O error: {}", err))
    }
}

/// Serializable error body for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response from a `PokedexError`.
    #[must_use]
    pub fn from_error(error: &PokedexError) -> Self {
        Self {
            error: error.client_message(),
            code: Some(error.error_code().to_string()),
        }
    }
}

impl From<&PokedexError> for ErrorResponse {
    fn from(error: &PokedexError) -> Self {
        Self::from_error(error)
    }
}
