//! # Pokedex Service
//!
//! Catalog caching and application services.
//!
//! ```text
//! CatalogService ─ CatalogServiceImpl
//!                    ├─ CatalogCache ── CacheStore (Redis) / CatalogProvider
//!                    ├─ CatalogProvider (uncached legacy reads, health)
//!                    └─ CapturedRepository
//! ```

pub mod cache;
pub mod catalog_service;
pub mod dto;
pub mod r#impl;

pub use cache::*;
pub use catalog_service::*;
pub use dto::*;
pub use r#impl::CatalogServiceImpl;
