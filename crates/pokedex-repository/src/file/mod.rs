//! File-backed catalog providers.

mod json_catalog_provider;

pub use json_catalog_provider::JsonFileCatalogProvider;
