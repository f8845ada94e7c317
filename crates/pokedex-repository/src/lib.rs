//! # Pokedex Repository
//!
//! Persistence and source-of-truth access:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn CapturedRepository>      Arc<dyn CatalogProvider>
//! PgCapturedRepository                  JsonFileCatalogProvider
//!   ↓  Arc<dyn DatabasePoolInterface>     ↓
//! PostgreSQL                            pokemon_db.json
//! ```

pub mod file;
pub mod pool;
pub mod postgres;
pub mod traits;

pub use file::JsonFileCatalogProvider;
pub use pool::*;
pub use postgres::PgCapturedRepository;
pub use traits::*;
