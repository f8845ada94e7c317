//! # Pokedex Core
//!
//! Core types, traits, and error definitions for the Pokedex service.
//! Holds the catalog record, the pure query pipeline (filter, search, sort,
//! paginate) and the error type shared by every other layer.

pub mod error;
pub mod pagination;
pub mod pokemon;
pub mod query;
pub mod result;
pub mod traits;

pub use error::*;
pub use pagination::*;
pub use pokemon::*;
pub use query::*;
pub use result::*;
pub use traits::*;
