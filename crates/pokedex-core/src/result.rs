//! Result type aliases for the Pokedex service.

use crate::PokedexError;

/// A specialized `Result` type for Pokedex operations.
pub type PokedexResult<T> = Result<T, PokedexError>;
