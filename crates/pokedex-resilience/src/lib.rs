//! # Pokedex Resilience
//!
//! Resilience patterns for the Pokedex service.
//! Provides retry with exponential backoff and timeouts for calls to
//! backends that may hang or fail.

pub mod retry;
pub mod timeout;

pub use retry::*;
pub use timeout::*;
