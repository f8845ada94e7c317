//! # Pokedex Server Library
//!
//! Composition root and startup utilities for the Pokedex server.

pub mod app;
pub mod startup;
