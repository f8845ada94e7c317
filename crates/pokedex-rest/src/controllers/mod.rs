//! REST API controllers.

pub mod health_controller;
pub mod legacy_controller;
pub mod pokemon_controller;
