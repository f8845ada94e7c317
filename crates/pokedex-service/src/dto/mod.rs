//! Data Transfer Objects (DTOs).

mod catalog_dto;
mod health_dto;

pub use catalog_dto::*;
pub use health_dto::*;
