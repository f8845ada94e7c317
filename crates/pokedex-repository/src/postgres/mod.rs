//! PostgreSQL repository implementations.

mod captured_repository;

pub use captured_repository::PgCapturedRepository;
