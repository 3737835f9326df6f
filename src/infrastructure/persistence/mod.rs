//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgCounterRepository`] - Atomic upsert-increment of the visit counter

pub mod pg_counter_repository;

pub use pg_counter_repository::PgCounterRepository;
