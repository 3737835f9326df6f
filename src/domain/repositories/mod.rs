//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod counter_repository;

pub use counter_repository::CounterRepository;

#[cfg(test)]
pub use counter_repository::MockCounterRepository;
