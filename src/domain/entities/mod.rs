//! Core business data structures.

pub mod contact;
pub mod visit_counter;

pub use contact::{ContactMessage, ContactSubmission};
pub use visit_counter::VisitCounter;
