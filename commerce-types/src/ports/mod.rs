//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod orders;
mod repository;

pub use orders::{OrderLookup, OrderLookupError};
pub use repository::{PaymentRepository, UserRepository};
