//! # Commerce Hex
//!
//! Application service layer and HTTP adapter for the commerce service.
//!
//! ## Architecture
//!
//! - `service` - Application services (payment enrichment, user management)
//! - `inbound` - HTTP adapter (Axum server)
//! - `openapi` - OpenAPI documentation served at `/docs`
//!
//! The services are generic over their ports: `PaymentRepository` and
//! `UserRepository` for storage, `OrderLookup` for the remote order
//! service. Adapters are injected at the composition root.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::{PaymentService, UserService};
