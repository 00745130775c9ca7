//! Domain models for the commerce services.

pub mod order;
pub mod payment;
pub mod user;

pub use order::{OrderId, OrderSummary};
pub use payment::{Payment, PaymentId, PaymentStatus};
pub use user::{User, UserId};
