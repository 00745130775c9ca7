//! Remote order lookup port.
//!
//! This trait defines the interface to the Order service.
//! Implementations can be HTTP clients, scripted fakes, etc.

use crate::domain::{OrderId, OrderSummary};

/// Failure of the order lookup itself.
///
/// A lookup that completes but yields no data is not an error; the port
/// returns `Ok(None)` for that case.
#[derive(Debug, thiserror::Error)]
pub enum OrderLookupError {
    /// The Order service could not be reached, timed out, or answered
    /// outside its contract. Displays the adapter's message verbatim so
    /// callers can surface it unchanged.
    #[error("{0}")]
    Unavailable(String),

    /// The Order service answered successfully but the payload did not
    /// decode as an order summary.
    #[error("Malformed order summary: {0}")]
    Malformed(String),
}

/// Port trait for resolving order references against the Order service.
#[async_trait::async_trait]
pub trait OrderLookup: Send + Sync + 'static {
    /// Fetches the summary of one order.
    ///
    /// Returns `Ok(None)` when the service reports no data for `id`.
    async fn get_order(&self, id: OrderId) -> Result<Option<OrderSummary>, OrderLookupError>;
}
