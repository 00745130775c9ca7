//! # Order Client
//!
//! HTTP adapter for the Order service, implementing the `OrderLookup` port.
//!
//! The adapter classifies responses rather than surfacing raw HTTP:
//! - `404` or an empty/`null` body means the service knows no such order
//! - any transport failure, timeout, or other non-2xx status is `Unavailable`
//! - a 2xx body that does not decode is `Malformed`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use commerce_types::{OrderId, OrderLookup, OrderLookupError, OrderSummary};

/// Request timeout applied when none is configured.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Reqwest-based lookup against the Order service REST API.
///
/// Lookups target `{base_url}/{order_id}`. Every request runs under a
/// timeout so one slow upstream call cannot stall a whole listing.
pub struct HttpOrderLookup {
    base_url: String,
    timeout: Duration,
    http: Client,
}

impl HttpOrderLookup {
    /// Creates a lookup client with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            http: Client::new(),
        }
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn order_url(&self, id: OrderId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

#[async_trait]
impl OrderLookup for HttpOrderLookup {
    async fn get_order(&self, id: OrderId) -> Result<Option<OrderSummary>, OrderLookupError> {
        let url = self.order_url(id);
        tracing::debug!(order_id = %id, url = %url, "fetching order summary");

        let resp = self
            .http
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| OrderLookupError::Unavailable(format!("Order service unreachable: {}", e)))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(OrderLookupError::Unavailable(format!(
                "Order service returned {}",
                resp.status()
            )));
        }

        let body = resp.text().await.map_err(|e| {
            OrderLookupError::Unavailable(format!("Order service dropped the response: {}", e))
        })?;

        // Some order backends answer 200 with an empty or null body for
        // unknown ids; treat that the same as a 404.
        let body = body.trim();
        if body.is_empty() || body == "null" {
            return Ok(None);
        }

        let summary: OrderSummary =
            serde_json::from_str(body).map_err(|e| OrderLookupError::Malformed(e.to_string()))?;
        Ok(Some(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpOrderLookup::new("http://localhost:8082/api/orders");
        assert_eq!(client.base_url, "http://localhost:8082/api/orders");
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = HttpOrderLookup::new("http://localhost:8082/api/orders/");
        assert_eq!(client.base_url, "http://localhost:8082/api/orders");
    }

    #[test]
    fn test_client_with_timeout() {
        let client =
            HttpOrderLookup::new("http://localhost:8082").with_timeout(Duration::from_millis(250));
        assert_eq!(client.timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_lookup_url_appends_the_id() {
        let client = HttpOrderLookup::new("http://localhost:8082/api/orders");
        assert_eq!(
            client.order_url(OrderId::new(7)),
            "http://localhost:8082/api/orders/7"
        );
    }
}
