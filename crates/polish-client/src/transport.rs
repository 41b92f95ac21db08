//! HTTP transport for the relay, behind a trait so the retry loop is
//! testable without a network.

use polish_core::errors::ClientError;

use crate::protocol::{BackendResponse, RewriteRequest};

/// One wire round-trip to the relay. No retry here: the client owns the
/// retry policy, the transport owns a single send.
pub trait RewriteTransport: Send + Sync {
    fn send(&self, endpoint: &str, request: &RewriteRequest)
        -> Result<BackendResponse, ClientError>;
}

/// Convert a failure string into a retryable transport error.
fn transport_err(reason: String) -> ClientError {
    ClientError::Transport { reason }
}

/// Blocking reqwest transport.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: std::time::Duration) -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| transport_err(e.to_string()))?;
        Ok(Self { client })
    }
}

impl RewriteTransport for HttpTransport {
    fn send(
        &self,
        endpoint: &str,
        request: &RewriteRequest,
    ) -> Result<BackendResponse, ClientError> {
        // Cache-busting query plus no-cache headers: intermediaries must
        // never replay an earlier completion for the same text.
        let timestamp = request.timestamp.to_string();
        let salt = uuid::Uuid::new_v4().simple().to_string();
        let response = self
            .client
            .post(endpoint)
            .query(&[
                ("_", request.unique_id.as_str()),
                ("t", timestamp.as_str()),
                ("r", salt.as_str()),
            ])
            .header("Cache-Control", "no-cache, no-store, must-revalidate")
            .header("Pragma", "no-cache")
            .header("Expires", "0")
            .json(request)
            .send()
            .map_err(|e| transport_err(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Every non-2xx is retryable: the relay fronts a model that
            // sheds load with 4xx as readily as 5xx.
            let body = response.text().unwrap_or_default();
            return Err(transport_err(format!("HTTP {status}: {body}")));
        }

        response.json::<BackendResponse>().map_err(|e| {
            ClientError::MalformedResponse {
                reason: e.to_string(),
            }
        })
    }
}
