/// Generation-client errors for backend relay calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Fatal configuration error. Surfaced immediately, never retried.
    #[error("backend endpoint not configured")]
    EndpointNotConfigured,

    /// Network/HTTP failure talking to the relay. Retried with backoff up
    /// to the configured attempt count before being surfaced.
    #[error("transport failure: {reason}")]
    Transport { reason: String },

    /// The relay returned a body that is not a `rewrites` array or not
    /// parseable JSON. Not retried within the same logical request.
    #[error("malformed backend response: {reason}")]
    MalformedResponse { reason: String },
}

impl ClientError {
    /// Whether the client's retry loop may retry after this error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Transport { .. })
    }
}
