//! Relay client: retry loop, linear backoff, and concurrent batch fan-out.

use std::sync::Arc;

use polish_core::config::BackendConfig;
use polish_core::errors::{ClientError, PolishResult};
use polish_core::models::{GenerationOptions, RewriteCandidate};
use polish_core::tone::Tone;
use polish_core::traits::RewriteGenerator;

use crate::protocol::RewriteRequest;
use crate::transport::{HttpTransport, RewriteTransport};

/// Generation client for the backend relay.
///
/// Owns the retry policy: transport failures are retried with linear
/// backoff up to the configured attempt count, malformed responses are
/// surfaced immediately, and a missing endpoint fails before any wire
/// traffic.
pub struct RewriteClient {
    config: BackendConfig,
    transport: Arc<dyn RewriteTransport>,
}

impl RewriteClient {
    /// Client over the real HTTP transport.
    pub fn new(config: BackendConfig) -> Result<Self, ClientError> {
        let transport = Arc::new(HttpTransport::new(config.timeout())?);
        Ok(Self { config, transport })
    }

    /// Client over an injected transport. Used by tests to script wire
    /// outcomes.
    pub fn with_transport(config: BackendConfig, transport: Arc<dyn RewriteTransport>) -> Self {
        Self { config, transport }
    }

    /// Issue one logical generation request.
    ///
    /// Each transport attempt gets a fresh nonce and timestamp, so retries
    /// are distinct requests to every cache along the path.
    pub fn request_rewrites(
        &self,
        text: &str,
        tone: Tone,
        options: &GenerationOptions,
    ) -> PolishResult<Vec<RewriteCandidate>> {
        if !self.config.is_configured() {
            return Err(ClientError::EndpointNotConfigured.into());
        }

        let mut last_err = String::new();

        for attempt in 0..self.config.max_attempts {
            if attempt > 0 {
                let delay = self.config.backoff_unit() * attempt;
                tracing::debug!(
                    "client: retry attempt {}/{} after {:?}",
                    attempt + 1,
                    self.config.max_attempts,
                    delay
                );
                std::thread::sleep(delay);
            }

            let request = RewriteRequest::new(text, tone, options);
            match self.transport.send(&self.config.endpoint, &request) {
                Ok(response) => return Ok(response.into_candidates()),
                Err(err) if err.is_retryable() => {
                    last_err = err.to_string();
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ClientError::Transport {
            reason: format!(
                "all {} attempts failed: {last_err}",
                self.config.max_attempts
            ),
        }
        .into())
    }

    /// Issue `batch_size` generations concurrently and collect the first
    /// rewrite of each success. A failed request shrinks the result, it
    /// never aborts the batch.
    pub fn request_rewrite_batch(
        &self,
        text: &str,
        tone: Tone,
        options: &GenerationOptions,
        batch_size: usize,
    ) -> PolishResult<Vec<RewriteCandidate>> {
        if !self.config.is_configured() {
            return Err(ClientError::EndpointNotConfigured.into());
        }

        let batch_size = batch_size.max(1);
        let mut collected = Vec::with_capacity(batch_size);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..batch_size)
                .map(|_| scope.spawn(|| self.request_rewrites(text, tone, options)))
                .collect();

            for handle in handles {
                match handle.join() {
                    Ok(Ok(mut candidates)) if !candidates.is_empty() => {
                        collected.push(candidates.remove(0));
                    }
                    Ok(Ok(_)) => {
                        tracing::debug!("client: batch member returned no rewrites");
                    }
                    Ok(Err(err)) => {
                        tracing::debug!("client: batch member failed: {err}");
                    }
                    Err(_) => {
                        tracing::warn!("client: batch member panicked");
                    }
                }
            }
        });

        tracing::debug!(
            "client: batch collected {}/{} rewrites",
            collected.len(),
            batch_size
        );
        Ok(collected)
    }
}

impl RewriteGenerator for RewriteClient {
    fn generate(
        &self,
        text: &str,
        tone: Tone,
        options: &GenerationOptions,
    ) -> PolishResult<Vec<RewriteCandidate>> {
        self.request_rewrites(text, tone, options)
    }

    fn generate_batch(
        &self,
        text: &str,
        tone: Tone,
        options: &GenerationOptions,
        batch_size: usize,
    ) -> PolishResult<Vec<RewriteCandidate>> {
        self.request_rewrite_batch(text, tone, options, batch_size)
    }
}
