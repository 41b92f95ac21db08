//! Wire protocol for the backend relay.
//!
//! The relay accepts a JSON POST body and answers with a `rewrites` array.
//! Anything else coming back is a malformed response, never silently
//! coerced.

use serde::{Deserialize, Serialize};

use polish_core::models::{GenerationOptions, RewriteCandidate};
use polish_core::tone::Tone;

/// One generation request as sent over the wire.
///
/// `unique_id` and `timestamp` are regenerated per transport attempt so
/// that no cache along the path can replay a stale completion.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteRequest {
    pub text: String,
    pub tone: Tone,
    pub temperature: f64,
    pub force_new: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub guardrail: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    pub unique_id: String,
    pub timestamp: i64,
}

impl RewriteRequest {
    /// Build a request with a fresh nonce and timestamp.
    pub fn new(text: &str, tone: Tone, options: &GenerationOptions) -> Self {
        Self {
            text: text.to_string(),
            tone,
            temperature: options.temperature(),
            force_new: options.effective_force_new(),
            guardrail: options.guardrail,
            instructions: options.effective_instructions().map(str::to_string),
            unique_id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// One rewrite as the relay returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct WireRewrite {
    pub text: String,
}

/// Successful relay response body.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendResponse {
    pub rewrites: Vec<WireRewrite>,
}

impl BackendResponse {
    /// Normalize wire rewrites into pipeline candidates.
    pub fn into_candidates(self) -> Vec<RewriteCandidate> {
        self.rewrites
            .into_iter()
            .map(|rewrite| RewriteCandidate::new(rewrite.text))
            .collect()
    }
}
