use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::defaults;

/// Backend relay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Relay endpoint URL. Empty means unconfigured, which is a fatal
    /// error for any generation call.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Transport attempts per logical request.
    pub max_attempts: u32,
    /// Backoff unit in milliseconds (delay = attempt index × unit).
    pub backoff_unit_ms: u64,
}

impl BackendConfig {
    /// Config pointing at the given endpoint, everything else default.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.endpoint.trim().is_empty()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn backoff_unit(&self) -> Duration {
        Duration::from_millis(self.backoff_unit_ms)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
            max_attempts: defaults::DEFAULT_MAX_ATTEMPTS,
            backoff_unit_ms: defaults::DEFAULT_BACKOFF_UNIT_MS,
        }
    }
}
