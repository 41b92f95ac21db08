use serde::{Deserialize, Serialize};

use super::defaults;

/// Escalation controller configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EscalationConfig {
    /// Concurrent generations per attempt. 1 = sequential policy.
    pub batch_size: usize,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            batch_size: defaults::DEFAULT_BATCH_SIZE,
        }
    }
}
