//! Configuration for the polish pipeline.
//!
//! Each subsystem has its own section with serde defaults, so a partial
//! (or empty) TOML file always produces a usable config.

mod backend_config;
pub mod defaults;
mod escalation_config;

pub use backend_config::BackendConfig;
pub use escalation_config::EscalationConfig;

use serde::{Deserialize, Serialize};

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolishConfig {
    pub backend: BackendConfig,
    pub escalation: EscalationConfig,
}

impl PolishConfig {
    /// Parse a TOML string; missing sections and fields fall back to
    /// defaults.
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}
