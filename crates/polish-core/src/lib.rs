//! # polish-core
//!
//! Foundation crate for the polish rewrite pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tone;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PolishConfig;
pub use errors::{ClientError, GroundingError, PolishError, PolishResult};
pub use models::{GenerationOptions, RewriteCandidate, RewriteOutcome, ValidationReport};
pub use tone::Tone;
