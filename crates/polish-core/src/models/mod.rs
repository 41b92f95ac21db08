//! Data models shared across the pipeline.

mod candidate;
mod generation_options;
mod validation_report;

pub use candidate::{RewriteCandidate, RewriteOutcome};
pub use generation_options::GenerationOptions;
pub use validation_report::ValidationReport;
