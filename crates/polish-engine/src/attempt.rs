//! The escalation ladder and per-attempt outcomes.

use polish_core::constants::MAX_ESCALATION_ATTEMPTS;
use polish_core::models::{GenerationOptions, RewriteCandidate};
use polish_core::PolishError;

/// Generation options for each rung of the ladder, in order.
///
/// The second attempt does not resample blindly: it turns the guardrail on,
/// which swaps in the strict anti-fabrication directive and drops the
/// sampling temperature.
pub fn escalation_ladder() -> [GenerationOptions; MAX_ESCALATION_ATTEMPTS] {
    [
        GenerationOptions::exploratory(),
        GenerationOptions::guardrailed(),
    ]
}

/// What one rung of the ladder produced.
#[derive(Debug)]
pub enum AttemptOutcome {
    /// Raw candidates that validated. Terminal, no further attempts.
    Accepted(Vec<RewriteCandidate>),
    /// Raw candidates failed validation, but their sanitized forms
    /// validate. Kept as a fallback while later attempts run.
    SanitizedFallback(Vec<RewriteCandidate>),
    /// Candidates failed validation and sanitization could not rescue them.
    Rejected,
    /// The generator produced nothing usable.
    Empty,
    /// The generator itself failed.
    Errored(PolishError),
}
