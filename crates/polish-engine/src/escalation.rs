//! Escalation controller over a [`RewriteGenerator`].
//!
//! One logical polish request walks the ladder in [`crate::attempt`]: an
//! exploratory generation first, a guardrailed one if validation rejects
//! it. Sanitized forms of rejected candidates are kept as a fallback and
//! returned only when no raw attempt ever validates.

use polish_core::config::EscalationConfig;
use polish_core::constants::MAX_ESCALATION_ATTEMPTS;
use polish_core::errors::{GroundingError, PolishError, PolishResult};
use polish_core::models::{GenerationOptions, RewriteCandidate, RewriteOutcome};
use polish_core::tone::Tone;
use polish_core::traits::RewriteGenerator;
use polish_grounding::{sanitize, validate};

use crate::attempt::{escalation_ladder, AttemptOutcome};

/// Drives generation attempts through validation and sanitized fallback.
pub struct EscalationEngine<G: RewriteGenerator> {
    generator: G,
    config: EscalationConfig,
}

impl<G: RewriteGenerator> EscalationEngine<G> {
    pub fn new(generator: G, config: EscalationConfig) -> Self {
        Self { generator, config }
    }

    /// Run the full pipeline for one text/tone pair.
    ///
    /// Terminal outcomes:
    /// - raw candidates that validate are returned as-is,
    /// - otherwise the most recent validating sanitized set is returned
    ///   with the outcome marked sanitized,
    /// - otherwise a grounding failure if any attempt produced ungrounded
    ///   candidates, the last generator error if every attempt errored,
    ///   and an empty-generation failure when nothing came back at all.
    pub fn generate_and_validate(&self, text: &str, tone: Tone) -> PolishResult<RewriteOutcome> {
        let mut fallback: Option<Vec<RewriteCandidate>> = None;
        let mut saw_invalid = false;
        let mut last_error: Option<PolishError> = None;

        for (index, options) in escalation_ladder().into_iter().enumerate() {
            tracing::debug!(
                "engine: attempt {}/{} (guardrail: {})",
                index + 1,
                MAX_ESCALATION_ATTEMPTS,
                options.guardrail
            );

            match self.run_attempt(text, tone, &options) {
                AttemptOutcome::Accepted(candidates) => {
                    return Ok(RewriteOutcome::accepted(candidates));
                }
                AttemptOutcome::SanitizedFallback(candidates) => {
                    // Most recent validating fallback wins: later attempts
                    // ran under stricter instructions.
                    saw_invalid = true;
                    fallback = Some(candidates);
                }
                AttemptOutcome::Rejected => {
                    saw_invalid = true;
                }
                AttemptOutcome::Empty => {}
                AttemptOutcome::Errored(err) => {
                    tracing::debug!("engine: attempt {} failed: {err}", index + 1);
                    last_error = Some(err);
                }
            }
        }

        if let Some(rewrites) = fallback {
            tracing::info!("engine: accepting sanitized fallback rewrites");
            return Ok(RewriteOutcome::accepted_sanitized(rewrites));
        }
        if saw_invalid {
            return Err(GroundingError::UngroundedRewrites.into());
        }
        if let Some(err) = last_error {
            return Err(err);
        }
        Err(GroundingError::NoRewrites.into())
    }

    /// One rung of the ladder: generate, validate, try sanitization.
    fn run_attempt(&self, text: &str, tone: Tone, options: &GenerationOptions) -> AttemptOutcome {
        let generated = if self.config.batch_size > 1 {
            self.generator
                .generate_batch(text, tone, options, self.config.batch_size)
        } else {
            self.generator.generate(text, tone, options)
        };

        let candidates = match generated {
            Ok(candidates) => candidates,
            Err(err) => return AttemptOutcome::Errored(err),
        };
        if candidates.is_empty() {
            return AttemptOutcome::Empty;
        }

        if validate(text, &candidates).is_valid() {
            return AttemptOutcome::Accepted(candidates);
        }

        let sanitized = sanitize(text, &candidates);
        if !sanitized.is_empty() && validate(text, &sanitized).is_valid() {
            return AttemptOutcome::SanitizedFallback(sanitized);
        }

        AttemptOutcome::Rejected
    }
}
