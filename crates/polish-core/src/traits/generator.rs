use crate::errors::PolishResult;
use crate::models::{GenerationOptions, RewriteCandidate};
use crate::tone::Tone;

/// Rewrite generation against the model-backed relay.
///
/// The escalation controller consumes the model only through this narrow
/// interface, so tests can script outcomes without a network.
pub trait RewriteGenerator: Send + Sync {
    /// Issue one logical generation request (transport retry included).
    fn generate(
        &self,
        text: &str,
        tone: Tone,
        options: &GenerationOptions,
    ) -> PolishResult<Vec<RewriteCandidate>>;

    /// Issue `batch_size` concurrent generations with distinct nonces and
    /// collect the first rewrite of each success. Individual failures mean
    /// fewer results, never an aborted batch; the returned set may be empty.
    ///
    /// The default implementation runs the requests sequentially, which
    /// preserves the collection semantics for implementations that have no
    /// concurrency of their own (mocks, single-threaded backends).
    fn generate_batch(
        &self,
        text: &str,
        tone: Tone,
        options: &GenerationOptions,
        batch_size: usize,
    ) -> PolishResult<Vec<RewriteCandidate>> {
        let mut collected = Vec::new();
        for _ in 0..batch_size.max(1) {
            if let Ok(mut candidates) = self.generate(text, tone, options) {
                if !candidates.is_empty() {
                    collected.push(candidates.remove(0));
                }
            }
        }
        Ok(collected)
    }
}
