/// Terminal grounding failures: no attempt and no sanitized fallback
/// produced rewrites the source text supports.
#[derive(Debug, thiserror::Error)]
pub enum GroundingError {
    /// The model invented details not present in the source, and
    /// sanitization could not salvage a grounded variant.
    #[error("generated rewrites added details that aren't in your original text; please simplify the request and try again")]
    UngroundedRewrites,

    /// Every attempt came back empty.
    #[error("no rewrites were generated; please try again")]
    NoRewrites,
}
