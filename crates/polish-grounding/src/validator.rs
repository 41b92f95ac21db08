//! Rewrite validation: flags candidates whose anchors the source text
//! does not support.

use polish_core::{RewriteCandidate, ValidationReport};

use crate::anchors::extract_anchors;

/// Validate candidates against the source text's anchor set.
///
/// A candidate is flagged invalid when:
/// - the source has no anchors but the candidate has any (the model
///   introduced numbers out of nothing), or
/// - any candidate anchor is absent from the source set (the model
///   introduced or altered a specific quantity).
///
/// A candidate whose anchors are a subset of the source's is valid even if
/// it omits some source anchors; omission is acceptable, invention is not.
/// Every invalid index is reported, not just the first. Pure and
/// deterministic.
pub fn validate(source: &str, candidates: &[RewriteCandidate]) -> ValidationReport {
    let source_anchors = extract_anchors(source);
    let source_has_anchors = !source_anchors.is_empty();

    let mut invalid_indexes = Vec::new();

    for (index, candidate) in candidates.iter().enumerate() {
        let candidate_anchors = extract_anchors(&candidate.text);

        if !source_has_anchors && !candidate_anchors.is_empty() {
            invalid_indexes.push(index);
            continue;
        }

        if !candidate_anchors.is_subset(&source_anchors) {
            invalid_indexes.push(index);
        }
    }

    if !invalid_indexes.is_empty() {
        tracing::debug!(
            "grounding: {}/{} candidates introduced unsupported anchors",
            invalid_indexes.len(),
            candidates.len()
        );
    }

    ValidationReport { invalid_indexes }
}
