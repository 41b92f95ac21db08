use serde::{Deserialize, Serialize};

/// Result of validating candidates against a source text's anchor set.
///
/// Computed fresh per validation call; never persisted. Reports every
/// failing candidate, not just the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Indexes of candidates that introduced anchors absent from the source.
    pub invalid_indexes: Vec<usize>,
}

impl ValidationReport {
    /// True iff no candidate was flagged.
    pub fn is_valid(&self) -> bool {
        self.invalid_indexes.is_empty()
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid_indexes.len()
    }
}
