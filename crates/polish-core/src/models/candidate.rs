use serde::{Deserialize, Serialize};

/// A generated block of bullet-formatted text.
///
/// Produced by the generation client, consumed by the validator/sanitizer,
/// and eventually shown to the user or discarded. This is the single
/// structured candidate shape at the pipeline boundary; bare strings from
/// the wire are normalized into it at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteCandidate {
    /// Bullet-formatted rewrite text.
    pub text: String,
    /// True when unsupported numeric tokens were mechanically removed.
    #[serde(default)]
    pub sanitized: bool,
}

impl RewriteCandidate {
    /// A raw candidate as returned by the model.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sanitized: false,
        }
    }

    /// A candidate that survived sanitization.
    pub fn sanitized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sanitized: true,
        }
    }
}

/// Success value of the pipeline entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteOutcome {
    pub rewrites: Vec<RewriteCandidate>,
    /// True when the rewrites are sanitized fallbacks rather than raw model
    /// output. Callers must surface a user-visible notice in that case
    /// (see `constants::SANITIZED_NOTICE`).
    pub sanitized: bool,
}

impl RewriteOutcome {
    /// An outcome accepted directly from the model.
    pub fn accepted(rewrites: Vec<RewriteCandidate>) -> Self {
        Self {
            rewrites,
            sanitized: false,
        }
    }

    /// An outcome built from sanitized fallback candidates.
    pub fn accepted_sanitized(rewrites: Vec<RewriteCandidate>) -> Self {
        Self {
            rewrites,
            sanitized: true,
        }
    }
}
