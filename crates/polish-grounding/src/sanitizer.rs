//! Mechanical sanitization: strips unsupported numeric tokens from
//! candidates instead of discarding them outright.
//!
//! Only literal digit tokens are rewritten; spelled-out number words
//! survive sanitization. That asymmetry is intentional scope-limiting,
//! not an oversight.

use std::sync::LazyLock;

use regex::Regex;

use polish_core::RewriteCandidate;

use crate::anchors::{extract_anchors, normalize_token, NUMBER_TOKEN_RE};

/// Runs of two or more spaces left behind by token removal.
static SPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

/// Leading whitespace after a newline.
static NEWLINE_INDENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]+").unwrap());

/// A bullet marker with no content before the next line.
static EMPTY_BULLET_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"•[ \t]*\n").unwrap());

/// A bullet marker with no content at the end of the text.
static EMPTY_BULLET_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"•[ \t]*$").unwrap());

/// Strip every digit token the source does not support, tidy the residue,
/// and mark survivors as sanitized. Candidates that end up empty are
/// dropped entirely, so the result may be shorter than the input. Pure
/// (input candidates are never mutated) and idempotent on its own output.
pub fn sanitize(source: &str, candidates: &[RewriteCandidate]) -> Vec<RewriteCandidate> {
    let source_anchors = extract_anchors(source);

    let mut cleaned = Vec::new();

    for candidate in candidates {
        if candidate.text.is_empty() {
            continue;
        }

        let stripped = NUMBER_TOKEN_RE.replace_all(&candidate.text, |caps: &regex::Captures| {
            let token = &caps[0];
            let digits = normalize_token(token);
            if source_anchors.contains(&digits) {
                token.to_string()
            } else {
                String::new()
            }
        });

        let text = tidy(&stripped);
        if text.is_empty() {
            tracing::debug!("grounding: candidate became empty after sanitization, dropping");
            continue;
        }

        cleaned.push(RewriteCandidate::sanitized(text));
    }

    cleaned
}

/// Collapse the whitespace and bullet residue token removal leaves behind.
fn tidy(text: &str) -> String {
    let text = SPACE_RUN_RE.replace_all(text, " ");
    let text = NEWLINE_INDENT_RE.replace_all(&text, "\n");
    let text = EMPTY_BULLET_LINE_RE.replace_all(&text, "• \n");
    let text = EMPTY_BULLET_END_RE.replace_all(&text, "• ");
    text.trim().to_string()
}
