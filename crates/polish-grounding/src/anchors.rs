//! Anchor extraction: normalized numeric tokens used as a proxy for
//! "fact actually present in the source".
//!
//! Matching is deliberately coarse: "35%" and "35" normalize to the same
//! anchor, and a candidate number that happens to collide with an unrelated
//! source number (source "8 steps", candidate "8% conversion") will
//! validate. This is a known false-negative in the grounding check, traded
//! for zero locale/grammar awareness.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Digit-sequence token: a digit followed by any mix of digits and the
/// separators/suffixes `+`, `.`, `,`, `%`. Shared with the sanitizer so
/// extraction and stripping agree on what a "number token" is.
pub(crate) static NUMBER_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d+.,%]*").unwrap());

/// Alphabetic tokens for the spelled-out number scan.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z]+").unwrap());

/// A set of anchors derived from one text. Order-independent, duplicates
/// collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorSet(BTreeSet<String>);

impl AnchorSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, anchor: &str) -> bool {
        self.0.contains(anchor)
    }

    /// True when every anchor in `self` also appears in `other`.
    pub fn is_subset(&self, other: &AnchorSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for AnchorSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Strip every non-digit character from a matched token.
pub(crate) fn normalize_token(token: &str) -> String {
    token.chars().filter(char::is_ascii_digit).collect()
}

/// Map a lowercased word to its canonical digit string, if it belongs to
/// the fixed cardinal vocabulary (zero–twenty, decades thirty–ninety,
/// hundred). Compound numbers ("twenty-three") decompose into independent
/// components, a known coarsening.
fn word_to_digits(word: &str) -> Option<&'static str> {
    Some(match word {
        "zero" => "0",
        "one" => "1",
        "two" => "2",
        "three" => "3",
        "four" => "4",
        "five" => "5",
        "six" => "6",
        "seven" => "7",
        "eight" => "8",
        "nine" => "9",
        "ten" => "10",
        "eleven" => "11",
        "twelve" => "12",
        "thirteen" => "13",
        "fourteen" => "14",
        "fifteen" => "15",
        "sixteen" => "16",
        "seventeen" => "17",
        "eighteen" => "18",
        "nineteen" => "19",
        "twenty" => "20",
        "thirty" => "30",
        "forty" => "40",
        "fifty" => "50",
        "sixty" => "60",
        "seventy" => "70",
        "eighty" => "80",
        "ninety" => "90",
        "hundred" => "100",
        _ => return None,
    })
}

/// Extract the anchor set of a text: the union of normalized digit tokens
/// and recognized spelled-out number words. Pure; empty input yields an
/// empty set.
pub fn extract_anchors(text: &str) -> AnchorSet {
    let mut anchors = BTreeSet::new();

    for token in NUMBER_TOKEN_RE.find_iter(text) {
        let digits = normalize_token(token.as_str());
        if !digits.is_empty() {
            anchors.insert(digits);
        }
    }

    for word in WORD_RE.find_iter(text) {
        let lowered = word.as_str().to_ascii_lowercase();
        if let Some(digits) = word_to_digits(&lowered) {
            anchors.insert(digits.to_string());
        }
    }

    AnchorSet(anchors)
}
