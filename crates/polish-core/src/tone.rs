use serde::{Deserialize, Serialize};
use std::fmt;

/// The stylistic/structural template selected for bullet-point rewriting.
///
/// Every tone reaching the pipeline is a member of this canonical set;
/// legacy aliases and unknown labels are normalized at the boundary via
/// [`Tone::from_label`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Baseline tone: headline plus supporting bullets.
    #[default]
    Executive,
    Investor,
    Product,
    /// Canonical replacement for the legacy "sales" label.
    Growth,
    Technical,
    Clarity,
}

impl Tone {
    /// Normalize a user-supplied label to a canonical tone.
    ///
    /// Legacy aliases map to their canonical member ("sales" → `Growth`);
    /// anything unrecognized defaults to `Executive`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "executive" => Tone::Executive,
            "investor" => Tone::Investor,
            "product" => Tone::Product,
            "growth" | "sales" => Tone::Growth,
            "technical" => Tone::Technical,
            "clarity" => Tone::Clarity,
            _ => Tone::Executive,
        }
    }

    /// Canonical lowercase label, as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Executive => "executive",
            Tone::Investor => "investor",
            Tone::Product => "product",
            Tone::Growth => "growth",
            Tone::Technical => "technical",
            Tone::Clarity => "clarity",
        }
    }

    /// All canonical tones, in presentation order.
    pub fn all() -> [Tone; 6] {
        [
            Tone::Executive,
            Tone::Investor,
            Tone::Product,
            Tone::Growth,
            Tone::Technical,
            Tone::Clarity,
        ]
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
