use serde::{Deserialize, Serialize};

use crate::constants::{EXPLORATORY_TEMPERATURE, GUARDRAIL_DIRECTIVE, GUARDRAIL_TEMPERATURE};

/// Per-request generation knobs.
///
/// The guardrail flag drives both the instruction strictness and the
/// sampling temperature; raising strictness, not resampling blindly, is
/// the escalation strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Force a fresh generation instead of any memoized response.
    pub force_new: bool,
    /// Whether the strict anti-fabrication regime is active.
    pub guardrail: bool,
    /// Extra instruction text appended to the prompt.
    pub instructions: Option<String>,
}

impl GenerationOptions {
    /// First-attempt options: no guardrail, exploratory temperature.
    pub fn exploratory() -> Self {
        Self {
            force_new: true,
            guardrail: false,
            instructions: None,
        }
    }

    /// Escalated options: guardrail on with the strict directive.
    pub fn guardrailed() -> Self {
        Self {
            force_new: true,
            guardrail: true,
            instructions: Some(GUARDRAIL_DIRECTIVE.to_string()),
        }
    }

    /// Sampling temperature for this request: lower when the guardrail is
    /// active, trading creativity for faithfulness.
    pub fn temperature(&self) -> f64 {
        if self.guardrail {
            GUARDRAIL_TEMPERATURE
        } else {
            EXPLORATORY_TEMPERATURE
        }
    }

    /// Guardrailed requests always force fresh generation.
    pub fn effective_force_new(&self) -> bool {
        self.guardrail || self.force_new
    }

    /// The instruction text to send, defaulting to the strict directive
    /// whenever the guardrail is on.
    pub fn effective_instructions(&self) -> Option<&str> {
        match (&self.instructions, self.guardrail) {
            (Some(text), _) => Some(text.as_str()),
            (None, true) => Some(GUARDRAIL_DIRECTIVE),
            (None, false) => None,
        }
    }
}
