/// Polish system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directive sent with guardrailed generation requests.
pub const GUARDRAIL_DIRECTIVE: &str = "Important: Use only the information from the original text. Do not invent numbers, metrics, names, or facts. If details are missing, acknowledge the gap instead of guessing.";

/// Notice callers must surface when sanitized rewrites are returned.
pub const SANITIZED_NOTICE: &str = "Adjusted the rewrite to remove invented numbers. Please double-check the details before using.";

/// Sampling temperature when the guardrail is off. Higher trades
/// faithfulness for creativity.
pub const EXPLORATORY_TEMPERATURE: f64 = 0.9;

/// Sampling temperature when the guardrail is on.
pub const GUARDRAIL_TEMPERATURE: f64 = 0.4;

/// Maximum escalation attempts (guardrail off, then guardrail on).
/// Strictness is raised between attempts; there is no blind resampling.
pub const MAX_ESCALATION_ATTEMPTS: usize = 2;
