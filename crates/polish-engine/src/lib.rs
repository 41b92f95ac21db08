//! # polish-engine
//!
//! The escalation controller: drives generation attempts through
//! validation, raising instruction strictness between attempts and
//! falling back to sanitized candidates before giving up.

pub mod attempt;
pub mod escalation;

pub use escalation::EscalationEngine;
