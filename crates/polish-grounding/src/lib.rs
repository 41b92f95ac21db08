//! # polish-grounding
//!
//! Grounding checks for generated rewrites: anchor extraction, validation
//! of candidates against a source text's anchor set, and mechanical
//! sanitization of ungrounded numeric tokens as a fallback to rejection.
//!
//! Everything here is a pure function of its inputs, with no shared state
//! and no side effects, so validation and sanitization are safe to run
//! concurrently and trivially deterministic.

pub mod anchors;
pub mod sanitizer;
pub mod validator;

pub use anchors::{extract_anchors, AnchorSet};
pub use sanitizer::sanitize;
pub use validator::validate;
