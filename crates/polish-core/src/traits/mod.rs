//! Trait seams between pipeline layers.

mod generator;

pub use generator::RewriteGenerator;
