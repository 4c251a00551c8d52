//! The Dimension Catalog: which physical dimensions exist, which decimal
//! rungs each one offers, and how dimensions combine.
pub mod catalog;
pub mod rules;

pub use catalog::{lookup, rung_at, rung_for_prefix, rungs, rungs_for_tag, Dimension, Ladder, Prefix, ScaleRung};
pub use rules::{infer, Operation};
