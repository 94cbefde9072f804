//! Bayesian fusion core.
//!
//! Responsibilities:
//!
//! - stage 1: posterior Solid Object Probability from rubric evidence
//! - stage 2: posterior Non-Human Probability, conditioned on stage 1
//! - the manual-override path that bypasses both stages

pub mod engine;
pub mod manual;

pub use engine::*;
pub use manual::*;
