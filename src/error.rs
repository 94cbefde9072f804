//! Crate-wide error type.
//!
//! Every component raises its validation errors at its own boundary; nothing
//! is silently corrected except the documented sensor-default policy. The
//! variants map one-to-one onto the failure classes of the triage pipeline:
//!
//! - `InvalidScore`: a rubric (or override) input outside `[0, 1]`
//! - `InvalidPrior`: prior configuration out of bounds, or exploratory mode
//!   exceeding the standard-mode ceiling
//! - `MissingFactor` / `Domain`: the fusion engine was handed incomplete or
//!   malformed evidentiary input
//! - `UndefinedConditional`: a numeric NHP was requested for a case whose
//!   posterior SOP sits below the evidentiary floor

use thiserror::Error;

use crate::domain::Factor;

#[derive(Debug, Clone, Error)]
pub enum TriageError {
    #[error("Invalid score for {name}: {value} (expected a value in [0, 1]).")]
    InvalidScore { name: String, value: f64 },

    #[error("Invalid prior configuration: {0}")]
    InvalidPrior(String),

    #[error("Incomplete evidentiary input: no rating supplied for '{0}'.")]
    MissingFactor(Factor),

    #[error("Evidentiary input rejected: {0}")]
    Domain(String),

    #[error(
        "NHP is not applicable: posterior SOP {sop:.4} is below the evidentiary floor {floor:.2}."
    )]
    UndefinedConditional { sop: f64, floor: f64 },

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Case record error: {0}")]
    Record(String),
}

impl TriageError {
    /// Process exit code for the `jor` binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            TriageError::InvalidScore { .. }
            | TriageError::InvalidPrior(_)
            | TriageError::MissingFactor(_)
            | TriageError::Domain(_) => 2,
            TriageError::Export(_) | TriageError::Record(_) => 3,
            TriageError::UndefinedConditional { .. } => 4,
        }
    }
}
