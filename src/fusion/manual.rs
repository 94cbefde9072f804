//! Manual override: direct SOP/NHP injection.
//!
//! Used when an analyst prefers direct expert judgment over rubric
//! decomposition. The result skips both fusion stages entirely but still
//! lands on the shared `PosteriorResult` type, flagged so downstream
//! consumers can tell the two evidentiary provenances apart.

use crate::domain::{NhpOutcome, PosteriorResult, PriorConfig};
use crate::error::TriageError;

fn validate_prob(name: &str, value: f64) -> Result<f64, TriageError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(TriageError::InvalidScore {
            name: name.to_string(),
            value,
        });
    }
    Ok(value)
}

/// Build a `PosteriorResult` from operator-supplied SOP/NHP values.
///
/// Values are taken exactly as given (no clamping, no floor check — the
/// analyst owns the judgment); only the `[0, 1]` bounds are enforced.
pub fn manual_override(
    sop: f64,
    nhp: f64,
    prior: &PriorConfig,
) -> Result<PosteriorResult, TriageError> {
    prior.validate()?;
    let sop = validate_prob("sop", sop)?;
    let nhp = validate_prob("nhp", nhp)?;

    Ok(PosteriorResult {
        sop,
        nhp: NhpOutcome::Estimate { nhp },
        rubric_snapshot: None,
        prior_snapshot: *prior,
        override_used: true,
    })
}
