//! Rubric scorer: raw ratings in, normalized `RubricScore` out.
//!
//! Each factor is scored independently:
//!
//! 1. validate the base rating (must be finite and in `[0, 1]`)
//! 2. add the selected modifiers, clamping the sum back into `[0, 1]`
//!    (modifier deltas are small policy nudges, so clamping here is the
//!    documented behavior rather than an error)
//! 3. apply the selected hard caps (minimum over cap values)
//!
//! The strict full interface (`score_rubric`) rejects missing witness or
//! sensor ratings; sensor/camera-only cases go through the sensor-default
//! policy instead.

use crate::domain::{Factor, FlightClass, RubricScore};
use crate::error::TriageError;
use crate::rubric::modifiers::{
    EnvironmentCap, EnvironmentModifier, MULTI_SENSOR_MAX, PhysicalCap, PhysicalModifier,
    WitnessCap, WitnessModifier,
};

/// Witness-credibility rating plus its selected adjustments.
#[derive(Debug, Clone, Default)]
pub struct WitnessInput {
    pub base: f64,
    pub modifiers: Vec<WitnessModifier>,
    pub caps: Vec<WitnessCap>,
}

/// Environmental-conditions rating plus its selected adjustments.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentInput {
    pub base: f64,
    pub modifiers: Vec<EnvironmentModifier>,
    pub caps: Vec<EnvironmentCap>,
}

/// Physical-evidence rating plus its selected adjustments.
#[derive(Debug, Clone, Default)]
pub struct PhysicalInput {
    pub base: f64,
    pub modifiers: Vec<PhysicalModifier>,
    pub caps: Vec<PhysicalCap>,
}

/// Raw per-case rubric inputs.
///
/// `witness` is optional: its absence marks a sensor/camera-only case for
/// the sensor-default policy. The strict scorer requires it.
#[derive(Debug, Clone)]
pub struct RubricInput {
    pub witness: Option<WitnessInput>,
    pub environment: EnvironmentInput,
    pub physical: PhysicalInput,
    /// Direct instrument-corroboration rating in `[0, 1]`.
    pub sensor: Option<f64>,
    pub flight: FlightClass,
}

fn validate_base(factor: Factor, base: f64) -> Result<f64, TriageError> {
    if !base.is_finite() || !(0.0..=1.0).contains(&base) {
        return Err(TriageError::InvalidScore {
            name: factor.name().to_string(),
            value: base,
        });
    }
    Ok(base)
}

fn apply_adjustments(base: f64, deltas: &[f64], caps: &[f64]) -> f64 {
    let mut score = base + deltas.iter().sum::<f64>();
    score = score.clamp(0.0, 1.0);
    for &cap in caps {
        score = score.min(cap);
    }
    score
}

/// Score witness credibility.
pub fn score_witness(input: &WitnessInput) -> Result<f64, TriageError> {
    let base = validate_base(Factor::WitnessCredibility, input.base)?;
    let deltas: Vec<f64> = input.modifiers.iter().map(|m| m.delta()).collect();
    let caps: Vec<f64> = input.caps.iter().map(|c| c.cap()).collect();
    Ok(apply_adjustments(base, &deltas, &caps))
}

/// Score environmental / observation conditions.
pub fn score_environment(input: &EnvironmentInput) -> Result<f64, TriageError> {
    let base = validate_base(Factor::Environment, input.base)?;
    let deltas: Vec<f64> = input.modifiers.iter().map(|m| m.delta()).collect();
    let caps: Vec<f64> = input.caps.iter().map(|c| c.cap()).collect();
    Ok(apply_adjustments(base, &deltas, &caps))
}

/// Score physical / sensor evidence.
///
/// The multi-sensor maximum (0.95) applies unconditionally on top of any
/// selected caps.
pub fn score_physical(input: &PhysicalInput) -> Result<f64, TriageError> {
    let base = validate_base(Factor::PhysicalEvidence, input.base)?;
    let deltas: Vec<f64> = input.modifiers.iter().map(|m| m.delta()).collect();
    let mut caps: Vec<f64> = input.caps.iter().map(|c| c.cap()).collect();
    caps.push(MULTI_SENSOR_MAX);
    Ok(apply_adjustments(base, &deltas, &caps))
}

/// Score instrument corroboration (bounds check only; no modifier table).
pub fn score_sensor(base: f64) -> Result<f64, TriageError> {
    validate_base(Factor::SensorEvidence, base)
}

/// Strict full-rubric scoring: every factor must be supplied.
///
/// Missing witness or sensor ratings fail with `MissingFactor`; use
/// [`crate::rubric::sensor_default::resolve`] for sensor/camera-only cases.
pub fn score_rubric(input: &RubricInput) -> Result<RubricScore, TriageError> {
    let witness = input
        .witness
        .as_ref()
        .ok_or(TriageError::MissingFactor(Factor::WitnessCredibility))?;
    let sensor = input
        .sensor
        .ok_or(TriageError::MissingFactor(Factor::SensorEvidence))?;

    Ok(RubricScore {
        witness_credibility: score_witness(witness)?,
        environment: score_environment(&input.environment)?,
        physical_evidence: score_physical(&input.physical)?,
        flight_behavior: input.flight.weight(),
        sensor_evidence: score_sensor(sensor)?,
    })
}
