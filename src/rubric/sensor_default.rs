//! Sensor-default policy for camera/system-only cases.
//!
//! When no human witness is available to score, the recording instrument is
//! treated as a minimal weak witness: `sensor_evidence` is pinned at exactly
//! [`SENSOR_DEFAULT_WEIGHT`] and `witness_credibility` takes its neutral
//! default of 0.0. The pinned sensor weight is not overridable — a supplied
//! `--sensor` rating is ignored for witness-less cases so the convention
//! cannot drift case by case.
//!
//! When a witness rating is present, the full rubric applies and
//! `sensor_evidence` is recomputed from its own rating (it may then exceed
//! the default).

use crate::domain::RubricScore;
use crate::error::TriageError;
use crate::rubric::scorer::{
    RubricInput, score_environment, score_physical, score_rubric, score_sensor,
};

/// Fixed sensor-evidence weight for witness-less cases: the camera/system
/// as a minimal weak witness, per JOR convention.
pub const SENSOR_DEFAULT_WEIGHT: f64 = 0.30;

/// Neutral default for an absent witness-credibility rating.
pub const WITNESS_NEUTRAL_WEIGHT: f64 = 0.0;

/// Outcome of policy resolution: the normalized rubric plus the provenance
/// flag that ends up on the `CaseRecord`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyOutcome {
    pub rubric: RubricScore,
    pub human_witness_present: bool,
}

/// Resolve raw inputs into a `RubricScore`, applying the sensor default
/// when no witness rating was supplied.
pub fn resolve(input: &RubricInput) -> Result<PolicyOutcome, TriageError> {
    if input.witness.is_some() {
        // Full rubric: sensor rating required, scored as supplied.
        let rubric = score_rubric(input)?;
        return Ok(PolicyOutcome {
            rubric,
            human_witness_present: true,
        });
    }

    // Validate a supplied sensor rating even though the pinned default wins,
    // so a malformed value is still rejected rather than shadowed.
    if let Some(sensor) = input.sensor {
        score_sensor(sensor)?;
    }

    let rubric = RubricScore {
        witness_credibility: WITNESS_NEUTRAL_WEIGHT,
        environment: score_environment(&input.environment)?,
        physical_evidence: score_physical(&input.physical)?,
        flight_behavior: input.flight.weight(),
        sensor_evidence: SENSOR_DEFAULT_WEIGHT,
    };
    Ok(PolicyOutcome {
        rubric,
        human_witness_present: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FlightClass;
    use crate::rubric::scorer::{EnvironmentInput, PhysicalInput, WitnessInput};

    fn sensor_only_input() -> RubricInput {
        RubricInput {
            witness: None,
            environment: EnvironmentInput {
                base: 0.55,
                modifiers: vec![],
                caps: vec![],
            },
            physical: PhysicalInput {
                base: 0.65,
                modifiers: vec![],
                caps: vec![],
            },
            sensor: None,
            flight: FlightClass::Minor,
        }
    }

    #[test]
    fn witnessless_case_pins_sensor_weight() {
        let outcome = resolve(&sensor_only_input()).unwrap();
        assert_eq!(outcome.rubric.sensor_evidence, SENSOR_DEFAULT_WEIGHT);
        assert_eq!(outcome.rubric.witness_credibility, WITNESS_NEUTRAL_WEIGHT);
        assert!(!outcome.human_witness_present);
    }

    #[test]
    fn supplied_sensor_rating_does_not_override_the_default() {
        let mut input = sensor_only_input();
        input.sensor = Some(0.90);
        let outcome = resolve(&input).unwrap();
        assert_eq!(outcome.rubric.sensor_evidence, SENSOR_DEFAULT_WEIGHT);
    }

    #[test]
    fn malformed_sensor_rating_still_rejected() {
        let mut input = sensor_only_input();
        input.sensor = Some(1.5);
        assert!(resolve(&input).is_err());
    }

    #[test]
    fn witnessed_case_recomputes_sensor_from_rubric() {
        let mut input = sensor_only_input();
        input.witness = Some(WitnessInput {
            base: 0.70,
            modifiers: vec![],
            caps: vec![],
        });
        input.sensor = Some(0.85);
        let outcome = resolve(&input).unwrap();
        assert!(outcome.human_witness_present);
        assert_eq!(outcome.rubric.witness_credibility, 0.70);
        // Recomputed from the rubric and allowed to exceed the default.
        assert_eq!(outcome.rubric.sensor_evidence, 0.85);
        assert!(outcome.rubric.sensor_evidence > SENSOR_DEFAULT_WEIGHT);
    }
}
