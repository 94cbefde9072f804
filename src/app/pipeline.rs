//! Shared "case pipeline" logic used by every front-end command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! rubric scoring -> sensor-default policy -> fusion -> case record
//! (or the manual-override shortcut straight to the record).
//!
//! The CLI can then focus on presentation (printing, plotting, exports).

use chrono::Utc;

use crate::domain::{CaseConfig, CaseInput, CaseRecord};
use crate::error::TriageError;
use crate::fusion;
use crate::rubric::sensor_default;

/// Execute the full triage pipeline for one case.
///
/// Pure apart from the `scored_at` timestamp; all validation errors surface
/// here before any output is produced, so no partial record is ever emitted.
pub fn run_case(config: &CaseConfig) -> Result<CaseRecord, TriageError> {
    let (posterior, human_witness_present) = match &config.input {
        CaseInput::Rubric(input) => {
            let outcome = sensor_default::resolve(input)?;
            let posterior = fusion::fuse(&outcome.rubric, &config.prior)?;
            (posterior, outcome.human_witness_present)
        }
        CaseInput::Override { sop, nhp } => {
            let posterior = fusion::manual_override(*sop, *nhp, &config.prior)?;
            (posterior, false)
        }
    };

    Ok(CaseRecord {
        case_id: config.case_id.clone(),
        scored_at: Utc::now(),
        human_witness_present,
        posterior,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FlightClass, NhpOutcome, PriorConfig};
    use crate::fusion::engine::SOP_FLOOR;
    use crate::rubric::{EnvironmentInput, PhysicalInput, RubricInput, WitnessInput};

    fn config(input: CaseInput) -> CaseConfig {
        CaseConfig {
            case_id: "CASE-E2E".to_string(),
            prior: PriorConfig::standard(),
            input,
            plot: false,
            plot_height: 0,
            export_csv: None,
            export_record: None,
        }
    }

    #[test]
    fn rubric_case_end_to_end() {
        let input = RubricInput {
            witness: Some(WitnessInput {
                base: 0.8,
                modifiers: vec![],
                caps: vec![],
            }),
            environment: EnvironmentInput {
                base: 0.7,
                modifiers: vec![],
                caps: vec![],
            },
            physical: PhysicalInput {
                base: 0.6,
                modifiers: vec![],
                caps: vec![],
            },
            sensor: Some(0.3),
            flight: FlightClass::Minor,
        };
        let record = run_case(&config(CaseInput::Rubric(input))).unwrap();

        assert!(record.human_witness_present);
        assert!(record.posterior.sop >= SOP_FLOOR);
        assert!(record.posterior.nhp.is_applicable());
        assert!(!record.posterior.override_used);
        assert!(record.posterior.rubric_snapshot.is_some());
    }

    #[test]
    fn sensor_only_case_carries_the_flag() {
        let input = RubricInput {
            witness: None,
            environment: EnvironmentInput {
                base: 0.3,
                modifiers: vec![],
                caps: vec![],
            },
            physical: PhysicalInput {
                base: 0.3,
                modifiers: vec![],
                caps: vec![],
            },
            sensor: None,
            flight: FlightClass::Major,
        };
        let record = run_case(&config(CaseInput::Rubric(input))).unwrap();

        assert!(!record.human_witness_present);
        let rubric = record.posterior.rubric_snapshot.as_ref().unwrap();
        assert_eq!(rubric.sensor_evidence, 0.30);
        // Weakly corroborated sensor-only case: below the floor.
        assert_eq!(
            record.posterior.nhp,
            NhpOutcome::NotApplicable { floor: SOP_FLOOR }
        );
    }

    #[test]
    fn override_case_end_to_end() {
        let record = run_case(&config(CaseInput::Override {
            sop: 0.70,
            nhp: 0.40,
        }))
        .unwrap();

        assert!(record.posterior.override_used);
        assert_eq!(record.posterior.sop, 0.70);
        assert_eq!(record.posterior.nhp, NhpOutcome::Estimate { nhp: 0.40 });
        assert!(!record.human_witness_present);
    }

    #[test]
    fn invalid_input_emits_no_record() {
        let result = run_case(&config(CaseInput::Override {
            sop: 1.70,
            nhp: 0.40,
        }));
        assert!(result.is_err());
    }
}
