//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fusion
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::PriorConfig;
use crate::error::TriageError;
use crate::rubric::RubricInput;

/// The five evidentiary factors of the JOR rubric.
///
/// The first four bear on whether a genuine solid object was observed at all
/// (stage 1); `FlightBehavior` is evidence for the origin question (stage 2)
/// and does not move the solid-object posterior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    WitnessCredibility,
    Environment,
    PhysicalEvidence,
    SensorEvidence,
    FlightBehavior,
}

impl Factor {
    /// Canonical factor name (used in diagnostics and CSV headers).
    pub fn name(self) -> &'static str {
        match self {
            Factor::WitnessCredibility => "witness_credibility",
            Factor::Environment => "environment",
            Factor::PhysicalEvidence => "physical_evidence",
            Factor::SensorEvidence => "sensor_evidence",
            Factor::FlightBehavior => "flight_behavior",
        }
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordinal flight-behavior classification.
///
/// Normalized to a `[0, 1]` weight; the descriptors follow the JOR scoring
/// guidance for each class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FlightClass {
    /// Standard flight behavior; within expected aerodynamics.
    Conventional,
    /// Slightly unusual maneuvers or speed; could be explainable.
    Minor,
    /// Clearly abnormal movement, speed, or trajectory; limited explanation.
    Moderate,
    /// Highly unusual or impossible maneuvers; defies conventional physics.
    Major,
}

impl FlightClass {
    /// Normalized evidence weight for stage 2.
    pub fn weight(self) -> f64 {
        match self {
            FlightClass::Conventional => 0.0,
            FlightClass::Minor => 0.4,
            FlightClass::Moderate => 0.8,
            FlightClass::Major => 1.0,
        }
    }
}

/// A complete per-case rubric: every factor normalized to `[0, 1]`.
///
/// Built once per case by the scorer (or the sensor-default policy) and
/// immutable afterwards; the fusion engine treats it as read-only evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricScore {
    pub witness_credibility: f64,
    pub environment: f64,
    pub physical_evidence: f64,
    pub flight_behavior: f64,
    pub sensor_evidence: f64,
}

impl RubricScore {
    /// Weight for a single factor.
    pub fn weight(&self, factor: Factor) -> f64 {
        match factor {
            Factor::WitnessCredibility => self.witness_credibility,
            Factor::Environment => self.environment,
            Factor::PhysicalEvidence => self.physical_evidence,
            Factor::SensorEvidence => self.sensor_evidence,
            Factor::FlightBehavior => self.flight_behavior,
        }
    }

    /// The factors that bear on the solid-object question (stage 1).
    pub fn solid_object_weights(&self) -> [f64; 4] {
        [
            self.witness_credibility,
            self.environment,
            self.physical_evidence,
            self.sensor_evidence,
        ]
    }

    /// Boundary validation used by the fusion engine.
    ///
    /// A `RubricScore` is normally valid by construction; this guards the
    /// engine against hand-built scores with out-of-range or non-finite
    /// weights.
    pub fn validate(&self) -> Result<(), TriageError> {
        for factor in [
            Factor::WitnessCredibility,
            Factor::Environment,
            Factor::PhysicalEvidence,
            Factor::SensorEvidence,
            Factor::FlightBehavior,
        ] {
            let w = self.weight(factor);
            if !w.is_finite() || !(0.0..=1.0).contains(&w) {
                return Err(TriageError::Domain(format!(
                    "factor '{factor}' has weight {w}, outside [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of the conditional (stage 2) update.
///
/// NHP is only meaningful alongside the SOP it was conditioned on; below the
/// evidentiary floor it is explicitly not applicable rather than a
/// misleadingly low number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NhpOutcome {
    /// Posterior non-human probability.
    Estimate { nhp: f64 },
    /// Posterior SOP fell below the evidentiary floor; no origin estimate.
    NotApplicable { floor: f64 },
}

impl NhpOutcome {
    /// Numeric NHP, or `UndefinedConditional` when below the floor.
    pub fn value(&self, sop: f64) -> Result<f64, TriageError> {
        match self {
            NhpOutcome::Estimate { nhp } => Ok(*nhp),
            NhpOutcome::NotApplicable { floor } => {
                Err(TriageError::UndefinedConditional { sop, floor: *floor })
            }
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, NhpOutcome::Estimate { .. })
    }
}

/// Terminal output of the fusion engine (or the manual-override path).
///
/// Immutable once created. The two provenances (rubric-derived vs manual)
/// differ only in data, so they share this type and are distinguished by
/// `override_used` and the presence of `rubric_snapshot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosteriorResult {
    /// Posterior Solid Object Probability, strictly inside (0, 1).
    pub sop: f64,
    /// Posterior Non-Human Probability, conditioned on `sop`.
    pub nhp: NhpOutcome,
    /// Rubric evidence the result was derived from (`None` when overridden).
    pub rubric_snapshot: Option<RubricScore>,
    /// Prior configuration in force for the session.
    pub prior_snapshot: PriorConfig,
    /// True when the analyst injected SOP/NHP directly.
    pub override_used: bool,
}

/// The persisted unit: one scored case.
///
/// Created at the end of the pipeline and never mutated after write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub case_id: String,
    pub scored_at: DateTime<Utc>,
    /// Whether a human witness was scored (false for sensor/camera-only
    /// cases resolved by the sensor-default policy, and for overrides).
    pub human_witness_present: bool,
    pub posterior: PosteriorResult,
}

/// Evidence source for a case: the full rubric, or a direct injection.
#[derive(Debug, Clone)]
pub enum CaseInput {
    Rubric(RubricInput),
    Override { sop: f64, nhp: f64 },
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct CaseConfig {
    pub case_id: String,
    pub prior: PriorConfig,
    pub input: CaseInput,

    pub plot: bool,
    pub plot_height: usize,

    pub export_csv: Option<PathBuf>,
    pub export_record: Option<PathBuf>,
}
