//! JOR modifier and hard-cap tables.
//!
//! Each rubric factor has a list of optional additive modifiers and a list
//! of hard-cap rules. Modifiers nudge a base rating up or down; hard caps
//! bound the final score when a disqualifying condition applies (e.g. a
//! single untrained civilian can never score above 0.50 on witness
//! credibility, no matter how many positive modifiers apply).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Witness-credibility modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WitnessModifier {
    /// Independent written reports filed by witnesses.
    IndependentReports,
    /// Witnesses observed from more than two independent positions.
    MultiplePositions,
    /// Material inconsistencies between witness accounts.
    Inconsistencies,
    /// Witness has a known misidentification history or is otherwise unreliable.
    KnownMisidentification,
}

impl WitnessModifier {
    pub fn delta(self) -> f64 {
        match self {
            WitnessModifier::IndependentReports => 0.03,
            WitnessModifier::MultiplePositions => 0.02,
            WitnessModifier::Inconsistencies => -0.03,
            WitnessModifier::KnownMisidentification => -0.05,
        }
    }
}

/// Witness-credibility hard caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WitnessCap {
    /// Single untrained civilian observer.
    SingleUntrainedCivilian,
    /// No trained observer among the witnesses.
    NoTrainedObserver,
    /// Anonymous witness.
    AnonymousWitness,
}

impl WitnessCap {
    pub fn cap(self) -> f64 {
        match self {
            WitnessCap::SingleUntrainedCivilian => 0.50,
            WitnessCap::NoTrainedObserver => 0.70,
            WitnessCap::AnonymousWitness => 0.45,
        }
    }
}

/// Environmental / observation-condition modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EnvironmentModifier {
    /// Observed from multiple vantage points.
    MultipleVantagePoints,
    /// Weather conditions officially documented.
    WeatherDocumented,
    /// Object estimated farther than 1 km away.
    DistantObject,
    /// Total observation shorter than 5 seconds.
    BriefObservation,
}

impl EnvironmentModifier {
    pub fn delta(self) -> f64 {
        match self {
            EnvironmentModifier::MultipleVantagePoints => 0.03,
            EnvironmentModifier::WeatherDocumented => 0.02,
            EnvironmentModifier::DistantObject => -0.03,
            EnvironmentModifier::BriefObservation => -0.05,
        }
    }
}

/// Environmental hard caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EnvironmentCap {
    /// Heavy fog at observation time.
    HeavyFog,
    /// Nighttime observation from a single perspective.
    NightSinglePerspective,
}

impl EnvironmentCap {
    pub fn cap(self) -> f64 {
        match self {
            EnvironmentCap::HeavyFog => 0.40,
            EnvironmentCap::NightSinglePerspective => 0.70,
        }
    }
}

/// Physical / sensor-evidence modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PhysicalModifier {
    /// EMP, interference, or equipment shutdown coincident with the event.
    SensorInterference,
    /// Multi-frame imagery or long-duration video.
    MultiFrameImagery,
    /// Independent laboratory analysis of trace material.
    IndependentLabAnalysis,
    /// Ambiguous or poor video quality.
    PoorVideoQuality,
    /// Inconsistent readings across sensors.
    InconsistentReadings,
    /// Time-stamped instrument logs.
    TimeStampedLogs,
}

impl PhysicalModifier {
    pub fn delta(self) -> f64 {
        match self {
            PhysicalModifier::SensorInterference => 0.05,
            PhysicalModifier::MultiFrameImagery => 0.03,
            PhysicalModifier::IndependentLabAnalysis => 0.02,
            PhysicalModifier::PoorVideoQuality => -0.05,
            PhysicalModifier::InconsistentReadings => -0.07,
            PhysicalModifier::TimeStampedLogs => 0.02,
        }
    }
}

/// Physical-evidence hard caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PhysicalCap {
    /// No sensor data at all; anecdotal evidence only.
    NoSensorData,
    /// Video is the only instrument record.
    VideoOnly,
}

impl PhysicalCap {
    pub fn cap(self) -> f64 {
        match self {
            PhysicalCap::NoSensorData => 0.55,
            PhysicalCap::VideoOnly => 0.75,
        }
    }
}

/// Ceiling for physical evidence, always enforced (multi-sensor maximum).
pub const MULTI_SENSOR_MAX: f64 = 0.95;
