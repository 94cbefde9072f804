//! Command-line parsing for the JOR triage scorer.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the fusion/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{FlightClass, PriorMode};
use crate::rubric::{
    EnvironmentCap, EnvironmentModifier, PhysicalCap, PhysicalModifier, WitnessCap,
    WitnessModifier,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "jor", version, about = "JOR anomalous-observation triage scorer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a case from rubric ratings, print the summary, and optionally plot/export.
    Score(ScoreArgs),
    /// Inject SOP/NHP directly, bypassing the rubric and the fusion engine.
    Override(OverrideArgs),
    /// Plot a previously exported case-record JSON.
    Plot(PlotArgs),
}

/// Prior-configuration flags shared by `score` and `override`.
#[derive(Debug, Parser, Clone)]
pub struct PriorArgs {
    /// Prior mode. Standard pins PRIOR_NH/K to the calibrated 0.20/0.20.
    #[arg(long, value_enum, default_value_t = PriorMode::Standard)]
    pub mode: PriorMode,

    /// Exploratory PRIOR_NH (must not exceed the standard default 0.20).
    #[arg(long)]
    pub prior_nh: Option<f64>,

    /// Exploratory skepticism constant K (must not exceed the standard default 0.20).
    #[arg(long)]
    pub k: Option<f64>,
}

/// Output flags shared by `score` and `override`.
#[derive(Debug, Parser, Clone)]
pub struct OutputArgs {
    /// Append the case to a CSV log.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the full case record to JSON (replottable via `jor plot`).
    #[arg(long = "export-record", value_name = "JSON")]
    pub export_record: Option<PathBuf>,

    /// Render the prior-vs-posterior chart (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal chart.
    #[arg(long)]
    pub no_plot: bool,

    /// Chart height (rows).
    #[arg(long, default_value_t = 12)]
    pub height: usize,
}

/// Options for rubric-based scoring.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Case identifier.
    #[arg(long)]
    pub case: String,

    /// Witness-credibility base rating in [0,1]
    /// (0.30-0.50 weak, 0.55-0.65 moderate, 0.70-0.80 strong, 0.81-0.85 very strong).
    /// Omit for camera/system-only cases; sensor evidence then defaults to 0.30.
    #[arg(long)]
    pub witness: Option<f64>,

    /// Witness-credibility modifiers (repeatable).
    #[arg(long = "witness-mod", value_enum)]
    pub witness_mods: Vec<WitnessModifier>,

    /// Witness-credibility hard caps (repeatable).
    #[arg(long = "witness-cap", value_enum)]
    pub witness_caps: Vec<WitnessCap>,

    /// Environmental-conditions base rating in [0,1]
    /// (0.30-0.45 weak, 0.50-0.60 moderate, 0.65-0.85 strong).
    #[arg(long)]
    pub environment: f64,

    /// Environmental modifiers (repeatable).
    #[arg(long = "environment-mod", value_enum)]
    pub environment_mods: Vec<EnvironmentModifier>,

    /// Environmental hard caps (repeatable).
    #[arg(long = "environment-cap", value_enum)]
    pub environment_caps: Vec<EnvironmentCap>,

    /// Physical-evidence base rating in [0,1]
    /// (0.30-0.45 weak, 0.50-0.65 moderate, 0.70-0.85 strong, 0.86-0.95 very strong).
    #[arg(long)]
    pub physical: f64,

    /// Physical-evidence modifiers (repeatable).
    #[arg(long = "physical-mod", value_enum)]
    pub physical_mods: Vec<PhysicalModifier>,

    /// Physical-evidence hard caps (repeatable).
    #[arg(long = "physical-cap", value_enum)]
    pub physical_caps: Vec<PhysicalCap>,

    /// Instrument-corroboration rating in [0,1].
    /// Required when a witness rating is given; ignored (pinned to 0.30) otherwise.
    #[arg(long)]
    pub sensor: Option<f64>,

    /// Flight-behavior classification.
    #[arg(long, value_enum, default_value_t = FlightClass::Conventional)]
    pub flight: FlightClass,

    #[command(flatten)]
    pub prior: PriorArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options for direct SOP/NHP injection.
#[derive(Debug, Parser)]
pub struct OverrideArgs {
    /// Case identifier.
    #[arg(long)]
    pub case: String,

    /// Solid Object Probability in [0,1].
    #[arg(long)]
    pub sop: f64,

    /// Non-Human Probability in [0,1].
    #[arg(long)]
    pub nhp: f64,

    #[command(flatten)]
    pub prior: PriorArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options for plotting a saved case record.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Case-record JSON file produced by `--export-record`.
    #[arg(long, value_name = "JSON")]
    pub record: PathBuf,

    /// Chart height (rows).
    #[arg(long, default_value_t = 12)]
    pub height: usize,
}
