//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the prior configuration and case inputs
//! - runs the fusion pipeline (or the override shortcut)
//! - prints the summary/chart
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, OutputArgs, OverrideArgs, PlotArgs, PriorArgs, ScoreArgs};
use crate::domain::{CaseConfig, CaseInput, PriorConfig, PriorMode};
use crate::error::TriageError;
use crate::rubric::{EnvironmentInput, PhysicalInput, RubricInput, WitnessInput};

pub mod pipeline;

/// Entry point for the `jor` binary.
pub fn run() -> Result<(), TriageError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Score(args) => handle_case(case_config_from_score(args)?),
        Command::Override(args) => handle_case(case_config_from_override(args)?),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_case(config: CaseConfig) -> Result<(), TriageError> {
    let record = pipeline::run_case(&config)?;

    println!("{}", crate::report::format_case_summary(&record));

    if config.plot {
        println!(
            "{}",
            crate::plot::render_probability_bars(&record, config.plot_height)
        );
    }

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::append_case_csv(path, &record)?;
    }
    if let Some(path) = &config.export_record {
        crate::io::write_record_json(path, &record)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), TriageError> {
    let record = crate::io::read_record_json(&args.record)?;
    println!("{}", crate::plot::render_probability_bars(&record, args.height));
    Ok(())
}

/// Resolve prior flags into a validated `PriorConfig`.
///
/// Standard mode takes no overrides: supplying `--prior-nh`/`--k` alongside
/// it is rejected rather than silently ignored. Exploratory mode fills
/// omitted values with the standard defaults (which sit exactly at the
/// ceiling).
pub fn prior_from_args(args: &PriorArgs) -> Result<PriorConfig, TriageError> {
    match args.mode {
        PriorMode::Standard => {
            if args.prior_nh.is_some() || args.k.is_some() {
                return Err(TriageError::InvalidPrior(
                    "standard mode pins PRIOR_NH and K; use --mode exploratory to lower them"
                        .to_string(),
                ));
            }
            Ok(PriorConfig::standard())
        }
        PriorMode::Exploratory => PriorConfig::exploratory(
            args.prior_nh.unwrap_or(crate::domain::PRIOR_NH_DEFAULT),
            args.k.unwrap_or(crate::domain::CALIBRATION_K_DEFAULT),
        ),
    }
}

fn case_config_from_score(args: ScoreArgs) -> Result<CaseConfig, TriageError> {
    let prior = prior_from_args(&args.prior)?;

    let input = RubricInput {
        witness: args.witness.map(|base| WitnessInput {
            base,
            modifiers: args.witness_mods.clone(),
            caps: args.witness_caps.clone(),
        }),
        environment: EnvironmentInput {
            base: args.environment,
            modifiers: args.environment_mods.clone(),
            caps: args.environment_caps.clone(),
        },
        physical: PhysicalInput {
            base: args.physical,
            modifiers: args.physical_mods.clone(),
            caps: args.physical_caps.clone(),
        },
        sensor: args.sensor,
        flight: args.flight,
    };

    Ok(build_case_config(
        args.case,
        prior,
        CaseInput::Rubric(input),
        &args.output,
    ))
}

fn case_config_from_override(args: OverrideArgs) -> Result<CaseConfig, TriageError> {
    let prior = prior_from_args(&args.prior)?;
    Ok(build_case_config(
        args.case,
        prior,
        CaseInput::Override {
            sop: args.sop,
            nhp: args.nhp,
        },
        &args.output,
    ))
}

fn build_case_config(
    case_id: String,
    prior: PriorConfig,
    input: CaseInput,
    output: &OutputArgs,
) -> CaseConfig {
    CaseConfig {
        case_id,
        prior,
        input,
        plot: output.plot && !output.no_plot,
        plot_height: output.height,
        export_csv: output.export.clone(),
        export_record: output.export_record.clone(),
    }
}
