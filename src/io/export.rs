//! Append scored cases to a CSV log.
//!
//! One row per case; the header is written only when the file is created,
//! so a session can keep appending to the same log. The export is meant to
//! be easy to consume in spreadsheets or downstream scripts:
//!
//! - numeric fields at fixed 4-decimal precision
//! - rubric columns left empty for overridden cases
//! - the NHP column holds the literal `na` when below the evidentiary floor

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::domain::{CaseRecord, NhpOutcome};
use crate::error::TriageError;

const CSV_HEADER: &str = "case_id,scored_at,mode,prior_nh,k,witness_credibility,environment,\
physical_evidence,flight_behavior,sensor_evidence,sop,nhp,override_used,human_witness_present";

/// Append a case row to the CSV log, creating the file (with header) if needed.
pub fn append_case_csv(path: &Path, record: &CaseRecord) -> Result<(), TriageError> {
    let needs_header = !path.exists();

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            TriageError::Export(format!("failed to open case log '{}': {e}", path.display()))
        })?;

    if needs_header {
        writeln!(file, "{CSV_HEADER}")
            .map_err(|e| TriageError::Export(format!("failed to write case log header: {e}")))?;
    }

    writeln!(file, "{}", format_case_row(record))
        .map_err(|e| TriageError::Export(format!("failed to write case log row: {e}")))?;

    Ok(())
}

/// Render a single CSV row for a case.
pub fn format_case_row(record: &CaseRecord) -> String {
    let posterior = &record.posterior;
    let prior = &posterior.prior_snapshot;

    let rubric_cols = match &posterior.rubric_snapshot {
        Some(r) => format!(
            "{:.4},{:.4},{:.4},{:.4},{:.4}",
            r.witness_credibility,
            r.environment,
            r.physical_evidence,
            r.flight_behavior,
            r.sensor_evidence
        ),
        None => ",,,,".to_string(),
    };

    let nhp_col = match posterior.nhp {
        NhpOutcome::Estimate { nhp } => format!("{nhp:.4}"),
        NhpOutcome::NotApplicable { .. } => "na".to_string(),
    };

    format!(
        "{},{},{},{:.4},{:.4},{},{:.4},{},{},{}",
        escape_field(&record.case_id),
        record.scored_at.format("%Y-%m-%dT%H:%M:%SZ"),
        prior.mode.display_name(),
        prior.prior_nh,
        prior.k,
        rubric_cols,
        posterior.sop,
        nhp_col,
        posterior.override_used,
        record.human_witness_present
    )
}

/// Quote a field if it contains CSV-significant characters.
fn escape_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
