//! Read/write case-record JSON files.
//!
//! The record JSON is the "portable" representation of a scored case:
//! posterior pair, rubric and prior snapshots, and provenance flags. It is
//! what `jor plot` consumes to re-render a chart later.
//!
//! The schema is defined by `domain::CaseRecord`.

use std::fs::File;
use std::path::Path;

use crate::domain::CaseRecord;
use crate::error::TriageError;

/// Write a case-record JSON file.
pub fn write_record_json(path: &Path, record: &CaseRecord) -> Result<(), TriageError> {
    let file = File::create(path).map_err(|e| {
        TriageError::Record(format!(
            "failed to create record JSON '{}': {e}",
            path.display()
        ))
    })?;

    serde_json::to_writer_pretty(file, record)
        .map_err(|e| TriageError::Record(format!("failed to write record JSON: {e}")))?;

    Ok(())
}

/// Read a case-record JSON file.
pub fn read_record_json(path: &Path) -> Result<CaseRecord, TriageError> {
    let file = File::open(path).map_err(|e| {
        TriageError::Record(format!(
            "failed to open record JSON '{}': {e}",
            path.display()
        ))
    })?;
    let record: CaseRecord = serde_json::from_reader(file)
        .map_err(|e| TriageError::Record(format!("invalid record JSON: {e}")))?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::{NhpOutcome, PosteriorResult, PriorConfig, RubricScore};

    #[test]
    fn record_round_trips_through_json() {
        let record = CaseRecord {
            case_id: "CASE-RT".to_string(),
            scored_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
            human_witness_present: false,
            posterior: PosteriorResult {
                sop: 0.2556,
                nhp: NhpOutcome::NotApplicable { floor: 0.35 },
                rubric_snapshot: Some(RubricScore {
                    witness_credibility: 0.0,
                    environment: 0.3,
                    physical_evidence: 0.3,
                    flight_behavior: 0.8,
                    sensor_evidence: 0.3,
                }),
                prior_snapshot: PriorConfig::standard(),
                override_used: false,
            },
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("case.json");
        write_record_json(&path, &record).unwrap();
        let loaded = read_record_json(&path).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn missing_file_is_a_record_error() {
        let err = read_record_json(Path::new("/nonexistent/case.json")).unwrap_err();
        assert!(matches!(err, TriageError::Record(_)));
    }
}
