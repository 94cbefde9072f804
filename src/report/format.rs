//! Formatted terminal output for scored cases.
//!
//! We keep formatting code in one place so:
//! - the fusion/math code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{CaseRecord, NhpOutcome};
use crate::report::classify_nhp;

/// Format the full case summary (inputs, priors, posteriors, band).
pub fn format_case_summary(record: &CaseRecord) -> String {
    let posterior = &record.posterior;
    let prior = &posterior.prior_snapshot;

    let mut out = String::new();
    out.push_str("=== jor - Case Triage Summary ===\n");
    out.push_str(&format!("Case:    {}\n", record.case_id));
    out.push_str(&format!(
        "Scored:  {}\n",
        record.scored_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!(
        "Priors:  mode={} PRIOR_NH={:.4} K={:.4}\n",
        prior.mode.display_name(),
        prior.prior_nh,
        prior.k
    ));

    match &posterior.rubric_snapshot {
        Some(rubric) => {
            out.push_str("\nRubric weights:\n");
            out.push_str(&format!(
                "- witness_credibility: {:.4}{}\n",
                rubric.witness_credibility,
                if record.human_witness_present {
                    ""
                } else {
                    " (no human witness)"
                }
            ));
            out.push_str(&format!("- environment:         {:.4}\n", rubric.environment));
            out.push_str(&format!(
                "- physical_evidence:   {:.4}\n",
                rubric.physical_evidence
            ));
            out.push_str(&format!(
                "- flight_behavior:     {:.4}\n",
                rubric.flight_behavior
            ));
            out.push_str(&format!(
                "- sensor_evidence:     {:.4}{}\n",
                rubric.sensor_evidence,
                if record.human_witness_present {
                    ""
                } else {
                    " (sensor default)"
                }
            ));
        }
        None => {
            out.push_str("\nRubric: (bypassed - manual override)\n");
        }
    }

    out.push_str("\nPosterior:\n");
    out.push_str(&format!("- SOP: {:.4}\n", posterior.sop));
    match posterior.nhp {
        NhpOutcome::Estimate { nhp } => {
            out.push_str(&format!("- NHP: {:.4} (conditioned on SOP)\n", nhp));
            out.push_str(&format!(
                "- Band: {}\n",
                classify_nhp(nhp).display_name()
            ));
        }
        NhpOutcome::NotApplicable { floor } => {
            out.push_str(&format!(
                "- NHP: not applicable (SOP below evidentiary floor {floor:.2})\n"
            ));
        }
    }

    if posterior.override_used {
        out.push_str("\nNote: values supplied by manual override, not rubric-derived.\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::{CaseRecord, PosteriorResult, PriorConfig, RubricScore};

    fn record(nhp: NhpOutcome, rubric: Option<RubricScore>, override_used: bool) -> CaseRecord {
        CaseRecord {
            case_id: "CASE-7".to_string(),
            scored_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
            human_witness_present: rubric.is_some(),
            posterior: PosteriorResult {
                sop: 0.5889,
                nhp,
                rubric_snapshot: rubric,
                prior_snapshot: PriorConfig::standard(),
                override_used,
            },
        }
    }

    fn sample_rubric() -> RubricScore {
        RubricScore {
            witness_credibility: 0.8,
            environment: 0.7,
            physical_evidence: 0.6,
            flight_behavior: 0.5,
            sensor_evidence: 0.3,
        }
    }

    #[test]
    fn summary_includes_band_and_weights() {
        let rec = record(
            NhpOutcome::Estimate { nhp: 0.2985 },
            Some(sample_rubric()),
            false,
        );
        let out = format_case_summary(&rec);
        assert!(out.contains("Case:    CASE-7"));
        assert!(out.contains("witness_credibility: 0.8000"));
        assert!(out.contains("NHP: 0.2985"));
        assert!(out.contains("Band: Monitor"));
        assert!(!out.contains("manual override"));
    }

    #[test]
    fn summary_reports_not_applicable_below_floor() {
        let rec = record(
            NhpOutcome::NotApplicable { floor: 0.35 },
            Some(sample_rubric()),
            false,
        );
        let out = format_case_summary(&rec);
        assert!(out.contains("not applicable"));
        assert!(!out.contains("Band:"));
    }

    #[test]
    fn summary_marks_override_provenance() {
        let rec = record(NhpOutcome::Estimate { nhp: 0.40 }, None, true);
        let out = format_case_summary(&rec);
        assert!(out.contains("bypassed - manual override"));
        assert!(out.contains("manual override, not rubric-derived"));
    }
}
