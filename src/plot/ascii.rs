//! ASCII bar chart for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Chart bars:
//! - `prior NH`: the session baseline prior
//! - `post NHP`: the conditional posterior (an `n/a` column below the floor)
//! - `post SOP`: the stage-1 posterior the NHP was conditioned on

use crate::domain::{CaseRecord, NhpOutcome};

const BAR_WIDTH: usize = 8;
const BAR_GAP: usize = 3;

/// Render the prior-vs-posterior chart for a scored case.
pub fn render_probability_bars(record: &CaseRecord, height: usize) -> String {
    let height = height.max(5);
    let posterior = &record.posterior;

    let bars: [(&str, Option<f64>); 3] = [
        ("prior NH", Some(posterior.prior_snapshot.prior_nh)),
        (
            "post NHP",
            match posterior.nhp {
                NhpOutcome::Estimate { nhp } => Some(nhp),
                NhpOutcome::NotApplicable { .. } => None,
            },
        ),
        ("post SOP", Some(posterior.sop)),
    ];

    let mut out = String::new();
    out.push_str(&format!(
        "Prior vs posterior: {} | y=[0.00, 1.00]\n",
        record.case_id
    ));

    // Value labels above the bars.
    out.push_str("      ");
    for (_, value) in &bars {
        let label = match value {
            Some(v) => format!("{v:.2}"),
            None => "n/a".to_string(),
        };
        out.push_str(&format!("{label:^BAR_WIDTH$}"));
        out.push_str(&" ".repeat(BAR_GAP));
    }
    push_trimmed_line(&mut out);

    // Grid rows, top to bottom.
    for row in 0..height {
        let level = height - row; // filled when bar reaches this level
        let tick = level as f64 / height as f64;
        out.push_str(&format!("{tick:>4.2} |"));
        for (_, value) in &bars {
            let filled = value
                .map(|v| ((v * height as f64).round() as usize).min(height))
                .unwrap_or(0);
            let cell = if filled >= level { '#' } else { ' ' };
            out.push(' ');
            out.push_str(&cell.to_string().repeat(BAR_WIDTH - 2));
            out.push(' ');
            out.push_str(&" ".repeat(BAR_GAP));
        }
        push_trimmed_line(&mut out);
    }

    // Baseline and bar labels.
    out.push_str("     +");
    out.push_str(&"-".repeat((BAR_WIDTH + BAR_GAP) * bars.len()));
    out.push('\n');
    out.push_str("      ");
    for (label, _) in &bars {
        out.push_str(&format!("{label:^BAR_WIDTH$}"));
        out.push_str(&" ".repeat(BAR_GAP));
    }
    push_trimmed_line(&mut out);

    out
}

fn push_trimmed_line(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::{PosteriorResult, PriorConfig, RubricScore};

    fn record(nhp: NhpOutcome) -> CaseRecord {
        CaseRecord {
            case_id: "CASE-9".to_string(),
            scored_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
            human_witness_present: true,
            posterior: PosteriorResult {
                sop: 0.59,
                nhp,
                rubric_snapshot: Some(RubricScore {
                    witness_credibility: 0.8,
                    environment: 0.7,
                    physical_evidence: 0.6,
                    flight_behavior: 0.5,
                    sensor_evidence: 0.3,
                }),
                prior_snapshot: PriorConfig::standard(),
                override_used: false,
            },
        }
    }

    #[test]
    fn chart_is_deterministic_and_labeled() {
        let rec = record(NhpOutcome::Estimate { nhp: 0.30 });
        let a = render_probability_bars(&rec, 10);
        let b = render_probability_bars(&rec, 10);
        assert_eq!(a, b);
        assert!(a.contains("CASE-9"));
        assert!(a.contains("prior NH"));
        assert!(a.contains("post NHP"));
        assert!(a.contains("post SOP"));
        assert!(a.contains("0.20"));
        assert!(a.contains("0.30"));
        assert!(a.contains('#'));
    }

    #[test]
    fn taller_posterior_fills_more_rows() {
        let rec = record(NhpOutcome::Estimate { nhp: 0.30 });
        let chart = render_probability_bars(&rec, 10);
        // SOP 0.59 rounds to 6 filled rows; prior 0.20 to 2.
        let sop_rows = chart
            .lines()
            .filter(|l| l.trim_end().ends_with("######"))
            .count();
        assert!(sop_rows >= 6, "chart:\n{chart}");
    }

    #[test]
    fn not_applicable_nhp_renders_empty_column() {
        let rec = record(NhpOutcome::NotApplicable { floor: 0.35 });
        let chart = render_probability_bars(&rec, 10);
        assert!(chart.contains("n/a"));
    }
}
