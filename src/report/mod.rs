//! Reporting utilities: triage bands and formatted terminal output.

pub mod format;

pub use format::*;

use serde::{Deserialize, Serialize};

/// Lower edge of the Monitor band (coincides with the standard prior).
pub const MONITOR_MIN: f64 = 0.20;

/// Upper edge of the Monitor band; above it a case is escalated.
pub const MONITOR_MAX: f64 = 0.46;

/// Advisory triage band over the posterior NHP.
///
/// A band is a routing label, not a verdict: it says who should look at the
/// case next, never what the object was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriageBand {
    /// Posterior at or below the baseline prior; routine filing.
    Background,
    /// Posterior above baseline but below the escalation line.
    Monitor,
    /// Posterior above the escalation line; analyst review.
    Escalate,
}

impl TriageBand {
    pub fn display_name(self) -> &'static str {
        match self {
            TriageBand::Background => "Background",
            TriageBand::Monitor => "Monitor",
            TriageBand::Escalate => "Escalate",
        }
    }
}

/// Classify a posterior NHP into its triage band.
pub fn classify_nhp(nhp: f64) -> TriageBand {
    if nhp < MONITOR_MIN {
        TriageBand::Background
    } else if nhp <= MONITOR_MAX {
        TriageBand::Monitor
    } else {
        TriageBand::Escalate
    }
}
