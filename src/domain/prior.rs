//! Session prior configuration.
//!
//! `PriorConfig` carries the two tunable fusion parameters:
//!
//! - `prior_nh`: baseline (pre-evidence) probability of non-human origin
//! - `k`: skepticism constant damping how far evidence can move the
//!   posterior away from `prior_nh`
//!
//! Standard mode pins both to the calibrated defaults. Exploratory mode
//! exists for internal sensitivity sweeps and may only *lower* the values;
//! raising either above its standard default would inflate the non-human
//! posterior beyond the calibrated baseline and is rejected outright.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::TriageError;

/// Default baseline prior for the non-human hypothesis.
pub const PRIOR_NH_DEFAULT: f64 = 0.20;

/// Default skepticism constant (aligned with AARO 2024 uncertainty standards).
pub const CALIBRATION_K_DEFAULT: f64 = 0.20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PriorMode {
    /// Fixed calibrated constants; the configuration for institutional output.
    Standard,
    /// Caller-supplied values at or below the standard defaults.
    Exploratory,
}

impl PriorMode {
    pub fn display_name(self) -> &'static str {
        match self {
            PriorMode::Standard => "standard",
            PriorMode::Exploratory => "exploratory",
        }
    }
}

/// Immutable prior configuration for a triage session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorConfig {
    pub prior_nh: f64,
    pub k: f64,
    pub mode: PriorMode,
}

impl PriorConfig {
    /// The standard calibrated configuration.
    pub fn standard() -> Self {
        Self {
            prior_nh: PRIOR_NH_DEFAULT,
            k: CALIBRATION_K_DEFAULT,
            mode: PriorMode::Standard,
        }
    }

    /// Exploratory configuration for sensitivity analysis.
    ///
    /// Both values must lie in `[0, 1]` and at or below their standard-mode
    /// defaults.
    pub fn exploratory(prior_nh: f64, k: f64) -> Result<Self, TriageError> {
        let config = Self {
            prior_nh,
            k,
            mode: PriorMode::Exploratory,
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-validate the configuration (used at the fusion-engine boundary).
    pub fn validate(&self) -> Result<(), TriageError> {
        for (name, value) in [("PRIOR_NH", self.prior_nh), ("K", self.k)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(TriageError::InvalidPrior(format!(
                    "{name} = {value}, outside [0, 1]"
                )));
            }
        }
        if self.mode == PriorMode::Exploratory {
            if self.prior_nh > PRIOR_NH_DEFAULT {
                return Err(TriageError::InvalidPrior(format!(
                    "exploratory PRIOR_NH = {} exceeds the standard-mode ceiling {}",
                    self.prior_nh, PRIOR_NH_DEFAULT
                )));
            }
            if self.k > CALIBRATION_K_DEFAULT {
                return Err(TriageError::InvalidPrior(format!(
                    "exploratory K = {} exceeds the standard-mode ceiling {}",
                    self.k, CALIBRATION_K_DEFAULT
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_uses_calibrated_constants() {
        let config = PriorConfig::standard();
        assert_eq!(config.prior_nh, 0.20);
        assert_eq!(config.k, 0.20);
        assert_eq!(config.mode, PriorMode::Standard);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn exploratory_accepts_lowered_values() {
        let config = PriorConfig::exploratory(0.05, 0.10).unwrap();
        assert_eq!(config.prior_nh, 0.05);
        assert_eq!(config.k, 0.10);
        assert_eq!(config.mode, PriorMode::Exploratory);
    }

    #[test]
    fn exploratory_rejects_raised_prior() {
        let err = PriorConfig::exploratory(0.30, 0.10).unwrap_err();
        assert!(matches!(err, TriageError::InvalidPrior(_)));
    }

    #[test]
    fn exploratory_rejects_raised_k() {
        let err = PriorConfig::exploratory(0.10, 0.25).unwrap_err();
        assert!(matches!(err, TriageError::InvalidPrior(_)));
    }

    #[test]
    fn out_of_range_values_rejected() {
        assert!(PriorConfig::exploratory(-0.1, 0.1).is_err());
        assert!(PriorConfig::exploratory(0.1, f64::NAN).is_err());
    }
}
