//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - rubric factor enums and weights (`Factor`, `FlightClass`, `RubricScore`)
//! - session prior configuration (`PriorMode`, `PriorConfig`)
//! - fusion outputs (`NhpOutcome`, `PosteriorResult`, `CaseRecord`)

pub mod prior;
pub mod types;

pub use prior::*;
pub use types::*;
