//! Rubric scoring.
//!
//! Responsibilities:
//!
//! - validate raw per-factor ratings and normalize them to `[0, 1]` weights
//! - apply the JOR modifier and hard-cap tables per factor
//! - resolve sensor/camera-only cases via the sensor-default policy

pub mod modifiers;
pub mod scorer;
pub mod sensor_default;

pub use modifiers::*;
pub use scorer::*;
pub use sensor_default::*;
