//! Input/output helpers.
//!
//! - case-log CSV append (`export`)
//! - case-record JSON read/write (`record`)

pub mod export;
pub mod record;

pub use export::*;
pub use record::*;
