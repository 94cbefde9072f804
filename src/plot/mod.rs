//! Terminal visualization.

pub mod ascii;

pub use ascii::*;
