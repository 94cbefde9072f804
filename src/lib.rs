//! `jor-triage` library crate.
//!
//! The binary (`jor`) is a thin wrapper around this library so that:
//!
//! - the fusion core is testable without spawning processes
//! - modules are reusable (e.g., batch scoring, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fusion;
pub mod io;
pub mod plot;
pub mod report;
pub mod rubric;
