//! `carval` library crate.
//!
//! The binary (`carval`) is a thin wrapper around this library so that:
//!
//! - the inference pipeline is testable without spawning processes
//! - modules are reusable (a future web front-end calls the same chain)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod artifacts;
pub mod catalog;
pub mod cli;
pub mod domain;
pub mod error;
pub mod features;
pub mod io;
pub mod report;
pub mod transform;
