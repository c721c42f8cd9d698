//! Command modules for the cppdep CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod analyze;

#[allow(unused_imports)]
pub use analyze::{run_analyze, AnalyzeArgs};
