//! Command-line interface for trialbot.

mod commands;
pub mod helpers;

pub use commands::{is_verbose, run};
