//! trialbot - clinical trial study-characteristics annotation system.
//!
//! Core library exposing domain modules for workspace crates.

pub mod config;
pub mod models;
