//! A Rust library for estimating re-identification risk in privacy-protected
//! census microdata.
//!
//! The crate simulates an attacker who cross-references a redacted commercial
//! dataset against a privatized population file (a PPMF analogue, noised under
//! a configurable differential-privacy budget) and measures how often the
//! attacker could uniquely and correctly infer a person's race or ethnicity.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::ExperimentConfig;
pub use error::{ReidError, Result};
pub use models::{
    CommercialRecord, GroundTruthRecord, LinkedRecord, Person, PopulationRow, RaceAttribute,
    RaceEthnicity, Sex, StratumKey,
};

// Experiment driver and scoring
pub use algorithm::experiment::{ExperimentResults, prepare_and_link, run_experiment};
pub use algorithm::scoring::{Summary, summarize_results};
