//! Algorithm implementations for the re-identification experiment
//!
//! This module contains the pipeline stages: taxonomy normalization,
//! privacy-noise simulation, commercial-data derivation, statistical
//! linkage, scoring, and the per-unit experiment driver tying them together.

pub mod commercial;
pub mod experiment;
pub mod linkage;
pub mod noise;
pub mod scoring;
pub mod taxonomy;
