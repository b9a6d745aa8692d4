//! Deterministic synthesis of agricultural sample datasets.
//!
//! This crate consumes a [`agristat_core::Domain`] plus a seed to produce a
//! fully reproducible [`agristat_core::Dataset`], one record per (year,
//! quarter, crop) combination.

pub mod engine;
pub mod errors;
pub mod model;

pub use engine::{GenerationEngine, GenerationOutcome};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport, ValueRanges};
