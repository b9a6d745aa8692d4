//! Core contracts for Agristat.
//!
//! This crate defines the canonical record and dataset types shared by the
//! generator, the query layer, and the CLI, plus the validation helpers that
//! enforce the dataset shape contract.

pub mod dataset;
pub mod domain;
pub mod error;
pub mod record;
pub mod validation;

pub use dataset::Dataset;
pub use domain::Domain;
pub use error::{Error, Result};
pub use record::{Record, round2};
pub use validation::validate_dataset;

/// Current contract version for `dataset.csv` artifacts.
pub const DATASET_VERSION: &str = "0.1";
