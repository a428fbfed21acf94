//! A Rust library for validating and scoring clinical registry records.
//!
//! The crate is the pure core of a two-cohort oncology registry (`ALK` and
//! `ROS1`): it checks that the dates and nested therapy-line structures of a
//! candidate record are temporally consistent, and computes reproducible
//! completeness scores and per-field completion rates for reporting. It never
//! performs I/O; the surrounding application supplies in-memory records and
//! persists the results.

pub mod error;
pub mod models;
pub mod schema;
pub mod scoring;
pub mod utils;
pub mod validation;

// Re-export the most common types for easier use
// Core types
pub use error::{RegistryError, Result};
pub use models::{ClinicalRecord, MetastaticTherapyLine, PerioperativeTherapyLine, RegistryType};
pub use schema::{FieldDefinition, FieldKind};

// Validation
pub use validation::{Violation, validate};

// Completeness scoring
pub use scoring::{
    CompletionScore, InstitutionReport, aggregate_completion, score, score_optional,
};

// Patch-style updates
pub use models::merge::merge_patch;

// Utility functions
pub use utils::dates::{coerce_date, parse_date_string};
