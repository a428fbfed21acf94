//! Domain models for registry records.

pub mod merge;
pub mod record;
pub mod types;

pub use record::{ClinicalRecord, MetastaticTherapyLine, PerioperativeTherapyLine};
pub use types::{CurrentStatus, RegistryType};
