//! Completeness scoring
//!
//! Computes how much of a record's expected field set has been filled in,
//! and aggregates per-field completion rates across many records for
//! institutional reporting. Scoring is deterministic and pure: the same
//! record always yields the same triple, which is what allows the score to
//! double as a reporting metric.

mod aggregate;

pub use aggregate::{InstitutionReport, aggregate_completion};

use crate::models::record::ClinicalRecord;
use crate::models::types::RegistryType;
use crate::schema;
use serde::{Deserialize, Serialize};

/// Filled/total field counts for a single record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionScore {
    /// Number of schema fields with a value
    pub filled_fields: usize,
    /// Number of schema fields expected for the record's registry type
    pub total_fields: usize,
    /// `filled / total` as a percentage, rounded to one decimal
    pub completion_percentage: f64,
}

/// Round to one decimal place, the precision published in reports
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute the completeness score of a record
///
/// The field set is selected by the record's registry type; scalars count
/// when present and non-empty, arrays when non-empty.
#[must_use]
pub fn score(record: &ClinicalRecord) -> CompletionScore {
    let fields = schema::scoring_fields(record.registry_type);
    let total_fields = fields.len();
    let filled_fields = fields
        .iter()
        .filter(|field| schema::field_is_filled(record, &field.name))
        .count();

    let completion_percentage = if total_fields == 0 {
        0.0
    } else {
        round1(filled_fields as f64 / total_fields as f64 * 100.0)
    };

    CompletionScore {
        filled_fields,
        total_fields,
        completion_percentage,
    }
}

/// Score a record that may be absent
///
/// A missing record scores zero filled fields against the default (ALK)
/// schema total, so callers always get a well-formed triple.
#[must_use]
pub fn score_optional(record: Option<&ClinicalRecord>) -> CompletionScore {
    match record {
        Some(record) => score(record),
        None => CompletionScore {
            filled_fields: 0,
            total_fields: schema::scoring_fields(RegistryType::default()).len(),
            completion_percentage: 0.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(47.826), 47.8);
        assert_eq!(round1(47.85), 47.9);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn test_score_empty_record() {
        let record = ClinicalRecord::new(RegistryType::Ros1);
        let result = score(&record);
        assert_eq!(result.filled_fields, 0);
        assert_eq!(result.total_fields, 18);
        assert_eq!(result.completion_percentage, 0.0);
    }

    #[test]
    fn test_score_absent_record_uses_default_schema_total() {
        let result = score_optional(None);
        assert_eq!(result.filled_fields, 0);
        assert_eq!(result.total_fields, 23);
        assert_eq!(result.completion_percentage, 0.0);
    }
}
