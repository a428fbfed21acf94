//! Per-field completion rates across many records
//!
//! Used once per institution to produce the field-completion-rate report:
//! for each caller-supplied key field, the fraction of records where that
//! field is filled.

use crate::models::record::ClinicalRecord;
use crate::models::types::RegistryType;
use crate::schema;
use crate::scoring::round1;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Per-field completion rates for a list of records
///
/// Returns a mapping from field name to the percentage of records where the
/// field is filled, rounded to one decimal. An empty record list yields an
/// empty mapping rather than dividing by zero.
#[must_use]
pub fn aggregate_completion(
    records: &[ClinicalRecord],
    key_fields: &[&str],
) -> FxHashMap<String, f64> {
    let mut rates = FxHashMap::default();
    if records.is_empty() {
        return rates;
    }

    let total_records = records.len() as f64;
    for field in key_fields {
        let filled_count = records
            .iter()
            .filter(|record| schema::field_is_filled(record, field))
            .count();
        rates.insert(
            (*field).to_string(),
            round1(filled_count as f64 / total_records * 100.0),
        );
    }
    rates
}

/// Field-completion report for one institution's cohort
///
/// Reports carry the version of the field tables they were computed
/// against, so published rates remain comparable across schema revisions.
#[derive(Debug, Clone, Serialize)]
pub struct InstitutionReport {
    /// Institution identifier assigned by the surrounding application
    pub institution_id: i64,
    /// Display name of the institution
    pub institution_name: String,
    /// Number of records in the cohort
    pub total_patients: usize,
    /// Completion rate per reporting key field
    pub field_completion_rates: FxHashMap<String, f64>,
    /// Version of the field schema the rates were computed against
    pub schema_version: &'static str,
}

impl InstitutionReport {
    /// Build the report for one institution's records of one registry type
    ///
    /// The caller groups records by institution and cohort; the key fields
    /// are the registry's reporting set from the field schema.
    #[must_use]
    pub fn build(
        institution_id: i64,
        institution_name: impl Into<String>,
        registry_type: RegistryType,
        records: &[ClinicalRecord],
    ) -> Self {
        Self {
            institution_id,
            institution_name: institution_name.into(),
            total_patients: records.len(),
            field_completion_rates: aggregate_completion(
                records,
                schema::report_fields(registry_type),
            ),
            schema_version: schema::SCHEMA_VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_mapping() {
        let rates = aggregate_completion(&[], &["gender"]);
        assert!(rates.is_empty());
    }

    #[test]
    fn test_rates_per_field() {
        let mut filled = ClinicalRecord::new(RegistryType::Alk);
        filled.gender = Some("f".to_string());
        filled.height = Some(165.0);
        let empty = ClinicalRecord::new(RegistryType::Alk);

        let rates = aggregate_completion(
            &[filled, empty],
            &["gender", "height", "last_contact_date"],
        );
        assert_eq!(rates["gender"], 50.0);
        assert_eq!(rates["height"], 50.0);
        assert_eq!(rates["last_contact_date"], 0.0);
    }

    #[test]
    fn test_institution_report_uses_registry_key_fields() {
        let mut record = ClinicalRecord::new(RegistryType::Ros1);
        record.pdl1_status = Some("POSITIVE".to_string());

        let report =
            InstitutionReport::build(7, "Center One", RegistryType::Ros1, &[record]);
        assert_eq!(report.total_patients, 1);
        assert_eq!(report.field_completion_rates["pdl1_status"], 100.0);
        assert!(!report.field_completion_rates.contains_key("alk_diagnosis_date"));
        assert_eq!(report.schema_version, schema::SCHEMA_VERSION);
    }
}
