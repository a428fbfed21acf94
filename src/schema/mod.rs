//! Static field schema registry
//!
//! Single source of truth for which fields exist per registry cohort and
//! which of them are array-valued. The completeness scorer and the
//! per-institution reporting both read these tables, so changing them changes
//! the denominator of every published completion percentage; bump
//! [`SCHEMA_VERSION`] when they move.

pub mod field;
pub mod registry_fields;

pub use field::{FieldDefinition, FieldKind};
pub use registry_fields::{AlkFields, CommonFields, Ros1Fields};

use crate::models::record::ClinicalRecord;
use crate::models::types::RegistryType;

/// Version of the scoring/reporting field tables
pub const SCHEMA_VERSION: &str = "1.0.0";

/// All fields that count toward the completeness score of a record
///
/// Common scalars first, then registry-specific scalars, then array fields,
/// matching the published scoring order.
#[must_use]
pub fn scoring_fields(registry_type: RegistryType) -> Vec<FieldDefinition> {
    let mut fields = CommonFields::scalars();
    match registry_type {
        RegistryType::Alk => fields.extend(AlkFields::scalars()),
        RegistryType::Ros1 => fields.extend(Ros1Fields::scalars()),
    }
    fields.extend(CommonFields::arrays());
    match registry_type {
        RegistryType::Alk => fields.extend(AlkFields::arrays()),
        RegistryType::Ros1 => fields.extend(Ros1Fields::arrays()),
    }
    fields
}

/// Reporting-oriented key fields for per-institution completion rates
///
/// A smaller field set than [`scoring_fields`], chosen per registry for the
/// institutional analytics report.
#[must_use]
pub fn report_fields(registry_type: RegistryType) -> &'static [&'static str] {
    match registry_type {
        RegistryType::Alk => &[
            "gender",
            "birth_date",
            "height",
            "weight",
            "initial_diagnosis_date",
            "tnm_stage",
            "histology",
            "alk_diagnosis_date",
            "alk_methods",
            "alectinib_start_date",
            "ecog_at_start",
            "current_status",
            "last_contact_date",
        ],
        RegistryType::Ros1 => &[
            "gender",
            "birth_date",
            "height",
            "weight",
            "initial_diagnosis_date",
            "tnm_stage",
            "histology",
            "ros1_fusion_variant",
            "pdl1_status",
            "radical_treatment_conducted",
            "metastatic_diagnosis_date",
            "current_status",
            "last_contact_date",
        ],
    }
}

fn filled_str(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

fn filled_list(value: &Option<Vec<String>>) -> bool {
    value.as_ref().is_some_and(|v| !v.is_empty())
}

/// Whether a schema field is filled on the given record
///
/// Scalars count as filled when present and not the empty string; arrays
/// when non-empty. Names outside the schema tables are reported unfilled and
/// logged, so a stale report configuration cannot inflate rates silently.
#[must_use]
pub fn field_is_filled(record: &ClinicalRecord, name: &str) -> bool {
    match name {
        // Common scalars
        "patient_code" => filled_str(&record.patient_code),
        "gender" => filled_str(&record.gender),
        "birth_date" => record.birth_date.is_some(),
        "height" => record.height.is_some(),
        "weight" => record.weight.is_some(),
        "smoking_status" => filled_str(&record.smoking_status),
        "initial_diagnosis_date" => record.initial_diagnosis_date.is_some(),
        "tnm_stage" => filled_str(&record.tnm_stage),
        "histology" => filled_str(&record.histology),
        "current_status" => filled_str(&record.current_status),
        "last_contact_date" => record.last_contact_date.is_some(),

        // ALK scalars
        "alk_diagnosis_date" => record.alk_diagnosis_date.is_some(),
        "alk_fusion_variant" => filled_str(&record.alk_fusion_variant),
        "alectinib_start_date" => record.alectinib_start_date.is_some(),
        "stage_at_alectinib_start" => filled_str(&record.stage_at_alectinib_start),
        "ecog_at_start" => record.ecog_at_start.is_some(),
        "maximum_response" => filled_str(&record.maximum_response),
        "alectinib_therapy_status" => filled_str(&record.alectinib_therapy_status),

        // ROS1 scalars
        "ros1_fusion_variant" => filled_str(&record.ros1_fusion_variant),
        "pdl1_status" => filled_str(&record.pdl1_status),
        "radical_treatment_conducted" => record.radical_treatment_conducted.is_some(),
        "metastatic_diagnosis_date" => record.metastatic_diagnosis_date.is_some(),

        // Arrays
        "comorbidities" => filled_list(&record.comorbidities),
        "metastases_sites" => filled_list(&record.metastases_sites),
        "alk_methods" => filled_list(&record.alk_methods),
        "previous_therapy_types" => filled_list(&record.previous_therapy_types),
        "progression_sites" => filled_list(&record.progression_sites),
        "metastatic_therapy_lines" => record
            .metastatic_therapy_lines
            .as_ref()
            .is_some_and(|lines| !lines.is_empty()),

        other => {
            log::warn!("unknown schema field treated as unfilled: {other}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_field_counts_per_registry() {
        // 11 common + 7 specific + 5 arrays
        assert_eq!(scoring_fields(RegistryType::Alk).len(), 23);
        // 11 common + 4 specific + 3 arrays
        assert_eq!(scoring_fields(RegistryType::Ros1).len(), 18);
    }

    #[test]
    fn test_every_scoring_field_is_resolvable() {
        let record = ClinicalRecord::default();
        for registry in [RegistryType::Alk, RegistryType::Ros1] {
            for field in scoring_fields(registry) {
                // An empty record has nothing filled; the point is that no
                // schema name falls through to the unknown-field arm.
                assert!(!field_is_filled(&record, &field.name));
            }
        }
    }

    #[test]
    fn test_array_fields_come_last_in_scoring_order() {
        // 2 common + 3 ALK-specific multi-selects
        let alk = scoring_fields(RegistryType::Alk);
        assert_eq!(alk.iter().filter(|f| f.is_array()).count(), 5);
        assert!(alk.iter().rev().take(5).all(FieldDefinition::is_array));

        // 2 common multi-selects + the therapy-line structure
        let ros1 = scoring_fields(RegistryType::Ros1);
        assert_eq!(ros1.iter().filter(|f| f.is_array()).count(), 3);
        assert!(ros1.iter().rev().take(3).all(FieldDefinition::is_array));
    }

    #[test]
    fn test_report_fields_differ_per_registry() {
        let alk = report_fields(RegistryType::Alk);
        let ros1 = report_fields(RegistryType::Ros1);
        assert!(alk.contains(&"alk_diagnosis_date"));
        assert!(!ros1.contains(&"alk_diagnosis_date"));
        assert!(ros1.contains(&"pdl1_status"));
    }

    #[test]
    fn test_filled_semantics() {
        let mut record = ClinicalRecord::default();
        record.gender = Some(String::new());
        assert!(!field_is_filled(&record, "gender"));
        record.gender = Some("f".to_string());
        assert!(field_is_filled(&record, "gender"));

        record.comorbidities = Some(vec![]);
        assert!(!field_is_filled(&record, "comorbidities"));
        record.comorbidities = Some(vec!["DIABETES".to_string()]);
        assert!(field_is_filled(&record, "comorbidities"));
    }
}
