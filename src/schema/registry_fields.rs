//! Centralized registry field tables
//!
//! This module provides the per-cohort field definitions used by the
//! completeness scorer. The tables are fixed: every record of a cohort is
//! scored against the same denominator regardless of how much of it has been
//! entered.

use crate::schema::field::{FieldDefinition, FieldKind};

/// Field definitions shared by both registry cohorts
#[derive(Debug)]
pub struct CommonFields;

impl CommonFields {
    /// The 11 common scalar fields
    #[must_use]
    pub fn scalars() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("patient_code", "Pseudonymized patient code", FieldKind::String),
            FieldDefinition::new("gender", "Gender", FieldKind::Category),
            FieldDefinition::new("birth_date", "Birth date", FieldKind::Date),
            FieldDefinition::new("height", "Height in centimeters", FieldKind::Decimal),
            FieldDefinition::new("weight", "Weight in kilograms", FieldKind::Decimal),
            FieldDefinition::new("smoking_status", "Smoking status", FieldKind::Category),
            FieldDefinition::new(
                "initial_diagnosis_date",
                "Initial diagnosis date",
                FieldKind::Date,
            ),
            FieldDefinition::new("tnm_stage", "TNM stage at diagnosis", FieldKind::Category),
            FieldDefinition::new("histology", "Histology", FieldKind::Category),
            FieldDefinition::new("current_status", "Vital status at last contact", FieldKind::Category),
            FieldDefinition::new("last_contact_date", "Date of last contact", FieldKind::Date),
        ]
    }

    /// The 2 common multi-select fields
    #[must_use]
    pub fn arrays() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("comorbidities", "Selected comorbidities", FieldKind::Array),
            FieldDefinition::new(
                "metastases_sites",
                "Metastasis sites at treatment start",
                FieldKind::Array,
            ),
        ]
    }
}

/// Field definitions specific to the ALK cohort
#[derive(Debug)]
pub struct AlkFields;

impl AlkFields {
    /// The 7 ALK-specific scalar fields
    #[must_use]
    pub fn scalars() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("alk_diagnosis_date", "ALK confirmation date", FieldKind::Date),
            FieldDefinition::new("alk_fusion_variant", "ALK fusion variant", FieldKind::Category),
            FieldDefinition::new("alectinib_start_date", "Alectinib start date", FieldKind::Date),
            FieldDefinition::new(
                "stage_at_alectinib_start",
                "Disease stage at alectinib start",
                FieldKind::Category,
            ),
            FieldDefinition::new("ecog_at_start", "ECOG performance status", FieldKind::Integer),
            FieldDefinition::new("maximum_response", "Maximum response achieved", FieldKind::Category),
            FieldDefinition::new(
                "alectinib_therapy_status",
                "Current alectinib therapy status",
                FieldKind::Category,
            ),
        ]
    }

    /// The 3 ALK-specific multi-select fields
    #[must_use]
    pub fn arrays() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("alk_methods", "ALK detection methods", FieldKind::Array),
            FieldDefinition::new(
                "previous_therapy_types",
                "Types of previous therapy",
                FieldKind::Array,
            ),
            FieldDefinition::new("progression_sites", "Progression sites", FieldKind::Array),
        ]
    }
}

/// Field definitions specific to the ROS1 cohort
#[derive(Debug)]
pub struct Ros1Fields;

impl Ros1Fields {
    /// The 4 ROS1-specific scalar fields
    #[must_use]
    pub fn scalars() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("ros1_fusion_variant", "ROS1 fusion variant", FieldKind::Category),
            FieldDefinition::new("pdl1_status", "PD-L1 status", FieldKind::Category),
            FieldDefinition::new(
                "radical_treatment_conducted",
                "Whether radical treatment was conducted",
                FieldKind::Boolean,
            ),
            FieldDefinition::new(
                "metastatic_diagnosis_date",
                "Metastatic phase diagnosis date",
                FieldKind::Date,
            ),
        ]
    }

    /// The 1 ROS1-specific array field
    #[must_use]
    pub fn arrays() -> Vec<FieldDefinition> {
        vec![FieldDefinition::new(
            "metastatic_therapy_lines",
            "Ordered metastatic therapy lines",
            FieldKind::Array,
        )]
    }
}
