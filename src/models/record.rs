//! Core clinical record definition
//!
//! This module contains the in-memory representation of one patient's
//! registry record: a large set of optional scalar fields, multi-select
//! arrays of coded strings, and two nested therapy-line structures. A record
//! is constructed once per patient and mutated field-by-field on every save
//! or patch; it is never physically deleted here (soft-deactivation lives in
//! the surrounding application).

use crate::models::types::{CurrentStatus, RegistryType};
use crate::utils::dates::{lenient_date, lenient_f64, lenient_i32};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One episode of systemic therapy in the metastatic phase
///
/// Lines are kept in encounter order; the validator reports violations with
/// the 1-based position of the offending line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetastaticTherapyLine {
    /// Ordinal of the line as entered (informational, display only)
    pub line_number: Option<i32>,
    /// Therapy content (regimen builder payload, kept opaque)
    pub therapy: Option<Value>,
    /// Line start date
    #[serde(with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    /// Line end date
    #[serde(with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    /// Date of progression on this line, if any
    #[serde(with = "lenient_date")]
    pub progression_date: Option<NaiveDate>,
    /// Best response on this line (coded)
    pub response: Option<String>,
    /// Reason the line was stopped (coded)
    pub stop_reason: Option<String>,
}

/// One perioperative therapy episode around radical treatment (ROS1 only)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerioperativeTherapyLine {
    /// Neoadjuvant or adjuvant phase (coded)
    #[serde(rename = "type")]
    pub phase: Option<String>,
    /// Therapy content (regimen builder payload, kept opaque)
    pub therapy: Option<Value>,
    /// Episode start date
    #[serde(with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    /// Episode end date
    #[serde(with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
}

/// A patient's clinical registry record
///
/// Every field is optional: records are filled in iteratively over many
/// sessions, and the completeness scorer measures exactly how far along a
/// record is. Date fields deserialize leniently (empty or unparseable
/// strings become `None`); all other coded values are opaque strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalRecord {
    /// Registry cohort this record belongs to; selects schema and rule set
    pub registry_type: RegistryType,

    // Identification
    /// Pseudonymized patient code
    pub patient_code: Option<String>,
    /// Date the form was filled in
    #[serde(with = "lenient_date")]
    pub date_filled: Option<NaiveDate>,

    // Demographics
    /// Gender (coded)
    pub gender: Option<String>,
    /// Birth date
    #[serde(with = "lenient_date")]
    pub birth_date: Option<NaiveDate>,
    /// Height in centimeters
    #[serde(with = "lenient_f64")]
    pub height: Option<f64>,
    /// Weight in kilograms at treatment start
    #[serde(with = "lenient_f64")]
    pub weight: Option<f64>,
    /// Selected comorbidities (coded, multi-select)
    pub comorbidities: Option<Vec<String>>,
    /// Smoking status (coded)
    pub smoking_status: Option<String>,
    /// Free-text comorbidities not covered by the dictionary
    pub comorbidities_other_text: Option<String>,

    // Diagnosis
    /// Date of the initial diagnosis
    #[serde(with = "lenient_date")]
    pub initial_diagnosis_date: Option<NaiveDate>,
    /// TNM stage at diagnosis (coded)
    pub tnm_stage: Option<String>,
    /// Date metastatic disease was established
    #[serde(with = "lenient_date")]
    pub metastatic_disease_date: Option<NaiveDate>,
    /// Histology (coded)
    pub histology: Option<String>,

    // ALK diagnostics
    /// Date the ALK rearrangement was confirmed
    #[serde(with = "lenient_date")]
    pub alk_diagnosis_date: Option<NaiveDate>,
    /// Methods used to establish ALK status (coded, multi-select)
    pub alk_methods: Option<Vec<String>>,
    /// ALK fusion variant (coded)
    pub alk_fusion_variant: Option<String>,
    /// TP53 co-mutation status (coded)
    pub tp53_comutation: Option<String>,
    /// TTF1 expression status (coded)
    pub ttf1_expression: Option<String>,

    // Previous therapy (ALK pathway)
    /// Whether the patient received therapy before alectinib
    pub had_previous_therapy: Option<bool>,
    /// Explicit "no previous therapy" flag
    pub no_previous_therapy: Option<bool>,
    /// Types of previous therapy (coded, multi-select)
    pub previous_therapy_types: Option<Vec<String>>,
    /// Previous therapy start date
    #[serde(with = "lenient_date")]
    pub previous_therapy_start_date: Option<NaiveDate>,
    /// Previous therapy end date
    #[serde(with = "lenient_date")]
    pub previous_therapy_end_date: Option<NaiveDate>,
    /// Response to previous therapy (coded)
    pub previous_therapy_response: Option<String>,
    /// Reason previous therapy was stopped
    pub previous_therapy_stop_reason: Option<String>,

    // Alectinib therapy (ALK pathway)
    /// Alectinib start date
    #[serde(with = "lenient_date")]
    pub alectinib_start_date: Option<NaiveDate>,
    /// Disease stage at alectinib start (coded)
    pub stage_at_alectinib_start: Option<String>,
    /// ECOG performance status at start (0-4)
    #[serde(with = "lenient_i32")]
    pub ecog_at_start: Option<i32>,
    /// Metastasis sites at treatment start (coded, multi-select)
    pub metastases_sites: Option<Vec<String>>,
    /// Free-text metastasis sites
    pub metastases_sites_other_text: Option<String>,
    /// Whether CNS metastases are present
    pub cns_metastases: Option<bool>,
    /// Whether CNS lesions are measurable (coded)
    pub cns_measurable: Option<String>,
    /// Whether CNS lesions are symptomatic (coded)
    pub cns_symptomatic: Option<String>,
    /// CNS radiotherapy received (coded)
    pub cns_radiotherapy: Option<String>,
    /// Timing of CNS radiotherapy relative to therapy start (coded)
    pub cns_radiotherapy_timing: Option<String>,
    /// Current alectinib therapy status (coded)
    pub alectinib_therapy_status: Option<String>,

    // Response
    /// Maximum response achieved (coded)
    pub maximum_response: Option<String>,
    /// Date of earliest documented response
    #[serde(with = "lenient_date")]
    pub earliest_response_date: Option<NaiveDate>,
    /// Intracranial response (coded)
    pub intracranial_response: Option<String>,

    // Progression during alectinib
    /// Progression pattern during therapy (coded)
    pub progression_during_alectinib: Option<String>,
    /// Local treatment applied at progression (coded)
    pub local_treatment_at_progression: Option<String>,
    /// Progression sites (coded, multi-select)
    pub progression_sites: Option<Vec<String>>,
    /// Free-text progression sites
    pub progression_sites_other_text: Option<String>,
    /// Progression date during therapy
    #[serde(with = "lenient_date")]
    pub progression_date: Option<NaiveDate>,
    /// Whether alectinib continued beyond progression
    pub continued_after_progression: Option<bool>,

    // Therapy completion
    /// Alectinib end date
    #[serde(with = "lenient_date")]
    pub alectinib_end_date: Option<NaiveDate>,
    /// Reason alectinib was stopped
    pub alectinib_stop_reason: Option<String>,
    /// Whether treatment was interrupted
    pub had_treatment_interruption: Option<bool>,
    /// Reason for interruption
    pub interruption_reason: Option<String>,
    /// Interruption duration in months
    #[serde(with = "lenient_f64")]
    pub interruption_duration_months: Option<f64>,
    /// Whether the dose was reduced
    pub had_dose_reduction: Option<bool>,

    // Progression after alectinib discontinuation
    /// Progression pattern after discontinuation (coded)
    pub after_alectinib_progression_type: Option<String>,
    /// Progression sites after discontinuation (coded, multi-select)
    pub after_alectinib_progression_sites: Option<Vec<String>>,
    /// Free-text progression sites after discontinuation
    pub after_alectinib_progression_sites_other_text: Option<String>,
    /// Progression date after discontinuation
    #[serde(with = "lenient_date")]
    pub after_alectinib_progression_date: Option<NaiveDate>,

    // Next treatment line (ALK pathway)
    /// Next-line treatments (coded, multi-select)
    pub next_line_treatments: Option<Vec<String>>,
    /// Next-line start date
    #[serde(with = "lenient_date")]
    pub next_line_start_date: Option<NaiveDate>,
    /// Whether the disease progressed on the next line
    pub progression_on_next_line: Option<bool>,
    /// Progression date on the next line
    #[serde(with = "lenient_date")]
    pub progression_on_next_line_date: Option<NaiveDate>,
    /// Progression pattern on the next line (coded)
    pub next_line_progression_type: Option<String>,
    /// Progression sites on the next line (coded, multi-select)
    pub next_line_progression_sites: Option<Vec<String>>,
    /// Free-text progression sites on the next line
    pub next_line_progression_sites_other_text: Option<String>,
    /// Free-text next-line treatments
    pub next_line_treatments_other_text: Option<String>,
    /// Next-line end date
    #[serde(with = "lenient_date")]
    pub next_line_end_date: Option<NaiveDate>,
    /// Total number of lines after alectinib
    #[serde(with = "lenient_i32")]
    pub total_lines_after_alectinib: Option<i32>,

    // ROS1 pathway
    /// ROS1 fusion variant (coded)
    pub ros1_fusion_variant: Option<String>,
    /// PD-L1 status (coded)
    pub pdl1_status: Option<String>,
    /// PD-L1 tumor proportion score (percent)
    #[serde(with = "lenient_f64")]
    pub pdl1_tps: Option<f64>,
    /// Whether radical treatment was conducted
    pub radical_treatment_conducted: Option<bool>,
    /// Whether radical surgery was conducted
    pub radical_surgery_conducted: Option<bool>,
    /// Radical surgery date
    #[serde(with = "lenient_date")]
    pub radical_surgery_date: Option<NaiveDate>,
    /// Type of radical surgery (coded)
    pub radical_surgery_type: Option<String>,
    /// Free-text surgery type
    pub radical_surgery_type_other: Option<String>,
    /// Whether radical chemoradiotherapy was conducted
    pub radical_crt_conducted: Option<bool>,
    /// Chemoradiotherapy start date
    #[serde(with = "lenient_date")]
    pub radical_crt_start_date: Option<NaiveDate>,
    /// Chemoradiotherapy end date
    #[serde(with = "lenient_date")]
    pub radical_crt_end_date: Option<NaiveDate>,
    /// Whether consolidation therapy followed chemoradiotherapy
    pub radical_crt_consolidation: Option<bool>,
    /// Consolidation drug (coded)
    pub radical_crt_consolidation_drug: Option<String>,
    /// Consolidation end date
    #[serde(with = "lenient_date")]
    pub radical_crt_consolidation_end_date: Option<NaiveDate>,
    /// Perioperative therapy episodes around radical treatment
    pub radical_perioperative_therapy: Option<Vec<PerioperativeTherapyLine>>,
    /// Outcome of radical treatment (coded)
    pub radical_treatment_outcome: Option<String>,
    /// Relapse date after radical treatment
    #[serde(with = "lenient_date")]
    pub relapse_date: Option<NaiveDate>,
    /// Date the metastatic phase was diagnosed
    #[serde(with = "lenient_date")]
    pub metastatic_diagnosis_date: Option<NaiveDate>,
    /// Ordered therapy lines in the metastatic phase
    pub metastatic_therapy_lines: Option<Vec<MetastaticTherapyLine>>,

    // Status
    /// Vital status at last contact (coded, `DEAD` denotes deceased)
    pub current_status: Option<String>,
    /// Date of last contact
    #[serde(with = "lenient_date")]
    pub last_contact_date: Option<NaiveDate>,
}

impl ClinicalRecord {
    /// Create an empty record for the given registry cohort
    #[must_use]
    pub fn new(registry_type: RegistryType) -> Self {
        Self {
            registry_type,
            ..Self::default()
        }
    }

    /// Whether the record's current status denotes a deceased patient
    #[must_use]
    pub fn is_deceased(&self) -> bool {
        self.current_status
            .as_deref()
            .is_some_and(|s| CurrentStatus::from(s) == CurrentStatus::Deceased)
    }

    /// Age at initial diagnosis in whole years, if both dates are known
    #[must_use]
    pub fn age_at_diagnosis(&self) -> Option<i32> {
        let birth = self.birth_date?;
        let diagnosis = self.initial_diagnosis_date?;
        let mut age = diagnosis.year() - birth.year();
        if (diagnosis.month(), diagnosis.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        Some(age)
    }
}
