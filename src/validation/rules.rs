//! Pairwise date ordering rule tables
//!
//! One table of common rules plus one table per registry cohort. Each rule
//! names the pair of dates it compares and the message reported when the
//! earlier one comes after the later one. Keeping the rules as data makes
//! the shared checks shared and the cohort-specific checks isolated.

use crate::models::record::ClinicalRecord;
use chrono::NaiveDate;

/// Accessor for one date operand of a rule
pub(crate) type DateGetter = fn(&ClinicalRecord) -> Option<NaiveDate>;

/// A single `earlier <= later` constraint between two record dates
pub(crate) struct DateRule {
    /// The date that must not come after `later`
    pub earlier: DateGetter,
    /// The date that must not come before `earlier`
    pub later: DateGetter,
    /// Message reported when the pair is out of order
    pub message: &'static str,
}

/// Rules applied to every record regardless of registry type
pub(crate) const COMMON_RULES: &[DateRule] = &[
    DateRule {
        earlier: |r| r.birth_date,
        later: |r| r.initial_diagnosis_date,
        message: "Birth date cannot be later than the initial diagnosis date",
    },
    // Only constrains deceased patients; for everyone else the last contact
    // date may legitimately precede a re-entered diagnosis date.
    DateRule {
        earlier: |r| {
            if r.is_deceased() {
                r.initial_diagnosis_date
            } else {
                None
            }
        },
        later: |r| r.last_contact_date,
        message: "Initial diagnosis date cannot be later than the last contact date for a deceased patient",
    },
];

/// Rules applied to ALK-cohort records
pub(crate) const ALK_RULES: &[DateRule] = &[
    DateRule {
        earlier: |r| r.initial_diagnosis_date,
        later: |r| r.alk_diagnosis_date,
        message: "ALK confirmation date cannot be earlier than the initial diagnosis date",
    },
    DateRule {
        earlier: |r| r.initial_diagnosis_date,
        later: |r| r.alectinib_start_date,
        message: "Alectinib start date cannot be earlier than the initial diagnosis date",
    },
    DateRule {
        earlier: |r| r.alectinib_start_date,
        later: |r| r.alectinib_end_date,
        message: "Alectinib end date cannot be earlier than the alectinib start date",
    },
    DateRule {
        earlier: |r| r.alectinib_start_date,
        later: |r| r.progression_date,
        message: "Progression date cannot be earlier than the alectinib start date",
    },
    DateRule {
        earlier: |r| r.alectinib_end_date,
        later: |r| r.after_alectinib_progression_date,
        message: "Post-alectinib progression date cannot be earlier than the alectinib end date",
    },
];

/// Rules applied to ROS1-cohort records
pub(crate) const ROS1_RULES: &[DateRule] = &[
    DateRule {
        earlier: |r| r.initial_diagnosis_date,
        later: |r| r.metastatic_diagnosis_date,
        message: "Metastatic phase diagnosis date cannot be earlier than the initial diagnosis date",
    },
    DateRule {
        earlier: |r| r.initial_diagnosis_date,
        later: |r| r.radical_surgery_date,
        message: "Radical surgery date cannot be earlier than the initial diagnosis date",
    },
    DateRule {
        earlier: |r| r.radical_crt_start_date,
        later: |r| r.radical_crt_end_date,
        message: "Chemoradiotherapy end date cannot be earlier than its start date",
    },
    DateRule {
        earlier: |r| r.radical_crt_end_date,
        later: |r| r.radical_crt_consolidation_end_date,
        message: "Consolidation end date cannot be earlier than the chemoradiotherapy end date",
    },
    DateRule {
        earlier: |r| r.radical_surgery_date,
        later: |r| r.relapse_date,
        message: "Relapse date cannot be earlier than the radical surgery date",
    },
    DateRule {
        earlier: |r| r.radical_crt_end_date,
        later: |r| r.relapse_date,
        message: "Relapse date cannot be earlier than the chemoradiotherapy end date",
    },
];
