//! End-to-end checks of the temporal consistency validator.

use chrono::NaiveDate;
use onco_registry::{
    ClinicalRecord, MetastaticTherapyLine, PerioperativeTherapyLine, RegistryType, validate,
};

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

#[test]
fn empty_record_passes_all_checks() {
    assert!(validate(&ClinicalRecord::new(RegistryType::Alk)).is_ok());
    assert!(validate(&ClinicalRecord::new(RegistryType::Ros1)).is_ok());
}

#[test]
fn birth_after_diagnosis_fails_with_a_birth_diagnosis_message() {
    let mut record = ClinicalRecord::new(RegistryType::Alk);
    record.birth_date = date(2023, 1, 1);
    record.initial_diagnosis_date = date(2022, 1, 1);

    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("Birth date"));
    assert!(message.contains("initial diagnosis"));

    record.birth_date = date(1960, 1, 1);
    assert!(validate(&record).is_ok());
}

#[test]
fn deceased_patients_need_diagnosis_before_last_contact() {
    let mut record = ClinicalRecord::new(RegistryType::Alk);
    record.initial_diagnosis_date = date(2022, 6, 1);
    record.last_contact_date = date(2022, 1, 1);

    // Without a deceased status the pair is unconstrained
    assert!(validate(&record).is_ok());

    record.current_status = Some("DEAD".to_string());
    assert!(validate(&record).is_err());

    record.last_contact_date = date(2022, 7, 1);
    assert!(validate(&record).is_ok());
}

#[test]
fn alectinib_window_must_be_ordered() {
    let mut record = ClinicalRecord::new(RegistryType::Alk);
    record.alectinib_start_date = date(2022, 3, 1);
    record.alectinib_end_date = date(2022, 2, 1);

    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("Alectinib end date"));

    // Absent end date never fails this check
    record.alectinib_end_date = None;
    assert!(validate(&record).is_ok());

    // Swapping back into order passes
    record.alectinib_end_date = date(2022, 4, 1);
    assert!(validate(&record).is_ok());
}

#[test]
fn alk_rules_do_not_apply_to_ros1_records() {
    let mut record = ClinicalRecord::new(RegistryType::Ros1);
    // Inverted alectinib window, but the record is in the ROS1 cohort
    record.alectinib_start_date = date(2022, 3, 1);
    record.alectinib_end_date = date(2022, 2, 1);
    assert!(validate(&record).is_ok());
}

#[test]
fn ros1_radical_treatment_rules() {
    let mut record = ClinicalRecord::new(RegistryType::Ros1);
    record.radical_crt_start_date = date(2022, 5, 1);
    record.radical_crt_end_date = date(2022, 4, 1);
    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("Chemoradiotherapy end date"));

    record.radical_crt_end_date = date(2022, 6, 1);
    assert!(validate(&record).is_ok());

    record.relapse_date = date(2022, 5, 15);
    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("Relapse date"));
}

#[test]
fn metastatic_line_before_diagnosis_names_the_line() {
    let mut record = ClinicalRecord::new(RegistryType::Ros1);
    record.initial_diagnosis_date = date(2022, 1, 10);
    record.metastatic_therapy_lines = Some(vec![MetastaticTherapyLine {
        start_date: date(2022, 1, 5),
        end_date: date(2022, 3, 1),
        ..MetastaticTherapyLine::default()
    }]);

    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("line 1"));
    assert!(message.contains("initial diagnosis"));

    // Moving the start after the diagnosis date makes the record valid
    if let Some(lines) = record.metastatic_therapy_lines.as_mut() {
        lines[0].start_date = date(2022, 2, 1);
    }
    assert!(validate(&record).is_ok());
}

#[test]
fn second_metastatic_line_reports_index_two() {
    let mut record = ClinicalRecord::new(RegistryType::Ros1);
    record.metastatic_therapy_lines = Some(vec![
        MetastaticTherapyLine {
            start_date: date(2022, 2, 1),
            end_date: date(2022, 3, 1),
            ..MetastaticTherapyLine::default()
        },
        MetastaticTherapyLine {
            start_date: date(2022, 4, 1),
            progression_date: date(2022, 3, 15),
            ..MetastaticTherapyLine::default()
        },
    ]);

    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("line 2"));
    assert!(message.contains("progression date"));
}

#[test]
fn perioperative_line_window_must_be_ordered() {
    let mut record = ClinicalRecord::new(RegistryType::Ros1);
    record.radical_perioperative_therapy = Some(vec![PerioperativeTherapyLine {
        start_date: date(2021, 10, 1),
        end_date: date(2021, 9, 1),
        ..PerioperativeTherapyLine::default()
    }]);

    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("Perioperative therapy line 1"));
}

#[test]
fn height_and_weight_ranges() {
    let mut record = ClinicalRecord::new(RegistryType::Alk);

    record.height = Some(25.0);
    assert!(validate(&record).is_err());
    record.height = Some(251.0);
    assert!(validate(&record).is_err());
    record.height = Some(170.0);
    assert!(validate(&record).is_ok());
    record.height = None;
    assert!(validate(&record).is_ok());

    record.weight = Some(5.0);
    assert!(validate(&record).is_err());
    record.weight = Some(301.0);
    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("Weight"));
    record.weight = Some(72.0);
    assert!(validate(&record).is_ok());
}

#[test]
fn first_violation_wins_deterministically() {
    // Both the birth/diagnosis rule and the height range are violated; the
    // common date rules run first, so the date message is reported.
    let mut record = ClinicalRecord::new(RegistryType::Alk);
    record.birth_date = date(2023, 1, 1);
    record.initial_diagnosis_date = date(2022, 1, 1);
    record.height = Some(25.0);

    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("Birth date"));
}

#[test]
fn alk_confirmation_cannot_precede_initial_diagnosis() {
    let mut record = ClinicalRecord::new(RegistryType::Alk);
    record.initial_diagnosis_date = date(2022, 2, 1);
    record.alk_diagnosis_date = date(2022, 1, 1);

    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("ALK confirmation date"));

    record.alk_diagnosis_date = date(2022, 3, 1);
    assert!(validate(&record).is_ok());
}

#[test]
fn alectinib_start_cannot_precede_initial_diagnosis() {
    let mut record = ClinicalRecord::new(RegistryType::Alk);
    record.initial_diagnosis_date = date(2022, 3, 1);
    record.alectinib_start_date = date(2022, 1, 1);

    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("Alectinib start date"));

    record.alectinib_start_date = date(2022, 4, 1);
    assert!(validate(&record).is_ok());
}

#[test]
fn progression_cannot_precede_alectinib_start() {
    let mut record = ClinicalRecord::new(RegistryType::Alk);
    record.alectinib_start_date = date(2022, 3, 1);
    record.progression_date = date(2022, 1, 1);

    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("Progression date"));

    record.progression_date = date(2022, 9, 1);
    assert!(validate(&record).is_ok());
}

#[test]
fn post_alectinib_progression_cannot_precede_therapy_end() {
    let mut record = ClinicalRecord::new(RegistryType::Alk);
    record.alectinib_end_date = date(2022, 3, 1);
    record.after_alectinib_progression_date = date(2022, 1, 1);

    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("Post-alectinib progression date"));

    record.after_alectinib_progression_date = date(2022, 5, 1);
    assert!(validate(&record).is_ok());
}

#[test]
fn metastatic_diagnosis_cannot_precede_initial_diagnosis() {
    let mut record = ClinicalRecord::new(RegistryType::Ros1);
    record.initial_diagnosis_date = date(2022, 3, 1);
    record.metastatic_diagnosis_date = date(2022, 1, 1);

    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("Metastatic phase diagnosis date"));

    record.metastatic_diagnosis_date = date(2022, 6, 1);
    assert!(validate(&record).is_ok());
}

#[test]
fn radical_surgery_cannot_precede_initial_diagnosis() {
    let mut record = ClinicalRecord::new(RegistryType::Ros1);
    record.initial_diagnosis_date = date(2022, 3, 1);
    record.radical_surgery_date = date(2022, 1, 1);

    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("Radical surgery date"));

    record.radical_surgery_date = date(2022, 4, 1);
    assert!(validate(&record).is_ok());
}

#[test]
fn consolidation_end_cannot_precede_chemoradiotherapy_end() {
    let mut record = ClinicalRecord::new(RegistryType::Ros1);
    record.radical_crt_end_date = date(2022, 6, 1);
    record.radical_crt_consolidation_end_date = date(2022, 5, 1);

    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("Consolidation end date"));

    record.radical_crt_consolidation_end_date = date(2022, 9, 1);
    assert!(validate(&record).is_ok());
}

#[test]
fn relapse_cannot_precede_radical_surgery() {
    let mut record = ClinicalRecord::new(RegistryType::Ros1);
    record.radical_surgery_date = date(2022, 6, 1);
    record.relapse_date = date(2022, 5, 1);

    let message = validate(&record).unwrap_err().to_string();
    assert!(message.contains("Relapse date"));
    assert!(message.contains("radical surgery"));

    record.relapse_date = date(2022, 12, 1);
    assert!(validate(&record).is_ok());
}
