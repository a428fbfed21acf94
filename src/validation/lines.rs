//! Element-wise checks over the nested therapy-line structures
//!
//! Each line carries its own dates; violations report the 1-based position
//! of the offending line in encounter order. A record without a line
//! structure, or a line without a date, simply skips the corresponding
//! check.

use crate::models::record::ClinicalRecord;
use crate::validation::{Violation, in_order};

const METASTATIC: &str = "Metastatic therapy";
const PERIOPERATIVE: &str = "Perioperative therapy";

pub(crate) fn check_metastatic_lines(record: &ClinicalRecord) -> Result<(), Violation> {
    let Some(lines) = &record.metastatic_therapy_lines else {
        return Ok(());
    };

    for (position, line) in lines.iter().enumerate() {
        let index = position + 1;
        if !in_order(line.start_date, line.end_date) {
            return Err(Violation::TherapyLine {
                context: METASTATIC,
                index,
                message: "end date is before the start date",
            });
        }
        if !in_order(line.start_date, line.progression_date) {
            return Err(Violation::TherapyLine {
                context: METASTATIC,
                index,
                message: "progression date is before the start date",
            });
        }
        if !in_order(record.initial_diagnosis_date, line.start_date) {
            return Err(Violation::TherapyLine {
                context: METASTATIC,
                index,
                message: "start date is before the initial diagnosis date",
            });
        }
    }
    Ok(())
}

pub(crate) fn check_perioperative_lines(record: &ClinicalRecord) -> Result<(), Violation> {
    let Some(lines) = &record.radical_perioperative_therapy else {
        return Ok(());
    };

    for (position, line) in lines.iter().enumerate() {
        if !in_order(line.start_date, line.end_date) {
            return Err(Violation::TherapyLine {
                context: PERIOPERATIVE,
                index: position + 1,
                message: "end date is before the start date",
            });
        }
    }
    Ok(())
}
