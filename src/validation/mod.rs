//! Temporal consistency validation
//!
//! A registry-type-polymorphic battery of pairwise date checks over a fully
//! resolved candidate record, plus element-wise checks over the nested
//! therapy-line structures and non-mandatory numeric range checks. The
//! validator is a pure function: it holds no state and performs no I/O.
//!
//! Every check is monotone-soft: it only constrains when both of its
//! operands are present, so a partially entered record always passes the
//! checks its missing fields would participate in. Checks run in a fixed
//! order (common, registry-specific, line structures, ranges) and the first
//! violation is reported, keeping error messages deterministic.

mod lines;
mod rules;

use crate::models::record::ClinicalRecord;
use crate::models::types::RegistryType;
use chrono::NaiveDate;

/// A single user-facing validation failure
///
/// Carries one descriptive message identifying the offending field pair
/// (and, for line structures, the 1-based line index). Violations are
/// recoverable: the caller surfaces them to the user and never retries
/// automatically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// Two record dates are in the wrong order
    #[error("{message}")]
    DateOrder {
        /// Human-readable description of the offending pair
        message: &'static str,
    },

    /// A therapy line holds inconsistent dates
    #[error("{context} line {index}: {message}")]
    TherapyLine {
        /// Which line structure the violation is in
        context: &'static str,
        /// 1-based position of the offending line in encounter order
        index: usize,
        /// Human-readable description of the violated ordering
        message: &'static str,
    },

    /// A numeric value lies outside its plausible range
    #[error("{message}")]
    OutOfRange {
        /// Human-readable description of the bound
        message: &'static str,
    },
}

/// Height must lie within this range in centimeters when present
pub const HEIGHT_RANGE_CM: (f64, f64) = (30.0, 250.0);
/// Weight must lie within this range in kilograms when present
pub const WEIGHT_RANGE_KG: (f64, f64) = (10.0, 300.0);

/// Validate the temporal and structural consistency of a candidate record
///
/// Returns the first violated check; a record with absent dates passes every
/// check those dates would participate in.
pub fn validate(record: &ClinicalRecord) -> Result<(), Violation> {
    check_date_rules(record, rules::COMMON_RULES)?;

    match record.registry_type {
        RegistryType::Alk => check_date_rules(record, rules::ALK_RULES)?,
        RegistryType::Ros1 => {
            check_date_rules(record, rules::ROS1_RULES)?;
            lines::check_metastatic_lines(record)?;
            lines::check_perioperative_lines(record)?;
        }
    }

    check_ranges(record)?;

    log::debug!(
        "record of registry type {} passed validation",
        record.registry_type
    );
    Ok(())
}

/// Whether `earlier <= later` holds, treating absence as passing
pub(crate) fn in_order(earlier: Option<NaiveDate>, later: Option<NaiveDate>) -> bool {
    match (earlier, later) {
        (Some(early), Some(late)) => early <= late,
        _ => true,
    }
}

fn check_date_rules(record: &ClinicalRecord, table: &[rules::DateRule]) -> Result<(), Violation> {
    for rule in table {
        if !in_order((rule.earlier)(record), (rule.later)(record)) {
            return Err(Violation::DateOrder {
                message: rule.message,
            });
        }
    }
    Ok(())
}

fn check_ranges(record: &ClinicalRecord) -> Result<(), Violation> {
    if let Some(height) = record.height {
        if !(HEIGHT_RANGE_CM.0..=HEIGHT_RANGE_CM.1).contains(&height) {
            return Err(Violation::OutOfRange {
                message: "Height must be between 30 and 250 cm",
            });
        }
    }
    if let Some(weight) = record.weight {
        if !(WEIGHT_RANGE_KG.0..=WEIGHT_RANGE_KG.1).contains(&weight) {
            return Err(Violation::OutOfRange {
                message: "Weight must be between 10 and 300 kg",
            });
        }
    }
    Ok(())
}
