//! Common domain type definitions
//!
//! This module contains the registry-type tag and the small coded enums the
//! core needs semantics for. All other coded values (histology, TNM stage,
//! fusion variants, ...) stay opaque strings validated against the dictionary
//! service by the surrounding application.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Registry cohort a clinical record belongs to
///
/// The tag selects which field schema and which validation rule set apply.
/// The two cohorts model disjoint clinical pathways and never share
/// registry-specific fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryType {
    /// ALK-positive cohort (systemic targeted therapy pathway)
    #[serde(rename = "ALK")]
    Alk,
    /// ROS1-positive cohort (radical/metastatic staged treatment pathway)
    #[serde(rename = "ROS1")]
    Ros1,
}

impl Default for RegistryType {
    /// Records without an explicit tag belong to the ALK cohort
    fn default() -> Self {
        Self::Alk
    }
}

impl From<&str> for RegistryType {
    fn from(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "ROS1" => Self::Ros1,
            _ => Self::Alk,
        }
    }
}

impl fmt::Display for RegistryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alk => write!(f, "ALK"),
            Self::Ros1 => write!(f, "ROS1"),
        }
    }
}

/// Vital status of a patient at last contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrentStatus {
    /// Patient alive at last contact
    Alive,
    /// Patient deceased
    Deceased,
    /// Patient lost to follow-up
    LostToFollowUp,
    /// Unknown or not recorded
    Unknown,
}

impl From<&str> for CurrentStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "ALIVE" => Self::Alive,
            "DEAD" | "DECEASED" => Self::Deceased,
            "LOST_TO_FOLLOWUP" => Self::LostToFollowUp,
            _ => Self::Unknown,
        }
    }
}
