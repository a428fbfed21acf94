//! Patch-style record updates
//!
//! A patch is a partial JSON object containing only the fields the client
//! touched. Merging it over the previously persisted record produces a fully
//! resolved candidate that the pure validator can judge as a whole; partial
//! diffs are never validated directly. An empty-string date in the patch
//! clears the stored value, because the lenient date coercion maps it to
//! `None` during re-deserialization.

use crate::error::Result;
use crate::models::record::ClinicalRecord;
use serde_json::{Map, Value};

/// Merge a partial update over a previously persisted record
///
/// Fields present in the patch replace the stored values; omitted fields
/// fall back to the previous record. The registry type is fixed at record
/// creation: a patch attempting to change it is ignored for that key, since
/// cross-registry migration would orphan registry-specific fields.
pub fn merge_patch(previous: &ClinicalRecord, patch: &Map<String, Value>) -> Result<ClinicalRecord> {
    let mut resolved = serde_json::to_value(previous)?;

    if let Value::Object(fields) = &mut resolved {
        for (key, value) in patch {
            if key == "registry_type" {
                let stored = fields.get(key);
                if stored.is_some() && stored != Some(value) {
                    log::warn!(
                        "patch attempted to change registry_type from {:?} to {value}; keeping stored value",
                        stored
                    );
                    continue;
                }
            }
            log::debug!("patching field {key}");
            fields.insert(key.clone(), value.clone());
        }
    }

    Ok(serde_json::from_value(resolved)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::RegistryType;
    use chrono::NaiveDate;
    use serde_json::json;

    fn patch_of(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test patches are objects"),
        }
    }

    #[test]
    fn test_omitted_fields_fall_back_to_stored_values() {
        let mut previous = ClinicalRecord::new(RegistryType::Alk);
        previous.patient_code = Some("AB-001".to_string());
        previous.height = Some(170.0);

        let patch = patch_of(json!({"weight": 68.5}));
        let merged = merge_patch(&previous, &patch).unwrap();

        assert_eq!(merged.patient_code.as_deref(), Some("AB-001"));
        assert_eq!(merged.height, Some(170.0));
        assert_eq!(merged.weight, Some(68.5));
    }

    #[test]
    fn test_empty_string_clears_a_stored_date() {
        let mut previous = ClinicalRecord::new(RegistryType::Alk);
        previous.birth_date = NaiveDate::from_ymd_opt(1960, 1, 1);

        let patch = patch_of(json!({"birth_date": ""}));
        let merged = merge_patch(&previous, &patch).unwrap();
        assert_eq!(merged.birth_date, None);
    }

    #[test]
    fn test_registry_type_is_not_changed_by_a_patch() {
        let previous = ClinicalRecord::new(RegistryType::Ros1);
        let patch = patch_of(json!({"registry_type": "ALK", "gender": "f"}));
        let merged = merge_patch(&previous, &patch).unwrap();
        assert_eq!(merged.registry_type, RegistryType::Ros1);
        assert_eq!(merged.gender.as_deref(), Some("f"));
    }
}
