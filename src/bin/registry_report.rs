//! Validate a file of registry records and print a completion report.
//!
//! Stand-in for the surrounding application: reads a JSON array of clinical
//! records, validates each one, and prints per-record completeness plus
//! per-cohort field completion rates.

use anyhow::{Context, Result};
use itertools::Itertools;
use log::info;
use onco_registry::{ClinicalRecord, RegistryType, aggregate_completion, schema, score, validate};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .context("usage: registry-report <records.json>")?;
    let raw = std::fs::read_to_string(&path).with_context(|| format!("cannot read {path}"))?;
    let records: Vec<ClinicalRecord> =
        serde_json::from_str(&raw).with_context(|| format!("cannot parse records in {path}"))?;

    info!(
        "Loaded {} records from {} (field schema {})",
        records.len(),
        path,
        schema::SCHEMA_VERSION
    );

    for (position, record) in records.iter().enumerate() {
        let label = record
            .patient_code
            .clone()
            .unwrap_or_else(|| format!("record {}", position + 1));
        match validate(record) {
            Ok(()) => {
                let completion = score(record);
                println!(
                    "{label} [{}]: {} of {} fields filled ({:.1}%)",
                    record.registry_type,
                    completion.filled_fields,
                    completion.total_fields,
                    completion.completion_percentage
                );
            }
            Err(violation) => println!("{label} [{}]: INVALID - {violation}", record.registry_type),
        }
    }

    for registry_type in [RegistryType::Alk, RegistryType::Ros1] {
        let cohort: Vec<ClinicalRecord> = records
            .iter()
            .filter(|record| record.registry_type == registry_type)
            .cloned()
            .collect();
        if cohort.is_empty() {
            continue;
        }

        let rates = aggregate_completion(&cohort, schema::report_fields(registry_type));
        println!();
        println!(
            "{registry_type} field completion across {} records:",
            cohort.len()
        );
        for (field, rate) in rates.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
            println!("  {field}: {rate:.1}%");
        }
    }

    Ok(())
}
