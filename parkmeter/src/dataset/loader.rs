use std::collections::HashSet;

use parkmeter_core::model::{Bounds, MeterRecord};

use super::DatasetSummary;
use crate::{config::DatasetSource, ParkmeterError};

/// reads the full meter collection once from a file or URL. records
/// repeating an earlier `meterid` are dropped, keeping the first.
pub fn load_records(
    source: &DatasetSource,
    bounds: &Bounds,
) -> Result<Vec<MeterRecord>, ParkmeterError> {
    log::info!("loading meter dataset from {source}");
    let contents = match source {
        DatasetSource::File(path) => {
            std::fs::read_to_string(path).map_err(|e| ParkmeterError::Io {
                path: path.to_str().unwrap_or_default().to_string(),
                source: e,
            })?
        }
        DatasetSource::Url(url) => reqwest::blocking::get(url)?
            .error_for_status()?
            .text()?,
    };
    let records = parse_records(&contents)?;
    let summary = DatasetSummary::new(&records, bounds);
    summary.log();
    Ok(records)
}

/// parses a JSON array of meter objects, de-duplicating by id. rows that
/// are not meter objects or carry no `meterid` are skipped with a warning.
pub fn parse_records(json: &str) -> Result<Vec<MeterRecord>, ParkmeterError> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let n_input = rows.len();
    let records = rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<MeterRecord>(row) {
            Ok(record) if !record.id().trim().is_empty() => Some(record),
            Ok(_) => None,
            Err(e) => {
                log::debug!("skipping malformed meter row: {e}");
                None
            }
        })
        .collect::<Vec<_>>();
    if records.len() < n_input {
        log::warn!(
            "dropped {} malformed meter rows or rows without a meterid",
            n_input - records.len()
        );
    }
    let n_rows = records.len();
    let mut seen: HashSet<String> = HashSet::new();
    let unique = records
        .into_iter()
        .filter(|r| seen.insert(r.id().to_string()))
        .collect::<Vec<_>>();
    if unique.len() < n_rows {
        log::warn!(
            "dropped {} meter rows with a duplicate meterid",
            n_rows - unique.len()
        );
    }
    Ok(unique)
}
