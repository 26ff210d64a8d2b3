use std::path::{Path, PathBuf};

pub mod records;
pub mod source;

use records::{ScoreField, UserRecord, extract_scores, parse_records};
use source::{find_input_path, read_input_bytes};

pub const DEFAULT_INPUT: &str = "data/userData.json";

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("record {index}{} has no numeric `{field}` value", serial_suffix(.serial))]
    MissingField {
        index: usize,
        serial: Option<String>,
        field: &'static str,
    },
}

impl From<serde_json::Error> for InputError {
    fn from(value: serde_json::Error) -> Self {
        InputError::Parse(value.to_string())
    }
}

fn serial_suffix(serial: &Option<String>) -> String {
    serial
        .as_ref()
        .map(|s| format!(" (serialNum {s})"))
        .unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct ScoreSet {
    pub path: PathBuf,
    pub field: ScoreField,
    pub n_records: usize,
    pub values: Vec<f64>,
    /// `serialNum` per record, aligned with `values`.
    pub serials: Vec<Option<String>>,
}

pub fn load_scores(path: &Path, field: ScoreField) -> Result<ScoreSet, InputError> {
    let resolved = find_input_path(path)?;
    tracing::info!(path = %resolved.display(), field = field.json_key(), "loading records");

    let bytes = read_input_bytes(&resolved)?;
    let records: Vec<UserRecord> = parse_records(&bytes)?;
    let values = extract_scores(&records, field)?;
    let serials = records.iter().map(UserRecord::serial).collect();

    tracing::debug!(records = records.len(), "decoded records");

    Ok(ScoreSet {
        path: resolved,
        field,
        n_records: records.len(),
        values,
        serials,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
