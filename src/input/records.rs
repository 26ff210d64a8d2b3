use serde::Deserialize;
use serde_json::Value;

use crate::input::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreField {
    #[default]
    Total,
    Cpu,
    Gpu,
    Ram,
}

impl ScoreField {
    pub fn json_key(self) -> &'static str {
        match self {
            ScoreField::Total => "totalScore",
            ScoreField::Cpu => "cpuScore",
            ScoreField::Gpu => "gpuScore",
            ScoreField::Ram => "ramScore",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreField::Total => "Total Score",
            ScoreField::Cpu => "CPU Score",
            ScoreField::Gpu => "GPU Score",
            ScoreField::Ram => "RAM Score",
        }
    }
}

/// Score columns are FLOAT in the source store but are sometimes exported as
/// strings. Anything else (bool, object, array, null) is not a score.
pub fn score_from_value(value: &Value) -> Option<f64> {
    let v = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    v.is_finite().then_some(v)
}

/// Fields are kept untyped so a stray type in a column that is not being
/// analysed never rejects the whole file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub serial_num: Option<Value>,
    #[serde(default)]
    pub cpu_score: Option<Value>,
    #[serde(default)]
    pub gpu_score: Option<Value>,
    #[serde(default)]
    pub ram_score: Option<Value>,
    #[serde(default)]
    pub total_score: Option<Value>,
}

impl UserRecord {
    pub fn score(&self, field: ScoreField) -> Option<f64> {
        let value = match field {
            ScoreField::Total => &self.total_score,
            ScoreField::Cpu => &self.cpu_score,
            ScoreField::Gpu => &self.gpu_score,
            ScoreField::Ram => &self.ram_score,
        };
        value.as_ref().and_then(score_from_value)
    }

    /// `serialNum` as text; numeric serials are rendered as written.
    pub fn serial(&self) -> Option<String> {
        match self.serial_num.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

pub fn parse_records(bytes: &[u8]) -> Result<Vec<UserRecord>, InputError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    if !value.is_array() {
        return Err(InputError::Parse(
            "expected a top-level JSON array of records".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

pub fn extract_scores(records: &[UserRecord], field: ScoreField) -> Result<Vec<f64>, InputError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            record.score(field).ok_or_else(|| InputError::MissingField {
                index,
                serial: record.serial(),
                field: field.json_key(),
            })
        })
        .collect()
}
