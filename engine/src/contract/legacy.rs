use luma_types::{Confidence, EngineOutput, ExamMode};
use serde_json::{Map, Value};

use crate::ContractError;

/// Shapes older solver callers hand to the packager.
#[derive(Debug, Clone, PartialEq)]
pub enum LegacyOutput {
    /// `(answer, reason)`.
    Pair(Value, String),
    /// A JSON object with at least `answer` and `reason`; `flags` and
    /// `assumptions` are picked up when they are string arrays.
    Record(Map<String, Value>),
    Output(EngineOutput),
}

fn string_list(record: &Map<String, Value>, key: &str) -> Vec<String> {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

impl LegacyOutput {
    /// Upgrade to an [`EngineOutput`].
    ///
    /// Pairs take the BOARD/high defaults; records are stamped with `mode`.
    pub fn into_output(self, mode: ExamMode) -> Result<EngineOutput, ContractError> {
        match self {
            LegacyOutput::Pair(answer, reason) => {
                EngineOutput::from_legacy(answer, reason).map_err(|_| ContractError::EmptyReason)
            }
            LegacyOutput::Record(record) => {
                let answer = record
                    .get("answer")
                    .cloned()
                    .ok_or(ContractError::MissingField("answer"))?;
                let reason = match record.get("reason") {
                    Some(Value::String(reason)) => reason.clone(),
                    Some(other) => other.to_string(),
                    None => return Err(ContractError::MissingField("reason")),
                };
                let output = EngineOutput::new(answer, reason, mode, Confidence::High)
                    .map_err(|_| ContractError::EmptyReason)?;
                Ok(output
                    .with_flags(string_list(&record, "flags"))
                    .with_assumptions(string_list(&record, "assumptions")))
            }
            LegacyOutput::Output(output) => Ok(output),
        }
    }
}
