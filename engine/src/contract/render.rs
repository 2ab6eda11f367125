//! Student-facing explanation rendered only from packet metadata.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use luma_types::DecisionTrace;

use super::packet::ResponsePacket;

const NOTE_ITEM_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationV1 {
    pub title: String,
    pub steps: Vec<String>,
    #[serde(rename = "final")]
    pub final_line: String,
    pub notes: Vec<String>,
}

/// Strings are single-quoted, everything else is compact JSON.
fn quote(value: &Value) -> String {
    match value {
        Value::String(text) => format!("'{text}'"),
        other => other.to_string(),
    }
}

fn render_trace(trace: &DecisionTrace) -> String {
    let mut line = format!("{}: {}", trace.rule_id(), trace.description());
    if !trace.inputs().is_empty() {
        let inputs: Vec<String> = trace
            .inputs()
            .iter()
            .map(|(key, value)| format!("{key}={}", quote(value)))
            .collect();
        line.push_str(&format!(" (inputs: {})", inputs.join(", ")));
    }
    if let Some(outcome) = trace.outcome() {
        line.push_str(&format!(" → {}", quote(outcome)));
    }
    line
}

/// Build the explanation for a packet. Never changes the answer.
#[must_use]
pub fn render_explanation(packet: &ResponsePacket) -> ExplanationV1 {
    let depth = packet.exam_policy.explanation_depth;
    let traces = &packet.explainability.traces;

    let mut steps: Vec<String> = if traces.is_empty() {
        vec![format!("Reason used: {}", packet.reason)]
    } else {
        traces.iter().map(render_trace).collect()
    };
    steps.truncate(depth.step_limit());

    let mut notes = Vec::new();
    if !packet.assumptions.is_empty() {
        notes.push(format!("Assumptions: {}", packet.assumptions.join("; ")));
    }
    let tags = &packet.explainability.tags;
    if !tags.is_empty() {
        let shown: Vec<&str> = tags
            .iter()
            .take(NOTE_ITEM_LIMIT)
            .map(String::as_str)
            .collect();
        notes.push(format!("Tags: {}", shown.join(", ")));
    }
    if !packet.errors.is_empty() {
        let shown: Vec<&str> = packet
            .errors
            .iter()
            .take(NOTE_ITEM_LIMIT)
            .map(|signal| signal.category.as_str())
            .collect();
        notes.push(format!("Risk signals: {}", shown.join(", ")));
    }

    ExplanationV1 {
        title: format!("Explanation ({}, {depth})", packet.exam_mode),
        steps,
        final_line: format!("Final Answer: {}", quote(&packet.answer)),
        notes,
    }
}
