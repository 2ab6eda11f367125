use std::collections::BTreeMap;

use luma_types::{
    AttemptContext, Confidence, DecisionTrace, EngineOutput, ErrorCategory, ErrorSignal,
    ExamMode, ExamPolicy, ExplainabilityBundle, Severity,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::explain::build_bundle;
use super::policy::clamp_assumptions;
use super::render::{ExplanationV1, render_explanation};
use super::taxonomy::{infer_from_attempt, map_flags, summarize};

pub const PACKET_VERSION: &str = "chemistry_v1.0";

/// The single flat payload handed to callers, storage and analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePacket {
    pub answer: Value,
    pub reason: String,
    pub exam_mode: ExamMode,
    pub confidence: Confidence,
    pub flags: Vec<String>,
    pub assumptions: Vec<String>,
    pub explainability: ExplainabilityBundle,
    pub exam_policy: ExamPolicy,
    pub errors: Vec<ErrorSignal>,
    pub error_summary: BTreeMap<ErrorCategory, usize>,
    pub explanation_v1: ExplanationV1,
    pub version: String,
}

/// Fold an output, its traces and an optional attempt into a packet.
#[must_use]
pub fn build_packet(
    output: EngineOutput,
    traces: Vec<DecisionTrace>,
    tags: Vec<String>,
    attempt: Option<&AttemptContext>,
) -> ResponsePacket {
    let mode = output.exam_mode;
    let assumptions = clamp_assumptions(mode, &output.assumptions);
    let explainability = build_bundle(traces, tags, mode, &output.assumptions);

    let mut errors = map_flags(&output.flags, Severity::Medium);
    if let Some(attempt) = attempt {
        errors.extend(infer_from_attempt(attempt));
    }
    let error_summary = summarize(&errors);

    let mut packet = ResponsePacket {
        reason: output.reason().to_string(),
        answer: output.answer,
        exam_mode: mode,
        confidence: output.confidence,
        flags: output.flags,
        assumptions,
        explainability,
        exam_policy: *ExamPolicy::for_mode(mode),
        errors,
        error_summary,
        explanation_v1: ExplanationV1::default(),
        version: PACKET_VERSION.to_string(),
    };
    packet.explanation_v1 = render_explanation(&packet);
    packet
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn output(mode: ExamMode) -> EngineOutput {
        EngineOutput::new("ethene", "Dehydration of ethanol", mode, Confidence::High)
            .unwrap()
            .with_flags(vec![
                "KOH_MEDIUM_NOT_SPECIFIED".to_string(),
                "NO_DETERMINISTIC_MATCH".to_string(),
            ])
            .with_assumptions(vec!["one".to_string(), "two".to_string()])
    }

    #[test]
    fn packet_is_flat_and_versioned() {
        let packet = build_packet(output(ExamMode::Neet), Vec::new(), Vec::new(), None);
        let value = serde_json::to_value(&packet).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        for key in [
            "answer",
            "reason",
            "exam_mode",
            "confidence",
            "flags",
            "assumptions",
            "explainability",
            "exam_policy",
            "errors",
            "error_summary",
            "explanation_v1",
            "version",
        ] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(value["version"], json!("chemistry_v1.0"));
        assert_eq!(value["exam_mode"], json!("NEET"));
        assert_eq!(value["exam_policy"]["explanation_depth"], json!("medium"));
        assert_eq!(value["error_summary"], json!({ "CONDITION_OMISSION": 1 }));
    }

    #[test]
    fn assumptions_are_clamped_in_both_places() {
        let packet = build_packet(output(ExamMode::Board), Vec::new(), Vec::new(), None);
        assert!(packet.assumptions.is_empty());
        assert!(packet.explainability.assumptions.is_empty());
        assert_eq!(packet.flags.len(), 2);
    }

    #[test]
    fn attempt_signals_follow_flag_signals() {
        let attempt = AttemptContext {
            sign_mismatch: true,
            ..AttemptContext::default()
        };
        let packet = build_packet(output(ExamMode::Jee), Vec::new(), Vec::new(), Some(&attempt));
        let categories: Vec<ErrorCategory> =
            packet.errors.iter().map(|signal| signal.category).collect();
        assert_eq!(
            categories,
            [ErrorCategory::ConditionOmission, ErrorCategory::SignMistake]
        );
    }
}
