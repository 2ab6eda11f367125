//! Response packet shape, exam clamping and error signals

use luma_engine::contract::{PACKET_VERSION, ResponsePacket};
use luma_engine::governor::KOH_ASSUMPTION;
use luma_engine::{
    AttemptContext, Confidence, Engine, ExamMode, FallbackAnswer, FallbackError,
    FallbackProvider, QuestionContext, Request,
};
use luma_types::ErrorCategory;
use serde_json::Value;

use crate::common::{ask, ask_in};

const KOH_QUESTION: &str = "2-bromopropane with KOH";

struct FixedAnswer;

impl FallbackProvider for FixedAnswer {
    fn answer(
        &self,
        _question: &str,
        _context: &QuestionContext,
    ) -> Result<FallbackAnswer, FallbackError> {
        Ok(FallbackAnswer {
            answer: "Butterscotch".to_string(),
            reason: "Looked it up".to_string(),
        })
    }
}

#[test]
fn packet_serializes_with_every_key() {
    let packet = ask("phenol + Br2 water");
    let json = serde_json::to_value(&packet).unwrap();
    let Value::Object(map) = json else {
        panic!("packet should serialize to an object");
    };
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "answer",
            "assumptions",
            "confidence",
            "error_summary",
            "errors",
            "exam_mode",
            "exam_policy",
            "explainability",
            "explanation_v1",
            "flags",
            "reason",
            "version",
        ]
    );
    assert_eq!(packet.version, PACKET_VERSION);
    assert_eq!(map["exam_mode"], "BOARD");
    let final_line = map["explanation_v1"]["final"].as_str().unwrap();
    assert!(final_line.starts_with("Final Answer: "));
}

#[test]
fn packet_round_trips_through_json() {
    let packet = ask_in(ExamMode::Jee, "Major product of CH3CH2Br with KOH");
    let json = serde_json::to_string(&packet).unwrap();
    let back: ResponsePacket = serde_json::from_str(&json).unwrap();
    assert_eq!(back, packet);
}

#[test]
fn assumptions_are_clamped_per_exam() {
    let board = ask_in(ExamMode::Board, KOH_QUESTION);
    assert!(board.assumptions.is_empty());
    assert!(board.explainability.assumptions.is_empty());

    let neet = ask_in(ExamMode::Neet, KOH_QUESTION);
    assert_eq!(neet.assumptions, [KOH_ASSUMPTION]);
    assert_eq!(neet.exam_policy.max_assumptions, 1);
    assert!(neet.explanation_v1.notes[0].starts_with("Assumptions: Assuming alcoholic KOH"));
}

#[test]
fn exam_tags_follow_the_packaging_mode() {
    let packet = ask_in(ExamMode::Jee, KOH_QUESTION);
    let tags = &packet.explainability.tags;
    assert!(tags.iter().any(|t| t == "EXAM_JEE"));
    assert!(tags.iter().any(|t| t == "ADVANCED_ALLOWED"));
    assert!(!tags.iter().any(|t| t == "NCERT_STRICT"));
    assert!(tags[0].starts_with("SOLVER_"));
    assert_eq!(tags[1], "SUBJECT_CHEMISTRY");
}

#[test]
fn attempt_signals_follow_flag_signals() {
    let attempt = AttemptContext {
        student_answer: Some(String::new()),
        correct_answer: Some("propene".to_string()),
        units_mismatch: true,
        concept_hint: Some("Saytzeff rule".to_string()),
        ..AttemptContext::default()
    };
    let packet = Engine::new()
        .answer(&Request::new(KOH_QUESTION).with_attempt(attempt))
        .unwrap();

    let categories: Vec<ErrorCategory> = packet.errors.iter().map(|s| s.category).collect();
    assert_eq!(
        categories,
        [
            ErrorCategory::ConditionOmission,
            ErrorCategory::UnitMistake,
            ErrorCategory::MisreadQuestion,
            ErrorCategory::ConceptGap,
        ]
    );
    assert_eq!(packet.error_summary.values().sum::<usize>(), 4);
    assert_eq!(packet.errors[3].evidence, "Concept hint: Saytzeff rule");
}

#[test]
fn fallback_packet_explanation() {
    let packet = Engine::new()
        .with_fallback(FixedAnswer)
        .answer(&Request::new("what colour is the sky on mars"))
        .unwrap();
    assert_eq!(packet.confidence, Confidence::Medium);

    let explanation = &packet.explanation_v1;
    assert_eq!(explanation.title, "Explanation (BOARD, short)");
    insta::assert_snapshot!(explanation.steps.join("\n"), @r"
    GOVERNOR: Answer gating from ambiguity flags (inputs: assumptions=0, notes='No ambiguity requiring gating.') → 'FULL'
    SOLVER_DISPATCH: First matching deterministic solver (inputs: concept='UNSUPPORTED (v1)') → 'unsupported'
    ");
    assert_eq!(explanation.final_line, "Final Answer: 'Butterscotch'");
    assert_eq!(
        explanation.notes,
        ["Tags: SOLVER_UNSUPPORTED, SUBJECT_NON_CHEMISTRY, FALLBACK_PROVIDER_ANSWER, EXAM_BOARD, DEPTH_SHORT, NCERT_STRICT"]
    );
}
