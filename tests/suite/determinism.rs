//! Same input, same bytes

use luma_engine::{Engine, EngineError, ExamMode, Request};
use proptest::prelude::*;

const QUESTIONS: &[&str] = &[
    "phenol + Br2 water",
    "Major product of CH3CH2Br with KOH",
    "Arrange carbocations in order of stability",
    "What isomerism is shown between n-butane and isobutane?",
    "what colour is the sky on mars",
];

fn packet_json(engine: &Engine, question: &str) -> String {
    let packet = engine.answer(&Request::new(question)).unwrap();
    serde_json::to_string(&packet).unwrap()
}

#[test]
fn repeated_answers_are_byte_identical() {
    for mode in ExamMode::all() {
        let engine = Engine::new().with_default_exam_mode(*mode);
        for question in QUESTIONS {
            let first = packet_json(&engine, question);
            let second = packet_json(&Engine::new().with_default_exam_mode(*mode), question);
            assert_eq!(first, second, "{mode} / {question}");
        }
    }
}

#[test]
fn rendered_sections_are_stable() {
    let engine = Engine::new();
    let request = Request::new("primary alcohol + PCC");
    assert_eq!(engine.render(&request).unwrap(), engine.render(&request).unwrap());
}

proptest! {
    #[test]
    fn arbitrary_questions_never_panic(question in "\\PC{0,80}") {
        match Engine::new().answer(&Request::new(question)) {
            Ok(packet) => prop_assert!(!packet.reason.trim().is_empty()),
            Err(err) => prop_assert!(matches!(
                err,
                EngineError::EmptyQuestion | EngineError::QuestionTooShort { .. }
            ), "unexpected error: {:?}", err),
        }
    }
}
