//! Shared test utilities and fixtures
//!
//! Helpers for driving the engine end to end.

#![allow(dead_code)]

use luma_engine::contract::ResponsePacket;
use luma_engine::{Engine, ExamMode, QuestionContext, Request};

/// Answer with the default engine (BOARD packaging).
pub fn ask(question: &str) -> ResponsePacket {
    Engine::new()
        .answer(&Request::new(question))
        .expect("question should be accepted")
}

/// Answer packaged for a specific exam.
pub fn ask_in(mode: ExamMode, question: &str) -> ResponsePacket {
    Engine::new()
        .with_default_exam_mode(mode)
        .answer(&Request::new(question))
        .expect("question should be accepted")
}

/// Answer with a structured context.
pub fn ask_with(question: &str, context: QuestionContext) -> ResponsePacket {
    Engine::new()
        .answer(&Request::new(question).with_context(context))
        .expect("question should be accepted")
}

/// The `final_answer` section of a deterministic packet.
pub fn final_answer(packet: &ResponsePacket) -> &str {
    packet.answer["final_answer"].as_str().unwrap_or_default()
}

pub fn has_flag(packet: &ResponsePacket, flag: &str) -> bool {
    packet.flags.iter().any(|f| f == flag)
}
