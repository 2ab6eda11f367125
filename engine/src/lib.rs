//! Deterministic chemistry reasoning engine for Luma.
//!
//! A question flows one way through the crate:
//! [`normalizer`] → [`governor`] → [`solvers`] (optionally calling into
//! [`organic`]) → [`contract`]. [`Engine`] wires the stages together.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod contract;
mod error;
pub mod governor;
pub mod normalizer;
pub mod organic;
mod pipeline;
pub mod solvers;
pub mod subject;

pub use error::{ContractError, EngineError, FallbackError, StructureError};
pub use pipeline::{
    Engine, FallbackAnswer, FallbackProvider, MIN_QUESTION_CHARS, RenderedAnswer, Request,
};

pub use luma_types::{
    AnswerResponse, AttemptContext, Confidence, ContextExamMode, Decision, ExamMode, QuestionContext,
    SyntaxMode,
};
