//! Core domain types for Luma.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! The engine, config and CLI crates all share these records.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod answer;
mod contract;
mod governance;
mod organic;
mod question;
mod vocab;

pub use answer::{
    AnswerDraft, AnswerResponse, AnswerTags, EXAM_FOOTPRINT, NcertLevel, Safety, SolverHit,
};
pub use contract::{
    Confidence, DecisionTrace, EngineOutput, ErrorCategory, ErrorSignal, ExamMode, ExamPolicy,
    ExplainabilityBundle, ExplanationDepth, Severity, TraceError,
};
pub use governance::{Decision, GovernanceResult};
pub use organic::{
    EffectSign, IntermediateKind, Mechanism, ReasoningConfidence, RearrangementDecision, Solvent,
    Strength, SubstituentClass, parse_inductive, parse_resonance,
};
pub use question::{
    AmbiguityFlag, AnswerMode, AttemptContext, ContextExamMode, NormalizedInput,
    QuestionContext, SUBJECT_CHEMISTRY, StereoPayload, SyntaxMode,
};
pub use vocab::{EnumKind, EnumParseError};

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// NonEmpty String Types
// ============================================================================

/// A string guaranteed to be non-empty (after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value must not be empty")]
pub struct EmptyStringError;

impl NonEmptyString {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyStringError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyStringError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = EmptyStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = EmptyStringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

impl Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
