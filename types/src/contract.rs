//! Records that make up the outbound response contract.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::vocab::{EnumKind, EnumParseError, parse_exact};
use crate::{EmptyStringError, NonEmptyString};

// ============================================================================
// Exam mode & confidence
// ============================================================================

/// Exam syllabus the answer is packaged for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExamMode {
    #[default]
    Board,
    Neet,
    Jee,
}

const EXAM_MODE_VALUES: &[&str] = &["BOARD", "NEET", "JEE"];

impl ExamMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ExamMode::Board => "BOARD",
            ExamMode::Neet => "NEET",
            ExamMode::Jee => "JEE",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [ExamMode] {
        &[ExamMode::Board, ExamMode::Neet, ExamMode::Jee]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        parse_exact(
            EnumKind::ExamMode,
            raw,
            Self::all(),
            Self::as_str,
            EXAM_MODE_VALUES,
        )
    }
}

impl fmt::Display for ExamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse trust indicator carried by every engine output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

const CONFIDENCE_VALUES: &[&str] = &["high", "medium", "low"];

impl Confidence {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Confidence] {
        &[Confidence::High, Confidence::Medium, Confidence::Low]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        parse_exact(
            EnumKind::Confidence,
            raw,
            Self::all(),
            Self::as_str,
            CONFIDENCE_VALUES,
        )
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Exam policy
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationDepth {
    Short,
    Medium,
    Deep,
}

const DEPTH_VALUES: &[&str] = &["short", "medium", "deep"];

impl ExplanationDepth {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ExplanationDepth::Short => "short",
            ExplanationDepth::Medium => "medium",
            ExplanationDepth::Deep => "deep",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [ExplanationDepth] {
        &[
            ExplanationDepth::Short,
            ExplanationDepth::Medium,
            ExplanationDepth::Deep,
        ]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        parse_exact(
            EnumKind::ExplanationDepth,
            raw,
            Self::all(),
            Self::as_str,
            DEPTH_VALUES,
        )
    }

    /// Maximum number of rendered explanation steps.
    #[must_use]
    pub const fn step_limit(self) -> usize {
        match self {
            ExplanationDepth::Short => 2,
            ExplanationDepth::Medium => 4,
            ExplanationDepth::Deep => 8,
        }
    }
}

impl fmt::Display for ExplanationDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static per-exam presentation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamPolicy {
    pub exam_mode: ExamMode,
    pub default_confidence: Confidence,
    pub max_assumptions: usize,
    pub explanation_depth: ExplanationDepth,
    pub strict_ncert: bool,
    pub allow_advanced_context: bool,
}

static BOARD_POLICY: ExamPolicy = ExamPolicy {
    exam_mode: ExamMode::Board,
    default_confidence: Confidence::High,
    max_assumptions: 0,
    explanation_depth: ExplanationDepth::Short,
    strict_ncert: true,
    allow_advanced_context: false,
};

static NEET_POLICY: ExamPolicy = ExamPolicy {
    exam_mode: ExamMode::Neet,
    default_confidence: Confidence::High,
    max_assumptions: 1,
    explanation_depth: ExplanationDepth::Medium,
    strict_ncert: true,
    allow_advanced_context: false,
};

static JEE_POLICY: ExamPolicy = ExamPolicy {
    exam_mode: ExamMode::Jee,
    default_confidence: Confidence::High,
    max_assumptions: 2,
    explanation_depth: ExplanationDepth::Deep,
    strict_ncert: false,
    allow_advanced_context: true,
};

impl ExamPolicy {
    #[must_use]
    pub fn for_mode(mode: ExamMode) -> &'static ExamPolicy {
        match mode {
            ExamMode::Board => &BOARD_POLICY,
            ExamMode::Neet => &NEET_POLICY,
            ExamMode::Jee => &JEE_POLICY,
        }
    }
}

// ============================================================================
// Error taxonomy records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    ConceptGap,
    FormulaMisuse,
    TrendConfusion,
    ConditionOmission,
    UnitMistake,
    SignMistake,
    CalculationError,
    DataRecall,
    AmbiguityExamDependent,
    MisreadQuestion,
}

const ERROR_CATEGORY_VALUES: &[&str] = &[
    "CONCEPT_GAP",
    "FORMULA_MISUSE",
    "TREND_CONFUSION",
    "CONDITION_OMISSION",
    "UNIT_MISTAKE",
    "SIGN_MISTAKE",
    "CALCULATION_ERROR",
    "DATA_RECALL",
    "AMBIGUITY_EXAM_DEPENDENT",
    "MISREAD_QUESTION",
];

impl ErrorCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::ConceptGap => "CONCEPT_GAP",
            ErrorCategory::FormulaMisuse => "FORMULA_MISUSE",
            ErrorCategory::TrendConfusion => "TREND_CONFUSION",
            ErrorCategory::ConditionOmission => "CONDITION_OMISSION",
            ErrorCategory::UnitMistake => "UNIT_MISTAKE",
            ErrorCategory::SignMistake => "SIGN_MISTAKE",
            ErrorCategory::CalculationError => "CALCULATION_ERROR",
            ErrorCategory::DataRecall => "DATA_RECALL",
            ErrorCategory::AmbiguityExamDependent => "AMBIGUITY_EXAM_DEPENDENT",
            ErrorCategory::MisreadQuestion => "MISREAD_QUESTION",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [ErrorCategory] {
        &[
            ErrorCategory::ConceptGap,
            ErrorCategory::FormulaMisuse,
            ErrorCategory::TrendConfusion,
            ErrorCategory::ConditionOmission,
            ErrorCategory::UnitMistake,
            ErrorCategory::SignMistake,
            ErrorCategory::CalculationError,
            ErrorCategory::DataRecall,
            ErrorCategory::AmbiguityExamDependent,
            ErrorCategory::MisreadQuestion,
        ]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        parse_exact(
            EnumKind::ErrorCategory,
            raw,
            Self::all(),
            Self::as_str,
            ERROR_CATEGORY_VALUES,
        )
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

const SEVERITY_VALUES: &[&str] = &["low", "medium", "high"];

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Severity] {
        &[Severity::Low, Severity::Medium, Severity::High]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        parse_exact(
            EnumKind::Severity,
            raw,
            Self::all(),
            Self::as_str,
            SEVERITY_VALUES,
        )
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified risk signal derived from flags or a student attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSignal {
    pub category: ErrorCategory,
    pub evidence: String,
    pub severity: Severity,
}

impl ErrorSignal {
    #[must_use]
    pub fn new(category: ErrorCategory, evidence: impl Into<String>, severity: Severity) -> Self {
        Self {
            category,
            evidence: evidence.into(),
            severity,
        }
    }
}

// ============================================================================
// Explainability
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("rule_id must be a non-empty string")]
    EmptyRuleId,
    #[error("description must be a non-empty string")]
    EmptyDescription,
}

/// Evidence that one rule fired. Append-only: built once, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTrace {
    rule_id: NonEmptyString,
    description: NonEmptyString,
    inputs: BTreeMap<String, Value>,
    outcome: Option<Value>,
}

impl DecisionTrace {
    pub fn new(
        rule_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TraceError> {
        let rule_id = NonEmptyString::new(rule_id).map_err(|_| TraceError::EmptyRuleId)?;
        let description =
            NonEmptyString::new(description).map_err(|_| TraceError::EmptyDescription)?;
        Ok(Self {
            rule_id,
            description,
            inputs: BTreeMap::new(),
            outcome: None,
        })
    }

    #[must_use]
    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inputs.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_outcome(mut self, outcome: impl Into<Value>) -> Self {
        self.outcome = Some(outcome.into());
        self
    }

    #[must_use]
    pub fn rule_id(&self) -> &str {
        self.rule_id.as_str()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Inputs in sorted key order.
    #[must_use]
    pub fn inputs(&self) -> &BTreeMap<String, Value> {
        &self.inputs
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Value> {
        self.outcome.as_ref()
    }
}

/// Side-car evidence attached next to an [`EngineOutput`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplainabilityBundle {
    pub traces: Vec<DecisionTrace>,
    pub tags: Vec<String>,
    pub assumptions: Vec<String>,
}

// ============================================================================
// Engine output
// ============================================================================

/// The canonical wire shape every answer is folded into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOutput {
    pub answer: Value,
    reason: NonEmptyString,
    pub exam_mode: ExamMode,
    pub confidence: Confidence,
    pub flags: Vec<String>,
    pub assumptions: Vec<String>,
}

impl EngineOutput {
    pub fn new(
        answer: impl Into<Value>,
        reason: impl Into<String>,
        exam_mode: ExamMode,
        confidence: Confidence,
    ) -> Result<Self, EmptyStringError> {
        Ok(Self {
            answer: answer.into(),
            reason: NonEmptyString::new(reason)?,
            exam_mode,
            confidence,
            flags: Vec::new(),
            assumptions: Vec::new(),
        })
    }

    /// Wrap a bare `(answer, reason)` pair as a BOARD answer with high confidence.
    pub fn from_legacy(
        answer: impl Into<Value>,
        reason: impl Into<String>,
    ) -> Result<Self, EmptyStringError> {
        Self::new(answer, reason, ExamMode::Board, Confidence::High)
    }

    #[must_use]
    pub fn with_flags(mut self, flags: Vec<String>) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_assumptions(mut self, assumptions: Vec<String>) -> Self {
        self.assumptions = assumptions;
        self
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        self.reason.as_str()
    }
}
