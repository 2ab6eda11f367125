//! Inbound question records: caller context and normalized text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::contract::ExamMode;
use crate::vocab::{EnumKind, EnumParseError, parse_exact};

/// Subject constant carried by every normalized input.
pub const SUBJECT_CHEMISTRY: &str = "chemistry";

/// How the question text is phrased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxMode {
    #[default]
    Exam,
    Casual,
}

const SYNTAX_MODE_VALUES: &[&str] = &["exam", "casual"];

impl SyntaxMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SyntaxMode::Exam => "exam",
            SyntaxMode::Casual => "casual",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [SyntaxMode] {
        &[SyntaxMode::Exam, SyntaxMode::Casual]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        parse_exact(
            EnumKind::SyntaxMode,
            raw,
            Self::all(),
            Self::as_str,
            SYNTAX_MODE_VALUES,
        )
    }
}

impl fmt::Display for SyntaxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Ambiguity flags
// ============================================================================

/// Marks wording that under-specifies a condition the answer depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmbiguityFlag {
    MajorProductMissingConditions,
    PossibleSolventMissing,
    KohMediumNotSpecified,
    DehydrationTempNotSpecified,
}

const AMBIGUITY_FLAG_VALUES: &[&str] = &[
    "MAJOR_PRODUCT_MISSING_CONDITIONS",
    "POSSIBLE_SOLVENT_MISSING",
    "KOH_MEDIUM_NOT_SPECIFIED",
    "DEHYDRATION_TEMP_NOT_SPECIFIED",
];

impl AmbiguityFlag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AmbiguityFlag::MajorProductMissingConditions => "MAJOR_PRODUCT_MISSING_CONDITIONS",
            AmbiguityFlag::PossibleSolventMissing => "POSSIBLE_SOLVENT_MISSING",
            AmbiguityFlag::KohMediumNotSpecified => "KOH_MEDIUM_NOT_SPECIFIED",
            AmbiguityFlag::DehydrationTempNotSpecified => "DEHYDRATION_TEMP_NOT_SPECIFIED",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [AmbiguityFlag] {
        &[
            AmbiguityFlag::MajorProductMissingConditions,
            AmbiguityFlag::PossibleSolventMissing,
            AmbiguityFlag::KohMediumNotSpecified,
            AmbiguityFlag::DehydrationTempNotSpecified,
        ]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        parse_exact(
            EnumKind::AmbiguityFlag,
            raw,
            Self::all(),
            Self::as_str,
            AMBIGUITY_FLAG_VALUES,
        )
    }
}

impl fmt::Display for AmbiguityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizer output. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedInput {
    cleaned_text: String,
    mode: SyntaxMode,
    subject: &'static str,
    ambiguity_flags: Vec<AmbiguityFlag>,
}

impl NormalizedInput {
    /// Builds the record, dropping repeated flags while keeping first-seen order.
    #[must_use]
    pub fn new(cleaned_text: String, mode: SyntaxMode, flags: Vec<AmbiguityFlag>) -> Self {
        let mut ambiguity_flags = Vec::with_capacity(flags.len());
        for flag in flags {
            if !ambiguity_flags.contains(&flag) {
                ambiguity_flags.push(flag);
            }
        }
        Self {
            cleaned_text,
            mode,
            subject: SUBJECT_CHEMISTRY,
            ambiguity_flags,
        }
    }

    #[must_use]
    pub fn cleaned_text(&self) -> &str {
        &self.cleaned_text
    }

    #[must_use]
    pub const fn mode(&self) -> SyntaxMode {
        self.mode
    }

    #[must_use]
    pub const fn subject(&self) -> &'static str {
        self.subject
    }

    #[must_use]
    pub fn ambiguity_flags(&self) -> &[AmbiguityFlag] {
        &self.ambiguity_flags
    }

    #[must_use]
    pub fn has_flag(&self, flag: AmbiguityFlag) -> bool {
        self.ambiguity_flags.contains(&flag)
    }
}

// ============================================================================
// Caller context
// ============================================================================

/// Exam mode as supplied by callers; `OTHER` is accepted on input only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContextExamMode {
    Board,
    Neet,
    Jee,
    Other,
}

const CONTEXT_EXAM_MODE_VALUES: &[&str] = &["BOARD", "NEET", "JEE", "OTHER"];

impl ContextExamMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ContextExamMode::Board => "BOARD",
            ContextExamMode::Neet => "NEET",
            ContextExamMode::Jee => "JEE",
            ContextExamMode::Other => "OTHER",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [ContextExamMode] {
        &[
            ContextExamMode::Board,
            ContextExamMode::Neet,
            ContextExamMode::Jee,
            ContextExamMode::Other,
        ]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        parse_exact(
            EnumKind::ContextExamMode,
            raw,
            Self::all(),
            Self::as_str,
            CONTEXT_EXAM_MODE_VALUES,
        )
    }

    /// Packaging mode; `OTHER` is packaged under the board policy.
    #[must_use]
    pub const fn packaging_mode(self) -> ExamMode {
        match self {
            ContextExamMode::Board | ContextExamMode::Other => ExamMode::Board,
            ContextExamMode::Neet => ExamMode::Neet,
            ContextExamMode::Jee => ExamMode::Jee,
        }
    }
}

impl From<ExamMode> for ContextExamMode {
    fn from(mode: ExamMode) -> Self {
        match mode {
            ExamMode::Board => ContextExamMode::Board,
            ExamMode::Neet => ContextExamMode::Neet,
            ExamMode::Jee => ContextExamMode::Jee,
        }
    }
}

impl fmt::Display for ContextExamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMode {
    #[default]
    Lite,
    Tutor,
    Mastery,
}

const ANSWER_MODE_VALUES: &[&str] = &["lite", "tutor", "mastery"];

impl AnswerMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AnswerMode::Lite => "lite",
            AnswerMode::Tutor => "tutor",
            AnswerMode::Mastery => "mastery",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [AnswerMode] {
        &[AnswerMode::Lite, AnswerMode::Tutor, AnswerMode::Mastery]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        parse_exact(
            EnumKind::AnswerMode,
            raw,
            Self::all(),
            Self::as_str,
            ANSWER_MODE_VALUES,
        )
    }
}

impl fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional structured context that accompanies a question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionContext {
    #[serde(alias = "class")]
    pub class_level: Option<String>,
    pub board: Option<String>,
    pub subject: Option<String>,
    pub chapter: Option<String>,
    pub exam_mode: Option<ContextExamMode>,
    pub language: Option<String>,
    pub answer_mode: Option<AnswerMode>,
    pub study_mode: Option<String>,
    /// Stereo descriptors read from a drawn structure upstream.
    pub stereo: Option<StereoPayload>,
}

impl QuestionContext {
    /// Free-text values, in declaration order, used by cross-cutting hints.
    #[must_use]
    pub fn text_values(&self) -> Vec<&str> {
        [
            self.class_level.as_deref(),
            self.board.as_deref(),
            self.subject.as_deref(),
            self.chapter.as_deref(),
            self.language.as_deref(),
            self.study_mode.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|value| !value.trim().is_empty())
        .collect()
    }

    #[must_use]
    pub fn packaging_mode(&self) -> ExamMode {
        self.exam_mode
            .map_or(ExamMode::Board, ContextExamMode::packaging_mode)
    }
}

/// Structured stereochemistry input, keyed by `subtask`.
///
/// Fields stay optional so an incomplete payload can be answered with
/// "insufficient data" instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "subtask", rename_all = "snake_case")]
pub enum StereoPayload {
    #[serde(alias = "r/s", alias = "rs_assignment")]
    Rs {
        #[serde(default)]
        sequence_direction: Option<String>,
        #[serde(default)]
        lowest_priority_is_away: Option<bool>,
        #[serde(default)]
        cip_priorities: Vec<String>,
    },
    #[serde(alias = "e/z", alias = "ez_assignment")]
    Ez {
        #[serde(default)]
        same_side: Option<bool>,
    },
    #[serde(alias = "chiral", alias = "achiral", alias = "meso")]
    Chirality {
        #[serde(default)]
        chiral_centers: u32,
        #[serde(default)]
        plane_of_symmetry: bool,
    },
    #[serde(alias = "optical", alias = "optically_active")]
    OpticalActivity {
        #[serde(default)]
        chiral_centers: u32,
        #[serde(default)]
        plane_of_symmetry: bool,
    },
}

/// A student's attempt, used to infer error signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttemptContext {
    pub student_answer: Option<String>,
    pub correct_answer: Option<String>,
    pub units_mismatch: bool,
    pub sign_mismatch: bool,
    pub computation_mismatch: bool,
    pub concept_hint: Option<String>,
}
