//! Solver results and the tagged answer built from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vocab::{EnumKind, EnumParseError, parse_exact};

/// Exam footprint carried by every answer.
pub const EXAM_FOOTPRINT: &str = "NEET/JEE(Main+Adv)";

/// How closely an answer follows the reference syllabus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NcertLevel {
    NcertDirect,
    NcertAligned,
    /// Beyond the syllabus (e.g. benzyne chemistry).
    Advanced,
}

const NCERT_LEVEL_VALUES: &[&str] = &["NCERT_DIRECT", "NCERT_ALIGNED", "ADVANCED"];

impl NcertLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            NcertLevel::NcertDirect => "NCERT_DIRECT",
            NcertLevel::NcertAligned => "NCERT_ALIGNED",
            NcertLevel::Advanced => "ADVANCED",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [NcertLevel] {
        &[
            NcertLevel::NcertDirect,
            NcertLevel::NcertAligned,
            NcertLevel::Advanced,
        ]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        parse_exact(
            EnumKind::NcertLevel,
            raw,
            Self::all(),
            Self::as_str,
            NCERT_LEVEL_VALUES,
        )
    }
}

impl fmt::Display for NcertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Safety {
    High,
    Medium,
}

const SAFETY_VALUES: &[&str] = &["HIGH", "MEDIUM"];

impl Safety {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Safety::High => "HIGH",
            Safety::Medium => "MEDIUM",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Safety] {
        &[Safety::High, Safety::Medium]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        parse_exact(
            EnumKind::Safety,
            raw,
            Self::all(),
            Self::as_str,
            SAFETY_VALUES,
        )
    }
}

impl fmt::Display for Safety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured result returned by a single solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverHit {
    pub reaction: String,
    pub product: String,
    pub notes: String,
    /// Overrides the dispatch entry's common mistake when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_mistake: Option<String>,
}

impl SolverHit {
    #[must_use]
    pub fn new(
        reaction: impl Into<String>,
        product: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            reaction: reaction.into(),
            product: product.into(),
            notes: notes.into(),
            common_mistake: None,
        }
    }

    #[must_use]
    pub fn with_mistake(mut self, mistake: impl Into<String>) -> Self {
        self.common_mistake = Some(mistake.into());
        self
    }
}

/// Five-section answer before exam tags are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerDraft {
    pub understanding: String,
    pub concept: String,
    pub steps: String,
    pub final_answer: String,
    pub exam_tip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerTags {
    pub ncert: NcertLevel,
    pub exam_footprint: String,
    pub safety: Safety,
}

/// A draft plus syllabus tags and the matching solver's common mistake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub understanding: String,
    pub concept: String,
    pub steps: String,
    pub final_answer: String,
    pub exam_tip: String,
    pub common_mistake: String,
    pub tags: AnswerTags,
}

impl AnswerResponse {
    #[must_use]
    pub fn from_draft(
        draft: AnswerDraft,
        ncert: NcertLevel,
        safety: Safety,
        common_mistake: impl Into<String>,
    ) -> Self {
        Self {
            understanding: draft.understanding,
            concept: draft.concept,
            steps: draft.steps,
            final_answer: draft.final_answer,
            exam_tip: draft.exam_tip,
            common_mistake: common_mistake.into(),
            tags: AnswerTags {
                ncert,
                exam_footprint: EXAM_FOOTPRINT.to_string(),
                safety,
            },
        }
    }
}
