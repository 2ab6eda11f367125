//! Closed-vocabulary parsing shared by every string-tagged enum.

use std::fmt;

use thiserror::Error;

/// Which vocabulary a parse failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumKind {
    ExamMode,
    ContextExamMode,
    Confidence,
    AnswerMode,
    SyntaxMode,
    AmbiguityFlag,
    Decision,
    NcertLevel,
    Safety,
    ErrorCategory,
    Severity,
    ExplanationDepth,
    IntermediateKind,
    SubstituentClass,
    InductiveEffect,
    ResonanceEffect,
    Strength,
    Solvent,
}

impl EnumKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EnumKind::ExamMode => "exam mode",
            EnumKind::ContextExamMode => "context exam mode",
            EnumKind::Confidence => "confidence",
            EnumKind::AnswerMode => "answer mode",
            EnumKind::SyntaxMode => "syntax mode",
            EnumKind::AmbiguityFlag => "ambiguity flag",
            EnumKind::Decision => "decision",
            EnumKind::NcertLevel => "NCERT level",
            EnumKind::Safety => "safety",
            EnumKind::ErrorCategory => "error category",
            EnumKind::Severity => "severity",
            EnumKind::ExplanationDepth => "explanation depth",
            EnumKind::IntermediateKind => "intermediate",
            EnumKind::SubstituentClass => "substituent class",
            EnumKind::InductiveEffect => "inductive effect",
            EnumKind::ResonanceEffect => "resonance effect",
            EnumKind::Strength => "strength",
            EnumKind::Solvent => "solvent",
        }
    }
}

impl fmt::Display for EnumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} value '{raw}'; expected one of: {expected:?}")]
pub struct EnumParseError {
    kind: EnumKind,
    raw: String,
    expected: &'static [&'static str],
}

impl EnumParseError {
    #[must_use]
    pub fn new(kind: EnumKind, raw: impl Into<String>, expected: &'static [&'static str]) -> Self {
        Self {
            kind,
            raw: raw.into(),
            expected,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EnumKind {
        self.kind
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

/// Case-insensitive lookup of `raw` against the wire spellings of `all`.
pub(crate) fn parse_exact<T: Copy>(
    kind: EnumKind,
    raw: &str,
    all: &'static [T],
    as_str: fn(T) -> &'static str,
    expected: &'static [&'static str],
) -> Result<T, EnumParseError> {
    let trimmed = raw.trim();
    all.iter()
        .copied()
        .find(|candidate| as_str(*candidate).eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| EnumParseError::new(kind, trimmed, expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_message_lists_expected_values() {
        let err = EnumParseError::new(EnumKind::Severity, "huge", &["low", "medium", "high"]);
        assert_eq!(
            err.to_string(),
            "invalid severity value 'huge'; expected one of: [\"low\", \"medium\", \"high\"]"
        );
        assert_eq!(err.kind(), EnumKind::Severity);
        assert_eq!(err.raw(), "huge");
    }
}
