use luma_types::TraceError;
use thiserror::Error;

/// Errors returned by `Engine::answer`. Input checks run before any solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("question must not be empty")]
    EmptyQuestion,
    #[error("question is too short: {chars} non-whitespace characters, need at least {min}")]
    QuestionTooShort { chars: usize, min: usize },
    #[error("failed to package answer: {0}")]
    Contract(#[from] ContractError),
    #[error(transparent)]
    Structure(#[from] StructureError),
}

/// Failure reported by an external fallback provider.
///
/// The pipeline never surfaces these to callers; a failed provider is
/// treated as unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FallbackError {
    #[error("fallback provider unavailable: {0}")]
    Unavailable(String),
    #[error("fallback provider returned an empty answer")]
    EmptyAnswer,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("reason must be a non-empty string")]
    EmptyReason,
    #[error(transparent)]
    Trace(#[from] TraceError),
    #[error("legacy output record is missing required field '{0}'")]
    MissingField(&'static str),
    #[error("failed to serialize answer payload: {0}")]
    Payload(String),
}

/// A rendered answer section is absent or blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("Missing section: {0}")]
    MissingSection(&'static str),
    #[error("Section '{0}' cannot be empty")]
    EmptySection(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_part() {
        let short = EngineError::QuestionTooShort { chars: 2, min: 3 };
        assert_eq!(
            short.to_string(),
            "question is too short: 2 non-whitespace characters, need at least 3"
        );
        assert_eq!(
            StructureError::EmptySection("exam_tip").to_string(),
            "Section 'exam_tip' cannot be empty"
        );
        assert_eq!(
            ContractError::from(TraceError::EmptyRuleId).to_string(),
            "rule_id must be a non-empty string"
        );
        assert_eq!(
            EngineError::from(ContractError::Payload("key must be a string".to_string()))
                .to_string(),
            "failed to package answer: failed to serialize answer payload: key must be a string"
        );
    }
}
