//! Organic reasoning engine: stability ranking, electronic effects,
//! mechanism selection and carbocation rearrangement scoring.
//!
//! The typed API ([`stability::rank`], [`mechanism::decide`], ...) is total
//! over its enums. The `*_labels` entry points accept raw strings and fail
//! with [`OrganicError`] when a label is outside its vocabulary.

pub mod electronic;
pub mod infer;
pub mod mechanism;
pub mod reasoning;
pub mod rearrangement;
pub mod stability;

use luma_types::{EnumKind, EnumParseError, SubstituentClass};
use thiserror::Error;

pub use electronic::ElectronicScore;
pub use infer::explain_text;
pub use mechanism::MechanismInputs;
pub use reasoning::{
    ExplainBundle, MechanismExplanation, RearrangementExplanation, explain_mechanism,
    explain_rearrangement,
};
pub use rearrangement::{CationSite, RearrangementInputs, RearrangementOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrganicError {
    #[error("unknown substituent class '{0}'")]
    UnknownClass(String),
    #[error("unknown intermediate '{0}'")]
    UnknownIntermediate(String),
    #[error("unknown electronic effect label '{0}'")]
    UnknownEffect(String),
    #[error("alpha-hydrogen count must be non-negative, got {0}")]
    NegativeAlphaHydrogens(i64),
    #[error("mechanism selection needs a primary, secondary or tertiary substrate, got {0}")]
    UnsupportedSubstrate(SubstituentClass),
    #[error("primary substrate with a weak nucleophile has no favored pathway")]
    WeakNucleophilePrimary,
    #[error("min_improvement must be at least 1, got {0}")]
    InvalidThreshold(i32),
    #[error(transparent)]
    Vocabulary(EnumParseError),
}

impl From<EnumParseError> for OrganicError {
    fn from(err: EnumParseError) -> Self {
        match err.kind() {
            EnumKind::SubstituentClass => OrganicError::UnknownClass(err.raw().to_string()),
            EnumKind::IntermediateKind => OrganicError::UnknownIntermediate(err.raw().to_string()),
            EnumKind::InductiveEffect | EnumKind::ResonanceEffect => {
                OrganicError::UnknownEffect(err.raw().to_string())
            }
            _ => OrganicError::Vocabulary(err),
        }
    }
}

/// Validates a caller-supplied alpha-hydrogen count.
pub(crate) fn alpha_hydrogens(raw: i64) -> Result<u32, OrganicError> {
    u32::try_from(raw).map_err(|_| OrganicError::NegativeAlphaHydrogens(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use luma_types::Strength;

    #[test]
    fn parse_errors_map_to_domain_variants() {
        let class = SubstituentClass::parse("vinylic").unwrap_err();
        assert_eq!(
            OrganicError::from(class),
            OrganicError::UnknownClass("vinylic".to_string())
        );

        let strength = Strength::parse("medium").unwrap_err();
        assert!(matches!(
            OrganicError::from(strength),
            OrganicError::Vocabulary(_)
        ));
    }

    #[test]
    fn negative_alpha_hydrogens_rejected() {
        assert_eq!(alpha_hydrogens(3), Ok(3));
        assert_eq!(
            alpha_hydrogens(-1),
            Err(OrganicError::NegativeAlphaHydrogens(-1))
        );
    }
}
