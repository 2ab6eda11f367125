//! Additive electronic-effect score for a reactive centre.

use luma_types::{EffectSign, IntermediateKind, parse_inductive, parse_resonance};
use serde::Serialize;

use super::{OrganicError, alpha_hydrogens};

pub const INDUCTIVE_WEIGHT: i32 = 1;
pub const RESONANCE_WEIGHT: i32 = 2;
/// Hyperconjugation stops counting past this many alpha hydrogens.
pub const MAX_HYPERCONJUGATION: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElectronicScore {
    pub inductive: i32,
    pub resonance: i32,
    pub hyperconjugation: i32,
    pub total: i32,
}

/// Positive totals stabilize the intermediate.
///
/// Electron donation (`+I`, `+R`) stabilizes carbocations and radicals;
/// withdrawal (`-I`, `-R`) stabilizes carbanions. Hyperconjugation only
/// applies to the electron-deficient kinds.
#[must_use]
pub fn score(
    kind: IntermediateKind,
    inductive: EffectSign,
    resonance: EffectSign,
    alpha_h: u32,
) -> ElectronicScore {
    let direction = if kind.is_electron_deficient() { 1 } else { -1 };
    let inductive = direction * inductive.signum() * INDUCTIVE_WEIGHT;
    let resonance = direction * resonance.signum() * RESONANCE_WEIGHT;
    let hyperconjugation = if kind.is_electron_deficient() {
        alpha_h.min(MAX_HYPERCONJUGATION) as i32
    } else {
        0
    };
    ElectronicScore {
        inductive,
        resonance,
        hyperconjugation,
        total: inductive + resonance + hyperconjugation,
    }
}

/// [`score`] over raw labels, e.g. `("carbocation", "+I", "none", 6)`.
pub fn score_labels(
    kind: &str,
    inductive: &str,
    resonance: &str,
    alpha_h: i64,
) -> Result<ElectronicScore, OrganicError> {
    let kind = IntermediateKind::parse(kind)?;
    let inductive = parse_inductive(inductive)?;
    let resonance = parse_resonance(resonance)?;
    let alpha_h = alpha_hydrogens(alpha_h)?;
    Ok(score(kind, inductive, resonance, alpha_h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn donation_stabilizes_carbocation() {
        let s = score(
            IntermediateKind::Carbocation,
            EffectSign::Plus,
            EffectSign::Plus,
            6,
        );
        assert_eq!(
            s,
            ElectronicScore {
                inductive: 1,
                resonance: 2,
                hyperconjugation: 6,
                total: 9,
            }
        );
    }

    #[test]
    fn withdrawal_stabilizes_carbanion_without_hyperconjugation() {
        let s = score(
            IntermediateKind::Carbanion,
            EffectSign::Minus,
            EffectSign::Minus,
            9,
        );
        assert_eq!(s.inductive, 1);
        assert_eq!(s.resonance, 2);
        assert_eq!(s.hyperconjugation, 0);
        assert_eq!(s.total, 3);
    }

    #[test]
    fn hyperconjugation_is_capped() {
        let s = score(IntermediateKind::Radical, EffectSign::None, EffectSign::None, 40);
        assert_eq!(s.hyperconjugation, 18);
    }

    #[test]
    fn labels_are_validated() {
        assert_eq!(
            score_labels("carbocation", "-I", "+M", 0).map(|s| s.total),
            Ok(1)
        );
        assert_eq!(
            score_labels("carbocation", "+X", "none", 0),
            Err(OrganicError::UnknownEffect("+X".to_string()))
        );
        assert_eq!(
            score_labels("radical", "none", "none", -2),
            Err(OrganicError::NegativeAlphaHydrogens(-2))
        );
    }
}
