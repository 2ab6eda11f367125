//! Turns ambiguity flags into an answer/partial/refuse decision.

use luma_types::{AmbiguityFlag, Decision, GovernanceResult, NormalizedInput};

pub const CYANIDE_PARTIAL_NOTE: &str = "CN-/NaCN question with missing solvent/conditions; concept is safe but final product may be exam-convention dependent.";
pub const KOH_ASSUMPTION: &str = "Assuming alcoholic KOH (ethanolic medium) when 'KOH' is given without medium, which typically favors elimination in exam settings.";
pub const DEHYDRATION_ASSUMPTION: &str = "Assuming standard dehydration conditions (high temperature) for concentrated H2SO4 unless otherwise specified.";
pub const MAJOR_PRODUCT_ASSUMPTION: &str = "Assuming standard exam conditions where not specified, since 'major product' depends on reaction medium/conditions.";

const ASSUMPTIONS_NOTE: &str = "Ambiguity present; allowed via explicit assumptions.";
const CLEAR_NOTE: &str = "No ambiguity requiring gating.";

/// Decide how a normalized question may be answered. Pure.
///
/// `Decision::Refuse` is never produced by the current rules.
#[must_use]
pub fn decide(input: &NormalizedInput) -> GovernanceResult {
    let text = input.cleaned_text().to_lowercase();

    if input.has_flag(AmbiguityFlag::PossibleSolventMissing)
        && (text.contains("cn") || text.contains("nacn"))
    {
        return GovernanceResult {
            decision: Decision::Partial,
            assumptions: Vec::new(),
            refusal_reason: None,
            notes: CYANIDE_PARTIAL_NOTE.to_string(),
        };
    }

    let mut assumptions = Vec::new();
    if input.has_flag(AmbiguityFlag::KohMediumNotSpecified) {
        assumptions.push(KOH_ASSUMPTION.to_string());
    }
    if input.has_flag(AmbiguityFlag::DehydrationTempNotSpecified) {
        assumptions.push(DEHYDRATION_ASSUMPTION.to_string());
    }
    if input.has_flag(AmbiguityFlag::MajorProductMissingConditions) && assumptions.is_empty() {
        assumptions.push(MAJOR_PRODUCT_ASSUMPTION.to_string());
    }

    let notes = if assumptions.is_empty() {
        CLEAR_NOTE
    } else {
        ASSUMPTIONS_NOTE
    };

    GovernanceResult {
        decision: Decision::Full,
        assumptions,
        refusal_reason: None,
        notes: notes.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luma_types::SyntaxMode;

    fn input(text: &str, flags: Vec<AmbiguityFlag>) -> NormalizedInput {
        NormalizedInput::new(text.to_string(), SyntaxMode::Exam, flags)
    }

    #[test]
    fn no_flags_is_full_without_assumptions() {
        let result = decide(&input("phenol + Br2 water", Vec::new()));
        assert_eq!(result.decision, Decision::Full);
        assert!(result.assumptions.is_empty());
        assert_eq!(result.notes, "No ambiguity requiring gating.");
        assert_eq!(result.refusal_reason, None);
    }

    #[test]
    fn cyanide_without_solvent_is_partial() {
        let result = decide(&input(
            "CH3CH2Br + NaCN",
            vec![AmbiguityFlag::PossibleSolventMissing],
        ));
        assert_eq!(result.decision, Decision::Partial);
        assert!(result.assumptions.is_empty());
        assert_eq!(result.notes, CYANIDE_PARTIAL_NOTE);
    }

    #[test]
    fn major_product_assumption_only_when_nothing_else_applies() {
        let both = decide(&input(
            "major product of 2-bromopropane with KOH",
            vec![
                AmbiguityFlag::MajorProductMissingConditions,
                AmbiguityFlag::KohMediumNotSpecified,
            ],
        ));
        assert_eq!(both.decision, Decision::Full);
        assert_eq!(both.assumptions, [KOH_ASSUMPTION]);
        assert_eq!(both.notes, "Ambiguity present; allowed via explicit assumptions.");

        let alone = decide(&input(
            "major product of this reaction",
            vec![AmbiguityFlag::MajorProductMissingConditions],
        ));
        assert_eq!(alone.assumptions, [MAJOR_PRODUCT_ASSUMPTION]);
    }

    #[test]
    fn koh_then_dehydration_order() {
        let result = decide(&input(
            "KOH then conc H2SO4 with ethanol",
            vec![
                AmbiguityFlag::DehydrationTempNotSpecified,
                AmbiguityFlag::KohMediumNotSpecified,
            ],
        ));
        assert_eq!(result.assumptions, [KOH_ASSUMPTION, DEHYDRATION_ASSUMPTION]);
    }
}
