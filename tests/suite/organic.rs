//! Organic reasoning through the public API

use luma_engine::organic::{
    CationSite, MechanismInputs, OrganicError, RearrangementInputs, mechanism, rearrangement,
    stability,
};
use luma_types::{IntermediateKind, Mechanism, RearrangementDecision, Strength, SubstituentClass};

#[test]
fn tertiary_substrate_with_weak_partners_ionizes() {
    let inputs = MechanismInputs::new(SubstituentClass::Tertiary);
    assert_eq!(mechanism::decide(&inputs), Ok(Mechanism::Sn1));

    let hot = MechanismInputs {
        hot: true,
        ..inputs
    };
    assert_eq!(mechanism::decide(&hot), Ok(Mechanism::E1));
}

#[test]
fn strong_base_always_eliminates() {
    let inputs = MechanismInputs {
        base: Strength::Strong,
        ..MechanismInputs::new(SubstituentClass::Primary)
    };
    assert_eq!(mechanism::decide(&inputs), Ok(Mechanism::E2));
}

#[test]
fn mechanism_labels_outside_vocabulary_fail() {
    assert_eq!(
        MechanismInputs::from_labels("vinylic", "weak", "weak", "polar_protic", false),
        Err(OrganicError::UnknownClass("vinylic".to_string()))
    );
}

#[test]
fn secondary_cation_next_to_tertiary_takes_hydride_shift() {
    let inputs = RearrangementInputs::new(
        CationSite::new(SubstituentClass::Secondary),
        CationSite::new(SubstituentClass::Tertiary),
        CationSite::new(SubstituentClass::Secondary),
    );
    let outcome = rearrangement::decide(&inputs).unwrap();
    assert_eq!(
        outcome.decision,
        RearrangementDecision::HydrideShiftPreferred
    );
    assert!(outcome.best_delta() > 0);
}

#[test]
fn no_shift_without_improvement() {
    let site = CationSite::new(SubstituentClass::Tertiary);
    let outcome = rearrangement::decide(&RearrangementInputs::new(site, site, site)).unwrap();
    assert_eq!(
        outcome.decision,
        RearrangementDecision::NoRearrangementLikely
    );
}

#[test]
fn carbocation_stability_ladder() {
    assert_eq!(
        stability::order(IntermediateKind::Carbocation),
        [
            SubstituentClass::Benzylic,
            SubstituentClass::Allylic,
            SubstituentClass::Tertiary,
            SubstituentClass::Secondary,
            SubstituentClass::Primary,
            SubstituentClass::Methyl,
        ]
    );
    assert_eq!(
        stability::order_text(IntermediateKind::Carbocation),
        "benzylic > allylic > 3° > 2° > 1° > methyl"
    );
}

#[test]
fn carbanion_ladder_inverts_alkyl_substitution() {
    assert_eq!(
        stability::order_text(IntermediateKind::Carbanion),
        "benzylic ≈ allylic > methyl > 1° > 2° > 3°"
    );
}
