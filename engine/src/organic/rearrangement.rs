//! Carbocation rearrangement: hydride shift vs methyl shift vs none.
//!
//! Compares the stability of the carbocation each shift would produce. No
//! step-by-step simulation happens here.

use luma_types::{
    EffectSign, IntermediateKind, RearrangementDecision, SubstituentClass, parse_inductive,
    parse_resonance,
};
use serde::Serialize;

use super::{OrganicError, alpha_hydrogens, electronic, stability};

/// Rank points per substitution step; large enough that electronic
/// adjustments never reorder the canonical ladder.
pub const RANK_WEIGHT: i32 = 100;
pub const DEFAULT_MIN_IMPROVEMENT: i32 = 1;

/// One carbocation centre with its electronic environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CationSite {
    pub class: SubstituentClass,
    pub inductive: EffectSign,
    pub resonance: EffectSign,
    pub alpha_h: u32,
}

impl CationSite {
    #[must_use]
    pub const fn new(class: SubstituentClass) -> Self {
        Self {
            class,
            inductive: EffectSign::None,
            resonance: EffectSign::None,
            alpha_h: 0,
        }
    }

    #[must_use]
    pub const fn with_alpha_h(mut self, alpha_h: u32) -> Self {
        self.alpha_h = alpha_h;
        self
    }

    pub fn from_labels(
        class: &str,
        inductive: &str,
        resonance: &str,
        alpha_h: i64,
    ) -> Result<Self, OrganicError> {
        Ok(Self {
            class: SubstituentClass::parse(class)?,
            inductive: parse_inductive(inductive)?,
            resonance: parse_resonance(resonance)?,
            alpha_h: alpha_hydrogens(alpha_h)?,
        })
    }

    /// `rank * 100 + electronic total`, scored as a carbocation.
    #[must_use]
    pub fn score(&self) -> i32 {
        let kind = IntermediateKind::Carbocation;
        let rank = i32::from(stability::rank(kind, self.class));
        let electronic = electronic::score(kind, self.inductive, self.resonance, self.alpha_h);
        rank * RANK_WEIGHT + electronic.total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RearrangementInputs {
    pub initial: CationSite,
    pub after_hydride: CationSite,
    pub after_methyl: CationSite,
    pub min_improvement: i32,
}

impl RearrangementInputs {
    #[must_use]
    pub const fn new(initial: CationSite, after_hydride: CationSite, after_methyl: CationSite) -> Self {
        Self {
            initial,
            after_hydride,
            after_methyl,
            min_improvement: DEFAULT_MIN_IMPROVEMENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RearrangementOutcome {
    pub decision: RearrangementDecision,
    pub initial_score: i32,
    pub hydride_score: i32,
    pub methyl_score: i32,
    pub hydride_delta: i32,
    pub methyl_delta: i32,
}

impl RearrangementOutcome {
    /// Largest improvement either shift offers over the initial cation.
    #[must_use]
    pub fn best_delta(&self) -> i32 {
        self.hydride_delta.max(self.methyl_delta)
    }
}

/// Decide whether, and how, the carbocation rearranges.
///
/// A shift qualifies when it improves the score by at least
/// `min_improvement`. When both qualify the larger improvement wins and
/// hydride wins ties.
pub fn decide(inputs: &RearrangementInputs) -> Result<RearrangementOutcome, OrganicError> {
    if inputs.min_improvement < 1 {
        return Err(OrganicError::InvalidThreshold(inputs.min_improvement));
    }

    let initial_score = inputs.initial.score();
    let hydride_score = inputs.after_hydride.score();
    let methyl_score = inputs.after_methyl.score();
    let hydride_delta = hydride_score - initial_score;
    let methyl_delta = methyl_score - initial_score;

    let hydride_ok = hydride_delta >= inputs.min_improvement;
    let methyl_ok = methyl_delta >= inputs.min_improvement;

    let decision = match (hydride_ok, methyl_ok) {
        (false, false) => RearrangementDecision::NoRearrangementLikely,
        (true, false) => RearrangementDecision::HydrideShiftPreferred,
        (false, true) => RearrangementDecision::MethylShiftPreferred,
        (true, true) if methyl_delta > hydride_delta => RearrangementDecision::MethylShiftPreferred,
        (true, true) => RearrangementDecision::HydrideShiftPreferred,
    };

    Ok(RearrangementOutcome {
        decision,
        initial_score,
        hydride_score,
        methyl_score,
        hydride_delta,
        methyl_delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn inputs(
        initial: SubstituentClass,
        hydride: SubstituentClass,
        methyl: SubstituentClass,
    ) -> RearrangementInputs {
        RearrangementInputs::new(
            CationSite::new(initial),
            CationSite::new(hydride),
            CationSite::new(methyl),
        )
    }

    #[test]
    fn hydride_to_tertiary_beats_methyl_to_secondary() {
        let outcome = decide(&inputs(
            SubstituentClass::Secondary,
            SubstituentClass::Tertiary,
            SubstituentClass::Secondary,
        ))
        .unwrap();
        assert_eq!(outcome.decision, RearrangementDecision::HydrideShiftPreferred);
        assert_eq!(outcome.hydride_delta, 100);
        assert_eq!(outcome.methyl_delta, 0);
        assert_eq!(outcome.initial_score, 200);
    }

    #[test]
    fn methyl_shift_when_only_methyl_improves() {
        let outcome = decide(&inputs(
            SubstituentClass::Secondary,
            SubstituentClass::Secondary,
            SubstituentClass::Tertiary,
        ))
        .unwrap();
        assert_eq!(outcome.decision, RearrangementDecision::MethylShiftPreferred);
    }

    #[test]
    fn ties_go_to_hydride_and_no_gain_means_no_shift() {
        let tie = decide(&inputs(
            SubstituentClass::Primary,
            SubstituentClass::Tertiary,
            SubstituentClass::Tertiary,
        ))
        .unwrap();
        assert_eq!(tie.decision, RearrangementDecision::HydrideShiftPreferred);

        let none = decide(&inputs(
            SubstituentClass::Tertiary,
            SubstituentClass::Secondary,
            SubstituentClass::Tertiary,
        ))
        .unwrap();
        assert_eq!(none.decision, RearrangementDecision::NoRearrangementLikely);
    }

    #[test]
    fn threshold_must_be_positive() {
        let mut bad = inputs(
            SubstituentClass::Secondary,
            SubstituentClass::Tertiary,
            SubstituentClass::Secondary,
        );
        bad.min_improvement = 0;
        assert_eq!(decide(&bad), Err(OrganicError::InvalidThreshold(0)));
    }

    #[test]
    fn site_labels_are_validated() {
        let site = CationSite::from_labels("2°", "+I", "none", 6).unwrap();
        assert_eq!(site.score(), 207);
        assert_eq!(
            CationSite::from_labels("secondary", "none", "sideways", 0),
            Err(OrganicError::UnknownEffect("sideways".to_string()))
        );
    }

    fn any_class() -> impl Strategy<Value = SubstituentClass> {
        prop::sample::select(SubstituentClass::all().to_vec())
    }

    proptest! {
        #[test]
        fn more_alpha_hydrogens_never_lower_a_score(
            class in any_class(),
            low in 0u32..30,
            extra in 0u32..30,
        ) {
            let fewer = CationSite::new(class).with_alpha_h(low);
            let more = CationSite::new(class).with_alpha_h(low + extra);
            prop_assert!(more.score() >= fewer.score());
        }

        #[test]
        fn extra_hydrogens_flip_only_across_threshold(
            initial in any_class(),
            hydride in any_class(),
            methyl in any_class(),
            base_h in 0u32..20,
            extra in 0u32..20,
        ) {
            let before = RearrangementInputs::new(
                CationSite::new(initial),
                CationSite::new(hydride).with_alpha_h(base_h),
                CationSite::new(methyl),
            );
            let after = RearrangementInputs {
                after_hydride: CationSite::new(hydride).with_alpha_h(base_h + extra),
                ..before
            };
            let first = decide(&before).unwrap();
            let second = decide(&after).unwrap();
            prop_assert!(second.hydride_score >= first.hydride_score);
            if first.decision == RearrangementDecision::NoRearrangementLikely
                && second.decision != RearrangementDecision::NoRearrangementLikely
            {
                prop_assert!(second.best_delta() >= before.min_improvement);
            }
        }
    }
}
