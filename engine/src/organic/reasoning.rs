//! Rule-style justification sentences and confidence labels for the
//! mechanism and rearrangement decisions.
//!
//! Every sentence is derived from the same inputs the decision used.

use luma_types::{
    Mechanism, ReasoningConfidence, RearrangementDecision, Solvent, Strength, SubstituentClass,
};
use serde::Serialize;
use serde_json::{Value, json};

use super::mechanism::{self, MechanismInputs};
use super::rearrangement::{self, RearrangementInputs, RearrangementOutcome};
use super::OrganicError;

// ============================================================================
// Mechanism
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MechanismExplanation {
    pub mechanism: Mechanism,
    pub confidence: ReasoningConfidence,
    pub reasons: Vec<String>,
    pub summary: String,
}

impl MechanismExplanation {
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "type": "mechanism_explain_v2",
            "mechanism": self.mechanism,
            "confidence": self.confidence,
            "reasons": self.reasons,
            "summary": self.summary,
        })
    }
}

pub fn explain_mechanism(inputs: &MechanismInputs) -> Result<MechanismExplanation, OrganicError> {
    let mechanism = mechanism::decide(inputs)?;
    let mut reasons: Vec<&'static str> = Vec::new();

    if inputs.base == Strength::Strong {
        reasons.push("Strong base favors elimination over substitution (E2 preferred).");
    }

    match inputs.solvent {
        Solvent::PolarProtic => reasons.push(
            "Polar protic solvent stabilizes ions and supports carbocation pathways (SN1/E1).",
        ),
        Solvent::PolarAprotic => reasons.push(
            "Polar aprotic solvent enhances nucleophilicity and supports backside attack (SN2).",
        ),
        Solvent::Nonpolar => {}
    }

    match inputs.substrate {
        SubstituentClass::Tertiary => reasons.push(
            "Tertiary substrate is sterically hindered for SN2 and forms more stable carbocations (SN1/E1).",
        ),
        SubstituentClass::Primary => reasons.push(
            "Primary substrate does not form stable carbocation; SN2 is favored with strong nucleophile.",
        ),
        SubstituentClass::Secondary => reasons.push(
            "Secondary substrate is borderline; outcome depends on nucleophile/base strength and solvent.",
        ),
        _ => {}
    }

    if inputs.hot {
        reasons.push(
            "Higher temperature increases entropy contribution and biases elimination over substitution.",
        );
    }

    let (reason, summary) = match mechanism {
        Mechanism::Sn1 => (
            "SN1 favored due to carbocation formation under ionizing conditions.",
            "SN1 selected: carbocation pathway favored under given substrate/solvent conditions.",
        ),
        Mechanism::Sn2 => (
            "SN2 favored due to strong nucleophile and minimal steric hindrance.",
            "SN2 selected: strong nucleophile + suitable solvent favors one-step substitution.",
        ),
        Mechanism::E1 => (
            "E1 favored due to carbocation pathway with elimination bias (often at higher temperature).",
            "E1 selected: carbocation pathway with temperature-driven elimination preference.",
        ),
        Mechanism::E2 => (
            "E2 favored due to concerted elimination with strong base.",
            "E2 selected: strong base drives concerted elimination.",
        ),
    };
    reasons.push(reason);

    Ok(MechanismExplanation {
        mechanism,
        confidence: mechanism_confidence(mechanism, inputs),
        reasons: reasons.into_iter().map(str::to_string).collect(),
        summary: summary.to_string(),
    })
}

fn mechanism_confidence(mechanism: Mechanism, inputs: &MechanismInputs) -> ReasoningConfidence {
    let strong_base = inputs.base == Strength::Strong;
    let textbook_sn2 = mechanism == Mechanism::Sn2
        && inputs.substrate == SubstituentClass::Primary
        && inputs.nucleophile == Strength::Strong
        && inputs.solvent == Solvent::PolarAprotic
        && !strong_base;
    let textbook_sn1 = mechanism == Mechanism::Sn1
        && inputs.substrate == SubstituentClass::Tertiary
        && inputs.nucleophile == Strength::Weak
        && inputs.solvent == Solvent::PolarProtic
        && !strong_base
        && !inputs.hot;

    if textbook_sn2 || textbook_sn1 || (mechanism == Mechanism::E2 && strong_base) {
        ReasoningConfidence::High
    } else if inputs.substrate == SubstituentClass::Secondary
        || (mechanism == Mechanism::E1 && inputs.hot)
    {
        ReasoningConfidence::Medium
    } else {
        ReasoningConfidence::Low
    }
}

// ============================================================================
// Rearrangement
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RearrangementExplanation {
    pub decision: RearrangementDecision,
    pub confidence: ReasoningConfidence,
    pub reasons: Vec<String>,
    pub summary: String,
    pub outcome: RearrangementOutcome,
}

impl RearrangementExplanation {
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "type": "rearrangement_explain_v2",
            "decision": self.decision,
            "confidence": self.confidence,
            "reasons": self.reasons,
            "summary": self.summary,
            "debug": {
                "initial_score": self.outcome.initial_score,
                "hydride_score": self.outcome.hydride_score,
                "methyl_score": self.outcome.methyl_score,
            },
        })
    }
}

pub fn explain_rearrangement(
    inputs: &RearrangementInputs,
) -> Result<RearrangementExplanation, OrganicError> {
    let outcome = rearrangement::decide(inputs)?;

    let (reason, summary) = match outcome.decision {
        RearrangementDecision::HydrideShiftPreferred => (
            "Hydride shift gives the larger stability improvement (or ties are resolved in favor of hydride).",
            "Hydride shift preferred: leads to more stable carbocation.",
        ),
        RearrangementDecision::MethylShiftPreferred => (
            "Methyl shift gives the larger stability improvement compared to hydride shift.",
            "Methyl shift preferred: leads to more stable carbocation.",
        ),
        RearrangementDecision::NoRearrangementLikely => (
            "No shift provides sufficient stability gain; rearrangement is unlikely.",
            "No rearrangement likely: no sufficient stability gain.",
        ),
    };

    let reasons = [
        "Carbocation rearrangement is favored only if it leads to a more stable carbocation.",
        "Decision compares relative stability of possible post-shift carbocations (no step simulation).",
        reason,
    ];

    Ok(RearrangementExplanation {
        decision: outcome.decision,
        confidence: rearrangement_confidence(&outcome),
        reasons: reasons.into_iter().map(str::to_string).collect(),
        summary: summary.to_string(),
        outcome,
    })
}

fn rearrangement_confidence(outcome: &RearrangementOutcome) -> ReasoningConfidence {
    let delta = outcome.best_delta();
    if outcome.decision == RearrangementDecision::NoRearrangementLikely {
        return if delta <= 0 {
            ReasoningConfidence::High
        } else {
            ReasoningConfidence::Medium
        };
    }
    if delta >= rearrangement::RANK_WEIGHT {
        ReasoningConfidence::High
    } else if delta >= 1 {
        ReasoningConfidence::Medium
    } else {
        ReasoningConfidence::Low
    }
}

// ============================================================================
// Sidecar bundle
// ============================================================================

/// Optional mechanism and rearrangement explanations attached to an answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplainBundle {
    pub mechanism: Option<MechanismExplanation>,
    pub rearrangement: Option<RearrangementExplanation>,
}

impl ExplainBundle {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mechanism.is_none() && self.rearrangement.is_none()
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "type": "explain_v2_bundle",
            "mechanism": self.mechanism.as_ref().map(MechanismExplanation::to_json),
            "rearrangement": self.rearrangement.as_ref().map(RearrangementExplanation::to_json),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::organic::rearrangement::CationSite;

    #[test]
    fn textbook_sn1_is_high_confidence() {
        let inputs = MechanismInputs::new(SubstituentClass::Tertiary);
        let explanation = explain_mechanism(&inputs).unwrap();
        assert_eq!(explanation.mechanism, Mechanism::Sn1);
        assert_eq!(explanation.confidence, ReasoningConfidence::High);
        insta::assert_debug_snapshot!(explanation.reasons, @r#"
        [
            "Polar protic solvent stabilizes ions and supports carbocation pathways (SN1/E1).",
            "Tertiary substrate is sterically hindered for SN2 and forms more stable carbocations (SN1/E1).",
            "SN1 favored due to carbocation formation under ionizing conditions.",
        ]
        "#);
    }

    #[test]
    fn strong_base_reason_comes_first() {
        let inputs = MechanismInputs {
            base: Strength::Strong,
            hot: true,
            ..MechanismInputs::new(SubstituentClass::Secondary)
        };
        let explanation = explain_mechanism(&inputs).unwrap();
        assert_eq!(explanation.mechanism, Mechanism::E2);
        assert_eq!(explanation.confidence, ReasoningConfidence::High);
        assert_eq!(
            explanation.reasons.first().map(String::as_str),
            Some("Strong base favors elimination over substitution (E2 preferred).")
        );
        assert_eq!(explanation.reasons.len(), 5);
        assert_eq!(
            explanation.summary,
            "E2 selected: strong base drives concerted elimination."
        );
    }

    #[test]
    fn secondary_substitution_is_medium_confidence() {
        let inputs = MechanismInputs::new(SubstituentClass::Secondary);
        let explanation = explain_mechanism(&inputs).unwrap();
        assert_eq!(explanation.mechanism, Mechanism::Sn1);
        assert_eq!(explanation.confidence, ReasoningConfidence::Medium);
    }

    #[test]
    fn primary_with_protic_solvent_is_low_confidence() {
        let inputs = MechanismInputs {
            nucleophile: Strength::Strong,
            ..MechanismInputs::new(SubstituentClass::Primary)
        };
        let explanation = explain_mechanism(&inputs).unwrap();
        assert_eq!(explanation.mechanism, Mechanism::Sn2);
        assert_eq!(explanation.confidence, ReasoningConfidence::Low);
    }

    #[test]
    fn rearrangement_explanation_carries_scores() {
        let inputs = RearrangementInputs::new(
            CationSite::new(SubstituentClass::Secondary),
            CationSite::new(SubstituentClass::Tertiary),
            CationSite::new(SubstituentClass::Secondary),
        );
        let explanation = explain_rearrangement(&inputs).unwrap();
        assert_eq!(explanation.confidence, ReasoningConfidence::High);
        let json = explanation.to_json();
        assert_eq!(json["decision"], "hydride_shift_preferred");
        assert_eq!(json["confidence"], "high_confidence");
        assert_eq!(json["debug"]["hydride_score"], 300);
        assert_eq!(
            json["summary"],
            "Hydride shift preferred: leads to more stable carbocation."
        );
    }

    #[test]
    fn no_gain_is_confidently_no_rearrangement() {
        let inputs = RearrangementInputs::new(
            CationSite::new(SubstituentClass::Tertiary),
            CationSite::new(SubstituentClass::Secondary),
            CationSite::new(SubstituentClass::Tertiary),
        );
        let explanation = explain_rearrangement(&inputs).unwrap();
        assert_eq!(explanation.decision, RearrangementDecision::NoRearrangementLikely);
        assert_eq!(explanation.confidence, ReasoningConfidence::High);
    }

    #[test]
    fn small_gain_is_medium_confidence() {
        let inputs = RearrangementInputs::new(
            CationSite::new(SubstituentClass::Secondary),
            CationSite::new(SubstituentClass::Secondary).with_alpha_h(3),
            CationSite::new(SubstituentClass::Secondary),
        );
        let explanation = explain_rearrangement(&inputs).unwrap();
        assert_eq!(explanation.decision, RearrangementDecision::HydrideShiftPreferred);
        assert_eq!(explanation.confidence, ReasoningConfidence::Medium);
    }

    #[test]
    fn bundle_json_has_type_tag() {
        let bundle = ExplainBundle::default();
        assert!(bundle.is_empty());
        let json = bundle.to_json();
        assert_eq!(json["type"], "explain_v2_bundle");
        assert!(json["mechanism"].is_null());
    }
}
