//! Recover reasoning-engine inputs from question text.
//!
//! Only recognizable substrates produce inputs; everything else is `None`
//! and the answer simply carries no sidecar.

use std::sync::LazyLock;

use luma_types::{Solvent, Strength, SubstituentClass};
use regex::Regex;

use super::mechanism::MechanismInputs;
use super::reasoning::{ExplainBundle, explain_mechanism, explain_rearrangement};
use super::rearrangement::{CationSite, RearrangementInputs};

// Bare "tert" would also match tert-butoxide, a base rather than a substrate.
const TERTIARY_SUBSTRATES: &[&str] = &[
    "tert-butyl",
    "tertiary",
    "3°",
    "2-bromo-2-methylpropane",
    "t-butyl",
    "(ch3)3c",
];
const SECONDARY_SUBSTRATES: &[&str] = &[
    "secondary",
    "2°",
    "2-bromopropane",
    "2-chloropropane",
    "isopropyl",
    "2-bromobutane",
    "sec-",
];
const PRIMARY_SUBSTRATES: &[&str] = &[
    "primary",
    "1°",
    "bromoethane",
    "ethyl bromide",
    "1-bromopropane",
    "chloroethane",
    "1-bromobutane",
    "n-butyl",
    "ch3ch2br",
];
const STRONG_BASES: &[&str] = &[
    "alc koh",
    "alc. koh",
    "alcoholic koh",
    "ethanolic koh",
    "naoet",
    "ethoxide",
    "tert-butoxide",
    "t-buok",
    "nanh2",
    "strong base",
    "dbu",
];
const STRONG_NUCLEOPHILES: &[&str] = &[
    "nacn",
    "kcn",
    "oh-",
    "naoh",
    "aq koh",
    "aqueous koh",
    "nai",
    "azide",
    "strong nucleophile",
    "ethoxide",
    "methoxide",
];
/// Free-standing cyanide ("CN-", "CN−"), not the letters inside a longer word.
static CYANIDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bcn\b").expect("valid cyanide regex"));

const APROTIC_SOLVENTS: &[&str] = &[
    "dmso",
    "dmf",
    "acetone",
    "polar aprotic",
    "acetonitrile",
];
const PROTIC_SOLVENTS: &[&str] = &[
    "water",
    "aq",
    "ethanol",
    "methanol",
    "polar protic",
    "alcohol",
];
const NONPOLAR_SOLVENTS: &[&str] = &["hexane", "benzene", "ccl4", "nonpolar", "non-polar"];
const HEAT_WORDS: &[&str] = &["heat", "hot", "high temperature", "reflux", "δ", "∆"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Substrate class named in the text, most substituted first.
#[must_use]
pub fn substrate_class(lower: &str) -> Option<SubstituentClass> {
    if contains_any(lower, TERTIARY_SUBSTRATES) {
        Some(SubstituentClass::Tertiary)
    } else if contains_any(lower, SECONDARY_SUBSTRATES) {
        Some(SubstituentClass::Secondary)
    } else if contains_any(lower, PRIMARY_SUBSTRATES) {
        Some(SubstituentClass::Primary)
    } else {
        None
    }
}

/// Mechanism inputs for a lower-cased question, if its substrate is known.
#[must_use]
pub fn mechanism_inputs(lower: &str) -> Option<MechanismInputs> {
    let substrate = substrate_class(lower)?;
    let strength = |hit: bool| if hit { Strength::Strong } else { Strength::Weak };
    let solvent = if contains_any(lower, APROTIC_SOLVENTS) {
        Solvent::PolarAprotic
    } else if contains_any(lower, PROTIC_SOLVENTS) {
        Solvent::PolarProtic
    } else if contains_any(lower, NONPOLAR_SOLVENTS) {
        Solvent::Nonpolar
    } else {
        Solvent::PolarProtic
    };

    Some(MechanismInputs {
        substrate,
        nucleophile: strength(
            contains_any(lower, STRONG_NUCLEOPHILES) || CYANIDE.is_match(lower),
        ),
        base: strength(contains_any(lower, STRONG_BASES)),
        solvent,
        hot: contains_any(lower, HEAT_WORDS),
    })
}

/// Named substrates whose carbocation shifts are exam staples.
#[must_use]
pub fn rearrangement_inputs(lower: &str) -> Option<RearrangementInputs> {
    use SubstituentClass::{Primary, Secondary, Tertiary};

    let (initial, hydride, methyl) = if lower.contains("3,3-dimethylbutan-2-ol")
        || lower.contains("3,3-dimethyl-2-butanol")
    {
        (Secondary, Secondary, Tertiary)
    } else if lower.contains("3-methylbutan-2-ol") || lower.contains("3-methyl-2-butanol") {
        (Secondary, Tertiary, Secondary)
    } else if lower.contains("neopentyl") {
        (Primary, Primary, Tertiary)
    } else {
        return None;
    };

    Some(RearrangementInputs::new(
        CationSite::new(initial),
        CationSite::new(hydride),
        CationSite::new(methyl),
    ))
}

/// Build the `explain_v2` sidecar. Decision errors drop that half of the
/// bundle; they never fail the answer.
#[must_use]
pub fn explain_text(lower: &str) -> ExplainBundle {
    let mechanism = mechanism_inputs(lower).and_then(|inputs| {
        explain_mechanism(&inputs)
            .inspect_err(|err| tracing::debug!("mechanism sidecar skipped: {err}"))
            .ok()
    });
    let rearrangement = rearrangement_inputs(lower).and_then(|inputs| {
        explain_rearrangement(&inputs)
            .inspect_err(|err| tracing::debug!("rearrangement sidecar skipped: {err}"))
            .ok()
    });
    ExplainBundle {
        mechanism,
        rearrangement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luma_types::{Mechanism, RearrangementDecision};

    #[test]
    fn tertiary_bromide_in_water_is_sn1() {
        let inputs = mechanism_inputs("2-bromo-2-methylpropane in water").unwrap();
        assert_eq!(inputs.substrate, SubstituentClass::Tertiary);
        assert_eq!(inputs.solvent, Solvent::PolarProtic);
        assert!(!inputs.hot);
        let bundle = explain_text("2-bromo-2-methylpropane in water");
        assert_eq!(
            bundle.mechanism.map(|m| m.mechanism),
            Some(Mechanism::Sn1)
        );
    }

    #[test]
    fn alcoholic_koh_with_heat_is_strong_base() {
        let inputs = mechanism_inputs("2-bromopropane + alcoholic koh, heat").unwrap();
        assert_eq!(inputs.substrate, SubstituentClass::Secondary);
        assert_eq!(inputs.base, Strength::Strong);
        assert!(inputs.hot);
    }

    #[test]
    fn aprotic_solvent_checked_before_protic() {
        let inputs = mechanism_inputs("bromoethane + nacn in dmso").unwrap();
        assert_eq!(inputs.solvent, Solvent::PolarAprotic);
        assert_eq!(inputs.nucleophile, Strength::Strong);
    }

    #[test]
    fn bulky_base_does_not_make_the_substrate_tertiary() {
        for text in ["1-bromopropane + t-buok", "1-bromopropane + potassium tert-butoxide"] {
            let inputs = mechanism_inputs(text).unwrap();
            assert_eq!(inputs.substrate, SubstituentClass::Primary, "{text}");
            assert_eq!(inputs.base, Strength::Strong, "{text}");
            assert_eq!(inputs.nucleophile, Strength::Weak, "{text}");
            assert_eq!(
                explain_text(text).mechanism.map(|m| m.mechanism),
                Some(Mechanism::E2),
                "{text}"
            );
        }
        let named = mechanism_inputs("tert-butyl bromide in water").unwrap();
        assert_eq!(named.substrate, SubstituentClass::Tertiary);
    }

    #[test]
    fn cyanide_needs_a_word_of_its_own() {
        let ion = mechanism_inputs("bromoethane + cn- in dmso").unwrap();
        assert_eq!(ion.nucleophile, Strength::Strong);
        let unicode = mechanism_inputs("bromoethane + cn− in dmso").unwrap();
        assert_eq!(unicode.nucleophile, Strength::Strong);
        let acid = mechanism_inputs("bromoethane + hcn in water").unwrap();
        assert_eq!(acid.nucleophile, Strength::Weak);
    }

    #[test]
    fn unknown_substrate_yields_nothing() {
        assert!(mechanism_inputs("benzene + cl2").is_none());
        assert!(explain_text("benzene + cl2").is_empty());
    }

    #[test]
    fn weak_primary_drops_mechanism_half() {
        let bundle = explain_text("1-bromopropane in water");
        assert!(bundle.mechanism.is_none());
    }

    #[test]
    fn named_alcohols_rearrange() {
        let hydride = explain_text("3-methylbutan-2-ol + conc h2so4, heat");
        assert_eq!(
            hydride.rearrangement.map(|r| r.decision),
            Some(RearrangementDecision::HydrideShiftPreferred)
        );
        let methyl = explain_text("3,3-dimethylbutan-2-ol + conc h2so4");
        assert_eq!(
            methyl.rearrangement.map(|r| r.decision),
            Some(RearrangementDecision::MethylShiftPreferred)
        );
    }
}
