//! Practical organic chemistry: qualitative tests and their observations.

use luma_types::SolverHit;

use crate::solvers::{Question, contains_any};

const LASSAIGNE_N: &str = "Lassaigne’s test for nitrogen: Fuse compound with Na → extract (Lassaigne’s extract) → add FeSO4, boil, acidify → Prussian blue color indicates nitrogen.";
const LASSAIGNE_S: &str = "Lassaigne’s test for sulphur: Sodium fusion converts S → Na2S; add sodium nitroprusside → violet/purple color indicates sulphur (exam standard).";
const LASSAIGNE_X: &str = "Lassaigne’s test for halogens: Sodium fusion converts X → NaX; acidify with HNO3, then add AgNO3 → AgCl (white), AgBr (pale yellow), AgI (yellow) precipitate.";
const LASSAIGNE: &str = "Lassaigne’s (sodium fusion) test is used to detect extra elements like N, S, and halogens in organic compounds.";
const TOLLENS: &str = "Tollens’ test: Aldehydes reduce Tollens’ reagent to give silver mirror; ketones generally do not.";
const FEHLING: &str = "Fehling’s test: Aliphatic aldehydes reduce Fehling’s solution to red Cu2O precipitate; ketones generally do not.";
const IODOFORM: &str = "Iodoform test (I2/NaOH): Yellow precipitate of CHI3 indicates presence of CH3CO– (methyl ketone) or CH3CH(OH)– group (e.g., ethanol/acetaldehyde give positive).";
const BICARBONATE: &str = "Carboxylic acids react with NaHCO3 giving brisk effervescence of CO2 (acid test).";
const FERRIC_CHLORIDE: &str = "Phenols give colored complex with neutral FeCl3 (often violet/blue/green depending on phenol).";
const BROMINE_WATER: &str = "Phenol decolorizes bromine water giving white precipitate of 2,4,6-tribromophenol (exam standard).";
const LUCAS: &str = "Lucas test (conc. HCl + ZnCl2): 3° alcohol → immediate turbidity; 2° → turbidity in few minutes; 1° → no turbidity at room temperature.";
const BAEYER: &str = "Baeyer test (cold dilute alkaline KMnO4): Unsaturation (C=C/C≡C) decolorizes purple KMnO4 with formation of brown MnO2 (exam standard).";
const SCOPE: &str = "Practical Organic v1 supports: Lassaigne’s (N/S/halogens), Tollens/Fehling (aldehydes), iodoform (methyl ketone/ethanol), NaHCO3 (carboxylic acid), FeCl3/bromine water (phenol), Lucas (alcohol class), Baeyer (unsaturation). Ask with a specific test name.";

const EXAM_TIP: &str = "Exam tip: reagent + observation + inference.";

fn sodium_fusion(t: &str) -> &'static str {
    if contains_any(
        t,
        &["halogen", "x test", "chloride", "bromide", "iodide", "agcl", "agbr", "agi"],
    ) {
        LASSAIGNE_X
    } else if contains_any(t, &["nitrogen", "prussian blue"]) {
        LASSAIGNE_N
    } else if contains_any(t, &["sulphur", "sulfur", "nitroprusside"]) {
        LASSAIGNE_S
    } else {
        LASSAIGNE
    }
}

fn phenol_test(t: &str) -> Option<&'static str> {
    if !contains_any(t, &["phenol", "phenolic"]) {
        return None;
    }
    if contains_any(t, &["fecl3", "ferric chloride"]) {
        Some(FERRIC_CHLORIDE)
    } else if t.contains("bromine water") {
        Some(BROMINE_WATER)
    } else {
        None
    }
}

fn identify(t: &str) -> Option<&'static str> {
    if contains_any(t, &["lassaigne", "sodium fusion"]) {
        return Some(sodium_fusion(t));
    }
    let effervescence =
        contains_any(t, &["effervescence", "co2"]) && contains_any(t, &["acid", "carboxylic"]);
    let found = if contains_any(t, &["tollens", "silver mirror"]) {
        TOLLENS
    } else if contains_any(t, &["fehling", "cu2o", "red precipitate"]) {
        FEHLING
    } else if contains_any(t, &["iodoform", "chi3", "yellow precipitate"]) {
        IODOFORM
    } else if contains_any(t, &["nahco3", "sodium bicarbonate"]) || effervescence {
        BICARBONATE
    } else if let Some(snippet) = phenol_test(t) {
        snippet
    } else if contains_any(t, &["lucas test", "zncl2", "conc hcl", "turbidity"]) {
        LUCAS
    } else if contains_any(t, &["baeyer", "kmno4", "brown mno2"]) {
        BAEYER
    } else if contains_any(
        t,
        &[
            "practical organic",
            "qualitative analysis",
            "identify functional group",
            "organic test",
            "test for",
        ],
    ) {
        SCOPE
    } else {
        return None;
    };
    Some(found)
}

pub(crate) fn solve(q: &Question<'_>) -> Option<SolverHit> {
    identify(q.lower()).map(|answer| SolverHit::new("", answer, EXAM_TIP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use luma_types::QuestionContext;

    fn solve_text(text: &str) -> Option<SolverHit> {
        let context = QuestionContext::default();
        solve(&Question::new(text, &context))
    }

    #[test]
    fn lassaigne_for_halogens() {
        let hit = solve_text("Lassaigne's test for halogens").unwrap();
        assert_eq!(hit.product, LASSAIGNE_X);
        assert_eq!(hit.notes, EXAM_TIP);
    }

    #[test]
    fn silver_mirror_is_tollens() {
        assert_eq!(solve_text("which gives a silver mirror?").unwrap().product, TOLLENS);
    }

    #[test]
    fn ferric_chloride_needs_phenol() {
        assert_eq!(
            solve_text("phenol with neutral FeCl3").unwrap().product,
            FERRIC_CHLORIDE
        );
        assert!(solve_text("FeCl3 solution colour").is_none());
    }
}
