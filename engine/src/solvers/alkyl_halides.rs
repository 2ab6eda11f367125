//! Alkyl halides: named halide reactions and substitution vs elimination.
//!
//! The generic decision sheet consults [`mechanism::decide`] when the text
//! names a recognizable substrate; a decision error declines the question.

use std::sync::LazyLock;

use luma_types::SolverHit;
use regex::Regex;

use super::{Question, contains_any};
use crate::organic::{OrganicError, infer, mechanism};

static SIMPLE_HALIDES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bc2h5br\b|\bc2h5cl\b|\bch3br\b|\bch3cl\b|\bch3ch2br\b|\bch3ch2cl\b")
        .expect("valid alkyl halide regex")
});

const MECHANISM_WORDS: &[&str] = &["sn1", "sn2", "e1", "e2", "substitution", "elimination"];
const MEDIA: &[&str] = &[
    "aq koh",
    "aqueous koh",
    "alc koh",
    "alcoholic koh",
    "ethanolic koh",
    "dry ether",
    "acetone",
];
const HALOGEN_HINTS: &[&str] = &["br", "cl", "iod", "bromo", "chloro", "iodo", "rx", "r-x", "r–x"];

fn in_scope(t: &str) -> bool {
    contains_any(t, &["alkyl halide", "haloalkane", "halogenoalkane"])
        || contains_any(t, &["wurtz", "finkelstein", "swarts"])
        || contains_any(t, MECHANISM_WORDS)
        || t.contains("dehydrohalogenation")
        || (contains_any(t, MEDIA) && contains_any(t, HALOGEN_HINTS))
        || SIMPLE_HALIDES.is_match(t)
}

fn named_reaction(t: &str) -> Option<SolverHit> {
    if t.contains("finkelstein") || (t.contains("nai") && t.contains("acetone")) {
        return Some(SolverHit::new(
            "Finkelstein reaction (halide exchange)",
            "R-Cl / R-Br + NaI (acetone) → **R-I (alkyl iodide)** + NaCl/NaBr (ppt). ASCII: R-I.",
            "Exam key: acetone used; NaCl/NaBr precipitates driving reaction forward.",
        ));
    }
    if t.contains("swarts") || contains_any(t, &["agf", "sbf3"]) || (t.contains("hf") && t.contains("alkyl")) {
        return Some(SolverHit::new(
            "Swarts reaction (fluorination)",
            "R-Cl / R-Br + AgF (or SbF3) → **R-F (alkyl fluoride)**. ASCII: R-F.",
            "Exam key: Swarts converts alkyl chlorides/bromides to alkyl fluorides using metal fluorides.",
        ));
    }
    if t.contains("wurtz") || (t.contains("ether") && contains_any(t, &["na", "sodium"])) {
        return Some(SolverHit::new(
            "Wurtz reaction (coupling)",
            "2 R-X + 2 Na (dry ether) → **R-R (higher alkane)** + 2 NaX. ASCII: R-R.",
            "Trap: best for symmetric alkanes; mixture forms if two different halides used.",
        ));
    }
    None
}

const SOLVENT_WORDS: &[&str] = &[
    "acetone",
    "dmso",
    "dmf",
    "ethanol",
    "water",
    "aqueous",
    "alcoholic",
    "protic",
    "aprotic",
];
const BROMOETHANE: &[&str] = &["bromoethane", "ethyl bromide", "c2h5br", "ch3ch2br"];

fn cyanide(t: &str) -> Option<SolverHit> {
    if !contains_any(t, &["nacn", "kcn", "cn-", "cyanide"]) {
        return None;
    }
    let hit = if !contains_any(t, SOLVENT_WORDS) {
        SolverHit::new(
            "SN2 substitution (cyanide, solvent unspecified)",
            "Partial: solvent conditions unspecified. In polar aprotic solvent, R-X + CN− → **R-CN (nitrile)**.",
            "CN− favors SN2 in polar aprotic solvents such as acetone/DMF/DMSO; without solvent details the exact product conditions cannot be determined.",
        )
    } else if contains_any(t, BROMOETHANE) {
        SolverHit::new(
            "SN2 substitution (cyanide)",
            "CH3CH2Br + NaCN (acetone) → **CH3CH2CN (propionitrile / ethyl cyanide)** + NaBr.",
            "Exam key: CN− is strong nucleophile; polar aprotic (acetone) favors SN2; nitrile adds one carbon.",
        )
    } else {
        SolverHit::new(
            "SN2 substitution (cyanide)",
            "General: R-X + CN− (polar aprotic) → **R-CN (nitrile)** (SN2).",
            "Trap: CN− gives nitrile (R-C≡N).",
        )
    };
    Some(hit)
}

fn tertiary_named(t: &str) -> bool {
    contains_any(
        t,
        &["tert-butyl bromide", "t-butyl bromide", "2-bromo-2-methylpropane", "(ch3)3cbr"],
    )
}

fn hydroxide(t: &str) -> Option<SolverHit> {
    let hydroxide = contains_any(t, &["koh", "naoh", "oh-"]);
    let aqueous = contains_any(t, &["aq", "aqueous", "water", "h2o"]);
    if hydroxide && aqueous {
        return Some(if tertiary_named(t) {
            SolverHit::new(
                "SN1 substitution (aq. OH−)",
                "Tertiary R-X + aq. KOH/NaOH → **ROH (alcohol)** (SN1).",
                "SN1 possible rearrangement (concept).",
            )
        } else {
            SolverHit::new(
                "Substitution to alcohol (aq. OH−)",
                "R-X + aq. KOH/NaOH → **ROH (alcohol)** (SN2 for 1°, mixed for 2°).",
                "Exam key: aqueous → substitution.",
            )
        });
    }

    let alcoholic_or_hot = contains_any(
        t,
        &["alc koh", "alcoholic koh", "ethanolic koh", "heat", "Δ", "δ", "delta"],
    );
    let base = contains_any(t, &["koh", "naoh", "base", "oh-"]);
    if !(alcoholic_or_hot && base) {
        return None;
    }
    Some(if contains_any(t, &["2-bromopropane", "isopropyl bromide"]) {
        SolverHit::new(
            "E2 elimination (dehydrohalogenation)",
            "2-bromopropane + alcoholic KOH, heat → **propene (alkene)** + KBr + H2O.",
            "Exam key: alc KOH + heat → elimination; alkene major.",
        )
    } else {
        SolverHit::new(
            "E2 elimination (dehydrohalogenation)",
            "R-X + alcoholic KOH (heat) → **alkene** + KX + H2O.",
            "Exam key: alc KOH + heat → elimination (E2).",
        )
    })
}

const DECISION_SHEET: &str = "**SN2:** 1° > 2° (3° no); strong nucleophile; polar aprotic (acetone/DMF/DMSO).  **SN1:** 3° > 2°; polar protic; rearrangements possible.  **E2:** strong base + heat (alc KOH, t-BuOK); Zaitsev major (bulky base → Hofmann).  **E1:** SN1-like + heat gives alkene; rearrangements possible.";

fn decision_sheet(t: &str) -> Result<Option<SolverHit>, OrganicError> {
    if !contains_any(t, MECHANISM_WORDS) {
        return Ok(None);
    }
    let product = match infer::mechanism_inputs(t) {
        Some(inputs) => {
            let favored = mechanism::decide(&inputs)?;
            format!("{DECISION_SHEET}\nFavored here: **{}**.", favored.as_str())
        }
        None => DECISION_SHEET.to_string(),
    };
    Ok(Some(SolverHit::new(
        "SN1 vs SN2 vs E1 vs E2 (decision sheet)",
        product,
        "Key trap: aq OH− → substitution; alc KOH + heat → elimination.",
    )))
}

pub(super) fn solve(q: &Question<'_>) -> Result<Option<SolverHit>, OrganicError> {
    let t = q.lower();
    if !in_scope(t) {
        return Ok(None);
    }
    if let Some(hit) = named_reaction(t)
        .or_else(|| cyanide(t))
        .or_else(|| hydroxide(t))
    {
        return Ok(Some(hit));
    }
    if let Some(hit) = decision_sheet(t)? {
        return Ok(Some(hit));
    }
    Ok(Some(SolverHit::new(
        "Alkyl halides (default exam-safe)",
        "If **aq. KOH** → ROH (substitution). If **alc. KOH + heat** → alkene (elimination). Primary → SN2; tertiary → SN1/E1; strong base → E2.",
        "Give medium + heat in question to remove ambiguity.",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use luma_types::QuestionContext;

    fn solve_text(text: &str) -> Result<Option<SolverHit>, OrganicError> {
        let context = QuestionContext::default();
        solve(&Question::new(text, &context))
    }

    #[test]
    fn finkelstein_by_reagents() {
        let hit = solve_text("bromoethane + NaI in acetone").unwrap().unwrap();
        assert_eq!(hit.reaction, "Finkelstein reaction (halide exchange)");
    }

    #[test]
    fn cyanide_without_solvent_is_partial() {
        let hit = solve_text("CH3CH2Br + KCN").unwrap().unwrap();
        assert!(hit.product.starts_with("Partial"));
    }

    #[test]
    fn alcoholic_koh_with_heat_eliminates() {
        let hit = solve_text("2-bromopropane + alcoholic KOH, heat").unwrap().unwrap();
        assert!(hit.product.contains("propene"));
    }

    #[test]
    fn decision_sheet_names_the_favored_pathway() {
        let hit = solve_text("2-bromo-2-methylpropane in water: SN1 or SN2?")
            .unwrap()
            .unwrap();
        assert!(hit.product.ends_with("Favored here: **SN1**."));
    }

    #[test]
    fn undecidable_substrate_declines() {
        assert_eq!(
            solve_text("1-bromopropane in water: SN1 or SN2?"),
            Err(OrganicError::WeakNucleophilePrimary)
        );
    }

    #[test]
    fn unrelated_text_is_out_of_scope() {
        assert_eq!(solve_text("benzaldehyde + HCN"), Ok(None));
    }
}
