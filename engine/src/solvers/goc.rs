//! General organic chemistry: stability orders and acid/base strength.

use luma_types::{IntermediateKind, SolverHit};

use super::Question;
use crate::organic::stability;

const CONCEPT_MARKERS: &[&str] = &[
    "order of",
    "arrange",
    "increasing",
    "decreasing",
    "compare",
    "which is more",
    "stability",
    "stabilit",
    "acidic strength",
    "acidity",
    "basicity",
    "stronger acid",
    "stronger base",
    "pka",
    "pk a",
    "inductive",
    "resonance",
    "hyperconjugation",
    "carbocation",
    "carbanion",
    "radical",
];
const REACTION_MARKERS: &[&str] = &[
    "->",
    "→",
    "gives",
    "product",
    "complete the reaction",
    "reagent",
    "h2so4",
    "nabh4",
    "lialh4",
];
/// Comparison wording that keeps a reaction-looking question here.
const COMPARISON_MARKERS: &[&str] = &[
    "order of",
    "arrange",
    "compare",
    "stability",
    "acidity",
    "basicity",
];

fn cation_text() -> String {
    format!(
        "**Carbocation stability (most → least):** {}. Resonance-stabilized (benzylic/allylic) usually outrank simple alkyl; hyperconjugation + +I stabilize; -I groups destabilize a carbocation.",
        stability::order_text(IntermediateKind::Carbocation)
    )
}

fn radical_text() -> String {
    format!(
        "**Free-radical stability (most → least):** {}. Resonance stabilizes radicals strongly; hyperconjugation also helps.",
        stability::order_text(IntermediateKind::Radical)
    )
}

const CARBANION_TEXT: &str = "**Carbanion stability (most → least):** benzylic ≈ allylic (resonance-stabilized) > methyl > 1° > 2° > 3°. Alkyl groups (+I) destabilize carbanions; -I/-M groups stabilize.";
const ACIDITY_TEXT: &str = "**Acidic strength (typical, most → least):** carboxylic acid > phenol > alcohol > terminal alkyne > alkene/alkane. Stronger acid = more stable conjugate base; -I/-M groups increase acidity.";
const BASICITY_TEXT: &str = "**Basic strength (typical aqueous trend):** aliphatic amines > NH3 > aniline (aryl amines). Resonance in aniline reduces lone-pair availability; +I increases basicity, -I decreases.";

pub(super) fn solve(q: &Question<'_>) -> Option<SolverHit> {
    if !q.has_any(CONCEPT_MARKERS) {
        return None;
    }
    if q.has_any(REACTION_MARKERS) && !q.has_any(COMPARISON_MARKERS) {
        return None;
    }
    let asks_why = q.has_any(&["why", "reason", "explain"]);

    let hit = if q.has_any(&["carbocation", "carbo cation", "c+", "cation stability"]) {
        SolverHit::new(
            "GOC: Carbocation stability order",
            cation_text(),
            "Exam trap: benzylic/allylic often more stable than 3° due to resonance.",
        )
    } else if q.has_any(&["carbanion", "carbo anion", "c-", "anion stability"]) {
        SolverHit::new(
            "GOC: Carbanion stability order",
            CARBANION_TEXT,
            "Exam trap: alkyl groups destabilize carbanions; resonance / -I stabilizes.",
        )
    } else if q.has_any(&["radical", "free radical", "•", "dot", "homolytic"]) {
        SolverHit::new(
            "GOC: Free-radical stability order",
            radical_text(),
            "Exam trap: benzylic/allylic radicals are strongly resonance-stabilized.",
        )
    } else if q.has_any(&["acidity", "acidic", "stronger acid", "pka", "pk a"]) {
        let mut answer = ACIDITY_TEXT.to_string();
        if asks_why {
            answer.push_str(" Rule: stronger acid ⇔ more stable conjugate base (A⁻).");
        }
        SolverHit::new(
            "GOC: Acidic strength order",
            answer,
            "Common trap: do not compare acidity by just “electronegativity”; use conjugate-base stability.",
        )
    } else if q.has_any(&["basicity", "stronger base", "more basic", "base strength"]) {
        let mut answer = BASICITY_TEXT.to_string();
        if asks_why {
            answer.push_str(" Rule: stronger base ⇔ more available lone pair (less resonance delocalization).");
        }
        SolverHit::new(
            "GOC: Basic strength order",
            answer,
            "Exam trap: aniline is less basic than aliphatic amines due to resonance.",
        )
    } else if q.has("stability") {
        SolverHit::new(
            "GOC: Stability orders (quick sheet)",
            format!("{}\n{}\n{CARBANION_TEXT}", cation_text(), radical_text()),
            "Pick the correct species first: C+ vs radical vs C− (orders are not the same).",
        )
    } else {
        SolverHit::new(
            "GOC: Concept overview (stability + acidity/basicity)",
            [
                cation_text(),
                CARBANION_TEXT.to_string(),
                radical_text(),
                ACIDITY_TEXT.to_string(),
                BASICITY_TEXT.to_string(),
            ]
            .join("\n"),
            "Use resonance first (if present), then inductive effects, then hyperconjugation.",
        )
    };
    Some(hit)
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
    fn carbocation_order_puts_benzylic_first() {
        let hit = solve_text("Arrange carbocations in order of stability").unwrap();
        assert_eq!(hit.reaction, "GOC: Carbocation stability order");
        assert!(
            hit.product
                .contains("benzylic > allylic > 3° > 2° > 1° > methyl")
        );
    }

    #[test]
    fn acidity_why_adds_conjugate_base_rule() {
        let hit = solve_text("Why is phenol higher in acidity than ethanol?").unwrap();
        assert!(hit.product.contains("conjugate base (A⁻)"));
        let plain = solve_text("compare acidity of phenol and ethanol").unwrap();
        assert!(!plain.product.contains("Rule:"));
    }

    #[test]
    fn reaction_questions_are_left_alone() {
        assert!(solve_text("propene + HBr gives which product via carbocation").is_none());
        assert!(solve_text("benzene + Cl2").is_none());
    }

    #[test]
    fn basicity_mentions_aniline() {
        let hit = solve_text("order of basicity: aniline, NH3, methylamine").unwrap();
        assert_eq!(hit.reaction, "GOC: Basic strength order");
    }
}
