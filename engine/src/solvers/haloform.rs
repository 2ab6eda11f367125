//! Haloform (iodoform) reaction.

use std::sync::LazyLock;

use luma_types::SolverHit;
use regex::Regex;

use super::{Question, contains_any};

static ETHANOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bethanol\b|\bethyl alcohol\b|\bc2h5oh\b").expect("valid ethanol regex")
});
static METHYL_CARBINOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bpropan-2-ol\b|\bisopropyl alcohol\b|\bisopropanol\b|\b2-propanol\b|\bch3chohch3\b")
        .expect("valid methyl carbinol regex")
});
static ACETONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bacetone\b|\bpropanone\b|\bpropan-2-one\b|\b2-propanone\b|\bch3coch3\b")
        .expect("valid acetone regex")
});
static ACETOPHENONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bacetophenone\b|\b1-phenylethanone\b|\bc6h5coch3\b")
        .expect("valid acetophenone regex")
});
static BUTANONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bbutan-2-one\b|\b2-butanone\b|\bmethyl ethyl ketone\b|\bch3coc2h5\b")
        .expect("valid butanone regex")
});

const TRIGGERS: &[&str] = &[
    "haloform",
    "iodoform",
    "chi3",
    "yellow ppt",
    "yellow precipitate",
];
const GENERIC_METHYL_KETONE: &[&str] = &["methyl ketone", "rcoch3", "ch3co–", "ch3co-", "ch3co "];
const REACTION: &str = "Haloform (Iodoform) reaction of methyl ketone";

fn triggered(t: &str) -> bool {
    contains_any(t, TRIGGERS)
        || (contains_any(t, &["i2", "iodine"])
            && contains_any(t, &["naoh", "koh", "alkaline", "alkali"]))
}

fn methyl_secondary_alcohol(t: &str) -> bool {
    METHYL_CARBINOL.is_match(t)
        || (t.contains("secondary alcohol")
            && contains_any(t, &["ch3-ch(oh)", "ch3ch(oh)", "methyl carbinol", "ch3choh"]))
}

pub(super) fn solve(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    if !triggered(t) {
        return None;
    }

    let hit = if ETHANOL.is_match(t) {
        SolverHit::new(
            "Haloform (Iodoform) reaction / Iodoform test",
            "Products: CHI₃ (yellow ppt) + HCOONa (sodium formate).",
            "Ethanol is first oxidized to acetaldehyde, then undergoes haloform. Common trap: writing sodium acetate for ethanol (wrong).",
        )
    } else if methyl_secondary_alcohol(t) {
        SolverHit::new(
            "Iodoform test (alcohol → oxidation → haloform)",
            "Products: CHI₃ (yellow ppt) + corresponding carboxylate salt (RCOO⁻ Na⁺).",
            "Secondary alcohol of type CH₃–CH(OH)–R gives positive iodoform test because it oxidizes to a methyl ketone.",
        )
    } else if ACETONE.is_match(t) {
        SolverHit::new(
            REACTION,
            "Products: CHI₃ (yellow ppt) + CH₃COONa (sodium acetate).",
            "Acetone (CH₃COCH₃) is a classic positive iodoform test substrate.",
        )
    } else if ACETOPHENONE.is_match(t) {
        SolverHit::new(
            REACTION,
            "Products: CHI₃ (yellow ppt) + C₆H₅COONa (sodium benzoate).",
            "In NaOH medium, the acid is present as benzoate salt (exam preference).",
        )
    } else if BUTANONE.is_match(t) {
        SolverHit::new(
            REACTION,
            "Products: CHI₃ (yellow ppt) + CH₃CH₂COONa (sodium propionate).",
            "CH₃CO– group cleavage gives carboxylate of the R-part.",
        )
    } else if contains_any(t, GENERIC_METHYL_KETONE) {
        SolverHit::new(
            REACTION,
            "General: R–CO–CH₃ + I₂/NaOH → CHI₃ (yellow ppt) + RCOONa.",
            "Exam trap: product is carboxylate (RCOONa) in alkaline medium, not free acid.",
        )
    } else {
        SolverHit::new(
            "Haloform (Iodoform) reaction / Iodoform test",
            "✅ Positive: methyl ketones (R–CO–CH₃), ethanol, and secondary alcohols of type CH₃–CH(OH)–R.\n→ gives CHI₃ (yellow ppt) + carboxylate (RCOONa).\n❌ Negative: non-methyl ketones, methanol, tertiary alcohols.",
            "Common mistake: assuming all ketones/alcohols give iodoform; only the above set does.",
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
    fn ethanol_gives_formate_not_acetate() {
        let hit = solve_text("ethanol + I2/NaOH").unwrap();
        assert!(hit.product.contains("HCOONa"));
    }

    #[test]
    fn acetophenone_gives_benzoate() {
        let hit = solve_text("Iodoform reaction of acetophenone").unwrap();
        assert!(hit.product.contains("sodium benzoate"));
    }

    #[test]
    fn needs_iodine_and_base_or_the_name() {
        assert!(solve_text("acetone + NaBH4").is_none());
        assert!(solve_text("which compounds give iodoform test?").is_some());
    }
}
