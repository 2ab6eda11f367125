//! Amines: basicity, carbylamine, nitro reduction, Gabriel, Hofmann and
//! diazotization.

use luma_types::SolverHit;

use super::Question;

const CONTEXT: &[&str] = &[
    "amine",
    "aniline",
    "nh2",
    "nr2",
    "diazotization",
    "nitrous acid",
    "na no2",
    "carbylamine",
    "isocyanide",
    "gabriel",
    "hofmann",
    "basicity",
    "sncl2",
    "reduction of nitro",
    "nitro to amine",
    "h2/pd",
    "fe/hcl",
    "sn/hcl",
    "c6h5-nh2",
    "c6h5nh3",
];

pub(super) fn solve(q: &Question<'_>) -> Option<SolverHit> {
    if !q.has_any(CONTEXT) {
        return None;
    }

    let chloroform_test = q.has("chcl3") && q.has("koh");
    if q.has_any(&["carbylamine", "isocyanide", "foul smell"]) || chloroform_test {
        return Some(SolverHit::new(
            "Carbylamine test (isocyanide test)",
            "Only **1° amines** give: RNH2 + CHCl3 + alc KOH → **R-NC (isocyanide)** (foul smell).",
            "Exam key: 1° amine only; 2°/3° do NOT give carbylamine test.",
        ));
    }
    if q.has_any(&[
        "basicity",
        "more basic",
        "most basic",
        "least basic",
        "order of basic strength",
        "arrange",
        "pkb",
    ]) {
        return Some(if q.has_any(&["aniline", "aryl", "c6h5nh2", "aromatic amine"]) {
            SolverHit::new(
                "Basicity of amines (aryl vs alkyl)",
                "**Aliphatic amines > NH3 > aniline (aryl amine)** (aniline is less basic due to resonance delocalization of lone pair).",
                "EWG on ring decreases basicity; EDG increases. In water: solvation can affect 1°/2°/3° order.",
            )
        } else {
            SolverHit::new(
                "Basicity of aliphatic amines (aqueous, rule-level)",
                "In water (common exam): **2° > 1° > 3° > NH3** (balance of +I effect and solvation).",
                "Gas phase often follows 3° > 2° > 1° > NH3 (no solvation).",
            )
        });
    }
    let reducing = q.has_any(&["reduction", "reduce", "sn/hcl", "fe/hcl", "sncl2", "h2/pd", "h2/ni"]);
    if q.has_any(&["nitro", "no2"]) && reducing {
        return Some(SolverHit::new(
            "Reduction of nitro compounds to amines",
            "Ar-NO2 (or R-NO2) + reducing agent (Sn/HCl or Fe/HCl or H2/Pd) → **Ar-NH2 / R-NH2 (amine)**.",
            "Exam key: nitro → amine (aniline from nitrobenzene).",
        ));
    }
    if q.has_any(&["gabriel", "phthalimide"]) {
        return Some(SolverHit::new(
            "Gabriel phthalimide synthesis",
            "Phthalimide (K salt) + 1° R-X → N-alkyl phthalimide → hydrolysis → **1° alkyl amine (RNH2)**.",
            "Exam trap: gives primary alkyl amines; not for aryl halides; not for 2°/3° amines.",
        ));
    }
    let bromamide_reagents = q.has("br2") && q.has("naoh") && q.has_any(&["amide", "rconh2"]);
    if q.has_any(&["hofmann", "bromamide"]) || bromamide_reagents {
        return Some(SolverHit::new(
            "Hofmann bromamide (Hofmann rearrangement)",
            "RCONH2 + Br2/NaOH → **RNH2 (1° amine, one carbon less)** + CO2.",
            "Exam key: carbon chain shortens by 1.",
        ));
    }
    let nitrosating = q.has_any(&[
        "diazotization",
        "na no2",
        "nano2",
        "hno2",
        "nitrous acid",
        "0-5",
        "0 to 5",
    ]);
    let aromatic_amine = q.has_any(&["aniline", "aryl amine", "primary aromatic amine"]);
    (nitrosating && aromatic_amine).then(|| {
        SolverHit::new(
            "Diazotization (primary aromatic amine)",
            "ArNH2 + NaNO2/HCl (0–5 °C) → **ArN2+Cl− (diazonium salt)**.",
            "Exam key: keep 0–5 °C; aromatic diazonium is stable at low temperature.",
        )
    })
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
    fn carbylamine_is_primary_only() {
        let hit = solve_text("ethylamine + CHCl3 + alc KOH").unwrap();
        assert_eq!(hit.reaction, "Carbylamine test (isocyanide test)");
    }

    #[test]
    fn aniline_basicity_mentions_resonance() {
        let hit = solve_text("arrange in order of basicity: aniline, methylamine, NH3").unwrap();
        assert!(hit.product.contains("resonance"));
    }

    #[test]
    fn nitrobenzene_reduction_gives_amine() {
        let hit = solve_text("nitrobenzene + Sn/HCl").unwrap();
        assert_eq!(hit.reaction, "Reduction of nitro compounds to amines");
    }

    #[test]
    fn unrelated_text_is_ignored() {
        assert!(solve_text("acetone + I2/NaOH").is_none());
    }
}
