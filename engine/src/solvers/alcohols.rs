//! Alcohols, phenols and ethers.

use luma_types::SolverHit;

use super::{Question, contains_word};

const SULFURIC: &[&str] = &["conc. h2so4", "conc h2so4", "h2so4"];
const DEHYDRATING: &[&str] = &["heat", "170", "dehydration", "alkene"];

fn in_scope(q: &Question<'_>) -> bool {
    q.has_any(&[
        "alcohol",
        "phenol",
        "ether",
        "roh",
        "phoh",
        "williamson",
        "pcc",
        "socl2",
        "pbr3",
        "lucas",
        "dehydration",
        "ethanol",
        "propanol",
        "butanol",
        "anisole",
        "h2so4",
        "kmno4",
        "k2cr2o7",
        "cro3",
        "jones",
        "acidified",
    ])
}

fn is_phenol(q: &Question<'_>) -> bool {
    q.has_any(&["phenol", "phoh", "c6h5oh"])
}

fn is_alcohol(q: &Question<'_>) -> bool {
    q.has_any(&[
        "alcohol",
        "roh",
        "ethanol",
        "propanol",
        "butanol",
        "isopropyl alcohol",
    ])
}

fn is_ether(q: &Question<'_>) -> bool {
    q.has_any(&["ether", "ror", "williamson", "anisole"])
}

pub(super) fn solve(q: &Question<'_>) -> Option<SolverHit> {
    if !in_scope(q) {
        return None;
    }
    let alcohol = is_alcohol(q);
    let dehydrating = q.has_any(SULFURIC) && q.has_any(DEHYDRATING);

    if is_phenol(q) && q.has_any(&["br2", "bromine water", "aqueous br2"]) {
        return Some(SolverHit::new(
            "Bromination of phenol (Br2 water)",
            "Phenol + Br2 (water) → **2,4,6-tribromophenol (white ppt)**.",
            "Exam key: phenol is strongly activating; aqueous Br2 gives 2,4,6 substitution without catalyst.",
        ));
    }
    if q.has_any(&["butan-1-ol", "1-butanol", "butanol", "ch3ch2ch2ch2oh"]) && dehydrating {
        return Some(SolverHit::new(
            "Dehydration of butan-1-ol",
            "But-1-ol + conc. H2SO4/heat → **but-2-ene (major)** + but-1-ene (minor) + H2O.",
            "Major product follows Zaitsev’s rule (more substituted alkene).",
        ));
    }
    let carboxylic = q.has_any(&[
        "cooh",
        "carboxylic acid",
        "acetic acid",
        "ethanoic acid",
        "benzoic acid",
    ]);
    if alcohol && dehydrating && !carboxylic {
        return Some(SolverHit::new(
            "Dehydration of alcohol (elimination)",
            "ROH + conc. H2SO4 (heat) → **alkene** + H2O (dehydration).",
            "Exam key: higher substituted alkene (Zaitsev) usually major; 3° alcohol dehydrates easiest.",
        ));
    }
    if alcohol && q.has_any(&["socl2", "thionyl chloride"]) {
        return Some(SolverHit::new(
            "Alcohol → alkyl chloride (SOCl2)",
            "ROH + SOCl2 → **RCl** + SO2 + HCl.",
            "Exam key: SOCl2 is preferred (gaseous byproducts drive reaction).",
        ));
    }
    if alcohol && q.has("pbr3") {
        return Some(SolverHit::new(
            "Alcohol → alkyl bromide (PBr3)",
            "ROH + PBr3 → **RBr** (substitution).",
            "Exam key: good for 1°/2° alcohols; avoids rearrangement compared to HX in some cases.",
        ));
    }
    let hydrogen_halide = q.has_any(&["hcl", "hbr", "hx"]) || contains_word(q.lower(), "hi");
    if alcohol && hydrogen_halide && q.has_any(&["zncl2", "lucas"]) {
        return Some(SolverHit::new(
            "Lucas reagent (classification)",
            "ROH + conc. HCl/ZnCl2 → **RCl** (rate: 3° fast > 2° > 1° slow).",
            "Exam key: Lucas test distinguishes 1°, 2°, 3° alcohols by turbidity time.",
        ));
    }
    if alcohol && q.has("pcc") {
        return Some(SolverHit::new(
            "Oxidation of alcohol (PCC)",
            "1° alcohol + PCC → **aldehyde** (stops). 2° alcohol + PCC → **ketone**. 3° alcohol → no oxidation (no α-H).",
            "Exam trap: PCC stops at aldehyde for primary alcohol (does not over-oxidize to acid).",
        ));
    }
    let oxidant = q.has_any(&["kmno4", "k2cr2o7", "acidified", "jones", "cro3", "h2so4"]);
    if alcohol && oxidant && q.has_any(&["oxidation", "oxidize", "oxida"]) {
        return Some(SolverHit::new(
            "Oxidation of alcohol (strong oxidants)",
            "1° alcohol + (KMnO4 or K2Cr2O7/H+) → **carboxylic acid**. 2° alcohol → **ketone**. 3° alcohol → generally no oxidation.",
            "Exam key: strong oxidants over-oxidize primary alcohols to acids.",
        ));
    }
    let alkoxide_route = q.has_any(&["ron", "ro-", "alkoxide"])
        && q.has_any(&["rx", "r-x", "alkyl halide", "haloalkane"]);
    if (is_ether(q) && q.has("williamson")) || alkoxide_route {
        return Some(SolverHit::new(
            "Williamson ether synthesis (SN2)",
            "RONa + R'X (1°) → **R–O–R' (ether)** + NaX (SN2).",
            "Exam trap: best with primary halides; tertiary gives elimination.",
        ));
    }
    if is_phenol(q) && q.has_any(&["acidity", "acidic", "pka"]) {
        return Some(SolverHit::new(
            "Phenol acidity (resonance-stabilized phenoxide)",
            "Phenol is **more acidic than alcohols** because phenoxide ion is resonance-stabilized.",
            "Exam key: -I/-M groups on ring affect acidity; EWG increase acidity.",
        ));
    }
    None
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
    fn butanol_dehydration_is_zaitsev() {
        let hit = solve_text("butan-1-ol + conc. H2SO4, heat").unwrap();
        assert!(hit.product.contains("but-2-ene (major)"));
    }

    #[test]
    fn dehydration_skips_esterification_mixtures() {
        let hit = solve_text("ethanol + acetic acid + conc. H2SO4, heat");
        assert!(hit.is_none_or(|hit| !hit.reaction.starts_with("Dehydration")));
    }

    #[test]
    fn thionyl_chloride_gives_alkyl_chloride() {
        let hit = solve_text("ethanol + SOCl2").unwrap();
        assert_eq!(hit.product, "ROH + SOCl2 → **RCl** + SO2 + HCl.");
    }

    #[test]
    fn williamson_by_alkoxide_and_halide() {
        let hit = solve_text("ethanol: sodium ethoxide (alkoxide) + alkyl halide").unwrap();
        assert_eq!(hit.reaction, "Williamson ether synthesis (SN2)");
    }

    #[test]
    fn out_of_scope_is_none() {
        assert!(solve_text("benzene + Cl2 / FeCl3").is_none());
    }
}
