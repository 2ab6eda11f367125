//! High-value exam rules that run before every other solver.
//!
//! These look at the space-free blob of question plus context so that
//! spacing variants ("acetyl chloride", "acetylchloride") match alike.

use luma_types::SolverHit;

use super::{Question, has_pcc_hint};

const BENZOYL_CHLORIDE: &[&str] = &["c6h5cocl", "benzoylchloride"];
const ACETYL_CHLORIDE: &[&str] = &["ch3cocl", "acetylchloride"];
const WATER: &[&str] = &["h2o", "water"];

pub(super) fn benzoyl_chloride_ammonolysis(q: &Question<'_>) -> Option<SolverHit> {
    (q.blob_has_any(BENZOYL_CHLORIDE) && q.blob_has_any(&["nh3", "ammonia"])).then(|| {
        SolverHit::new(
            "Nucleophilic acyl substitution: C6H5COCl + NH3 → C6H5CONH2 + HCl (HCl is neutralized by excess NH3).",
            "Benzamide (C6H5CONH2) + HCl",
            "Exam tip: acyl chloride + NH3 gives amide (benzamide) and HCl is formed.",
        )
    })
}

pub(super) fn acetyl_chloride_hydrolysis(q: &Question<'_>) -> Option<SolverHit> {
    (q.blob_has_any(ACETYL_CHLORIDE) && q.blob_has_any(WATER)).then(|| {
        SolverHit::new(
            "Hydrolysis: CH3COCl + H2O → CH3COOH + HCl",
            "Acetic acid (CH3COOH) + HCl",
            "Exam tip: acyl chlorides hydrolyse readily with water giving carboxylic acid + HCl.",
        )
    })
}

pub(super) fn benzoyl_chloride_hydrolysis(q: &Question<'_>) -> Option<SolverHit> {
    (q.blob_has_any(BENZOYL_CHLORIDE) && q.blob_has_any(WATER)).then(|| {
        SolverHit::new(
            "Hydrolysis: C6H5COCl + H2O → C6H5COOH + HCl",
            "Benzoic acid (C6H5COOH) + HCl",
            "Exam tip: acyl chlorides hydrolyse readily with water giving carboxylic acid + HCl.",
        )
    })
}

pub(super) fn alkyne_mercuric_hydration(q: &Question<'_>) -> Option<SolverHit> {
    let mercuric = q.blob_has_any(&["hgso4", "mercuricsulfate", "hg2+"]);
    let sulfuric = q.blob_has_any(&["h2so4", "sulfuricacid", "sulphuricacid"]);
    let alkyne = q.blob_has_any(&["alkyne", "c#c", "triplebond", "≡"]);
    (mercuric && sulfuric && alkyne).then(|| {
        SolverHit::new(
            "Addition of water gives an enol intermediate which undergoes keto–enol tautomerization to a ketone.",
            "Final product: ketone (terminal alkyne typically gives a methyl ketone) via tautomerization.",
            "Exam tip: write ketone product (enol → ketone tautomer). Keyword: tautomerization.",
        )
    })
}

const ALKYNE_HINTS: &[&str] = &[
    "alkyne",
    "c#c",
    "c≡c",
    "triplebond",
    "propyne",
    "butyne",
    "ethyne",
    "acetylene",
];
/// Substrates with their own answers further down the chain.
const NAMED_ALKENES: &[&str] = &[
    "propene",
    "propylene",
    "c3h6",
    "ch3ch=ch2",
    "ethene",
    "ethylene",
    "c2h4",
    "ch2=ch2",
];

pub(super) fn hydroboration_oxidation(q: &Question<'_>) -> Option<SolverHit> {
    let borane = q.blob_has_any(&["bh3", "b2h6", "diborane", "borane"]);
    let thf_borane = q.blob_has_any(&["thf"]) && q.blob_has_any(&["bh"]);
    let peroxide = q.blob_has_any(&["h2o2", "hydrogenperoxide"]);
    let base = q.blob_has_any(&["naoh", "koh", "oh-", "alkaline"]);

    let fires = !q.blob_has_any(ALKYNE_HINTS)
        && !q.blob_has_any(NAMED_ALKENES)
        && (borane || thf_borane)
        && peroxide
        && base;
    fires.then(|| {
        SolverHit::new(
            "Step 1: BH3·THF adds syn across C=C (hydroboration).\nStep 2: H2O2/NaOH oxidizes C–B to C–OH.",
            "Alcohol formed with anti-Markovnikov orientation (OH on less substituted carbon).",
            "Exam tip: anti-Markovnikov addition and no rearrangement in hydroboration–oxidation.",
        )
    })
}

const STRONG_OXIDANTS: &[&str] = &[
    "kmno4",
    "k2cr2o7",
    "h2cro4",
    "cro3",
    "jones",
    "dichromate",
    "chromicacid",
];

pub(super) fn strong_oxidant_primary_alcohol(q: &Question<'_>) -> Option<SolverHit> {
    let primary = q.blob_has_any(&["primary", "1deg", "1degree", "rch2oh", "-ch2oh"]);
    let alcohol = q.blob_has_any(&["-ol", "alcohol", "oh"]);
    (q.blob_has_any(STRONG_OXIDANTS) && (primary || alcohol)).then(|| {
        SolverHit::new(
            "Strong oxidants (acidified KMnO4 / K2Cr2O7 / Jones) oxidize 1° alcohols to carboxylic acids (via aldehyde).",
            "Primary alcohol → carboxylic acid (RCH2OH → RCOOH).",
            "Exam tip: strong oxidant gives carboxylic acid from 1° alcohol (not aldehyde).",
        )
    })
}

pub(super) fn phenol_bromine_water(q: &Question<'_>) -> Option<SolverHit> {
    let phenol = q.blob_has_any(&["phenol", "c6h5oh", "phoh"]);
    let bromine = q.blob_has_any(&["br2", "bromine"]);
    let water = q.blob_has_any(&["water", "h2o"]);
    (phenol && bromine && water).then(|| {
        SolverHit::new(
            "Phenol is strongly activating; with Br2/H2O it undergoes rapid tribromination at o,p positions.",
            "2,4,6-tribromophenol (white ppt).",
            "Exam tip: Br2 water + phenol → 2,4,6-tribromophenol (tribromo).",
        )
    })
}

pub(super) fn pcc_oxidation(q: &Question<'_>) -> Option<SolverHit> {
    has_pcc_hint(q).then(|| {
        SolverHit::new(
            "PCC oxidizes primary alcohols to aldehydes without over-oxidation to acids.",
            "Primary alcohol → aldehyde (RCH2OH → RCHO). Secondary alcohol → ketone.",
            "Exam tip: PCC gives aldehyde from 1° alcohol; do not write carboxylic acid. PCC.",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use luma_types::QuestionContext;

    fn check(rule: fn(&Question<'_>) -> Option<SolverHit>, text: &str) -> Option<SolverHit> {
        let context = QuestionContext::default();
        rule(&Question::new(text, &context))
    }

    #[test]
    fn acyl_chloride_rules_ignore_spacing() {
        let hit = check(acetyl_chloride_hydrolysis, "Acetyl Chloride + H2O").unwrap();
        assert_eq!(hit.product, "Acetic acid (CH3COOH) + HCl");
        assert!(check(benzoyl_chloride_ammonolysis, "C6H5COCl + NH3").is_some());
        assert!(check(benzoyl_chloride_hydrolysis, "benzoyl chloride + ethanol").is_none());
    }

    #[test]
    fn hydroboration_defers_to_named_substrates_and_alkynes() {
        assert!(check(hydroboration_oxidation, "alkene + BH3/THF then H2O2, NaOH").is_some());
        assert!(check(hydroboration_oxidation, "propene + BH3 then H2O2/NaOH").is_none());
        assert!(check(hydroboration_oxidation, "propyne + BH3 then H2O2/NaOH").is_none());
    }

    #[test]
    fn mercuric_hydration_needs_an_alkyne() {
        assert!(check(alkyne_mercuric_hydration, "terminal alkyne + HgSO4/H2SO4").is_some());
        assert!(check(alkyne_mercuric_hydration, "propene + HgSO4/H2SO4").is_none());
    }

    #[test]
    fn strong_oxidant_goes_to_acid() {
        let hit = check(strong_oxidant_primary_alcohol, "ethanol + acidified K2Cr2O7").unwrap();
        assert!(hit.product.contains("carboxylic acid"));
    }
}
