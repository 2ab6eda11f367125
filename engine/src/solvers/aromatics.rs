//! Benzene chemistry: electrophilic substitution, directing effects,
//! diazonium salts and the named aromatic reactions.

use std::sync::LazyLock;

use luma_types::SolverHit;
use regex::Regex;

use super::{Question, contains_any};

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid aromatics regex")
}

// ============================================================================
// Electrophilic substitution
// ============================================================================

pub(super) fn directing(q: &Question<'_>) -> Option<SolverHit> {
    if !q.has_any(&["nitration", "hno3", "hno₃", "halogenation", "br2"]) {
        return None;
    }
    let nitrating = q.has_any(&["hno3", "nitration"]);

    if q.has_any(&["toluene", "methylbenzene", "c6h5ch3", "ch3"]) && nitrating {
        Some(SolverHit::new(
            "Nitration of toluene (activating, o/p directing)",
            "Ortho- and para-nitrotoluene (major)",
            "CH3 group is electron donating (+I/+H); this activation of the ring directs nitration to the ortho and para positions.",
        ))
    } else if q.has_any(&["nitrobenzene", "c6h5no2"]) {
        Some(SolverHit::new(
            "Nitration of nitrobenzene (deactivating, meta)",
            "Meta-nitrobenzene is the major product",
            "NO2 group is strongly -M/-I; nitrobenzene is deactivated and meta directing.",
        ))
    } else if q.has_any(&["chlorobenzene", "c6h5cl", "c6h5 cl"]) {
        Some(SolverHit::new(
            "Nitration of chlorobenzene (deactivating but o,p directing)",
            "Ortho- and para-nitrochlorobenzene (major)",
            "Cl is deactivating (-I) but has lone pairs for resonance; overall o,p directing though deactivating.",
        ))
    } else if q.has_any(&["anisole", "methoxybenzene", "c6h5och3"])
        && q.has_any(&["br2", "bromination", "halogenation"])
    {
        Some(SolverHit::new(
            "Halogenation of anisole (strongly activating, o/p)",
            "Ortho- and para-bromoanisole (major)",
            "OMe group donates electrons by resonance; anisole is strongly o,p directing.",
        ))
    } else {
        None
    }
}

const ARENES: &[&str] = &[
    "benzene",
    "toluene",
    "methylbenzene",
    "nitrobenzene",
    "aniline",
    "phenyl",
    "c6h5",
    "anisole",
    "chlorobenzene",
    "c6h5ch3",
    "c6h5cl",
];
const FRIEDEL_CRAFTS: &[&str] = &["friedel", "friedel–crafts", "friedel-crafts"];

pub(super) fn simple_eas(q: &Question<'_>) -> Option<SolverHit> {
    if !q.has_any(ARENES) {
        return None;
    }
    let friedel = q.has_any(FRIEDEL_CRAFTS);
    let fc_reagent = friedel || q.has_any(&["ch3cl", "cocl", "acylation", "alkylation"]);

    if q.has_any(&["hno3", "hno₃", "nitric acid", "nitration"]) {
        return Some(SolverHit::new(
            "Nitration of benzene (electrophilic substitution)",
            "Nitrobenzene",
            "Benzene + conc. HNO3/conc. H2SO4 → nitrobenzene (NO2 substitution).",
        ));
    }
    if q.has_any(&["br2", "bromine"]) && q.has_any(&["febr3", "fecl3", "alcl3", "lewis acid"]) {
        return Some(SolverHit::new(
            "Halogenation of benzene (electrophilic substitution)",
            "Bromobenzene",
            "Benzene + Br2/FeBr3 → bromobenzene (substitution of H by Br).",
        ));
    }
    if q.has_any(&["nitrobenzene", "c6h5no2"]) && (fc_reagent || q.has("c2h5cl")) {
        return Some(SolverHit::new(
            "Friedel–Crafts on nitrobenzene (not possible)",
            "Reaction does not occur",
            "NO2 group is strongly deactivating and meta directing; nitrobenzene does not undergo Friedel–Crafts alkylation or acylation.",
        ));
    }
    if q.has_any(&["aniline", "c6h5nh2", "c6h5 nh2", "anilide", "amine"]) && fc_reagent {
        return Some(SolverHit::new(
            "Friedel–Crafts on aniline (not possible)",
            "Reaction does not occur",
            "Aniline (NH2) coordinates with AlCl3 forming a non-reactive complex; FC reactions do not proceed.",
        ));
    }
    if q.has_any(&["toluene", "methylbenzene", "c6h5ch3"])
        && (friedel || q.has_any(&["ch3cl", "alkylation"]))
    {
        return Some(SolverHit::new(
            "Friedel–Crafts alkylation of toluene (o,p directing)",
            "Ortho- and para-xylene (major)",
            "CH3 group activates the ring and directs electrophiles to ortho and para positions. Alkylation gives o- and p-xylene.",
        ));
    }
    if q.has_any(&["acylation", "cocl", "acyl chloride", "ch3cocl"]) {
        return Some(SolverHit::new(
            "Friedel–Crafts acylation of benzene",
            "Acylbenzene",
            "Benzene + RCOCl/AlCl3 → acylbenzene (benzophenone derivative). Exam tip: no polyacylation occurs because the acyl group deactivates the ring.",
        ));
    }
    (friedel || q.has_any(&["alkylation", "ch3cl", "c2h5cl"])).then(|| {
        SolverHit::new(
            "Friedel–Crafts alkylation of benzene",
            "Alkylbenzene",
            "Benzene + R–Cl/AlCl3 → alkylbenzene (R group attaches to ring). Exam tip: polyalkylation can occur because the alkyl group activates the ring; control by using excess benzene.",
        )
    })
}

// ============================================================================
// Diazonium chemistry
// ============================================================================

static DIAZO: LazyLock<Regex> =
    LazyLock::new(|| regex(r"diazonium|n2\+|benzenediazonium|aryl\s*diazonium"));
static COUPLING: LazyLock<Regex> = LazyLock::new(|| regex(r"coupling|azo\s*dye|azo"));
static PHENOL: LazyLock<Regex> = LazyLock::new(|| regex(r"phenol|c6h5oh"));
static ANILINE: LazyLock<Regex> = LazyLock::new(|| regex(r"aniline|c6h5nh2|phenylamine"));
static BASIC: LazyLock<Regex> = LazyLock::new(|| regex(r"naoh|koh|alkaline|basic|oh-"));
static ZERO_TO_FIVE: LazyLock<Regex> = LazyLock::new(|| regex(r"0\s*(?:-|–|to)+\s*5"));

pub(super) fn azo_coupling(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    let phenol = PHENOL.is_match(t);
    let aniline = ANILINE.is_match(t);
    if !DIAZO.is_match(t) || !(COUPLING.is_match(t) || phenol || aniline) {
        return None;
    }

    let hit = if phenol && BASIC.is_match(t) {
        SolverHit::new(
            "Azo coupling (phenol, alkaline)",
            "p-Hydroxyazobenzene (para major; ortho minor).",
            "Phenoxide activates ring; coupling occurs mainly at para position.",
        )
    } else if phenol {
        SolverHit::new(
            "Azo coupling (phenol)",
            "p-Hydroxyazobenzene (para major; ortho minor).",
            "Assume alkaline medium (NaOH) for phenol coupling; cold conditions preferred.",
        )
    } else if aniline {
        SolverHit::new(
            "Azo coupling (aniline)",
            "p-Aminoazobenzene (para major; ortho minor).",
            "Amino group activates ring; coupling mainly at para position.",
        )
    } else {
        SolverHit::new(
            "Azo coupling",
            "Azo dye (para major).",
            "Coupling of aryl diazonium salt with activated aromatic ring (phenol/aniline).",
        )
    };
    Some(hit)
}

static SODAMIDE: LazyLock<Regex> = LazyLock::new(|| regex(r"nanh2|na\s*nh2|sodamide"));
static ARYL_HALIDE: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"chlorobenzene|bromobenzene|fluorobenzene|iodobenzene|aryl\s*halide|c6h5cl|c6h5br")
});
static BENZYNE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"benzyne|elimination\s*addition|elimination–addition"));

pub(super) fn benzyne(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    let fires = BENZYNE.is_match(t)
        || (ARYL_HALIDE.is_match(t) && SODAMIDE.is_match(t) && t.contains("nh3"));
    fires.then(|| {
        SolverHit::new(
            "Benzyne mechanism (elimination–addition)",
            "Aniline (C6H5NH2).",
            "Strong base (NaNH2 in liquid NH3) replaces aryl halide by –NH2 via benzyne intermediate.",
        )
    })
}

pub(super) fn diazotization(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    let aniline = contains_any(t, &["aniline", "phenylamine", "c6h5nh2"]);
    let nitrite = contains_any(t, &["nano2", "sodium nitrite"]);
    let acid = contains_any(t, &["hcl", "acidic"]);
    let cold = ZERO_TO_FIVE.is_match(t) || contains_any(t, &["cold", "ice", "0°c", "0 c"]);
    (aniline && nitrite && acid && cold).then(|| {
        SolverHit::new(
            "Diazotization",
            "Benzene diazonium chloride (C6H5N2+Cl−).",
            "Reaction carried out at 0–5 °C to stabilize diazonium salt.",
        )
    })
}

pub(super) fn diazonium_substitution(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    if !contains_any(t, &["diazonium", "n2+"]) {
        return None;
    }
    let sandmeyer = |product: &str, notes: &str| SolverHit::new("Sandmeyer reaction", product, notes);

    if t.contains("cubr") {
        Some(sandmeyer("Bromobenzene.", "CuBr replaces diazonium group."))
    } else if t.contains("cucl") {
        Some(sandmeyer("Chlorobenzene.", "CuCl replaces diazonium group."))
    } else if contains_any(t, &["cucn", "kcn"]) {
        Some(sandmeyer("Benzonitrile.", "CuCN replaces diazonium group."))
    } else if contains_any(t, &["water", "h2o", "warm"]) {
        Some(SolverHit::new(
            "Hydrolysis of diazonium salt",
            "Phenol.",
            "Diazonium group replaced by –OH.",
        ))
    } else if contains_any(t, &["h3po2", "hypophosphorous"]) {
        Some(SolverHit::new(
            "Reduction of diazonium salt",
            "Benzene.",
            "Diazonium group replaced by hydrogen.",
        ))
    } else {
        None
    }
}

// ============================================================================
// Named reactions
// ============================================================================

pub(super) fn etard(q: &Question<'_>) -> Option<SolverHit> {
    let chromyl = q.has_any(&["cro2cl2", "chromyl chloride"]);
    let toluene = q.has_any(&["toluene", "c6h5ch3"]);
    (chromyl && toluene).then(|| {
        SolverHit::new(
            "Etard oxidation",
            "Benzaldehyde (C6H5CHO).",
            "CrO2Cl2 oxidizes benzylic methyl group to aldehyde (controlled oxidation).",
        )
    })
}

static GK_NAME: LazyLock<Regex> = LazyLock::new(|| regex(r"gattermann[-\s]*koch"));
static GK_BENZENE: LazyLock<Regex> = LazyLock::new(|| regex(r"\bbenzene\b|c6h6"));
static GK_CO: LazyLock<Regex> = LazyLock::new(|| regex(r"\bco\b|carbon\s*monoxide"));
static GK_HCL: LazyLock<Regex> = LazyLock::new(|| regex(r"\bhcl\b|hydrogen\s*chloride"));
static GK_ALCL3: LazyLock<Regex> = LazyLock::new(|| regex(r"\balcl3\b"));
static GK_CUCL: LazyLock<Regex> = LazyLock::new(|| regex(r"\bcucl\b|\bcucl2\b|cu\s*cl"));

pub(super) fn gattermann_koch(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    let fires = GK_NAME.is_match(t)
        || [&GK_BENZENE, &GK_CO, &GK_HCL, &GK_ALCL3, &GK_CUCL]
            .iter()
            .all(|re| re.is_match(t));
    fires.then(|| {
        SolverHit::new(
            "Gattermann–Koch reaction",
            "Benzaldehyde (C6H5CHO).",
            "Formylation of benzene using CO + HCl in presence of AlCl3/CuCl.",
        )
    })
}

static PHENOXIDE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"sodium\s*phenoxide|c6h5ona|phenoxide|nao-"));
static CARBON_DIOXIDE: LazyLock<Regex> = LazyLock::new(|| regex(r"co2|carbon\s*dioxide|dry\s*ice"));

pub(super) fn kolbe_schmitt(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    let phenoxide = PHENOXIDE.is_match(t) || (PHENOL.is_match(t) && t.contains("naoh"));
    (phenoxide && CARBON_DIOXIDE.is_match(t) && t.contains("pressure")).then(|| {
        SolverHit::new(
            "Kolbe–Schmitt reaction",
            "Salicylic acid (o-hydroxybenzoic acid) (ortho major).",
            "Sodium phenoxide reacts with CO2 under pressure to give salicylate; acidification gives salicylic acid.",
        )
    })
}

pub(super) fn reimer_tiemann(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    let chloroform = contains_any(t, &["chcl3", "chloroform"]);
    (PHENOL.is_match(t) && chloroform && BASIC.is_match(t)).then(|| {
        SolverHit::new(
            "Reimer–Tiemann reaction",
            "o-Hydroxybenzaldehyde (salicylaldehyde) (ortho major; para minor).",
            "CHCl3/NaOH generates :CCl2 (dichlorocarbene); formylation occurs mainly at ortho position.",
        )
    })
}

// ============================================================================
// Side-chain reactions
// ============================================================================

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| regex(r"\s+"));
static ARALKYL: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"toluene|methylbenzene|ethylbenzene|propylbenzene|isopropylbenzene|cumene|alkylbenzene|side\s*chain")
});
static HOT_PERMANGANATE: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"hot\s*kmno4|kmno4\s*[,/ ]*\s*heat|kmno4\s*[,/ ]*\s*hot|alkaline\s*kmno4\s*[,/ ]*\s*heat|oxidative\s*kmno4")
});
static NO_BENZYLIC_H: LazyLock<Regex> =
    LazyLock::new(|| regex(r"tert[- ]butylbenzene|t[- ]butylbenzene|tbu[- ]?benzene"));
static LIGHT: LazyLock<Regex> = LazyLock::new(|| regex(r"\bhv\b|hν|sunlight|uv|light"));
static TOLUENE: LazyLock<Regex> = LazyLock::new(|| regex(r"toluene|methylbenzene|c6h5ch3"));
static ETHYLBENZENE: LazyLock<Regex> = LazyLock::new(|| regex(r"ethylbenzene|c6h5ch2ch3"));
static CUMENE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"cumene|isopropylbenzene|c6h5ch\(ch3\)2"));

/// Arrows unified and whitespace collapsed so reagent regexes see one shape.
fn side_chain_text(q: &Question<'_>) -> String {
    let t = q
        .lower()
        .replace(['→', '⟶', '⇒'], "->");
    WHITESPACE.replace_all(&t, " ").trim().to_string()
}

pub(super) fn benzylic_oxidation(q: &Question<'_>) -> Option<SolverHit> {
    let t = side_chain_text(q);
    if !HOT_PERMANGANATE.is_match(&t) || !(ARALKYL.is_match(&t) || t.contains("benzene")) {
        return None;
    }
    let hit = if NO_BENZYLIC_H.is_match(&t) {
        SolverHit::new(
            "Benzylic oxidation (hot KMnO4)",
            "No reaction (no benzylic H on the side-chain carbon attached to ring).",
            "tert-Butylbenzene has no benzylic hydrogen, so KMnO4 cannot oxidize it to benzoic acid.",
        )
    } else {
        SolverHit::new(
            "Benzylic oxidation (hot KMnO4)",
            "Benzoic acid (C6H5COOH).",
            "Any alkyl side-chain on benzene with at least one benzylic H oxidizes fully to –COOH (ring unchanged).",
        )
    };
    Some(hit)
}

pub(super) fn benzylic_halogenation(q: &Question<'_>) -> Option<SolverHit> {
    let t = side_chain_text(q);
    let halogen = contains_any(&t, &["nbs", "cl2", "br2"]);
    if !halogen || !LIGHT.is_match(&t) || !(t.contains("benz") || ARALKYL.is_match(&t)) {
        return None;
    }

    let chlorine = t.contains("cl2") && !contains_any(&t, &["br2", "nbs"]);
    let (x, name, reagent) = if chlorine {
        ("Cl", "chloride", "Cl2")
    } else {
        ("Br", "bromide", "Br2/NBS")
    };
    let reaction = format!("Benzylic (side-chain) halogenation ({reagent}, hv)");

    let hit = if TOLUENE.is_match(&t) {
        SolverHit::new(
            reaction,
            format!("Benzyl {name} (C6H5CH2{x})."),
            "Under hv, halogenation occurs at the benzylic position (side-chain), not on the ring.",
        )
    } else if ETHYLBENZENE.is_match(&t) {
        SolverHit::new(
            reaction,
            format!("1-Phenylethyl {name} (C6H5CH({x})CH3) (major)."),
            "Benzylic C–H is most reactive; gives benzylic substitution product as major.",
        )
    } else if CUMENE.is_match(&t) {
        SolverHit::new(
            reaction,
            format!("Cumyl {name} (C6H5C({x})(CH3)2) (major)."),
            "Tertiary benzylic radical is very stable → major benzylic substitution at the side chain.",
        )
    } else {
        SolverHit::new(
            reaction,
            format!("Benzylic {name} at side-chain (replace a benzylic H with {x})."),
            "With hv/UV, substitution happens at the benzylic position (side chain) if benzylic H is present.",
        )
    };
    Some(hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use luma_types::QuestionContext;

    fn run(rule: fn(&Question<'_>) -> Option<SolverHit>, text: &str) -> Option<SolverHit> {
        let context = QuestionContext::default();
        rule(&Question::new(text, &context))
    }

    #[test]
    fn nitrobenzene_is_meta_directing() {
        let hit = run(directing, "Nitration of nitrobenzene").unwrap();
        assert!(hit.product.starts_with("Meta"));
    }

    #[test]
    fn friedel_crafts_fails_on_nitrobenzene() {
        let hit = run(simple_eas, "nitrobenzene + CH3Cl/AlCl3 (Friedel-Crafts)").unwrap();
        assert_eq!(hit.product, "Reaction does not occur");
    }

    #[test]
    fn plain_benzene_bromination_needs_lewis_acid() {
        assert_eq!(
            run(simple_eas, "benzene + Br2/FeBr3").unwrap().product,
            "Bromobenzene"
        );
        assert!(run(simple_eas, "benzene + Br2").is_none());
    }

    #[test]
    fn phenol_coupling_assumes_alkaline_medium() {
        let hit = run(azo_coupling, "benzenediazonium chloride + phenol").unwrap();
        assert_eq!(hit.reaction, "Azo coupling (phenol)");
        let alkaline = run(azo_coupling, "benzenediazonium chloride + phenol in NaOH").unwrap();
        assert_eq!(alkaline.reaction, "Azo coupling (phenol, alkaline)");
    }

    #[test]
    fn diazotization_needs_cold() {
        assert!(run(diazotization, "aniline + NaNO2/HCl at 0-5 °C").is_some());
        assert!(run(diazotization, "aniline + NaNO2/HCl at 50 °C").is_none());
    }

    #[test]
    fn sandmeyer_reagent_picks_product() {
        let hit = run(diazonium_substitution, "benzene diazonium chloride + CuCN").unwrap();
        assert_eq!(hit.product, "Benzonitrile.");
    }

    #[test]
    fn gattermann_koch_by_reagents() {
        assert!(run(gattermann_koch, "benzene + CO + HCl, AlCl3 / CuCl").is_some());
        assert!(run(gattermann_koch, "benzene + HCl").is_none());
    }

    #[test]
    fn tert_butylbenzene_resists_permanganate() {
        let hit = run(benzylic_oxidation, "tert-butylbenzene + hot KMnO4").unwrap();
        assert!(hit.product.starts_with("No reaction"));
        let toluene = run(benzylic_oxidation, "toluene → KMnO4, heat").unwrap();
        assert_eq!(toluene.product, "Benzoic acid (C6H5COOH).");
    }

    #[test]
    fn light_sends_halogen_to_side_chain() {
        let hit = run(benzylic_halogenation, "toluene + Cl2, hv").unwrap();
        assert_eq!(hit.product, "Benzyl chloride (C6H5CH2Cl).");
        assert_eq!(hit.reaction, "Benzylic (side-chain) halogenation (Cl2, hv)");
    }
}
