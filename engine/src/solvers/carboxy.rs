//! Carboxylic acids and their derivatives.

use std::sync::LazyLock;

use luma_types::SolverHit;
use regex::Regex;

use super::carbonyl::{acetyl_chloride, benzoyl_chloride, has_acid_chloride};
use super::{Question, contains_any, contains_word};

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid acid derivative regex")
}

const HYDROLYSIS: &[&str] = &["h2o", "water", "hydrolysis", "moist", "aq", "aqueous"];
const BASIC: &[&str] = &["naoh", "koh", "base", "alkaline"];
const ACIDIC: &[&str] = &[
    "h+",
    "h3o",
    "h₃o",
    "dil. hcl",
    "dilute hcl",
    "dil. h2so4",
    "dilute h2so4",
    "acidic",
];

static ALCOHOL_FORMULA: LazyLock<Regex> =
    LazyLock::new(|| regex(r"\bch3oh\b|\bc2h5oh\b|\bc3h7oh\b|\broh\b"));

fn has_alcohol(q: &Question<'_>) -> bool {
    q.has_any(&["alcohol", "roh", "methanol", "ethanol", "propanol", "butanol"])
        || ALCOHOL_FORMULA.is_match(q.lower())
}

// ============================================================================
// Acyl chlorides
// ============================================================================

/// Which nucleophile attacks the acyl chloride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AcylAttack {
    Hydrolysis,
    Alcoholysis,
    Ammonolysis,
}

fn acyl_attack(q: &Question<'_>) -> Option<AcylAttack> {
    if q.has_any(HYDROLYSIS) {
        Some(AcylAttack::Hydrolysis)
    } else if has_alcohol(q) {
        Some(AcylAttack::Alcoholysis)
    } else if q.has_any(&[
        "nh3",
        "ammonia",
        "amine",
        "rnh2",
        "aniline",
        "methylamine",
        "ethylamine",
    ]) {
        Some(AcylAttack::Ammonolysis)
    } else {
        None
    }
}

const HYDROLYSIS_REACTION: &str = "Acid chloride hydrolysis";
const ALCOHOLYSIS_REACTION: &str = "Acid chloride alcoholysis (ester formation)";
const AMMONOLYSIS_REACTION: &str = "Acid chloride ammonolysis (amide formation)";

pub(super) fn acyl_chloride(q: &Question<'_>) -> Option<SolverHit> {
    if !has_acid_chloride(q) {
        return None;
    }
    let attack = acyl_attack(q);

    let hit = if acetyl_chloride(q) && attack.is_some() {
        match attack? {
            AcylAttack::Hydrolysis => SolverHit::new(
                HYDROLYSIS_REACTION,
                "CH3COCl (acetyl chloride) + H2O → **CH3COOH (acetic acid)** + HCl.",
                "Very fast; acid chloride is most reactive acyl derivative. HCl is formed.",
            ),
            AcylAttack::Alcoholysis => SolverHit::new(
                ALCOHOLYSIS_REACTION,
                "CH3COCl + ROH (often pyridine/base) → **CH3COOR (ester)** + HCl.",
                "Exam trap: base (pyridine) used to neutralize HCl.",
            ),
            AcylAttack::Ammonolysis => SolverHit::new(
                AMMONOLYSIS_REACTION,
                "CH3COCl + NH3 → **CH3CONH2 (acetamide)** + HCl (often captured by excess NH3/base).",
                "Amide formation is very fast; HCl byproduct must be neutralized.",
            ),
        }
    } else if benzoyl_chloride(q) && attack.is_some() {
        match attack? {
            AcylAttack::Hydrolysis => SolverHit::new(
                HYDROLYSIS_REACTION,
                "C6H5COCl (benzoyl chloride) + H2O → **C6H5COOH (benzoic acid)** + HCl.",
                "Fast nucleophilic acyl substitution.",
            ),
            AcylAttack::Alcoholysis => SolverHit::new(
                ALCOHOLYSIS_REACTION,
                "C6H5COCl + C2H5OH (ethanol) → **C6H5COOC2H5 (ethyl benzoate)** + HCl (base/pyridine helps).",
                "Esterification from acid chloride is easier than from acid (no equilibrium issue).",
            ),
            AcylAttack::Ammonolysis => SolverHit::new(
                AMMONOLYSIS_REACTION,
                "C6H5COCl + NH3 → **C6H5CONH2 (benzamide)** + HCl.",
                "Schotten–Baumann conditions: base present to neutralize HCl (exam phrase).",
            ),
        }
    } else {
        match attack {
            Some(AcylAttack::Hydrolysis) => SolverHit::new(
                HYDROLYSIS_REACTION,
                "General: RCOCl + H2O → **RCOOH (carboxylic acid)** + HCl.",
                "Exam key: acid chlorides hydrolyze very rapidly; HCl is produced.",
            ),
            Some(AcylAttack::Alcoholysis) => SolverHit::new(
                ALCOHOLYSIS_REACTION,
                "General: RCOCl + ROH (pyridine/base) → **RCOOR (ester)** + HCl.",
                "Exam trap: include base (pyridine) to trap HCl; product is ester.",
            ),
            Some(AcylAttack::Ammonolysis) => SolverHit::new(
                AMMONOLYSIS_REACTION,
                "General: RCOCl + NH3 / RNH2 → **amide** (RCONH2 / RCONHR) + HCl.",
                "Use excess NH3/base to neutralize HCl; otherwise amine gets protonated.",
            ),
            None => SolverHit::new(
                "Acid chloride reactions (overview)",
                "RCOCl is highly reactive: +H2O → acid; +ROH → ester; +NH3/RNH2 → amide (HCl formed).",
                "Common mistake: forgetting HCl byproduct / missing base (pyridine).",
            ),
        }
    };
    Some(hit)
}

// ============================================================================
// Amides
// ============================================================================

static ACETAMIDE: LazyLock<Regex> = LazyLock::new(|| regex(r"\bacetamide\b|\bch3conh2\b"));
static BENZAMIDE: LazyLock<Regex> = LazyLock::new(|| regex(r"\bbenzamide\b|\bc6h5conh2\b"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Amide {
    Acetamide,
    Benzamide,
    Other,
}

impl Amide {
    fn detect(t: &str) -> Self {
        if ACETAMIDE.is_match(t) {
            Self::Acetamide
        } else if BENZAMIDE.is_match(t) {
            Self::Benzamide
        } else {
            Self::Other
        }
    }
}

const HOFMANN_REACTION: &str = "Hofmann bromamide (amide → amine, one carbon less)";
const DEHYDRATION_REACTION: &str = "Dehydration of amide → nitrile";

fn hofmann(amide: Amide) -> SolverHit {
    match amide {
        Amide::Acetamide => SolverHit::new(
            HOFMANN_REACTION,
            "CH3CONH2 (acetamide) + Br2/NaOH → **CH3NH2 (methylamine)** (one C less than acid) + byproducts.",
            "Exam trap: carbon chain decreases by 1 (loss of carbonyl carbon).",
        ),
        Amide::Benzamide => SolverHit::new(
            HOFMANN_REACTION,
            "C6H5CONH2 (benzamide) + Br2/NaOH → **C6H5NH2 (aniline)** + byproducts.",
            "Key: one-carbon shorter amine (carbonyl carbon removed).",
        ),
        Amide::Other => SolverHit::new(
            HOFMANN_REACTION,
            "General: RCONH2 + Br2/NaOH → **RNH2** (one carbon less) + byproducts.",
            "Trap: do NOT write nitrile; do NOT keep same carbon count.",
        ),
    }
}

fn amide_dehydration(amide: Amide) -> SolverHit {
    match amide {
        Amide::Acetamide => SolverHit::new(
            DEHYDRATION_REACTION,
            "CH3CONH2 --(P2O5 / SOCl2 / POCl3)→ **CH3CN (acetonitrile)**.",
            "Exam key: dehydration converts amide to nitrile.",
        ),
        Amide::Benzamide => SolverHit::new(
            DEHYDRATION_REACTION,
            "C6H5CONH2 --(P2O5 / SOCl2 / POCl3)→ **C6H5CN (benzonitrile)**.",
            "Amide dehydration gives nitrile.",
        ),
        Amide::Other => SolverHit::new(
            DEHYDRATION_REACTION,
            "General: RCONH2 --(P2O5 / SOCl2 / POCl3)→ **RCN (nitrile)**.",
            "Trap: dehydration gives nitrile (not amine).",
        ),
    }
}

fn amide_hydrolysis(amide: Amide, basic: bool) -> SolverHit {
    match (basic, amide) {
        (true, Amide::Acetamide) => SolverHit::new(
            "Basic hydrolysis of amide",
            "CH3CONH2 + NaOH → **CH3COO⁻Na⁺ (sodium acetate)** + NH3.",
            "In base, product is carboxylate salt (not free acid).",
        ),
        (true, _) => SolverHit::new(
            "Basic hydrolysis of amide",
            "General: RCONH2 + NaOH → **RCOO⁻Na⁺ (carboxylate salt)** + NH3.",
            "Trap: do not write RCOOH in basic medium.",
        ),
        (false, Amide::Acetamide) => SolverHit::new(
            "Acidic hydrolysis of amide",
            "CH3CONH2 + H2O/H+ → **CH3COOH (acetic acid)** + NH4+ (e.g., NH4Cl).",
            "Acidic hydrolysis gives free acid; ammonia becomes ammonium salt.",
        ),
        (false, _) => SolverHit::new(
            "Acidic hydrolysis of amide",
            "General: RCONH2 + H2O/H+ → **RCOOH** + NH4+ (ammonium salt).",
            "Trap: acidic hydrolysis gives carboxylic acid; basic gives carboxylate salt.",
        ),
    }
}

pub(super) fn amide(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    let named_amide = q.has_any(&["amide", "carboxamide", "conh2", "conhr", "conr2"])
        || ACETAMIDE.is_match(t)
        || BENZAMIDE.is_match(t);
    if !named_amide && !q.has_any(&["hofmann", "bromamide"]) {
        return None;
    }
    let amide = Amide::detect(t);
    let basic = q.has_any(BASIC);
    let acidic = q.has_any(ACIDIC);

    let bromamide = q.has_any(&["hofmann", "bromamide"])
        || (q.has_any(&["br2", "bromine"]) && q.has_any(&["naoh", "koh", "base"]));
    if bromamide {
        return Some(hofmann(amide));
    }
    if q.has_any(&[
        "p2o5",
        "p2o₅",
        "phosphorus pentoxide",
        "pocl3",
        "thionyl chloride",
        "socl2",
        "dehydration",
        "dehydrate",
    ]) {
        return Some(amide_dehydration(amide));
    }
    if q.has_any(HYDROLYSIS) || acidic || basic {
        return Some(amide_hydrolysis(amide, basic && !acidic));
    }
    Some(SolverHit::new(
        "Amide reactions (overview)",
        "Hydrolysis: acidic → RCOOH + NH4+; basic → RCOO⁻Na⁺ + NH3. Dehydration (P2O5/SOCl2/POCl3) → nitrile (RCN). Hofmann (Br2/NaOH) → amine (one C less).",
        "Key traps: Hofmann shortens chain by 1; dehydration gives nitrile; base hydrolysis gives salt.",
    ))
}

// ============================================================================
// Decarboxylation and HVZ
// ============================================================================

static SODIUM_SALT: LazyLock<Regex> = LazyLock::new(|| regex(r"\bch3coona\b|\bc6h5coona\b"));

fn is_carboxylate(t: &str) -> bool {
    contains_any(t, &["rcoona", "rcoo-na", "sodium salt", "carboxylate"]) || SODIUM_SALT.is_match(t)
}

fn is_hvz(t: &str) -> bool {
    let named = contains_any(t, &["hvz", "hell-volhard-zelinsky", "hell volhard zelinsky"]);
    let phosphorus = contains_any(t, &["red p", "pbr3"]) || contains_word(t, "p");
    named || (contains_any(t, &["br2", "cl2"]) && phosphorus)
}

pub(super) fn decarboxylation(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    let carboxylate = is_carboxylate(t);

    if carboxylate && contains_any(t, &["soda lime", "naoh/cao", "naoh + cao", "cao", "sodalime"]) {
        return Some(SolverHit::new(
            "Soda lime decarboxylation",
            "RCOO⁻Na⁺ --(NaOH/CaO, heat)→ **RH** + Na2CO3  (one carbon less).",
            "Exam trap: product is alkane with one carbon less than acid.",
        ));
    }
    if carboxylate && contains_any(t, &["kolbe", "electrolysis", "electrolytic", "electrolyse"]) {
        return Some(SolverHit::new(
            "Kolbe electrolysis",
            "2 RCOO⁻Na⁺ --(electrolysis)→ **R–R (symmetrical alkane)** + 2 CO2.",
            "Exam trap: only symmetrical alkanes form; odd chains do not mix.",
        ));
    }
    (contains_any(t, &["cooh", "carboxylic acid", "acid"]) && is_hvz(t)).then(|| {
        SolverHit::new(
            "HVZ reaction (α-halogenation of carboxylic acids)",
            "RCH2COOH --(X2 / red P)→ **RCHXCOOH (α-halo acid)**.",
            "HVZ requires α-hydrogen; product is α-halogenated acid.",
        )
    })
}

// ============================================================================
// Esters
// ============================================================================

static ACID_FORMULA: LazyLock<Regex> = LazyLock::new(|| regex(r"\bch3cooh\b|\bc6h5cooh\b|\brcooh\b"));
static ESTER_FORMULA: LazyLock<Regex> =
    LazyLock::new(|| regex(r"\bch3cooc2h5\b|\bch3cooch3\b|\bc6h5cooc2h5\b|\brcoor\b"));
static ETHANOL: LazyLock<Regex> = LazyLock::new(|| regex(r"\bethanol\b|\bc2h5oh\b"));
static ACETIC_ACID: LazyLock<Regex> =
    LazyLock::new(|| regex(r"\bacetic acid\b|\bethanoic acid\b|\bch3cooh\b"));
static ETHYL_ACETATE: LazyLock<Regex> = LazyLock::new(|| regex(r"\bethyl acetate\b|\bch3cooc2h5\b"));
static ETHYL_BENZOATE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"\bethyl benzoate\b|\bc6h5cooc2h5\b"));

fn has_acid(q: &Question<'_>) -> bool {
    q.has_any(&["carboxylic acid", "acid", "cooh"]) || ACID_FORMULA.is_match(q.lower())
}

fn has_ester(q: &Question<'_>) -> bool {
    q.has_any(&[
        "ester",
        "rcoor",
        "coor",
        "ethyl acetate",
        "methyl acetate",
        "ethyl benzoate",
        "acetate",
    ]) || ESTER_FORMULA.is_match(q.lower())
}

fn ester_hydrolysis(q: &Question<'_>) -> SolverHit {
    let t = q.lower();
    let saponification = q.has_any(&[
        "naoh",
        "koh",
        "base hydrolysis",
        "alkaline hydrolysis",
        "saponification",
    ]);
    const SAPONIFICATION: &str = "Base hydrolysis (saponification) — irreversible (exam)";
    const ACIDIC_HYDROLYSIS: &str = "Acidic hydrolysis of ester (reversible)";

    if saponification {
        return if ETHYL_ACETATE.is_match(t) {
            SolverHit::new(
                SAPONIFICATION,
                "CH3COOC2H5 (ethyl acetate) + NaOH → **CH3COO⁻Na⁺ (sodium acetate)** + C2H5OH (ethanol).",
                "Exam key: basic hydrolysis gives carboxylate salt; effectively irreversible.",
            )
        } else {
            SolverHit::new(
                SAPONIFICATION,
                "General: RCOOR' + NaOH → **RCOO⁻Na⁺ (carboxylate salt)** + R'OH.",
                "Trap: product is carboxylate salt (not free acid) in basic medium.",
            )
        };
    }
    if ETHYL_ACETATE.is_match(t) {
        SolverHit::new(
            ACIDIC_HYDROLYSIS,
            "CH3COOC2H5 + H2O/H+ ⇌ **CH3COOH (acetic acid)** + C2H5OH (ethanol).",
            "Acidic hydrolysis is reversible (equilibrium).",
        )
    } else if ETHYL_BENZOATE.is_match(t) {
        SolverHit::new(
            ACIDIC_HYDROLYSIS,
            "C6H5COOC2H5 + H2O/H+ ⇌ **C6H5COOH (benzoic acid)** + C2H5OH.",
            "Reversible; compare with saponification (irreversible).",
        )
    } else {
        SolverHit::new(
            "Ester hydrolysis",
            "Acidic: RCOOR' + H2O/H+ ⇌ RCOOH + R'OH (reversible). Basic: RCOOR' + NaOH → RCOO⁻Na⁺ + R'OH (irreversible in exam).",
            "Big trap: acidic hydrolysis is reversible, basic hydrolysis gives salt (drives reaction).",
        )
    }
}

pub(super) fn ester(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    let triggered = q.has_any(&[
        "esterification",
        "fischer",
        "saponification",
        "ester hydrolysis",
        "hydrolysis of ester",
        "rcoor",
    ]);
    let acid_and_alcohol = has_acid(q) && has_alcohol(q);
    let ester = has_ester(q);
    if !triggered && !ester && !acid_and_alcohol {
        return None;
    }

    let fischer_conditions = q.has_any(&[
        "fischer",
        "esterification",
        "conc h2so4",
        "concentrated h2so4",
        "h2so4",
        "h+",
        "acid catalyst",
        "reflux",
    ]);
    if acid_and_alcohol && fischer_conditions {
        return Some(if ETHANOL.is_match(t) && ACETIC_ACID.is_match(t) {
            SolverHit::new(
                "Fischer esterification (reversible)",
                "CH3COOH (acetic acid) + C2H5OH (ethanol)  --(conc. H2SO4, heat)⇌  **CH3COOC2H5 (ethyl acetate)** + H2O.",
                "Exam trap: Fischer is reversible; conc. H2SO4 removes water and pushes equilibrium to ester.",
            )
        } else {
            SolverHit::new(
                "Fischer esterification (reversible)",
                "General: RCOOH + ROH  --(conc. H2SO4, heat)⇌  **RCOOR (ester)** + H2O.",
                "Reversible equilibrium (push forward by removing water / excess reactant).",
            )
        });
    }

    let hydrolysing = q.has("hydrolysis")
        || q.has_any(&[
            "acidic hydrolysis",
            "h+",
            "h3o",
            "h₃o",
            "dil. hcl",
            "dilute hcl",
            "dil. h2so4",
            "dilute h2so4",
            "naoh",
            "koh",
            "saponification",
        ]);
    if ester && hydrolysing {
        return Some(ester_hydrolysis(q));
    }
    if ester {
        return Some(SolverHit::new(
            "Ester reactions (overview)",
            "Esterification: RCOOH + ROH (conc. H2SO4, heat) ⇌ RCOOR + H2O. Hydrolysis: acidic (reversible) vs basic (saponification, gives RCOO⁻Na⁺).",
            "Do not confuse acid chloride ester formation (fast, not equilibrium) with Fischer esterification (equilibrium).",
        ));
    }
    acid_and_alcohol.then(|| {
        SolverHit::new(
            "Fischer esterification (reversible)",
            "General: RCOOH + ROH  --(conc. H2SO4, heat)⇌  RCOOR + H2O.",
            "Push forward by removing water / excess alcohol or acid catalyst.",
        )
    })
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
    fn benzoyl_chloride_alcoholysis_gives_ethyl_benzoate() {
        let hit = run(acyl_chloride, "benzoyl chloride + ethanol, pyridine").unwrap();
        assert!(hit.product.contains("ethyl benzoate"));
    }

    #[test]
    fn acyl_chloride_without_partner_is_overview() {
        let hit = run(acyl_chloride, "reactions of propanoyl chloride").unwrap();
        assert_eq!(hit.reaction, "Acid chloride reactions (overview)");
    }

    #[test]
    fn hofmann_on_benzamide_gives_aniline() {
        let hit = run(amide, "benzamide + Br2/NaOH").unwrap();
        assert!(hit.product.contains("aniline"));
    }

    #[test]
    fn amide_dehydration_gives_nitrile() {
        let hit = run(amide, "acetamide + P2O5, heat").unwrap();
        assert!(hit.product.contains("acetonitrile"));
    }

    #[test]
    fn basic_amide_hydrolysis_gives_salt() {
        let hit = run(amide, "acetamide + NaOH, boil").unwrap();
        assert_eq!(hit.reaction, "Basic hydrolysis of amide");
    }

    #[test]
    fn soda_lime_drops_one_carbon() {
        let hit = run(decarboxylation, "CH3COONa + soda lime, heat").unwrap();
        assert_eq!(hit.reaction, "Soda lime decarboxylation");
    }

    #[test]
    fn hvz_needs_a_phosphorus_word() {
        assert!(run(decarboxylation, "acetic acid + Br2 / red P").is_some());
        assert!(run(decarboxylation, "acetic acid + Br2 in presence of light").is_none());
    }

    #[test]
    fn fischer_esterification_of_acetic_acid() {
        let hit = run(ester, "acetic acid + ethanol, conc. H2SO4").unwrap();
        assert!(hit.product.contains("ethyl acetate"));
    }

    #[test]
    fn saponification_gives_sodium_acetate() {
        let hit = run(ester, "ethyl acetate + NaOH").unwrap();
        assert!(hit.product.contains("sodium acetate"));
    }
}
