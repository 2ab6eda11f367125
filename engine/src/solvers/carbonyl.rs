//! Aldehydes and ketones: condensations, oxidations, reductions and the
//! named carbonyl syntheses.

use std::sync::LazyLock;

use luma_types::SolverHit;
use regex::Regex;

use super::{Question, contains_word};

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid carbonyl regex")
}

const HEAT: &[&str] = &["heat", "hot", "Δ", "δ", "delta"];
const BENZALDEHYDE: &[&str] = &["benzaldehyde", "c6h5cho", "phcho"];
const ACETOPHENONE: &[&str] = &["acetophenone", "1-phenylethanone", "c6h5coch3", "phcoch3"];

// ============================================================================
// Aldol
// ============================================================================

pub(super) fn aldol(q: &Question<'_>) -> Option<SolverHit> {
    let base = q.has_any(&["naoh", "koh"]);
    let carbonyl = q.has_any(&["aldehyde", "ketone", "carbonyl"]);
    let dilute_base = q.has_any(&["dil", "dilute", "cold"]) && q.has_any(&["naoh", "koh", "oh-"]);
    let heated = q.has_any(HEAT);
    let acetaldehyde = q.has_any(&["acetaldehyde", "ethanal", "ch3cho"]);
    let acetone = q.has_any(&["acetone", "propanone", "ch3coch3"]);

    let detected = q.has("aldol")
        || (base && carbonyl)
        || ((dilute_base || heated) && (acetaldehyde || acetone));
    if !detected {
        return None;
    }

    let hit = match (acetaldehyde, acetone, heated) {
        (true, _, true) => SolverHit::new(
            "Aldol condensation",
            "Crotonaldehyde (CH3CH=CHCHO) (after dehydration).",
            "2 ethanal → β-hydroxy aldehyde (aldol) → dehydration on heating gives α,β-unsaturated aldehyde.",
        ),
        (true, _, false) => SolverHit::new(
            "Aldol addition",
            "3-Hydroxybutanal (aldol) (CH3CH(OH)CH2CHO).",
            "2 ethanal in dilute base (cold) gives β-hydroxy aldehyde (aldol).",
        ),
        (false, true, true) => SolverHit::new(
            "Aldol condensation",
            "Mesityl oxide (CH3COCH=C(CH3)2) (after dehydration).",
            "2 acetone → diacetone alcohol → dehydration on heating gives α,β-unsaturated ketone.",
        ),
        (false, true, false) => SolverHit::new(
            "Aldol addition",
            "Diacetone alcohol (4-hydroxy-4-methyl-2-pentanone).",
            "2 acetone in dilute base (cold) gives β-hydroxy ketone.",
        ),
        (false, false, _) => SolverHit::new(
            "Aldol reaction",
            "β-hydroxy carbonyl compound (aldol product).",
            "If heated, dehydration gives α,β-unsaturated carbonyl compound.",
        ),
    };
    Some(hit)
}

// ============================================================================
// Baeyer–Villiger
// ============================================================================

static BV_SUBSTRATE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"acetophenone|cyclohexanone|cyclopentanone|benzaldehyde"));

const MIGRATORY_APTITUDE: &str =
    "Migratory aptitude (exam): tert > sec > primary > methyl; aryl/benzyl usually migrate well.";

pub(super) fn baeyer_villiger(q: &Question<'_>) -> Option<SolverHit> {
    let named = q.has_any(&["baeyer", "villiger"]);
    let reagents = named
        || q.has("bv oxidation")
        || q.has_any(&[
            "mcpba",
            "peracid",
            "peroxyacid",
            "peroxy acid",
            "rco3h",
            "perbenzoic",
            "peracetic",
        ]);
    let carbonyl = q.has_any(&["ketone", "aldehyde", "-cho", " cho", "c=o", "carbonyl"])
        || BV_SUBSTRATE.is_match(q.lower());
    if !((reagents && carbonyl) || named) {
        return None;
    }

    let hit = if q.has_any(ACETOPHENONE) {
        SolverHit::new(
            "Baeyer–Villiger oxidation (ketone → ester)",
            "Acetophenone (PhCOCH3) + peracid (mCPBA) → **phenyl acetate** (PhOCOCH3).",
            format!("Key trap: phenyl migrates preferentially over methyl. {MIGRATORY_APTITUDE}"),
        )
    } else if q.has("cyclohexanone") {
        SolverHit::new(
            "Baeyer–Villiger oxidation (cyclic ketone → lactone)",
            "Cyclohexanone + peracid (mCPBA) → **ε-caprolactone** (ring expansion by 1).",
            format!("Cyclic ketone gives lactone (one-carbon ring expansion). {MIGRATORY_APTITUDE}"),
        )
    } else if q.has("cyclopentanone") {
        SolverHit::new(
            "Baeyer–Villiger oxidation (cyclic ketone → lactone)",
            "Cyclopentanone + peracid (mCPBA) → **δ-valerolactone** (ring expansion by 1).",
            format!("Cyclic ketone gives lactone (one-carbon ring expansion). {MIGRATORY_APTITUDE}"),
        )
    } else if q.has_any(BENZALDEHYDE) {
        SolverHit::new(
            "Baeyer–Villiger oxidation (aldehyde → acid)",
            "Benzaldehyde (PhCHO) + peracid → **benzoic acid** (PhCOOH).",
            "Aldehydes are oxidized to carboxylic acids under peracid BV conditions.",
        )
    } else if !carbonyl {
        SolverHit::new(
            "Baeyer–Villiger oxidation",
            "Ketone + peracid → **ester**; cyclic ketone → **lactone**; aldehyde → **carboxylic acid**.",
            MIGRATORY_APTITUDE,
        )
    } else {
        SolverHit::new(
            "Baeyer–Villiger oxidation",
            "General: R-CO-R' + peracid (mCPBA / RCO3H) → ester (one group migrates to O). Cyclic ketone → lactone.",
            format!("Exam traps: apply migratory aptitude; do not confuse with ozonolysis/epoxidation. {MIGRATORY_APTITUDE}"),
        )
    };
    Some(hit)
}

// ============================================================================
// Cannizzaro
// ============================================================================

const FORMALDEHYDE: &[&str] = &["formaldehyde", "methanal", "hcho"];

pub(super) fn cannizzaro(q: &Question<'_>) -> Option<SolverHit> {
    let concentrated_base = q.has_any(&["naoh", "koh"]) && q.has_any(&["conc", "concentrated"]);
    let formaldehyde = q.has_any(FORMALDEHYDE);
    let benzaldehyde = q.has_any(&["benzaldehyde", "c6h5cho"]);
    let aldehyde = q.has("aldehyde") || formaldehyde || benzaldehyde;
    if !(q.has("cannizzaro") || (concentrated_base && aldehyde)) {
        return None;
    }

    let hit = if formaldehyde {
        SolverHit::new(
            "Cannizzaro reaction",
            "Methanol (CH3OH) and sodium formate (→ formic acid on acidification).",
            "Formaldehyde has no α-hydrogen; undergoes Cannizzaro in conc. base.",
        )
    } else if benzaldehyde {
        SolverHit::new(
            "Cannizzaro reaction",
            "Benzyl alcohol (C6H5CH2OH) and sodium benzoate (→ benzoic acid on acidification).",
            "Aromatic aldehydes without α-hydrogen undergo Cannizzaro reaction.",
        )
    } else {
        SolverHit::new(
            "Cannizzaro reaction",
            "Alcohol + carboxylate salt (from disproportionation of aldehyde).",
            "Occurs for aldehydes lacking α-hydrogen in strong base.",
        )
    };
    Some(hit)
}

// ============================================================================
// Grignard
// ============================================================================

static GRIGNARD_FORMULA: LazyLock<Regex> =
    LazyLock::new(|| regex(r"ch3mgbr|c2h5mgbr|phmgbr|ch3mgcl|phmgcl"));
static HCHO_WORD: LazyLock<Regex> = LazyLock::new(|| regex(r"\bformaldehyde\b|\bhcho\b|\bmethanal\b"));

const ACIDIC_WORKUP: &[&str] = &[
    "h3o",
    "h₃o",
    "h+",
    "acidic workup",
    "hydrolysis",
    "dil. hcl",
    "dilute hcl",
    "h2o/acid",
];

pub(super) fn grignard(q: &Question<'_>) -> Option<SolverHit> {
    let reagent = q.has_any(&[
        "grignard",
        "rmgx",
        "rm gx",
        "r-mgx",
        "mgx",
        "alkylmagnesium",
        "arylmagne",
        "magnesium halide",
    ]) || GRIGNARD_FORMULA.is_match(q.lower());
    if !reagent {
        return None;
    }

    if q.has_any(&["co2", "co₂", "dry ice", "carbon dioxide"]) {
        return Some(SolverHit::new(
            "Grignard carboxylation (CO2 / CO₂ + RMgX)",
            "CO2 / CO₂ + RMgX → RCOO⁻MgX → (H3O+ / H₃O⁺) **RCOOH (carboxylic acid)**.",
            "Exam trap: CO2 gives carboxylic acid after acidic workup (not alcohol).",
        ));
    }

    const WORKUP_NOTE: &str = "Needs acidic workup (H3O+) to give alcohol from alkoxide.";
    let hit = if HCHO_WORD.is_match(q.lower()) {
        SolverHit::new(
            "Grignard addition to formaldehyde (gives 1° alcohol)",
            "HCHO + RMgX → RCH2O⁻MgX → (H3O+ / H₃O⁺) **RCH2OH (1° alcohol)**.",
            WORKUP_NOTE,
        )
    } else if q.has_any(&["acetaldehyde", "ethanal", "ch3cho"]) {
        SolverHit::new(
            "Grignard addition to aldehyde (gives 2° alcohol)",
            "CH3CHO + RMgX → CH3CH(OMgX)R → (H3O+ / H₃O⁺) **CH3CH(OH)R (2° alcohol)**.",
            WORKUP_NOTE,
        )
    } else if q.has_any(&["acetone", "propanone", "ch3coch3"]) {
        SolverHit::new(
            "Grignard addition to ketone (gives 3° alcohol)",
            "(CH3)2CO + RMgX → (CH3)2C(OMgX)R → (H3O+ / H₃O⁺) **(CH3)2C(OH)R (3° alcohol)**.",
            WORKUP_NOTE,
        )
    } else {
        let mut product = "General: HCHO + RMgX → (H3O+) 1° alcohol; Aldehyde + RMgX → (H3O+) 2° alcohol; Ketone + RMgX → (H3O+) 3° alcohol; CO2 + RMgX → (H3O+) carboxylic acid.".to_string();
        if !q.has_any(ACIDIC_WORKUP) {
            product.push_str(" (Acidic workup is required.)");
        }
        SolverHit::new(
            "Grignard reaction (carbonyl addition)",
            product,
            "Grignard reagents are destroyed by water/alcohol/acids; use dry ether/THF.",
        )
    };
    Some(hit)
}

// ============================================================================
// Hydride reduction
// ============================================================================

static HYDRIDE_BENZALDEHYDE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"\bbenzaldehyde\b|\bc6h5cho\b|\bphcho\b"));
static HYDRIDE_ESTER: LazyLock<Regex> =
    LazyLock::new(|| regex(r"\best(?:er|ers)\b|ethyl acetate|ch3cooc2h5"));
static HYDRIDE_ACID: LazyLock<Regex> =
    LazyLock::new(|| regex(r"carboxylic acid|\bacid\b|acetic acid|ch3cooh"));
static HYDRIDE_AMIDE: LazyLock<Regex> = LazyLock::new(|| regex(r"\bamide\b"));

/// Carbonyl substrate classes a hydride reagent is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HydrideSubstrate {
    Aldehyde,
    Ketone,
    Ester,
    Acid,
    Amide,
}

fn hydride_substrate(q: &Question<'_>) -> Option<HydrideSubstrate> {
    let t = q.lower();
    if HYDRIDE_BENZALDEHYDE.is_match(t) || q.has_any(&["ethanal", "acetaldehyde", "ch3cho"]) {
        Some(HydrideSubstrate::Aldehyde)
    } else if q.has_any(&["acetone", "propanone", "ch3coch3"]) {
        Some(HydrideSubstrate::Ketone)
    } else if HYDRIDE_ESTER.is_match(t) {
        Some(HydrideSubstrate::Ester)
    } else if HYDRIDE_ACID.is_match(t) {
        Some(HydrideSubstrate::Acid)
    } else if HYDRIDE_AMIDE.is_match(t) {
        Some(HydrideSubstrate::Amide)
    } else {
        None
    }
}

pub(super) fn hydride_reduction(q: &Question<'_>) -> Option<SolverHit> {
    let borohydride = q.has_any(&["nabh4", "na bh4", "sodium borohydride", "borohydride"]);
    let aluminium_hydride = q.has_any(&[
        "lialh4",
        "li alh4",
        "lialh₄",
        "lithium aluminium hydride",
        "lithium aluminum hydride",
    ]) || contains_word(q.lower(), "lah");
    if !borohydride && !aluminium_hydride {
        return None;
    }

    let workup = if q.has_any(&[
        "h3o",
        "h₃o",
        "h+",
        "workup",
        "hydrolysis",
        "dil. hcl",
        "dilute hcl",
    ]) {
        "then acidic workup (H3O+)"
    } else {
        "then H3O+ (acidic workup)"
    };
    let substrate = hydride_substrate(q);

    let hit = if borohydride && !aluminium_hydride {
        match substrate {
            Some(HydrideSubstrate::Aldehyde) => SolverHit::new(
                "NaBH4 reduction (aldehyde → 1° alcohol)",
                format!("Aldehyde + NaBH4 → alkoxide → {workup} → **1° alcohol** (RCH2OH)."),
                "Exam trap: NaBH4 reduces aldehydes/ketones; generally NOT esters/acids/amides.",
            ),
            Some(HydrideSubstrate::Ketone) => SolverHit::new(
                "NaBH4 reduction (ketone → 2° alcohol)",
                format!("Ketone + NaBH4 → alkoxide → {workup} → **2° alcohol** (R2CHOH)."),
                "NaBH4 is mild; typically for aldehydes/ketones.",
            ),
            Some(HydrideSubstrate::Ester | HydrideSubstrate::Acid | HydrideSubstrate::Amide) => {
                SolverHit::new(
                    "NaBH4 selectivity (exam convention)",
                    "NaBH4 **does not typically reduce** esters/carboxylic acids/amides under normal conditions (exam convention).",
                    "Use LiAlH4 for stronger reductions of esters/acids/amides.",
                )
            }
            None => SolverHit::new(
                "NaBH4 reduction (selective)",
                format!("NaBH4 reduces **aldehydes/ketones → alcohols** with {workup}."),
                "Exam trap: NaBH4 is mild (selective) vs LAH (strong).",
            ),
        }
    } else {
        match substrate {
            Some(HydrideSubstrate::Aldehyde) => SolverHit::new(
                "LiAlH4 reduction (aldehyde → 1° alcohol)",
                format!("Aldehyde + LiAlH4 → alkoxide → {workup} → **1° alcohol** (RCH2OH)."),
                "LAH is strong; moisture-sensitive; needs dry ether then workup.",
            ),
            Some(HydrideSubstrate::Ketone) => SolverHit::new(
                "LiAlH4 reduction (ketone → 2° alcohol)",
                format!("Ketone + LiAlH4 → alkoxide → {workup} → **2° alcohol** (R2CHOH)."),
                "LAH reduces aldehydes/ketones easily.",
            ),
            Some(HydrideSubstrate::Ester) => SolverHit::new(
                "LiAlH4 reduction (ester → 1° alcohols)",
                format!("Ester + LiAlH4 → {workup} → **two alcohols** (RCH2OH + R'OH)."),
                "Exam key: esters reduce to primary alcohols (and the alkoxy part becomes alcohol).",
            ),
            Some(HydrideSubstrate::Acid) => SolverHit::new(
                "LiAlH4 reduction (carboxylic acid → 1° alcohol)",
                format!("RCOOH + LiAlH4 → {workup} → **RCH2OH (1° alcohol)**."),
                "LAH reduces acids strongly; NaBH4 usually does not (exam convention).",
            ),
            Some(HydrideSubstrate::Amide) => SolverHit::new(
                "LiAlH4 reduction (amide → amine)",
                format!("Amide + LiAlH4 → {workup} → **amine** (RCH2NH2 / substituted amine)."),
                "Exam trap: amide reduces to amine (not alcohol).",
            ),
            None => SolverHit::new(
                "LiAlH4 reduction (strong hydride)",
                format!("LAH (LiAlH4) reduces aldehydes/ketones → alcohols; esters/acids → 1° alcohols; amides → amines, followed by {workup}."),
                "Use dry ether; LAH is destroyed by water.",
            ),
        }
    };
    Some(hit)
}

// ============================================================================
// Perkin
// ============================================================================

pub(super) fn perkin(q: &Question<'_>) -> Option<SolverHit> {
    let aromatic_aldehyde = q.has_any(&[
        "benzaldehyde",
        "c6h5cho",
        "c₆h₅cho",
        "aryl aldehyde",
        "aromatic aldehyde",
        "phcho",
        "ph-cho",
        "ph cho",
    ]);
    let anhydride = q.has_any(&["anhydride", "(ch3co)2o"]);
    let acetate = q.has_any(&["naoac", "koac", "sodium acetate", "potassium acetate", "acetate"]);
    let named = q.has("perkin");
    if !(named || (aromatic_aldehyde && anhydride && acetate)) {
        return None;
    }

    const REAGENTS: &str = "acetic anhydride ((CH3CO)2O) + NaOAc (acetate base), then hydrolysis";
    let hit = if !aromatic_aldehyde {
        SolverHit::new(
            "Perkin reaction",
            "Gives **α,β-unsaturated carboxylic acid** from an **aromatic aldehyde** using **acid anhydride + acetate base (NaOAc/KOAc)**.",
            "Scope trap: Perkin is classically for **aromatic aldehydes** (e.g., benzaldehyde). Product is an unsaturated acid (after hydrolysis), not an aldol product.",
        )
    } else if q.has_any(&["benzaldehyde", "c6h5cho", "c₆h₅cho", "phcho"]) {
        SolverHit::new(
            "Perkin reaction (aromatic aldehyde → cinnamic acid type)",
            format!("C6H5CHO (benzaldehyde) → C6H5CH=CHCOOH (**cinnamic acid**) using {REAGENTS}."),
            "Exam key: product is α,β-unsaturated carboxylic acid (cinnamic acid type).",
        )
    } else {
        SolverHit::new(
            "Perkin reaction",
            "General: Ar–CHO + (CH3CO)2O + NaOAc → Ar–CH=CH–COOH (after hydrolysis).",
            "Exam traps: (1) needs aromatic aldehyde, (2) acetate base is typical, (3) final product is α,β-unsaturated acid (not aldehyde/ketone).",
        )
    };
    Some(hit)
}

// ============================================================================
// Clemmensen / Wolff–Kishner
// ============================================================================

pub(super) fn clemmensen_wolff_kishner(q: &Question<'_>) -> Option<SolverHit> {
    let clemmensen = q.has("zn") && q.has("hg") && q.has("hcl");
    let wolff = q.has_any(&["nh2nh2", "hydrazine"])
        && q.has_any(&["koh", "naoh"])
        && q.has_any(&["heat", "Δ", "delta"]);
    let named = q.has_any(&["clemmensen", "wolff", "kishner"]);
    if !(named || clemmensen || wolff) {
        return None;
    }
    // A named reaction without its reagents still decides the conditions.
    let clemmensen = clemmensen || q.has("clemmensen");
    let wolff = !clemmensen && (wolff || q.has_any(&["wolff", "kishner"]));

    let hit = if q.has_any(&["benzaldehyde", "c6h5cho"]) {
        if clemmensen {
            SolverHit::new(
                "Clemmensen reduction",
                "Toluene (C6H5CH3).",
                "Zn(Hg)/HCl reduces –CHO to –CH3 under acidic conditions.",
            )
        } else if wolff {
            SolverHit::new(
                "Wolff–Kishner reduction",
                "Toluene (C6H5CH3).",
                "NH2NH2/KOH, heat reduces –CHO to –CH3 under basic conditions.",
            )
        } else {
            SolverHit::new(
                "Carbonyl reduction",
                "Alkylbenzene (–CHO reduced to –CH3).",
                "Clemmensen is acidic; Wolff–Kishner is basic.",
            )
        }
    } else if q.has_any(&["acetophenone", "c6h5coch3"]) {
        if clemmensen {
            SolverHit::new(
                "Clemmensen reduction",
                "Ethylbenzene (C6H5CH2CH3).",
                "Zn(Hg)/HCl reduces ketone C=O to CH2 (acidic).",
            )
        } else if wolff {
            SolverHit::new(
                "Wolff–Kishner reduction",
                "Ethylbenzene (C6H5CH2CH3).",
                "NH2NH2/KOH, heat reduces ketone C=O to CH2 (basic).",
            )
        } else {
            SolverHit::new(
                "Carbonyl reduction",
                "Alkylbenzene (ketone reduced to CH2).",
                "Clemmensen is acidic; Wolff–Kishner is basic.",
            )
        }
    } else if clemmensen {
        SolverHit::new(
            "Clemmensen reduction",
            "Carbonyl → alkane (C=O replaced by CH2).",
            "Acidic conditions: Zn(Hg)/HCl.",
        )
    } else if wolff {
        SolverHit::new(
            "Wolff–Kishner reduction",
            "Carbonyl → alkane (C=O replaced by CH2).",
            "Basic conditions: NH2NH2/KOH, heat.",
        )
    } else {
        return None;
    };
    Some(hit)
}

// ============================================================================
// Rosenmund / Stephen
// ============================================================================

static ACETYL_CHLORIDE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"ch3cocl|ethanoyl chloride|acetyl chloride"));
static BENZOYL_CHLORIDE: LazyLock<Regex> = LazyLock::new(|| regex(r"c6h5cocl|benzoyl chloride"));
static PROPANOYL_CHLORIDE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"c2h5cocl|propanoyl chloride|propionyl chloride"));

/// Shared with the acid-derivative solvers.
pub(super) fn has_acid_chloride(q: &Question<'_>) -> bool {
    let t = q.lower();
    q.has_any(&[
        "acid chloride",
        "acyl chloride",
        "alkanoyl chloride",
        "aroyl chloride",
        "cocl",
        "co cl",
        "co-cl",
        "co–cl",
        "co—cl",
    ]) || ACETYL_CHLORIDE.is_match(t)
        || BENZOYL_CHLORIDE.is_match(t)
        || PROPANOYL_CHLORIDE.is_match(t)
}

pub(super) fn acetyl_chloride(q: &Question<'_>) -> bool {
    ACETYL_CHLORIDE.is_match(q.lower())
}

pub(super) fn benzoyl_chloride(q: &Question<'_>) -> bool {
    BENZOYL_CHLORIDE.is_match(q.lower())
}

pub(super) fn rosenmund(q: &Question<'_>) -> Option<SolverHit> {
    let hydrogen = q.has_any(&["h2", "hydrogen"]);
    let palladium = q.has_any(&["pd", "palladium"]);
    let support = q.has_any(&[
        "baso4",
        "ba so4",
        "baso₄",
        "barium sulfate",
        "barium sulphate",
        "poisoned",
        "quinoline",
        "sulphur",
        "sulfur",
    ]);
    let named = q.has("rosenmund");
    let acid_chloride = has_acid_chloride(q);
    if !(named || (hydrogen && palladium && support && acid_chloride)) {
        return None;
    }

    const REACTION: &str = "Rosenmund reduction (acid chloride → aldehyde)";
    let hit = if !acid_chloride {
        SolverHit::new(
            "Rosenmund reduction",
            "Converts **acid chlorides (R–COCl)** to **aldehydes (R–CHO)** using H₂ / Pd–BaSO₄ (poisoned).",
            "Scope trap: Rosenmund is for **acid chlorides**, not carboxylic acids/esters/amides. Poisoned catalyst prevents over-reduction.",
        )
    } else if acetyl_chloride(q) {
        SolverHit::new(
            REACTION,
            "CH3COCl (acetyl chloride) → CH3CHO / CH₃CHO (**ethanal**).",
            "Reagent: H₂ / Pd–BaSO₄ (poisoned). Stops at aldehyde (exam point).",
        )
    } else if benzoyl_chloride(q) {
        SolverHit::new(
            REACTION,
            "C6H5COCl / C₆H₅COCl (benzoyl chloride) → C6H5CHO / C₆H₅CHO (**benzaldehyde**).",
            "Use poisoned Pd–BaSO₄ (often with quinoline) to avoid over-reduction.",
        )
    } else if PROPANOYL_CHLORIDE.is_match(q.lower()) {
        SolverHit::new(
            REACTION,
            "C2H5COCl (propanoyl chloride) → C2H5CHO (**propanal**).",
            "Acid chloride is reduced selectively to aldehyde.",
        )
    } else {
        SolverHit::new(
            REACTION,
            "General: R–COCl + H₂ / Pd–BaSO₄ (poisoned) → R–CHO (aldehyde).",
            "Exam traps: (1) needs **poisoned catalyst** (Pd–BaSO₄, often quinoline), (2) applies to **acid chlorides**, (3) product is **aldehyde**, not alcohol.",
        )
    };
    Some(hit)
}

static ACETONITRILE: LazyLock<Regex> = LazyLock::new(|| regex(r"acetonitrile|methyl cyanide|ch3cn"));
static BENZONITRILE: LazyLock<Regex> = LazyLock::new(|| regex(r"benzonitrile|c6h5cn"));
static PROPIONITRILE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"propionitrile|ethyl cyanide|c2h5cn"));

pub(super) fn stephen(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    let nitrile = q.has_any(&[
        "nitrile", "cyanide", "rcn", "r-cn", "c≡n", "c#n", "-cn", " cn",
    ]) || ACETONITRILE.is_match(t)
        || BENZONITRILE.is_match(t)
        || PROPIONITRILE.is_match(t);
    let stannous = q.has_any(&["sncl2", "sn cl2", "stannous chloride", "sncl₂"]);
    let acid_or_water = q.has_any(&["hcl", "hydrochloric", "h2o", "water", "hydrolysis", "h3o"]);
    let named = q.has("stephen");
    if !(named || (nitrile && stannous && acid_or_water)) {
        return None;
    }

    const REAGENTS: &str = "SnCl2/HCl (stannous chloride + HCl), then H2O";
    const REACTION: &str = "Stephen aldehyde synthesis (nitrile → aldehyde)";
    let hit = if !nitrile {
        SolverHit::new(
            "Stephen aldehyde synthesis",
            format!("Converts **nitriles (R–C≡N)** to **aldehydes (R–CHO)** using **{REAGENTS}**."),
            "Scope trap: requires a nitrile substrate. Product is aldehyde (not alcohol).",
        )
    } else if ACETONITRILE.is_match(t) {
        SolverHit::new(
            REACTION,
            format!("CH3CN (acetonitrile) → CH3CHO (**ethanal**) using {REAGENTS}."),
            "Mechanism: nitrile → iminium salt (with SnCl2/HCl) → hydrolysis → aldehyde.",
        )
    } else if BENZONITRILE.is_match(t) {
        SolverHit::new(
            REACTION,
            format!("C6H5CN / C₆H₅CN (benzonitrile) → C6H5CHO / C₆H₅CHO (**benzaldehyde**) using {REAGENTS}."),
            "Classic aromatic nitrile → aromatic aldehyde (exam favorite).",
        )
    } else if PROPIONITRILE.is_match(t) {
        SolverHit::new(
            REACTION,
            format!("C2H5CN (propionitrile) → C2H5CHO (**propanal**) using {REAGENTS}."),
            "Hydrolysis step is required to reveal the aldehyde.",
        )
    } else {
        SolverHit::new(
            REACTION,
            format!("General: R–C≡N  --({REAGENTS})-->  R–CHO (aldehyde)."),
            "Exam traps: needs nitrile substrate; includes hydrolysis; aldehyde (not alcohol).",
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
    fn heated_ethanal_condenses_to_crotonaldehyde() {
        let hit = run(aldol, "ethanal + dilute NaOH, heat").unwrap();
        assert_eq!(hit.reaction, "Aldol condensation");
        assert!(hit.product.starts_with("Crotonaldehyde"));
        let cold = run(aldol, "ethanal + dilute NaOH, cold").unwrap();
        assert_eq!(cold.reaction, "Aldol addition");
    }

    #[test]
    fn baeyer_villiger_migrates_phenyl() {
        let hit = run(baeyer_villiger, "acetophenone + mCPBA").unwrap();
        assert!(hit.product.contains("phenyl acetate"));
        assert!(hit.notes.contains("Migratory aptitude"));
    }

    #[test]
    fn cannizzaro_needs_concentrated_base() {
        assert!(run(cannizzaro, "benzaldehyde + conc. NaOH").is_some());
        assert!(run(cannizzaro, "benzaldehyde + NaOH").is_none());
    }

    #[test]
    fn grignard_with_carbon_dioxide_gives_acid() {
        let hit = run(grignard, "CH3MgBr + dry ice then H3O+").unwrap();
        assert!(hit.product.contains("RCOOH"));
        let generic = run(grignard, "Grignard reagent with a carbonyl").unwrap();
        assert!(generic.product.ends_with("(Acidic workup is required.)"));
    }

    #[test]
    fn borohydride_leaves_esters_alone() {
        let hit = run(hydride_reduction, "ethyl acetate + NaBH4").unwrap();
        assert_eq!(hit.reaction, "NaBH4 selectivity (exam convention)");
        let lah = run(hydride_reduction, "ethyl acetate + LiAlH4").unwrap();
        assert_eq!(lah.reaction, "LiAlH4 reduction (ester → 1° alcohols)");
    }

    #[test]
    fn perkin_on_benzaldehyde_gives_cinnamic_acid() {
        let hit = run(perkin, "benzaldehyde + acetic anhydride + sodium acetate").unwrap();
        assert!(hit.product.contains("cinnamic acid"));
    }

    #[test]
    fn clemmensen_reduces_acetophenone() {
        let hit = run(clemmensen_wolff_kishner, "acetophenone + Zn-Hg / conc. HCl").unwrap();
        assert_eq!(hit.product, "Ethylbenzene (C6H5CH2CH3).");
    }

    #[test]
    fn rosenmund_stops_at_aldehyde() {
        let hit = run(rosenmund, "benzoyl chloride + H2, Pd/BaSO4").unwrap();
        assert!(hit.product.contains("benzaldehyde"));
        assert!(run(rosenmund, "benzoic acid + H2, Pd").is_none());
    }

    #[test]
    fn stephen_reduces_nitriles() {
        let hit = run(stephen, "CH3CN + SnCl2/HCl then H2O").unwrap();
        assert!(hit.product.contains("ethanal"));
    }
}
