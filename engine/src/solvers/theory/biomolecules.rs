//! Biomolecules: carbohydrates, vitamins, proteins and nucleic acids.

use luma_types::SolverHit;

use super::lookup;
use crate::solvers::{Question, contains_any};

struct Carbohydrate {
    aliases: &'static [&'static str],
    kind: &'static str,
    reducing: bool,
    notes: &'static str,
    tests: &'static str,
}

impl Carbohydrate {
    const fn reducing_label(&self) -> &'static str {
        if self.reducing {
            "REDUCING"
        } else {
            "NON-REDUCING"
        }
    }
}

static CARBOHYDRATES: &[Carbohydrate] = &[
    Carbohydrate {
        aliases: &["glucose", "d-glucose"],
        kind: "MONOSACCHARIDE (ALDOHEXOSE)",
        reducing: true,
        notes: "Common blood sugar; forms glucosidic linkages in polysaccharides.",
        tests: "Gives positive Fehling's/Tollens' (reducing sugar).",
    },
    Carbohydrate {
        aliases: &["fructose", "d-fructose"],
        kind: "MONOSACCHARIDE (KETOHEXOSE)",
        reducing: true,
        notes: "Fruit sugar; ketose but behaves as reducing sugar in alkaline tests.",
        tests: "Acts as reducing sugar in Fehling's/Tollens' due to tautomerization.",
    },
    Carbohydrate {
        aliases: &["sucrose", "cane sugar"],
        kind: "DISACCHARIDE",
        reducing: false,
        notes: "Non-reducing because both anomeric carbons are involved in glycosidic linkage.",
        tests: "Does not give Fehling's/Tollens' unless hydrolyzed.",
    },
    Carbohydrate {
        aliases: &["maltose"],
        kind: "DISACCHARIDE",
        reducing: true,
        notes: "Reducing disaccharide; has a free anomeric carbon.",
        tests: "Gives positive Fehling's/Tollens' (reducing).",
    },
    Carbohydrate {
        aliases: &["lactose"],
        kind: "DISACCHARIDE",
        reducing: true,
        notes: "Milk sugar; reducing disaccharide.",
        tests: "Gives positive Fehling's/Tollens'.",
    },
    Carbohydrate {
        aliases: &["starch"],
        kind: "POLYSACCHARIDE",
        reducing: false,
        notes: "Storage polysaccharide in plants; gives blue color with iodine.",
        tests: "Iodine test: blue color.",
    },
    Carbohydrate {
        aliases: &["cellulose"],
        kind: "POLYSACCHARIDE",
        reducing: false,
        notes: "Structural polysaccharide in plants; not digested by humans.",
        tests: "Does not give iodine blue like starch (exam-level distinction).",
    },
    Carbohydrate {
        aliases: &["glycogen"],
        kind: "POLYSACCHARIDE",
        reducing: false,
        notes: "Storage polysaccharide in animals; highly branched.",
        tests: "Iodine test: reddish-brown (exam-level).",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Solubility {
    Fat,
    Water,
}

impl Solubility {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Fat => "FAT_SOLUBLE",
            Self::Water => "WATER_SOLUBLE",
        }
    }

    const fn phrase(self) -> &'static str {
        match self {
            Self::Fat => "fat soluble",
            Self::Water => "water soluble",
        }
    }
}

struct Vitamin {
    aliases: &'static [&'static str],
    solubility: Solubility,
    deficiency: &'static str,
}

static VITAMINS: &[Vitamin] = &[
    Vitamin {
        aliases: &["vitamin a", "retinol"],
        solubility: Solubility::Fat,
        deficiency: "Night blindness (nyctalopia), xerophthalmia (exam standard).",
    },
    Vitamin {
        aliases: &["vitamin b1", "thiamine"],
        solubility: Solubility::Water,
        deficiency: "Beriberi.",
    },
    Vitamin {
        aliases: &["vitamin b2", "riboflavin"],
        solubility: Solubility::Water,
        deficiency: "Cheilosis, glossitis (exam standard).",
    },
    Vitamin {
        aliases: &["vitamin b3", "niacin"],
        solubility: Solubility::Water,
        deficiency: "Pellagra (3 D's: dermatitis, diarrhea, dementia).",
    },
    Vitamin {
        aliases: &["vitamin b6", "pyridoxine"],
        solubility: Solubility::Water,
        deficiency: "Dermatitis, anemia (exam standard).",
    },
    Vitamin {
        aliases: &["vitamin b12", "cobalamin"],
        solubility: Solubility::Water,
        deficiency: "Pernicious anemia.",
    },
    Vitamin {
        aliases: &["vitamin c", "ascorbic acid"],
        solubility: Solubility::Water,
        deficiency: "Scurvy (bleeding gums, poor wound healing).",
    },
    Vitamin {
        aliases: &["vitamin d", "calciferol"],
        solubility: Solubility::Fat,
        deficiency: "Rickets (children), osteomalacia (adults).",
    },
    Vitamin {
        aliases: &["vitamin e", "tocopherol"],
        solubility: Solubility::Fat,
        deficiency: "Reproductive issues (exam standard, simplified).",
    },
    Vitamin {
        aliases: &["vitamin k"],
        solubility: Solubility::Fat,
        deficiency: "Delayed blood clotting (hemorrhage).",
    },
];

fn first_alias(aliases: &[&'static str]) -> &'static str {
    aliases.first().copied().unwrap_or_default()
}

fn about_carbohydrate(carb: &Carbohydrate, t: &str) -> SolverHit {
    let name = first_alias(carb.aliases);
    let asks_reducing = t.contains("reducing");
    let asks_type = contains_any(
        t,
        &[
            "monosaccharide",
            "disaccharide",
            "polysaccharide",
            "type of carbohydrate",
            "classify",
        ],
    );
    let asks_test = contains_any(t, &["fehling", "tollens", "iodine", "test", "reaction"]);
    let asks_notes = contains_any(t, &["note", "property", "properties", "why", "reason"]);

    if asks_type {
        SolverHit::new(format!("{name} is classified as: {}.", carb.kind), carb.kind, "")
    } else if asks_reducing {
        SolverHit::new(
            carb.tests,
            carb.reducing_label(),
            "Reducing sugars give positive Fehling's/Tollens' due to free (or effectively free) anomeric carbon.",
        )
    } else if asks_test {
        SolverHit::new("", carb.tests, "")
    } else if asks_notes {
        SolverHit::new("", carb.notes, "")
    } else {
        let summary = format!(
            "{name}: {}; {}. {} {}",
            carb.kind,
            carb.reducing_label(),
            carb.tests,
            carb.notes
        );
        SolverHit::new("", summary, "")
    }
}

fn about_vitamin(vitamin: &Vitamin, t: &str) -> SolverHit {
    let name = first_alias(vitamin.aliases);
    let asks_solubility = t.contains("soluble") || t.contains("solubility");
    let asks_deficiency = contains_any(t, &["deficiency", "disease", "causes", "leads to"]);

    if asks_solubility {
        let explanation = format!(
            "{name} is {} (exam standard).",
            vitamin.solubility.phrase()
        );
        SolverHit::new(explanation, vitamin.solubility.as_str(), "")
    } else if asks_deficiency {
        SolverHit::new("", vitamin.deficiency, "")
    } else {
        let summary = format!(
            "{name}: {}; deficiency: {}",
            vitamin.solubility.as_str(),
            vitamin.deficiency
        );
        SolverHit::new("", summary, "")
    }
}

const PEPTIDE_BOND: &str = "Peptide bond is an amide linkage (–CO–NH–) formed between the –COOH group of one amino acid and –NH2 group of another.";
const STRUCTURE_LEVELS: &str = "Protein structure: Primary (sequence), Secondary (α-helix/β-sheet via H-bonding), Tertiary (3D folding), Quaternary (association of subunits).";
const ENZYMES: &str = "Enzymes are biological catalysts (mostly proteins) with high specificity; activity depends on pH and temperature.";
const DNA_VS_RNA: &str = "DNA vs RNA: DNA usually has deoxyribose sugar and bases A, G, C, T; RNA has ribose sugar and bases A, G, C, U. DNA is typically double-stranded; RNA is typically single-stranded (exam standard).";
const NUCLEOSIDE: &str = "Nucleoside = sugar + base. Nucleotide = nucleoside + phosphate group(s).";
const SCOPE: &str = "Biomolecules v1 supports carbohydrates (reducing/non-reducing, tests), vitamins (solubility/deficiency), proteins (peptide bond/structure), and nucleic acids (DNA vs RNA). Ask with a specific molecule/topic (e.g., sucrose reducing?, vitamin C deficiency?).";

fn theory(t: &str) -> Option<&'static str> {
    let snippet = if t.contains("peptide bond") {
        PEPTIDE_BOND
    } else if contains_any(
        t,
        &[
            "primary structure",
            "secondary structure",
            "tertiary structure",
            "quaternary structure",
            "levels of protein",
        ],
    ) {
        STRUCTURE_LEVELS
    } else if t.contains("enzyme") {
        ENZYMES
    } else if contains_any(t, &["dna vs rna", "difference between dna and rna", "dna and rna difference"]) {
        DNA_VS_RNA
    } else if contains_any(t, &["nucleoside", "nucleotide"]) {
        NUCLEOSIDE
    } else if contains_any(
        t,
        &["biomolecule", "carbohydrate", "protein", "vitamin", "nucleic acid"],
    ) {
        SCOPE
    } else {
        return None;
    };
    Some(snippet)
}

pub(crate) fn solve(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    if let Some(carb) = lookup(t, CARBOHYDRATES, |carb| carb.aliases) {
        return Some(about_carbohydrate(carb, t));
    }
    if let Some(vitamin) = lookup(t, VITAMINS, |vitamin| vitamin.aliases) {
        return Some(about_vitamin(vitamin, t));
    }
    theory(t).map(|answer| SolverHit::new("", answer, ""))
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
    fn sucrose_is_non_reducing() {
        let hit = solve_text("Is sucrose a reducing sugar?").unwrap();
        assert_eq!(hit.product, "NON-REDUCING");
        assert!(hit.notes.contains("anomeric carbon"));
    }

    #[test]
    fn vitamin_c_deficiency_is_scurvy() {
        let hit = solve_text("Deficiency of vitamin C causes which disease?").unwrap();
        assert!(hit.product.starts_with("Scurvy"));
    }

    #[test]
    fn b12_is_not_mistaken_for_b1() {
        let hit = solve_text("vitamin B12").unwrap();
        assert!(hit.product.contains("Pernicious anemia"));
    }

    #[test]
    fn protein_theory() {
        let hit = solve_text("What is a peptide bond?").unwrap();
        assert_eq!(hit.product, PEPTIDE_BOND);
        assert!(solve_text("what colour is the sky on mars").is_none());
    }
}
