//! Chemistry in everyday life: drugs, cleansing agents and food additives.

use luma_types::SolverHit;

use super::lookup;
use crate::solvers::{Question, contains_any};

struct Substance {
    aliases: &'static [&'static str],
    classes: &'static [&'static str],
    usage: &'static str,
    note: &'static str,
}

impl Substance {
    fn name(&self) -> &'static str {
        self.aliases.first().copied().unwrap_or_default()
    }
}

static SUBSTANCES: &[Substance] = &[
    Substance {
        aliases: &["aspirin", "acetylsalicylic acid"],
        classes: &["ANALGESIC", "ANTIPYRETIC", "ANTI-INFLAMMATORY (NSAID)"],
        usage: "Pain relief and fever reduction (exam standard).",
        note: "Also used as anti-inflammatory (NSAID).",
    },
    Substance {
        aliases: &["paracetamol", "acetaminophen"],
        classes: &["ANALGESIC", "ANTIPYRETIC"],
        usage: "Pain relief and fever reduction.",
        note: "Commonly used antipyretic; not classified as antibiotic.",
    },
    Substance {
        aliases: &["penicillin"],
        classes: &["ANTIBIOTIC"],
        usage: "Antibiotic used against bacterial infections (exam standard).",
        note: "Antibiotics act against bacteria; not against viruses.",
    },
    Substance {
        aliases: &["streptomycin"],
        classes: &["ANTIBIOTIC"],
        usage: "Antibiotic (exam standard).",
        note: "Used in bacterial infections; antibiotic category.",
    },
    Substance {
        aliases: &["chloramphenicol"],
        classes: &["ANTIBIOTIC"],
        usage: "Antibiotic (exam standard).",
        note: "Antibiotic category.",
    },
    Substance {
        aliases: &["diazepam"],
        classes: &["TRANQUILIZER"],
        usage: "Used as a tranquilizer (anti-anxiety/sedative in exam context).",
        note: "Tranquilizers reduce anxiety and induce calmness.",
    },
    Substance {
        aliases: &["milk of magnesia", "magnesium hydroxide", "mg(oh)2"],
        classes: &["ANTACID"],
        usage: "Neutralizes excess stomach acid (antacid).",
        note: "Antacids are weak bases used to treat acidity.",
    },
    Substance {
        aliases: &["sodium bicarbonate", "nahco3", "baking soda"],
        classes: &["ANTACID"],
        usage: "Used as antacid (temporary relief).",
        note: "Excess use can cause alkalosis (advanced); keep exam-safe.",
    },
    Substance {
        aliases: &["tincture of iodine", "iodine"],
        classes: &["ANTISEPTIC"],
        usage: "Applied on wounds to prevent infection (antiseptic).",
        note: "Antiseptics are applied to living tissues.",
    },
    Substance {
        aliases: &["phenol", "carbolic acid"],
        classes: &["DISINFECTANT", "ANTISEPTIC (LOW CONC.)"],
        usage: "Used as disinfectant; at low concentration can act as antiseptic (exam standard).",
        note: "Disinfectants are used on non-living surfaces.",
    },
    Substance {
        aliases: &["sodium benzoate"],
        classes: &["PRESERVATIVE"],
        usage: "Food preservative (prevents microbial growth).",
        note: "Common preservative in acidic foods.",
    },
    Substance {
        aliases: &["bht", "butylated hydroxytoluene"],
        classes: &["ANTIOXIDANT"],
        usage: "Food antioxidant (prevents oxidation/rancidity).",
        note: "Antioxidants prevent oxidative deterioration of food.",
    },
    Substance {
        aliases: &["bha", "butylated hydroxyanisole"],
        classes: &["ANTIOXIDANT"],
        usage: "Food antioxidant (prevents oxidation/rancidity).",
        note: "Antioxidants prevent oxidation of food fats/oils.",
    },
    Substance {
        aliases: &["saccharin"],
        classes: &["ARTIFICIAL_SWEETENER"],
        usage: "Artificial sweetener (very sweet, used in diet foods).",
        note: "Non-nutritive sweetener (exam standard).",
    },
    Substance {
        aliases: &["aspartame"],
        classes: &["ARTIFICIAL_SWEETENER"],
        usage: "Artificial sweetener (used in sugar-free products).",
        note: "Not recommended for cooking at high temperature (often mentioned in textbooks).",
    },
];

fn about(substance: &Substance, t: &str) -> SolverHit {
    let classes = substance.classes.join(", ");
    let asks_class = contains_any(t, &["class", "category", "type", "belongs to", "used as"]);
    let asks_use = contains_any(t, &["use", "application", "purpose"]);
    let asks_note = contains_any(t, &["note", "why", "reason", "explain"]);

    if asks_class {
        SolverHit::new(substance.note, classes, "")
    } else if asks_use {
        SolverHit::new("", substance.usage, "")
    } else if asks_note {
        SolverHit::new("", substance.note, "")
    } else {
        let summary = format!(
            "{}: {classes}. {} {}",
            substance.name(),
            substance.usage,
            substance.note
        );
        SolverHit::new("", summary, "")
    }
}

const ANTISEPTIC: &str = "Antiseptics are applied to living tissues (wounds/skin) to prevent infection; disinfectants are used on non-living surfaces to kill microbes.";
const SOAP: &str = "Soaps are sodium/potassium salts of long-chain fatty acids and form scum with Ca2+/Mg2+ in hard water. Detergents are synthetic cleansing agents that work better in hard water (do not form scum easily).";
const ANALGESIC: &str = "Analgesics relieve pain; antipyretics reduce fever. Some drugs (e.g., paracetamol/aspirin) show both actions.";
const ANTIBIOTIC: &str = "Antibiotics are drugs used against bacterial infections; they do not act against viruses (exam standard).";
const FOOD_ADDITIVES: &str = "Food additives include preservatives (prevent microbial spoilage), antioxidants (prevent oxidation/rancidity), and sweeteners.";
const SCOPE: &str = "Everyday Life v1 supports drugs (classification/uses), antiseptic vs disinfectant, soap vs detergent, and food additives (preservatives/antioxidants/sweeteners). Ask with a specific item (e.g., aspirin class?, sodium benzoate used as what?).";

fn theory(t: &str) -> Option<&'static str> {
    let snippet = if contains_any(t, &["antiseptic", "disinfectant"]) {
        ANTISEPTIC
    } else if contains_any(t, &["soap", "detergent"]) {
        SOAP
    } else if contains_any(t, &["analgesic", "antipyretic"]) {
        ANALGESIC
    } else if t.contains("antibiotic") {
        ANTIBIOTIC
    } else if contains_any(t, &["food additive", "preservative", "antioxidant", "sweetener"]) {
        FOOD_ADDITIVES
    } else if t.contains("everyday life") {
        SCOPE
    } else {
        return None;
    };
    Some(snippet)
}

pub(crate) fn solve(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    if let Some(substance) = lookup(t, SUBSTANCES, |substance| substance.aliases) {
        return Some(about(substance, t));
    }
    theory(t).map(|answer| SolverHit::new("", answer, ""))
}
