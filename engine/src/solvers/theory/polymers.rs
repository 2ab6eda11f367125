//! Polymers: monomers, polymerization type, classification and uses.

use luma_types::SolverHit;

use super::lookup;
use crate::solvers::{Question, contains_any};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polymerization {
    Addition,
    Condensation,
}

impl Polymerization {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Addition => "ADDITION",
            Self::Condensation => "CONDENSATION",
        }
    }
}

struct Polymer {
    /// The first alias names the polymer in answers.
    aliases: &'static [&'static str],
    monomers: &'static [&'static str],
    polymerization: Polymerization,
    classes: &'static [&'static str],
    uses: &'static str,
    exam_tip: &'static str,
}

impl Polymer {
    fn name(&self) -> &'static str {
        self.aliases.first().copied().unwrap_or_default()
    }

    fn monomer_text(&self) -> String {
        self.monomers.join(" + ")
    }

    fn class_text(&self) -> String {
        self.classes.join(", ")
    }

    fn summary(&self) -> String {
        format!(
            "{}: monomer(s) {}; polymerization {}; class {}; uses: {}",
            self.name(),
            self.monomer_text(),
            self.polymerization.as_str(),
            self.class_text(),
            self.uses
        )
    }
}

use Polymerization::{Addition, Condensation};

static POLYMERS: &[Polymer] = &[
    Polymer {
        aliases: &["polyethene", "polyethylene", "polythene", "pe"],
        monomers: &["ethene (ethylene)"],
        polymerization: Addition,
        classes: &["THERMOPLASTIC"],
        uses: "Packaging, carry bags, bottles, containers (general uses).",
        exam_tip: "Polythene is an addition polymer of ethene.",
    },
    Polymer {
        aliases: &["pvc", "polyvinyl chloride", "poly(vinyl chloride)"],
        monomers: &["vinyl chloride (chloroethene)"],
        polymerization: Addition,
        classes: &["THERMOPLASTIC"],
        uses: "Pipes, insulation of wires, raincoats (general uses).",
        exam_tip: "PVC is an addition polymer; monomer is vinyl chloride.",
    },
    Polymer {
        aliases: &["ptfe", "teflon", "polytetrafluoroethylene"],
        monomers: &["tetrafluoroethene (TFE)"],
        polymerization: Addition,
        classes: &["THERMOPLASTIC"],
        uses: "Non-stick coatings, chemical-resistant linings.",
        exam_tip: "Teflon = PTFE, monomer is tetrafluoroethene.",
    },
    Polymer {
        aliases: &["bakelite", "phenol-formaldehyde resin", "phenol formaldehyde"],
        monomers: &["phenol", "formaldehyde (methanal)"],
        polymerization: Condensation,
        classes: &["THERMOSETTING"],
        uses: "Electrical switches, handles, laminates (general uses).",
        exam_tip: "Bakelite is a thermosetting condensation polymer.",
    },
    Polymer {
        aliases: &["melamine formaldehyde", "melamine-formaldehyde resin"],
        monomers: &["melamine", "formaldehyde (methanal)"],
        polymerization: Condensation,
        classes: &["THERMOSETTING"],
        uses: "Unbreakable crockery, laminates (general uses).",
        exam_tip: "Melamine-formaldehyde is thermosetting.",
    },
    Polymer {
        aliases: &["nylon 6,6", "nylon-6,6", "nylon 66", "nylon66"],
        monomers: &["hexamethylenediamine", "adipic acid (hexanedioic acid)"],
        polymerization: Condensation,
        classes: &["FIBRE"],
        uses: "Fibres for textiles, ropes, tyre cords (general uses).",
        exam_tip: "Nylon-6,6 is formed from hexamethylenediamine + adipic acid (condensation).",
    },
    Polymer {
        aliases: &["nylon 6", "nylon-6"],
        monomers: &["caprolactam (via ring opening)"],
        // Ring-opening polymerization; exam keys group it with addition.
        polymerization: Addition,
        classes: &["FIBRE"],
        uses: "Fibres, engineering plastics.",
        exam_tip: "Nylon-6 is produced from caprolactam (ring opening).",
    },
    Polymer {
        aliases: &["terylene", "dacron", "pet", "polyethylene terephthalate"],
        monomers: &[
            "ethylene glycol",
            "terephthalic acid (benzene-1,4-dicarboxylic acid)",
        ],
        polymerization: Condensation,
        classes: &["FIBRE", "THERMOPLASTIC"],
        uses: "Polyester fibres, bottles (PET).",
        exam_tip: "Terylene/Dacron/PET is a condensation polymer of ethylene glycol + terephthalic acid.",
    },
    Polymer {
        aliases: &["buna-s", "sbr", "styrene butadiene rubber"],
        monomers: &["1,3-butadiene", "styrene"],
        polymerization: Addition,
        classes: &["ELASTOMER"],
        uses: "Tyres, rubber goods.",
        exam_tip: "Buna-S = butadiene + styrene (addition copolymer).",
    },
    Polymer {
        aliases: &["buna-n", "nbr", "nitrile rubber"],
        monomers: &["1,3-butadiene", "acrylonitrile"],
        polymerization: Addition,
        classes: &["ELASTOMER"],
        uses: "Oil-resistant rubber goods.",
        exam_tip: "Buna-N = butadiene + acrylonitrile.",
    },
    Polymer {
        aliases: &["neoprene", "polychloroprene", "chloroprene rubber"],
        monomers: &["chloroprene (2-chloro-1,3-butadiene)"],
        polymerization: Addition,
        classes: &["ELASTOMER"],
        uses: "Oil/chemical resistant rubber products.",
        exam_tip: "Neoprene is the polymer of chloroprene.",
    },
    Polymer {
        aliases: &["gutta-percha", "gutta percha"],
        monomers: &["isoprene (exam-standard reference)"],
        polymerization: Addition,
        classes: &["NATURAL"],
        uses: "Natural polymer (historical uses).",
        exam_tip: "Gutta-percha is a natural polymer of isoprene.",
    },
    Polymer {
        aliases: &["natural rubber", "rubber", "polyisoprene"],
        monomers: &["isoprene (2-methyl-1,3-butadiene)"],
        polymerization: Addition,
        classes: &["NATURAL", "ELASTOMER"],
        uses: "Rubber products; vulcanization improves properties.",
        exam_tip: "Natural rubber is cis-1,4-polyisoprene (exam standard).",
    },
];

fn about(polymer: &Polymer, t: &str) -> SolverHit {
    let name = polymer.name();
    let asks_monomer = contains_any(
        t,
        &["monomer", "made from", "formed from", "prepared from", "starting material"],
    );
    let asks_type = contains_any(
        t,
        &[
            "addition or condensation",
            "type of polymerization",
            "polymerization type",
            "addition polymer",
            "condensation polymer",
        ],
    );
    let asks_class = contains_any(
        t,
        &["thermoplastic", "thermosetting", "elastomer", "fibre", "fiber", "natural", "synthetic"],
    );
    let asks_use = contains_any(t, &["use", "application"]);

    if asks_monomer {
        let monomers = polymer.monomer_text();
        let explanation = format!("{name} is formed from: {monomers}.");
        SolverHit::new(explanation, monomers, polymer.exam_tip)
    } else if asks_type {
        let kind = polymer.polymerization.as_str();
        let explanation = format!(
            "{name} is classified as a {} polymerization product (exam standard).",
            kind.to_lowercase()
        );
        SolverHit::new(explanation, kind, polymer.exam_tip)
    } else if asks_class {
        let classes = polymer.class_text();
        let explanation = format!("Classification tags for {name}: {classes}.");
        SolverHit::new(explanation, classes, polymer.exam_tip)
    } else if asks_use {
        SolverHit::new("", polymer.uses, polymer.exam_tip)
    } else {
        SolverHit::new("", polymer.summary(), polymer.exam_tip)
    }
}

const ADDITION: &str = "Addition polymerization: monomers (usually alkenes) add to form a polymer without elimination of small molecules.";
const CONDENSATION: &str = "Condensation polymerization: bifunctional monomers combine with elimination of small molecules (e.g., H2O, HCl) to form a polymer.";
const THERMO: &str = "Thermoplastics soften on heating and can be remoulded; thermosetting polymers are highly cross-linked and do not soften on heating.";
const COPOLYMER: &str = "Copolymers are formed from two (or more) different monomers (e.g., Buna-S from butadiene + styrene).";
const SCOPE: &str = "Polymers v1 supports common NCERT/exam polymers. Please mention the polymer name (e.g., PVC, Teflon, Nylon-6,6, Bakelite).";

fn theory(t: &str) -> Option<&'static str> {
    if contains_any(
        t,
        &[
            "define addition polymerization",
            "what is addition polymerization",
            "addition polymerisation",
        ],
    ) {
        Some(ADDITION)
    } else if contains_any(
        t,
        &[
            "define condensation polymerization",
            "what is condensation polymerization",
            "condensation polymerisation",
        ],
    ) {
        Some(CONDENSATION)
    } else if contains_any(t, &["thermoplastic", "thermosetting"]) {
        Some(THERMO)
    } else if contains_any(t, &["copolymer", "copolymerization", "copolymerisation"]) {
        Some(COPOLYMER)
    } else if contains_any(t, &["polymer", "monomer"]) {
        Some(SCOPE)
    } else {
        None
    }
}

pub(crate) fn solve(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    if let Some(polymer) = lookup(t, POLYMERS, |polymer| polymer.aliases) {
        return Some(about(polymer, t));
    }
    theory(t).map(|answer| SolverHit::new("", answer, ""))
}
