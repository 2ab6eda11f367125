//! "Major product" questions over a handful of named substrates.

use std::sync::LazyLock;

use luma_types::SolverHit;
use regex::Regex;

use super::{Question, contains_any};

const MAJOR_PRODUCT_MARKERS: &[&str] = &[
    "major product",
    "predict the major product",
    "predict major product",
    "major product when",
    "main product",
];
const HALIDE_WORDS: &[&str] = &[
    "bromo",
    "bromide",
    "chloro",
    "chloride",
    "iodo",
    "iodide",
    "alkyl halide",
    "halide",
    "rx",
    "r-x",
];

static NO_PEROXIDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:no|without|(?:in\s+)?absence\s+of)\s+(?:peroxide|h2o2|hydrogen\s+peroxide)\b",
    )
    .expect("valid no-peroxide regex")
});

// Named substrates only; "tert"/"t-" alone also hit tert-butoxide and "but-2-ene".
fn is_tertiary(t: &str) -> bool {
    contains_any(
        t,
        &["tert-butyl", "t-butyl", "tertiary", "2-methyl-2-", "(ch3)3c"],
    )
}

fn koh(t: &str) -> Option<SolverHit> {
    if !t.contains("koh") || !contains_any(t, HALIDE_WORDS) {
        return None;
    }
    let aqueous = contains_any(t, &["aq", "aqueous", "water", "h2o"]);
    let alcoholic = contains_any(t, &["alc", "alcoholic", "ethanolic", "etoh"]);

    if t.contains("2-bromopropane") {
        return Some(if aqueous {
            SolverHit::new("KOH (aqueous)", "propan-2-ol", "Aqueous KOH favors substitution.")
        } else {
            SolverHit::new(
                "KOH (alcoholic / exam convention)",
                "propene",
                "Alcoholic KOH favors elimination.",
            )
        });
    }
    if aqueous {
        Some(SolverHit::new(
            "KOH (aqueous)",
            "Alcohol (substitution product)",
            "Substitution favored in aqueous medium.",
        ))
    } else if alcoholic {
        Some(SolverHit::new(
            "KOH (alcoholic)",
            "Alkene (elimination product)",
            "Elimination favored in alcoholic medium.",
        ))
    } else {
        None
    }
}

fn cyanide(t: &str) -> Option<SolverHit> {
    if !contains_any(t, &["nacn", "kcn", "cn-"]) || !contains_any(t, HALIDE_WORDS) {
        return None;
    }
    Some(if is_tertiary(t) {
        SolverHit::new(
            "Tertiary halide + CN−",
            "Elimination / SN1 products",
            "SN2 not possible on tertiary carbon.",
        )
    } else {
        SolverHit::new(
            "CN− (SN2)",
            "Nitrile (R–CN)",
            "Primary/secondary alkyl halides undergo SN2.",
        )
    })
}

fn hydrogen_bromide(t: &str) -> Option<SolverHit> {
    if !t.contains("hbr") || !t.contains("propene") {
        return None;
    }
    let no_peroxide = NO_PEROXIDE.is_match(t);
    let peroxide = !no_peroxide && contains_any(t, &["peroxide", "h2o2", "hydrogen peroxide"]);

    Some(if peroxide {
        SolverHit::new(
            "HBr + peroxide",
            "1-bromopropane",
            "Anti-Markovnikov (peroxide effect).",
        )
    } else {
        let label = if no_peroxide {
            "HBr (no peroxide)"
        } else {
            "HBr (no peroxide / normal conditions)"
        };
        SolverHit::new(label, "2-bromopropane", "Markovnikov addition.")
    })
}

fn hydration(t: &str) -> Option<SolverHit> {
    let wet = contains_any(t, &["h2o", "water"]);
    let acid = contains_any(t, &["h2so4", "acid", "h+"]);
    (wet && acid && t.contains("propene")).then(|| {
        SolverHit::new(
            "Acid-catalyzed hydration",
            "propan-2-ol",
            "Markovnikov hydration.",
        )
    })
}

fn permanganate(t: &str) -> Option<SolverHit> {
    if !t.contains("kmno4") {
        return None;
    }
    let cold = contains_any(t, &["cold", "dilute", "alkaline"]);
    let hot = contains_any(t, &["hot", "heated"]);

    if t.contains("propene") {
        if cold {
            return Some(SolverHit::new(
                "Cold dilute KMnO4",
                "propane-1,2-diol",
                "Vicinal diol formation.",
            ));
        }
        if hot {
            return Some(SolverHit::new(
                "Hot KMnO4",
                "ethanoic acid + carbon dioxide",
                "Oxidative cleavage: propene splits into ethanoic acid and CO2.",
            ));
        }
    }
    let but_2_ene = contains_any(t, &["2-butene", "but-2-ene", "butene-2", "ch3ch=chch3", "c4h8"]);
    (but_2_ene && hot).then(|| {
        SolverHit::new(
            "Hot KMnO4",
            "2 ethanoic acid",
            "Oxidative cleavage of symmetrical internal alkene gives two molecules of ethanoic acid.",
        )
    })
}

fn ozonolysis(t: &str) -> Option<SolverHit> {
    if !contains_any(t, &["ozone", "o3"]) || !t.contains("propene") {
        return None;
    }
    if contains_any(t, &["zn", "zn/h2o", "dms"]) {
        Some(SolverHit::new(
            "Ozonolysis (reductive)",
            "ethanal + methanal",
            "Aldehydes preserved: ethanal and methanal (from propene).",
        ))
    } else if t.contains("h2o2") {
        Some(SolverHit::new(
            "Ozonolysis (oxidative)",
            "ethanoic acid + methanoic acid",
            "Oxidative workup oxidizes aldehydes to acids: ethanal → ethanoic acid; methanal → methanoic acid.",
        ))
    } else {
        None
    }
}

fn alkyne(t: &str) -> Option<SolverHit> {
    if !t.contains("propyne") {
        return None;
    }
    if t.contains("hgso4") {
        Some(SolverHit::new(
            "HgSO4 hydration",
            "propanone",
            "Methyl ketone formation.",
        ))
    } else if contains_any(t, &["bh3", "hydroboration"]) {
        Some(SolverHit::new(
            "Hydroboration-oxidation",
            "propanal",
            "Anti-Markovnikov aldehyde.",
        ))
    } else {
        None
    }
}

pub(super) fn solve(q: &Question<'_>) -> Option<SolverHit> {
    if !q.has_any(MAJOR_PRODUCT_MARKERS) {
        return None;
    }
    let t = q.lower();
    [
        koh,
        cyanide,
        hydrogen_bromide,
        hydration,
        permanganate,
        ozonolysis,
        alkyne,
    ]
    .iter()
    .find_map(|rule| rule(t))
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
    fn requires_major_product_wording() {
        assert!(solve_text("2-bromopropane + alcoholic KOH").is_none());
    }

    #[test]
    fn koh_medium_decides_substitution_or_elimination() {
        let alc = solve_text("major product: 2-bromopropane + alcoholic KOH, heat").unwrap();
        assert_eq!(alc.product, "propene");
        let aq = solve_text("major product: 2-bromopropane + aqueous KOH").unwrap();
        assert_eq!(aq.product, "propan-2-ol");
    }

    #[test]
    fn negated_peroxide_stays_markovnikov() {
        let hit = solve_text("major product of propene + HBr without peroxide").unwrap();
        assert_eq!(hit.product, "2-bromopropane");
        assert_eq!(hit.reaction, "HBr (no peroxide)");
        let anti = solve_text("major product of propene + HBr in presence of peroxide").unwrap();
        assert_eq!(anti.product, "1-bromopropane");
    }

    #[test]
    fn cyanide_tertiary_check_uses_named_substrates() {
        let tertiary = solve_text("major product: tert-butyl bromide + KCN").unwrap();
        assert_eq!(tertiary.product, "Elimination / SN1 products");
        let allylic = solve_text("major product: 1-bromobut-2-ene + KCN").unwrap();
        assert_eq!(allylic.product, "Nitrile (R–CN)");
    }

    #[test]
    fn ozonolysis_workup_matters() {
        let hit = solve_text("major product: propene + O3 then Zn/H2O").unwrap();
        assert_eq!(hit.product, "ethanal + methanal");
    }
}
