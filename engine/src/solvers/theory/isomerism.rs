//! Isomerism: classify a named pair, answer a definition, or name the type
//! a question mentions.

use std::sync::LazyLock;

use luma_types::SolverHit;
use regex::Regex;

use crate::solvers::{Question, contains_any};

const EXAM_TIP: &str = "Exam tip: identify type precisely.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Isomerism {
    Chain,
    Position,
    Functional,
    Metamerism,
    Tautomerism,
    Geometrical,
    Optical,
    Conformational,
}

impl Isomerism {
    const fn family(self) -> &'static str {
        match self {
            Self::Chain
            | Self::Position
            | Self::Functional
            | Self::Metamerism
            | Self::Tautomerism => "Structural",
            Self::Geometrical | Self::Optical | Self::Conformational => "Stereo",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Chain => "Chain",
            Self::Position => "Position",
            Self::Functional => "Functional",
            Self::Metamerism => "Metamerism",
            Self::Tautomerism => "Tautomerism",
            Self::Geometrical => "Geometrical",
            Self::Optical => "Optical",
            Self::Conformational => "Conformational",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Classified {
    kind: Isomerism,
    reason: &'static str,
}

impl Classified {
    const fn new(kind: Isomerism, reason: &'static str) -> Self {
        Self { kind, reason }
    }

    fn answer(self) -> String {
        format!(
            "{} isomerism → {}. {}",
            self.kind.family(),
            self.kind.label(),
            self.reason
        )
    }
}

// ============================================================================
// Text helpers
// ============================================================================

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

fn normalize(text: &str) -> String {
    let text = text
        .trim()
        .replace('’', "'")
        .replace(['“', '”'], "\"")
        .replace(['–', '—'], "-");
    WHITESPACE.replace_all(&text, " ").into_owned()
}

/// Lower-cased with common synonyms folded to one spelling.
fn canonical(text: &str) -> String {
    normalize(text)
        .to_lowercase()
        .replace("ethanal", "acetaldehyde")
        .replace("ethenol", "vinyl alcohol")
}

fn looks_like_theory(lower: &str) -> bool {
    ["define ", "what is ", "explain ", "write "]
        .iter()
        .any(|prefix| lower.starts_with(prefix))
        || contains_any(lower, &[" define ", " what is ", " explain "])
}

// ============================================================================
// Pair extraction
// ============================================================================

static BETWEEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bbetween\b(.+?)\band\b(.+)").expect("valid pair regex")
});
static ARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(.+?)\band\b(.+?)\bare\b").expect("valid pair regex")
});
static VERSUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(.+?)\s+(?:vs\.?|v/s)\s+(.+)").expect("valid pair regex")
});

fn trim_left_side(text: &str) -> &str {
    text.trim_matches(|c| " :,-".contains(c))
}

fn trim_right_side(text: &str) -> &str {
    text.trim_matches(|c| " :,-?.".contains(c))
}

fn captured_pair(regex: &Regex, text: &str) -> Option<(String, String)> {
    let captures = regex.captures(text)?;
    let a = trim_left_side(captures.get(1)?.as_str());
    let b = trim_right_side(captures.get(2)?.as_str());
    (!a.is_empty() && !b.is_empty()).then(|| (a.to_string(), b.to_string()))
}

fn split_parts<'t>(text: &'t str, separator: &str) -> Vec<&'t str> {
    text.split(separator)
        .filter(|part| !part.trim().is_empty())
        .map(trim_right_side)
        .collect()
}

/// The two things a question compares, if it names exactly two.
fn extract_pair(text: &str) -> Option<(String, String)> {
    for regex in [&*BETWEEN, &*ARE, &*VERSUS] {
        if let Some(pair) = captured_pair(regex, text) {
            return Some(pair);
        }
    }

    let owned = |a: &str, b: &str| Some((a.to_string(), b.to_string()));
    for separator in ["|", ";"] {
        if text.contains(separator)
            && let [a, b, ..] = split_parts(text, separator).as_slice()
            && !a.is_empty()
            && !b.is_empty()
        {
            return owned(a, b);
        }
    }
    for separator in [":", ","] {
        if text.contains(separator)
            && let [a, b] = split_parts(text, separator).as_slice()
            && !a.is_empty()
            && !b.is_empty()
        {
            return owned(a, b);
        }
    }
    if text.contains(" / ")
        && let [a, b] = split_parts(text, " / ").as_slice()
        && a.len() <= 60
        && b.len() <= 60
    {
        return owned(a, b);
    }
    None
}

// ============================================================================
// Classification
// ============================================================================

fn classify(lower: &str) -> Option<Classified> {
    use Isomerism::{
        Chain, Conformational, Functional, Geometrical, Metamerism, Optical, Position,
        Tautomerism,
    };

    let found = if lower.contains("metamer") {
        Classified::new(
            Metamerism,
            "Metamerism is structural isomerism due to different alkyl groups on either side of a polyvalent functional group (e.g., ethers).",
        )
    } else if lower.contains("chain isomer") {
        Classified::new(
            Chain,
            "Chain isomerism is structural isomerism due to different branching.",
        )
    } else if lower.contains("position isomer") {
        Classified::new(
            Position,
            "Position isomerism is structural isomerism due to different position of functional group/substituent.",
        )
    } else if lower.contains("functional isomer") {
        Classified::new(
            Functional,
            "Functional isomerism is structural isomerism due to different functional groups.",
        )
    } else if lower.contains("tautomer") {
        Classified::new(
            Tautomerism,
            "Tautomerism is dynamic equilibrium between two structural forms (commonly keto–enol).",
        )
    } else if lower.contains("conformation") {
        Classified::new(
            Conformational,
            "Conformational isomerism arises due to rotation about sigma bonds.",
        )
    } else if contains_any(lower, &["optical", "enantiomer"]) {
        Classified::new(
            Optical,
            "Optical isomerism arises due to chirality (enantiomers).",
        )
    } else if contains_any(
        lower,
        &["geometrical", "cis", "trans", "e/z", "diastereomer", "racemic", "meso"],
    ) {
        Classified::new(
            Geometrical,
            "Geometrical isomerism arises due to restricted rotation about C=C (cis/trans or E/Z).",
        )
    } else {
        return None;
    };
    Some(found)
}

fn either_way(a: &str, b: &str, test: impl Fn(&str, &str) -> bool) -> bool {
    test(a, b) || test(b, a)
}

fn classify_pair(a: &str, b: &str) -> Option<Classified> {
    use Isomerism::{
        Chain, Conformational, Functional, Geometrical, Metamerism, Optical, Position,
        Tautomerism,
    };

    let a = &canonical(a);
    let b = &canonical(b);

    let chain = either_way(a, b, |x, y| {
        x.contains("butane") && contains_any(y, &["isobutane", "2-methylpropane", "methylpropane"])
    });
    if chain {
        return Some(Classified::new(
            Chain,
            "n-Butane and isobutane differ by branching → chain isomerism (Structural).",
        ));
    }

    let propanols = [a, b]
        .iter()
        .all(|side| side.contains("propan") && side.contains("ol"));
    let position = propanols
        && either_way(a, b, |x, y| {
            contains_any(x, &["1-propanol", "propan-1-ol", "n-propanol"])
                && contains_any(y, &["2-propanol", "propan-2-ol", "isopropyl alcohol"])
        });
    if position {
        return Some(Classified::new(
            Position,
            "Propan-1-ol and propan-2-ol differ in –OH position → position isomerism (Structural).",
        ));
    }

    let functional = either_way(a, b, |x, y| {
        x.contains("ethanol")
            && contains_any(y, &["dimethyl ether", "methoxymethane", "methoxy methane"])
    });
    if functional {
        return Some(Classified::new(
            Functional,
            "Ethanol (alcohol) and dimethyl ether (ether) → functional isomerism (Structural).",
        ));
    }

    if either_way(a, b, |x, y| x.contains("acetaldehyde") && y.contains("vinyl alcohol")) {
        return Some(Classified::new(
            Tautomerism,
            "Acetaldehyde and vinyl alcohol are keto–enol tautomers → tautomerism (Structural).",
        ));
    }

    let cis_trans = a.contains("2-butene")
        && b.contains("2-butene")
        && either_way(a, b, |x, y| x.contains("cis") && y.contains("trans"));
    if cis_trans {
        return Some(Classified::new(
            Geometrical,
            "cis/trans around C=C → geometrical isomerism (stereo).",
        ));
    }

    let mirror_labels = either_way(a, b, |x, y| {
        (x.contains("d-") && y.contains("l-"))
            || (x.contains("(r") && y.contains("(s"))
            || (x.contains(" r") && y.contains(" s"))
    });
    if a.contains("lactic") && b.contains("lactic") && mirror_labels {
        return Some(Classified::new(
            Optical,
            "D/L or R/S forms are enantiomers → optical isomerism (stereo).",
        ));
    }

    let rotamers = a.contains("ethane")
        && b.contains("ethane")
        && either_way(a, b, |x, y| x.contains("staggered") && y.contains("eclipsed"));
    if rotamers {
        return Some(Classified::new(
            Conformational,
            "Rotation about C–C sigma bond → conformational isomerism (stereo).",
        ));
    }

    let ether = |side: &str| {
        contains_any(
            side,
            &["ether", "alkoxy", "-o-", "methoxy", "ethoxy", "propoxy", "butoxy"],
        )
    };
    (ether(a) && ether(b)).then(|| {
        Classified::new(
            Metamerism,
            "Ethers with different alkyl groups on either side of oxygen → metamerism (Structural).",
        )
    })
}

fn theory_answer(lower: &str) -> String {
    if lower.starts_with("what is isomerism")
        || lower.starts_with("define isomerism")
        || lower.contains(" isomerism")
    {
        return "Isomerism: compounds having the same molecular formula but different arrangement of atoms. Main types: Structural isomerism (different connectivity) and Stereoisomerism (same connectivity, different spatial arrangement).".to_string();
    }
    classify(lower).map_or_else(
        || "Isomerism: same molecular formula, different arrangement. Structural isomerism and stereoisomerism are the two broad categories.".to_string(),
        Classified::answer,
    )
}

// ============================================================================
// Entry point
// ============================================================================

pub(crate) fn solve(q: &Question<'_>) -> Option<SolverHit> {
    if !q.has_any(&["isomer", "tautomer", "metamer"]) {
        return None;
    }
    let text = normalize(q.text());
    let lower = canonical(&text);

    let answer = if let Some((a, b)) = extract_pair(&text) {
        classify_pair(&a, &b).map_or_else(
            || "They are isomers; exact type depends on whether connectivity differs (Structural) or only spatial arrangement differs (stereo).".to_string(),
            Classified::answer,
        )
    } else if looks_like_theory(&lower) {
        theory_answer(&lower)
    } else {
        classify(&lower).map_or_else(
            || "Could not recognize the isomerism type from the question.".to_string(),
            Classified::answer,
        )
    };
    Some(SolverHit::new("", answer, EXAM_TIP))
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
    fn butane_pair_is_chain_isomerism() {
        let hit = solve_text("What isomerism is shown between n-butane and isobutane?").unwrap();
        assert!(hit.product.starts_with("Structural isomerism → Chain."));
        assert_eq!(hit.notes, EXAM_TIP);
    }

    #[test]
    fn ethanol_and_dimethyl_ether_are_functional_isomers() {
        let hit = solve_text("Ethanol and dimethyl ether are which type of isomers?").unwrap();
        assert!(hit.product.starts_with("Structural isomerism → Functional."));
    }

    #[test]
    fn cis_trans_butene_is_geometrical() {
        let hit = solve_text("cis-2-butene vs trans-2-butene isomerism").unwrap();
        assert!(hit.product.starts_with("Stereo isomerism → Geometrical."));
    }

    #[test]
    fn definitions_answer_from_theory() {
        let hit = solve_text("Define tautomerism").unwrap();
        assert!(hit.product.starts_with("Structural isomerism → Tautomerism."));
        let hit = solve_text("What is isomerism?").unwrap();
        assert!(hit.product.starts_with("Isomerism: compounds having the same molecular formula"));
    }

    #[test]
    fn unrelated_questions_decline() {
        assert!(solve_text("what colour is the sky on mars").is_none());
        assert!(solve_text("Define chirality").is_none());
    }

    #[test]
    fn pair_extraction_prefers_between_clause() {
        assert_eq!(
            extract_pair("isomerism between propan-1-ol and propan-2-ol?"),
            Some(("propan-1-ol".to_string(), "propan-2-ol".to_string()))
        );
        assert_eq!(extract_pair("metamerism in ethers"), None);
    }
}
