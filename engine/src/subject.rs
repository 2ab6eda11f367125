//! Chemistry / non-chemistry subject gate.
//!
//! The gate is informational: the pipeline records its verdict as a trace
//! and a tag but always dispatches.

use std::fmt;
use std::sync::{LazyLock, OnceLock};

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use regex::Regex;
use serde::{Deserialize, Serialize};

const CHEMISTRY_KEYWORDS: &[&str] = &[
    "organic",
    "inorganic",
    "physical chemistry",
    "chemistry",
    "alkane",
    "alkene",
    "alkyne",
    "aromatic",
    "benzene",
    "phenyl",
    "aldehyde",
    "ketone",
    "carboxylic",
    "acid",
    "ester",
    "amide",
    "amine",
    "alcohol",
    "phenol",
    "ether",
    "haloalkane",
    "halide",
    "grignard",
    "sn1",
    "sn2",
    "e1",
    "e2",
    "eas",
    "nitration",
    "sulfonation",
    "hbr",
    "peroxide",
    "kmno4",
    "pcc",
    "k2cr2o7",
    "dichromate",
    "tollens",
    "fehling",
    "iodoform",
    "chi3",
    "ozonolysis",
    "o3",
    "zn",
    "dms",
    "h2so4",
    "h+",
    "acidic",
    "alkaline",
    "fecl3",
    "febr3",
    "alcl3",
    "br2",
    "cl2",
    "oxidation",
    "reduction",
    "redox",
    "electrochemistry",
    "mole",
    "molarity",
];

static KEYWORD_MATCHER: OnceLock<Option<AhoCorasick>> = OnceLock::new();

/// Two or more element symbols in a row, e.g. `CH3COOH` or `NaCl`.
static FORMULA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[A-Z][a-z]?\d*){2,}\b").expect("valid chemical formula regex")
});

fn keyword_matcher() -> Option<&'static AhoCorasick> {
    KEYWORD_MATCHER
        .get_or_init(|| {
            match AhoCorasickBuilder::new()
                .ascii_case_insensitive(true)
                .match_kind(MatchKind::LeftmostFirst)
                .build(CHEMISTRY_KEYWORDS)
            {
                Ok(matcher) => Some(matcher),
                Err(err) => {
                    tracing::warn!("Failed to build subject keyword matcher: {err}");
                    None
                }
            }
        })
        .as_ref()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Chemistry,
    NonChemistry,
}

impl Subject {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Subject::Chemistry => "chemistry",
            Subject::NonChemistry => "non_chemistry",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify text by chemistry vocabulary or an embedded formula.
#[must_use]
pub fn classify(text: &str) -> Subject {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Subject::NonChemistry;
    }

    let keyword_hit = match keyword_matcher() {
        Some(matcher) => matcher.is_match(trimmed),
        None => {
            let lower = trimmed.to_lowercase();
            CHEMISTRY_KEYWORDS.iter().any(|k| lower.contains(k))
        }
    };

    if keyword_hit || FORMULA_RE.is_match(trimmed) {
        Subject::Chemistry
    } else {
        Subject::NonChemistry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chemistry_vocabulary_and_formulas_pass() {
        assert_eq!(classify("Oxidation of ethanol with PCC"), Subject::Chemistry);
        assert_eq!(classify("What does NaCl look like?"), Subject::Chemistry);
    }

    #[test]
    fn unrelated_text_and_blank_input_are_rejected() {
        assert_eq!(classify("Who won the cricket match today?"), Subject::NonChemistry);
        assert_eq!(classify("   "), Subject::NonChemistry);
    }

    #[test]
    fn wire_names_are_snake_case() {
        assert_eq!(Subject::NonChemistry.to_string(), "non_chemistry");
    }
}
