//! Question normalization: unicode cleanup, filler stripping and ambiguity flags.
//!
//! The normalizer never rejects text. Empty input produces an empty
//! `cleaned_text` with no flags; callers decide whether that is an error.

use std::sync::OnceLock;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use luma_types::{AmbiguityFlag, NormalizedInput, SyntaxMode};
use unicode_normalization::UnicodeNormalization;

/// Conversational phrases that carry no chemistry.
const FILLER_PHRASES: &[&str] = &[
    "please",
    "kindly",
    "can you tell me",
    "could you",
    "tell me",
    "i want to know",
    "explain briefly",
    "in detail",
    "thank you",
    "thanks",
];

/// Greetings are only stripped before the first real word, so the reagent
/// "HI" inside a question survives.
const GREETINGS: &[&str] = &["hey", "hi", "hello"];

static FILLER_MATCHER: OnceLock<AhoCorasick> = OnceLock::new();

fn filler_matcher() -> &'static AhoCorasick {
    FILLER_MATCHER.get_or_init(|| {
        let patterns: Vec<&str> = FILLER_PHRASES.iter().chain(GREETINGS).copied().collect();
        AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(patterns)
            .expect("valid filler phrase automaton")
    })
}

/// Normalize a raw question. Deterministic and total.
#[must_use]
pub fn normalize(text: &str, mode: SyntaxMode) -> NormalizedInput {
    let unicode = clean_unicode(text);
    let stripped = strip_filler(&unicode);
    let cleaned = collapse_whitespace(&stripped);
    let flags = detect_flags(&cleaned.to_lowercase());
    tracing::debug!(flags = flags.len(), "normalized question");
    NormalizedInput::new(cleaned, mode, flags)
}

/// NFKC folding plus the dash, arrow and quote variants NFKC leaves alone.
///
/// NFKC already turns subscript and superscript digits into ASCII digits
/// and superscript signs into `+` / `−`.
#[must_use]
pub fn clean_unicode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.nfkc() {
        match ch {
            '\u{2212}' | '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2192}' | '\u{21D2}' | '\u{27F6}' => out.push_str("->"),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            other => out.push(other),
        }
    }
    out
}

fn strip_filler(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for found in filler_matcher().find_iter(text) {
        let (start, end) = (found.start(), found.end());
        if !is_word_boundary(text, start, end) {
            continue;
        }
        let phrase = &text[start..end];
        let is_greeting = GREETINGS.iter().any(|g| g.eq_ignore_ascii_case(phrase));
        if is_greeting && text[..start].chars().any(char::is_alphanumeric) {
            continue;
        }
        out.push_str(&text[last..start]);
        last = end;
    }
    out.push_str(&text[last..]);
    out
}

fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

fn collapse_whitespace(text: &str) -> String {
    let joined = text.split_whitespace().collect::<Vec<_>>().join(" ");
    joined
        .trim_start_matches(|c: char| c == ',' || c == '!' || c.is_whitespace())
        .to_string()
}

// ============================================================================
// Ambiguity flags
// ============================================================================

const MAJOR_PRODUCT_CONDITIONS: &[&str] = &[
    "alcoholic",
    "aqueous",
    "ethanol",
    "water",
    "heat",
    "temperature",
];
const CYANIDE_TERMS: &[&str] = &["nacn", "kcn", "cn-", "cyanide"];
const CYANIDE_SOLVENTS: &[&str] = &[
    "water",
    "aqueous",
    "aq",
    "ethanol",
    "alcoholic",
    "dmso",
    "dmf",
    "acetone",
    "solvent",
];
const KOH_MEDIA: &[&str] = &["alcoholic", "aqueous", "aq", "ethanolic", "solvent"];
const SULFURIC_ACID: &[&str] = &["h2so4", "sulfuric", "sulphuric"];
const ALCOHOL_TERMS: &[&str] = &["alcohol", "ethanol", "propanol", "butanol", "-ol"];
const DEHYDRATION_TEMPERATURE: &[&str] = &[
    "heat",
    "temperature",
    "hot",
    "°c",
    "443",
    "413",
    "δ",
    "∆",
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Flag rules over lower-cased text, emitted in a fixed order.
fn detect_flags(lower: &str) -> Vec<AmbiguityFlag> {
    let mut flags = Vec::new();

    if lower.contains("major product") && !contains_any(lower, MAJOR_PRODUCT_CONDITIONS) {
        flags.push(AmbiguityFlag::MajorProductMissingConditions);
    }
    if contains_any(lower, CYANIDE_TERMS) && !contains_any(lower, CYANIDE_SOLVENTS) {
        flags.push(AmbiguityFlag::PossibleSolventMissing);
    }
    if lower.contains("koh") && !contains_any(lower, KOH_MEDIA) {
        flags.push(AmbiguityFlag::KohMediumNotSpecified);
    }
    if contains_any(lower, SULFURIC_ACID)
        && contains_any(lower, ALCOHOL_TERMS)
        && !contains_any(lower, DEHYDRATION_TEMPERATURE)
    {
        flags.push(AmbiguityFlag::DehydrationTempNotSpecified);
    }

    flags
}
