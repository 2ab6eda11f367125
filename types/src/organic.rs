//! Closed vocabularies for the organic reasoning engine.
//!
//! Parsing is lenient about spelling ("3°", "tert", "+M") but never about
//! meaning: anything outside a vocabulary is an [`EnumParseError`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vocab::{EnumKind, EnumParseError, parse_exact};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntermediateKind {
    Carbocation,
    Carbanion,
    Radical,
}

const INTERMEDIATE_VALUES: &[&str] = &["carbocation", "carbanion", "radical"];

impl IntermediateKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IntermediateKind::Carbocation => "carbocation",
            IntermediateKind::Carbanion => "carbanion",
            IntermediateKind::Radical => "radical",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [IntermediateKind] {
        &[
            IntermediateKind::Carbocation,
            IntermediateKind::Carbanion,
            IntermediateKind::Radical,
        ]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        parse_exact(
            EnumKind::IntermediateKind,
            raw,
            Self::all(),
            Self::as_str,
            INTERMEDIATE_VALUES,
        )
    }

    /// Carbocations and radicals are electron-poor; carbanions are electron-rich.
    #[must_use]
    pub const fn is_electron_deficient(self) -> bool {
        matches!(
            self,
            IntermediateKind::Carbocation | IntermediateKind::Radical
        )
    }
}

impl fmt::Display for IntermediateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substitution class of the reactive carbon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstituentClass {
    Methyl,
    Primary,
    Secondary,
    Tertiary,
    Allylic,
    Benzylic,
}

const SUBSTITUENT_VALUES: &[&str] = &[
    "methyl",
    "primary",
    "secondary",
    "tertiary",
    "allylic",
    "benzylic",
];

impl SubstituentClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SubstituentClass::Methyl => "methyl",
            SubstituentClass::Primary => "primary",
            SubstituentClass::Secondary => "secondary",
            SubstituentClass::Tertiary => "tertiary",
            SubstituentClass::Allylic => "allylic",
            SubstituentClass::Benzylic => "benzylic",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [SubstituentClass] {
        &[
            SubstituentClass::Methyl,
            SubstituentClass::Primary,
            SubstituentClass::Secondary,
            SubstituentClass::Tertiary,
            SubstituentClass::Allylic,
            SubstituentClass::Benzylic,
        ]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "methyl" | "ch3" => Ok(SubstituentClass::Methyl),
            "primary" | "1°" | "1" | "1deg" => Ok(SubstituentClass::Primary),
            "secondary" | "sec" | "2°" | "2" | "2deg" => Ok(SubstituentClass::Secondary),
            "tertiary" | "tert" | "3°" | "3" | "3deg" => Ok(SubstituentClass::Tertiary),
            "allylic" | "allyl" => Ok(SubstituentClass::Allylic),
            "benzylic" | "benzyl" => Ok(SubstituentClass::Benzylic),
            _ => Err(EnumParseError::new(
                EnumKind::SubstituentClass,
                trimmed,
                SUBSTITUENT_VALUES,
            )),
        }
    }
}

impl fmt::Display for SubstituentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Electronic effects
// ============================================================================

/// Direction of an electronic effect; shared by inductive and resonance labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectSign {
    Plus,
    Minus,
    #[default]
    None,
}

impl EffectSign {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EffectSign::Plus => "plus",
            EffectSign::Minus => "minus",
            EffectSign::None => "none",
        }
    }

    /// +1 for plus, -1 for minus, 0 for none.
    #[must_use]
    pub const fn signum(self) -> i32 {
        match self {
            EffectSign::Plus => 1,
            EffectSign::Minus => -1,
            EffectSign::None => 0,
        }
    }
}

impl fmt::Display for EffectSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const INDUCTIVE_VALUES: &[&str] = &["+I", "-I", "none"];
const RESONANCE_VALUES: &[&str] = &["+R", "+M", "-R", "-M", "none"];

/// Parses an inductive label such as `+I`, `minus_i` or `none`.
pub fn parse_inductive(raw: &str) -> Result<EffectSign, EnumParseError> {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "+i" | "plus_i" | "plus-i" | "plus" => Ok(EffectSign::Plus),
        "-i" | "minus_i" | "minus-i" | "minus" => Ok(EffectSign::Minus),
        "0" | "none" | "neutral" | "" => Ok(EffectSign::None),
        _ => Err(EnumParseError::new(
            EnumKind::InductiveEffect,
            trimmed,
            INDUCTIVE_VALUES,
        )),
    }
}

/// Parses a resonance/mesomeric label such as `+R`, `-M` or `none`.
pub fn parse_resonance(raw: &str) -> Result<EffectSign, EnumParseError> {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "+r" | "+m" | "plus_r" | "plus-r" | "plus_m" | "plus-m" | "plus" => Ok(EffectSign::Plus),
        "-r" | "-m" | "minus_r" | "minus-r" | "minus_m" | "minus-m" | "minus" => {
            Ok(EffectSign::Minus)
        }
        "0" | "none" | "neutral" | "" => Ok(EffectSign::None),
        _ => Err(EnumParseError::new(
            EnumKind::ResonanceEffect,
            trimmed,
            RESONANCE_VALUES,
        )),
    }
}

// ============================================================================
// Mechanism vocabulary
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Strong,
    Weak,
}

const STRENGTH_VALUES: &[&str] = &["strong", "weak"];

impl Strength {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Strength::Strong => "strong",
            Strength::Weak => "weak",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Strength] {
        &[Strength::Strong, Strength::Weak]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        parse_exact(
            EnumKind::Strength,
            raw,
            Self::all(),
            Self::as_str,
            STRENGTH_VALUES,
        )
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Solvent {
    #[serde(rename = "polar protic")]
    PolarProtic,
    #[serde(rename = "polar aprotic")]
    PolarAprotic,
    #[serde(rename = "nonpolar")]
    Nonpolar,
}

const SOLVENT_VALUES: &[&str] = &["polar protic", "polar aprotic", "nonpolar"];

impl Solvent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Solvent::PolarProtic => "polar protic",
            Solvent::PolarAprotic => "polar aprotic",
            Solvent::Nonpolar => "nonpolar",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Solvent] {
        &[Solvent::PolarProtic, Solvent::PolarAprotic, Solvent::Nonpolar]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        let normalized = raw.trim().replace(['_', '-'], " ");
        parse_exact(
            EnumKind::Solvent,
            &normalized,
            Self::all(),
            Self::as_str,
            SOLVENT_VALUES,
        )
    }
}

impl fmt::Display for Solvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mechanism {
    #[serde(rename = "SN1")]
    Sn1,
    #[serde(rename = "SN2")]
    Sn2,
    #[serde(rename = "E1")]
    E1,
    #[serde(rename = "E2")]
    E2,
}

impl Mechanism {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mechanism::Sn1 => "SN1",
            Mechanism::Sn2 => "SN2",
            Mechanism::E1 => "E1",
            Mechanism::E2 => "E2",
        }
    }

    /// SN1 and E1 pass through a free carbocation.
    #[must_use]
    pub const fn via_carbocation(self) -> bool {
        matches!(self, Mechanism::Sn1 | Mechanism::E1)
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RearrangementDecision {
    HydrideShiftPreferred,
    MethylShiftPreferred,
    NoRearrangementLikely,
}

impl RearrangementDecision {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RearrangementDecision::HydrideShiftPreferred => "hydride_shift_preferred",
            RearrangementDecision::MethylShiftPreferred => "methyl_shift_preferred",
            RearrangementDecision::NoRearrangementLikely => "no_rearrangement_likely",
        }
    }
}

impl fmt::Display for RearrangementDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence label attached to a reasoning explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReasoningConfidence {
    #[serde(rename = "high_confidence")]
    High,
    #[serde(rename = "medium_confidence")]
    Medium,
    #[serde(rename = "low_confidence")]
    Low,
}

impl ReasoningConfidence {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ReasoningConfidence::High => "high_confidence",
            ReasoningConfidence::Medium => "medium_confidence",
            ReasoningConfidence::Low => "low_confidence",
        }
    }
}

impl fmt::Display for ReasoningConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substituent_aliases() {
        assert_eq!(
            SubstituentClass::parse("3°"),
            Ok(SubstituentClass::Tertiary)
        );
        assert_eq!(
            SubstituentClass::parse(" Sec "),
            Ok(SubstituentClass::Secondary)
        );
        let err = SubstituentClass::parse("vinylic").unwrap_err();
        assert_eq!(err.kind(), EnumKind::SubstituentClass);
    }

    #[test]
    fn effect_labels() {
        assert_eq!(parse_inductive("+I"), Ok(EffectSign::Plus));
        assert_eq!(parse_inductive("minus-i"), Ok(EffectSign::Minus));
        assert_eq!(parse_inductive(""), Ok(EffectSign::None));
        assert_eq!(parse_resonance("+M"), Ok(EffectSign::Plus));
        assert_eq!(parse_resonance("-r"), Ok(EffectSign::Minus));
        assert!(parse_inductive("+R").is_err());
        assert!(parse_resonance("strong").is_err());
    }

    #[test]
    fn solvent_accepts_snake_case() {
        assert_eq!(Solvent::parse("polar_aprotic"), Ok(Solvent::PolarAprotic));
        assert_eq!(Solvent::parse("Polar Protic"), Ok(Solvent::PolarProtic));
    }
}
