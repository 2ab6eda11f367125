//! Relative stability of reactive intermediates by substitution class.

use std::cmp::Ordering;

use luma_types::{IntermediateKind, SubstituentClass};

use super::OrganicError;

/// Ordinal stability rank; higher is more stable.
///
/// Carbocations and radicals share one ladder. Carbanions invert the alkyl
/// part of it, with allylic and benzylic tied at the top.
#[must_use]
pub const fn rank(kind: IntermediateKind, class: SubstituentClass) -> u8 {
    match kind {
        IntermediateKind::Carbocation | IntermediateKind::Radical => match class {
            SubstituentClass::Methyl => 0,
            SubstituentClass::Primary => 1,
            SubstituentClass::Secondary => 2,
            SubstituentClass::Tertiary => 3,
            SubstituentClass::Allylic => 4,
            SubstituentClass::Benzylic => 5,
        },
        IntermediateKind::Carbanion => match class {
            SubstituentClass::Tertiary => 0,
            SubstituentClass::Secondary => 1,
            SubstituentClass::Primary => 2,
            SubstituentClass::Methyl => 3,
            SubstituentClass::Allylic | SubstituentClass::Benzylic => 4,
        },
    }
}

/// [`rank`] over raw labels such as `"carbocation"` and `"3°"`.
pub fn rank_labels(kind: &str, class: &str) -> Result<u8, OrganicError> {
    let kind = IntermediateKind::parse(kind)?;
    let class = SubstituentClass::parse(class)?;
    Ok(rank(kind, class))
}

/// `Greater` when `a` is the more stable intermediate.
#[must_use]
pub fn compare(kind: IntermediateKind, a: SubstituentClass, b: SubstituentClass) -> Ordering {
    rank(kind, a).cmp(&rank(kind, b))
}

/// Classes from most to least stable. Tied classes list benzylic first.
#[must_use]
pub fn order(kind: IntermediateKind) -> Vec<SubstituentClass> {
    let mut classes: Vec<SubstituentClass> = SubstituentClass::all().iter().rev().copied().collect();
    classes.sort_by(|a, b| compare(kind, *b, *a));
    classes
}

/// Exam shorthand: `3°`, `allylic`, ...
#[must_use]
pub const fn short_label(class: SubstituentClass) -> &'static str {
    match class {
        SubstituentClass::Methyl => "methyl",
        SubstituentClass::Primary => "1°",
        SubstituentClass::Secondary => "2°",
        SubstituentClass::Tertiary => "3°",
        SubstituentClass::Allylic => "allylic",
        SubstituentClass::Benzylic => "benzylic",
    }
}

/// "benzylic > allylic > 3° > ..." with `≈` between tied classes.
#[must_use]
pub fn order_text(kind: IntermediateKind) -> String {
    let classes = order(kind);
    let mut out = String::new();
    for (idx, class) in classes.iter().enumerate() {
        if idx > 0 {
            let tied = rank(kind, classes[idx - 1]) == rank(kind, *class);
            out.push_str(if tied { " ≈ " } else { " > " });
        }
        out.push_str(short_label(*class));
    }
    out
}
