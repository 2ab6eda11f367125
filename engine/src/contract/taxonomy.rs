//! Deterministic error-pattern signals.
//!
//! Signals come from two places: engine flags (mapped through a fixed table)
//! and an optional student attempt whose mismatch booleans were set by an
//! upstream evaluator. Correctness is never computed here.

use std::collections::BTreeMap;

use luma_types::{AttemptContext, ErrorCategory, ErrorSignal, Severity};

const FLAG_CATEGORIES: &[(&str, ErrorCategory)] = &[
    (
        "MAJOR_PRODUCT_MISSING_CONDITIONS",
        ErrorCategory::ConditionOmission,
    ),
    ("KOH_MEDIUM_NOT_SPECIFIED", ErrorCategory::ConditionOmission),
    ("POSSIBLE_SOLVENT_MISSING", ErrorCategory::ConditionOmission),
    ("AMBIGUOUS_CONDITIONS", ErrorCategory::AmbiguityExamDependent),
    (
        "MULTIPLE_PRODUCTS_POSSIBLE",
        ErrorCategory::AmbiguityExamDependent,
    ),
    ("UNKNOWN_REAGENT", ErrorCategory::DataRecall),
    ("UNKNOWN_CHAPTER", ErrorCategory::DataRecall),
];

/// Taxonomy category for a known engine flag.
#[must_use]
pub fn flag_category(flag: &str) -> Option<ErrorCategory> {
    FLAG_CATEGORIES
        .iter()
        .find(|(known, _)| *known == flag)
        .map(|(_, category)| *category)
}

/// Map engine flags to signals. Unknown flags are skipped.
///
/// Exam-convention ambiguity is softened to `low` when the default is `medium`.
#[must_use]
pub fn map_flags<S: AsRef<str>>(flags: &[S], default_severity: Severity) -> Vec<ErrorSignal> {
    flags
        .iter()
        .filter_map(|flag| {
            let flag = flag.as_ref();
            let category = flag_category(flag)?;
            let severity = match (category, default_severity) {
                (ErrorCategory::AmbiguityExamDependent, Severity::Medium) => Severity::Low,
                _ => default_severity,
            };
            Some(ErrorSignal::new(
                category,
                format!("Mapped from flag: {flag}"),
                severity,
            ))
        })
        .collect()
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Signals implied by an evaluated attempt.
#[must_use]
pub fn infer_from_attempt(attempt: &AttemptContext) -> Vec<ErrorSignal> {
    let mut signals = Vec::new();

    if attempt.units_mismatch {
        signals.push(ErrorSignal::new(
            ErrorCategory::UnitMistake,
            "Units mismatch detected by evaluator",
            Severity::High,
        ));
    }
    if attempt.sign_mismatch {
        signals.push(ErrorSignal::new(
            ErrorCategory::SignMistake,
            "Sign mismatch detected by evaluator",
            Severity::Medium,
        ));
    }
    if attempt.computation_mismatch {
        signals.push(ErrorSignal::new(
            ErrorCategory::CalculationError,
            "Arithmetic mismatch detected by evaluator",
            Severity::Medium,
        ));
    }
    if is_blank(attempt.student_answer.as_deref()) && !is_blank(attempt.correct_answer.as_deref())
    {
        signals.push(ErrorSignal::new(
            ErrorCategory::MisreadQuestion,
            "No attempt/blank answer while a definite answer exists",
            Severity::Medium,
        ));
    }
    if let Some(hint) = attempt.concept_hint.as_deref()
        && !hint.is_empty()
    {
        signals.push(ErrorSignal::new(
            ErrorCategory::ConceptGap,
            format!("Concept hint: {hint}"),
            Severity::Medium,
        ));
    }

    signals
}

/// Count signals per category.
#[must_use]
pub fn summarize(signals: &[ErrorSignal]) -> BTreeMap<ErrorCategory, usize> {
    let mut summary = BTreeMap::new();
    for signal in signals {
        *summary.entry(signal.category).or_insert(0) += 1;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_through_the_table() {
        let signals = map_flags(
            &[
                "MAJOR_PRODUCT_MISSING_CONDITIONS",
                "SOMETHING_ELSE",
                "MULTIPLE_PRODUCTS_POSSIBLE",
            ],
            Severity::Medium,
        );
        assert_eq!(signals.len(), 2);
        assert_eq!(signals[0].category, ErrorCategory::ConditionOmission);
        assert_eq!(signals[0].severity, Severity::Medium);
        assert_eq!(
            signals[0].evidence,
            "Mapped from flag: MAJOR_PRODUCT_MISSING_CONDITIONS"
        );
        assert_eq!(signals[1].category, ErrorCategory::AmbiguityExamDependent);
        assert_eq!(signals[1].severity, Severity::Low);
    }

    #[test]
    fn ambiguity_keeps_a_non_medium_default() {
        let signals = map_flags(&["AMBIGUOUS_CONDITIONS"], Severity::High);
        assert_eq!(signals[0].severity, Severity::High);
    }

    #[test]
    fn attempt_signals_in_fixed_order() {
        let attempt = AttemptContext {
            student_answer: Some("  ".to_string()),
            correct_answer: Some("ethene".to_string()),
            units_mismatch: true,
            sign_mismatch: false,
            computation_mismatch: true,
            concept_hint: Some("Saytzeff rule".to_string()),
        };
        let categories: Vec<ErrorCategory> = infer_from_attempt(&attempt)
            .into_iter()
            .map(|signal| signal.category)
            .collect();
        assert_eq!(
            categories,
            [
                ErrorCategory::UnitMistake,
                ErrorCategory::CalculationError,
                ErrorCategory::MisreadQuestion,
                ErrorCategory::ConceptGap,
            ]
        );
    }

    #[test]
    fn blank_attempt_without_a_key_is_not_a_misread() {
        assert!(infer_from_attempt(&AttemptContext::default()).is_empty());
    }

    #[test]
    fn summary_counts_by_category() {
        let signals = map_flags(
            &["KOH_MEDIUM_NOT_SPECIFIED", "POSSIBLE_SOLVENT_MISSING"],
            Severity::Medium,
        );
        let summary = summarize(&signals);
        assert_eq!(summary.get(&ErrorCategory::ConditionOmission), Some(&2));
        assert_eq!(summary.len(), 1);
    }
}
