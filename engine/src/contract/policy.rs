use luma_types::{ExamMode, ExamPolicy};

/// Keep the first `max_assumptions` entries allowed by the exam, in order.
#[must_use]
pub fn clamp_assumptions(mode: ExamMode, assumptions: &[String]) -> Vec<String> {
    let limit = ExamPolicy::for_mode(mode).max_assumptions;
    assumptions.iter().take(limit).cloned().collect()
}

/// Explainability tags describing the exam policy in force.
#[must_use]
pub fn exam_tags(mode: ExamMode) -> Vec<String> {
    let policy = ExamPolicy::for_mode(mode);
    let mut tags = vec![
        format!("EXAM_{}", policy.exam_mode.as_str()),
        format!(
            "DEPTH_{}",
            policy.explanation_depth.as_str().to_ascii_uppercase()
        ),
    ];
    if policy.strict_ncert {
        tags.push("NCERT_STRICT".to_string());
    }
    if policy.allow_advanced_context {
        tags.push("ADVANCED_ALLOWED".to_string());
    }
    tags
}
