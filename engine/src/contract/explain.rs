use luma_types::{DecisionTrace, ExamMode, ExplainabilityBundle};

use super::policy::{clamp_assumptions, exam_tags};

/// Assemble the explainability side-car for one answer.
///
/// Caller tags come first, exam tags after; assumptions are clamped to the
/// exam's allowance.
#[must_use]
pub fn build_bundle(
    traces: Vec<DecisionTrace>,
    tags: Vec<String>,
    mode: ExamMode,
    assumptions: &[String],
) -> ExplainabilityBundle {
    let mut tags = tags;
    tags.extend(exam_tags(mode));
    ExplainabilityBundle {
        traces,
        tags,
        assumptions: clamp_assumptions(mode, assumptions),
    }
}
