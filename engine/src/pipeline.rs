//! End-to-end request handling: validate, normalize, govern, dispatch, package.

use std::fmt;

use luma_types::{
    AnswerDraft, AnswerResponse, AttemptContext, Confidence, ContextExamMode, Decision,
    DecisionTrace, EngineOutput, ExamMode, ExamPolicy, GovernanceResult, NcertLevel,
    NormalizedInput, QuestionContext, Safety, SyntaxMode,
};
use serde::Serialize;
use serde_json::Value;

use crate::contract::{ResponsePacket, build_packet};
use crate::organic::ExplainBundle;
use crate::solvers::{self, Dispatch, INSUFFICIENT_DATA, Route};
use crate::subject::{self, Subject};
use crate::{ContractError, EngineError, FallbackError, StructureError, governor, normalizer};

/// Questions with fewer non-whitespace characters are rejected.
pub const MIN_QUESTION_CHARS: usize = 3;

const NO_DETERMINISTIC_MATCH: &str = "NO_DETERMINISTIC_MATCH";
const FALLBACK_PROVIDER_ANSWER: &str = "FALLBACK_PROVIDER_ANSWER";

// ============================================================================
// Fallback seam
// ============================================================================

/// Answer produced outside the deterministic chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackAnswer {
    pub answer: String,
    pub reason: String,
}

/// Consulted only when no deterministic solver matched.
pub trait FallbackProvider: Send + Sync {
    fn answer(
        &self,
        question: &str,
        context: &QuestionContext,
    ) -> Result<FallbackAnswer, FallbackError>;
}

// ============================================================================
// Request
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub question: String,
    pub context: QuestionContext,
    pub attempt: Option<AttemptContext>,
    pub syntax: SyntaxMode,
}

impl Request {
    #[must_use]
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: QuestionContext) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn with_attempt(mut self, attempt: AttemptContext) -> Self {
        self.attempt = Some(attempt);
        self
    }

    #[must_use]
    pub fn with_syntax(mut self, syntax: SyntaxMode) -> Self {
        self.syntax = syntax;
        self
    }
}

fn validate_question(question: &str) -> Result<(), EngineError> {
    let chars = question.chars().filter(|c| !c.is_whitespace()).count();
    if chars == 0 {
        return Err(EngineError::EmptyQuestion);
    }
    if chars < MIN_QUESTION_CHARS {
        return Err(EngineError::QuestionTooShort {
            chars,
            min: MIN_QUESTION_CHARS,
        });
    }
    Ok(())
}

// ============================================================================
// Rendered sections
// ============================================================================

const SECTION_NAMES: [&str; 5] = [
    "understanding",
    "concept",
    "steps",
    "final_answer",
    "exam_tip",
];

/// The five-section view of an answer, with the governor's verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedAnswer {
    pub decision: Decision,
    pub assumptions: Vec<String>,
    pub understanding: Option<String>,
    pub concept: Option<String>,
    pub steps: Option<String>,
    pub final_answer: Option<String>,
    pub exam_tip: Option<String>,
}

impl RenderedAnswer {
    #[must_use]
    pub fn from_response(
        decision: Decision,
        assumptions: Vec<String>,
        response: &AnswerResponse,
    ) -> Self {
        Self {
            decision,
            assumptions,
            understanding: Some(response.understanding.clone()),
            concept: Some(response.concept.clone()),
            steps: Some(response.steps.clone()),
            final_answer: Some(response.final_answer.clone()),
            exam_tip: Some(response.exam_tip.clone()),
        }
    }

    fn sections(&self) -> [Option<&str>; 5] {
        [
            self.understanding.as_deref(),
            self.concept.as_deref(),
            self.steps.as_deref(),
            self.final_answer.as_deref(),
            self.exam_tip.as_deref(),
        ]
    }

    /// Every section must be present and non-blank.
    pub fn validate(&self) -> Result<(), StructureError> {
        for (name, section) in SECTION_NAMES.into_iter().zip(self.sections()) {
            match section {
                None => return Err(StructureError::MissingSection(name)),
                Some(text) if text.trim().is_empty() => {
                    return Err(StructureError::EmptySection(name));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

// ============================================================================
// Engine
// ============================================================================

/// The deterministic pipeline. Holds no per-request state.
pub struct Engine {
    fallback: Option<Box<dyn FallbackProvider>>,
    fallback_enabled: bool,
    default_exam_mode: ExamMode,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("fallback", &self.fallback.is_some())
            .field("fallback_enabled", &self.fallback_enabled)
            .field("default_exam_mode", &self.default_exam_mode)
            .finish()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic stages shared by [`Engine::answer`] and [`Engine::render`].
struct Stages {
    normalized: NormalizedInput,
    governance: GovernanceResult,
    dispatch: Dispatch,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fallback: None,
            fallback_enabled: true,
            default_exam_mode: ExamMode::Board,
        }
    }

    #[must_use]
    pub fn with_fallback(mut self, provider: impl FallbackProvider + 'static) -> Self {
        self.fallback = Some(Box::new(provider));
        self
    }

    #[must_use]
    pub fn with_fallback_enabled(mut self, enabled: bool) -> Self {
        self.fallback_enabled = enabled;
        self
    }

    /// Exam mode used when the request context does not name one.
    #[must_use]
    pub fn with_default_exam_mode(mut self, mode: ExamMode) -> Self {
        self.default_exam_mode = mode;
        self
    }

    fn exam_mode(&self, context: &QuestionContext) -> ExamMode {
        context
            .exam_mode
            .map_or(self.default_exam_mode, ContextExamMode::packaging_mode)
    }

    fn run_stages(request: &Request) -> Result<Stages, EngineError> {
        validate_question(&request.question)?;
        let normalized = normalizer::normalize(&request.question, request.syntax);
        let governance = governor::decide(&normalized);
        let dispatch = match governance.decision {
            Decision::Refuse => refused(&governance),
            Decision::Full | Decision::Partial => {
                solvers::generate_answer(normalized.cleaned_text(), &request.context)
            }
        };
        Ok(Stages {
            normalized,
            governance,
            dispatch,
        })
    }

    fn consult_fallback(&self, request: &Request) -> Option<FallbackAnswer> {
        if !self.fallback_enabled {
            return None;
        }
        let provider = self.fallback.as_ref()?;
        let result = provider
            .answer(&request.question, &request.context)
            .and_then(|answer| {
                if answer.answer.trim().is_empty() {
                    Err(FallbackError::EmptyAnswer)
                } else {
                    Ok(answer)
                }
            });
        match result {
            Ok(answer) => Some(answer),
            Err(err) => {
                tracing::warn!("Fallback provider failed: {err}");
                None
            }
        }
    }

    /// Answer one question and package it.
    pub fn answer(&self, request: &Request) -> Result<ResponsePacket, EngineError> {
        let Stages {
            normalized,
            governance,
            dispatch,
        } = Self::run_stages(request)?;
        let mode = self.exam_mode(&request.context);
        let policy = ExamPolicy::for_mode(mode);

        let mut flags: Vec<String> = normalized
            .ambiguity_flags()
            .iter()
            .map(|flag| flag.as_str().to_string())
            .collect();
        let mut traces = normalizer_traces(&normalized)?;
        traces.push(governor_trace(&governance)?);
        traces.push(solver_trace(&dispatch)?);
        traces.extend(sidecar_traces(&dispatch.explain)?);
        let subject = subject::classify(normalized.cleaned_text());
        traces.push(subject_trace(subject)?);
        let mut tags = vec![
            format!("SOLVER_{}", dispatch.route.id().to_ascii_uppercase()),
            format!("SUBJECT_{}", subject.as_str().to_ascii_uppercase()),
        ];

        let fallback = if dispatch.route.is_unsupported() {
            self.consult_fallback(request)
        } else {
            None
        };

        let output = if let Some(fallback) = fallback {
            flags.push(FALLBACK_PROVIDER_ANSWER.to_string());
            tags.push(FALLBACK_PROVIDER_ANSWER.to_string());
            traces.push(
                trace("FALLBACK_PROVIDER", "Answer supplied by the fallback provider")?
                    .with_outcome(fallback.answer.clone()),
            );
            EngineOutput::new(fallback.answer, fallback.reason, mode, Confidence::Medium)
                .map_err(|_| ContractError::EmptyReason)?
        } else {
            let confidence = if dispatch.route.is_unsupported() {
                flags.push(NO_DETERMINISTIC_MATCH.to_string());
                Confidence::Low
            } else if governance.decision == Decision::Partial
                || dispatch.response.tags.safety == Safety::Medium
            {
                policy.default_confidence.min(Confidence::Medium)
            } else {
                policy.default_confidence
            };
            let answer = answer_payload(&dispatch)?;
            EngineOutput::new(answer, reason_for(&dispatch.response), mode, confidence)
                .map_err(|_| ContractError::EmptyReason)?
        };

        let output = output
            .with_flags(flags)
            .with_assumptions(governance.assumptions);
        let packet = build_packet(output, traces, tags, request.attempt.as_ref());

        tracing::debug!(
            "answered via {} ({} mode, {} confidence, {} flags)",
            dispatch.route.id(),
            packet.exam_mode,
            packet.confidence,
            packet.flags.len()
        );
        Ok(packet)
    }

    /// Five-section rendering of the deterministic answer, validated.
    ///
    /// The fallback provider is never consulted here.
    #[allow(clippy::unused_self)]
    pub fn render(&self, request: &Request) -> Result<RenderedAnswer, EngineError> {
        let stages = Self::run_stages(request)?;
        let rendered = RenderedAnswer::from_response(
            stages.governance.decision,
            stages.governance.assumptions,
            &stages.dispatch.response,
        );
        rendered.validate()?;
        Ok(rendered)
    }
}

fn refused(governance: &GovernanceResult) -> Dispatch {
    let reason = governance
        .refusal_reason
        .clone()
        .unwrap_or_else(|| governance.notes.clone());
    let draft = AnswerDraft {
        understanding: "The question cannot be answered deterministically as asked.".to_string(),
        concept: "REFUSED".to_string(),
        steps: reason,
        final_answer: INSUFFICIENT_DATA.to_string(),
        exam_tip: "Exam tip: state the reagents and conditions explicitly.".to_string(),
    };
    Dispatch {
        response: AnswerResponse::from_draft(
            draft,
            NcertLevel::NcertAligned,
            Safety::Medium,
            "Answering without the missing conditions.",
        ),
        route: Route::Unsupported,
        explain: ExplainBundle::default(),
    }
}

fn reason_for(response: &AnswerResponse) -> &str {
    if response.understanding.trim().is_empty() {
        &response.concept
    } else {
        &response.understanding
    }
}

fn answer_payload(dispatch: &Dispatch) -> Result<Value, ContractError> {
    let mut payload = serde_json::to_value(&dispatch.response)
        .map_err(|err| ContractError::Payload(err.to_string()))?;
    if !dispatch.explain.is_empty()
        && let Value::Object(map) = &mut payload
    {
        map.insert("explain_v2".to_string(), dispatch.explain.to_json());
    }
    Ok(payload)
}

// ============================================================================
// Traces
// ============================================================================

fn trace(rule_id: &str, description: &str) -> Result<DecisionTrace, ContractError> {
    Ok(DecisionTrace::new(rule_id, description)?)
}

fn normalizer_traces(input: &NormalizedInput) -> Result<Vec<DecisionTrace>, ContractError> {
    input
        .ambiguity_flags()
        .iter()
        .map(|flag| {
            Ok(trace("NORMALIZER_FLAG", "Ambiguity flag raised during normalization")?
                .with_input("flag", flag.as_str())
                .with_outcome(flag.as_str()))
        })
        .collect()
}

fn governor_trace(governance: &GovernanceResult) -> Result<DecisionTrace, ContractError> {
    Ok(trace("GOVERNOR", "Answer gating from ambiguity flags")?
        .with_input("assumptions", governance.assumptions.len())
        .with_input("notes", governance.notes.as_str())
        .with_outcome(governance.decision.as_str()))
}

fn solver_trace(dispatch: &Dispatch) -> Result<DecisionTrace, ContractError> {
    Ok(trace("SOLVER_DISPATCH", "First matching deterministic solver")?
        .with_input("concept", dispatch.response.concept.as_str())
        .with_outcome(dispatch.route.id()))
}

fn subject_trace(subject: Subject) -> Result<DecisionTrace, ContractError> {
    Ok(trace("SUBJECT_GATE", "Chemistry vocabulary check")?.with_outcome(subject.as_str()))
}

fn sidecar_traces(explain: &ExplainBundle) -> Result<Vec<DecisionTrace>, ContractError> {
    let mut traces = Vec::new();
    if let Some(mechanism) = &explain.mechanism {
        traces.push(
            trace("MECHANISM_SELECTION", &mechanism.summary)?
                .with_input("confidence", mechanism.confidence.as_str())
                .with_outcome(mechanism.mechanism.as_str()),
        );
    }
    if let Some(rearrangement) = &explain.rearrangement {
        traces.push(
            trace("CARBOCATION_REARRANGEMENT", &rearrangement.summary)?
                .with_input("initial_score", rearrangement.outcome.initial_score)
                .with_input("hydride_score", rearrangement.outcome.hydride_score)
                .with_input("methyl_score", rearrangement.outcome.methyl_score)
                .with_outcome(rearrangement.decision.as_str()),
        );
    }
    Ok(traces)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(Result<FallbackAnswer, FallbackError>);

    impl FallbackProvider for Canned {
        fn answer(
            &self,
            _question: &str,
            _context: &QuestionContext,
        ) -> Result<FallbackAnswer, FallbackError> {
            self.0.clone()
        }
    }

    fn canned(answer: &str) -> Canned {
        Canned(Ok(FallbackAnswer {
            answer: answer.to_string(),
            reason: "Looked it up".to_string(),
        }))
    }

    const UNMATCHED: &str = "what colour is the sky on mars";

    #[test]
    fn empty_and_short_questions_are_rejected() {
        let engine = Engine::new();
        assert_eq!(
            engine.answer(&Request::new("   ")).unwrap_err(),
            EngineError::EmptyQuestion
        );
        assert_eq!(
            engine.answer(&Request::new("a b")).unwrap_err(),
            EngineError::QuestionTooShort { chars: 2, min: 3 }
        );
    }

    #[test]
    fn unmatched_question_is_low_confidence() {
        let packet = Engine::new().answer(&Request::new(UNMATCHED)).unwrap();
        assert_eq!(packet.confidence, Confidence::Low);
        assert!(packet.flags.iter().any(|f| f == NO_DETERMINISTIC_MATCH));
        assert_eq!(packet.answer["final_answer"], INSUFFICIENT_DATA);
    }

    #[test]
    fn fallback_replaces_unsupported_draft() {
        let engine = Engine::new().with_fallback(canned("Blue"));
        let packet = engine.answer(&Request::new(UNMATCHED)).unwrap();
        assert_eq!(packet.answer, Value::from("Blue"));
        assert_eq!(packet.reason, "Looked it up");
        assert_eq!(packet.confidence, Confidence::Medium);
        assert!(packet.flags.iter().any(|f| f == FALLBACK_PROVIDER_ANSWER));
        assert!(!packet.flags.iter().any(|f| f == NO_DETERMINISTIC_MATCH));
    }

    #[test]
    fn disabled_or_failing_fallback_is_ignored() {
        let disabled = Engine::new()
            .with_fallback(canned("Blue"))
            .with_fallback_enabled(false);
        let packet = disabled.answer(&Request::new(UNMATCHED)).unwrap();
        assert_eq!(packet.confidence, Confidence::Low);

        let failing = Engine::new().with_fallback(Canned(Err(FallbackError::Unavailable(
            "offline".to_string(),
        ))));
        let packet = failing.answer(&Request::new(UNMATCHED)).unwrap();
        assert!(packet.flags.iter().any(|f| f == NO_DETERMINISTIC_MATCH));

        let blank = Engine::new().with_fallback(canned("  "));
        let packet = blank.answer(&Request::new(UNMATCHED)).unwrap();
        assert_eq!(packet.confidence, Confidence::Low);
    }

    #[test]
    fn fallback_is_not_consulted_when_a_solver_matches() {
        let engine = Engine::new().with_fallback(canned("Blue"));
        let packet = engine
            .answer(&Request::new("phenol + Br2 water"))
            .unwrap();
        assert!(
            packet.answer["final_answer"]
                .as_str()
                .unwrap()
                .contains("2,4,6-tribromophenol")
        );
    }

    #[test]
    fn context_mode_beats_engine_default() {
        let engine = Engine::new().with_default_exam_mode(ExamMode::Jee);
        let packet = engine.answer(&Request::new(UNMATCHED)).unwrap();
        assert_eq!(packet.exam_mode, ExamMode::Jee);

        let context = QuestionContext {
            exam_mode: Some(ContextExamMode::Neet),
            ..QuestionContext::default()
        };
        let packet = engine
            .answer(&Request::new(UNMATCHED).with_context(context))
            .unwrap();
        assert_eq!(packet.exam_mode, ExamMode::Neet);
    }

    #[test]
    fn governor_and_solver_traces_are_recorded() {
        let packet = Engine::new()
            .with_default_exam_mode(ExamMode::Jee)
            .answer(&Request::new("Major product of CH3CH2Br with KOH"))
            .unwrap();
        let ids: Vec<&str> = packet
            .explainability
            .traces
            .iter()
            .map(DecisionTrace::rule_id)
            .collect();
        assert!(ids.contains(&"NORMALIZER_FLAG"));
        assert!(ids.contains(&"GOVERNOR"));
        assert!(ids.contains(&"SOLVER_DISPATCH"));
        assert!(ids.contains(&"SUBJECT_GATE"));
        assert!(!packet.assumptions.is_empty());
    }

    #[test]
    fn rendered_answer_has_every_section() {
        let rendered = Engine::new()
            .render(&Request::new("phenol + Br2 water"))
            .unwrap();
        assert_eq!(rendered.decision, Decision::Full);
        assert!(rendered.validate().is_ok());

        let missing = RenderedAnswer {
            exam_tip: None,
            ..rendered.clone()
        };
        assert_eq!(
            missing.validate().unwrap_err(),
            StructureError::MissingSection("exam_tip")
        );
        let blank = RenderedAnswer {
            steps: Some(" ".to_string()),
            ..rendered
        };
        assert_eq!(
            blank.validate().unwrap_err(),
            StructureError::EmptySection("steps")
        );
    }

    #[test]
    fn answer_payload_is_an_object_with_the_sidecar() {
        let dispatch = solvers::generate_answer(
            "2-bromo-2-methylpropane in water: SN1 or SN2?",
            &QuestionContext::default(),
        );
        assert!(!dispatch.explain.is_empty());
        let payload = answer_payload(&dispatch).unwrap();
        assert!(payload.is_object());
        assert_eq!(payload["final_answer"], dispatch.response.final_answer.as_str());
        assert_eq!(payload["explain_v2"]["type"], "explain_v2_bundle");

        let refusal = answer_payload(&Dispatch {
            explain: ExplainBundle::default(),
            ..dispatch
        })
        .unwrap();
        assert!(refusal.get("explain_v2").is_none());
        assert!(!refusal["final_answer"].is_null());
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }
}
