//! Ordered chain of rule-based solvers.
//!
//! Every solver reads one [`Question`] and either declines (`None`) or
//! returns a [`SolverHit`]. [`DISPATCH`] is the single source of truth for
//! ordering: specific rules sit above the generic rules they would
//! otherwise be shadowed by. The first hit wins; when nothing matches the
//! chain answers with a fixed "insufficient data" draft.

mod additions;
mod alcohols;
mod alkyl_halides;
mod amines;
mod aromatics;
mod carbonyl;
mod carboxy;
mod early;
mod goc;
mod haloform;
mod major_product;
mod theory;

use std::iter;

use luma_types::{AnswerDraft, AnswerResponse, NcertLevel, QuestionContext, Safety, SolverHit};

use crate::organic::{self, ExplainBundle, OrganicError};

// ============================================================================
// Question view
// ============================================================================

/// Read-only view of one question shared by every solver.
#[derive(Debug, Clone)]
pub struct Question<'a> {
    text: &'a str,
    lower: String,
    /// Lower-cased question and context strings joined with `" | "`.
    joined: String,
    /// `joined` with every space removed.
    blob: String,
    context: &'a QuestionContext,
}

impl<'a> Question<'a> {
    #[must_use]
    pub fn new(text: &'a str, context: &'a QuestionContext) -> Self {
        let text = text.trim();
        let lower = text.to_lowercase();
        let joined = iter::once(text)
            .chain(context.text_values())
            .collect::<Vec<_>>()
            .join(" | ")
            .to_lowercase();
        let blob = joined.replace(' ', "");
        Self {
            text,
            lower,
            joined,
            blob,
            context,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.text
    }

    /// Lower-cased question text.
    #[must_use]
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Space-free lower-cased question plus context strings.
    #[must_use]
    pub fn blob(&self) -> &str {
        &self.blob
    }

    #[must_use]
    pub fn context(&self) -> &QuestionContext {
        self.context
    }

    pub(crate) fn has(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }

    pub(crate) fn has_any(&self, needles: &[&str]) -> bool {
        contains_any(&self.lower, needles)
    }

    pub(crate) fn blob_has_any(&self, needles: &[&str]) -> bool {
        contains_any(&self.blob, needles)
    }

    pub(crate) fn joined_has_any(&self, needles: &[&str]) -> bool {
        contains_any(&self.joined, needles)
    }
}

pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// `needle` occurs in `haystack` with no alphanumeric neighbour on either side.
pub(crate) fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

// ============================================================================
// Dispatch table
// ============================================================================

type InfallibleRule = fn(&Question<'_>) -> Option<SolverHit>;
type FallibleRule = fn(&Question<'_>) -> Result<Option<SolverHit>, OrganicError>;

/// Adapts both solver shapes to one call site.
#[derive(Clone, Copy)]
pub(crate) enum Rule {
    Infallible(InfallibleRule),
    /// Calls into the organic engine; an error counts as a decline.
    Fallible(FallibleRule),
}

impl Rule {
    fn apply(self, id: &str, question: &Question<'_>) -> Option<SolverHit> {
        match self {
            Rule::Infallible(rule) => rule(question),
            Rule::Fallible(rule) => rule(question)
                .inspect_err(|err| tracing::debug!("solver {id} declined: {err}"))
                .ok()
                .flatten(),
        }
    }
}

/// One row of the dispatch table.
#[derive(Clone, Copy)]
pub(crate) struct SolverEntry {
    pub id: &'static str,
    pub concept: &'static str,
    pub understanding: &'static str,
    pub ncert: NcertLevel,
    pub safety: Safety,
    /// Used unless the hit carries its own.
    pub mistake: &'static str,
    /// Attach the organic `explain_v2` sidecar when this entry wins.
    pub explain: bool,
    pub rule: Rule,
}

const REACTION_UNDERSTANDING: &str = "This is a reaction question.";

impl SolverEntry {
    const fn new(
        id: &'static str,
        concept: &'static str,
        understanding: &'static str,
        rule: Rule,
    ) -> Self {
        Self {
            id,
            concept,
            understanding,
            ncert: NcertLevel::NcertAligned,
            safety: Safety::High,
            mistake: "",
            explain: false,
            rule,
        }
    }

    const fn reaction(id: &'static str, concept: &'static str, rule: InfallibleRule) -> Self {
        Self::new(id, concept, REACTION_UNDERSTANDING, Rule::Infallible(rule))
    }

    const fn direct(mut self) -> Self {
        self.ncert = NcertLevel::NcertDirect;
        self
    }

    const fn advanced(mut self) -> Self {
        self.ncert = NcertLevel::Advanced;
        self.safety = Safety::Medium;
        self
    }

    const fn mistake(mut self, mistake: &'static str) -> Self {
        self.mistake = mistake;
        self
    }

    const fn with_explain(mut self) -> Self {
        self.explain = true;
        self
    }

    fn respond(&self, hit: SolverHit) -> AnswerResponse {
        let mistake = hit
            .common_mistake
            .unwrap_or_else(|| self.mistake.to_string());
        let draft = AnswerDraft {
            understanding: self.understanding.to_string(),
            concept: self.concept.to_string(),
            steps: hit.reaction,
            final_answer: hit.product,
            exam_tip: hit.notes,
        };
        AnswerResponse::from_draft(draft, self.ncert, self.safety, mistake)
    }
}

/// The chain, in priority order.
pub(crate) static DISPATCH: &[SolverEntry] = &[
    // Exam-critical rules checked against question and context.
    SolverEntry::new(
        "benzoyl_chloride_ammonolysis",
        "ACID DERIVATIVES — ACYL CHLORIDE → AMIDE (rule)",
        "This is ammonolysis of benzoyl chloride (acyl chloride) with ammonia.",
        Rule::Infallible(early::benzoyl_chloride_ammonolysis),
    )
    .mistake("Missing HCl formation or not writing benzamide (C6H5CONH2)."),
    SolverEntry::new(
        "acetyl_chloride_hydrolysis",
        "ACID DERIVATIVES — ACYL CHLORIDE (hydrolysis rule)",
        "This is hydrolysis of acetyl chloride (an acyl chloride).",
        Rule::Infallible(early::acetyl_chloride_hydrolysis),
    )
    .mistake("Forgetting HCl or not writing CH3COOH (acetic acid)."),
    SolverEntry::new(
        "benzoyl_chloride_hydrolysis",
        "ACID DERIVATIVES — ACYL CHLORIDE (hydrolysis rule)",
        "This is hydrolysis of benzoyl chloride (an acyl chloride).",
        Rule::Infallible(early::benzoyl_chloride_hydrolysis),
    )
    .mistake("Forgetting HCl or writing wrong acid."),
    SolverEntry::new(
        "alkyne_mercuric_hydration",
        "ALKYNES — HYDRATION (HgSO4/H2SO4 rule)",
        "This is acid-catalyzed hydration of an alkyne using HgSO4/H2SO4.",
        Rule::Infallible(early::alkyne_mercuric_hydration),
    )
    .mistake("Stopping at enol or writing wrong product instead of ketone."),
    SolverEntry::new(
        "hydroboration_oxidation",
        "ALKENES — HYDROBORATION–OXIDATION (rule)",
        "This is hydroboration–oxidation of an alkene.",
        Rule::Infallible(early::hydroboration_oxidation),
    )
    .mistake("Writing Markovnikov alcohol or invoking carbocation rearrangement."),
    SolverEntry::new(
        "strong_oxidant_primary_alcohol",
        "ALCOHOLS — OXIDATION (strong oxidant rule)",
        "This is oxidation of a primary alcohol using a strong oxidizing agent.",
        Rule::Infallible(early::strong_oxidant_primary_alcohol),
    )
    .mistake("Stopping at aldehyde for strong oxidants."),
    SolverEntry::new(
        "phenol_bromine_water",
        "PHENOLS — BROMINATION (rule)",
        "This is electrophilic substitution on phenol using bromine water.",
        Rule::Infallible(early::phenol_bromine_water),
    )
    .mistake("Writing mono-bromination instead of 2,4,6-tribromophenol."),
    SolverEntry::new(
        "pcc_oxidation",
        "ALCOHOLS — OXIDATION (PCC rule)",
        "This is oxidation of an alcohol using PCC.",
        Rule::Infallible(early::pcc_oxidation),
    )
    .mistake("Writing carboxylic acid instead of aldehyde for PCC."),
    // Concept questions.
    SolverEntry::new(
        "goc_stability_acid_base",
        "GOC — STABILITY/ACID-BASE (v1)",
        "This is a general organic chemistry concept question.",
        Rule::Infallible(goc::solve),
    )
    .direct(),
    SolverEntry::new(
        "major_product",
        "MAJOR PRODUCT (v1)",
        "This asks for the major product of a reaction.",
        Rule::Infallible(major_product::solve),
    )
    .with_explain(),
    // Specific reaction families before the generic halide rules.
    SolverEntry::reaction(
        "benzene_directing",
        "AROMATICS — DIRECTING EFFECTS (v1)",
        aromatics::directing,
    ),
    SolverEntry::reaction("benzene_eas", "AROMATICS — SIMPLE EAS (v1)", aromatics::simple_eas),
    SolverEntry::reaction("epoxidation", "ALKENES — EPOXIDATION (v1)", additions::epoxidation),
    SolverEntry::reaction(
        "epoxide_opening",
        "EPOXIDE RING OPENING (v1)",
        additions::epoxide_opening,
    ),
    SolverEntry::reaction("br2_addition", "ALKENES — BR2 ADDITION (v1)", additions::bromine_addition),
    SolverEntry::reaction(
        "alcohols_phenols_ethers",
        "ALCOHOLS, PHENOLS & ETHERS (v1)",
        alcohols::solve,
    )
    .with_explain(),
    SolverEntry::reaction(
        "alkenes_alkynes",
        "ALKENES & ALKYNES (v1)",
        additions::alkenes_alkynes,
    ),
    SolverEntry::reaction("amines", "AMINES (v1)", amines::solve),
    SolverEntry::reaction("haloform", "HALOFORM (v1)", haloform::solve),
    SolverEntry::new(
        "alkyl_halides",
        "ALKYL HALIDES (v1)",
        REACTION_UNDERSTANDING,
        Rule::Fallible(alkyl_halides::solve),
    )
    .with_explain(),
    SolverEntry::reaction(
        "azo_coupling",
        "AROMATICS — AZO COUPLING (v1)",
        aromatics::azo_coupling,
    ),
    SolverEntry::reaction("benzyne", "AROMATICS — BENZYNE (v1)", aromatics::benzyne).advanced(),
    SolverEntry::reaction(
        "diazotization",
        "AROMATICS — DIAZOTIZATION (v1)",
        aromatics::diazotization,
    ),
    SolverEntry::reaction(
        "diazonium_substitution",
        "AROMATICS — DIAZONIUM SUBSTITUTION (v1)",
        aromatics::diazonium_substitution,
    ),
    SolverEntry::reaction("etard", "AROMATICS — ETARD (v1)", aromatics::etard),
    SolverEntry::reaction(
        "gattermann_koch",
        "AROMATICS — GATTERMANN KOCH (v1)",
        aromatics::gattermann_koch,
    ),
    SolverEntry::reaction(
        "kolbe_schmitt",
        "AROMATICS — KOLBE-SCHMITT (v1)",
        aromatics::kolbe_schmitt,
    ),
    SolverEntry::reaction(
        "reimer_tiemann",
        "AROMATICS — REIMER-TIEMANN (v1)",
        aromatics::reimer_tiemann,
    ),
    SolverEntry::reaction(
        "benzylic_halogenation",
        "AROMATICS — BENZYLIC HALOGENATION (v1)",
        aromatics::benzylic_halogenation,
    ),
    SolverEntry::reaction(
        "benzylic_oxidation",
        "AROMATICS — BENZYLIC OXIDATION (v1)",
        aromatics::benzylic_oxidation,
    ),
    SolverEntry::reaction("aldol", "CARBONYL — ALDOL (v1)", carbonyl::aldol),
    SolverEntry::reaction(
        "baeyer_villiger",
        "CARBONYL — BAEYER VILLIGER (v1)",
        carbonyl::baeyer_villiger,
    ),
    SolverEntry::reaction("cannizzaro", "CARBONYL — CANNIZZARO (v1)", carbonyl::cannizzaro),
    SolverEntry::reaction("grignard", "CARBONYL — GRIGNARD (v1)", carbonyl::grignard),
    SolverEntry::reaction(
        "hydride_reduction",
        "CARBONYL — HYDRIDE REDUCTION (v1)",
        carbonyl::hydride_reduction,
    ),
    SolverEntry::reaction("perkin", "CARBONYL — PERKIN (v1)", carbonyl::perkin),
    SolverEntry::reaction(
        "clemmensen_wolff_kishner",
        "CARBONYL — CK/WK (v1)",
        carbonyl::clemmensen_wolff_kishner,
    ),
    SolverEntry::reaction("rosenmund", "CARBONYL — ROSENMUND (v1)", carbonyl::rosenmund),
    SolverEntry::reaction("stephen", "CARBONYL — STEPHEN (v1)", carbonyl::stephen),
    SolverEntry::reaction(
        "acyl_chloride",
        "ACID DERIVATIVES — ACYL CHLORIDE (v1)",
        carboxy::acyl_chloride,
    ),
    SolverEntry::reaction("amide", "ACID DERIVATIVES — AMIDE (v1)", carboxy::amide),
    SolverEntry::reaction(
        "decarboxylation",
        "ACID DERIVATIVES — DECARBOXYLATION (v1)",
        carboxy::decarboxylation,
    ),
    SolverEntry::reaction("ester", "ACID DERIVATIVES — ESTER (v1)", carboxy::ester),
    // Theory modules.
    SolverEntry::new(
        "isomerism",
        "ISOMERISM (v1)",
        "Isomerism question.",
        Rule::Infallible(theory::isomerism::solve),
    )
    .direct(),
    SolverEntry::new(
        "stereochemistry",
        "STEREOCHEMISTRY (v1)",
        "Stereochemistry question.",
        Rule::Infallible(theory::stereochemistry::solve),
    )
    .direct(),
    SolverEntry::new(
        "polymers",
        "POLYMERS (v1)",
        "Polymers question.",
        Rule::Infallible(theory::polymers::solve),
    )
    .direct(),
    SolverEntry::new(
        "biomolecules",
        "BIOMOLECULES (v1)",
        "Biomolecules question.",
        Rule::Infallible(theory::biomolecules::solve),
    )
    .direct(),
    SolverEntry::new(
        "everyday_life",
        "EVERYDAY LIFE (v1)",
        "Everyday life chemistry question.",
        Rule::Infallible(theory::everyday::solve),
    )
    .direct(),
    SolverEntry::new(
        "practical_organic",
        "PRACTICAL ORGANIC (v1)",
        "Practical organic question.",
        Rule::Infallible(theory::practical::solve),
    )
    .direct(),
];

/// Solver ids in dispatch order.
#[must_use]
pub fn solver_ids() -> Vec<&'static str> {
    DISPATCH.iter().map(|entry| entry.id).collect()
}

// ============================================================================
// Dispatch
// ============================================================================

/// Which part of the chain produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Solver(&'static str),
    Unsupported,
}

impl Route {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Route::Solver(id) => id,
            Route::Unsupported => "unsupported",
        }
    }

    #[must_use]
    pub const fn is_unsupported(self) -> bool {
        matches!(self, Route::Unsupported)
    }
}

/// Result of one pass through the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub response: AnswerResponse,
    pub route: Route,
    /// Organic reasoning sidecar; empty unless a mechanistic solver won.
    pub explain: ExplainBundle,
}

pub const UNSUPPORTED_CONCEPT: &str = "UNSUPPORTED (v1)";
pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT DATA";

fn unsupported() -> AnswerResponse {
    let draft = AnswerDraft {
        understanding: "The current deterministic engine could not classify this question confidently."
            .to_string(),
        concept: UNSUPPORTED_CONCEPT.to_string(),
        steps: "Provide clearer reagents/conditions to match a deterministic module.".to_string(),
        final_answer: INSUFFICIENT_DATA.to_string(),
        exam_tip: "Exam tip: include solvent/heat/catalyst/peroxide info.".to_string(),
    };
    AnswerResponse::from_draft(
        draft,
        NcertLevel::NcertAligned,
        Safety::Medium,
        "No deterministic match.",
    )
}

/// Run the chain. Pure: identical input always yields an identical result.
#[must_use]
pub fn generate_answer(text: &str, context: &QuestionContext) -> Dispatch {
    let question = Question::new(text, context);

    let winner = DISPATCH.iter().find_map(|entry| {
        entry
            .rule
            .apply(entry.id, &question)
            .map(|hit| (entry, hit))
    });

    let (mut response, route, explain) = match winner {
        Some((entry, hit)) => {
            tracing::debug!("solver {} matched", entry.id);
            let explain = if entry.explain {
                organic::explain_text(question.lower())
            } else {
                ExplainBundle::default()
            };
            (entry.respond(hit), Route::Solver(entry.id), explain)
        }
        None => {
            tracing::debug!("no solver matched");
            (unsupported(), Route::Unsupported, ExplainBundle::default())
        }
    };

    apply_exam_traps(&question, &mut response);

    Dispatch {
        response,
        route,
        explain,
    }
}

// ============================================================================
// Cross-cutting exam traps
// ============================================================================

const PCC_HINTS: &[&str] = &["pcc", "p.c.c", "pyridiniumchlorochromate"];
const SULFURIC: &[&str] = &["h2so4", "sulphuric acid", "sulfuric acid"];
const CONCENTRATED: &[&str] = &["conc", "concentrated"];
const HEATED: &[&str] = &["heat", "heated", "∆", "Δ", "δ", "delta"];
const ALCOHOL_HINTS: &[&str] = &["-ol", " alcohol", "alkanol"];

pub(crate) fn has_pcc_hint(question: &Question<'_>) -> bool {
    question.blob_has_any(PCC_HINTS)
}

pub(crate) fn has_dehydration_hint(question: &Question<'_>) -> bool {
    question.joined_has_any(SULFURIC)
        && question.joined_has_any(CONCENTRATED)
        && question.joined_has_any(HEATED)
        && question.joined_has_any(ALCOHOL_HINTS)
}

/// Make sure the PCC and dehydration traps survive whichever draft won.
fn apply_exam_traps(question: &Question<'_>, response: &mut AnswerResponse) {
    if has_pcc_hint(question) && !response.exam_tip.to_lowercase().contains("pcc") {
        response.exam_tip = format!("{} (PCC oxidation)", response.exam_tip.trim_end());
    }
    if has_dehydration_hint(question) {
        let tip = response.exam_tip.to_lowercase();
        if !tip.contains("alkene") && !tip.contains("dehydration") {
            response.exam_tip = format!(
                "{} Key: dehydration → alkene formation.",
                response.exam_tip.trim_end()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(text: &str) -> Dispatch {
        generate_answer(text, &QuestionContext::default())
    }

    #[test]
    fn solver_ids_are_unique() {
        let ids = solver_ids();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
    }

    #[test]
    fn phenol_bromine_water_is_tribromination() {
        let dispatch = answer("benzene + Br2 water on phenol");
        assert_eq!(dispatch.route, Route::Solver("phenol_bromine_water"));
        assert!(
            dispatch
                .response
                .final_answer
                .contains("2,4,6-tribromophenol")
        );
    }

    #[test]
    fn pcc_stops_at_aldehyde() {
        let dispatch = answer("primary alcohol + PCC");
        assert_eq!(dispatch.route, Route::Solver("pcc_oxidation"));
        let final_answer = dispatch.response.final_answer.to_lowercase();
        assert!(final_answer.contains("aldehyde"));
        assert!(!final_answer.contains("carboxylic acid"));
    }

    #[test]
    fn unmatched_question_gets_insufficient_data() {
        let dispatch = answer("what colour is the sky on mars");
        assert_eq!(dispatch.route, Route::Unsupported);
        assert_eq!(dispatch.response.final_answer, INSUFFICIENT_DATA);
        assert_eq!(dispatch.response.concept, UNSUPPORTED_CONCEPT);
        assert_eq!(dispatch.response.common_mistake, "No deterministic match.");
        assert_eq!(dispatch.response.tags.safety, Safety::Medium);
        assert!(dispatch.explain.is_empty());
    }

    #[test]
    fn context_strings_feed_the_pcc_trap() {
        let context = QuestionContext {
            chapter: Some("Oxidation with P C C".to_string()),
            ..QuestionContext::default()
        };
        let dispatch = generate_answer("what colour is the sky on mars", &context);
        assert_eq!(dispatch.route, Route::Solver("pcc_oxidation"));
    }

    #[test]
    fn dehydration_trap_is_appended_to_any_winner() {
        let dispatch = answer("butan-1-ol + conc. H2SO4, heat");
        let tip = dispatch.response.exam_tip.to_lowercase();
        assert!(tip.contains("alkene") || tip.contains("dehydration"));
    }

    #[test]
    fn dispatch_is_idempotent() {
        let first = answer("2-bromopropane + alcoholic KOH, heat: major product");
        let second = answer("2-bromopropane + alcoholic KOH, heat: major product");
        assert_eq!(first, second);
    }

    #[test]
    fn word_matching_respects_boundaries() {
        assert!(contains_word("pe is a polymer", "pe"));
        assert!(!contains_word("peroxide", "pe"));
        assert!(contains_word("nylon-6 fibre", "nylon-6"));
    }
}
