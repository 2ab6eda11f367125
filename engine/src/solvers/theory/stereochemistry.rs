//! Stereochemistry.
//!
//! R/S, E/Z, chirality and optical activity are only assigned from the
//! structured [`StereoPayload`] carried by the question context. Text alone
//! gets theory snippets and the D/L lactic acid pair.

use luma_types::{SolverHit, StereoPayload};

use crate::solvers::{INSUFFICIENT_DATA, Question, contains_any, contains_word};

const CHIRALITY: &str = "Chirality: a molecule is chiral if it is not superimposable on its mirror image. A common cause is a stereogenic (chiral) center: a tetrahedral carbon attached to four different groups.";
const RS: &str = "R/S configuration (CIP): assign priorities 1–4 by atomic number; orient lowest priority (4) away; trace 1→2→3: clockwise = R, counterclockwise = S (invert if group 4 is toward you).";
const EZ: &str = "E/Z configuration: assign CIP priority on each alkene carbon; if the two highest-priority groups are on the same side → Z; opposite sides → E. (cis/trans is only valid for simple cases with identical groups.)";
const MESO: &str = "Meso compound: contains stereocenters but is achiral overall due to an internal plane of symmetry; therefore it is optically inactive (internal compensation).";
const ENANTIOMER_DIASTEREOMER: &str = "Enantiomers are non-superimposable mirror images (opposite configuration at all stereocenters). Diastereomers are stereoisomers that are not mirror images (differ at some but not all stereocenters).";

fn theory(snippet: &str) -> SolverHit {
    SolverHit::new("", snippet, "")
}

fn incomplete(need: &str, tip: &str, mistake: &str) -> SolverHit {
    SolverHit::new(need, INSUFFICIENT_DATA, tip).with_mistake(mistake)
}

// ============================================================================
// Structured assignments
// ============================================================================

/// Spin of the 1→2→3 trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Clockwise,
    Counterclockwise,
}

impl Direction {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "clockwise" => Some(Self::Clockwise),
            "counterclockwise" => Some(Self::Counterclockwise),
            _ => None,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Clockwise => "clockwise",
            Self::Counterclockwise => "counterclockwise",
        }
    }
}

/// CIP descriptor for one stereocenter. Looking from the wrong side flips it.
fn rs_descriptor(direction: Direction, lowest_priority_is_away: bool) -> char {
    match (direction, lowest_priority_is_away) {
        (Direction::Clockwise, true) | (Direction::Counterclockwise, false) => 'R',
        (Direction::Counterclockwise, true) | (Direction::Clockwise, false) => 'S',
    }
}

fn assign_rs(
    sequence_direction: Option<&str>,
    lowest_priority_is_away: Option<bool>,
    cip_priorities: &[String],
) -> SolverHit {
    let (Some(direction), Some(away)) = (
        sequence_direction.and_then(Direction::parse),
        lowest_priority_is_away,
    ) else {
        return incomplete(
            "Need: sequence_direction ('clockwise'/'counterclockwise') and lowest_priority_is_away (true/false).",
            "For R/S, always place group-4 away; if group-4 is toward you, invert the result.",
            "Trying to assign R/S from text without wedge/dash or priority/orientation data.",
        );
    };
    let descriptor = rs_descriptor(direction, away);
    tracing::debug!(
        "R/S assignment: {} with lowest priority {} gives {descriptor}",
        direction.as_str(),
        if away { "away" } else { "toward" }
    );
    if let [first, second, third, fourth, ..] = cip_priorities {
        tracing::debug!("CIP priorities: 1>{first}, 2>{second}, 3>{third}, 4>{fourth}");
    }
    SolverHit::new(
        "1) Assign CIP priorities 1–4.\n2) Ensure priority-4 is away.\n3) Trace 1→2→3: clockwise=R, counterclockwise=S.\n4) If priority-4 is toward, invert.",
        descriptor.to_string(),
        "Clockwise with group-4 away = R; counterclockwise = S; invert if group-4 is toward you.",
    )
    .with_mistake("Forgetting to invert when the lowest priority is not pointing away.")
}

fn assign_ez(same_side: Option<bool>) -> SolverHit {
    let Some(same_side) = same_side else {
        return incomplete(
            "Need: same_side (true/false) for the two highest priority groups on each alkene carbon.",
            "Assign CIP on each alkene carbon, then compare the two highest-priority groups: same side → Z, opposite → E.",
            "Using cis/trans when groups are not identical; skipping CIP priority assignment.",
        );
    };
    SolverHit::new(
        "1) Assign CIP priority on each alkene carbon.\n2) Compare the two highest priorities: same side → Z, opposite → E.",
        if same_side { "Z" } else { "E" },
        "Z = zusammen (together); E = entgegen (opposite).",
    )
    .with_mistake("Calling cis/trans for substituted alkenes without checking identical groups.")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chirality {
    Achiral,
    Meso,
    Chiral,
}

impl Chirality {
    const fn classify(chiral_centers: u32, plane_of_symmetry: bool) -> Self {
        if chiral_centers == 0 {
            Self::Achiral
        } else if plane_of_symmetry {
            Self::Meso
        } else {
            Self::Chiral
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Achiral => "ACHIRAL",
            Self::Meso => "MESO",
            Self::Chiral => "CHIRAL",
        }
    }
}

fn assess_chirality(chiral_centers: u32, plane_of_symmetry: bool) -> SolverHit {
    SolverHit::new(
        "1) Count stereocenters.\n2) Check internal plane of symmetry.\n3) Conclude chiral / meso / achiral.",
        Chirality::classify(chiral_centers, plane_of_symmetry).as_str(),
        "Plane of symmetry overrides chirality: meso is achiral overall.",
    )
    .with_mistake("Marking meso as optically active.")
}

fn assess_optical_activity(chiral_centers: u32, plane_of_symmetry: bool) -> SolverHit {
    let answer = match Chirality::classify(chiral_centers, plane_of_symmetry) {
        Chirality::Chiral => "OPTICALLY ACTIVE",
        Chirality::Achiral | Chirality::Meso => "OPTICALLY INACTIVE",
    };
    SolverHit::new(
        "1) Determine chirality.\n2) If meso/achiral → inactive; if chiral (no symmetry) → active.",
        answer,
        "Meso compounds are optically inactive due to internal compensation.",
    )
    .with_mistake("Equating presence of stereocenter with optical activity (meso exception).")
}

fn from_payload(payload: &StereoPayload) -> SolverHit {
    match payload {
        StereoPayload::Rs {
            sequence_direction,
            lowest_priority_is_away,
            cip_priorities,
        } => assign_rs(
            sequence_direction.as_deref(),
            *lowest_priority_is_away,
            cip_priorities,
        ),
        StereoPayload::Ez { same_side } => assign_ez(*same_side),
        StereoPayload::Chirality {
            chiral_centers,
            plane_of_symmetry,
        } => assess_chirality(*chiral_centers, *plane_of_symmetry),
        StereoPayload::OpticalActivity {
            chiral_centers,
            plane_of_symmetry,
        } => assess_optical_activity(*chiral_centers, *plane_of_symmetry),
    }
}

// ============================================================================
// Text-only questions
// ============================================================================

fn from_text(q: &Question<'_>) -> Option<SolverHit> {
    let t = q.lower();
    let descriptor_prefix = contains_any(t, &["r-", "s-", "e-", "z-"]);

    if contains_any(t, &["chiral", "achiral"]) && !descriptor_prefix {
        return Some(theory(CHIRALITY));
    }
    if contains_any(
        t,
        &["cahn", "ingold", "prelog", "assign r", "assign s", "r/s", "configuration r", "configuration s"],
    ) || contains_word(t, "cip")
    {
        return Some(theory(RS));
    }
    if contains_any(t, &["e/z", "assign e", "assign z", "configuration e", "configuration z"]) {
        return Some(theory(EZ));
    }
    if t.contains("meso") {
        return Some(theory(MESO));
    }
    if contains_any(t, &["enantiomer", "diastereomer"])
        && contains_any(t, &["difference", "distinguish", "between"])
    {
        return Some(theory(ENANTIOMER_DIASTEREOMER));
    }
    contains_any(t, &["d-lactic", "l-lactic", "d lactic", "l lactic"]).then(|| {
        SolverHit::new(
            "D- and L- denote enantiomers for lactic acid in exam context.",
            "They are enantiomers (optical isomers).",
            "Do not confuse D/L with R/S in general; D/L is a relative configuration notation.",
        )
        .with_mistake("Calling D/L directly as R/S without enough structural data.")
    })
}

pub(crate) fn solve(q: &Question<'_>) -> Option<SolverHit> {
    match &q.context().stereo {
        Some(payload) => Some(from_payload(payload)),
        None => from_text(q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luma_types::QuestionContext;

    fn with_payload(payload: StereoPayload) -> Option<SolverHit> {
        let context = QuestionContext {
            stereo: Some(payload),
            ..QuestionContext::default()
        };
        solve(&Question::new("Assign R/S", &context))
    }

    fn solve_text(text: &str) -> Option<SolverHit> {
        let context = QuestionContext::default();
        solve(&Question::new(text, &context))
    }

    #[test]
    fn clockwise_with_lowest_away_is_r() {
        let hit = with_payload(StereoPayload::Rs {
            sequence_direction: Some("clockwise".to_string()),
            lowest_priority_is_away: Some(true),
            cip_priorities: Vec::new(),
        })
        .unwrap();
        assert_eq!(hit.product, "R");
    }

    #[test]
    fn lowest_priority_toward_viewer_inverts() {
        let hit = with_payload(StereoPayload::Rs {
            sequence_direction: Some("Clockwise".to_string()),
            lowest_priority_is_away: Some(false),
            cip_priorities: vec!["Br".into(), "Cl".into(), "F".into(), "H".into()],
        })
        .unwrap();
        assert_eq!(hit.product, "S");
    }

    #[test]
    fn incomplete_rs_payload_is_insufficient() {
        let hit = with_payload(StereoPayload::Rs {
            sequence_direction: Some("sideways".to_string()),
            lowest_priority_is_away: Some(true),
            cip_priorities: Vec::new(),
        })
        .unwrap();
        assert_eq!(hit.product, INSUFFICIENT_DATA);
        assert!(hit.reaction.starts_with("Need: sequence_direction"));
    }

    #[test]
    fn same_side_is_z() {
        let hit = with_payload(StereoPayload::Ez {
            same_side: Some(true),
        })
        .unwrap();
        assert_eq!(hit.product, "Z");
    }

    #[test]
    fn symmetric_stereocenters_are_meso_and_inactive() {
        let meso = with_payload(StereoPayload::Chirality {
            chiral_centers: 2,
            plane_of_symmetry: true,
        })
        .unwrap();
        assert_eq!(meso.product, "MESO");
        let optical = with_payload(StereoPayload::OpticalActivity {
            chiral_centers: 2,
            plane_of_symmetry: true,
        })
        .unwrap();
        assert_eq!(optical.product, "OPTICALLY INACTIVE");
    }

    #[test]
    fn text_questions_get_theory() {
        assert_eq!(solve_text("Define chirality").unwrap().product, CHIRALITY);
        assert_eq!(solve_text("What is a meso compound?").unwrap().product, MESO);
        assert!(solve_text("white precipitate on adding AgNO3").is_none());
    }
}
