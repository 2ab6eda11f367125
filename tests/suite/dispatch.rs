//! End-to-end dispatch scenarios

use luma_engine::solvers::INSUFFICIENT_DATA;
use luma_engine::{ContextExamMode, EngineError, Engine, QuestionContext, Request};
use luma_types::StereoPayload;

use crate::common::{ask, ask_with, final_answer, has_flag};

#[test]
fn phenol_with_bromine_water_gives_tribromophenol() {
    let packet = ask("phenol + Br2 water");
    assert!(final_answer(&packet).contains("2,4,6-tribromophenol"));
}

#[test]
fn pcc_stops_primary_alcohol_at_the_aldehyde() {
    let packet = ask("primary alcohol + PCC");
    let answer = final_answer(&packet).to_lowercase();
    assert!(answer.contains("aldehyde"));
    assert!(!answer.contains("carboxylic acid"));
}

#[test]
fn alcoholic_koh_with_heat_eliminates() {
    let packet = ask("major product: 2-bromopropane + alcoholic KOH, heat");
    assert!(final_answer(&packet).contains("propene"));
    assert!(!has_flag(&packet, "KOH_MEDIUM_NOT_SPECIFIED"));
}

#[test]
fn bare_major_product_is_flagged() {
    let packet = ask("What is the major product of this reaction?");
    assert!(has_flag(&packet, "MAJOR_PRODUCT_MISSING_CONDITIONS"));
    assert_eq!(
        packet.error_summary.keys().map(|c| c.as_str()).collect::<Vec<_>>(),
        ["CONDITION_OMISSION"]
    );
}

#[test]
fn isomerism_pair_is_classified() {
    let packet = ask("What isomerism is shown between n-butane and isobutane?");
    assert!(final_answer(&packet).starts_with("Structural isomerism → Chain."));
}

#[test]
fn stereo_payload_assigns_configuration() {
    let context = QuestionContext {
        stereo: Some(StereoPayload::Rs {
            sequence_direction: Some("counterclockwise".to_string()),
            lowest_priority_is_away: Some(true),
            cip_priorities: Vec::new(),
        }),
        ..QuestionContext::default()
    };
    let packet = ask_with("Assign R/S to the stereocenter", context);
    assert_eq!(final_answer(&packet), "S");
}

#[test]
fn stereo_payload_deserializes_from_context_json() {
    let context: QuestionContext = serde_json::from_str(
        r#"{"class": "12", "exam_mode": "NEET", "stereo": {"subtask": "meso", "chiral_centers": 2, "plane_of_symmetry": true}}"#,
    )
    .unwrap();
    assert_eq!(context.exam_mode, Some(ContextExamMode::Neet));
    let packet = ask_with("Is this compound chiral?", context);
    assert_eq!(final_answer(&packet), "MESO");
    assert_eq!(packet.exam_mode.as_str(), "NEET");
}

#[test]
fn unmatched_question_is_insufficient_data() {
    let packet = ask("what colour is the sky on mars");
    assert_eq!(final_answer(&packet), INSUFFICIENT_DATA);
    assert!(has_flag(&packet, "NO_DETERMINISTIC_MATCH"));
}

#[test]
fn empty_question_is_an_input_error() {
    let engine = Engine::new();
    assert_eq!(
        engine.answer(&Request::new("")).unwrap_err(),
        EngineError::EmptyQuestion
    );
    assert!(matches!(
        engine.answer(&Request::new(" x ")),
        Err(EngineError::QuestionTooShort { chars: 1, .. })
    ));
}
