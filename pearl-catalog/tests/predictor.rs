use std::fs;

use pearl_catalog::{predict_treatment, Catalog, PredictionPhase};
use pearl_core::PearlError;
use serde_json::Value;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn prediction_matches_golden() {
    let actual = serde_json::to_value(predict_treatment("PAT003")).expect("serialize prediction");

    let expected = fs::read_to_string(fixture_path("prediction_pat003.json"))
        .expect("read golden prediction");
    let expected: Value = serde_json::from_str(&expected).expect("golden is valid JSON");

    assert_eq!(actual, expected);
}

#[test]
fn recommendations_are_ranked_by_success_probability() {
    let prediction = predict_treatment("PAT001");

    assert!(!prediction.recommended_treatments.is_empty());
    let probabilities: Vec<u8> = prediction
        .recommended_treatments
        .iter()
        .map(|treatment| treatment.success_probability)
        .collect();
    assert!(probabilities.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn prediction_ignores_patient_attributes() {
    let catalog = Catalog::builtin().expect("builtin catalog");

    let mut predictions = catalog
        .patients()
        .iter()
        .map(|patient| predict_treatment(&patient.id));
    let first = predictions.next().expect("at least one patient");

    for other in predictions {
        assert_ne!(other.patient_id, first.patient_id);
        assert_eq!(other.recommended_treatments, first.recommended_treatments);
        assert_eq!(other.similar_cases, first.similar_cases);
        assert_eq!(other.risk_factors, first.risk_factors);
    }
}

#[test]
fn phase_runs_idle_analyzing_ready() {
    let phase = PredictionPhase::default();
    assert!(phase.can_start("PAT002"));
    assert!(phase.prediction().is_none());

    let phase = phase.start("PAT002").expect("selection present");
    assert!(phase.is_analyzing());
    assert!(!phase.can_start("PAT002"));
    assert!(phase.prediction().is_none());

    let phase = phase.finish();
    let prediction = phase.prediction().expect("result after finish");
    assert_eq!(prediction.patient_id, "PAT002");
}

#[test]
fn phase_refuses_to_start_without_selection() {
    let phase = PredictionPhase::Idle;
    assert!(!phase.can_start(""));
    assert_eq!(phase.start(""), Err(PearlError::NoPatientSelected));
}

#[test]
fn restart_while_analyzing_keeps_original_patient() {
    let phase = PredictionPhase::Idle
        .start("PAT001")
        .and_then(|phase| phase.start("PAT003"))
        .expect("both starts accepted");

    assert_eq!(
        phase,
        PredictionPhase::Analyzing {
            patient_id: "PAT001".to_string()
        }
    );
}

#[test]
fn finished_result_can_be_rerun_for_another_patient() {
    let ready = PredictionPhase::Idle
        .start("PAT001")
        .map(PredictionPhase::finish)
        .expect("first run");
    assert!(ready.can_start("PAT003"));

    let rerun = ready.start("PAT003").map(PredictionPhase::finish).expect("second run");
    assert_eq!(rerun.prediction().map(|p| p.patient_id.as_str()), Some("PAT003"));
}

#[test]
fn finish_outside_analysis_is_a_no_op() {
    assert_eq!(PredictionPhase::Idle.finish(), PredictionPhase::Idle);
}
