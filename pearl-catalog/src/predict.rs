//! Canned treatment predictor.
//!
//! There is no model behind this: every request yields the same authored
//! recommendation with the requested patient id substituted. The front-end
//! owns the artificial "analysis" delay and drives [`PredictionPhase`].

use pearl_core::{PearlError, RecommendedTreatment, SimilarCase, TreatmentPrediction};

const CONFIDENCE_SCORE: u8 = 85;

/// Build the canned prediction for `patient_id`. The patient's own record is
/// not consulted.
pub fn predict_treatment(patient_id: &str) -> TreatmentPrediction {
    let prediction = TreatmentPrediction {
        patient_id: patient_id.to_string(),
        recommended_treatments: recommended_treatments(),
        confidence_score: CONFIDENCE_SCORE,
        similar_cases: similar_cases(),
        risk_factors: strings(&[
            "Low platelet count (<30,000/μL)",
            "Recent bleeding episodes",
            "Age factor may affect treatment response",
            "Consider pregnancy planning if applicable",
        ]),
    };

    tracing::info!(
        patient_id,
        recommendations = prediction.recommended_treatments.len(),
        "treatment prediction ready"
    );
    prediction
}

fn recommended_treatments() -> Vec<RecommendedTreatment> {
    vec![
        RecommendedTreatment {
            treatment: "Eltrombopag".to_string(),
            success_probability: 78,
            time_to_response: "2-4 weeks".to_string(),
            potential_side_effects: strings(&["Mild nausea", "Headache", "Fatigue"]),
            reasoning: "Based on similar cases with moderate ITP and patient demographics. \
                        High success rate in Caucasian females aged 30-40."
                .to_string(),
        },
        RecommendedTreatment {
            treatment: "Rituximab".to_string(),
            success_probability: 65,
            time_to_response: "4-8 weeks".to_string(),
            potential_side_effects: strings(&[
                "Infusion reactions",
                "Increased infection risk",
                "Fatigue",
            ]),
            reasoning: "Good alternative option with sustained response potential. \
                        Effective in patients with chronic ITP."
                .to_string(),
        },
        RecommendedTreatment {
            treatment: "Prednisone (continued)".to_string(),
            success_probability: 45,
            time_to_response: "1-2 weeks".to_string(),
            potential_side_effects: strings(&["Weight gain", "Mood changes", "Bone density loss"]),
            reasoning: "Current treatment showing partial response. \
                        May need dose adjustment or combination therapy."
                .to_string(),
        },
    ]
}

fn similar_cases() -> Vec<SimilarCase> {
    vec![
        SimilarCase {
            patient_id: "PAT002".to_string(),
            similarity: 92,
            outcome: "Excellent response to Eltrombopag".to_string(),
            treatment_used: "Eltrombopag 50mg daily".to_string(),
            key_factors: strings(&["Similar age", "Geographic region", "Platelet count range"]),
        },
        SimilarCase {
            patient_id: "PAT003".to_string(),
            similarity: 78,
            outcome: "Good response to combination therapy".to_string(),
            treatment_used: "Prednisone + IVIG".to_string(),
            key_factors: strings(&["Similar symptoms", "Gender", "Disease severity"]),
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Predictor page lifecycle: idle, then analyzing for the configured delay,
/// then showing the result. A finished result can be re-run.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PredictionPhase {
    #[default]
    Idle,
    Analyzing {
        patient_id: String,
    },
    Ready(TreatmentPrediction),
}

impl PredictionPhase {
    pub fn is_analyzing(&self) -> bool {
        matches!(self, PredictionPhase::Analyzing { .. })
    }

    /// Whether the "Analyze" action is available for the current selection.
    pub fn can_start(&self, selected: &str) -> bool {
        !selected.is_empty() && !self.is_analyzing()
    }

    /// Begin analysing `selected`. Refused without a selection; a run already
    /// in flight is left as it is.
    pub fn start(self, selected: &str) -> Result<Self, PearlError> {
        if selected.is_empty() {
            return Err(PearlError::NoPatientSelected);
        }
        if self.is_analyzing() {
            return Ok(self);
        }
        Ok(PredictionPhase::Analyzing {
            patient_id: selected.to_string(),
        })
    }

    /// Complete the analysis once the delay has elapsed.
    pub fn finish(self) -> Self {
        match self {
            PredictionPhase::Analyzing { patient_id } => {
                PredictionPhase::Ready(predict_treatment(&patient_id))
            }
            other => other,
        }
    }

    pub fn prediction(&self) -> Option<&TreatmentPrediction> {
        match self {
            PredictionPhase::Ready(prediction) => Some(prediction),
            _ => None,
        }
    }
}
