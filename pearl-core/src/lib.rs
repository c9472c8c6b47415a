//! Core record types for the Pearl ITP research platform.

use std::fmt;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod format;
pub mod route;
pub mod severity;

pub use route::Route;
pub use severity::{PlateletSeverity, Tone};

/// Tunables shared by every front-end. Missing fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PearlConfig {
    /// Artificial delay (ms) before the canned prediction is shown.
    pub analysis_delay_ms: u64,
    /// How many patients the home page lists as "recent".
    pub recent_patient_count: usize,
}

impl Default for PearlConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 3_000,
            recent_patient_count: 3,
        }
    }
}

impl PearlConfig {
    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PatientStatus {
    Active,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl PatientStatus {
    pub fn label(self) -> &'static str {
        match self {
            PatientStatus::Active => "Active",
            PatientStatus::Completed => "Completed",
            PatientStatus::OnHold => "On Hold",
        }
    }
}

/// A patient on the research roster. Sub-records belong to exactly one patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub ethnicity: String,
    pub region: String,
    pub diagnosis_date: NaiveDate,
    /// Latest platelet count, per microliter.
    pub platelet_count: u32,
    pub status: PatientStatus,
    #[serde(default)]
    pub medical_history: Vec<MedicalHistoryEntry>,
    #[serde(default)]
    pub current_treatment: Vec<Treatment>,
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    #[serde(default)]
    pub lab_results: Vec<LabResult>,
}

impl Patient {
    pub fn platelet_severity(&self) -> PlateletSeverity {
        PlateletSeverity::classify(self.platelet_count)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HistorySeverity {
    Mild,
    Moderate,
    Severe,
}

impl HistorySeverity {
    pub fn label(self) -> &'static str {
        match self {
            HistorySeverity::Mild => "Mild",
            HistorySeverity::Moderate => "Moderate",
            HistorySeverity::Severe => "Severe",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalHistoryEntry {
    pub id: String,
    pub date: NaiveDate,
    pub condition: String,
    pub severity: HistorySeverity,
    pub notes: String,
    pub physician: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TreatmentResponse {
    Excellent,
    Good,
    Moderate,
    Poor,
    Unknown,
}

impl TreatmentResponse {
    pub const ALL: [TreatmentResponse; 5] = [
        TreatmentResponse::Excellent,
        TreatmentResponse::Good,
        TreatmentResponse::Moderate,
        TreatmentResponse::Poor,
        TreatmentResponse::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TreatmentResponse::Excellent => "Excellent",
            TreatmentResponse::Good => "Good",
            TreatmentResponse::Moderate => "Moderate",
            TreatmentResponse::Poor => "Poor",
            TreatmentResponse::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub dosage: String,
    pub frequency: String,
    pub response: TreatmentResponse,
    #[serde(default)]
    pub side_effects: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SymptomFrequency {
    Daily,
    Weekly,
    Monthly,
    Occasional,
}

impl SymptomFrequency {
    pub fn label(self) -> &'static str {
        match self {
            SymptomFrequency::Daily => "Daily",
            SymptomFrequency::Weekly => "Weekly",
            SymptomFrequency::Monthly => "Monthly",
            SymptomFrequency::Occasional => "Occasional",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    /// Patient-reported severity on a 1-10 scale.
    pub severity: u8,
    pub onset: NaiveDate,
    pub duration: String,
    pub frequency: SymptomFrequency,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LabStatus {
    Normal,
    Abnormal,
    Critical,
}

impl LabStatus {
    pub fn label(self) -> &'static str {
        match self {
            LabStatus::Normal => "Normal",
            LabStatus::Abnormal => "Abnormal",
            LabStatus::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabResult {
    pub id: String,
    pub test_name: String,
    pub value: f64,
    pub unit: String,
    pub reference_range: String,
    pub date: NaiveDate,
    pub status: LabStatus,
}

/// A published study. Not linked to any roster patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub disease: String,
    pub company: String,
    pub patient_demographics: PatientDemographics,
    pub treatment_protocol: String,
    pub outcome: String,
    pub duration: String,
    pub publication_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientDemographics {
    pub age_range: String,
    pub gender: String,
    pub ethnicity: String,
    pub region: String,
    #[serde(default)]
    pub comorbidities: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Paused,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Paused => "Paused",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchProject {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_date: NaiveDate,
    pub last_modified: NaiveDate,
    pub status: ProjectStatus,
    /// Roster ids by value; nothing checks that they exist.
    #[serde(default)]
    pub patient_ids: Vec<String>,
    #[serde(default)]
    pub findings: Vec<String>,
    #[serde(default)]
    pub collaborators: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub id: String,
    pub title: String,
    pub timeframe: String,
    pub patient_count: u32,
    #[serde(default)]
    pub key_insights: Vec<String>,
    #[serde(default)]
    pub chart_data: Vec<ChartDataPoint>,
    pub generated_date: NaiveDate,
}

/// One labeled value in a chart series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartDataPoint {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl ChartDataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            category: None,
            date: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentPrediction {
    pub patient_id: String,
    /// Ranked by descending success probability.
    pub recommended_treatments: Vec<RecommendedTreatment>,
    pub confidence_score: u8,
    pub similar_cases: Vec<SimilarCase>,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedTreatment {
    pub treatment: String,
    /// Percentage, 0-100.
    pub success_probability: u8,
    pub time_to_response: String,
    pub potential_side_effects: Vec<String>,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimilarCase {
    pub patient_id: String,
    pub similarity: u8,
    pub outcome: String,
    pub treatment_used: String,
    pub key_factors: Vec<String>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PearlError {
    #[error("Patient not found: {0}")]
    PatientNotFound(String),
    #[error("Could not read dataset: {0}")]
    Parse(String),
    #[error("Invalid range '{0}', expected MIN-MAX")]
    InvalidRange(String),
    #[error("No patient selected")]
    NoPatientSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_match_predictor_page() {
        let config = PearlConfig::default();
        assert_eq!(config.analysis_delay(), Duration::from_secs(3));
        assert_eq!(config.recent_patient_count, 3);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: PearlConfig =
            serde_json::from_value(serde_json::json!({ "analysisDelayMs": 250 })).unwrap();
        assert_eq!(config.analysis_delay_ms, 250);
        assert_eq!(config.recent_patient_count, 3);
    }

    #[test]
    fn multi_word_statuses_use_display_spelling() {
        assert_eq!(
            serde_json::to_value(PatientStatus::OnHold).unwrap(),
            serde_json::json!("On Hold")
        );
        let status: ProjectStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(status, ProjectStatus::InProgress);
    }

    #[test]
    fn treatment_without_end_date_deserializes() {
        let treatment: Treatment = serde_json::from_value(serde_json::json!({
            "id": "T009",
            "name": "Romiplostim",
            "startDate": "2024-02-01",
            "dosage": "1mcg/kg",
            "frequency": "Weekly",
            "response": "Unknown"
        }))
        .unwrap();

        assert_eq!(treatment.end_date, None);
        assert!(treatment.side_effects.is_empty());
        assert_eq!(treatment.response.label(), "Unknown");
    }
}
