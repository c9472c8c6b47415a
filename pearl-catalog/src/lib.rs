//! Static sample dataset of the research platform, with the filters and the
//! canned predictor that run over it.
//!
//! Records are compiled into the binary from `data/*.json` and never change
//! after load.

use std::sync::OnceLock;

use pearl_core::{CaseStudy, Patient, PearlError, ResearchProject, TrendAnalysis};
use serde::de::DeserializeOwned;

pub mod insights;
pub mod predict;
pub mod search;

pub use predict::{predict_treatment, PredictionPhase};
pub use search::{CaseStudyQuery, PatientFilters, PatientQuery, RangeFilter};

const PATIENTS_JSON: &str = include_str!("../data/patients.json");
const CASE_STUDIES_JSON: &str = include_str!("../data/case_studies.json");
const RESEARCH_PROJECTS_JSON: &str = include_str!("../data/research_projects.json");
const TREND_ANALYSES_JSON: &str = include_str!("../data/trend_analyses.json");

static SHARED: OnceLock<Result<Catalog, PearlError>> = OnceLock::new();

/// Immutable in-memory store of every sample record.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    patients: Vec<Patient>,
    case_studies: Vec<CaseStudy>,
    research_projects: Vec<ResearchProject>,
    trend_analyses: Vec<TrendAnalysis>,
}

impl Catalog {
    /// Parse the dataset bundled with the crate.
    pub fn builtin() -> Result<Self, PearlError> {
        Self::from_json_parts(
            PATIENTS_JSON,
            CASE_STUDIES_JSON,
            RESEARCH_PROJECTS_JSON,
            TREND_ANALYSES_JSON,
        )
    }

    /// Process-wide copy of [`Catalog::builtin`], parsed on first use.
    pub fn shared() -> Result<&'static Catalog, PearlError> {
        SHARED
            .get_or_init(Catalog::builtin)
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn from_json_parts(
        patients: &str,
        case_studies: &str,
        research_projects: &str,
        trend_analyses: &str,
    ) -> Result<Self, PearlError> {
        let catalog = Self {
            patients: parse_section("patients", patients)?,
            case_studies: parse_section("case studies", case_studies)?,
            research_projects: parse_section("research projects", research_projects)?,
            trend_analyses: parse_section("trend analyses", trend_analyses)?,
        };

        tracing::debug!(
            patients = catalog.patients.len(),
            case_studies = catalog.case_studies.len(),
            research_projects = catalog.research_projects.len(),
            trend_analyses = catalog.trend_analyses.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn case_studies(&self) -> &[CaseStudy] {
        &self.case_studies
    }

    pub fn research_projects(&self) -> &[ResearchProject] {
        &self.research_projects
    }

    pub fn trend_analyses(&self) -> &[TrendAnalysis] {
        &self.trend_analyses
    }

    pub fn find_patient(&self, id: &str) -> Result<&Patient, PearlError> {
        self.patients
            .iter()
            .find(|patient| patient.id == id)
            .ok_or_else(|| {
                tracing::warn!(patient_id = id, "patient lookup missed");
                PearlError::PatientNotFound(id.to_string())
            })
    }

    pub fn find_trend(&self, id: &str) -> Option<&TrendAnalysis> {
        self.trend_analyses.iter().find(|analysis| analysis.id == id)
    }

    pub fn search_patients(&self, query: &PatientQuery) -> Vec<&Patient> {
        query.apply(&self.patients)
    }

    pub fn search_case_studies(&self, query: &CaseStudyQuery) -> Vec<&CaseStudy> {
        query.apply(&self.case_studies)
    }
}

fn parse_section<T: DeserializeOwned>(section: &str, json: &str) -> Result<Vec<T>, PearlError> {
    serde_json::from_str(json).map_err(|err| PearlError::Parse(format!("{section}: {err}")))
}
