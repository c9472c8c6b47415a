//! Form-driven narrowing of the patient roster and the case-study library.
//!
//! Both queries apply their predicates one after another over the full list,
//! AND-combined. An inactive field (blank text, empty set, no range) leaves the
//! list untouched, so an all-default query returns every record in catalog
//! order.

use std::str::FromStr;

use pearl_core::{CaseStudy, Gender, Patient, PearlError, TreatmentResponse};
use serde::{Deserialize, Serialize};

pub const SYMPTOM_OPTIONS: [&str; 5] = [
    "Petechiae",
    "Easy bruising",
    "Bleeding gums",
    "Fatigue",
    "Nosebleeds",
];

pub const REGION_OPTIONS: [&str; 5] = [
    "North America",
    "Europe",
    "Asia Pacific",
    "South America",
    "Africa",
];

pub const ETHNICITY_OPTIONS: [&str; 5] = [
    "Caucasian",
    "Asian",
    "Hispanic",
    "African American",
    "Middle Eastern",
];

pub const DISEASE_OPTIONS: [&str; 3] = ["ITP", "Thrombocytopenia", "Autoimmune disorders"];

pub const COMPANY_OPTIONS: [&str; 5] = [
    "Novartis",
    "Roche",
    "Rigel Pharmaceuticals",
    "Amgen",
    "Pfizer",
];

/// Bounds of the age slider.
pub const AGE_SLIDER: RangeFilter = RangeFilter { min: 0, max: 100 };
/// Bounds of the platelet slider, per µL.
pub const PLATELET_SLIDER: RangeFilter = RangeFilter {
    min: 0,
    max: 500_000,
};
pub const PLATELET_SLIDER_STEP: u32 = 5_000;

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeFilter {
    pub min: u32,
    pub max: u32,
}

impl RangeFilter {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Build a range from two free-form form fields. Both blank means no
    /// filter; a blank or unreadable side falls back to the slider bound.
    pub fn from_inputs(min: &str, max: &str, bounds: RangeFilter) -> Option<Self> {
        let (min, max) = (min.trim(), max.trim());
        if min.is_empty() && max.is_empty() {
            return None;
        }
        Some(Self {
            min: min.parse().unwrap_or(bounds.min),
            max: max.parse().unwrap_or(bounds.max),
        })
    }
}

impl FromStr for RangeFilter {
    type Err = PearlError;

    /// Accepts `MIN-MAX`, e.g. `20000-50000`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || PearlError::InvalidRange(text.to_string());
        let (min, max) = text.split_once('-').ok_or_else(invalid)?;
        let min: u32 = min.trim().replace(',', "").parse().map_err(|_| invalid())?;
        let max: u32 = max.trim().replace(',', "").parse().map_err(|_| invalid())?;
        if min > max {
            return Err(invalid());
        }
        Ok(Self { min, max })
    }
}

/// The "advanced filters" panel of the patient search page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PatientFilters {
    pub symptoms: Vec<String>,
    pub region: Vec<String>,
    pub ethnicity: Vec<String>,
    pub gender: Vec<Gender>,
    pub age_range: Option<RangeFilter>,
    pub platelet_range: Option<RangeFilter>,
    pub treatment_response: Vec<TreatmentResponse>,
}

impl PatientFilters {
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
            && self.region.is_empty()
            && self.ethnicity.is_empty()
            && self.gender.is_empty()
            && self.age_range.is_none()
            && self.platelet_range.is_none()
            && self.treatment_response.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PatientQuery {
    /// Case-insensitive substring of the patient name, used as typed.
    pub name: String,
    pub filters: PatientFilters,
}

impl PatientQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        !self.name.is_empty() || !self.filters.is_empty()
    }

    pub fn apply<'a>(&self, patients: &'a [Patient]) -> Vec<&'a Patient> {
        let filters = &self.filters;
        let mut results: Vec<&Patient> = patients.iter().collect();

        if !self.name.is_empty() {
            let needle = self.name.to_lowercase();
            results.retain(|patient| patient.name.to_lowercase().contains(&needle));
        }

        if !filters.symptoms.is_empty() {
            results.retain(|patient| {
                patient
                    .symptoms
                    .iter()
                    .any(|symptom| filters.symptoms.contains(&symptom.name))
            });
        }

        if !filters.region.is_empty() {
            results.retain(|patient| filters.region.contains(&patient.region));
        }

        if !filters.ethnicity.is_empty() {
            results.retain(|patient| filters.ethnicity.contains(&patient.ethnicity));
        }

        if !filters.gender.is_empty() {
            results.retain(|patient| filters.gender.contains(&patient.gender));
        }

        if let Some(range) = filters.age_range {
            results.retain(|patient| range.contains(patient.age));
        }

        if let Some(range) = filters.platelet_range {
            results.retain(|patient| range.contains(patient.platelet_count));
        }

        if !filters.treatment_response.is_empty() {
            results.retain(|patient| {
                patient
                    .current_treatment
                    .iter()
                    .any(|treatment| filters.treatment_response.contains(&treatment.response))
            });
        }

        tracing::debug!(
            total = patients.len(),
            matched = results.len(),
            "patient search"
        );
        results
    }
}

/// Free-text search plus the disease/company dropdowns of the case-study page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CaseStudyQuery {
    /// Case-insensitive substring of title, protocol or any tag.
    pub term: String,
    /// Exact, case-sensitive match.
    pub disease: Option<String>,
    /// Exact, case-sensitive match.
    pub company: Option<String>,
}

impl CaseStudyQuery {
    pub fn is_active(&self) -> bool {
        !self.term.is_empty()
            || selected(&self.disease).is_some()
            || selected(&self.company).is_some()
    }

    pub fn apply<'a>(&self, studies: &'a [CaseStudy]) -> Vec<&'a CaseStudy> {
        let mut results: Vec<&CaseStudy> = studies.iter().collect();

        if !self.term.is_empty() {
            let needle = self.term.to_lowercase();
            results.retain(|study| {
                study.title.to_lowercase().contains(&needle)
                    || study.treatment_protocol.to_lowercase().contains(&needle)
                    || study
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            });
        }

        if let Some(disease) = selected(&self.disease) {
            results.retain(|study| study.disease == disease);
        }

        if let Some(company) = selected(&self.company) {
            results.retain(|study| study.company == company);
        }

        tracing::debug!(
            total = studies.len(),
            matched = results.len(),
            "case study search"
        );
        results
    }
}

/// The dropdowns use an empty value for "All".
fn selected(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ranges() {
        assert_eq!(
            "20000-50000".parse::<RangeFilter>(),
            Ok(RangeFilter::new(20_000, 50_000))
        );
        assert_eq!("18 - 40".parse::<RangeFilter>(), Ok(RangeFilter::new(18, 40)));
        assert_eq!(
            "20,000-50,000".parse::<RangeFilter>(),
            Ok(RangeFilter::new(20_000, 50_000))
        );
    }

    #[test]
    fn rejects_malformed_ranges() {
        for text in ["", "40", "a-b", "50-10"] {
            assert_eq!(
                text.parse::<RangeFilter>(),
                Err(PearlError::InvalidRange(text.to_string()))
            );
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = RangeFilter::new(20, 40);
        assert!(range.contains(20));
        assert!(range.contains(40));
        assert!(!range.contains(41));
    }

    #[test]
    fn form_inputs_fall_back_to_slider_bounds() {
        assert_eq!(RangeFilter::from_inputs("", " ", AGE_SLIDER), None);
        assert_eq!(
            RangeFilter::from_inputs("30", "", AGE_SLIDER),
            Some(RangeFilter::new(30, 100))
        );
        assert_eq!(
            RangeFilter::from_inputs("x", "50000", PLATELET_SLIDER),
            Some(RangeFilter::new(0, 50_000))
        );
    }

    #[test]
    fn default_queries_are_inactive() {
        assert!(!PatientQuery::default().is_active());
        assert!(!CaseStudyQuery::default().is_active());
        let blank_dropdowns = CaseStudyQuery {
            disease: Some(String::new()),
            ..CaseStudyQuery::default()
        };
        assert!(!blank_dropdowns.is_active());
    }
}
