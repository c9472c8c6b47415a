//! Path table for the single-page application.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    PatientDetail { id: String },
    TreatmentPredictor,
    SearchPatients,
    SearchCaseStudies,
    Trends,
    NotFound,
}

impl Route {
    /// Navbar entries, in display order.
    pub const NAVIGATION: [(Route, &'static str); 5] = [
        (Route::Home, "Home"),
        (Route::SearchPatients, "Search Patients"),
        (Route::TreatmentPredictor, "Treatment Predictor"),
        (Route::SearchCaseStudies, "Case Studies"),
        (Route::Trends, "Trend Analysis"),
    ];

    /// Resolve a location path. Query strings, fragments and a trailing slash
    /// are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["patient", id] => Route::PatientDetail {
                id: (*id).to_string(),
            },
            ["treatment-predictor"] => Route::TreatmentPredictor,
            ["search-patients"] => Route::SearchPatients,
            ["search-cases"] => Route::SearchCaseStudies,
            ["trends"] => Route::Trends,
            _ => Route::NotFound,
        }
    }

    pub fn patient(id: impl Into<String>) -> Self {
        Route::PatientDetail { id: id.into() }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::PatientDetail { id } => format!("/patient/{id}"),
            Route::TreatmentPredictor => "/treatment-predictor".to_string(),
            Route::SearchPatients => "/search-patients".to_string(),
            Route::SearchCaseStudies => "/search-cases".to_string(),
            Route::Trends => "/trends".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_page() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/patient/PAT002"), Route::patient("PAT002"));
        assert_eq!(Route::parse("/treatment-predictor"), Route::TreatmentPredictor);
        assert_eq!(Route::parse("/search-patients"), Route::SearchPatients);
        assert_eq!(Route::parse("/search-cases"), Route::SearchCaseStudies);
        assert_eq!(Route::parse("/trends"), Route::Trends);
    }

    #[test]
    fn ignores_trailing_slash_query_and_fragment() {
        assert_eq!(Route::parse("/trends/"), Route::Trends);
        assert_eq!(Route::parse("/search-cases?term=itp"), Route::SearchCaseStudies);
        assert_eq!(Route::parse("/patient/PAT001#labs"), Route::patient("PAT001"));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/patient"), Route::NotFound);
        assert_eq!(Route::parse("/patient/PAT001/extra"), Route::NotFound);
        assert_eq!(Route::parse("/admin"), Route::NotFound);
    }

    #[test]
    fn path_is_inverse_of_parse() {
        for (route, _) in Route::NAVIGATION {
            assert_eq!(Route::parse(&route.path()), route);
        }
        let detail = Route::patient("PAT003");
        assert_eq!(Route::parse(&detail.to_string()), detail);
    }
}
