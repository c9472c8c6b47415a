use pearl_catalog::search::{CaseStudyQuery, PatientFilters, PatientQuery, RangeFilter};
use pearl_catalog::Catalog;
use pearl_core::{CaseStudy, Gender, Patient, TreatmentResponse};

fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin dataset parses")
}

fn patient_ids(patients: &[&Patient]) -> Vec<String> {
    patients.iter().map(|patient| patient.id.clone()).collect()
}

fn study_ids(studies: &[&CaseStudy]) -> Vec<String> {
    studies.iter().map(|study| study.id.clone()).collect()
}

fn with_filters(filters: PatientFilters) -> PatientQuery {
    PatientQuery {
        name: String::new(),
        filters,
    }
}

#[test]
fn empty_query_returns_every_patient_in_order() {
    let catalog = catalog();
    let all: Vec<&Patient> = catalog.patients().iter().collect();

    assert_eq!(catalog.search_patients(&PatientQuery::default()), all);
}

#[test]
fn name_match_ignores_case() {
    let catalog = catalog();

    let lower = catalog.search_patients(&PatientQuery::by_name("sarah"));
    let upper = catalog.search_patients(&PatientQuery::by_name("SARAH"));

    assert_eq!(patient_ids(&lower), ["PAT001"]);
    assert_eq!(lower, upper);
}

#[test]
fn name_matches_any_substring() {
    let catalog = catalog();
    let found = catalog.search_patients(&PatientQuery::by_name("ha"));

    assert_eq!(patient_ids(&found), ["PAT002", "PAT005"]);
}

#[test]
fn symptom_filter_matches_any_listed_symptom() {
    let catalog = catalog();
    let query = with_filters(PatientFilters {
        symptoms: vec!["Fatigue".to_string(), "Bleeding gums".to_string()],
        ..PatientFilters::default()
    });

    assert_eq!(
        patient_ids(&catalog.search_patients(&query)),
        ["PAT002", "PAT003", "PAT004"]
    );
}

#[test]
fn symptom_names_are_matched_exactly() {
    let catalog = catalog();
    let query = with_filters(PatientFilters {
        symptoms: vec!["fatigue".to_string()],
        ..PatientFilters::default()
    });

    assert!(catalog.search_patients(&query).is_empty());
}

#[test]
fn demographic_sets_are_membership_tests() {
    let catalog = catalog();

    let europe = with_filters(PatientFilters {
        region: vec!["Europe".to_string()],
        ..PatientFilters::default()
    });
    assert_eq!(patient_ids(&catalog.search_patients(&europe)), ["PAT004", "PAT005"]);

    let ethnicity = with_filters(PatientFilters {
        ethnicity: vec!["Asian".to_string(), "Hispanic".to_string()],
        ..PatientFilters::default()
    });
    assert_eq!(
        patient_ids(&catalog.search_patients(&ethnicity)),
        ["PAT002", "PAT003"]
    );

    let male = with_filters(PatientFilters {
        gender: vec![Gender::Male],
        ..PatientFilters::default()
    });
    assert_eq!(patient_ids(&catalog.search_patients(&male)), ["PAT002", "PAT004"]);
}

#[test]
fn age_range_is_inclusive() {
    let catalog = catalog();
    let query = with_filters(PatientFilters {
        age_range: Some(RangeFilter::new(28, 34)),
        ..PatientFilters::default()
    });

    assert_eq!(
        patient_ids(&catalog.search_patients(&query)),
        ["PAT001", "PAT003"]
    );
}

#[test]
fn platelet_range_is_inclusive() {
    let catalog = catalog();
    let query = with_filters(PatientFilters {
        platelet_range: Some(RangeFilter::new(25_000, 85_000)),
        ..PatientFilters::default()
    });

    assert_eq!(
        patient_ids(&catalog.search_patients(&query)),
        ["PAT001", "PAT002", "PAT003"]
    );
}

#[test]
fn treatment_response_checks_current_treatments() {
    let catalog = catalog();
    let query = with_filters(PatientFilters {
        treatment_response: vec![TreatmentResponse::Excellent],
        ..PatientFilters::default()
    });

    assert_eq!(
        patient_ids(&catalog.search_patients(&query)),
        ["PAT002", "PAT005"]
    );
}

#[test]
fn predicates_are_and_combined() {
    let catalog = catalog();
    let query = PatientQuery {
        name: "e".to_string(),
        filters: PatientFilters {
            gender: vec![Gender::Female],
            region: vec!["Europe".to_string(), "South America".to_string()],
            platelet_range: Some(RangeFilter::new(0, 100_000)),
            ..PatientFilters::default()
        },
    };

    assert_eq!(patient_ids(&catalog.search_patients(&query)), ["PAT003"]);
}

#[test]
fn results_are_always_a_subset_of_the_roster() {
    let catalog = catalog();
    let names = ["", "a", "SARAH", "zz"];
    let regions: [&[&str]; 3] = [&[], &["Europe"], &["North America", "Asia Pacific"]];
    let genders: [&[Gender]; 3] = [&[], &[Gender::Female], &[Gender::Male, Gender::Other]];
    let ages = [None, Some(RangeFilter::new(0, 40)), Some(RangeFilter::new(41, 100))];

    for name in names {
        for region in regions {
            for gender in genders {
                for age in ages {
                    let query = PatientQuery {
                        name: name.to_string(),
                        filters: PatientFilters {
                            region: region.iter().map(|r| r.to_string()).collect(),
                            gender: gender.to_vec(),
                            age_range: age,
                            ..PatientFilters::default()
                        },
                    };
                    let found = catalog.search_patients(&query);

                    assert!(found.len() <= catalog.patients().len());
                    assert!(found.iter().all(|patient| {
                        catalog
                            .patients()
                            .iter()
                            .any(|p| std::ptr::eq(p, *patient))
                    }));
                    if !query.is_active() {
                        assert_eq!(found.len(), catalog.patients().len());
                    }
                }
            }
        }
    }
}

#[test]
fn query_deserializes_from_partial_json() {
    let query: PatientQuery = serde_json::from_value(serde_json::json!({
        "name": "chang",
        "filters": { "plateletRange": { "min": 50000, "max": 100000 } }
    }))
    .expect("partial query");

    assert_eq!(query.filters.platelet_range, Some(RangeFilter::new(50_000, 100_000)));
    assert!(query.filters.symptoms.is_empty());
    assert_eq!(patient_ids(&catalog().search_patients(&query)), ["PAT002"]);
}

#[test]
fn empty_case_query_returns_every_study() {
    let catalog = catalog();
    assert_eq!(
        catalog.search_case_studies(&CaseStudyQuery::default()).len(),
        catalog.case_studies().len()
    );
}

#[test]
fn company_filter_is_exact_and_case_sensitive() {
    let catalog = catalog();

    let novartis = CaseStudyQuery {
        company: Some("Novartis".to_string()),
        ..CaseStudyQuery::default()
    };
    let found = catalog.search_case_studies(&novartis);
    assert_eq!(study_ids(&found), ["CS001"]);
    assert!(found.iter().all(|study| study.company == "Novartis"));

    let lowercase = CaseStudyQuery {
        company: Some("novartis".to_string()),
        ..CaseStudyQuery::default()
    };
    assert!(catalog.search_case_studies(&lowercase).is_empty());
}

#[test]
fn disease_filter_is_exact() {
    let catalog = catalog();
    let query = CaseStudyQuery {
        disease: Some("ITP".to_string()),
        ..CaseStudyQuery::default()
    };

    assert_eq!(
        study_ids(&catalog.search_case_studies(&query)),
        ["CS001", "CS002", "CS003"]
    );
}

#[test]
fn term_searches_title_protocol_and_tags() {
    let catalog = catalog();
    let search = |term: &str| {
        study_ids(&catalog.search_case_studies(&CaseStudyQuery {
            term: term.to_string(),
            ..CaseStudyQuery::default()
        }))
    };

    assert_eq!(search("RITUXIMAB"), ["CS002"]);
    assert_eq!(search("twice daily"), ["CS003"]);
    assert_eq!(search("novel mech"), ["CS003"]);
    assert_eq!(search("refractory"), ["CS003"]);
    assert!(search("novartis").is_empty());
}

#[test]
fn case_filters_are_and_combined() {
    let catalog = catalog();
    let query = CaseStudyQuery {
        term: "itp".to_string(),
        disease: Some("ITP".to_string()),
        company: Some("Roche".to_string()),
    };

    assert_eq!(study_ids(&catalog.search_case_studies(&query)), ["CS002"]);
}

#[test]
fn blank_dropdowns_mean_all() {
    let catalog = catalog();
    let query = CaseStudyQuery {
        term: String::new(),
        disease: Some(String::new()),
        company: Some(String::new()),
    };

    assert_eq!(
        catalog.search_case_studies(&query).len(),
        catalog.case_studies().len()
    );
}
