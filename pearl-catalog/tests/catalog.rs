use pearl_catalog::insights::{
    chart_series, pie_shares, quick_stats, response_rate_series, severity_breakdown,
    treatment_distribution, trend_report, ChartKind,
};
use pearl_catalog::Catalog;
use pearl_core::{PearlConfig, PearlError, PlateletSeverity, ProjectStatus};

fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin dataset parses")
}

fn ids<T>(records: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    records.iter().map(|record| id(record).to_string()).collect()
}

#[test]
fn builtin_dataset_loads_every_section() {
    let catalog = catalog();

    assert_eq!(
        ids(catalog.patients(), |p| p.id.as_str()),
        ["PAT001", "PAT002", "PAT003", "PAT004", "PAT005"]
    );
    assert_eq!(
        ids(catalog.case_studies(), |c| c.id.as_str()),
        ["CS001", "CS002", "CS003", "CS004"]
    );
    assert_eq!(catalog.research_projects().len(), 3);
    assert_eq!(ids(catalog.trend_analyses(), |t| t.id.as_str()), ["TA001", "TA002"]);
}

#[test]
fn shared_catalog_matches_builtin() {
    let shared = Catalog::shared().expect("shared catalog");
    assert_eq!(shared, &catalog());
}

#[test]
fn sample_patient_is_fully_populated() {
    let catalog = catalog();
    let sarah = catalog.find_patient("PAT001").expect("PAT001 exists");

    assert_eq!(sarah.name, "Sarah Johnson");
    assert_eq!(sarah.platelet_count, 25_000);
    assert_eq!(sarah.platelet_severity(), PlateletSeverity::Severe);
    assert_eq!(sarah.medical_history.len(), 2);
    assert_eq!(sarah.current_treatment[0].name, "Prednisone");
    assert_eq!(sarah.symptoms.len(), 2);
    assert_eq!(sarah.lab_results[1].value, 10.2);
}

#[test]
fn missing_patient_is_an_error_not_a_panic() {
    let catalog = catalog();
    assert_eq!(
        catalog.find_patient("PAT999"),
        Err(PearlError::PatientNotFound("PAT999".to_string()))
    );
}

#[test]
fn malformed_section_reports_its_name() {
    let err = Catalog::from_json_parts("[]", "{", "[]", "[]").expect_err("bad case studies");
    match err {
        PearlError::Parse(message) => assert!(message.starts_with("case studies:")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_sections_are_allowed() {
    let catalog = Catalog::from_json_parts("[]", "[]", "[]", "[]").expect("empty catalog");
    assert!(catalog.patients().is_empty());
    assert!(catalog.recent_patients(&PearlConfig::default()).is_empty());
}

#[test]
fn recent_patients_follow_config() {
    let catalog = catalog();

    let recent = catalog.recent_patients(&PearlConfig::default());
    assert_eq!(ids(recent, |p| p.id.as_str()), ["PAT001", "PAT002", "PAT003"]);

    let config = PearlConfig {
        recent_patient_count: 50,
        ..PearlConfig::default()
    };
    assert_eq!(catalog.recent_patients(&config).len(), catalog.patients().len());
}

#[test]
fn active_research_excludes_paused_projects() {
    let catalog = catalog();
    let active = catalog.active_research();

    assert_eq!(active.len(), 2);
    assert!(active
        .iter()
        .all(|project| project.status == ProjectStatus::InProgress));
}

#[test]
fn quick_stats_cover_dashboard_tiles() {
    let labels: Vec<&str> = quick_stats().iter().map(|stat| stat.label).collect();
    assert_eq!(
        labels,
        [
            "Active Patients",
            "Ongoing Research",
            "Case Studies",
            "Treatment Responses"
        ]
    );
}

#[test]
fn chart_series_depends_on_kind() {
    let catalog = catalog();
    let analysis = catalog.find_trend("TA002").expect("TA002 exists");

    assert_eq!(chart_series(ChartKind::Bar, analysis), analysis.chart_data);
    assert_eq!(chart_series(ChartKind::Line, analysis), response_rate_series());
    assert_eq!(chart_series(ChartKind::Pie, analysis).len(), 5);
}

#[test]
fn chart_kind_parses_its_own_names() {
    for kind in ChartKind::ALL {
        assert_eq!(kind.as_str().parse::<ChartKind>(), Ok(kind));
    }
    assert!("radar".parse::<ChartKind>().is_err());
}

#[test]
fn pie_shares_sum_to_one() {
    let shares = pie_shares(&treatment_distribution());
    let total: f64 = shares.iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert!((shares[0] - 0.35).abs() < 1e-9);
    assert!(pie_shares(&[]).is_empty());
}

#[test]
fn severity_breakdown_percentages_add_up() {
    let total: u32 = severity_breakdown()
        .iter()
        .map(|share| u32::from(share.percentage))
        .sum();
    assert_eq!(total, 100);
}

#[test]
fn report_lists_insights_and_points() {
    let catalog = catalog();
    let analysis = catalog.find_trend("TA001").expect("TA001 exists");
    let report = trend_report(analysis);

    assert!(report.starts_with("Treatment Response Patterns by Age Group (TA001)"));
    assert!(report.contains("Patients: 150"));
    assert!(report.contains("Generated: Jun 20, 2024"));
    assert!(report.contains("• Response rates decrease with age, particularly after 60"));
    assert!(report.contains("60+"));
    assert!(report.contains("[response_rate]"));
}
