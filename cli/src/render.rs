//! Plain-text output of the CLI.

use std::fmt::Write as _;

use pearl_core::{format, CaseStudy, Patient, TreatmentPrediction, TrendAnalysis};

pub fn patient_table(patients: &[&Patient]) -> String {
    let mut out = String::new();
    for patient in patients {
        let _ = writeln!(
            out,
            "{:<8} {:<20} {:>3}  {:<7} {:<14} {:>12}  {}",
            patient.id,
            patient.name,
            patient.age,
            patient.gender.label(),
            patient.region,
            format::platelets(patient.platelet_count),
            patient.platelet_severity().label()
        );
    }
    let _ = writeln!(out, "{} patients found", patients.len());
    out
}

pub fn case_study_list(studies: &[&CaseStudy]) -> String {
    let mut out = String::new();
    for study in studies {
        let _ = writeln!(out, "{}  {}", study.id, study.title);
        let _ = writeln!(
            out,
            "        {} | {} | {}",
            study.disease,
            study.company,
            format::date(study.publication_date)
        );
        if !study.tags.is_empty() {
            let _ = writeln!(out, "        tags: {}", study.tags.join(", "));
        }
    }
    let _ = writeln!(out, "{} studies found", studies.len());
    out
}

pub fn patient_detail(patient: &Patient) -> String {
    let mut out = String::new();
    let severity = patient.platelet_severity();

    let _ = writeln!(out, "{} ({})", patient.name, patient.id);
    let _ = writeln!(
        out,
        "{} years old | {} | {} | {} | {}",
        patient.age,
        patient.gender.label(),
        patient.ethnicity,
        patient.region,
        patient.status.label()
    );
    let _ = writeln!(
        out,
        "Diagnosed: {} | Platelets: {} ({})",
        format::date(patient.diagnosis_date),
        format::platelets(patient.platelet_count),
        severity.label()
    );

    section(&mut out, "Medical History", patient.medical_history.len());
    for entry in &patient.medical_history {
        let _ = writeln!(
            out,
            "  {}  {} [{}] - {}",
            format::date(entry.date),
            entry.condition,
            entry.severity.label(),
            entry.physician
        );
        let _ = writeln!(out, "      {}", entry.notes);
    }

    section(&mut out, "Current Treatment", patient.current_treatment.len());
    for treatment in &patient.current_treatment {
        let ended = treatment
            .end_date
            .map(|end| format!(", ended {}", format::date(end)))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  {} {} {} [{}]",
            treatment.name,
            treatment.dosage,
            treatment.frequency,
            treatment.response.label()
        );
        let _ = writeln!(
            out,
            "      started {}{ended}",
            format::date(treatment.start_date)
        );
        if !treatment.side_effects.is_empty() {
            let _ = writeln!(out, "      side effects: {}", treatment.side_effects.join(", "));
        }
    }

    section(&mut out, "Symptoms", patient.symptoms.len());
    for symptom in &patient.symptoms {
        let _ = writeln!(
            out,
            "  {} {}/10, {} since {} ({})",
            symptom.name,
            symptom.severity,
            symptom.frequency.label(),
            format::date(symptom.onset),
            symptom.duration
        );
    }

    section(&mut out, "Lab Results", patient.lab_results.len());
    for result in &patient.lab_results {
        let _ = writeln!(
            out,
            "  {} {} {} (ref {}) [{}] {}",
            result.test_name,
            format::lab_value(result.value),
            result.unit,
            result.reference_range,
            result.status.label(),
            format::date(result.date)
        );
    }

    out
}

pub fn prediction(prediction: &TreatmentPrediction) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Treatment recommendations for {} ({}% confidence)",
        prediction.patient_id, prediction.confidence_score
    );

    for (rank, treatment) in prediction.recommended_treatments.iter().enumerate() {
        let _ = writeln!(
            out,
            "\n{}. {} - {}% success, response in {}",
            rank + 1,
            treatment.treatment,
            treatment.success_probability,
            treatment.time_to_response
        );
        let _ = writeln!(out, "   {}", treatment.reasoning);
        let _ = writeln!(
            out,
            "   side effects: {}",
            treatment.potential_side_effects.join(", ")
        );
    }

    let _ = writeln!(out, "\nSimilar cases:");
    for case in &prediction.similar_cases {
        let _ = writeln!(
            out,
            "  {} ({}% similar): {} - {}",
            case.patient_id, case.similarity, case.treatment_used, case.outcome
        );
    }

    let _ = writeln!(out, "\nRisk factors:");
    for factor in &prediction.risk_factors {
        let _ = writeln!(out, "  • {factor}");
    }
    out
}

pub fn trend_list(analyses: &[TrendAnalysis]) -> String {
    let mut out = String::new();
    for analysis in analyses {
        let _ = writeln!(
            out,
            "{}  {} ({}, {} patients)",
            analysis.id, analysis.title, analysis.timeframe, analysis.patient_count
        );
    }
    out
}

fn section(out: &mut String, title: &str, count: usize) {
    let _ = writeln!(out, "\n{title} ({count})");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pearl_catalog::{predict_treatment, Catalog, PatientQuery};

    #[test]
    fn table_ends_with_count() {
        let catalog = Catalog::builtin().unwrap();
        let patients = catalog.search_patients(&PatientQuery::by_name("sarah"));
        let table = patient_table(&patients);

        assert!(table.contains("Sarah Johnson"));
        assert!(table.contains("25,000/μL"));
        assert!(table.ends_with("1 patients found\n"));
    }

    #[test]
    fn detail_lists_every_section() {
        let catalog = Catalog::builtin().unwrap();
        let text = patient_detail(catalog.find_patient("PAT001").unwrap());

        for heading in ["Medical History (2)", "Current Treatment", "Symptoms (2)", "Lab Results"] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("Platelets: 25,000/μL (Severe)"));
    }

    #[test]
    fn prediction_is_ranked() {
        let text = prediction(&predict_treatment("PAT005"));
        assert!(text.starts_with("Treatment recommendations for PAT005 (85% confidence)"));
        let first = text.find("1. Eltrombopag").unwrap();
        let third = text.find("3. Prednisone (continued)").unwrap();
        assert!(first < third);
    }
}
