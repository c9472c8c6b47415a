use pearl_core::{
    format, LabResult, MedicalHistoryEntry, Patient, Symptom, Tone, Treatment,
};
use yew::prelude::*;

use crate::app::CatalogRef;
use crate::widgets::{avatar, chip, outlined_chip, Notice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    History,
    Treatment,
    Symptoms,
    Labs,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::History, Tab::Treatment, Tab::Symptoms, Tab::Labs];

    fn label(self) -> &'static str {
        match self {
            Tab::History => "Medical History",
            Tab::Treatment => "Current Treatment",
            Tab::Symptoms => "Symptoms",
            Tab::Labs => "Lab Results",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PatientDetailPageProps {
    pub catalog: CatalogRef,
    pub id: String,
}

#[function_component(PatientDetailPage)]
pub fn patient_detail_page(props: &PatientDetailPageProps) -> Html {
    let tab = use_state(|| Tab::History);

    let patient = match props.catalog.find_patient(&props.id) {
        Ok(patient) => patient,
        Err(_) => {
            return html! {
                <main class="pearl-page">
                    <Notice tone={Tone::Danger}>{"Patient not found"}</Notice>
                </main>
            };
        }
    };

    let tabs = Tab::ALL.into_iter().map(|candidate| {
        let tab = tab.clone();
        let is_active = *tab == candidate;
        let onclick = Callback::from(move |_: MouseEvent| tab.set(candidate));
        html! {
            <button
                type="button"
                role="tab"
                class={classes!("pearl-tab", is_active.then_some("is-active"))}
                aria-selected={is_active.to_string()}
                {onclick}
            >
                { candidate.label() }
            </button>
        }
    });

    let panel = match *tab {
        Tab::History => render_list(&patient.medical_history, render_history),
        Tab::Treatment => render_list(&patient.current_treatment, render_treatment),
        Tab::Symptoms => render_list(&patient.symptoms, render_symptom),
        Tab::Labs => render_list(&patient.lab_results, render_lab_result),
    };

    html! {
        <main class="pearl-page">
            { render_header(patient) }
            <section class="pearl-card">
                <div class="pearl-tabs" role="tablist">{ for tabs }</div>
                <div role="tabpanel">
                    <h3>{ tab.label() }</h3>
                    { panel }
                </div>
            </section>
        </main>
    }
}

fn render_header(patient: &Patient) -> Html {
    let severity = patient.platelet_severity();

    html! {
        <section class="pearl-card pearl-patient-header">
            { avatar(&patient.name, false) }
            <div>
                <h1>{ patient.name.clone() }</h1>
                <div class="pearl-chip-row">
                    { chip(format!("{} years old", patient.age), Tone::Neutral) }
                    { chip(patient.gender.label(), Tone::Neutral) }
                    { chip(patient.ethnicity.clone(), Tone::Neutral) }
                    { chip(patient.region.clone(), Tone::Neutral) }
                    { chip(patient.status.label(), Tone::Primary) }
                </div>
                <p class="pearl-muted">
                    { format!("Diagnosed: {}", format::date(patient.diagnosis_date)) }
                    {" | Current Platelet Count: "}
                    { chip(format::platelets(patient.platelet_count), severity.tone()) }
                    {" "}
                    { outlined_chip(severity.label(), severity.tone()) }
                </p>
            </div>
        </section>
    }
}

fn render_list<T>(items: &[T], render: fn(&T) -> Html) -> Html {
    if items.is_empty() {
        return html! { <p class="pearl-empty">{"Nothing recorded."}</p> };
    }
    html! {
        <ul class="pearl-list">{ for items.iter().map(render) }</ul>
    }
}

fn render_history(entry: &MedicalHistoryEntry) -> Html {
    html! {
        <li class="pearl-list-item">
            <div class="pearl-list-title">
                <span>{ entry.condition.clone() }</span>
                <span class="pearl-chip-row">
                    { chip(entry.severity.label(), Tone::for_history_severity(entry.severity)) }
                    { outlined_chip(format::date(entry.date), Tone::Neutral) }
                </span>
            </div>
            <p class="pearl-muted">{ entry.notes.clone() }</p>
            <p class="pearl-muted">{ format!("Physician: {}", entry.physician) }</p>
        </li>
    }
}

fn render_treatment(treatment: &Treatment) -> Html {
    let mut period = format!("Started: {}", format::date(treatment.start_date));
    if let Some(end) = treatment.end_date {
        period.push_str(&format!(" • Ended: {}", format::date(end)));
    }

    html! {
        <li class="pearl-list-item">
            <div class="pearl-list-title">
                <span>{ treatment.name.clone() }</span>
                { chip(treatment.response.label(), Tone::for_response(treatment.response)) }
            </div>
            <p class="pearl-muted">
                { format!("Dosage: {} • Frequency: {}", treatment.dosage, treatment.frequency) }
            </p>
            <p class="pearl-muted">{ period }</p>
            if !treatment.side_effects.is_empty() {
                <div class="pearl-chip-row">
                    <span class="pearl-muted">{"Side Effects:"}</span>
                    { for treatment.side_effects.iter().map(|effect| outlined_chip(effect.clone(), Tone::Warning)) }
                </div>
            }
        </li>
    }
}

fn render_symptom(symptom: &Symptom) -> Html {
    html! {
        <li class="pearl-list-item">
            <div class="pearl-list-title">
                <span>{ symptom.name.clone() }</span>
                <span class="pearl-chip-row">
                    { chip(format!("Severity: {}/10", symptom.severity), Tone::for_symptom_severity(symptom.severity)) }
                    { outlined_chip(symptom.frequency.label(), Tone::Neutral) }
                </span>
            </div>
            <p class="pearl-muted">
                { format!("Onset: {} • Duration: {}", format::date(symptom.onset), symptom.duration) }
            </p>
        </li>
    }
}

fn render_lab_result(result: &LabResult) -> Html {
    html! {
        <li class="pearl-list-item">
            <div class="pearl-list-title">
                <span>{ result.test_name.clone() }</span>
                <span class="pearl-chip-row">
                    { chip(result.status.label(), Tone::for_lab_status(result.status)) }
                    { outlined_chip(format::date(result.date), Tone::Neutral) }
                </span>
            </div>
            <p class="pearl-muted">
                {
                    format!(
                        "Value: {} {} • Reference Range: {}",
                        format::lab_value(result.value),
                        result.unit,
                        result.reference_range
                    )
                }
            </p>
        </li>
    }
}
