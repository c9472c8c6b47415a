use pearl_catalog::insights::{quick_stats, QuickStat};
use pearl_core::{format, Patient, PearlConfig, ResearchProject, Route, Tone};
use yew::prelude::*;

use crate::app::{use_navigator, CatalogRef, Navigator};
use crate::widgets::{avatar, chip, outlined_chip, progress};

/// Shown for every project until progress is tracked per project.
const PROJECT_PROGRESS: u8 = 75;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub catalog: CatalogRef,
    pub config: PearlConfig,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let navigator = use_navigator();
    let recent = props.catalog.recent_patients(&props.config);
    let research = props.catalog.active_research();
    let stats = quick_stats();

    html! {
        <main class="pearl-page">
            <section class="pearl-hero">
                <h1>{"Let's "}<span class="accent">{"analyze"}</span>{" ITP data"}</h1>
                <p>
                    {"Your comprehensive platform for ITP patient case analysis and research insights. \
                      Discover patterns, predict treatments, and advance healthcare outcomes."}
                </p>
                <button type="button" class="pearl-button is-primary"
                    onclick={navigator.to::<MouseEvent>(Route::SearchPatients)}>
                    {"Start Analyzing"}
                </button>
            </section>

            <section class="pearl-grid">
                { for stats.iter().map(render_stat) }
            </section>

            <div class="pearl-layout">
                <section class="pearl-card pearl-main">
                    <header class="pearl-card-header">
                        <h2>{"Recent Patients"}</h2>
                        <button type="button" class="pearl-button"
                            onclick={navigator.to::<MouseEvent>(Route::SearchPatients)}>
                            {"View All"}
                        </button>
                    </header>
                    <ul class="pearl-list">
                        { for recent.iter().map(|patient| render_recent_patient(patient, &navigator)) }
                    </ul>
                </section>

                <section class="pearl-card pearl-sidebar">
                    <header class="pearl-card-header">
                        <h2>{"Active Research Projects"}</h2>
                        <button type="button" class="pearl-button"
                            onclick={navigator.to::<MouseEvent>(Route::Trends)}>
                            {"View All"}
                        </button>
                    </header>
                    <ul class="pearl-list">
                        { for research.into_iter().map(render_project) }
                    </ul>
                </section>
            </div>
        </main>
    }
}

fn render_stat(stat: &QuickStat) -> Html {
    html! {
        <div class="pearl-card">
            <div class="pearl-card-header">
                <div>
                    <div class="pearl-stat-value">{ stat.value }</div>
                    <div class="pearl-stat-label">{ stat.label }</div>
                </div>
                { chip(stat.trend, stat.tone) }
            </div>
        </div>
    }
}

fn render_recent_patient(patient: &Patient, navigator: &Navigator) -> Html {
    let severity = patient.platelet_severity();

    html! {
        <li class="pearl-list-item is-clickable"
            onclick={navigator.to::<MouseEvent>(Route::patient(patient.id.clone()))}>
            <div class="pearl-list-title">
                <span>
                    { avatar(&patient.name, true) }
                    { " " }
                    { patient.name.clone() }
                </span>
            </div>
            <p class="pearl-muted">
                { format!("Age: {} • {} • {}", patient.age, patient.gender, patient.region) }
            </p>
            <div class="pearl-chip-row">
                { chip(format::platelets(patient.platelet_count), severity.tone()) }
                { outlined_chip(patient.status.label(), Tone::Primary) }
            </div>
        </li>
    }
}

fn render_project(project: &ResearchProject) -> Html {
    html! {
        <li class="pearl-list-item">
            <div class="pearl-list-title">{ project.title.clone() }</div>
            <p class="pearl-muted">{ project.description.clone() }</p>
            <p class="pearl-muted">{ format!("Last updated: {}", format::date(project.last_modified)) }</p>
            <span class="pearl-muted">{"Progress"}</span>
            { progress(PROJECT_PROGRESS, None) }
            <div class="pearl-chip-row">
                { outlined_chip(format!("{} patients", project.patient_ids.len()), Tone::Neutral) }
                { chip(project.status.label(), Tone::Primary) }
            </div>
        </li>
    }
}
