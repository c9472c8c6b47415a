use pearl_catalog::search::{COMPANY_OPTIONS, DISEASE_OPTIONS};
use pearl_catalog::CaseStudyQuery;
use pearl_core::{format, CaseStudy, Tone};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew::TargetCast;

use crate::app::CatalogRef;
use crate::widgets::{chip, outlined_chip};

#[derive(Properties, PartialEq)]
pub struct SearchCasesPageProps {
    pub catalog: CatalogRef,
}

#[function_component(SearchCasesPage)]
pub fn search_cases_page(props: &SearchCasesPageProps) -> Html {
    let form = use_state(CaseStudyQuery::default);
    let applied = use_state(CaseStudyQuery::default);

    let on_term = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.term = input.value();
            form.set(next);
        })
    };

    let on_disease = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.disease = Some(select.value());
            form.set(next);
        })
    };

    let on_company = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.company = Some(select.value());
            form.set(next);
        })
    };

    let on_search = {
        let form = form.clone();
        let applied = applied.clone();
        Callback::from(move |_: MouseEvent| applied.set((*form).clone()))
    };

    let on_clear = {
        let form = form.clone();
        let applied = applied.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(CaseStudyQuery::default());
            applied.set(CaseStudyQuery::default());
        })
    };

    let results = props.catalog.search_case_studies(&applied);
    let disease = form.disease.clone().unwrap_or_default();
    let company = form.company.clone().unwrap_or_default();

    html! {
        <main class="pearl-page">
            <section class="pearl-hero">
                <h1>{"Case Studies Database"}</h1>
                <p>{"Search and analyze published case studies, clinical trials, and research data"}</p>
            </section>

            <div class="pearl-layout">
                <section class="pearl-card pearl-sidebar">
                    <h2>{"Search & Filters"}</h2>
                    <div class="pearl-field">
                        <label for="case-term">{"Search case studies"}</label>
                        <input
                            id="case-term"
                            type="search"
                            placeholder="Search by title, treatment, or keywords..."
                            value={form.term.clone()}
                            oninput={on_term}
                        />
                    </div>

                    <details class="pearl-details">
                        <summary>{"Filters"}</summary>
                        { dropdown("case-disease", "Disease", "All Diseases", &DISEASE_OPTIONS, &disease, on_disease) }
                        { dropdown("case-company", "Company", "All Companies", &COMPANY_OPTIONS, &company, on_company) }
                    </details>

                    <div class="pearl-button-row">
                        <button type="button" class="pearl-button is-primary" onclick={on_search}>{"Search"}</button>
                        <button type="button" class="pearl-button" onclick={on_clear.clone()}>{"Clear"}</button>
                    </div>
                </section>

                <section class="pearl-card pearl-main">
                    <header class="pearl-card-header">
                        <h2>{"Case Studies"}</h2>
                        { chip(format!("{} studies found", results.len()), Tone::Primary) }
                    </header>
                    if results.is_empty() {
                        <div class="pearl-empty">
                            <p>{"No case studies found matching your search criteria."}</p>
                            <button type="button" class="pearl-button" onclick={on_clear}>
                                {"Clear filters to see all case studies"}
                            </button>
                        </div>
                    } else {
                        <ul class="pearl-list">
                            { for results.iter().map(|study| render_study(study)) }
                        </ul>
                    }
                </section>
            </div>
        </main>
    }
}

fn dropdown(
    id: &'static str,
    label: &'static str,
    all_label: &'static str,
    options: &[&'static str],
    current: &str,
    onchange: Callback<Event>,
) -> Html {
    html! {
        <div class="pearl-field">
            <label for={id}>{ label }</label>
            <select {id} {onchange}>
                <option value="" selected={current.is_empty()}>{ all_label }</option>
                {
                    for options.iter().map(|option| html! {
                        <option value={*option} selected={current == *option}>{ *option }</option>
                    })
                }
            </select>
        </div>
    }
}

fn render_study(study: &CaseStudy) -> Html {
    let demographics = &study.patient_demographics;

    html! {
        <li class="pearl-list-item">
            <h3>{ study.title.clone() }</h3>
            <div class="pearl-chip-row">
                { chip(study.disease.clone(), Tone::Primary) }
                { outlined_chip(study.company.clone(), Tone::Neutral) }
                { outlined_chip(format::date(study.publication_date), Tone::Neutral) }
            </div>

            <div class="pearl-card">
                <h3>{"Patient Demographics"}</h3>
                <div class="pearl-chip-row">
                    { chip(format!("Age: {}", demographics.age_range), Tone::Neutral) }
                    { chip(demographics.gender.clone(), Tone::Neutral) }
                    { chip(demographics.ethnicity.clone(), Tone::Neutral) }
                    { chip(demographics.region.clone(), Tone::Neutral) }
                </div>
                if !demographics.comorbidities.is_empty() {
                    <span class="pearl-muted">{"Comorbidities:"}</span>
                    <div class="pearl-chip-row">
                        { for demographics.comorbidities.iter().map(|item| outlined_chip(item.clone(), Tone::Warning)) }
                    </div>
                }
            </div>

            <h4>{"Treatment Protocol"}</h4>
            <p class="pearl-muted">{ study.treatment_protocol.clone() }</p>
            <h4>{"Outcome"}</h4>
            <p class="pearl-muted">{ study.outcome.clone() }</p>
            <h4>{"Study Duration"}</h4>
            <p class="pearl-muted">{ study.duration.clone() }</p>
            <h4>{"Keywords"}</h4>
            <div class="pearl-chip-row">
                { for study.tags.iter().map(|tag| outlined_chip(tag.clone(), Tone::Info)) }
            </div>
            if let Some(doi) = &study.doi {
                <p class="pearl-muted">{ format!("DOI: {doi}") }</p>
            }
        </li>
    }
}
