use pearl_catalog::search::{
    AGE_SLIDER, ETHNICITY_OPTIONS, PLATELET_SLIDER, PLATELET_SLIDER_STEP, REGION_OPTIONS,
    SYMPTOM_OPTIONS,
};
use pearl_catalog::{PatientFilters, PatientQuery, RangeFilter};
use pearl_core::{format, Gender, Patient, Route, Tone, TreatmentResponse};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

use crate::app::{use_navigator, CatalogRef, Navigator};
use crate::widgets::{avatar, chip, outlined_chip};

/// Raw form fields. Nothing is applied until "Search" is pressed.
#[derive(Clone, Default, PartialEq)]
struct FilterForm {
    name: String,
    symptoms: Vec<String>,
    region: Vec<String>,
    ethnicity: Vec<String>,
    gender: Vec<Gender>,
    treatment_response: Vec<TreatmentResponse>,
    age_min: String,
    age_max: String,
    platelet_min: String,
    platelet_max: String,
}

impl FilterForm {
    fn to_query(&self) -> PatientQuery {
        PatientQuery {
            name: self.name.clone(),
            filters: PatientFilters {
                symptoms: self.symptoms.clone(),
                region: self.region.clone(),
                ethnicity: self.ethnicity.clone(),
                gender: self.gender.clone(),
                age_range: RangeFilter::from_inputs(&self.age_min, &self.age_max, AGE_SLIDER),
                platelet_range: RangeFilter::from_inputs(
                    &self.platelet_min,
                    &self.platelet_max,
                    PLATELET_SLIDER,
                ),
                treatment_response: self.treatment_response.clone(),
            },
        }
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(index) = values.iter().position(|existing| *existing == value) {
        values.remove(index);
    } else {
        values.push(value);
    }
}

fn edit<E: 'static>(
    form: &UseStateHandle<FilterForm>,
    apply: impl Fn(&mut FilterForm, E) + 'static,
) -> Callback<E> {
    let form = form.clone();
    Callback::from(move |event: E| {
        let mut next = (*form).clone();
        apply(&mut next, event);
        form.set(next);
    })
}

fn input_value(event: InputEvent) -> String {
    let input: HtmlInputElement = event.target_unchecked_into();
    input.value()
}

#[derive(Properties, PartialEq)]
pub struct SearchPatientsPageProps {
    pub catalog: CatalogRef,
}

#[function_component(SearchPatientsPage)]
pub fn search_patients_page(props: &SearchPatientsPageProps) -> Html {
    let navigator = use_navigator();
    let form = use_state(FilterForm::default);
    let applied = use_state(PatientQuery::default);

    let on_search = {
        let form = form.clone();
        let applied = applied.clone();
        Callback::from(move |_: MouseEvent| applied.set(form.to_query()))
    };

    let on_clear = {
        let form = form.clone();
        let applied = applied.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(FilterForm::default());
            applied.set(PatientQuery::default());
        })
    };

    let results = props.catalog.search_patients(&applied);
    let fields = &*form;

    html! {
        <main class="pearl-page">
            <section class="pearl-hero">
                <h1>{"Let's "}<span class="accent">{"search"}</span>{" patient data"}</h1>
                <p>{"Find and analyze patient cases based on symptoms, demographics, and clinical parameters"}</p>
            </section>

            <div class="pearl-layout">
                <section class="pearl-card pearl-sidebar">
                    <h2>{"Search & Filters"}</h2>
                    <div class="pearl-field">
                        <label for="patient-name">{"Search by patient name"}</label>
                        <input
                            id="patient-name"
                            type="search"
                            value={fields.name.clone()}
                            oninput={edit(&form, |form, event: InputEvent| form.name = input_value(event))}
                        />
                    </div>

                    <details class="pearl-details">
                        <summary>{"Advanced Filters"}</summary>
                        {
                            checkbox_group(
                                "Symptoms",
                                SYMPTOM_OPTIONS.iter().map(|symptom| (symptom.to_string(), *symptom)),
                                &fields.symptoms,
                                edit(&form, |form, symptom: String| toggle(&mut form.symptoms, symptom)),
                            )
                        }
                        {
                            checkbox_group(
                                "Region",
                                REGION_OPTIONS.iter().map(|region| (region.to_string(), *region)),
                                &fields.region,
                                edit(&form, |form, region: String| toggle(&mut form.region, region)),
                            )
                        }
                        {
                            checkbox_group(
                                "Ethnicity",
                                ETHNICITY_OPTIONS.iter().map(|ethnicity| (ethnicity.to_string(), *ethnicity)),
                                &fields.ethnicity,
                                edit(&form, |form, ethnicity: String| toggle(&mut form.ethnicity, ethnicity)),
                            )
                        }
                        {
                            checkbox_group(
                                "Gender",
                                Gender::ALL.into_iter().map(|gender| (gender, gender.label())),
                                &fields.gender,
                                edit(&form, |form, gender: Gender| toggle(&mut form.gender, gender)),
                            )
                        }
                        {
                            checkbox_group(
                                "Treatment Response",
                                TreatmentResponse::ALL.into_iter().map(|response| (response, response.label())),
                                &fields.treatment_response,
                                edit(&form, |form, response: TreatmentResponse| {
                                    toggle(&mut form.treatment_response, response)
                                }),
                            )
                        }

                        <div class="pearl-field">
                            <label>{"Age Range"}</label>
                            <div class="pearl-field-pair">
                                <input
                                    type="number"
                                    min={AGE_SLIDER.min.to_string()}
                                    max={AGE_SLIDER.max.to_string()}
                                    placeholder={AGE_SLIDER.min.to_string()}
                                    aria-label="Minimum age"
                                    value={fields.age_min.clone()}
                                    oninput={edit(&form, |form, event: InputEvent| form.age_min = input_value(event))}
                                />
                                <input
                                    type="number"
                                    min={AGE_SLIDER.min.to_string()}
                                    max={AGE_SLIDER.max.to_string()}
                                    placeholder={AGE_SLIDER.max.to_string()}
                                    aria-label="Maximum age"
                                    value={fields.age_max.clone()}
                                    oninput={edit(&form, |form, event: InputEvent| form.age_max = input_value(event))}
                                />
                            </div>
                        </div>

                        <div class="pearl-field">
                            <label>{"Platelet Count Range (/μL)"}</label>
                            <div class="pearl-field-pair">
                                <input
                                    type="number"
                                    min={PLATELET_SLIDER.min.to_string()}
                                    max={PLATELET_SLIDER.max.to_string()}
                                    step={PLATELET_SLIDER_STEP.to_string()}
                                    placeholder={PLATELET_SLIDER.min.to_string()}
                                    aria-label="Minimum platelet count"
                                    value={fields.platelet_min.clone()}
                                    oninput={edit(&form, |form, event: InputEvent| form.platelet_min = input_value(event))}
                                />
                                <input
                                    type="number"
                                    min={PLATELET_SLIDER.min.to_string()}
                                    max={PLATELET_SLIDER.max.to_string()}
                                    step={PLATELET_SLIDER_STEP.to_string()}
                                    placeholder={PLATELET_SLIDER.max.to_string()}
                                    aria-label="Maximum platelet count"
                                    value={fields.platelet_max.clone()}
                                    oninput={edit(&form, |form, event: InputEvent| form.platelet_max = input_value(event))}
                                />
                            </div>
                        </div>
                    </details>

                    <div class="pearl-button-row">
                        <button type="button" class="pearl-button is-primary" onclick={on_search}>{"Search"}</button>
                        <button type="button" class="pearl-button" onclick={on_clear.clone()}>{"Clear"}</button>
                    </div>
                </section>

                <section class="pearl-card pearl-main">
                    <header class="pearl-card-header">
                        <h2>{"Search Results"}</h2>
                        { chip(format!("{} patients found", results.len()), Tone::Primary) }
                    </header>
                    if results.is_empty() {
                        <div class="pearl-empty">
                            <p>{"No patients found matching your search criteria."}</p>
                            <button type="button" class="pearl-button" onclick={on_clear}>
                                {"Clear filters to see all patients"}
                            </button>
                        </div>
                    } else {
                        <ul class="pearl-list">
                            { for results.iter().map(|patient| render_patient(patient, &navigator)) }
                        </ul>
                    }
                </section>
            </div>
        </main>
    }
}

fn checkbox_group<T: Clone + PartialEq + 'static>(
    legend: &str,
    options: impl Iterator<Item = (T, &'static str)>,
    selected: &[T],
    on_toggle: Callback<T>,
) -> Html {
    html! {
        <fieldset class="pearl-options">
            <legend>{ legend.to_string() }</legend>
            {
                for options.map(|(value, label)| {
                    let checked = selected.contains(&value);
                    let onchange = on_toggle.reform(move |_: Event| value.clone());
                    html! {
                        <label class="pearl-option">
                            <input type="checkbox" {checked} {onchange} />
                            { label }
                        </label>
                    }
                })
            }
        </fieldset>
    }
}

fn render_patient(patient: &Patient, navigator: &Navigator) -> Html {
    let severity = patient.platelet_severity();
    let hidden_symptoms = patient.symptoms.len().saturating_sub(2);

    html! {
        <li class="pearl-list-item is-clickable"
            onclick={navigator.to::<MouseEvent>(Route::patient(patient.id.clone()))}>
            <div class="pearl-list-title">
                <span>
                    { avatar(&patient.name, true) }
                    { " " }
                    { patient.name.clone() }
                </span>
                { outlined_chip(patient.status.label(), Tone::Primary) }
            </div>
            <p class="pearl-muted">
                {
                    format!(
                        "{} years • {} • {} • {}",
                        patient.age, patient.gender, patient.ethnicity, patient.region
                    )
                }
            </p>
            <p class="pearl-muted">{ format!("Diagnosed: {}", format::date(patient.diagnosis_date)) }</p>
            <div class="pearl-chip-row">
                { chip(format::platelets(patient.platelet_count), severity.tone()) }
                { outlined_chip(severity.label(), severity.tone()) }
                { for patient.symptoms.iter().take(2).map(|symptom| outlined_chip(symptom.name.clone(), Tone::Neutral)) }
                if hidden_symptoms > 0 {
                    { outlined_chip(format!("+{hidden_symptoms} more"), Tone::Info) }
                }
            </div>
        </li>
    }
}
