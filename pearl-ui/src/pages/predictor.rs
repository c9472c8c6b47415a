use std::rc::Rc;

use pearl_catalog::PredictionPhase;
use pearl_core::{
    format, PearlConfig, RecommendedTreatment, SimilarCase, Tone, TreatmentPrediction,
};
use wasm_bindgen::JsValue;
use web_sys::{console, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::platform::time::sleep;
use yew::prelude::*;
use yew::TargetCast;

use crate::app::CatalogRef;
use crate::widgets::{avatar, busy_progress, chip, outlined_chip, Notice};

#[derive(Default, PartialEq)]
struct PredictorState {
    phase: PredictionPhase,
}

enum PredictorAction {
    Start(String),
    Finish,
}

impl Reducible for PredictorState {
    type Action = PredictorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let phase = match action {
            PredictorAction::Start(patient_id) => match self.phase.clone().start(&patient_id) {
                Ok(phase) => phase,
                Err(err) => {
                    console::warn_1(&JsValue::from_str(&err.to_string()));
                    return self;
                }
            },
            PredictorAction::Finish => self.phase.clone().finish(),
        };
        Rc::new(Self { phase })
    }
}

#[derive(Properties, PartialEq)]
pub struct PredictorPageProps {
    pub catalog: CatalogRef,
    pub config: PearlConfig,
}

#[function_component(PredictorPage)]
pub fn predictor_page(props: &PredictorPageProps) -> Html {
    let selected = use_state(String::new);
    let state = use_reducer(PredictorState::default);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            selected.set(select.value());
        })
    };

    let on_analyze = {
        let state = state.clone();
        let patient_id = (*selected).clone();
        let delay = props.config.analysis_delay();
        Callback::from(move |_: MouseEvent| {
            if !state.phase.can_start(&patient_id) {
                return;
            }
            state.dispatch(PredictorAction::Start(patient_id.clone()));
            let state = state.clone();
            spawn_local(async move {
                sleep(delay).await;
                state.dispatch(PredictorAction::Finish);
            });
        })
    };

    let analyzing = state.phase.is_analyzing();
    let summary = if selected.is_empty() {
        None
    } else {
        props.catalog.find_patient(&selected).ok()
    };

    html! {
        <main class="pearl-page">
            <section class="pearl-hero">
                <h1>{"Let's "}<span class="accent">{"predict"}</span>{" treatment outcomes"}</h1>
                <p>{"AI-powered treatment recommendations based on similar patient cases and clinical outcomes"}</p>
            </section>

            <div class="pearl-layout">
                <section class="pearl-card pearl-sidebar">
                    <h2>{"Select Patient"}</h2>
                    <div class="pearl-field">
                        <label for="predictor-patient">{"Choose Patient"}</label>
                        <select id="predictor-patient" onchange={on_select}>
                            <option value="" selected={selected.is_empty()}>{"Choose Patient"}</option>
                            {
                                for props.catalog.patients().iter().map(|patient| html! {
                                    <option value={patient.id.clone()} selected={*selected == patient.id}>
                                        { format!("{} ({}y • {})", patient.name, patient.age, format::platelets(patient.platelet_count)) }
                                    </option>
                                })
                            }
                        </select>
                    </div>

                    if let Some(patient) = summary {
                        <div class="pearl-card">
                            <h3>{"Patient Summary"}</h3>
                            <p class="pearl-muted">
                                { format!("{} • {} years • {}", patient.name, patient.age, patient.gender) }
                            </p>
                            <p class="pearl-muted">
                                { format!("Current platelet count: {}", format::platelets(patient.platelet_count)) }
                            </p>
                            <div class="pearl-chip-row">
                                { for patient.current_treatment.iter().take(2).map(|treatment| chip(treatment.name.clone(), Tone::Primary)) }
                            </div>
                        </div>
                    }

                    <div class="pearl-button-row">
                        <button
                            type="button"
                            class="pearl-button is-primary"
                            disabled={!state.phase.can_start(&selected)}
                            onclick={on_analyze}
                        >
                            { if analyzing { "Analyzing..." } else { "Analyze Treatment Options" } }
                        </button>
                    </div>

                    if analyzing {
                        <p class="pearl-muted">{"AI is analyzing patient data and comparing with similar cases..."}</p>
                        { busy_progress() }
                    }
                </section>

                if let Some(prediction) = state.phase.prediction() {
                    { render_prediction(prediction) }
                }
            </div>
        </main>
    }
}

fn render_prediction(prediction: &TreatmentPrediction) -> Html {
    html! {
        <section class="pearl-card pearl-main">
            <header class="pearl-card-header">
                <h2>{"Treatment Recommendations"}</h2>
                { chip(format!("{}% Confidence", prediction.confidence_score), Tone::Primary) }
            </header>

            <h3>{"Recommended Treatments (Ranked by Success Probability)"}</h3>
            <ul class="pearl-list">
                {
                    for prediction.recommended_treatments.iter().enumerate()
                        .map(|(index, treatment)| render_recommendation(index + 1, treatment))
                }
            </ul>

            <h3>{"Similar Patient Cases"}</h3>
            <ul class="pearl-list">
                { for prediction.similar_cases.iter().map(render_similar_case) }
            </ul>

            <h3>{"Risk Factors & Considerations"}</h3>
            <Notice tone={Tone::Warning} title="Important Considerations:">
                <ul>
                    { for prediction.risk_factors.iter().map(|factor| html! { <li>{ factor.clone() }</li> }) }
                </ul>
            </Notice>
            <Notice tone={Tone::Info} title="Disclaimer:">
                {" These recommendations are based on AI analysis of similar cases and should be used \
                   as a clinical decision support tool. Always consider individual patient factors and \
                   consult current treatment guidelines."}
            </Notice>
        </section>
    }
}

fn render_recommendation(rank: usize, treatment: &RecommendedTreatment) -> Html {
    let tone = Tone::for_success_probability(treatment.success_probability);

    html! {
        <li class="pearl-list-item">
            <div class="pearl-list-title">
                <span>{ format!("{rank}. {}", treatment.treatment) }</span>
                <span class="pearl-chip-row">
                    { chip(format!("{}% success", treatment.success_probability), tone) }
                    { outlined_chip(treatment.time_to_response.clone(), Tone::Neutral) }
                </span>
            </div>
            <p class="pearl-muted">{ treatment.reasoning.clone() }</p>
            <span class="pearl-muted">{"Potential Side Effects:"}</span>
            <div class="pearl-chip-row">
                { for treatment.potential_side_effects.iter().map(|effect| outlined_chip(effect.clone(), Tone::Warning)) }
            </div>
        </li>
    }
}

fn render_similar_case(case: &SimilarCase) -> Html {
    html! {
        <li class="pearl-list-item">
            <div class="pearl-list-title">
                <span>
                    { avatar(&case.patient_id, true) }
                    { format!(" Patient {}", case.patient_id) }
                </span>
                { chip(format!("{}% similar", case.similarity), Tone::Info) }
            </div>
            <p class="pearl-muted">{ format!("Treatment: {}", case.treatment_used) }</p>
            <p class="pearl-muted">{ format!("Outcome: {}", case.outcome) }</p>
            <div class="pearl-chip-row">
                { for case.key_factors.iter().map(|factor| outlined_chip(factor.clone(), Tone::Neutral)) }
            </div>
        </li>
    }
}
