use pearl_catalog::insights::{
    chart_series, response_rate_series, severity_breakdown, treatment_distribution, trend_report,
    ChartKind,
};
use pearl_core::{format, Tone, TrendAnalysis};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew::TargetCast;

use crate::app::CatalogRef;
use crate::widgets::{bar_chart, chip, line_chart, outlined_chip, pie_chart, progress, Notice};

#[derive(Properties, PartialEq)]
pub struct TrendsPageProps {
    pub catalog: CatalogRef,
}

#[function_component(TrendsPage)]
pub fn trends_page(props: &TrendsPageProps) -> Html {
    let catalog = props.catalog;
    let selected = use_state(move || {
        catalog
            .trend_analyses()
            .first()
            .map(|analysis| analysis.id.clone())
            .unwrap_or_default()
    });
    let kind = use_state(ChartKind::default);
    let report = use_state(|| None::<String>);

    let on_analysis = {
        let selected = selected.clone();
        let report = report.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            selected.set(select.value());
            report.set(None);
        })
    };

    let on_kind = {
        let kind = kind.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Ok(next) = select.value().parse::<ChartKind>() {
                kind.set(next);
            }
        })
    };

    let analysis = catalog.find_trend(&selected);

    let on_report = {
        let report = report.clone();
        let text = analysis.map(trend_report);
        Callback::from(move |_: MouseEvent| report.set(text.clone()))
    };

    html! {
        <main class="pearl-page">
            <section class="pearl-hero">
                <h1>{"Trend Analysis Dashboard"}</h1>
                <p>{"Analyze patient trends, treatment outcomes, and epidemiological patterns"}</p>
            </section>

            <section class="pearl-card">
                <div class="pearl-toolbar">
                    <div class="pearl-field">
                        <label for="trend-analysis">{"Select Analysis"}</label>
                        <select id="trend-analysis" onchange={on_analysis}>
                            {
                                for catalog.trend_analyses().iter().map(|candidate| html! {
                                    <option value={candidate.id.clone()} selected={*selected == candidate.id}>
                                        { candidate.title.clone() }
                                    </option>
                                })
                            }
                        </select>
                    </div>
                    <div class="pearl-field">
                        <label for="trend-chart">{"Chart Type"}</label>
                        <select id="trend-chart" onchange={on_kind}>
                            {
                                for ChartKind::ALL.into_iter().map(|candidate| html! {
                                    <option value={candidate.as_str()} selected={*kind == candidate}>
                                        { candidate.label() }
                                    </option>
                                })
                            }
                        </select>
                    </div>
                    <button type="button" class="pearl-button is-primary" onclick={on_report}
                        disabled={analysis.is_none()}>
                        {"Generate Report"}
                    </button>
                </div>
            </section>

            if let Some(text) = (*report).clone() {
                <Notice tone={Tone::Info} title="Trend analysis report">
                    <pre>{ text }</pre>
                </Notice>
            }

            if let Some(analysis) = analysis {
                <div class="pearl-layout">
                    { render_details(analysis) }
                    <section class="pearl-card pearl-main">
                        <header class="pearl-card-header">
                            <h2>{ analysis.title.clone() }</h2>
                            { chip(kind.label(), Tone::Neutral) }
                        </header>
                        { render_chart(*kind, analysis) }
                    </section>
                </div>
            }

            <div class="pearl-grid">
                <section class="pearl-card">
                    <h3>{"Treatment Response Over Time"}</h3>
                    { line_chart(&response_rate_series(), true) }
                </section>
                <section class="pearl-card">
                    <h3>{"Treatment Distribution"}</h3>
                    { render_distribution() }
                </section>
                <section class="pearl-card">
                    <h3>{"Disease Severity Breakdown"}</h3>
                    { render_severity() }
                </section>
            </div>
        </main>
    }
}

fn render_chart(kind: ChartKind, analysis: &TrendAnalysis) -> Html {
    match kind {
        ChartKind::Bar => bar_chart(&chart_series(kind, analysis)),
        ChartKind::Line => line_chart(&chart_series(kind, analysis), false),
        ChartKind::Pie => pie_chart(&treatment_distribution()),
    }
}

fn render_details(analysis: &TrendAnalysis) -> Html {
    html! {
        <section class="pearl-card pearl-sidebar">
            <h2>{"Analysis Details"}</h2>
            <h3>{ analysis.title.clone() }</h3>
            <div class="pearl-chip-row">
                { chip(analysis.timeframe.clone(), Tone::Primary) }
                { outlined_chip(format!("{} patients", analysis.patient_count), Tone::Neutral) }
                { outlined_chip(format!("Generated: {}", format::date(analysis.generated_date)), Tone::Neutral) }
            </div>
            <h4>{"Key Insights"}</h4>
            <ul class="pearl-list">
                {
                    for analysis.key_insights.iter().map(|insight| html! {
                        <li class="pearl-list-item">{ format!("• {insight}") }</li>
                    })
                }
            </ul>
        </section>
    }
}

fn render_distribution() -> Html {
    html! {
        <ul class="pearl-list">
            {
                for treatment_distribution().into_iter().map(|slice| html! {
                    <li class="pearl-list-item">
                        <div class="pearl-list-title">
                            <span>{ slice.name }</span>
                            { chip(format!("{}%", slice.value), Tone::Neutral) }
                        </div>
                    </li>
                })
            }
        </ul>
    }
}

fn render_severity() -> Html {
    html! {
        <ul class="pearl-list">
            {
                for severity_breakdown().into_iter().map(|share| {
                    let tone = Tone::for_history_severity(share.severity);
                    html! {
                        <li class="pearl-list-item">
                            <div class="pearl-list-title">
                                <span>{ share.severity.label() }</span>
                                { chip(format!("{} patients", share.count), tone) }
                            </div>
                            { progress(share.percentage, Some(tone)) }
                        </li>
                    }
                })
            }
        </ul>
    }
}
