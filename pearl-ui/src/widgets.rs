use pearl_catalog::insights::{pie_shares, DistributionSlice};
use pearl_core::{format, ChartDataPoint, Tone};
use yew::prelude::*;

use crate::geometry::{
    bar_rects, line_points, pie_paths, polyline, CHART_HEIGHT, CHART_PADDING, CHART_WIDTH,
};

const PIE_SIZE: f64 = 280.0;

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub tone: Tone,
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    html! {
        <div class="pearl-notice" role="status" data-tone={props.tone.as_str()}>
            if !props.title.is_empty() {
                <strong>{ props.title.clone() }</strong>
            }
            { props.children.clone() }
        </div>
    }
}

pub fn chip(label: impl Into<AttrValue>, tone: Tone) -> Html {
    html! { <span class="pearl-chip" data-tone={tone.as_str()}>{ label.into() }</span> }
}

pub fn outlined_chip(label: impl Into<AttrValue>, tone: Tone) -> Html {
    html! {
        <span class="pearl-chip is-outlined" data-tone={tone.as_str()}>{ label.into() }</span>
    }
}

pub fn progress(percent: u8, tone: Option<Tone>) -> Html {
    let width = format!("width: {}%", percent.min(100));
    html! {
        <div class="pearl-progress" role="progressbar" aria-valuenow={percent.to_string()}>
            <div class="pearl-progress-bar" style={width} data-tone={tone.map(Tone::as_str)}></div>
        </div>
    }
}

pub fn busy_progress() -> Html {
    html! {
        <div class="pearl-progress is-indeterminate" role="progressbar">
            <div class="pearl-progress-bar"></div>
        </div>
    }
}

pub fn avatar(name: &str, small: bool) -> Html {
    html! {
        <span class={classes!("pearl-avatar", small.then_some("is-small"))} aria-hidden="true">
            { format::initials(name) }
        </span>
    }
}

pub fn bar_chart(points: &[ChartDataPoint]) -> Html {
    let values: Vec<f64> = points.iter().map(|point| point.value).collect();
    let baseline = CHART_HEIGHT - CHART_PADDING;

    html! {
        <svg class="pearl-chart" viewBox={format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")} role="img">
            { axes() }
            {
                for points.iter().zip(bar_rects(&values)).map(|(point, bar)| html! {
                    <g>
                        <rect class="bar" x={bar.x.to_string()} y={bar.y.to_string()}
                            width={bar.width.to_string()} height={bar.height.to_string()} rx="3">
                            <title>{ format!("{}: {}", point.label, point.value) }</title>
                        </rect>
                        <text x={(bar.x + bar.width / 2.0).to_string()} y={(baseline + 16.0).to_string()}
                            text-anchor="middle">{ point.label.clone() }</text>
                    </g>
                })
            }
        </svg>
    }
}

pub fn line_chart(points: &[ChartDataPoint], secondary: bool) -> Html {
    let values: Vec<f64> = points.iter().map(|point| point.value).collect();
    let vertices = line_points(&values);
    let baseline = CHART_HEIGHT - CHART_PADDING;

    html! {
        <svg class="pearl-chart" viewBox={format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")} role="img">
            { axes() }
            <polyline class={classes!("line", secondary.then_some("is-secondary"))}
                points={polyline(&vertices)} />
            {
                for points.iter().zip(vertices.iter()).map(|(point, (x, y))| html! {
                    <g>
                        if secondary {
                            <circle class="dot" cx={x.to_string()} cy={y.to_string()} r="4" />
                        }
                        <text x={x.to_string()} y={(baseline + 16.0).to_string()}
                            text-anchor="middle">{ point.label.clone() }</text>
                    </g>
                })
            }
        </svg>
    }
}

pub fn pie_chart(slices: &[DistributionSlice]) -> Html {
    let shares = pie_shares(slices);
    let center = PIE_SIZE / 2.0;
    let paths = pie_paths(&shares, center, center, center - 10.0);

    html! {
        <>
            <svg class="pearl-chart" viewBox={format!("0 0 {PIE_SIZE} {PIE_SIZE}")} role="img">
                {
                    for slices.iter().zip(paths).map(|(slice, path)| html! {
                        <path d={path} fill={slice.color}>
                            <title>{ format!("{} {}%", slice.name, slice.value) }</title>
                        </path>
                    })
                }
            </svg>
            <div class="pearl-legend">
                {
                    for slices.iter().zip(shares.iter()).map(|(slice, share)| html! {
                        <span>
                            <span class="pearl-legend-swatch" style={format!("background: {}", slice.color)}></span>
                            { format!("{} {:.0}%", slice.name, share * 100.0) }
                        </span>
                    })
                }
            </div>
        </>
    }
}

fn axes() -> Html {
    let baseline = (CHART_HEIGHT - CHART_PADDING).to_string();
    let left = CHART_PADDING.to_string();
    let right = (CHART_WIDTH - CHART_PADDING).to_string();

    html! {
        <g>
            <line class="axis" x1={left.clone()} y1={CHART_PADDING.to_string()} x2={left.clone()} y2={baseline.clone()} />
            <line class="axis" x1={left} y1={baseline.clone()} x2={right} y2={baseline} />
        </g>
    }
}
