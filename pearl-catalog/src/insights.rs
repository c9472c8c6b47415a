//! Dashboard figures and the supplementary series of the trend page.

use std::fmt::Write as _;
use std::str::FromStr;

use pearl_core::{
    format, ChartDataPoint, HistorySeverity, Patient, PearlConfig, ProjectStatus,
    ResearchProject, Tone, TrendAnalysis,
};
use serde::{Deserialize, Serialize};

use crate::Catalog;

/// Headline tile on the home page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
    pub tone: Tone,
}

pub fn quick_stats() -> [QuickStat; 4] {
    [
        QuickStat {
            label: "Active Patients",
            value: "156",
            trend: "+12",
            tone: Tone::Primary,
        },
        QuickStat {
            label: "Ongoing Research",
            value: "8",
            trend: "+2",
            tone: Tone::Neutral,
        },
        QuickStat {
            label: "Case Studies",
            value: "234",
            trend: "+18",
            tone: Tone::Success,
        },
        QuickStat {
            label: "Treatment Responses",
            value: "89%",
            trend: "+5%",
            tone: Tone::Info,
        },
    ]
}

impl Catalog {
    /// The first few roster entries, in catalog order.
    pub fn recent_patients(&self, config: &PearlConfig) -> &[Patient] {
        let count = config.recent_patient_count.min(self.patients().len());
        &self.patients()[..count]
    }

    pub fn active_research(&self) -> Vec<&ResearchProject> {
        self.research_projects()
            .iter()
            .filter(|project| project.status == ProjectStatus::InProgress)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Line, ChartKind::Pie];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Pie => "Pie Chart",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
        }
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "bar" => Ok(ChartKind::Bar),
            "line" => Ok(ChartKind::Line),
            "pie" => Ok(ChartKind::Pie),
            other => Err(format!("unknown chart kind: {other}")),
        }
    }
}

/// Share of patients per treatment family, with its chart color.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DistributionSlice {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeverityShare {
    pub severity: HistorySeverity,
    pub count: u32,
    pub percentage: u8,
}

/// Monthly response rate (%) shown by the line chart.
pub fn response_rate_series() -> Vec<ChartDataPoint> {
    [
        ("Jan", 75.0),
        ("Feb", 82.0),
        ("Mar", 78.0),
        ("Apr", 85.0),
        ("May", 88.0),
        ("Jun", 90.0),
    ]
    .into_iter()
    .map(|(month, rate)| ChartDataPoint::new(month, rate))
    .collect()
}

pub fn treatment_distribution() -> [DistributionSlice; 5] {
    [
        DistributionSlice {
            name: "Corticosteroids",
            value: 35.0,
            color: "#2563eb",
        },
        DistributionSlice {
            name: "TPO Agonists",
            value: 28.0,
            color: "#7c3aed",
        },
        DistributionSlice {
            name: "Rituximab",
            value: 18.0,
            color: "#059669",
        },
        DistributionSlice {
            name: "IVIG",
            value: 12.0,
            color: "#dc2626",
        },
        DistributionSlice {
            name: "Other",
            value: 7.0,
            color: "#6b7280",
        },
    ]
}

pub fn severity_breakdown() -> [SeverityShare; 3] {
    [
        SeverityShare {
            severity: HistorySeverity::Mild,
            count: 45,
            percentage: 30,
        },
        SeverityShare {
            severity: HistorySeverity::Moderate,
            count: 75,
            percentage: 50,
        },
        SeverityShare {
            severity: HistorySeverity::Severe,
            count: 30,
            percentage: 20,
        },
    ]
}

/// Fraction of the whole for each slice; all zeros when the total is zero.
pub fn pie_shares(slices: &[DistributionSlice]) -> Vec<f64> {
    let total: f64 = slices.iter().map(|slice| slice.value).sum();
    slices
        .iter()
        .map(|slice| if total > 0.0 { slice.value / total } else { 0.0 })
        .collect()
}

/// Points plotted for `kind`: bars use the analysis itself, the line chart
/// the monthly response series and the pie the treatment distribution.
pub fn chart_series(kind: ChartKind, analysis: &TrendAnalysis) -> Vec<ChartDataPoint> {
    match kind {
        ChartKind::Bar => analysis.chart_data.clone(),
        ChartKind::Line => response_rate_series(),
        ChartKind::Pie => treatment_distribution()
            .into_iter()
            .map(|slice| ChartDataPoint::new(slice.name, slice.value))
            .collect(),
    }
}

/// Plain-text summary of a trend analysis.
pub fn trend_report(analysis: &TrendAnalysis) -> String {
    let mut report = String::new();
    let _ = writeln!(report, "{} ({})", analysis.title, analysis.id);
    let _ = writeln!(
        report,
        "Timeframe: {} | Patients: {} | Generated: {}",
        analysis.timeframe,
        analysis.patient_count,
        format::date(analysis.generated_date)
    );

    if !analysis.key_insights.is_empty() {
        let _ = writeln!(report, "\nKey insights:");
        for insight in &analysis.key_insights {
            let _ = writeln!(report, "  • {insight}");
        }
    }

    if !analysis.chart_data.is_empty() {
        let _ = writeln!(report, "\nData points:");
        for point in &analysis.chart_data {
            match &point.category {
                Some(category) => {
                    let _ = writeln!(
                        report,
                        "  {:<16} {:>6} [{category}]",
                        point.label, point.value
                    );
                }
                None => {
                    let _ = writeln!(report, "  {:<16} {:>6}", point.label, point.value);
                }
            }
        }
    }

    report
}
