//! Threshold classifications shared by every page and front-end.

use serde::{Deserialize, Serialize};

use crate::{HistorySeverity, LabStatus, TreatmentResponse};

/// Severity label derived from a platelet count (per µL).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlateletSeverity {
    Critical,
    Severe,
    Moderate,
    Mild,
}

impl PlateletSeverity {
    pub const CRITICAL_BELOW: u32 = 20_000;
    pub const SEVERE_BELOW: u32 = 50_000;
    pub const MODERATE_BELOW: u32 = 100_000;

    /// Boundary values land on the milder side: exactly 20,000 is `Severe`.
    pub fn classify(count: u32) -> Self {
        if count < Self::CRITICAL_BELOW {
            PlateletSeverity::Critical
        } else if count < Self::SEVERE_BELOW {
            PlateletSeverity::Severe
        } else if count < Self::MODERATE_BELOW {
            PlateletSeverity::Moderate
        } else {
            PlateletSeverity::Mild
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlateletSeverity::Critical => "Critical",
            PlateletSeverity::Severe => "Severe",
            PlateletSeverity::Moderate => "Moderate",
            PlateletSeverity::Mild => "Mild",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            PlateletSeverity::Critical => Tone::Danger,
            PlateletSeverity::Severe => Tone::Warning,
            PlateletSeverity::Moderate => Tone::Info,
            PlateletSeverity::Mild => Tone::Success,
        }
    }
}

/// Color family used to render a badge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Danger,
    Warning,
    Info,
    Success,
    Primary,
    Neutral,
}

impl Tone {
    /// Value for `data-tone` attributes and CSS hooks.
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Danger => "danger",
            Tone::Warning => "warning",
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Primary => "primary",
            Tone::Neutral => "neutral",
        }
    }

    /// Patient-reported symptom severity on the 1-10 scale.
    pub fn for_symptom_severity(severity: u8) -> Self {
        if severity >= 7 {
            Tone::Danger
        } else if severity >= 4 {
            Tone::Warning
        } else {
            Tone::Success
        }
    }

    /// Predicted success probability, in percent.
    pub fn for_success_probability(probability: u8) -> Self {
        if probability >= 70 {
            Tone::Success
        } else if probability >= 50 {
            Tone::Warning
        } else {
            Tone::Danger
        }
    }

    pub fn for_response(response: TreatmentResponse) -> Self {
        match response {
            TreatmentResponse::Excellent => Tone::Success,
            TreatmentResponse::Good => Tone::Primary,
            TreatmentResponse::Moderate => Tone::Warning,
            TreatmentResponse::Poor | TreatmentResponse::Unknown => Tone::Danger,
        }
    }

    pub fn for_lab_status(status: LabStatus) -> Self {
        match status {
            LabStatus::Normal => Tone::Success,
            LabStatus::Abnormal => Tone::Warning,
            LabStatus::Critical => Tone::Danger,
        }
    }

    pub fn for_history_severity(severity: HistorySeverity) -> Self {
        match severity {
            HistorySeverity::Mild => Tone::Success,
            HistorySeverity::Moderate => Tone::Warning,
            HistorySeverity::Severe => Tone::Danger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_reference_counts() {
        assert_eq!(PlateletSeverity::classify(15_000), PlateletSeverity::Critical);
        assert_eq!(PlateletSeverity::classify(25_000), PlateletSeverity::Severe);
        assert_eq!(PlateletSeverity::classify(85_000), PlateletSeverity::Moderate);
        assert_eq!(PlateletSeverity::classify(150_000), PlateletSeverity::Mild);
    }

    #[test]
    fn boundaries_resolve_to_milder_side() {
        assert_eq!(PlateletSeverity::classify(19_999), PlateletSeverity::Critical);
        assert_eq!(PlateletSeverity::classify(20_000), PlateletSeverity::Severe);
        assert_eq!(PlateletSeverity::classify(49_999), PlateletSeverity::Severe);
        assert_eq!(PlateletSeverity::classify(50_000), PlateletSeverity::Moderate);
        assert_eq!(PlateletSeverity::classify(99_999), PlateletSeverity::Moderate);
        assert_eq!(PlateletSeverity::classify(100_000), PlateletSeverity::Mild);
    }

    #[test]
    fn total_over_extremes() {
        assert_eq!(PlateletSeverity::classify(0), PlateletSeverity::Critical);
        assert_eq!(PlateletSeverity::classify(u32::MAX), PlateletSeverity::Mild);
    }

    #[test]
    fn severity_order_runs_from_most_severe() {
        assert!(PlateletSeverity::Critical < PlateletSeverity::Severe);
        assert!(PlateletSeverity::Moderate < PlateletSeverity::Mild);
    }

    #[test]
    fn symptom_and_probability_tones() {
        assert_eq!(Tone::for_symptom_severity(7), Tone::Danger);
        assert_eq!(Tone::for_symptom_severity(4), Tone::Warning);
        assert_eq!(Tone::for_symptom_severity(3), Tone::Success);

        assert_eq!(Tone::for_success_probability(78), Tone::Success);
        assert_eq!(Tone::for_success_probability(65), Tone::Warning);
        assert_eq!(Tone::for_success_probability(45), Tone::Danger);
    }
}
