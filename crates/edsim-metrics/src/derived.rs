//! Presentation values computed from a submission snapshot.
//!
//! Nothing here is stored; the results view recomputes on every render.

use edsim_core::{FieldKey, SubmissionSnapshot};
use serde::Serialize;
use ts_rs::TS;

/// Occupancy severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub enum Severity {
    /// Occupancy >= 90.
    Critical,
    /// Occupancy 75..90.
    High,
    /// Occupancy 50..75.
    Moderate,
    /// Occupancy < 50.
    Low,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Moderate => "Moderate",
            Severity::Low => "Low",
        }
    }

    /// Gauge color. Moderate and Low share the success tone.
    pub fn tone(self) -> Tone {
        match self {
            Severity::Critical => Tone::Destructive,
            Severity::High => Tone::Warning,
            Severity::Moderate | Severity::Low => Tone::Success,
        }
    }
}

/// Semantic color slot for a gauge or bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tone {
    Primary,
    Accent,
    Success,
    Warning,
    Destructive,
}

/// Tiers are inclusive at their lower bound and checked top-down.
pub fn occupancy_severity(value: f64) -> Severity {
    if value >= 90.0 {
        Severity::Critical
    } else if value >= 75.0 {
        Severity::High
    } else if value >= 50.0 {
        Severity::Moderate
    } else {
        Severity::Low
    }
}

/// Fill percentage for a bar, capped to `[0, 100]`. The caller still shows
/// the unclamped number as text.
pub fn bar_width(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Display fallback: anything that does not parse to a finite number is 0.
pub fn parse_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Format a number the way the results view prints it: integers without a
/// fractional part, no negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    /// Occupancy as entered, unclamped.
    pub value: f64,
    /// Clamped fill percentage.
    pub fill: f64,
    pub severity: Severity,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
    pub width: f64,
    pub tone: Tone,
}

/// Everything the results view draws besides the raw summary values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub gauge: Gauge,
    pub bars: Vec<Bar>,
}

impl DerivedMetrics {
    pub fn from_snapshot(snapshot: &SubmissionSnapshot) -> Self {
        let values = &snapshot.values;
        let occupancy = parse_or_zero(values.get(FieldKey::OccupancyRate));
        let severity = occupancy_severity(occupancy);

        let bar = |label: &'static str, key: FieldKey, tone: Tone| {
            let value = parse_or_zero(values.get(key));
            Bar {
                label,
                value,
                width: bar_width(value),
                tone,
            }
        };

        Self {
            gauge: Gauge {
                value: occupancy,
                fill: bar_width(occupancy),
                severity,
                tone: severity.tone(),
            },
            bars: vec![
                bar("Occupancy", FieldKey::OccupancyRate, Tone::Primary),
                bar("Next-Day Discharge", FieldKey::NextDayDischarge, Tone::Success),
                bar("Same-Day Discharge", FieldKey::SameDayDischarge, Tone::Accent),
                bar("High Urgency", FieldKey::HighUrgencyPercentage, Tone::Warning),
            ],
        }
    }
}
