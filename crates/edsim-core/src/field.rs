use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The seven metrics collected by the daily data entry form.
///
/// Variant order is display order; `Ord` follows it so reports keyed by
/// field iterate the same way the form is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum FieldKey {
    NewAdmissions,
    OccupancyRate,
    NextDayDischarge,
    SameDayDischarge,
    BedsPerDoctor,
    HighUrgencyPercentage,
    WeatherCondition,
}

impl FieldKey {
    pub const ALL: [FieldKey; 7] = [
        FieldKey::NewAdmissions,
        FieldKey::OccupancyRate,
        FieldKey::NextDayDischarge,
        FieldKey::SameDayDischarge,
        FieldKey::BedsPerDoctor,
        FieldKey::HighUrgencyPercentage,
        FieldKey::WeatherCondition,
    ];

    /// Wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::NewAdmissions => "newAdmissions",
            FieldKey::OccupancyRate => "occupancyRate",
            FieldKey::NextDayDischarge => "nextDayDischarge",
            FieldKey::SameDayDischarge => "sameDayDischarge",
            FieldKey::BedsPerDoctor => "bedsPerDoctor",
            FieldKey::HighUrgencyPercentage => "highUrgencyPercentage",
            FieldKey::WeatherCondition => "weatherCondition",
        }
    }

    /// Position in display order (0-based).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_SPECS[self.index()]
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the camelCase wire name as well as snake_case and kebab-case
/// spellings (`occupancy_rate`, `occupancy-rate`), case-insensitively.
impl FromStr for FieldKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// How a field's raw text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValueKind {
    /// Decimal number bounded by `[min, max]`.
    Numeric,
    /// `beds:doctors`, both parts unsigned integers.
    Ratio,
    /// One of a fixed set of options.
    Enum,
}

/// Declarative rule set and presentation strings for one form input.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub kind: ValueKind,
    /// Inclusive lower bound. Only meaningful for [`ValueKind::Numeric`].
    pub min: f64,
    /// Inclusive upper bound. Only meaningful for [`ValueKind::Numeric`].
    pub max: f64,
    pub label: &'static str,
    /// Shorter label used in the results summary.
    pub summary_label: &'static str,
    pub hint: &'static str,
    pub placeholder: &'static str,
    pub suffix: Option<&'static str>,
}

/// Field specs in display order, indexed by [`FieldKey::index`].
pub static FIELD_SPECS: [FieldSpec; 7] = [
    FieldSpec {
        key: FieldKey::NewAdmissions,
        kind: ValueKind::Numeric,
        min: 0.0,
        max: 200.0,
        label: "New Admissions",
        summary_label: "New Admissions",
        hint: "Total patients admitted today (0-200)",
        placeholder: "e.g., 45",
        suffix: None,
    },
    FieldSpec {
        key: FieldKey::OccupancyRate,
        kind: ValueKind::Numeric,
        min: 0.0,
        max: 100.0,
        label: "Occupancy Rate",
        summary_label: "Occupancy Rate",
        hint: "Current bed occupancy percentage (0-100)",
        placeholder: "e.g., 85.5",
        suffix: Some("%"),
    },
    FieldSpec {
        key: FieldKey::NextDayDischarge,
        kind: ValueKind::Numeric,
        min: 0.0,
        max: 100.0,
        label: "Next-Day Discharge",
        summary_label: "Next-Day Discharge",
        hint: "Percentage expected to leave tomorrow (0-100)",
        placeholder: "e.g., 35",
        suffix: Some("%"),
    },
    FieldSpec {
        key: FieldKey::SameDayDischarge,
        kind: ValueKind::Numeric,
        min: 0.0,
        max: 100.0,
        label: "Same-Day Discharge",
        summary_label: "Same-Day Discharge",
        hint: "Percentage discharged today (0-100)",
        placeholder: "e.g., 12",
        suffix: Some("%"),
    },
    FieldSpec {
        key: FieldKey::BedsPerDoctor,
        kind: ValueKind::Ratio,
        min: 0.0,
        max: 0.0,
        label: "Beds per Doctor Ratio",
        summary_label: "Beds/Doctor Ratio",
        hint: "Staff coverage ratio (e.g., 10:1)",
        placeholder: "e.g., 10:1",
        suffix: None,
    },
    FieldSpec {
        key: FieldKey::HighUrgencyPercentage,
        kind: ValueKind::Numeric,
        min: 0.0,
        max: 100.0,
        label: "High Urgency Percentage",
        summary_label: "High Urgency",
        hint: "Percentage Code Orange or higher (0-100)",
        placeholder: "e.g., 28",
        suffix: Some("%"),
    },
    FieldSpec {
        key: FieldKey::WeatherCondition,
        kind: ValueKind::Enum,
        min: 0.0,
        max: 0.0,
        label: "Weather Condition",
        summary_label: "Weather",
        hint: "Environmental impact factor",
        placeholder: "Select weather...",
        suffix: None,
    },
];
