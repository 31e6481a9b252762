//! Template contexts. Every string is fully formatted (padding, color)
//! before it reaches Tera; templates only arrange lines.

use edsim_core::{FieldKey, FormValues, Hospital, SubmissionSnapshot, ValueKind, WeatherCondition};
use edsim_metrics::derived::format_number;
use edsim_metrics::{DerivedMetrics, ValidationReport};
use serde::Serialize;

use crate::styles::RenderStyle;

const LABEL_WIDTH: usize = 20;

#[derive(Debug, Serialize)]
pub struct HospitalRow {
    pub position: usize,
    pub marker: String,
    pub name: String,
    pub icon: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SelectionView {
    pub hospitals: Vec<HospitalRow>,
}

impl SelectionView {
    pub fn build(hospitals: &[Hospital], style: &RenderStyle) -> Self {
        let hospitals = hospitals
            .iter()
            .enumerate()
            .map(|(i, h)| HospitalRow {
                position: i + 1,
                marker: style.accent("■", &h.accent),
                name: style.bold(h.name),
                icon: h.icon,
                kind: h.kind,
                description: h.description,
            })
            .collect();
        Self { hospitals }
    }
}

#[derive(Debug, Serialize)]
pub struct FieldRow {
    pub position: usize,
    pub label: String,
    pub hint: String,
    pub display: String,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HeaderView {
    pub name: String,
    pub kind: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SummaryItem {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct GaugeView {
    pub meter: String,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct BarRow {
    pub label: String,
    pub value: String,
    pub strip: String,
}

#[derive(Debug, Serialize)]
pub struct ResultsView {
    pub hospital: String,
    pub icon: &'static str,
    pub submitted_at: String,
    pub summary: Vec<SummaryItem>,
    pub gauge: GaugeView,
    pub bars: Vec<BarRow>,
}

impl ResultsView {
    pub fn build(hospital: &Hospital, snapshot: &SubmissionSnapshot, style: &RenderStyle) -> Self {
        let summary = snapshot
            .values
            .iter()
            .map(|(key, raw)| {
                let spec = key.spec();
                SummaryItem {
                    label: format!("{:<width$}", spec.summary_label, width = LABEL_WIDTH),
                    value: format!("{raw}{}", spec.suffix.unwrap_or("")),
                }
            })
            .collect();

        let derived = DerivedMetrics::from_snapshot(snapshot);
        let gauge = &derived.gauge;
        let gauge = GaugeView {
            meter: style.strip(gauge.fill, gauge.tone),
            value: format!("{}%", format_number(gauge.value)),
            label: style.tone(&format!("{} Occupancy", gauge.severity.label()), gauge.tone),
        };

        let bars = derived
            .bars
            .iter()
            .map(|bar| BarRow {
                label: format!("{:<width$}", bar.label, width = LABEL_WIDTH),
                value: format!("{}%", format_number(bar.value)),
                strip: style.strip(bar.width, bar.tone),
            })
            .collect();

        Self {
            hospital: format!("{} ({})", hospital.name, hospital.kind),
            icon: hospital.icon,
            submitted_at: snapshot.submitted_at.to_string(),
            summary,
            gauge,
            bars,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FormView {
    pub hospital: HeaderView,
    pub banner: Option<String>,
    pub fields: Vec<FieldRow>,
    pub results: Option<ResultsView>,
}

impl FormView {
    pub fn build(
        hospital: &Hospital,
        values: &FormValues,
        report: &ValidationReport,
        snapshot: Option<&SubmissionSnapshot>,
        banner: bool,
        style: &RenderStyle,
    ) -> Self {
        let fields = values
            .iter()
            .map(|(key, raw)| field_row(key, raw, report, style))
            .collect();

        let banner = banner.then(|| {
            style.tone(
                &format!("✔ Data submitted successfully for {}!", hospital.name),
                edsim_metrics::Tone::Success,
            )
        });

        Self {
            hospital: HeaderView {
                name: style.bold(hospital.name),
                kind: hospital.kind,
                icon: hospital.icon,
            },
            banner,
            fields,
            results: snapshot.map(|s| ResultsView::build(hospital, s, style)),
        }
    }
}

fn field_row(key: FieldKey, raw: &str, report: &ValidationReport, style: &RenderStyle) -> FieldRow {
    let spec = key.spec();

    let hint = if spec.kind == ValueKind::Enum {
        let options: Vec<_> = WeatherCondition::ALL.iter().map(|w| w.as_str()).collect();
        format!("{} [{}]", spec.hint, options.join(" / "))
    } else {
        spec.hint.to_string()
    };

    let display = if raw.is_empty() {
        style.dim(spec.placeholder)
    } else {
        match spec.suffix {
            Some(suffix) => format!("{raw} {suffix}"),
            None => raw.to_string(),
        }
    };

    FieldRow {
        position: key.index() + 1,
        label: style.bold(spec.label),
        hint: style.dim(&hint),
        display,
        error: report
            .get(key)
            .map(|e| style.tone(&e.to_string(), edsim_metrics::Tone::Destructive)),
    }
}
