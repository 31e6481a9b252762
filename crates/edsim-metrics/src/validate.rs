use std::collections::BTreeMap;

use edsim_core::{FieldKey, FieldSpec, FormValues, ValueKind, WeatherCondition};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Why a single field was rejected. `Display` is the inline message shown
/// next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldError {
    #[error("Please enter a valid number")]
    MissingOrNonNumeric,

    #[error("Value must be between {min} and {max}")]
    OutOfRange { min: f64, max: f64 },

    #[error("Please enter a valid ratio (e.g., 10:1)")]
    MalformedRatio,

    #[error("Please select a weather condition")]
    MissingSelection,
}

/// A field value that passed its rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Ratio { beds: u64, doctors: u64 },
    Weather(WeatherCondition),
}

/// Per-field errors from one validation pass. Only failing fields appear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    errors: BTreeMap<FieldKey, FieldError>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, key: FieldKey) -> Option<FieldError> {
        self.errors.get(&key).copied()
    }

    /// Drop the error for `key`. Returns whether one was present.
    pub fn clear_field(&mut self, key: FieldKey) -> bool {
        self.errors.remove(&key).is_some()
    }

    /// Errors in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, FieldError)> + '_ {
        self.errors.iter().map(|(k, e)| (*k, *e))
    }
}

/// Validate every field independently. A failure in one field never hides
/// the result of another.
pub fn validate_form(values: &FormValues) -> ValidationReport {
    let errors = values
        .iter()
        .filter_map(|(key, raw)| validate_field(key.spec(), raw).err().map(|e| (key, e)))
        .collect();
    ValidationReport { errors }
}

/// Apply the rule for `spec` to one raw input.
pub fn validate_field(spec: &FieldSpec, raw: &str) -> Result<FieldValue, FieldError> {
    match spec.kind {
        ValueKind::Numeric => {
            let value = parse_number(raw).ok_or(FieldError::MissingOrNonNumeric)?;
            if value < spec.min || value > spec.max {
                return Err(FieldError::OutOfRange {
                    min: spec.min,
                    max: spec.max,
                });
            }
            Ok(FieldValue::Number(value))
        }
        ValueKind::Ratio => parse_ratio(raw)
            .map(|(beds, doctors)| FieldValue::Ratio { beds, doctors })
            .ok_or(FieldError::MalformedRatio),
        ValueKind::Enum => raw
            .parse::<WeatherCondition>()
            .map(FieldValue::Weather)
            .map_err(|_| FieldError::MissingSelection),
    }
}

/// Locale-independent decimal parse. Blank, non-numeric and non-finite
/// input all yield `None`.
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Exactly `digits:digits` (ASCII), nothing before or after.
fn parse_ratio(raw: &str) -> Option<(u64, u64)> {
    let (beds, doctors) = raw.split_once(':')?;
    if !is_ascii_digits(beds) || !is_ascii_digits(doctors) {
        return None;
    }
    Some((saturating_parse(beds), saturating_parse(doctors)))
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// Digit runs too long for u64 still match the pattern; cap the typed value.
fn saturating_parse(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}
