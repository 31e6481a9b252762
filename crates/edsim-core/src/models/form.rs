use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::field::FieldKey;

/// Raw text for every form field, exactly as entered.
///
/// Struct field order is display order. Values are never interpreted here;
/// an empty string means the field has not been filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FormValues {
    pub new_admissions: String,
    pub occupancy_rate: String,
    pub next_day_discharge: String,
    pub same_day_discharge: String,
    pub beds_per_doctor: String,
    pub high_urgency_percentage: String,
    pub weather_condition: String,
}

impl FormValues {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::NewAdmissions => &self.new_admissions,
            FieldKey::OccupancyRate => &self.occupancy_rate,
            FieldKey::NextDayDischarge => &self.next_day_discharge,
            FieldKey::SameDayDischarge => &self.same_day_discharge,
            FieldKey::BedsPerDoctor => &self.beds_per_doctor,
            FieldKey::HighUrgencyPercentage => &self.high_urgency_percentage,
            FieldKey::WeatherCondition => &self.weather_condition,
        }
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        let slot = match key {
            FieldKey::NewAdmissions => &mut self.new_admissions,
            FieldKey::OccupancyRate => &mut self.occupancy_rate,
            FieldKey::NextDayDischarge => &mut self.next_day_discharge,
            FieldKey::SameDayDischarge => &mut self.same_day_discharge,
            FieldKey::BedsPerDoctor => &mut self.beds_per_doctor,
            FieldKey::HighUrgencyPercentage => &mut self.high_urgency_percentage,
            FieldKey::WeatherCondition => &mut self.weather_condition,
        };
        *slot = value.into();
    }

    /// `(key, raw value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        FieldKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    pub fn is_blank(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }
}
