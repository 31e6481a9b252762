use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::form::FormValues;

/// Frozen copy of the form values at the moment validation passed.
///
/// Never edited after capture; the next successful submission replaces it
/// wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionSnapshot {
    pub id: Uuid,
    pub hospital: String,
    pub submitted_at: jiff::Timestamp,
    pub values: FormValues,
}

impl SubmissionSnapshot {
    pub fn capture(hospital: &str, values: &FormValues) -> Self {
        Self {
            id: Uuid::new_v4(),
            hospital: hospital.to_string(),
            submitted_at: jiff::Timestamp::now(),
            values: values.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, crate::CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
