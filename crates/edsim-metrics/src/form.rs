use edsim_core::{FieldKey, FormValues, SubmissionSnapshot};
use serde::Serialize;

use crate::validate::{validate_form, ValidationReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Editing,
    Submitted,
}

/// Field values, last validation report, and the frozen snapshot for one
/// hospital's data entry form.
///
/// `Editing -> Submitted` on a passing submit, back to `Editing` on
/// [`FormState::new_entry`]. Every operation completes synchronously.
#[derive(Debug, Clone)]
pub struct FormState {
    hospital: String,
    values: FormValues,
    report: ValidationReport,
    snapshot: Option<SubmissionSnapshot>,
    phase: Phase,
}

impl FormState {
    pub fn new(hospital: impl Into<String>) -> Self {
        Self {
            hospital: hospital.into(),
            values: FormValues::default(),
            report: ValidationReport::default(),
            snapshot: None,
            phase: Phase::Editing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn snapshot(&self) -> Option<&SubmissionSnapshot> {
        self.snapshot.as_ref()
    }

    /// Overwrite one field. A stale error on that field is dropped without
    /// re-validating; other fields keep theirs until the next submit.
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.values.set(key, value);
        if self.report.clear_field(key) {
            tracing::debug!(field = %key, "cleared stale field error");
        }
    }

    /// Validate every field. On failure the report is replaced and nothing
    /// else changes. On success a new snapshot supersedes any previous one.
    pub fn submit(&mut self) -> Result<&SubmissionSnapshot, &ValidationReport> {
        let report = validate_form(&self.values);
        if !report.is_empty() {
            tracing::debug!(
                hospital = %self.hospital,
                errors = report.len(),
                "submission rejected"
            );
            self.report = report;
            return Err(&self.report);
        }

        self.report = report;
        self.phase = Phase::Submitted;
        let snapshot = &*self
            .snapshot
            .insert(SubmissionSnapshot::capture(&self.hospital, &self.values));
        tracing::info!(hospital = %self.hospital, id = %snapshot.id, "submission accepted");
        Ok(snapshot)
    }

    /// Clear everything and start over for the same hospital.
    pub fn new_entry(&mut self) {
        self.values = FormValues::default();
        self.report = ValidationReport::default();
        self.snapshot = None;
        self.phase = Phase::Editing;
        tracing::debug!(hospital = %self.hospital, "form reset for new entry");
    }
}
