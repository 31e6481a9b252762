use edsim_core::FieldKey;
use edsim_metrics::{FieldError, FormState, Phase};

fn fill_valid(form: &mut FormState) {
    form.set_field(FieldKey::NewAdmissions, "45");
    form.set_field(FieldKey::OccupancyRate, "85.5");
    form.set_field(FieldKey::NextDayDischarge, "35");
    form.set_field(FieldKey::SameDayDischarge, "12");
    form.set_field(FieldKey::BedsPerDoctor, "10:1");
    form.set_field(FieldKey::HighUrgencyPercentage, "28");
    form.set_field(FieldKey::WeatherCondition, "Rain");
}

#[test]
fn starts_editing_and_blank() {
    let form = FormState::new("Alpha");
    assert_eq!(form.phase(), Phase::Editing);
    assert!(form.values().is_blank());
    assert!(form.report().is_empty());
    assert!(form.snapshot().is_none());
}

#[test]
fn failed_submit_stays_editing() {
    let mut form = FormState::new("Alpha");
    let report = form.submit().unwrap_err();
    assert_eq!(report.len(), 7);
    assert_eq!(form.phase(), Phase::Editing);
    assert!(form.snapshot().is_none());
}

#[test]
fn editing_clears_only_that_fields_error() {
    let mut form = FormState::new("Beta");
    form.set_field(FieldKey::NewAdmissions, "abc");
    form.set_field(FieldKey::OccupancyRate, "300");
    assert!(form.submit().is_err());
    assert_eq!(form.report().len(), 7);

    // Still invalid, but the error is cleared optimistically.
    form.set_field(FieldKey::OccupancyRate, "400");
    assert_eq!(form.report().get(FieldKey::OccupancyRate), None);
    assert_eq!(
        form.report().get(FieldKey::NewAdmissions),
        Some(FieldError::MissingOrNonNumeric)
    );
    assert_eq!(form.report().len(), 6);
}

#[test]
fn correcting_admissions_then_resubmitting() {
    let mut form = FormState::new("Gamma");
    fill_valid(&mut form);
    form.set_field(FieldKey::NewAdmissions, "250");

    let report = form.submit().unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(
        report.get(FieldKey::NewAdmissions).unwrap().to_string(),
        "Value must be between 0 and 200"
    );

    form.set_field(FieldKey::NewAdmissions, "45");
    let snapshot = form.submit().unwrap();
    assert_eq!(snapshot.values.new_admissions, "45");
    assert_eq!(snapshot.hospital, "Gamma");
    assert_eq!(form.phase(), Phase::Submitted);
    assert!(form.report().is_empty());
}

#[test]
fn snapshot_is_frozen_against_later_edits() {
    let mut form = FormState::new("Delta");
    fill_valid(&mut form);
    form.submit().unwrap();

    form.set_field(FieldKey::OccupancyRate, "12");
    assert_eq!(form.values().occupancy_rate, "12");
    assert_eq!(form.snapshot().unwrap().values.occupancy_rate, "85.5");
    assert_eq!(form.phase(), Phase::Submitted);
}

#[test]
fn failed_resubmit_keeps_previous_snapshot() {
    let mut form = FormState::new("Delta");
    fill_valid(&mut form);
    let first = form.submit().unwrap().id;

    form.set_field(FieldKey::BedsPerDoctor, "ten to one");
    assert!(form.submit().is_err());
    assert_eq!(form.phase(), Phase::Submitted);
    assert_eq!(form.snapshot().unwrap().id, first);
}

#[test]
fn next_submission_supersedes_snapshot() {
    let mut form = FormState::new("Epsilon");
    fill_valid(&mut form);
    let first = form.submit().unwrap().id;

    form.set_field(FieldKey::WeatherCondition, "Snow");
    let second = form.submit().unwrap();
    assert_ne!(second.id, first);
    assert_eq!(second.values.weather_condition, "Snow");
}

#[test]
fn new_entry_resets_everything() {
    let mut form = FormState::new("Alpha");
    fill_valid(&mut form);
    form.submit().unwrap();

    form.new_entry();
    assert_eq!(form.phase(), Phase::Editing);
    assert!(form.values().is_blank());
    assert!(form.report().is_empty());
    assert!(form.snapshot().is_none());
}
