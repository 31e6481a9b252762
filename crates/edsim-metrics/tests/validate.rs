use edsim_core::{FieldKey, FormValues, WeatherCondition};
use edsim_metrics::{validate_field, validate_form, FieldError, FieldValue};

const NUMERIC_FIELDS: [FieldKey; 5] = [
    FieldKey::NewAdmissions,
    FieldKey::OccupancyRate,
    FieldKey::NextDayDischarge,
    FieldKey::SameDayDischarge,
    FieldKey::HighUrgencyPercentage,
];

fn valid_form() -> FormValues {
    FormValues {
        new_admissions: "45".to_string(),
        occupancy_rate: "85.5".to_string(),
        next_day_discharge: "35".to_string(),
        same_day_discharge: "12".to_string(),
        beds_per_doctor: "10:1".to_string(),
        high_urgency_percentage: "28".to_string(),
        weather_condition: "Clear".to_string(),
    }
}

#[test]
fn unparseable_numbers_are_missing_or_non_numeric() {
    for key in NUMERIC_FIELDS {
        for raw in ["", "   ", "abc", "12abc", "1,5", "NaN", "inf", "-infinity"] {
            assert_eq!(
                validate_field(key.spec(), raw),
                Err(FieldError::MissingOrNonNumeric),
                "{key} with {raw:?}"
            );
        }
    }
}

#[test]
fn range_error_only_after_parse() {
    for key in NUMERIC_FIELDS {
        let spec = key.spec();
        let over = format!("{}", spec.max + 0.1);
        assert_eq!(
            validate_field(spec, &over),
            Err(FieldError::OutOfRange { min: spec.min, max: spec.max }),
            "{key}"
        );
        assert_eq!(
            validate_field(spec, "-0.5"),
            Err(FieldError::OutOfRange { min: spec.min, max: spec.max }),
            "{key}"
        );
        assert_eq!(validate_field(spec, "0"), Ok(FieldValue::Number(0.0)), "{key}");
        assert_eq!(
            validate_field(spec, &format!("{}", spec.max)),
            Ok(FieldValue::Number(spec.max)),
            "{key}"
        );
    }
}

#[test]
fn numeric_parse_is_decimal_and_trims() {
    let spec = FieldKey::OccupancyRate.spec();
    assert_eq!(validate_field(spec, " 85.5 "), Ok(FieldValue::Number(85.5)));
    assert_eq!(validate_field(spec, "1e1"), Ok(FieldValue::Number(10.0)));
    assert_eq!(validate_field(spec, ".5"), Ok(FieldValue::Number(0.5)));
}

#[test]
fn out_of_range_message_uses_field_bounds() {
    let err = validate_field(FieldKey::NewAdmissions.spec(), "250").unwrap_err();
    assert_eq!(err.to_string(), "Value must be between 0 and 200");

    let err = validate_field(FieldKey::SameDayDischarge.spec(), "101").unwrap_err();
    assert_eq!(err.to_string(), "Value must be between 0 and 100");

    let err = validate_field(FieldKey::NewAdmissions.spec(), "").unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid number");
}

#[test]
fn ratio_must_match_digits_colon_digits() {
    let spec = FieldKey::BedsPerDoctor.spec();
    assert_eq!(
        validate_field(spec, "10:1"),
        Ok(FieldValue::Ratio { beds: 10, doctors: 1 })
    );
    assert_eq!(
        validate_field(spec, "0:0"),
        Ok(FieldValue::Ratio { beds: 0, doctors: 0 })
    );

    for raw in ["", "10:1:2", "a:1", "10-1", "10:", ":1", " 10:1", "10:1 ", "10.5:1", "+10:1", "١٠:١"] {
        assert_eq!(validate_field(spec, raw), Err(FieldError::MalformedRatio), "{raw:?}");
    }

    let err = validate_field(spec, "10/1").unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid ratio (e.g., 10:1)");
}

#[test]
fn oversized_ratio_still_matches() {
    let spec = FieldKey::BedsPerDoctor.spec();
    assert_eq!(
        validate_field(spec, "99999999999999999999999:1"),
        Ok(FieldValue::Ratio { beds: u64::MAX, doctors: 1 })
    );
}

#[test]
fn weather_must_be_one_of_the_options() {
    let spec = FieldKey::WeatherCondition.spec();
    assert_eq!(
        validate_field(spec, "Severe"),
        Ok(FieldValue::Weather(WeatherCondition::Severe))
    );
    for raw in ["", "Hail", "clear"] {
        assert_eq!(validate_field(spec, raw), Err(FieldError::MissingSelection), "{raw:?}");
    }
    assert_eq!(
        FieldError::MissingSelection.to_string(),
        "Please select a weather condition"
    );
}

#[test]
fn valid_form_has_empty_report() {
    assert!(validate_form(&valid_form()).is_empty());
}

#[test]
fn blank_form_reports_every_field() {
    let report = validate_form(&FormValues::default());
    assert_eq!(report.len(), 7);

    let keys: Vec<_> = report.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, FieldKey::ALL);
    assert_eq!(report.get(FieldKey::BedsPerDoctor), Some(FieldError::MalformedRatio));
    assert_eq!(report.get(FieldKey::WeatherCondition), Some(FieldError::MissingSelection));
}

#[test]
fn fields_are_validated_independently() {
    let mut values = valid_form();
    values.set(FieldKey::NewAdmissions, "250");
    values.set(FieldKey::BedsPerDoctor, "ten");

    let report = validate_form(&values);
    assert_eq!(report.len(), 2);
    assert!(matches!(
        report.get(FieldKey::NewAdmissions),
        Some(FieldError::OutOfRange { .. })
    ));
    assert_eq!(report.get(FieldKey::BedsPerDoctor), Some(FieldError::MalformedRatio));
    assert_eq!(report.get(FieldKey::OccupancyRate), None);
}

#[test]
fn report_serializes_by_field_name() {
    let mut values = valid_form();
    values.set(FieldKey::OccupancyRate, "120");

    let json = serde_json::to_value(validate_form(&values)).unwrap();
    assert_eq!(json["errors"]["occupancyRate"]["kind"], "out_of_range");
    assert_eq!(json["errors"]["occupancyRate"]["max"], 100.0);
}
