use edsim_core::{find_hospital, FieldKey, FormValues, SubmissionSnapshot, ValueKind, WeatherCondition, HOSPITALS};

#[test]
fn field_specs_are_in_display_order() {
    for (i, key) in FieldKey::ALL.into_iter().enumerate() {
        assert_eq!(key.index(), i);
        assert_eq!(key.spec().key, key);
    }
}

#[test]
fn numeric_bounds_match_form_hints() {
    let admissions = FieldKey::NewAdmissions.spec();
    assert_eq!(admissions.kind, ValueKind::Numeric);
    assert_eq!((admissions.min, admissions.max), (0.0, 200.0));

    for key in [
        FieldKey::OccupancyRate,
        FieldKey::NextDayDischarge,
        FieldKey::SameDayDischarge,
        FieldKey::HighUrgencyPercentage,
    ] {
        let spec = key.spec();
        assert_eq!(spec.kind, ValueKind::Numeric, "{key}");
        assert_eq!((spec.min, spec.max), (0.0, 100.0), "{key}");
        assert_eq!(spec.suffix, Some("%"), "{key}");
    }

    assert_eq!(FieldKey::BedsPerDoctor.spec().kind, ValueKind::Ratio);
    assert_eq!(FieldKey::WeatherCondition.spec().kind, ValueKind::Enum);
}

#[test]
fn field_key_parses_common_spellings() {
    assert_eq!("occupancyRate".parse::<FieldKey>().unwrap(), FieldKey::OccupancyRate);
    assert_eq!("occupancy_rate".parse::<FieldKey>().unwrap(), FieldKey::OccupancyRate);
    assert_eq!("beds-per-doctor".parse::<FieldKey>().unwrap(), FieldKey::BedsPerDoctor);
    assert_eq!("WEATHERCONDITION".parse::<FieldKey>().unwrap(), FieldKey::WeatherCondition);
    assert!("occupancy".parse::<FieldKey>().is_err());
}

#[test]
fn field_key_serializes_camel_case() {
    let json = serde_json::to_string(&FieldKey::HighUrgencyPercentage).unwrap();
    assert_eq!(json, "\"highUrgencyPercentage\"");
}

#[test]
fn weather_exact_and_loose_parsing() {
    assert_eq!("Snow".parse::<WeatherCondition>().unwrap(), WeatherCondition::Snow);
    assert!("snow".parse::<WeatherCondition>().is_err());
    assert_eq!(WeatherCondition::parse_loose(" severe "), Some(WeatherCondition::Severe));
    assert_eq!(WeatherCondition::parse_loose("Hail"), None);
}

#[test]
fn catalog_has_five_fixed_hospitals() {
    let names: Vec<_> = HOSPITALS.iter().map(|h| h.name).collect();
    assert_eq!(names, ["Alpha", "Beta", "Gamma", "Delta", "Epsilon"]);
    assert_eq!(HOSPITALS[0].kind, "Trauma Center");
    assert_eq!(HOSPITALS[4].description, "Good Staffing");
}

#[test]
fn find_hospital_by_name_or_position() {
    assert_eq!(find_hospital("delta").unwrap().name, "Delta");
    assert_eq!(find_hospital("2").unwrap().name, "Beta");
    assert!(std::ptr::eq(find_hospital("Alpha").unwrap(), &HOSPITALS[0]));
    assert!(find_hospital("0").is_err());
    assert!(find_hospital("6").is_err());
    assert!(find_hospital("Zeta").is_err());
}

#[test]
fn hospital_kind_serializes_as_type() {
    let value = serde_json::to_value(&HOSPITALS[1]).unwrap();
    assert_eq!(value["type"], "Suburban Community");
    assert_eq!(value["accent"]["from"], "blue");
}

#[test]
fn form_values_set_and_iterate_in_order() {
    let mut values = FormValues::default();
    assert!(values.is_blank());

    values.set(FieldKey::BedsPerDoctor, "10:1");
    values.set(FieldKey::NewAdmissions, "45");
    assert_eq!(values.get(FieldKey::BedsPerDoctor), "10:1");
    assert!(!values.is_blank());

    let keys: Vec<_> = values.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, FieldKey::ALL);
    assert_eq!(values.iter().next(), Some((FieldKey::NewAdmissions, "45")));
}

#[test]
fn snapshot_copies_values() {
    let mut values = FormValues::default();
    values.set(FieldKey::NewAdmissions, "45");

    let snapshot = SubmissionSnapshot::capture("Alpha", &values);
    values.set(FieldKey::NewAdmissions, "99");

    assert_eq!(snapshot.values.new_admissions, "45");
    assert_eq!(snapshot.hospital, "Alpha");

    let json = snapshot.to_json().unwrap();
    assert!(json.contains("\"newAdmissions\": \"45\""));
}
