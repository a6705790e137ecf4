use chrono::NaiveDate;
use intake_core::{
    build_from_input, populate_fields, populate_fields_with_style, validate_all, DateStyle,
    Patient, PatientForm, PatientInput,
};

fn sample_input() -> PatientInput {
    PatientInput::new(
        "Ana Silva",
        "123.456.789-09",
        "ana@x.com",
        "(11)91234-5678",
        "15/05/1990",
    )
}

#[test]
fn build_copies_text_and_parses_birth_date() {
    let patient = build_from_input(&sample_input());

    assert_eq!(patient.id, None);
    assert_eq!(patient.name, "Ana Silva");
    assert_eq!(patient.cpf, "123.456.789-09");
    assert_eq!(patient.email, "ana@x.com");
    assert_eq!(patient.phone, "(11)91234-5678");
    assert_eq!(patient.birth_date, NaiveDate::from_ymd_opt(1990, 5, 15));
}

#[test]
fn build_keeps_text_verbatim_without_validation() {
    let input = PatientInput::new("  ana  ", "x", "y", "z", "15/05/1990");
    let patient = build_from_input(&input);
    assert_eq!(patient.name, "  ana  ");
    assert_eq!(patient.cpf, "x");
}

#[test]
fn unparsable_birth_date_leaves_date_unset() {
    let mut input = sample_input();
    input.birth_date = "not-a-date".to_string();

    let patient = build_from_input(&input);
    assert_eq!(patient.birth_date, None);
    assert_eq!(patient.name, "Ana Silva");
}

#[test]
fn calendar_invalid_birth_date_rolls_into_next_month() {
    let mut input = sample_input();
    input.birth_date = "31/04/1990".to_string();
    assert_eq!(validate_all(&input), Ok(()));

    let patient = build_from_input(&input);
    assert_eq!(patient.birth_date, NaiveDate::from_ymd_opt(1990, 5, 1));
    assert_eq!(patient.validate(), Ok(()));

    input.birth_date = "31/02/2024".to_string();
    assert_eq!(
        build_from_input(&input).birth_date,
        NaiveDate::from_ymd_opt(2024, 3, 2)
    );
}

#[test]
fn every_accepted_submission_keeps_its_birth_date() {
    for birth_date in ["29/02/2023", "30/02/2000", "31/06/1985", "31/09/2010", "31/11/1970"] {
        let mut input = sample_input();
        input.birth_date = birth_date.to_string();
        assert_eq!(validate_all(&input), Ok(()), "{birth_date} should validate");

        let patient = build_from_input(&input);
        assert!(patient.birth_date.is_some(), "{birth_date} should resolve");
        assert_eq!(patient.validate(), Ok(()), "{birth_date} should revalidate");
    }
}

#[test]
fn populate_renders_every_attribute() {
    let patient = build_from_input(&sample_input()).with_id(12);
    let mut form = PatientForm::default();
    populate_fields(&patient, &mut form);

    assert_eq!(form.id, "12");
    assert_eq!(form.name, "Ana Silva");
    assert_eq!(form.cpf, "123.456.789-09");
    assert_eq!(form.email, "ana@x.com");
    assert_eq!(form.phone, "(11)91234-5678");
    assert_eq!(form.birth_date, "15/05/1990");
}

#[test]
fn populate_then_build_round_trips() {
    let original = Patient {
        id: Some(3),
        name: "José Álvares".to_string(),
        cpf: "987.654.321-00".to_string(),
        email: "jose@clinica.com.br".to_string(),
        phone: "(21)99876-5432".to_string(),
        birth_date: NaiveDate::from_ymd_opt(2001, 1, 9),
    };

    let mut form = PatientForm::default();
    populate_fields(&original, &mut form);
    let rebuilt = build_from_input(&form.to_input());

    assert_eq!(rebuilt.name, original.name);
    assert_eq!(rebuilt.cpf, original.cpf);
    assert_eq!(rebuilt.email, original.email);
    assert_eq!(rebuilt.phone, original.phone);
    assert_eq!(rebuilt.birth_date, original.birth_date);
    assert_eq!(rebuilt.id, None);
}

#[test]
fn locale_short_rendering_does_not_parse_back() {
    let original = build_from_input(&sample_input());
    let mut form = PatientForm::default();
    populate_fields_with_style(&original, &mut form, DateStyle::LocaleShort);

    assert_eq!(form.birth_date, "15/05/90 00:00");
    assert_eq!(build_from_input(&form.to_input()).birth_date, None);
}

#[test]
fn patient_serializes_with_iso_birth_date() {
    let patient = build_from_input(&sample_input()).with_id(5);
    let json = serde_json::to_value(&patient).expect("serialize patient");

    assert_eq!(json["id"], 5);
    assert_eq!(json["cpf"], "123.456.789-09");
    assert_eq!(json["birth_date"], "1990-05-15");

    let decoded: Patient = serde_json::from_value(json).expect("deserialize patient");
    assert_eq!(decoded, patient);
}

#[test]
fn patient_without_birth_date_serializes_null() {
    let patient = Patient::default();
    let json = serde_json::to_value(&patient).expect("serialize patient");
    assert!(json["birth_date"].is_null());
    assert!(json["id"].is_null());
}
