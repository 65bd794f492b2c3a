// tests/form_validation_tests.rs
mod common;

use common::*;
use kundali::form::{validate, Field};
use kundali::{ChartStyle, Language};

#[test]
fn valid_draft_passes_with_empty_error_map() {
  setup_tracing();
  let draft = sample_draft();

  let form = validate(&draft).expect("fully populated draft must validate");
  assert_eq!(form.name, "Asha Rao");
  assert_eq!(form.email, "asha@example.com");
  assert_eq!(form.birth_place, "Mysuru, Karnataka, India");
}

#[test]
fn each_missing_field_yields_exactly_that_key() {
  setup_tracing();

  let cases: Vec<(Field, Box<dyn Fn(&mut kundali::FormDraft)>)> = vec![
    (Field::Name, Box::new(|d| d.name.clear())),
    (Field::Email, Box::new(|d| d.email.clear())),
    (Field::Gender, Box::new(|d| d.gender = None)),
    (Field::BirthDate, Box::new(|d| d.birth_date = None)),
    (Field::BirthTime, Box::new(|d| d.birth_time = None)),
    (Field::BirthPlace, Box::new(|d| d.birth_place.clear())),
  ];

  for (field, blank) in cases {
    let mut draft = sample_draft();
    blank(&mut draft);

    let errors = validate(&draft).expect_err("draft with a blank field must fail");
    assert_eq!(errors.len(), 1, "only {field} should be flagged");
    assert!(errors.contains(field), "{field} should be flagged");
  }
}

#[test]
fn whitespace_only_text_fields_are_treated_as_missing() {
  let mut draft = sample_draft();
  draft.name = "   ".to_string();
  draft.birth_place = "\t".to_string();

  let errors = validate(&draft).expect_err("whitespace is not a value");
  assert_eq!(errors.len(), 2);
  assert!(errors.contains(Field::Name));
  assert!(errors.contains(Field::BirthPlace));
}

#[test]
fn malformed_email_gets_its_own_message() {
  for bad in ["not-an-email", "two@@ats.example", "no@dot", "spa ce@mail.com", "@missing.local"] {
    let mut draft = sample_draft();
    draft.email = bad.to_string();

    let errors = validate(&draft).expect_err("malformed email must fail");
    assert_eq!(errors.len(), 1, "{bad:?} should only flag the email field");
    assert_eq!(errors.message(Field::Email), Some("Please enter a valid email"));
  }
}

#[test]
fn empty_email_reports_required_not_invalid() {
  let mut draft = sample_draft();
  draft.email = "  ".to_string();

  let errors = validate(&draft).expect_err("blank email must fail");
  assert_eq!(errors.message(Field::Email), Some("Email is required"));
}

#[test]
fn all_fields_blank_flags_all_six_required_fields() {
  let draft = kundali::FormDraft::default();

  let errors = validate(&draft).expect_err("empty draft must fail");
  assert_eq!(errors.len(), 6);
  let flagged: Vec<Field> = errors.fields().collect();
  assert_eq!(
    flagged,
    vec![
      Field::Name,
      Field::Email,
      Field::Gender,
      Field::BirthDate,
      Field::BirthTime,
      Field::BirthPlace,
    ]
  );
}

#[test]
fn language_and_chart_style_defaults_never_block_validation() {
  let mut draft = sample_draft();
  draft.language = Language::default();
  draft.chart_style = ChartStyle::default();

  let form = validate(&draft).expect("defaults are always acceptable");
  assert_eq!(form.language, Language::English);
  assert_eq!(form.chart_style, ChartStyle::NorthIndian);
}

#[test]
fn validation_trims_text_fields_into_the_record() {
  let mut draft = sample_draft();
  draft.name = "  Asha Rao  ".to_string();
  draft.email = " asha@example.com ".to_string();

  let form = validate(&draft).expect("padded but valid");
  assert_eq!(form.name, "Asha Rao");
  assert_eq!(form.email, "asha@example.com");
}
