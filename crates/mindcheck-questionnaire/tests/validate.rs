use mindcheck_questionnaire::error::{AgeProblem, ValidationError};
use mindcheck_questionnaire::items::{AGE_KEY_ALIAS, FEATURE_NAMES};
use mindcheck_questionnaire::{AnswerSheet, AnswerValue, validate};

fn sheet(age: &str, rest: &str) -> Vec<AnswerValue> {
    let mut answers = vec![AnswerValue::from(age)];
    answers.extend(std::iter::repeat_n(AnswerValue::from(rest), 27));
    answers
}

fn parse(json: &str) -> Vec<AnswerValue> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn accepts_mixed_tokens_and_encodes_them() {
    let mut answers = sheet("30", "no");
    answers[1] = AnswerValue::from("YES");
    answers[2] = AnswerValue::from("True");
    answers[3] = AnswerValue::from("1");
    answers[4] = AnswerValue::from("False");
    answers[5] = AnswerValue::from("0");

    let vector = validate(&answers).unwrap();
    let values = vector.as_slice();

    assert_eq!(values.len(), 28);
    assert_eq!(vector.age(), 30.0);
    assert_eq!(&values[1..6], &[1.0, 1.0, 1.0, 0.0, 0.0]);
    assert!(values[1..].iter().all(|v| *v == 0.0 || *v == 1.0));
}

#[test]
fn accepts_json_booleans_and_numbers() {
    let mut json = String::from("[42.5, true, false, 1, 0");
    for _ in 0..23 {
        json.push_str(", \"no\"");
    }
    json.push(']');

    let vector = validate(&parse(&json)).unwrap();
    assert_eq!(vector.age(), 42.5);
    assert_eq!(&vector.as_slice()[1..5], &[1.0, 0.0, 1.0, 0.0]);
}

#[test]
fn age_bounds_are_inclusive() {
    assert_eq!(validate(&sheet("0", "no")).unwrap().age(), 0.0);
    assert_eq!(validate(&sheet("100", "no")).unwrap().age(), 100.0);
    assert_eq!(validate(&sheet(" 27 ", "no")).unwrap().age(), 27.0);
}

#[test]
fn wrong_length_is_rejected_regardless_of_content() {
    for len in [0, 1, 27, 29, 56] {
        let answers = vec![AnswerValue::from("yes"); len];
        assert_eq!(
            validate(&answers),
            Err(ValidationError::WrongLength { actual: len })
        );
    }
    assert_eq!(
        ValidationError::WrongLength { actual: 3 }.to_string(),
        "28 answers are required"
    );
}

#[test]
fn out_of_range_age_is_rejected() {
    for age in ["-1", "100.5", "250"] {
        let err = validate(&sheet(age, "no")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidAge(AgeProblem::OutOfRange));
    }
    assert_eq!(
        ValidationError::InvalidAge(AgeProblem::OutOfRange).to_string(),
        "Age must be between 0 and 100."
    );
}

#[test]
fn non_numeric_age_is_rejected() {
    for age in ["thirty", "", "NaN", "inf"] {
        let err = validate(&sheet(age, "no")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidAge(AgeProblem::NotNumeric));
    }

    let mut answers = sheet("30", "no");
    answers[0] = AnswerValue::Flag(true);
    assert_eq!(
        validate(&answers),
        Err(ValidationError::InvalidAge(AgeProblem::NotNumeric))
    );
}

#[test]
fn unknown_token_reports_one_based_position() {
    let mut answers = sheet("30", "no");
    answers[5] = AnswerValue::from("maybe");
    answers[9] = AnswerValue::from("perhaps");

    let err = validate(&answers).unwrap_err();
    assert_eq!(err, ValidationError::InvalidAnswer { index: 5 });
    assert_eq!(err.to_string(), "Invalid answer at position 6");
}

#[test]
fn null_and_float_indicators_are_rejected() {
    let mut answers = sheet("30", "no");
    answers[1] = AnswerValue::Null;
    assert_eq!(
        validate(&answers),
        Err(ValidationError::InvalidAnswer { index: 1 })
    );

    let mut json = String::from("[30, 1.0");
    for _ in 0..26 {
        json.push_str(", 0");
    }
    json.push(']');
    assert_eq!(
        validate(&parse(&json)),
        Err(ValidationError::InvalidAnswer { index: 1 })
    );
}

#[test]
fn named_sheet_is_reordered() {
    let mut object = serde_json::Map::new();
    for name in FEATURE_NAMES.iter().rev() {
        object.insert(name.to_string(), serde_json::json!("no"));
    }
    object.insert("age".to_string(), serde_json::json!(55));
    object.insert("panic".to_string(), serde_json::json!("yes"));
    object.insert("unrelated".to_string(), serde_json::json!("ignored"));

    let sheet: AnswerSheet = serde_json::from_value(serde_json::Value::Object(object)).unwrap();
    let vector = validate(&sheet.into_ordered().unwrap()).unwrap();

    assert_eq!(vector.age(), 55.0);
    assert_eq!(vector.as_slice()[2], 1.0);
    assert_eq!(vector.as_slice()[1], 0.0);
}

#[test]
fn named_sheet_lists_missing_features() {
    let sheet: AnswerSheet = serde_json::from_str(r#"{"age": 30, "panic": "no"}"#).unwrap();
    let err = sheet.into_ordered().unwrap_err();

    let ValidationError::MissingFeatures(missing) = &err else {
        panic!("expected missing features, got {err:?}");
    };
    assert_eq!(missing.len(), 26);
    assert_eq!(missing[0], "feeling.nervous");
    assert!(err.to_string().starts_with("Missing features: feeling.nervous, breathing.rapidly"));
}

fn positional_json(age: serde_json::Value, second: serde_json::Value) -> String {
    let mut values = vec![age, second];
    values.extend(std::iter::repeat_n(serde_json::json!("no"), 26));
    serde_json::Value::Array(values).to_string()
}

#[test]
fn nested_values_fail_at_their_position() {
    let json = positional_json(serde_json::json!("30"), serde_json::json!(["yes"]));
    let sheet: AnswerSheet = serde_json::from_str(&json).unwrap();
    let err = validate(&sheet.into_ordered().unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid answer at position 2");

    let json = positional_json(serde_json::json!({ "years": 30 }), serde_json::json!("yes"));
    let sheet: AnswerSheet = serde_json::from_str(&json).unwrap();
    let err = validate(&sheet.into_ordered().unwrap()).unwrap_err();
    assert_eq!(err, ValidationError::InvalidAge(AgeProblem::NotNumeric));
    assert_eq!(err.to_string(), "Age must be a numeric value.");
}

#[test]
fn named_sheet_ignores_structured_extra_keys() {
    let mut object = serde_json::Map::new();
    for name in FEATURE_NAMES {
        object.insert(name.to_string(), serde_json::json!("yes"));
    }
    object.insert("age".to_string(), serde_json::json!(30));
    object.insert("meta".to_string(), serde_json::json!({ "client": "web" }));

    let sheet: AnswerSheet = serde_json::from_value(serde_json::Value::Object(object)).unwrap();
    let vector = validate(&sheet.into_ordered().unwrap()).unwrap();
    assert_eq!(vector.age(), 30.0);
    assert!(vector.as_slice()[1..].iter().all(|v| *v == 1.0));
}

#[test]
fn named_sheet_accepts_legacy_age_key() {
    let mut object = serde_json::Map::new();
    for name in &FEATURE_NAMES[1..] {
        object.insert(name.to_string(), serde_json::json!("no"));
    }
    object.insert(AGE_KEY_ALIAS.to_string(), serde_json::json!("61"));

    let sheet: AnswerSheet = serde_json::from_value(serde_json::Value::Object(object)).unwrap();
    let vector = validate(&sheet.into_ordered().unwrap()).unwrap();
    assert_eq!(vector.age(), 61.0);
}
