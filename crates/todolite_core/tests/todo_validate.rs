use serde_json::json;
use todolite_core::{validate, TodoDraft, ValidationError, ValidationErrorKind};

#[test]
fn valid_input_round_trips_into_draft() {
    let title = json!("Buy milk");
    let description = json!("2 liters");

    let draft = validate(Some(&title), Some(&description)).unwrap();
    assert_eq!(draft.title(), "Buy milk");
    assert_eq!(draft.description(), Some("2 liters"));
}

#[test]
fn description_defaults_to_absent() {
    let title = json!("Walk dog");

    let draft = validate(Some(&title), None).unwrap();
    assert_eq!(draft.description(), None);
}

#[test]
fn null_description_is_treated_as_absent() {
    let title = json!("Walk dog");
    let description = json!(null);

    let draft = validate(Some(&title), Some(&description)).unwrap();
    assert_eq!(draft.description(), None);
}

#[test]
fn empty_title_is_missing_field() {
    let title = json!("");
    let description = json!("x");

    let err = validate(Some(&title), Some(&description)).unwrap_err();
    assert_eq!(
        err,
        ValidationError {
            field: "title",
            kind: ValidationErrorKind::MissingField,
        }
    );
}

#[test]
fn whitespace_only_title_is_missing_field() {
    let title = json!("   \t ");

    let err = validate(Some(&title), None).unwrap_err();
    assert_eq!(err.field, "title");
    assert_eq!(err.kind, ValidationErrorKind::MissingField);
}

#[test]
fn absent_title_is_missing_field() {
    let err = validate(None, None).unwrap_err();
    assert_eq!(err.field, "title");
    assert_eq!(err.kind, ValidationErrorKind::MissingField);
}

#[test]
fn null_title_is_missing_field() {
    let title = json!(null);

    let err = validate(Some(&title), None).unwrap_err();
    assert_eq!(err.field, "title");
    assert_eq!(err.kind, ValidationErrorKind::MissingField);
}

#[test]
fn title_over_100_chars_is_too_long() {
    let title = json!("a".repeat(101));

    let err = validate(Some(&title), None).unwrap_err();
    assert_eq!(
        err,
        ValidationError {
            field: "title",
            kind: ValidationErrorKind::TooLong,
        }
    );
}

#[test]
fn title_of_exactly_100_chars_is_accepted() {
    let title = "a".repeat(100);

    let draft = TodoDraft::new(title.clone(), None).unwrap();
    assert_eq!(draft.title(), title);
}

#[test]
fn length_bound_counts_characters_not_bytes() {
    // 100 two-byte characters: within the character bound even though the
    // byte length is 200.
    let title = "ä".repeat(100);

    let draft = TodoDraft::new(title.clone(), None).unwrap();
    assert_eq!(draft.title(), title);
}

#[test]
fn non_string_title_is_wrong_type() {
    let title = json!(42);

    let err = validate(Some(&title), None).unwrap_err();
    assert_eq!(
        err,
        ValidationError {
            field: "title",
            kind: ValidationErrorKind::WrongType,
        }
    );
}

#[test]
fn non_string_description_is_wrong_type() {
    let title = json!("ok");
    let description = json!(["not", "text"]);

    let err = validate(Some(&title), Some(&description)).unwrap_err();
    assert_eq!(err.field, "description");
    assert_eq!(err.kind, ValidationErrorKind::WrongType);
}

#[test]
fn title_is_kept_verbatim_untrimmed() {
    let draft = TodoDraft::new("  padded  ", None).unwrap();
    assert_eq!(draft.title(), "  padded  ");
}

#[test]
fn from_json_reads_payload_fields() {
    let payload = json!({"title": "Buy milk", "description": "2 liters"});

    let draft = TodoDraft::from_json(&payload).unwrap();
    assert_eq!(draft.title(), "Buy milk");
    assert_eq!(draft.description(), Some("2 liters"));
}

#[test]
fn from_json_missing_title_is_missing_field() {
    let payload = json!({"description": "x"});

    let err = TodoDraft::from_json(&payload).unwrap_err();
    assert_eq!(err.field, "title");
    assert_eq!(err.kind, ValidationErrorKind::MissingField);
}
