//! Record construction from untyped input and rendering of validation
//! failures.
//!
//! Record shapes derive [`validator::Validate`] for their per-field
//! constraints. This module turns a JSON object into such a record and
//! flattens any [`ValidationErrors`] tree into a single message naming each
//! offending field path and constraint.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;

/// Key `validator` uses for struct-level (schema) errors.
const SCHEMA_KEY: &str = "__all__";

/// Param naming the field a struct-level error is about.
const FIELD_PARAM: &str = "field";

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Build a validated record from a JSON object.
///
/// Deserialization failures (missing fields, wrong types, unknown enum
/// values) and constraint failures are both reported as
/// [`CoreError::Validation`].
pub fn from_value<T>(value: serde_json::Value) -> Result<T, CoreError>
where
    T: DeserializeOwned + Validate,
{
    let record: T =
        serde_json::from_value(value).map_err(|e| CoreError::Validation(e.to_string()))?;
    check(&record)?;
    Ok(record)
}

/// Run the derived constraints of an already-deserialized record.
pub fn check<T: Validate>(record: &T) -> Result<(), CoreError> {
    record
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Convert a failed domain rule into a struct-level `validator` error.
///
/// Cross-field rules run as `#[validate(schema(...))]` checks, which
/// `validator` files under a single struct-level key. `field` is recorded as
/// a param so the rendered message still points at the offending field.
pub fn rule_error(field: &'static str, code: &'static str, err: CoreError) -> ValidationError {
    let CoreError::Validation(msg) = err;
    let mut error = ValidationError::new(code).with_message(Cow::Owned(msg));
    error.add_param(Cow::Borrowed(FIELD_PARAM), &field);
    error
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Flatten a validation error tree into `path: constraint` entries joined by
/// `"; "`. Entries are sorted so the output is stable.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut entries = Vec::new();
    collect(errors, "", &mut entries);
    entries.sort();
    entries.join("; ")
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let field = field.to_string();
        let path = if field == SCHEMA_KEY {
            prefix.to_string()
        } else {
            join_path(prefix, &field)
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                for err in errs {
                    let err_path = match err.params.get(FIELD_PARAM) {
                        Some(serde_json::Value::String(name)) if field == SCHEMA_KEY => {
                            join_path(prefix, name)
                        }
                        _ => path.clone(),
                    };
                    let text = describe_error(err);
                    if err_path.is_empty() {
                        out.push(text);
                    } else {
                        out.push(format!("{err_path}: {text}"));
                    }
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

/// Human-readable text for one failed constraint.
fn describe_error(err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }

    let param = |name: &str| err.params.get(name).map(ToString::to_string);

    match err.code.as_ref() {
        "email" => "must be a valid email address".to_string(),
        "length" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("length must be between {min} and {max}"),
            (Some(min), None) => format!("length must be at least {min}"),
            (None, Some(max)) => format!("length must be at most {max}"),
            (None, None) => "invalid length".to_string(),
        },
        "range" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("must be between {min} and {max}"),
            (Some(min), None) => format!("must be greater than or equal to {min}"),
            (None, Some(max)) => format!("must be less than or equal to {max}"),
            (None, None) => "out of range".to_string(),
        },
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Whitespace trimming
// ---------------------------------------------------------------------------

/// Deserialize a string with surrounding whitespace removed.
///
/// Use with `#[serde(deserialize_with = "trimmed")]`.
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

/// Optional variant of [`trimmed`].
///
/// Use with `#[serde(default, deserialize_with = "trimmed_opt")]` so a
/// missing field still deserializes to `None`.
pub fn trimmed_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|s| s.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[derive(Debug, Deserialize, Validate)]
    struct Child {
        #[validate(range(min = 1))]
        order: i32,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Parent {
        #[serde(deserialize_with = "trimmed")]
        #[validate(length(max = 5))]
        name: String,
        #[validate(email)]
        email: String,
        #[serde(default, deserialize_with = "trimmed_opt")]
        note: Option<String>,
        #[validate(nested)]
        children: Vec<Child>,
    }

    fn parent(name: &str, email: &str, orders: &[i32]) -> serde_json::Value {
        let children: Vec<_> = orders.iter().map(|o| json!({ "order": o })).collect();
        json!({ "name": name, "email": email, "children": children })
    }

    #[test]
    fn valid_input_constructs_record() {
        let record: Parent = from_value(parent("abc", "a@b.com", &[1, 2])).unwrap();
        assert_eq!(record.name, "abc");
        assert_eq!(record.children.len(), 2);
        assert!(record.note.is_none());
    }

    #[test]
    fn whitespace_is_trimmed_before_length_check() {
        let record: Parent = from_value(parent("  abcde  ", "a@b.com", &[])).unwrap();
        assert_eq!(record.name, "abcde");
    }

    #[test]
    fn optional_string_is_trimmed() {
        let mut input = parent("abc", "a@b.com", &[]);
        input["note"] = json!("  hi ");
        let record: Parent = from_value(input).unwrap();
        assert_eq!(record.note.as_deref(), Some("hi"));
    }

    #[test]
    fn missing_field_is_a_validation_error() {
        let err = from_value::<Parent>(json!({ "name": "abc" })).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("email"));
    }

    #[test]
    fn field_errors_name_the_field() {
        let err = from_value::<Parent>(parent("abcdefg", "a@b.com", &[])).unwrap_err();
        assert_eq!(err.message(), "name: length must be at most 5");
    }

    #[test]
    fn bad_email_is_reported() {
        let err = from_value::<Parent>(parent("abc", "not-an-email", &[])).unwrap_err();
        assert_eq!(err.message(), "email: must be a valid email address");
    }

    #[test]
    fn nested_list_errors_carry_the_index() {
        let err = from_value::<Parent>(parent("abc", "a@b.com", &[1, 0])).unwrap_err();
        assert_eq!(
            err.message(),
            "children[1].order: must be greater than or equal to 1"
        );
    }

    #[test]
    fn multiple_errors_are_sorted_and_joined() {
        let err = from_value::<Parent>(parent("abcdefg", "nope", &[])).unwrap_err();
        assert_eq!(
            err.message(),
            "email: must be a valid email address; name: length must be at most 5"
        );
    }

    #[derive(Debug, Deserialize, Validate)]
    #[validate(schema(function = "validate_window"))]
    struct Window {
        start: i32,
        end: i32,
    }

    fn validate_window(window: &Window) -> Result<(), ValidationError> {
        if window.end < window.start {
            return Err(rule_error(
                "end",
                "window_order",
                CoreError::Validation("end must not precede start".into()),
            ));
        }
        Ok(())
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Calendar {
        #[validate(nested)]
        windows: Vec<Window>,
    }

    #[test]
    fn rule_error_keeps_the_rule_message() {
        let err = rule_error("end", "custom", CoreError::Validation("broken rule".into()));
        assert_eq!(err.code, "custom");
        assert_eq!(describe_error(&err), "broken rule");
    }

    #[test]
    fn struct_level_rule_is_reported_against_its_field() {
        let err = from_value::<Window>(json!({ "start": 5, "end": 1 })).unwrap_err();
        assert_eq!(err.message(), "end: end must not precede start");
    }

    #[test]
    fn nested_struct_level_rule_keeps_the_list_path() {
        let err = from_value::<Calendar>(json!({
            "windows": [{ "start": 1, "end": 2 }, { "start": 3, "end": 0 }],
        }))
        .unwrap_err();
        assert_eq!(err.message(), "windows[1].end: end must not precede start");
    }
}
