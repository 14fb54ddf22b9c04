//! Input validation for record creation.
//!
//! # Responsibility
//! - Turn untrusted creation input into a proven-valid `TodoDraft`.
//! - Name the offending field and violated constraint on rejection.
//!
//! # Invariants
//! - `TodoDraft` fields are private; holding one proves validation passed.
//! - Validation is pure and never touches storage.

use crate::model::todo::MAX_TITLE_CHARS;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Constraint class violated by a rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Required field is absent, null, or blank after trimming.
    MissingField,
    /// Field exceeds its size bound.
    TooLong,
    /// Field is present but not textual.
    WrongType,
}

/// Rejection of one creation-input field.
///
/// Never retried automatically; the caller must supply corrected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub kind: ValidationErrorKind,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ValidationErrorKind::MissingField => {
                write!(f, "{}: required and must not be blank", self.field)
            }
            ValidationErrorKind::TooLong => {
                write!(
                    f,
                    "{}: must be at most {MAX_TITLE_CHARS} characters",
                    self.field
                )
            }
            ValidationErrorKind::WrongType => write!(f, "{}: must be a string", self.field),
        }
    }
}

impl Error for ValidationError {}

/// Validated creation request consumed by the store.
///
/// Only the validation entry points construct this type, so persistence
/// trusts it without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    title: String,
    description: Option<String>,
}

impl TodoDraft {
    /// Validates typed creation input.
    ///
    /// # Contract
    /// - `title` must be non-blank after trimming and at most
    ///   `MAX_TITLE_CHARS` characters.
    /// - The accepted title is kept verbatim, untrimmed.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError {
                field: "title",
                kind: ValidationErrorKind::MissingField,
            });
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(ValidationError {
                field: "title",
                kind: ValidationErrorKind::TooLong,
            });
        }

        Ok(Self { title, description })
    }

    /// Validates a `{title, description?}` JSON payload object.
    ///
    /// Missing keys behave exactly like absent arguments to [`validate`].
    pub fn from_json(payload: &Value) -> Result<Self, ValidationError> {
        validate(payload.get("title"), payload.get("description"))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Validates untrusted creation input of unconstrained JSON shape.
///
/// # Contract
/// - `raw_title` must be a JSON string satisfying the [`TodoDraft::new`]
///   rules; absent and null are treated as missing.
/// - `raw_description` may be absent or null; when present it must be a
///   JSON string.
/// - Pure function; failures name the offending field.
pub fn validate(
    raw_title: Option<&Value>,
    raw_description: Option<&Value>,
) -> Result<TodoDraft, ValidationError> {
    let title = match raw_title {
        None | Some(Value::Null) => {
            return Err(ValidationError {
                field: "title",
                kind: ValidationErrorKind::MissingField,
            })
        }
        Some(Value::String(text)) => text.clone(),
        Some(_) => {
            return Err(ValidationError {
                field: "title",
                kind: ValidationErrorKind::WrongType,
            })
        }
    };

    let description = match raw_description {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => {
            return Err(ValidationError {
                field: "description",
                kind: ValidationErrorKind::WrongType,
            })
        }
    };

    TodoDraft::new(title, description)
}

#[cfg(test)]
mod tests {
    use super::{ValidationError, ValidationErrorKind};

    #[test]
    fn error_display_names_the_field() {
        let missing = ValidationError {
            field: "title",
            kind: ValidationErrorKind::MissingField,
        };
        assert_eq!(missing.to_string(), "title: required and must not be blank");

        let wrong_type = ValidationError {
            field: "description",
            kind: ValidationErrorKind::WrongType,
        };
        assert_eq!(wrong_type.to_string(), "description: must be a string");
    }

    #[test]
    fn too_long_display_states_the_bound() {
        let too_long = ValidationError {
            field: "title",
            kind: ValidationErrorKind::TooLong,
        };
        assert!(too_long.to_string().contains("100"));
    }
}
