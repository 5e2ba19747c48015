//! Todo request/response shapes and creation rules.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::DbId;
use crate::validation::{require_max_chars, require_not_blank, FieldError};

/// Maximum length of a todo title (characters).
pub const MAX_TITLE_LENGTH: u64 = 255;

pub const TITLE_BLANK_MESSAGE: &str = "must not be blank";
pub const TITLE_TOO_LONG_MESSAGE: &str = "must not exceed 255 characters";

/// Value stored for `completed` when the caller leaves it out.
pub const DEFAULT_COMPLETED: bool = false;

/// Body of `POST /api/todos`.
///
/// `title` is optional at the type level so that a missing title surfaces
/// as a field violation instead of a deserialization failure. Only a JSON
/// object is accepted; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl<'de> Deserialize<'de> for CreateTodoRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CreateTodoRequestVisitor)
    }
}

struct CreateTodoRequestVisitor;

impl<'de> Visitor<'de> for CreateTodoRequestVisitor {
    type Value = CreateTodoRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a todo object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut title: Option<Option<String>> = None;
        let mut description: Option<Option<String>> = None;
        let mut completed: Option<Option<bool>> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "title" => set_once::<_, A::Error>(&mut title, "title", map.next_value()?)?,
                "description" => {
                    set_once::<_, A::Error>(&mut description, "description", map.next_value()?)?
                }
                "completed" => {
                    set_once::<_, A::Error>(&mut completed, "completed", map.next_value()?)?
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(CreateTodoRequest {
            title: title.flatten(),
            description: description.flatten(),
            completed: completed.flatten(),
        })
    }
}

/// Store a field's value, rejecting a key that appears twice.
fn set_once<T, E: de::Error>(
    slot: &mut Option<Option<T>>,
    field: &'static str,
    value: Option<T>,
) -> Result<(), E> {
    if slot.is_some() {
        return Err(E::duplicate_field(field));
    }
    *slot = Some(value);
    Ok(())
}

impl CreateTodoRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// The completion flag to persist: the caller's value, or `false`.
    pub fn completed_or_default(&self) -> bool {
        self.completed.unwrap_or(DEFAULT_COMPLETED)
    }
}

/// Representation of a created todo returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Check every creation rule and return all violations, in rule order.
///
/// An empty `Vec` means the request may be handed to the service.
pub fn validate_create_todo(request: &CreateTodoRequest) -> Vec<FieldError> {
    let title = request.title.as_ref();

    [
        require_not_blank("title", title, TITLE_BLANK_MESSAGE),
        require_max_chars("title", title, MAX_TITLE_LENGTH, TITLE_TOO_LONG_MESSAGE),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_errors(errors: &[FieldError]) -> Vec<&str> {
        errors
            .iter()
            .filter(|e| e.field == "title")
            .map(|e| e.message.as_str())
            .collect()
    }

    #[test]
    fn valid_title_has_no_violations() {
        assert!(validate_create_todo(&CreateTodoRequest::new("Buy groceries")).is_empty());
    }

    #[test]
    fn title_of_exactly_max_length_is_valid() {
        let request = CreateTodoRequest::new("a".repeat(255));
        assert!(validate_create_todo(&request).is_empty());
    }

    #[test]
    fn missing_title_is_blank() {
        let request = CreateTodoRequest {
            description: Some("Some description".into()),
            ..CreateTodoRequest::default()
        };
        assert_eq!(title_errors(&validate_create_todo(&request)), vec![TITLE_BLANK_MESSAGE]);
    }

    #[test]
    fn whitespace_title_is_blank() {
        let errors = validate_create_todo(&CreateTodoRequest::new("   "));
        assert_eq!(errors, vec![FieldError::new("title", "must not be blank")]);
    }

    #[test]
    fn overlong_title_mentions_limit() {
        let errors = validate_create_todo(&CreateTodoRequest::new("a".repeat(256)));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
        assert!(errors[0].message.contains("255"));
    }

    #[test]
    fn overlong_blank_title_reports_both_rules() {
        let errors = validate_create_todo(&CreateTodoRequest::new(" ".repeat(256)));
        assert_eq!(
            title_errors(&errors),
            vec![TITLE_BLANK_MESSAGE, TITLE_TOO_LONG_MESSAGE]
        );
    }

    #[test]
    fn too_long_message_matches_limit() {
        assert!(TITLE_TOO_LONG_MESSAGE.contains(&MAX_TITLE_LENGTH.to_string()));
    }

    #[test]
    fn description_and_completed_are_unconstrained() {
        let request = CreateTodoRequest {
            title: Some("Read".into()),
            description: Some("x".repeat(10_000)),
            completed: Some(true),
        };
        assert!(validate_create_todo(&request).is_empty());
    }

    #[test]
    fn completed_defaults_to_false() {
        assert!(!CreateTodoRequest::new("a").completed_or_default());
        let explicit = CreateTodoRequest {
            completed: Some(true),
            ..CreateTodoRequest::new("a")
        };
        assert!(explicit.completed_or_default());
    }

    #[test]
    fn request_deserializes_with_absent_and_null_fields() {
        let request: CreateTodoRequest =
            serde_json::from_str(r#"{"description":null,"completed":null}"#).unwrap();
        assert_eq!(request, CreateTodoRequest::default());
    }

    #[test]
    fn request_deserializes_object_fields() {
        let request: CreateTodoRequest = serde_json::from_str(
            r#"{"title":"Read a book","description":"Finish chapter 5","completed":true,"extra":[1]}"#,
        )
        .unwrap();
        assert_eq!(
            request,
            CreateTodoRequest {
                title: Some("Read a book".into()),
                description: Some("Finish chapter 5".into()),
                completed: Some(true),
            }
        );
    }

    #[test]
    fn request_rejects_non_object_bodies() {
        for body in [r#"["Buy groceries", null, true]"#, "[]", r#""title""#, "42", "null"] {
            assert!(
                serde_json::from_str::<CreateTodoRequest>(body).is_err(),
                "{body} should not deserialize"
            );
        }
    }

    #[test]
    fn request_rejects_duplicate_keys() {
        let result = serde_json::from_str::<CreateTodoRequest>(r#"{"title":"a","title":"b"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn request_rejects_wrong_field_types() {
        let result = serde_json::from_str::<CreateTodoRequest>(r#"{"title":"a","completed":"yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn title_length_counts_characters_not_utf16_units() {
        // Each emoji is one char but two UTF-16 units.
        let request = CreateTodoRequest::new("\u{1F600}".repeat(200));
        assert!(validate_create_todo(&request).is_empty());

        let over = CreateTodoRequest::new("\u{1F600}".repeat(256));
        assert_eq!(title_errors(&validate_create_todo(&over)), vec![TITLE_TOO_LONG_MESSAGE]);
    }

    #[test]
    fn response_serializes_null_description() {
        let response = TodoResponse {
            id: 7,
            title: "Buy groceries".into(),
            description: None,
            completed: false,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "title": "Buy groceries",
                "description": null,
                "completed": false
            })
        );
    }
}
