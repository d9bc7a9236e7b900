//! Student entity and DTOs.

use serde::{Deserialize, Serialize};

use crate::types::{StudentId, Timestamp};

/// A student record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    /// Set by the server on creation; the client never fabricates it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Draft payload for creating or updating a student.
///
/// Carries no `id` -- the server assigns ids on create and matches them on
/// update. Missing fields deserialize to empty strings so the field rules
/// report them instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_deserializes_without_timestamps() {
        let student: Student =
            serde_json::from_str(r#"{"id":1,"name":"Ada","email":"ada@example.com"}"#).unwrap();
        assert_eq!(student.id, 1);
        assert_eq!(student.name, "Ada");
        assert!(student.created_at.is_none());
    }

    #[test]
    fn draft_serializes_without_id() {
        let draft = StudentDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
    }

    #[test]
    fn draft_defaults_missing_fields_to_empty() {
        let draft: StudentDraft = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.email, "");
    }
}
