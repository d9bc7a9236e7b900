//! Field-level validation rules for student drafts.
//!
//! The client evaluates these rules to block a submission before any request
//! is issued; the server evaluates the same rules to reject the payload with
//! per-field messages. One rule set, two call sites.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::student::StudentDraft;

/// Pattern a well-formed email address must match.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// Minimum length of a student name.
pub const NAME_MIN_LENGTH: usize = 2;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// All violations for one draft, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors(pub Vec<FieldViolation>);

impl FieldErrors {
    /// Message of the first violation, shown as the response summary.
    pub fn first_message(&self) -> Option<&str> {
        self.0.first().map(|v| v.message.as_str())
    }

    /// Violations grouped per field, in the shape clients expect under the
    /// `errors` key of a 422 response.
    pub fn by_field(&self) -> BTreeMap<&'static str, Vec<String>> {
        let mut map: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        for violation in &self.0 {
            map.entry(violation.field)
                .or_default()
                .push(violation.message.clone());
        }
        map
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|v| v.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Evaluate every field rule against a draft.
///
/// Returns all violations in field order; an empty result means the draft
/// may be submitted.
pub fn validate_draft(draft: &StudentDraft) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if draft.name.is_empty() {
        violations.push(violation("name", "Name is required"));
    } else if draft.name.len() < NAME_MIN_LENGTH {
        violations.push(violation("name", "Name must be at least 2 characters"));
    }

    if draft.email.is_empty() {
        violations.push(violation("email", "Email is required"));
    } else if !EMAIL_RE.is_match(&draft.email) {
        violations.push(violation("email", "Invalid email address"));
    }

    violations
}

/// Evaluate the field rules, packaging violations for error propagation.
pub fn check_draft(draft: &StudentDraft) -> Result<(), FieldErrors> {
    let violations = validate_draft(draft);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(FieldErrors(violations))
    }
}

fn violation(field: &'static str, message: &str) -> FieldViolation {
    FieldViolation {
        field,
        message: message.to_string(),
    }
}
