//! The students screen state machine.
//!
//! Owns everything the list+form screen displays: the fetched records, the
//! form draft, the edit target, the in-flight flag, and the error banner.
//! Network access goes through the injected [`StudentApi`]; destructive
//! actions go through the injected [`ConfirmPrompt`]. The list is replaced
//! wholesale by a re-fetch after every successful mutation; nothing is
//! patched locally.

use roster_core::student::{Student, StudentDraft};
use roster_core::types::StudentId;
use roster_core::validation::{validate_draft, FieldViolation};

use crate::api::StudentApi;
use crate::confirm::ConfirmPrompt;

/// Banner message when the initial or refresh fetch fails.
const FETCH_FAILED: &str = "Failed to fetch students";

/// Banner fallback when a create/update is rejected without a server message.
const OPERATION_FAILED: &str = "Operation failed";

/// Banner message when a delete is rejected.
const DELETE_FAILED: &str = "Failed to delete student";

/// Question asked before a delete proceeds.
const DELETE_CONFIRM: &str = "Are you sure you want to delete this student?";

/// State machine behind the students list+form screen.
///
/// At most one mutating request is in flight at a time: `loading` gates
/// [`submit`](Self::submit) and [`delete`](Self::delete) starts, and every
/// transition runs to completion before the next begins.
pub struct StudentsView<A, C> {
    api: A,
    confirm: C,
    students: Vec<Student>,
    form: StudentDraft,
    editing_id: Option<StudentId>,
    loading: bool,
    error: Option<String>,
}

impl<A: StudentApi, C: ConfirmPrompt> StudentsView<A, C> {
    pub fn new(api: A, confirm: C) -> Self {
        Self {
            api,
            confirm,
            students: Vec::new(),
            form: StudentDraft::default(),
            editing_id: None,
            loading: false,
            error: None,
        }
    }

    /// The last fetched list, in server order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// The current form draft.
    pub fn form(&self) -> &StudentDraft {
        &self.form
    }

    /// The record being edited; `None` means create mode.
    pub fn editing_id(&self) -> Option<StudentId> {
        self.editing_id
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Whether a request is in flight. The submit and delete controls are
    /// disabled while this is set.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The error banner, if the last operation failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Field-level messages for the current draft, re-evaluated on demand.
    /// Rendered directly under each field.
    pub fn field_errors(&self) -> Vec<FieldViolation> {
        validate_draft(&self.form)
    }

    /// Keystroke into the name field. Local, synchronous, non-blocking.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    /// Keystroke into the email field.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    /// Initial load of the list.
    pub async fn mount(&mut self) {
        self.loading = true;
        self.fetch_students().await;
        self.loading = false;
    }

    /// Submit the form: update when editing, create otherwise.
    ///
    /// No-op while a request is in flight. Field rule violations block the
    /// submission entirely; no request is issued. On success the form resets
    /// to create mode and the list is re-fetched; on failure the form and
    /// mode are left untouched so the user can retry.
    pub async fn submit(&mut self) {
        if self.loading {
            return;
        }
        if !self.field_errors().is_empty() {
            return;
        }

        self.loading = true;
        self.error = None;

        let result = match self.editing_id {
            Some(id) => self.api.update(id, &self.form).await,
            None => self.api.create(&self.form).await,
        };

        match result {
            Ok(_) => {
                self.form = StudentDraft::default();
                self.editing_id = None;
                self.fetch_students().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "submit failed");
                let message = err
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| OPERATION_FAILED.to_string());
                self.error = Some(message);
            }
        }

        self.loading = false;
    }

    /// Begin editing the listed record with the given id, copying its fields
    /// into the form.
    ///
    /// A click can only target a rendered row, so an id missing from the
    /// list is ignored. Touches neither `loading` nor the error banner, and
    /// issues no fetch.
    pub fn start_edit(&mut self, id: StudentId) {
        if let Some(student) = self.students.iter().find(|s| s.id == id) {
            self.form = StudentDraft {
                name: student.name.clone(),
                email: student.email.clone(),
            };
            self.editing_id = Some(id);
        }
    }

    /// Leave edit mode without saving. No network call.
    pub fn cancel_edit(&mut self) {
        self.form = StudentDraft::default();
        self.editing_id = None;
    }

    /// Delete the record with the given id after user confirmation.
    ///
    /// No-op while a request is in flight or when the user declines. On
    /// success the list is re-fetched. Deleting the record currently being
    /// edited leaves edit mode in place.
    pub async fn delete(&mut self, id: StudentId) {
        if self.loading {
            return;
        }
        if !self.confirm.confirm(DELETE_CONFIRM) {
            return;
        }

        self.loading = true;
        self.error = None;

        match self.api.destroy(id).await {
            Ok(()) => self.fetch_students().await,
            Err(err) => {
                tracing::warn!(error = %err, "delete failed");
                self.error = Some(DELETE_FAILED.to_string());
            }
        }

        self.loading = false;
    }

    /// Replace the list with the server's current state. On failure the
    /// previous list stays visible under the fetch-error banner.
    async fn fetch_students(&mut self) {
        match self.api.list().await {
            Ok(students) => {
                self.students = students;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "list students failed");
                self.error = Some(FETCH_FAILED.to_string());
            }
        }
    }
}
