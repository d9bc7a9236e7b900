//! In-process student repository.
//!
//! Rows live in insertion order behind a [`tokio::sync::RwLock`], so the
//! route table behaves identically whether the rows sit here or in a
//! relational store behind the same contract.

use chrono::Utc;
use tokio::sync::RwLock;

use roster_core::error::CoreError;
use roster_core::student::{Student, StudentDraft};
use roster_core::types::StudentId;
use roster_core::validation::{FieldErrors, FieldViolation};

/// Message used when a draft's email collides with an existing row.
const EMAIL_TAKEN: &str = "Email already taken";

/// Thread-safe store of student rows with auto-increment ids.
#[derive(Debug, Default)]
pub struct StudentStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: StudentId,
    students: Vec<Student>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All students in insertion order.
    pub async fn list(&self) -> Vec<Student> {
        self.inner.read().await.students.clone()
    }

    /// Find a student by id.
    pub async fn find(&self, id: StudentId) -> Result<Student, CoreError> {
        self.inner
            .read()
            .await
            .students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(CoreError::NotFound { id })
    }

    /// Insert a new student, assigning the next id and timestamps.
    ///
    /// Fails with a field-scoped validation error if the email is already
    /// in use.
    pub async fn create(&self, draft: &StudentDraft) -> Result<Student, CoreError> {
        let mut inner = self.inner.write().await;
        if inner.students.iter().any(|s| s.email == draft.email) {
            return Err(email_taken());
        }

        inner.last_id += 1;
        let now = Utc::now();
        let student = Student {
            id: inner.last_id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            created_at: Some(now),
            updated_at: Some(now),
        };
        inner.students.push(student.clone());
        Ok(student)
    }

    /// Replace the fields of an existing student.
    ///
    /// The uniqueness check excludes the row being updated, so saving a
    /// record with its own email is not a conflict.
    pub async fn update(&self, id: StudentId, draft: &StudentDraft) -> Result<Student, CoreError> {
        let mut inner = self.inner.write().await;
        if inner
            .students
            .iter()
            .any(|s| s.id != id && s.email == draft.email)
        {
            return Err(email_taken());
        }

        let student = inner
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(CoreError::NotFound { id })?;
        student.name = draft.name.clone();
        student.email = draft.email.clone();
        student.updated_at = Some(Utc::now());
        Ok(student.clone())
    }

    /// Remove a student. Positions of the remaining rows are preserved.
    pub async fn delete(&self, id: StudentId) -> Result<(), CoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.students.len();
        inner.students.retain(|s| s.id != id);
        if inner.students.len() == before {
            return Err(CoreError::NotFound { id });
        }
        Ok(())
    }
}

fn email_taken() -> CoreError {
    CoreError::Validation(FieldErrors(vec![FieldViolation {
        field: "email",
        message: EMAIL_TAKEN.to_string(),
    }]))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn draft(name: &str, email: &str) -> StudentDraft {
        StudentDraft {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = StudentStore::new();
        let a = store.create(&draft("Ada", "ada@example.com")).await.unwrap();
        let b = store
            .create(&draft("Grace", "grace@example.com"))
            .await
            .unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(a.created_at.is_some());
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let store = StudentStore::new();
        let a = store.create(&draft("Ada", "ada@example.com")).await.unwrap();
        store.delete(a.id).await.unwrap();
        let b = store
            .create(&draft("Grace", "grace@example.com"))
            .await
            .unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = StudentStore::new();
        store.create(&draft("Ada", "ada@example.com")).await.unwrap();
        let err = store
            .create(&draft("Imposter", "ada@example.com"))
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[tokio::test]
    async fn update_keeps_own_email() {
        let store = StudentStore::new();
        let a = store.create(&draft("Ada", "ada@example.com")).await.unwrap();
        let updated = store
            .update(a.id, &draft("Ada Lovelace", "ada@example.com"))
            .await
            .unwrap();
        assert_eq!(updated.name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn update_rejects_another_rows_email() {
        let store = StudentStore::new();
        store.create(&draft("Ada", "ada@example.com")).await.unwrap();
        let b = store
            .create(&draft("Grace", "grace@example.com"))
            .await
            .unwrap();
        let err = store
            .update(b.id, &draft("Grace", "ada@example.com"))
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[tokio::test]
    async fn missing_rows_surface_not_found() {
        let store = StudentStore::new();
        assert_matches!(
            store.find(42).await.unwrap_err(),
            CoreError::NotFound { id: 42 }
        );
        assert_matches!(
            store.update(42, &draft("X Y", "x@y.zz")).await.unwrap_err(),
            CoreError::NotFound { id: 42 }
        );
        assert_matches!(
            store.delete(42).await.unwrap_err(),
            CoreError::NotFound { id: 42 }
        );
    }

    #[tokio::test]
    async fn delete_preserves_order_of_remaining_rows() {
        let store = StudentStore::new();
        store.create(&draft("Ada", "ada@example.com")).await.unwrap();
        let b = store
            .create(&draft("Grace", "grace@example.com"))
            .await
            .unwrap();
        store
            .create(&draft("Edsger", "edsger@example.com"))
            .await
            .unwrap();

        store.delete(b.id).await.unwrap();

        let names: Vec<String> = store.list().await.into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Ada", "Edsger"]);
    }
}
