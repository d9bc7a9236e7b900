use crate::types::StudentId;
use crate::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Student with id {id} not found")]
    NotFound { id: StudentId },

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),
}
