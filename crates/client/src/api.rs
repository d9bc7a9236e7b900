//! The four-operation port between the view and the student records API.

use async_trait::async_trait;
use roster_core::student::{Student, StudentDraft};
use roster_core::types::StudentId;

/// Errors surfaced by a [`StudentApi`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. `message` carries the
    /// body's `message` field when the server provided one.
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server-provided `message` body field, when there is one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// CRUD operations against the student records API.
///
/// The view talks to this trait rather than a concrete HTTP client so a test
/// double can stand in for the network.
#[async_trait]
pub trait StudentApi {
    /// Fetch all students in server order.
    async fn list(&self) -> Result<Vec<Student>, ApiError>;

    /// Fetch a single student. Not used by the screen flow, but part of the
    /// API contract.
    async fn get(&self, id: StudentId) -> Result<Student, ApiError>;

    /// Create a student from a draft. The server assigns the id.
    async fn create(&self, draft: &StudentDraft) -> Result<Student, ApiError>;

    /// Replace the fields of an existing student.
    async fn update(&self, id: StudentId, draft: &StudentDraft) -> Result<Student, ApiError>;

    /// Remove a student.
    async fn destroy(&self, id: StudentId) -> Result<(), ApiError>;
}
