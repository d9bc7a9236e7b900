//! reqwest-backed implementation of [`StudentApi`].

use async_trait::async_trait;
use roster_core::student::{Student, StudentDraft};
use roster_core::types::StudentId;
use serde::Deserialize;

use crate::api::{ApiError, StudentApi};

/// HTTP client for a student records server.
///
/// Holds only a connection pool and a base URL; all per-operation state
/// lives in the view that drives it.
#[derive(Debug, Clone)]
pub struct HttpStudentApi {
    client: reqwest::Client,
    base_url: String,
}

/// Error body shape returned by the server on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl HttpStudentApi {
    /// Create a client for the server at `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] (connection pooling across
    /// multiple API clients).
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn students_url(&self) -> String {
        format!("{}/api/students", self.base_url)
    }

    fn student_url(&self, id: StudentId) -> String {
        format!("{}/api/students/{id}", self.base_url)
    }

    /// Decode a JSON success body after the status check.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Map a non-2xx response to [`ApiError::Server`], extracting the body's
    /// `message` field when the server provided one.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .map(|b| b.message);
        tracing::warn!(status = status.as_u16(), "student API request rejected");
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl StudentApi for HttpStudentApi {
    async fn list(&self) -> Result<Vec<Student>, ApiError> {
        let response = self.client.get(self.students_url()).send().await?;
        Self::decode(response).await
    }

    async fn get(&self, id: StudentId) -> Result<Student, ApiError> {
        let response = self.client.get(self.student_url(id)).send().await?;
        Self::decode(response).await
    }

    async fn create(&self, draft: &StudentDraft) -> Result<Student, ApiError> {
        let response = self
            .client
            .post(self.students_url())
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update(&self, id: StudentId, draft: &StudentDraft) -> Result<Student, ApiError> {
        let response = self
            .client
            .put(self.student_url(id))
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn destroy(&self, id: StudentId) -> Result<(), ApiError> {
        let response = self.client.delete(self.student_url(id)).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
