//! Handlers for the `/api/students` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::student::{Student, StudentDraft};
use roster_core::types::StudentId;
use roster_core::validation::check_draft;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/students
pub async fn index(State(state): State<AppState>) -> Json<Vec<Student>> {
    Json(state.store.list().await)
}

/// POST /api/students
///
/// Field rules run before the store is touched, so an invalid draft never
/// consumes an id.
pub async fn store(
    State(state): State<AppState>,
    Json(draft): Json<StudentDraft>,
) -> AppResult<(StatusCode, Json<Student>)> {
    check_draft(&draft).map_err(CoreError::Validation)?;
    let student = state.store.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/students/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
) -> AppResult<Json<Student>> {
    let student = state.store.find(id).await?;
    Ok(Json(student))
}

/// PUT /api/students/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
    Json(draft): Json<StudentDraft>,
) -> AppResult<Json<Student>> {
    check_draft(&draft).map_err(CoreError::Validation)?;
    let student = state.store.update(id, &draft).await?;
    Ok(Json(student))
}

/// DELETE /api/students/{id}
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
) -> AppResult<StatusCode> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
