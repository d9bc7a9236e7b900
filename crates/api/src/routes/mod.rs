//! Route table.

pub mod health;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Routes mounted at `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(student::router())
}
