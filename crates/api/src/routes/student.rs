//! Route definitions for the students resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// GET    /students        -> index
/// POST   /students        -> store
/// GET    /students/{id}   -> show
/// PUT    /students/{id}   -> update
/// DELETE /students/{id}   -> destroy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/students", get(student::index).post(student::store))
        .route(
            "/students/{id}",
            get(student::show)
                .put(student::update)
                .delete(student::destroy),
        )
}
