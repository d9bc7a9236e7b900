//! Client-side core of the student records app.
//!
//! Two collaborators make up the screen: [`view::StudentsView`], the CRUD
//! state machine behind the list+form interface, and the [`api::StudentApi`]
//! port it drives. [`http::HttpStudentApi`] implements the port over HTTP
//! for production; tests substitute a double.

pub mod api;
pub mod confirm;
pub mod http;
pub mod view;

pub use api::{ApiError, StudentApi};
pub use confirm::{AlwaysConfirm, ConfirmPrompt};
pub use http::HttpStudentApi;
pub use view::StudentsView;
