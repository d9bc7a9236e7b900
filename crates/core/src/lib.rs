//! Domain types shared by the student records client and server.
//!
//! Both sides of the wire deserialize and validate against the same
//! definitions, so schema drift between the form and the route table is a
//! compile error rather than a runtime surprise.

pub mod error;
pub mod student;
pub mod types;
pub mod validation;
