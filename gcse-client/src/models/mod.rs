//! Request and response shapes for every backend resource.
//!
//! Each resource has a record type as returned by the backend, a `*Create` payload carrying the
//! caller-supplied fields for a create call, and where the backend supports it an `*Update`
//! payload whose fields are all optional. Unset optional fields are left out of request bodies.

pub mod answer_hints;
pub mod answers;
pub mod exam_boards;
pub mod exam_papers;
pub mod exam_sessions;
pub mod marking_feedback;
pub mod questions;
pub mod subjects;
pub mod submissions;
pub mod subscriptions;
pub mod users;
