//! Endpoint façades, one per backend resource.
//!
//! Each façade borrows the [`ApiClient`](crate::client::ApiClient), checks whether its resource
//! is mocked, and either answers from [`crate::mock`] or issues a single request through the
//! executor. Paths are relative to the resource's configured base URL.

pub mod answer_hints;
pub mod answers;
pub mod auth;
pub mod exam_boards;
pub mod exam_papers;
pub mod exam_sessions;
pub mod marking_feedback;
pub mod questions;
pub mod subjects;
pub mod submissions;
pub mod subscription_plans;
pub mod subscriptions;
pub mod users;
