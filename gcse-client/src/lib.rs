//! # gcse-client: typed access to the GCSE exam-practice backend
//!
//! `gcse-client` is the data layer of the exam-practice product. Learners browse subjects and exam
//! papers, sit timed exam sessions, submit answers, ask for AI hints, read AI marking feedback
//! and manage their subscription. Every one of those operations is a thin call to a backend
//! resource, and this crate is the single place those calls are made.
//!
//! ## Live and mocked resources
//!
//! The backend is split into independently deployed resources (subjects, questions,
//! submissions...). Each one is configured on its own as either `live`, with a base URL, or
//! `mocked`, in which case the crate answers from a fixed sample set after a short artificial
//! delay. Mixing the two lets the front end keep working while individual services are still
//! being built. See [`config`] for the configuration format.
//!
//! ## Authentication
//!
//! Login and signup store the returned bearer token in the client's [`Session`]. Operations that
//! need it attach `Authorization: Bearer <token>` when a token is stored; nothing is validated
//! locally. [`session::FileCredentialStore`] keeps the token across process restarts.
//!
//! ## Errors
//!
//! Every operation returns [`errors::Result`]. Failures carry a numeric status (the HTTP status,
//! `404` for a mock lookup miss, or `0` when no response was received) and a
//! [`user_message`](errors::Error::user_message) suitable for display.
//!
//! ## Example
//!
//! ```no_run
//! use gcse_client::{ApiClient, Config};
//!
//! # async fn example() -> gcse_client::errors::Result<()> {
//! let client = ApiClient::new(&Config::default())?;
//!
//! for subject in client.subjects().list().await? {
//!     println!("{}: {}", subject.id, subject.name);
//! }
//!
//! let questions = client.questions().by_paper("1").await?;
//! println!("Paper 1 has {} questions", questions.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod http;
pub mod mock;
pub mod models;
pub mod session;
pub mod smoke;
pub mod telemetry;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

#[cfg(test)]
mod test;

pub use api::subscriptions::SubscriptionLookup;
pub use client::ApiClient;
pub use config::{Config, Resource, ResourceBackend};
pub use errors::{Error, Result};
pub use session::{CredentialStore, FileCredentialStore, MemoryCredentialStore, Session};
