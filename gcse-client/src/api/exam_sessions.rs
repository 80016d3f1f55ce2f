//! Timed exam sessions.
//!
//! [`ExamSessions::update`] sends whatever it is given. The lifecycle helpers ([`pause`],
//! [`resume`], [`complete`]) read the current status first and refuse moves that
//! [`ExamSessionStatus::can_transition_to`] rejects, without sending the PATCH.
//!
//! [`pause`]: ExamSessions::pause
//! [`resume`]: ExamSessions::resume
//! [`complete`]: ExamSessions::complete

use chrono::Utc;
use tracing::{info, instrument};

use crate::{
    client::{ApiClient, Backend},
    config::Resource,
    errors::{Error, Result},
    http::RequestOptions,
    mock::data,
    models::exam_sessions::{ExamSession, ExamSessionCreate, ExamSessionStatus, ExamSessionUpdate},
};

const PATH: &str = "exam_session";

/// Owner recorded on sessions synthesized for a bare id lookup
const MOCK_OWNER: &str = "1";

pub struct ExamSessions<'a> {
    client: &'a ApiClient,
}

impl<'a> ExamSessions<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, session: &ExamSessionCreate) -> Result<ExamSession> {
        match self.client.resolve(Resource::ExamSession).await {
            Backend::Mocked => Ok(session.clone().synthesize()),
            Backend::Live(base) => {
                let options = RequestOptions::post().json(session)?.authenticated();
                self.client.call(base, &[PATH], &[], options).await
            }
        }
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: &str) -> Result<ExamSession> {
        match self.client.resolve(Resource::ExamSession).await {
            Backend::Mocked => Ok(data::exam_session(id, MOCK_OWNER)),
            Backend::Live(base) => {
                self.client
                    .call(base, &[PATH, id], &[], RequestOptions::get().authenticated())
                    .await
            }
        }
    }

    /// Partial update (PATCH). No lifecycle check.
    #[instrument(skip(self), err)]
    pub async fn update(&self, id: &str, update: &ExamSessionUpdate) -> Result<ExamSession> {
        match self.client.resolve(Resource::ExamSession).await {
            Backend::Mocked => {
                let mut session = data::exam_session(id, MOCK_OWNER);
                update.clone().apply(&mut session);
                Ok(session)
            }
            Backend::Live(base) => {
                let options = RequestOptions::patch().json(update)?.authenticated();
                self.client.call(base, &[PATH, id], &[], options).await
            }
        }
    }

    /// Move a session to `to` if its current status allows it.
    ///
    /// Completing a session also stamps `completed_at`.
    #[instrument(skip(self), err)]
    pub async fn transition(&self, id: &str, to: ExamSessionStatus) -> Result<ExamSession> {
        let current = self.get(id).await?;
        if !current.status.can_transition_to(to) {
            return Err(Error::InvalidTransition {
                from: current.status,
                to,
            });
        }

        let update = ExamSessionUpdate {
            status: Some(to),
            completed_at: to.is_terminal().then(Utc::now),
        };
        let session = self.update(id, &update).await?;
        info!("Exam session {id} moved from {} to {to}", current.status);
        Ok(session)
    }

    pub async fn pause(&self, id: &str) -> Result<ExamSession> {
        self.transition(id, ExamSessionStatus::Paused).await
    }

    pub async fn resume(&self, id: &str) -> Result<ExamSession> {
        self.transition(id, ExamSessionStatus::InProgress).await
    }

    pub async fn complete(&self, id: &str) -> Result<ExamSession> {
        self.transition(id, ExamSessionStatus::Completed).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{live_client, mocked_client};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn session_json(status: &str) -> serde_json::Value {
        json!({
            "id": "s1",
            "exam_paper_id": "1",
            "user_id": "u1",
            "status": status,
            "started_at": "2025-01-06T09:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_mock_create_keeps_fields() {
        let create = ExamSessionCreate {
            exam_paper_id: "3".to_string(),
            user_id: "u9".to_string(),
            ..Default::default()
        };
        let session = mocked_client().exam_sessions().create(&create).await.unwrap();

        assert_eq!(session.exam_paper_id, "3");
        assert_eq!(session.user_id, "u9");
        assert_eq!(session.status, ExamSessionStatus::InProgress);
    }

    #[tokio::test]
    async fn test_mock_complete_stamps_completion() {
        let session = mocked_client().exam_sessions().complete("s1").await.unwrap();
        assert_eq!(session.status, ExamSessionStatus::Completed);
        assert!(session.completed_at.is_some());
    }

    #[tokio::test]
    async fn test_resume_rejected_when_already_running() {
        let err = mocked_client().exam_sessions().resume("s1").await.unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTransition {
                from: ExamSessionStatus::InProgress,
                to: ExamSessionStatus::InProgress
            }
        ));
    }

    #[tokio::test]
    async fn test_live_resume_from_paused_patches_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exam_session/s1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_json("paused")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/exam_session/s1"))
            .and(body_json(json!({"status": "in_progress"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_json("in_progress")))
            .expect(1)
            .mount(&server)
            .await;

        let session = live_client(&server.uri()).exam_sessions().resume("s1").await.unwrap();
        assert_eq!(session.status, ExamSessionStatus::InProgress);
    }

    #[tokio::test]
    async fn test_live_invalid_transition_sends_no_patch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_json("completed")))
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = live_client(&server.uri()).exam_sessions().pause("s1").await.unwrap_err();
        assert_eq!(err.to_string(), "Cannot move exam session from completed to paused");
    }

    #[tokio::test]
    async fn test_raw_update_is_permissive() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/exam_session/s1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_json("in_progress")))
            .expect(1)
            .mount(&server)
            .await;

        let update = ExamSessionUpdate {
            status: Some(ExamSessionStatus::InProgress),
            ..Default::default()
        };
        live_client(&server.uri()).exam_sessions().update("s1", &update).await.unwrap();
    }
}
