//! Per-user administration: password and role changes, and a user's own records.

use tracing::{info, instrument};

use crate::{
    client::{ApiClient, Backend},
    config::Resource,
    errors::Result,
    http::RequestOptions,
    mock::data,
    models::{
        answers::ExamPaperAnswer,
        exam_sessions::ExamSession,
        submissions::Submission,
        users::{PasswordUpdate, RoleUpdate},
    },
};

const PATH: &str = "user";

pub struct Users<'a> {
    client: &'a ApiClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// One of the user's exam sessions
    #[instrument(skip(self), err)]
    pub async fn exam_session(&self, user_id: &str, session_id: &str) -> Result<ExamSession> {
        match self.client.resolve(Resource::User).await {
            Backend::Mocked => Ok(data::exam_session(session_id, user_id)),
            // The backend spells this route "exam_sesion"
            Backend::Live(base) => {
                self.client
                    .call(base, &[PATH, "exam_sesion", session_id], &[], RequestOptions::get().authenticated())
                    .await
            }
        }
    }

    #[instrument(skip_all, fields(user_id = %user_id), err)]
    pub async fn update_password(&self, user_id: &str, password: &str) -> Result<()> {
        match self.client.resolve(Resource::User).await {
            Backend::Mocked => {}
            Backend::Live(base) => {
                let body = PasswordUpdate {
                    password: password.to_string(),
                };
                let options = RequestOptions::patch().json(&body)?.authenticated();
                self.client
                    .call_empty(base, &[PATH, "password", user_id], &[], options)
                    .await?;
            }
        }
        info!("Password updated for user {user_id}");
        Ok(())
    }

    #[instrument(skip(self), err)]
    pub async fn update_role(&self, user_id: &str, role: &str) -> Result<()> {
        match self.client.resolve(Resource::User).await {
            Backend::Mocked => {}
            Backend::Live(base) => {
                let body = RoleUpdate { role: role.to_string() };
                let options = RequestOptions::patch().json(&body)?.authenticated();
                self.client.call_empty(base, &[PATH, "role", user_id], &[], options).await?;
            }
        }
        info!("Role for user {user_id} set to {role}");
        Ok(())
    }

    #[instrument(skip(self), err)]
    pub async fn submissions(&self, user_id: &str) -> Result<Vec<Submission>> {
        match self.client.resolve(Resource::User).await {
            Backend::Mocked => Ok(Vec::new()),
            Backend::Live(base) => {
                self.client
                    .call(base, &[PATH, "submissions", user_id], &[], RequestOptions::get().authenticated())
                    .await
            }
        }
    }

    #[instrument(skip(self), err)]
    pub async fn exam_paper_answers(&self, user_id: &str) -> Result<Vec<ExamPaperAnswer>> {
        match self.client.resolve(Resource::User).await {
            Backend::Mocked => Ok(Vec::new()),
            Backend::Live(base) => {
                self.client
                    .call(
                        base,
                        &["exam_paper_answer"],
                        &[("user_id", user_id)],
                        RequestOptions::get().authenticated(),
                    )
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{live_client, mocked_client};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_mock_user_records_are_empty() {
        let client = mocked_client();
        assert!(client.users().submissions("1").await.unwrap().is_empty());
        assert!(client.users().exam_paper_answers("1").await.unwrap().is_empty());
        client.users().update_password("1", "new-password").await.unwrap();
        client.users().update_role("1", "admin").await.unwrap();
    }

    #[tokio::test]
    async fn test_mock_exam_session_belongs_to_user() {
        let session = mocked_client().users().exam_session("u5", "s8").await.unwrap();
        assert_eq!(session.id, "s8");
        assert_eq!(session.user_id, "u5");
    }

    #[tokio::test]
    async fn test_live_exam_session_uses_backend_route() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/exam_sesion/s8"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "s8", "exam_paper_id": "1", "user_id": "u5", "status": "paused",
                "started_at": "2025-01-06T09:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        live_client(&server.uri()).users().exam_session("u5", "s8").await.unwrap();
    }

    #[tokio::test]
    async fn test_live_password_change() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/user/password/u5"))
            .and(header("authorization", "Bearer t"))
            .and(body_json(json!({"password": "s3cret"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = live_client(&server.uri());
        client.session().store_token("t").unwrap();
        client.users().update_password("u5", "s3cret").await.unwrap();
    }

    #[tokio::test]
    async fn test_live_answers_filtered_by_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exam_paper_answer"))
            .and(query_param("user_id", "u5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let answers = live_client(&server.uri()).users().exam_paper_answers("u5").await.unwrap();
        assert!(answers.is_empty());
    }
}
