//! AI marking feedback. Generation happens server-side; this only fetches and requests it.

use tracing::instrument;

use crate::{
    client::{ApiClient, Backend},
    config::Resource,
    errors::Result,
    http::RequestOptions,
    mock::data,
    models::marking_feedback::{MarkingFeedback, MarkingFeedbackCreate},
};

const PATH: &str = "marking_feedback";

pub struct MarkingFeedbackApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MarkingFeedbackApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: &str) -> Result<MarkingFeedback> {
        match self.client.resolve(Resource::MarkingFeedback).await {
            Backend::Mocked => Ok(data::marking_feedback(id)),
            Backend::Live(base) => {
                self.client
                    .call(base, &[PATH, id], &[], RequestOptions::get().authenticated())
                    .await
            }
        }
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, request: &MarkingFeedbackCreate) -> Result<MarkingFeedback> {
        match self.client.resolve(Resource::MarkingFeedback).await {
            Backend::Mocked => Ok(request.clone().synthesize()),
            Backend::Live(base) => {
                let options = RequestOptions::post().json(request)?.authenticated();
                self.client.call(base, &[PATH], &[], options).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{live_client, mocked_client};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_mock_get_wraps_requested_id() {
        let feedback = mocked_client().marking_feedback().get("fb-3").await.unwrap();
        assert_eq!(feedback.id, "fb-3");
        assert_eq!(feedback.score, Some(7.0));
    }

    #[tokio::test]
    async fn test_live_remote_failure_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/marking_feedback"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({"message": "Marking model unavailable"})))
            .expect(1)
            .mount(&server)
            .await;

        let request = MarkingFeedbackCreate {
            submission_id: Some("1".to_string()),
            ..Default::default()
        };
        let err = live_client(&server.uri())
            .marking_feedback()
            .create(&request)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 503);
        assert_eq!(err.user_message(), "Marking model unavailable");
    }
}
