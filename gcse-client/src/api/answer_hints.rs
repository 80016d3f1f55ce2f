//! AI answer hints, fetched per question.

use tracing::instrument;

use crate::{
    client::{ApiClient, Backend},
    config::Resource,
    errors::Result,
    http::RequestOptions,
    mock::data,
    models::answer_hints::{AnswerHint, AnswerHintCreate},
};

const PATH: &str = "answer_hint";

pub struct AnswerHints<'a> {
    client: &'a ApiClient,
}

impl<'a> AnswerHints<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Hint for a question, keyed by the question id
    #[instrument(skip(self), err)]
    pub async fn get(&self, question_id: &str) -> Result<AnswerHint> {
        match self.client.resolve(Resource::AnswerHint).await {
            Backend::Mocked => Ok(data::answer_hint(question_id)),
            Backend::Live(base) => {
                self.client
                    .call(base, &[PATH, question_id], &[], RequestOptions::get())
                    .await
            }
        }
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, request: &AnswerHintCreate) -> Result<AnswerHint> {
        match self.client.resolve(Resource::AnswerHint).await {
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
    async fn test_mock_hint_for_question() {
        let hint = mocked_client().answer_hints().get("4").await.unwrap();
        assert_eq!(hint.id, "hint-4");
        assert_eq!(hint.question_id, "4");
        assert!(!hint.hint.is_empty());
    }

    #[tokio::test]
    async fn test_live_get_is_unauthenticated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/answer_hint/4"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": "h", "question_id": "4", "hint": "Use F = ma"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = live_client(&server.uri());
        client.session().store_token("t").unwrap();
        client.answer_hints().get("4").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }
}
