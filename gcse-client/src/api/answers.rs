use tracing::instrument;

use crate::{
    client::{ApiClient, Backend},
    config::Resource,
    errors::Result,
    http::RequestOptions,
    models::answers::{ExamPaperAnswer, ExamPaperAnswerCreate},
};

pub struct Answers<'a> {
    client: &'a ApiClient,
}

impl<'a> Answers<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Record a learner's answer to one question
    #[instrument(skip(self), err)]
    pub async fn create(&self, answer: &ExamPaperAnswerCreate) -> Result<ExamPaperAnswer> {
        match self.client.resolve(Resource::ExamPaperAnswer).await {
            Backend::Mocked => Ok(answer.clone().synthesize()),
            Backend::Live(base) => {
                let options = RequestOptions::post().json(answer)?.authenticated();
                self.client.call(base, &["exam_paper_answer"], &[], options).await
            }
        }
    }
}
