use tracing::instrument;

use crate::{
    client::{ApiClient, Backend},
    config::Resource,
    errors::Result,
    http::RequestOptions,
    mock::{self, data},
    models::submissions::{Submission, SubmissionCreate},
};

const PATH: &str = "submission";

pub struct Submissions<'a> {
    client: &'a ApiClient,
}

impl<'a> Submissions<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self), err)]
    pub async fn list(&self) -> Result<Vec<Submission>> {
        match self.client.resolve(Resource::Submission).await {
            Backend::Mocked => Ok(data::submissions()),
            Backend::Live(base) => {
                self.client
                    .call(base, &[PATH], &[], RequestOptions::get().authenticated())
                    .await
            }
        }
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: &str) -> Result<Submission> {
        match self.client.resolve(Resource::Submission).await {
            Backend::Mocked => mock::find(data::submissions(), "Submission", id, |s| s.id.as_str()),
            Backend::Live(base) => {
                self.client
                    .call(base, &[PATH, id], &[], RequestOptions::get().authenticated())
                    .await
            }
        }
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, submission: &SubmissionCreate) -> Result<Submission> {
        match self.client.resolve(Resource::Submission).await {
            Backend::Mocked => Ok(submission.clone().synthesize()),
            Backend::Live(base) => {
                let options = RequestOptions::post().json(submission)?.authenticated();
                self.client.call(base, &[PATH], &[], options).await
            }
        }
    }
}
