use tracing::instrument;

use crate::{
    client::{ApiClient, Backend},
    config::Resource,
    errors::Result,
    http::RequestOptions,
    mock::{self, data},
    models::exam_papers::{ExamPaper, ExamPaperCreate},
};

const PATH: &str = "exam_paper";

pub struct ExamPapers<'a> {
    client: &'a ApiClient,
}

impl<'a> ExamPapers<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self), err)]
    pub async fn list(&self) -> Result<Vec<ExamPaper>> {
        match self.client.resolve(Resource::ExamPaper).await {
            Backend::Mocked => Ok(data::exam_papers()),
            Backend::Live(base) => self.client.call(base, &[PATH], &[], RequestOptions::get()).await,
        }
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: &str) -> Result<ExamPaper> {
        match self.client.resolve(Resource::ExamPaper).await {
            Backend::Mocked => mock::find(data::exam_papers(), "Exam paper", id, |p| p.id.as_str()),
            Backend::Live(base) => self.client.call(base, &[PATH, id], &[], RequestOptions::get()).await,
        }
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, paper: &ExamPaperCreate) -> Result<ExamPaper> {
        match self.client.resolve(Resource::ExamPaper).await {
            Backend::Mocked => Ok(paper.clone().synthesize()),
            Backend::Live(base) => {
                let options = RequestOptions::post().json(paper)?.authenticated();
                self.client.call(base, &[PATH], &[], options).await
            }
        }
    }
}
