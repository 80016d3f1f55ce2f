//! Questions and their links to exam papers.
//!
//! Links live on their own resource (`exam_paper_question`) and may be served by a different
//! backend than the questions themselves.

use tracing::instrument;

use crate::{
    client::{ApiClient, Backend},
    config::Resource,
    errors::Result,
    http::RequestOptions,
    mock::{self, data},
    models::{
        exam_papers::ExamPaperQuestion,
        questions::{Question, QuestionCreate, QuestionUpdate},
    },
};

const PATH: &str = "question";
const LINK_PATH: &str = "exam_paper_question";

pub struct Questions<'a> {
    client: &'a ApiClient,
}

impl<'a> Questions<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self), err)]
    pub async fn list(&self) -> Result<Vec<Question>> {
        match self.client.resolve(Resource::Question).await {
            Backend::Mocked => Ok(data::questions()),
            Backend::Live(base) => self.client.call(base, &[PATH], &[], RequestOptions::get()).await,
        }
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: &str) -> Result<Question> {
        match self.client.resolve(Resource::Question).await {
            Backend::Mocked => mock::find(data::questions(), "Question", id, |q| q.id.as_str()),
            Backend::Live(base) => self.client.call(base, &[PATH, id], &[], RequestOptions::get()).await,
        }
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, question: &QuestionCreate) -> Result<Question> {
        match self.client.resolve(Resource::Question).await {
            Backend::Mocked => Ok(question.clone().synthesize()),
            Backend::Live(base) => {
                let options = RequestOptions::post().json(question)?.authenticated();
                self.client.call(base, &[PATH], &[], options).await
            }
        }
    }

    #[instrument(skip(self), err)]
    pub async fn update(&self, id: &str, update: &QuestionUpdate) -> Result<Question> {
        match self.client.resolve(Resource::Question).await {
            Backend::Mocked => {
                let mut question = mock::find(data::questions(), "Question", id, |q| q.id.as_str())?;
                update.clone().apply(&mut question);
                Ok(question)
            }
            Backend::Live(base) => {
                let options = RequestOptions::put().json(update)?.authenticated();
                self.client.call(base, &[PATH, id], &[], options).await
            }
        }
    }

    #[instrument(skip(self), err)]
    pub async fn by_paper(&self, exam_paper_id: &str) -> Result<Vec<Question>> {
        match self.client.resolve(Resource::Question).await {
            Backend::Mocked => Ok(data::questions()
                .into_iter()
                .filter(|q| q.exam_paper_id.as_deref() == Some(exam_paper_id))
                .collect()),
            Backend::Live(base) => {
                self.client
                    .call(base, &[PATH], &[("exam_paper_id", exam_paper_id)], RequestOptions::get())
                    .await
            }
        }
    }

    #[instrument(skip(self), err)]
    pub async fn add_to_paper(&self, link: &ExamPaperQuestion) -> Result<()> {
        match self.client.resolve(Resource::ExamPaperQuestion).await {
            Backend::Mocked => Ok(()),
            Backend::Live(base) => {
                let options = RequestOptions::post().json(link)?.authenticated();
                self.client.call_empty(base, &[LINK_PATH], &[], options).await
            }
        }
    }

    #[instrument(skip(self), err)]
    pub async fn remove_from_paper(&self, exam_paper_id: &str, question_id: &str) -> Result<()> {
        match self.client.resolve(Resource::ExamPaperQuestion).await {
            Backend::Mocked => Ok(()),
            Backend::Live(base) => {
                let query = [("exam_paper_id", exam_paper_id), ("question_id", question_id)];
                self.client
                    .call_empty(base, &[LINK_PATH], &query, RequestOptions::delete().authenticated())
                    .await
            }
        }
    }
}
