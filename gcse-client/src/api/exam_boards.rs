use tracing::instrument;

use crate::{
    client::{ApiClient, Backend},
    config::Resource,
    errors::Result,
    http::RequestOptions,
    mock::data,
    models::exam_boards::ExamBoard,
};

pub struct ExamBoards<'a> {
    client: &'a ApiClient,
}

impl<'a> ExamBoards<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self), err)]
    pub async fn list(&self) -> Result<Vec<ExamBoard>> {
        match self.client.resolve(Resource::ExamBoard).await {
            Backend::Mocked => Ok(data::exam_boards()),
            Backend::Live(base) => {
                self.client
                    .call(base, &["exam_board"], &[], RequestOptions::get())
                    .await
            }
        }
    }
}
