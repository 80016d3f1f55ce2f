use tracing::instrument;

use crate::{
    client::{ApiClient, Backend},
    config::Resource,
    errors::Result,
    http::RequestOptions,
    mock::{self, data},
    models::subjects::{Subject, SubjectCreate, SubjectUpdate},
};

const PATH: &str = "subject";

pub struct Subjects<'a> {
    client: &'a ApiClient,
}

impl<'a> Subjects<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self), err)]
    pub async fn list(&self) -> Result<Vec<Subject>> {
        match self.client.resolve(Resource::Subject).await {
            Backend::Mocked => Ok(data::subjects()),
            Backend::Live(base) => self.client.call(base, &[PATH], &[], RequestOptions::get()).await,
        }
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: &str) -> Result<Subject> {
        match self.client.resolve(Resource::Subject).await {
            Backend::Mocked => mock::find(data::subjects(), "Subject", id, |s| s.id.as_str()),
            Backend::Live(base) => self.client.call(base, &[PATH, id], &[], RequestOptions::get()).await,
        }
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, subject: &SubjectCreate) -> Result<Subject> {
        match self.client.resolve(Resource::Subject).await {
            Backend::Mocked => Ok(subject.clone().synthesize()),
            Backend::Live(base) => {
                let options = RequestOptions::post().json(subject)?.authenticated();
                self.client.call(base, &[PATH], &[], options).await
            }
        }
    }

    /// Full update (PUT). Mocked subjects overlay the given fields on the sample record.
    #[instrument(skip(self), err)]
    pub async fn update(&self, id: &str, update: &SubjectUpdate) -> Result<Subject> {
        match self.client.resolve(Resource::Subject).await {
            Backend::Mocked => {
                let mut subject = mock::find(data::subjects(), "Subject", id, |s| s.id.as_str())?;
                update.clone().apply(&mut subject);
                Ok(subject)
            }
            Backend::Live(base) => {
                let options = RequestOptions::put().json(update)?.authenticated();
                self.client.call(base, &[PATH, id], &[], options).await
            }
        }
    }
}
