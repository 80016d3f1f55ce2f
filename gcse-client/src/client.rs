//! The access-layer entry point.
//!
//! [`ApiClient`] owns the per-resource backend selection, the mock source and the request
//! executor. Endpoint façades borrow it (`client.subjects().list()`), so a single client can be
//! cloned freely across tasks.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

use crate::api::{
    answer_hints::AnswerHints, answers::Answers, auth::Auth, exam_boards::ExamBoards, exam_papers::ExamPapers,
    exam_sessions::ExamSessions, marking_feedback::MarkingFeedbackApi, questions::Questions, subjects::Subjects,
    submissions::Submissions, subscription_plans::SubscriptionPlans, subscriptions::Subscriptions, users::Users,
};
use crate::config::{Config, Resource, ResourceBackend, ResourcesConfig};
use crate::errors::Result;
use crate::http::{HttpExecutor, RequestOptions, endpoint_url};
use crate::mock::MockSource;
use crate::session::Session;

/// Where a call for one resource goes.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Backend<'a> {
    Mocked,
    Live(&'a Url),
}

#[derive(Debug)]
struct Inner {
    resources: ResourcesConfig,
    mock: MockSource,
    http: HttpExecutor,
}

/// Typed access to every backend resource.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

impl ApiClient {
    /// Build a client whose credential store comes from the configuration
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_session(config, Session::from_config(&config.credentials))
    }

    /// Build a client around an existing session, e.g. one with a navigation hook
    pub fn with_session(config: &Config, session: Session) -> Result<Self> {
        let http = HttpExecutor::new(session, config.request_timeout)?;
        let mocked = config.resources.mocked();
        if !mocked.is_empty() {
            info!(
                "Serving {} resource(s) from sample data with {} latency: {}",
                mocked.len(),
                humantime::format_duration(config.mock.latency),
                mocked.iter().map(Resource::key).collect::<Vec<_>>().join(", ")
            );
        }

        Ok(Self {
            inner: Arc::new(Inner {
                resources: config.resources.clone(),
                mock: MockSource::new(config.mock.latency),
                http,
            }),
        })
    }

    pub fn session(&self) -> &Session {
        self.inner.http.session()
    }

    pub fn is_mocked(&self, resource: Resource) -> bool {
        self.inner.resources.get(resource).is_mocked()
    }

    /// Pick the backend for `resource`. Mocked resources wait out the artificial latency here,
    /// so every mocked operation pays it exactly once.
    pub(crate) async fn resolve(&self, resource: Resource) -> Backend<'_> {
        match self.inner.resources.get(resource) {
            ResourceBackend::Live { base_url } => Backend::Live(base_url),
            ResourceBackend::Mocked => {
                debug!("Answering {resource} from sample data");
                self.inner.mock.delay().await;
                Backend::Mocked
            }
        }
    }

    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        base: &Url,
        segments: &[&str],
        query: &[(&str, &str)],
        options: RequestOptions,
    ) -> Result<T> {
        let url = endpoint_url(base, segments, query)?;
        self.inner.http.request(url, options).await
    }

    pub(crate) async fn call_empty(
        &self,
        base: &Url,
        segments: &[&str],
        query: &[(&str, &str)],
        options: RequestOptions,
    ) -> Result<()> {
        let url = endpoint_url(base, segments, query)?;
        self.inner.http.send(url, options).await
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth::new(self)
    }

    pub fn subjects(&self) -> Subjects<'_> {
        Subjects::new(self)
    }

    pub fn exam_boards(&self) -> ExamBoards<'_> {
        ExamBoards::new(self)
    }

    pub fn exam_papers(&self) -> ExamPapers<'_> {
        ExamPapers::new(self)
    }

    pub fn exam_sessions(&self) -> ExamSessions<'_> {
        ExamSessions::new(self)
    }

    pub fn questions(&self) -> Questions<'_> {
        Questions::new(self)
    }

    pub fn answers(&self) -> Answers<'_> {
        Answers::new(self)
    }

    pub fn submissions(&self) -> Submissions<'_> {
        Submissions::new(self)
    }

    pub fn marking_feedback(&self) -> MarkingFeedbackApi<'_> {
        MarkingFeedbackApi::new(self)
    }

    pub fn answer_hints(&self) -> AnswerHints<'_> {
        AnswerHints::new(self)
    }

    pub fn subscription_plans(&self) -> SubscriptionPlans<'_> {
        SubscriptionPlans::new(self)
    }

    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }
}
