//! Client configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable overrides. The file path
//! defaults to `config.yaml` but can be specified via the `-f` flag or the `GCSE_CONFIG`
//! environment variable.
//!
//! ## Loading Priority
//!
//! 1. **YAML config file** - Base configuration (default: `config.yaml`)
//! 2. **Environment variables** - Variables prefixed with `GCSE_` override YAML values
//!
//! Nested values use double underscores, e.g. `GCSE_RESOURCES__SUBJECT__MODE=live`.
//!
//! ## Resources
//!
//! Every backend resource is configured on its own, so a deployment can mix live and mocked
//! resources. A resource is either `live` with a `base_url` or `mocked`; unlisted resources are
//! mocked.
//!
//! ```yaml
//! request_timeout: 15s
//! mock:
//!   latency: 250ms
//! credentials:
//!   store: file
//!   path: /var/lib/gcse/credentials.json
//! resources:
//!   auth:
//!     mode: live
//!     base_url: https://auth.example.com
//!   subject:
//!     mode: live
//!     base_url: https://content.example.com/api
//!   answer_hint:
//!     mode: mocked
//! ```
//!
//! ## Environment Variable Examples
//!
//! ```bash
//! GCSE_REQUEST_TIMEOUT=10s
//! GCSE_RESOURCES__SUBMISSION__MODE=live
//! GCSE_RESOURCES__SUBMISSION__BASE_URL=https://submissions.example.com
//! ```

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf, time::Duration};
use url::Url;

use crate::errors::Error;
use crate::mock::DEFAULT_LATENCY;

/// CLI args
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "GCSE_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without contacting any backend.
    #[arg(long)]
    pub validate: bool,

    /// Email used by the smoke suite for signup and login
    #[arg(long, env = "GCSE_SMOKE_EMAIL", default_value = "smoke-test@example.com")]
    pub email: String,

    /// Password used by the smoke suite for signup and login
    #[arg(long, env = "GCSE_SMOKE_PASSWORD", default_value = "password123")]
    pub password: String,

    /// Clear the stored token once the smoke suite has finished
    #[arg(long)]
    pub logout: bool,
}

/// Main client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Per-resource backend selection
    pub resources: ResourcesConfig,
    /// Behaviour of mocked resources
    pub mock: MockConfig,
    /// Upper bound on a single live request, including reading the body
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    /// Where the bearer token is kept between runs
    pub credentials: CredentialsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resources: ResourcesConfig::default(),
            mock: MockConfig::default(),
            request_timeout: Duration::from_secs(30),
            credentials: CredentialsConfig::default(),
        }
    }
}

/// A backend-managed entity family. Each one has its own base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Auth,
    MarkingFeedback,
    AnswerHint,
    ExamBoard,
    ExamSession,
    ExamPaperQuestion,
    ExamPaperAnswer,
    ExamPaper,
    Question,
    Subject,
    Submission,
    Subscription,
    SubscriptionPlan,
    User,
}

impl Resource {
    pub const ALL: [Resource; 14] = [
        Resource::Auth,
        Resource::MarkingFeedback,
        Resource::AnswerHint,
        Resource::ExamBoard,
        Resource::ExamSession,
        Resource::ExamPaperQuestion,
        Resource::ExamPaperAnswer,
        Resource::ExamPaper,
        Resource::Question,
        Resource::Subject,
        Resource::Submission,
        Resource::Subscription,
        Resource::SubscriptionPlan,
        Resource::User,
    ];

    /// Key under `resources` in the configuration file
    pub fn key(&self) -> &'static str {
        match self {
            Resource::Auth => "auth",
            Resource::MarkingFeedback => "marking_feedback",
            Resource::AnswerHint => "answer_hint",
            Resource::ExamBoard => "exam_board",
            Resource::ExamSession => "exam_session",
            Resource::ExamPaperQuestion => "exam_paper_question",
            Resource::ExamPaperAnswer => "exam_paper_answer",
            Resource::ExamPaper => "exam_paper",
            Resource::Question => "question",
            Resource::Subject => "subject",
            Resource::Submission => "submission",
            Resource::Subscription => "subscription",
            Resource::SubscriptionPlan => "subscription_plan",
            Resource::User => "user",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How a single resource is served.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ResourceBackend {
    /// Requests go to the backend at `base_url`
    Live { base_url: Url },
    /// Requests are answered from the built-in sample data
    #[default]
    Mocked,
}

impl ResourceBackend {
    /// Interpret a raw base URL string the way older deployments did: blank means mocked.
    ///
    /// Prefer spelling out `mode` in configuration; this exists for callers that still hold
    /// the bare environment strings.
    pub fn from_base_url(base_url: &str) -> Result<Self, Error> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Ok(ResourceBackend::Mocked);
        }
        let base_url = Url::parse(trimmed).map_err(|_| Error::InvalidUrl { url: trimmed.to_string() })?;
        Ok(ResourceBackend::Live { base_url })
    }

    pub fn is_mocked(&self) -> bool {
        matches!(self, ResourceBackend::Mocked)
    }
}

/// Backend selection for every resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourcesConfig {
    pub auth: ResourceBackend,
    pub marking_feedback: ResourceBackend,
    pub answer_hint: ResourceBackend,
    pub exam_board: ResourceBackend,
    pub exam_session: ResourceBackend,
    pub exam_paper_question: ResourceBackend,
    pub exam_paper_answer: ResourceBackend,
    pub exam_paper: ResourceBackend,
    pub question: ResourceBackend,
    pub subject: ResourceBackend,
    pub submission: ResourceBackend,
    pub subscription: ResourceBackend,
    pub subscription_plan: ResourceBackend,
    pub user: ResourceBackend,
}

impl ResourcesConfig {
    /// Every resource served by the same backend
    pub fn all_live(base_url: Url) -> Self {
        let mut resources = Self::default();
        for resource in Resource::ALL {
            resources.set(
                resource,
                ResourceBackend::Live {
                    base_url: base_url.clone(),
                },
            );
        }
        resources
    }

    pub fn get(&self, resource: Resource) -> &ResourceBackend {
        match resource {
            Resource::Auth => &self.auth,
            Resource::MarkingFeedback => &self.marking_feedback,
            Resource::AnswerHint => &self.answer_hint,
            Resource::ExamBoard => &self.exam_board,
            Resource::ExamSession => &self.exam_session,
            Resource::ExamPaperQuestion => &self.exam_paper_question,
            Resource::ExamPaperAnswer => &self.exam_paper_answer,
            Resource::ExamPaper => &self.exam_paper,
            Resource::Question => &self.question,
            Resource::Subject => &self.subject,
            Resource::Submission => &self.submission,
            Resource::Subscription => &self.subscription,
            Resource::SubscriptionPlan => &self.subscription_plan,
            Resource::User => &self.user,
        }
    }

    pub fn set(&mut self, resource: Resource, backend: ResourceBackend) {
        let slot = match resource {
            Resource::Auth => &mut self.auth,
            Resource::MarkingFeedback => &mut self.marking_feedback,
            Resource::AnswerHint => &mut self.answer_hint,
            Resource::ExamBoard => &mut self.exam_board,
            Resource::ExamSession => &mut self.exam_session,
            Resource::ExamPaperQuestion => &mut self.exam_paper_question,
            Resource::ExamPaperAnswer => &mut self.exam_paper_answer,
            Resource::ExamPaper => &mut self.exam_paper,
            Resource::Question => &mut self.question,
            Resource::Subject => &mut self.subject,
            Resource::Submission => &mut self.submission,
            Resource::Subscription => &mut self.subscription,
            Resource::SubscriptionPlan => &mut self.subscription_plan,
            Resource::User => &mut self.user,
        };
        *slot = backend;
    }

    /// Resources currently answered from sample data
    pub fn mocked(&self) -> Vec<Resource> {
        Resource::ALL.into_iter().filter(|r| self.get(*r).is_mocked()).collect()
    }
}

/// Mocked-resource behaviour.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MockConfig {
    /// Artificial delay before every mocked response
    #[serde(with = "humantime_serde")]
    pub latency: Duration,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self { latency: DEFAULT_LATENCY }
    }
}

/// Bearer token storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "store", rename_all = "lowercase")]
pub enum CredentialsConfig {
    /// Token lives only as long as the process
    #[default]
    Memory,
    /// Token is persisted as JSON at `path`
    File { path: PathBuf },
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load(args: &Args) -> Result<Self, figment::Error> {
        let config: Self = Self::figment(args).extract()?;
        config.validate().map_err(|e| figment::Error::from(e.to_string()))?;
        Ok(config)
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<(), Error> {
        if self.request_timeout.is_zero() {
            return Err(Error::Config {
                message: "request_timeout must be greater than zero".to_string(),
            });
        }

        for resource in Resource::ALL {
            if let ResourceBackend::Live { base_url } = self.resources.get(resource) {
                if base_url.cannot_be_a_base() {
                    return Err(Error::Config {
                        message: format!("resources.{resource}.base_url ({base_url}) cannot be used as a base URL"),
                    });
                }
                if !matches!(base_url.scheme(), "http" | "https") {
                    return Err(Error::Config {
                        message: format!("resources.{resource}.base_url must use http or https, got {}", base_url.scheme()),
                    });
                }
            }
        }

        if let CredentialsConfig::File { path } = &self.credentials {
            if path.as_os_str().is_empty() {
                return Err(Error::Config {
                    message: "credentials.path must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn figment(args: &Args) -> Figment {
        Figment::new()
            // Load base config file
            .merge(Yaml::file(&args.config))
            // Environment variables override specific values. GCSE_CONFIG names the file itself.
            .merge(Env::prefixed("GCSE_").ignore(&["CONFIG", "SMOKE_EMAIL", "SMOKE_PASSWORD"]).split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn args(path: &str) -> Args {
        Args {
            config: path.to_string(),
            validate: false,
            email: "smoke-test@example.com".to_string(),
            password: "password123".to_string(),
            logout: false,
        }
    }

    #[test]
    fn test_defaults_mock_everything() {
        Jail::expect_with(|jail| {
            jail.create_file("test.yaml", "{}")?;

            let config = Config::load(&args("test.yaml"))?;

            assert_eq!(config.resources.mocked().len(), Resource::ALL.len());
            assert_eq!(config.mock.latency, Duration::from_millis(500));
            assert_eq!(config.request_timeout, Duration::from_secs(30));
            assert_eq!(config.credentials, CredentialsConfig::Memory);

            Ok(())
        });
    }

    #[test]
    fn test_mixed_live_and_mocked_resources() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "test.yaml",
                r#"
request_timeout: 5s
mock:
  latency: 20ms
resources:
  subject:
    mode: live
    base_url: https://content.example.com/api
  answer_hint:
    mode: mocked
"#,
            )?;

            let config = Config::load(&args("test.yaml"))?;

            assert_eq!(
                config.resources.get(Resource::Subject),
                &ResourceBackend::Live {
                    base_url: "https://content.example.com/api".parse().unwrap()
                }
            );
            assert!(config.resources.get(Resource::AnswerHint).is_mocked());
            assert!(config.resources.get(Resource::Auth).is_mocked());
            assert_eq!(config.mock.latency, Duration::from_millis(20));
            assert_eq!(config.request_timeout, Duration::from_secs(5));

            Ok(())
        });
    }

    #[test]
    fn test_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "test.yaml",
                r#"
mock:
  latency: 1s
"#,
            )?;

            jail.set_env("GCSE_CONFIG", "test.yaml");
            jail.set_env("GCSE_REQUEST_TIMEOUT", "10s");
            jail.set_env("GCSE_RESOURCES__SUBMISSION__MODE", "live");
            jail.set_env("GCSE_RESOURCES__SUBMISSION__BASE_URL", "http://submissions.internal:8080");

            let config = Config::load(&args("test.yaml"))?;

            assert_eq!(config.request_timeout, Duration::from_secs(10));
            assert_eq!(config.mock.latency, Duration::from_secs(1));
            assert!(!config.resources.get(Resource::Submission).is_mocked());
            assert_eq!(config.resources.mocked().len(), Resource::ALL.len() - 1);

            Ok(())
        });
    }

    #[test]
    fn test_blank_live_url_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "test.yaml",
                r#"
resources:
  subject:
    mode: live
    base_url: ""
"#,
            )?;

            assert!(Config::load(&args("test.yaml")).is_err());

            Ok(())
        });
    }

    #[test]
    fn test_file_credentials_config() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "test.yaml",
                r#"
credentials:
  store: file
  path: creds/token.json
"#,
            )?;

            let config = Config::load(&args("test.yaml"))?;
            assert_eq!(
                config.credentials,
                CredentialsConfig::File {
                    path: PathBuf::from("creds/token.json")
                }
            );

            Ok(())
        });
    }

    #[test]
    fn test_unknown_resource_key_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "test.yaml",
                r#"
resources:
  homework:
    mode: mocked
"#,
            )?;

            assert!(Config::load(&args("test.yaml")).is_err());

            Ok(())
        });
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let config = Config {
            request_timeout: Duration::ZERO,
            ..Default::default()
        };

        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("request_timeout"));
    }

    #[test]
    fn test_config_validation_non_http_scheme() {
        let mut config = Config::default();
        config.resources.set(
            Resource::Question,
            ResourceBackend::Live {
                base_url: "ftp://questions.example.com".parse().unwrap(),
            },
        );

        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("resources.question.base_url"));
    }

    #[test]
    fn test_from_base_url_treats_blank_as_mocked() {
        assert_eq!(ResourceBackend::from_base_url("").unwrap(), ResourceBackend::Mocked);
        assert_eq!(ResourceBackend::from_base_url("   ").unwrap(), ResourceBackend::Mocked);
        assert_eq!(
            ResourceBackend::from_base_url(" https://api.example.com ").unwrap(),
            ResourceBackend::Live {
                base_url: "https://api.example.com".parse().unwrap()
            }
        );
        assert!(ResourceBackend::from_base_url("not a url").is_err());
    }

    #[test]
    fn test_resource_keys_round_trip_through_set_and_get() {
        let base: Url = "http://localhost:9000".parse().unwrap();
        let resources = ResourcesConfig::all_live(base.clone());

        for resource in Resource::ALL {
            assert_eq!(resources.get(resource), &ResourceBackend::Live { base_url: base.clone() }, "{resource}");
        }
        assert!(resources.mocked().is_empty());
    }
}
