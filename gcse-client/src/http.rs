//! Request executor for live resources.
//!
//! Every live endpoint call funnels through [`HttpExecutor::execute`]: one network call, an
//! optional bearer header, and a single place where non-success responses become
//! [`Error::Remote`]. There are no retries and nothing is cached.

use reqwest::{
    Client, Method,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::errors::{Error, Result};
use crate::session::Session;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Per-request options.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    /// Merged over the default `Content-Type: application/json`; caller values win
    pub headers: HeaderMap,
    /// Attach the stored bearer token, if there is one
    pub require_auth: bool,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: HeaderMap::new(),
            require_auth: false,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn patch() -> Self {
        Self::new(Method::PATCH)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `payload` as the request body
    pub fn json<T: Serialize + ?Sized>(self, payload: &T) -> Result<Self> {
        Ok(self.with_body(serde_json::to_value(payload)?))
    }

    pub fn with_header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn authenticated(mut self) -> Self {
        self.require_auth = true;
        self
    }
}

/// Issues HTTP calls on behalf of live resources.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
    session: Session,
}

impl HttpExecutor {
    pub fn new(session: Session, timeout: Duration) -> Result<Self> {
        // The binary installs this first; library users and tests may not have
        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| Error::Transport { source })?;
        Ok(Self { client, session })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Perform one call and return the parsed JSON body.
    ///
    /// A success without a JSON body yields an empty object.
    pub async fn execute(&self, url: Url, options: RequestOptions) -> Result<Value> {
        let RequestOptions {
            method,
            body,
            headers: caller_headers,
            require_auth,
        } = options;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.extend(caller_headers);

        if require_auth {
            match self.session.token() {
                Some(token) => match HeaderValue::from_str(&format!("Bearer {token}")) {
                    Ok(mut value) => {
                        value.set_sensitive(true);
                        headers.insert(AUTHORIZATION, value);
                    }
                    Err(_) => warn!("Stored token is not a valid header value, sending request without it"),
                },
                None => debug!("No stored token for authenticated request to {url}"),
            }
        }

        debug!("{method} {url}");

        let mut request = self.client.request(method.clone(), url.clone()).headers(headers);
        if let Some(body) = &body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await.map_err(|source| {
            warn!("{method} {url} failed before a response arrived: {source}");
            Error::Transport { source }
        })?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains(JSON_CONTENT_TYPE));
        let text = response.text().await.map_err(|source| Error::Transport { source })?;

        if !status.is_success() {
            let data = serde_json::from_str::<Value>(&text).unwrap_or_else(|_| json!({}));
            let message = data
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_owned)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            warn!("{method} {url} returned {status}: {message}");
            return Err(Error::Remote {
                status: status.as_u16(),
                message,
                data,
            });
        }

        if !is_json || text.trim().is_empty() {
            return Ok(json!({}));
        }

        serde_json::from_str(&text).map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Perform one call and decode the body into `T`
    pub async fn request<T: DeserializeOwned>(&self, url: Url, options: RequestOptions) -> Result<T> {
        let url_string = url.to_string();
        let value = self.execute(url, options).await?;
        serde_json::from_value(value).map_err(|source| Error::Decode { url: url_string, source })
    }

    /// Perform one call whose response body is irrelevant
    pub async fn send(&self, url: Url, options: RequestOptions) -> Result<()> {
        self.execute(url, options).await.map(|_| ())
    }
}

/// Append percent-encoded path segments and query pairs to a resource base URL.
///
/// A trailing slash on the base is ignored, so `https://host/api` and `https://host/api/` both
/// yield `https://host/api/subject`.
pub fn endpoint_url(base: &Url, segments: &[&str], query: &[(&str, &str)]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| Error::InvalidUrl { url: base.to_string() })?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}
