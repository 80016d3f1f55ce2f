//! Login, signup and the current user.

use tracing::{info, instrument};

use crate::{
    client::{ApiClient, Backend},
    config::Resource,
    errors::Result,
    http::RequestOptions,
    mock::{self, data},
    models::users::{AuthResponse, LoginCredentials, SignupData, User},
};

pub struct Auth<'a> {
    client: &'a ApiClient,
}

impl<'a> Auth<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token and keep it for later authenticated calls
    #[instrument(skip_all, fields(email = %credentials.email), err)]
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse> {
        let response = match self.client.resolve(Resource::Auth).await {
            Backend::Mocked => mock_auth_response(&credentials.email, None),
            Backend::Live(base) => {
                let options = RequestOptions::post().json(credentials)?;
                self.client.call(base, &["auth", "login"], &[], options).await?
            }
        };
        self.remember(&response)?;
        info!("Logged in");
        Ok(response)
    }

    /// Register a new account; a returned token is stored exactly as on login
    #[instrument(skip_all, fields(email = %data.email), err)]
    pub async fn signup(&self, data: &SignupData) -> Result<AuthResponse> {
        let response = match self.client.resolve(Resource::Auth).await {
            Backend::Mocked => mock_auth_response(&data.email, data.name.clone()),
            Backend::Live(base) => {
                let options = RequestOptions::post().json(data)?;
                self.client.call(base, &["auth", "signup"], &[], options).await?
            }
        };
        self.remember(&response)?;
        info!("Signed up");
        Ok(response)
    }

    #[instrument(skip(self), err)]
    pub async fn me(&self) -> Result<User> {
        match self.client.resolve(Resource::Auth).await {
            Backend::Mocked => Ok(data::current_user()),
            Backend::Live(base) => {
                self.client
                    .call(base, &["auth", "me"], &[], RequestOptions::get().authenticated())
                    .await
            }
        }
    }

    /// Drop the stored token and return to the landing page
    pub fn logout(&self) -> Result<()> {
        self.client.session().logout()
    }

    pub fn token(&self) -> Option<String> {
        self.client.session().token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.session().is_authenticated()
    }

    fn remember(&self, response: &AuthResponse) -> Result<()> {
        if response.token.is_empty() {
            return Ok(());
        }
        self.client.session().store_token(&response.token)
    }
}

fn mock_auth_response(email: &str, name: Option<String>) -> AuthResponse {
    let sample = data::current_user();
    AuthResponse {
        token: format!("mock-token-{}", mock::mock_id()),
        user: Some(User {
            email: email.to_string(),
            name: name.or(sample.name),
            ..sample
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{live_client, mocked_client};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn credentials() -> LoginCredentials {
        LoginCredentials {
            email: "learner@example.com".to_string(),
            password: "hunter22".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_login_stores_token() {
        let client = mocked_client();
        let response = client.auth().login(&credentials()).await.unwrap();

        assert!(response.token.starts_with("mock-token-"));
        assert_eq!(response.user.unwrap().email, "learner@example.com");
        assert_eq!(client.auth().token(), Some(response.token));
    }

    #[tokio::test]
    async fn test_live_login_posts_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({"email": "learner@example.com", "password": "hunter22"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = live_client(&server.uri());
        let response = client.auth().login(&credentials()).await.unwrap();
        assert_eq!(response.token, "jwt-1");
        assert!(client.auth().is_authenticated());
    }

    #[tokio::test]
    async fn test_live_login_without_token_stores_nothing() {
        let server = MockServer::start().await;
        Mock::given(path("/auth/signup"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"user": {"id": "7", "email": "a@b.c"}})))
            .expect(1)
            .mount(&server)
            .await;

        let client = live_client(&server.uri());
        let data = SignupData {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
            name: None,
        };
        let response = client.auth().signup(&data).await.unwrap();
        assert!(response.token.is_empty());
        assert!(!client.auth().is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_previous_token() {
        let server = MockServer::start().await;
        Mock::given(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})))
            .mount(&server)
            .await;

        let client = live_client(&server.uri());
        client.session().store_token("old").unwrap();

        let err = client.auth().login(&credentials()).await.unwrap_err();
        assert_eq!(err.status_code(), 401);
        assert_eq!(client.auth().token().as_deref(), Some("old"));
    }

    #[tokio::test]
    async fn test_me_sends_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .and(header("authorization", "Bearer jwt-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1", "email": "x@y.z"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = live_client(&server.uri());
        client.session().store_token("jwt-2").unwrap();
        let user = client.auth().me().await.unwrap();
        assert_eq!(user.email, "x@y.z");
    }
}
