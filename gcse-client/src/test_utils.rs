//! Test utilities (available with the `test-utils` feature).

use std::time::Duration;
use url::Url;

use crate::client::ApiClient;
use crate::config::{Config, ResourcesConfig};

/// Every resource mocked, with no artificial latency
pub fn mocked_config() -> Config {
    let mut config = Config::default();
    config.mock.latency = Duration::ZERO;
    config
}

/// Every resource live against `base_url` (typically a wiremock server)
pub fn live_config(base_url: &str) -> Config {
    let base_url = Url::parse(base_url).expect("Invalid test base URL");
    Config {
        resources: ResourcesConfig::all_live(base_url),
        request_timeout: Duration::from_secs(5),
        ..mocked_config()
    }
}

pub fn mocked_client() -> ApiClient {
    ApiClient::new(&mocked_config()).expect("Failed to build mocked client")
}

pub fn live_client(base_url: &str) -> ApiClient {
    ApiClient::new(&live_config(base_url)).expect("Failed to build live client")
}
