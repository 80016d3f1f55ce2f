//! A user's subscription.

use tracing::{debug, instrument, warn};

use crate::{
    client::{ApiClient, Backend},
    config::Resource,
    errors::{Error, Result},
    http::RequestOptions,
    mock::{self, data},
    models::subscriptions::{Subscription, SubscriptionCreate},
};

const PATH: &str = "subscription";

/// Outcome of looking up a user's current subscription.
///
/// Having no subscription is a normal state, so it is kept apart from a failed lookup.
#[derive(Debug)]
pub enum SubscriptionLookup {
    Found(Subscription),
    /// The user has no subscription (including a 404 from the backend)
    Absent,
    Failed(Error),
}

impl SubscriptionLookup {
    /// Treat any failure as "no subscription"
    pub fn into_option(self) -> Option<Subscription> {
        match self {
            SubscriptionLookup::Found(subscription) => Some(subscription),
            SubscriptionLookup::Absent | SubscriptionLookup::Failed(_) => None,
        }
    }

    /// Keep failures as errors; absence is `Ok(None)`
    pub fn into_result(self) -> Result<Option<Subscription>> {
        match self {
            SubscriptionLookup::Found(subscription) => Ok(Some(subscription)),
            SubscriptionLookup::Absent => Ok(None),
            SubscriptionLookup::Failed(e) => Err(e),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SubscriptionLookup::Found(_))
    }
}

pub struct Subscriptions<'a> {
    client: &'a ApiClient,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, subscription: &SubscriptionCreate) -> Result<Subscription> {
        match self.client.resolve(Resource::Subscription).await {
            Backend::Mocked => Ok(subscription.clone().synthesize()),
            Backend::Live(base) => {
                let options = RequestOptions::post().json(subscription)?.authenticated();
                self.client.call(base, &[PATH], &[], options).await
            }
        }
    }

    /// Current subscription for `user_id`. Never returns an error; inspect the lookup instead.
    #[instrument(skip(self))]
    pub async fn get_user_subscription(&self, user_id: &str) -> SubscriptionLookup {
        let base = match self.client.resolve(Resource::Subscription).await {
            Backend::Mocked => return SubscriptionLookup::Absent,
            Backend::Live(base) => base,
        };

        let result: Result<Subscription> = self
            .client
            .call(base, &[PATH], &[("user_id", user_id)], RequestOptions::get().authenticated())
            .await;
        match result {
            Ok(subscription) => SubscriptionLookup::Found(subscription),
            Err(e) if e.is_not_found() => {
                debug!("No subscription for user {user_id}");
                SubscriptionLookup::Absent
            }
            Err(e) => {
                warn!("Subscription lookup for user {user_id} failed: {e}");
                SubscriptionLookup::Failed(e)
            }
        }
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: &str) -> Result<Subscription> {
        match self.client.resolve(Resource::Subscription).await {
            Backend::Mocked => mock::find(data::subscriptions(), "Subscription", id, |s| s.id.as_str()),
            Backend::Live(base) => {
                self.client
                    .call(base, &[PATH, id], &[], RequestOptions::get().authenticated())
                    .await
            }
        }
    }
}
