use tracing::instrument;

use crate::{
    client::{ApiClient, Backend},
    config::Resource,
    errors::Result,
    http::RequestOptions,
    mock::{self, data},
    models::subscriptions::{SubscriptionPlan, SubscriptionPlanCreate, SubscriptionPlanUpdate},
};

const PATH: &str = "subscription_plan";

pub struct SubscriptionPlans<'a> {
    client: &'a ApiClient,
}

impl<'a> SubscriptionPlans<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self), err)]
    pub async fn list(&self) -> Result<Vec<SubscriptionPlan>> {
        match self.client.resolve(Resource::SubscriptionPlan).await {
            Backend::Mocked => Ok(data::subscription_plans()),
            Backend::Live(base) => self.client.call(base, &[PATH], &[], RequestOptions::get()).await,
        }
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: &str) -> Result<SubscriptionPlan> {
        match self.client.resolve(Resource::SubscriptionPlan).await {
            Backend::Mocked => mock::find(data::subscription_plans(), "Subscription plan", id, |p| p.id.as_str()),
            Backend::Live(base) => self.client.call(base, &[PATH, id], &[], RequestOptions::get()).await,
        }
    }

    #[instrument(skip(self), err)]
    pub async fn create(&self, plan: &SubscriptionPlanCreate) -> Result<SubscriptionPlan> {
        match self.client.resolve(Resource::SubscriptionPlan).await {
            Backend::Mocked => Ok(plan.clone().synthesize()),
            Backend::Live(base) => {
                let options = RequestOptions::post().json(plan)?.authenticated();
                self.client.call(base, &[PATH], &[], options).await
            }
        }
    }

    /// Partial update (PATCH)
    #[instrument(skip(self), err)]
    pub async fn update(&self, id: &str, update: &SubscriptionPlanUpdate) -> Result<SubscriptionPlan> {
        match self.client.resolve(Resource::SubscriptionPlan).await {
            Backend::Mocked => {
                let mut plan = mock::find(data::subscription_plans(), "Subscription plan", id, |p| p.id.as_str())?;
                update.clone().apply(&mut plan);
                Ok(plan)
            }
            Backend::Live(base) => {
                let options = RequestOptions::patch().json(update)?.authenticated();
                self.client.call(base, &[PATH, id], &[], options).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{live_client, mocked_client};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_mock_plans() {
        let plans = mocked_client().subscription_plans().list().await.unwrap();
        let summary: Vec<(&str, f64)> = plans.iter().map(|p| (p.name.as_str(), p.price)).collect();
        assert_eq!(summary, vec![("Basic", 9.99), ("Premium", 19.99), ("Student", 14.99)]);
    }

    #[tokio::test]
    async fn test_mock_update_price_only() {
        let update = SubscriptionPlanUpdate {
            price: Some(24.99),
            ..Default::default()
        };
        let plan = mocked_client().subscription_plans().update("2", &update).await.unwrap();
        assert_eq!(plan.name, "Premium");
        assert_eq!(plan.price, 24.99);
    }

    #[tokio::test]
    async fn test_live_update_is_patch_with_partial_body() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/subscription_plan/2"))
            .and(body_json(json!({"price": 24.99})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "2", "name": "Premium", "price": 24.99, "duration": "month"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let update = SubscriptionPlanUpdate {
            price: Some(24.99),
            ..Default::default()
        };
        let plan = live_client(&server.uri())
            .subscription_plans()
            .update("2", &update)
            .await
            .unwrap();
        assert_eq!(plan.price, 24.99);
    }
}
