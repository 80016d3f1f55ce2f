//! Subscription plans (the catalog) and per-user subscriptions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    mock,
    types::{SubscriptionId, SubscriptionPlanId, UserId},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: SubscriptionPlanId,
    pub name: String,
    pub price: f64,
    /// Billing period, e.g. "month"
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionPlanCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SubscriptionPlanId>,
    pub name: String,
    pub price: f64,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SubscriptionPlanCreate {
    pub(crate) fn synthesize(self) -> SubscriptionPlan {
        SubscriptionPlan {
            id: self.id.unwrap_or_else(mock::mock_id),
            name: self.name,
            price: self.price,
            duration: self.duration,
            features: self.features,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionPlanUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SubscriptionPlanUpdate {
    pub fn apply(self, plan: &mut SubscriptionPlan) {
        if let Some(name) = self.name {
            plan.name = name;
        }
        if let Some(price) = self.price {
            plan.price = price;
        }
        if let Some(duration) = self.duration {
            plan.duration = duration;
        }
        if let Some(features) = self.features {
            plan.features = Some(features);
        }
        if let Some(description) = self.description {
            plan.description = Some(description);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Cancelled,
    Expired,
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubscriptionStatus::Active => f.write_str("active"),
            SubscriptionStatus::Cancelled => f.write_str("cancelled"),
            SubscriptionStatus::Expired => f.write_str("expired"),
        }
    }
}

/// A user's subscription to a plan. At most one is active per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub user_id: UserId,
    pub plan_id: SubscriptionPlanId,
    pub status: SubscriptionStatus,
    pub start_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SubscriptionId>,
    pub user_id: UserId,
    pub plan_id: SubscriptionPlanId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl SubscriptionCreate {
    pub(crate) fn synthesize(self) -> Subscription {
        Subscription {
            id: self.id.unwrap_or_else(mock::mock_id),
            user_id: self.user_id,
            plan_id: self.plan_id,
            status: self.status.unwrap_or_default(),
            start_date: self.start_date.unwrap_or_else(Utc::now),
            end_date: self.end_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_update_overlays_only_set_fields() {
        let mut plan = SubscriptionPlan {
            id: "1".to_string(),
            name: "Basic".to_string(),
            price: 9.99,
            duration: "month".to_string(),
            features: Some(vec!["5 exams/month".to_string()]),
            description: Some("Perfect for occasional practice".to_string()),
        };

        SubscriptionPlanUpdate {
            price: Some(19.99),
            ..Default::default()
        }
        .apply(&mut plan);

        assert_eq!(plan.price, 19.99);
        assert_eq!(plan.name, "Basic");
        assert_eq!(plan.features.as_deref(), Some(&["5 exams/month".to_string()][..]));
    }

    #[test]
    fn test_subscription_create_defaults_to_active() {
        let subscription = SubscriptionCreate {
            user_id: "7".to_string(),
            plan_id: "2".to_string(),
            ..Default::default()
        }
        .synthesize();

        assert_eq!(subscription.status, SubscriptionStatus::Active);
        assert_eq!(subscription.user_id, "7");
        assert!(!subscription.id.is_empty());
        assert!(subscription.end_date.is_none());
    }
}
