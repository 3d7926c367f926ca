// Repository trait for account, alerting, notification and data endpoints
use crate::domain::account::{MetricDescriptor, UserInfo};
use crate::domain::alert::{Alert, AlertDefinition};
use crate::domain::notification::NotificationSettings;
use crate::domain::topology::{Timelines, TopologyRequest};
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

#[async_trait]
pub trait MonitoringRepository: Send + Sync {
    /// Current user. Implementations may cache this
    async fn user_info(&self) -> Result<UserInfo>;

    /// Number of agents currently connected
    async fn connected_agents_count(&self) -> Result<u64>;

    async fn alerts(&self) -> Result<Vec<Alert>>;

    async fn create_alert(&self, alert: &AlertDefinition) -> Result<Alert>;

    async fn notification_settings(&self) -> Result<NotificationSettings>;

    async fn set_notification_settings(
        &self,
        settings: &NotificationSettings,
    ) -> Result<NotificationSettings>;

    /// Retention timelines for each sampling resolution
    async fn data_retention_info(&self) -> Result<Timelines>;

    /// Run a topology map query. The map itself is returned as-is
    async fn topology_data(&self, request: &TopologyRequest) -> Result<Value>;

    /// Metric catalog keyed by metric id
    async fn metrics(&self) -> Result<BTreeMap<String, MetricDescriptor>>;
}
