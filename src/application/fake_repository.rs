// In-memory stand-in for the monitoring service, recording every call it receives
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::monitoring_repository::MonitoringRepository;
use crate::domain::account::{MetricDescriptor, User, UserInfo};
use crate::domain::alert::{Alert, AlertDefinition};
use crate::domain::dashboard::Dashboard;
use crate::domain::group_configuration::GroupConfiguration;
use crate::domain::notification::NotificationSettings;
use crate::domain::topology::{Timelines, TopologyRequest};
use crate::error::{Result, SdcError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchDashboards,
    FetchGroupConfigurations,
    CreateGroupConfiguration(String),
    CreateDashboard(String),
    Alerts,
    CreateAlert(String),
    NotificationSettings,
    SetNotificationSettings,
    DataRetentionInfo,
    TopologyData,
}

impl Call {
    pub fn is_create(&self) -> bool {
        matches!(
            self,
            Call::CreateGroupConfiguration(_) | Call::CreateDashboard(_) | Call::CreateAlert(_)
        )
    }
}

#[derive(Debug, Default)]
pub struct FakeState {
    pub dashboards: Vec<Dashboard>,
    pub group_configurations: Vec<GroupConfiguration>,
    pub alerts: Vec<Alert>,
    pub notification_settings: Option<NotificationSettings>,
    pub timelines: Option<Timelines>,
    pub topology_requests: Vec<Value>,
    pub calls: Vec<Call>,
    /// Make the n-th grouping configuration create (1-based) fail.
    pub fail_group_configuration_at: Option<usize>,
    pub fail_dashboard_create: bool,
    pub fail_fetch: bool,
}

#[derive(Debug, Default)]
pub struct FakeRepository {
    state: Mutex<FakeState>,
}

fn rejected(status: u16, message: &str) -> SdcError {
    SdcError::Transport {
        status,
        message: message.to_string(),
    }
}

impl FakeRepository {
    pub fn new(state: FakeState) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(state),
        })
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    fn record(&self, call: Call) -> MutexGuard<'_, FakeState> {
        let mut state = self.state();
        state.calls.push(call);
        state
    }
}

#[async_trait]
impl DashboardRepository for FakeRepository {
    async fn fetch_dashboards(&self) -> Result<Vec<Dashboard>> {
        let state = self.record(Call::FetchDashboards);
        if state.fail_fetch {
            return Err(rejected(401, "Bad credentials"));
        }
        Ok(state.dashboards.clone())
    }

    async fn fetch_group_configurations(&self) -> Result<Vec<GroupConfiguration>> {
        let state = self.record(Call::FetchGroupConfigurations);
        if state.fail_fetch {
            return Err(rejected(401, "Bad credentials"));
        }
        Ok(state.group_configurations.clone())
    }

    async fn create_group_configuration(&self, configuration: &GroupConfiguration) -> Result<()> {
        let mut state = self.record(Call::CreateGroupConfiguration(configuration.id.clone()));
        let attempt = state
            .calls
            .iter()
            .filter(|c| matches!(c, Call::CreateGroupConfiguration(_)))
            .count();

        if state.fail_group_configuration_at == Some(attempt) {
            return Err(rejected(500, "internal error"));
        }
        if state
            .group_configurations
            .iter()
            .any(|c| c.id == configuration.id)
        {
            return Err(rejected(409, "group configuration id already in use"));
        }
        state.group_configurations.push(configuration.clone());
        Ok(())
    }

    async fn create_dashboard(&self, dashboard: &Dashboard) -> Result<Dashboard> {
        let mut state = self.record(Call::CreateDashboard(dashboard.name.clone()));
        if state.fail_dashboard_create {
            return Err(SdcError::Validation {
                status: 422,
                message: "items: invalid".to_string(),
            });
        }

        let mut created = dashboard.clone();
        created.id = Some(Value::from(state.dashboards.len() + 1000));
        created.version = Some(1);
        state.dashboards.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl MonitoringRepository for FakeRepository {
    async fn user_info(&self) -> Result<UserInfo> {
        Ok(UserInfo {
            user: User {
                username: Some("fake@example.com".to_string()),
                extra: Map::new(),
            },
            extra: Map::new(),
        })
    }

    async fn connected_agents_count(&self) -> Result<u64> {
        Ok(0)
    }

    async fn alerts(&self) -> Result<Vec<Alert>> {
        let state = self.record(Call::Alerts);
        Ok(state.alerts.clone())
    }

    async fn create_alert(&self, alert: &AlertDefinition) -> Result<Alert> {
        let mut state = self.record(Call::CreateAlert(alert.name.clone()));
        let created = Alert {
            id: Some(state.alerts.len() as i64 + 1),
            name: alert.name.clone(),
            description: Some(alert.description.clone()),
            enabled: alert.enabled,
            severity: Some(alert.severity),
            extra: Map::new(),
        };
        state.alerts.push(created.clone());
        Ok(created)
    }

    async fn notification_settings(&self) -> Result<NotificationSettings> {
        let state = self.record(Call::NotificationSettings);
        state
            .notification_settings
            .clone()
            .ok_or_else(|| rejected(404, "no notification settings"))
    }

    async fn set_notification_settings(
        &self,
        settings: &NotificationSettings,
    ) -> Result<NotificationSettings> {
        let mut state = self.record(Call::SetNotificationSettings);
        state.notification_settings = Some(settings.clone());
        Ok(settings.clone())
    }

    async fn data_retention_info(&self) -> Result<Timelines> {
        let state = self.record(Call::DataRetentionInfo);
        state
            .timelines
            .clone()
            .ok_or_else(|| rejected(503, "history unavailable"))
    }

    async fn topology_data(&self, request: &TopologyRequest) -> Result<Value> {
        let mut state = self.record(Call::TopologyData);
        let body = serde_json::to_value(request).map_err(|source| SdcError::Decode {
            context: "topology request",
            source,
        })?;
        state.topology_requests.push(body);
        Ok(serde_json::json!({"nodes": [], "links": []}))
    }

    async fn metrics(&self) -> Result<BTreeMap<String, MetricDescriptor>> {
        Ok(BTreeMap::new())
    }
}
