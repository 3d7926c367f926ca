// Monitoring service REST client - implements the repository traits over HTTP
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::monitoring_repository::MonitoringRepository;
use crate::domain::account::{MetricDescriptor, UserInfo};
use crate::domain::alert::{Alert, AlertDefinition};
use crate::domain::dashboard::Dashboard;
use crate::domain::group_configuration::GroupConfiguration;
use crate::domain::notification::NotificationSettings;
use crate::domain::topology::{Timelines, TopologyRequest};
use crate::error::Result;
use crate::infrastructure::http_response::{check_status, read_json};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::sync::Mutex;

pub const DEFAULT_URL: &str = "https://app.sysdigcloud.com";

#[derive(Debug)]
pub struct SdcClient {
    client: reqwest::Client,
    url: String,
    token: String,
    user_info: Mutex<Option<UserInfo>>,
}

#[derive(Debug, Deserialize)]
struct DashboardList {
    dashboards: Vec<Dashboard>,
}

#[derive(Debug, Serialize)]
struct DashboardPayload<'a> {
    dashboard: &'a Dashboard,
}

#[derive(Debug, Deserialize)]
struct DashboardEnvelope {
    dashboard: Dashboard,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupConfigurationList {
    group_configurations: Vec<GroupConfiguration>,
}

#[derive(Debug, Deserialize)]
struct AlertList {
    alerts: Vec<Alert>,
}

#[derive(Debug, Serialize)]
struct AlertPayload<'a> {
    alert: &'a AlertDefinition,
}

#[derive(Debug, Deserialize)]
struct AlertEnvelope {
    alert: Alert,
}

#[derive(Debug, Deserialize)]
struct ConnectedAgents {
    total: u64,
}

impl SdcClient {
    pub fn new(url: &str, token: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            user_info: Mutex::new(None),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Forget the cached user info; the next `user_info` call fetches it again.
    pub async fn reset_user_info(&self) {
        *self.user_info.lock().await = None;
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}{}", method, self.url, path);
        self.client
            .request(method, format!("{}{}", self.url, path))
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &'static str,
    ) -> Result<T> {
        let response = request.send().await?;
        read_json(response, context).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, context: &'static str) -> Result<T> {
        self.execute(self.request(Method::GET, path), context).await
    }

    async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        context: &'static str,
    ) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(method, path).json(body), context)
            .await
    }
}

#[async_trait]
impl DashboardRepository for SdcClient {
    async fn fetch_dashboards(&self) -> Result<Vec<Dashboard>> {
        let list: DashboardList = self.get("/ui/dashboards", "dashboards").await?;
        tracing::debug!("Fetched {} dashboards", list.dashboards.len());
        Ok(list.dashboards)
    }

    async fn fetch_group_configurations(&self) -> Result<Vec<GroupConfiguration>> {
        let list: GroupConfigurationList = self
            .get("/api/groupConfigurations", "group configurations")
            .await?;
        Ok(list.group_configurations)
    }

    async fn create_group_configuration(&self, configuration: &GroupConfiguration) -> Result<()> {
        let response = self
            .request(Method::POST, "/api/groupConfigurations")
            .json(configuration)
            .send()
            .await?;
        check_status(response, "group configuration").await
    }

    async fn create_dashboard(&self, dashboard: &Dashboard) -> Result<Dashboard> {
        let created: DashboardEnvelope = self
            .send_json(
                Method::POST,
                "/ui/dashboards",
                &DashboardPayload { dashboard },
                "dashboard",
            )
            .await?;
        Ok(created.dashboard)
    }
}

#[async_trait]
impl MonitoringRepository for SdcClient {
    async fn user_info(&self) -> Result<UserInfo> {
        let mut cached = self.user_info.lock().await;
        if let Some(info) = cached.as_ref() {
            return Ok(info.clone());
        }

        let info: UserInfo = self.get("/api/user/me", "user info").await?;
        *cached = Some(info.clone());
        Ok(info)
    }

    async fn connected_agents_count(&self) -> Result<u64> {
        let agents: ConnectedAgents = self
            .get("/api/agents/connected", "connected agents")
            .await?;
        Ok(agents.total)
    }

    async fn alerts(&self) -> Result<Vec<Alert>> {
        let list: AlertList = self.get("/api/alerts", "alerts").await?;
        Ok(list.alerts)
    }

    async fn create_alert(&self, alert: &AlertDefinition) -> Result<Alert> {
        let created: AlertEnvelope = self
            .send_json(Method::POST, "/api/alerts", &AlertPayload { alert }, "alert")
            .await?;
        Ok(created.alert)
    }

    async fn notification_settings(&self) -> Result<NotificationSettings> {
        self.get("/api/settings/notifications", "notification settings")
            .await
    }

    async fn set_notification_settings(
        &self,
        settings: &NotificationSettings,
    ) -> Result<NotificationSettings> {
        self.send_json(
            Method::PUT,
            "/api/settings/notifications",
            settings,
            "notification settings",
        )
        .await
    }

    async fn data_retention_info(&self) -> Result<Timelines> {
        self.get("/api/history/timelines/", "data retention").await
    }

    async fn topology_data(&self, request: &TopologyRequest) -> Result<Value> {
        self.send_json(Method::POST, "/api/data?format=map", request, "topology map")
            .await
    }

    async fn metrics(&self) -> Result<BTreeMap<String, MetricDescriptor>> {
        self.get("/api/data/metrics", "metrics").await
    }
}
