// Repository trait for the dashboard resources the templating workflow reads and writes
use crate::domain::dashboard::Dashboard;
use crate::domain::group_configuration::GroupConfiguration;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// All dashboards visible to the caller, in server order
    async fn fetch_dashboards(&self) -> Result<Vec<Dashboard>>;

    async fn fetch_group_configurations(&self) -> Result<Vec<GroupConfiguration>>;

    /// Create a grouping configuration. Fails if the id is already taken.
    /// Success means the service accepted it; the response body is not read
    async fn create_group_configuration(&self, configuration: &GroupConfiguration) -> Result<()>;

    /// Create a dashboard. `id` and `version` of the input must be unset
    async fn create_dashboard(&self, dashboard: &Dashboard) -> Result<Dashboard>;
}
