// Topology service - Explore hierarchy and topology map queries
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::monitoring_repository::MonitoringRepository;
use crate::domain::group_configuration::EXPLORE_CONFIGURATION_ID;
use crate::domain::topology::TopologyRequest;
use crate::error::{Result, SdcError};
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct TopologyService {
    dashboards: Arc<dyn DashboardRepository>,
    monitoring: Arc<dyn MonitoringRepository>,
}

impl TopologyService {
    pub fn new(
        dashboards: Arc<dyn DashboardRepository>,
        monitoring: Arc<dyn MonitoringRepository>,
    ) -> Self {
        Self {
            dashboards,
            monitoring,
        }
    }

    /// Grouping hierarchy used by the Explore tab, outermost level first.
    pub async fn explore_grouping_hierarchy(&self) -> Result<Vec<String>> {
        let configurations = self.dashboards.fetch_group_configurations().await?;

        configurations
            .iter()
            .find(|c| c.id == EXPLORE_CONFIGURATION_ID)
            .and_then(|c| c.hierarchy())
            .ok_or_else(|| {
                SdcError::UnexpectedResponse(
                    "groupConfigurations has no usable \"explore\" entry".to_string(),
                )
            })
    }

    /// Topology map for the last `time_window_s` seconds at `sampling_s` resolution,
    /// grouped by `grouping_hierarchy`.
    pub async fn topology_map(
        &self,
        grouping_hierarchy: &[String],
        time_window_s: u64,
        sampling_s: u64,
    ) -> Result<Value> {
        let timelines = self.monitoring.data_retention_info().await?;
        let timeline = timelines
            .with_sampling(sampling_s)
            .ok_or(SdcError::UnsupportedSampling(sampling_s))?;

        let time = timeline.latest_window(time_window_s);
        tracing::debug!(
            "Requesting topology map from {} to {} grouped by {:?}",
            time.from,
            time.to,
            grouping_hierarchy
        );

        let request = TopologyRequest::new(grouping_hierarchy, time);
        self.monitoring.topology_data(&request).await
    }
}
