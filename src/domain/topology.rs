// Topology map query model
use super::group_configuration::GroupBy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const MICROS_PER_SECOND: u64 = 1_000_000;

/// Data retention timelines, one entry per sampling resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timelines {
    #[serde(default)]
    pub agents: Vec<Timeline>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Time bounds and sampling are expressed in microseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub sampling: u64,
    #[serde(default)]
    pub from: u64,
    #[serde(default)]
    pub to: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Timelines {
    /// Timeline sampled every `sampling_s` seconds, if the service keeps one.
    pub fn with_sampling(&self, sampling_s: u64) -> Option<&Timeline> {
        let sampling_us = sampling_s.saturating_mul(MICROS_PER_SECOND);
        self.agents.iter().find(|t| t.sampling == sampling_us)
    }
}

impl Timeline {
    /// Window ending at the latest retained sample, spanning at least one sample.
    pub fn latest_window(&self, time_window_s: u64) -> Timeline {
        let span = time_window_s
            .saturating_mul(MICROS_PER_SECOND)
            .max(self.sampling);
        Timeline {
            from: self.to.saturating_sub(span),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyRequest {
    pub format: MapFormat,
    pub time: Timeline,
    pub limit: TopologyLimits,
    pub group: TopologyGrouping,
    pub node_metrics: Vec<MetricSelection>,
    pub link_metrics: Vec<MetricSelection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapFormat {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub export_process: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyLimits {
    pub host_groups: u32,
    pub hosts: u32,
    pub containers: u32,
    pub processes: u32,
}

impl Default for TopologyLimits {
    fn default() -> Self {
        Self {
            host_groups: 20,
            hosts: 20,
            containers: 20,
            processes: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologyGrouping {
    pub configuration: TopologyGroupConfiguration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologyGroupConfiguration {
    pub groups: Vec<TopologyGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyGroup {
    pub filters: Vec<Value>,
    pub group_by: Vec<GroupBy>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSelection {
    pub id: &'static str,
    pub aggregation: &'static str,
    pub group_aggregation: &'static str,
}

impl TopologyRequest {
    /// Map query grouped by `hierarchy`, reporting CPU per node and bytes per link.
    pub fn new(hierarchy: &[String], time: Timeline) -> Self {
        Self {
            format: MapFormat {
                kind: "map",
                export_process: true,
            },
            time,
            limit: TopologyLimits::default(),
            group: TopologyGrouping {
                configuration: TopologyGroupConfiguration {
                    groups: vec![TopologyGroup {
                        filters: Vec::new(),
                        group_by: hierarchy.iter().map(|m| GroupBy::new(m)).collect(),
                    }],
                },
            },
            node_metrics: vec![MetricSelection {
                id: "cpu.used.percent",
                aggregation: "timeAvg",
                group_aggregation: "avg",
            }],
            link_metrics: vec![MetricSelection {
                id: "net.bytes.total",
                aggregation: "timeAvg",
                group_aggregation: "sum",
            }],
        }
    }
}
