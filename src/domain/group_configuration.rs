// Grouping configuration domain model
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Id of the built-in configuration that drives the Explore tab hierarchy.
pub const EXPLORE_CONFIGURATION_ID: &str = "explore";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfiguration {
    pub id: String,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default)]
    pub group_by: Vec<GroupBy>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBy {
    pub metric: String,
}

impl GroupBy {
    pub fn new(metric: &str) -> Self {
        Self {
            metric: metric.to_string(),
        }
    }
}

impl GroupConfiguration {
    /// Configuration with a single group over `group_by`.
    pub fn single_group(id: String, group_by: Vec<GroupBy>) -> Self {
        Self {
            id,
            groups: vec![Group {
                group_by,
                extra: Map::new(),
            }],
            extra: Map::new(),
        }
    }

    /// Metric names of the first group's group-by list.
    pub fn hierarchy(&self) -> Option<Vec<String>> {
        self.groups
            .first()
            .map(|g| g.group_by.iter().map(|b| b.metric.clone()).collect())
    }
}
