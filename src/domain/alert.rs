// Alert domain model
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An alert as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub severity: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parameters for a new manual alert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlert {
    pub name: String,
    pub description: String,
    /// Condition expression, e.g. `avg(cpu.used.percent) > 80`.
    pub condition: String,
    /// Dimension the alert is evaluated for separately, if any.
    pub segment_by: Option<String>,
    /// How long the condition must hold, in microseconds.
    pub for_at_least_us: u64,
    pub severity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDefinition {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub severity: u32,
    pub notify: Vec<&'static str>,
    pub timespan: u64,
    pub condition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_by: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_condition: Option<SegmentCondition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentCondition {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl From<NewAlert> for AlertDefinition {
    fn from(alert: NewAlert) -> Self {
        let segment_by = alert.segment_by.filter(|s| !s.is_empty());

        AlertDefinition {
            kind: "MANUAL",
            name: alert.name,
            description: alert.description,
            enabled: true,
            severity: alert.severity,
            notify: vec!["EMAIL"],
            timespan: alert.for_at_least_us,
            condition: alert.condition,
            segment_condition: segment_by.as_ref().map(|_| SegmentCondition { kind: "ANY" }),
            segment_by: segment_by.map(|s| vec![s]),
        }
    }
}
