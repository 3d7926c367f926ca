// Dashboard domain model
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A dashboard as stored by the monitoring service. Fields the client does not
/// interpret are carried in `extra` and re-submitted untouched. The id is
/// opaque and kept in whatever JSON form the service uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub version: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    pub items: Vec<View>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single chart on a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<ViewFilter>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Only filters made entirely of known fields decode as `Scoped`; anything
/// else stays `Raw` so it is written back exactly as read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum ViewFilter {
    Scoped { filters: FilterExpression },
    /// Any filter shape this client does not produce itself.
    Raw(Value),
}

impl ViewFilter {
    pub fn expression(&self) -> Option<&FilterExpression> {
        match self {
            ViewFilter::Scoped { filters } => Some(filters),
            ViewFilter::Raw(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterExpression {
    pub logic: FilterLogic,
    pub filters: Vec<MetricFilter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterLogic {
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricFilter {
    pub metric: String,
    pub op: String,
    pub value: String,
    pub filters: Option<Vec<MetricFilter>>,
}

impl MetricFilter {
    pub fn equals(metric: &str, value: &str) -> Self {
        Self {
            metric: metric.to_string(),
            op: "=".to_string(),
            value: value.to_string(),
            filters: None,
        }
    }
}

impl Dashboard {
    /// Copy of this dashboard ready to be submitted as a new, private dashboard.
    pub fn to_draft(&self, name: &str) -> Dashboard {
        Dashboard {
            id: None,
            version: None,
            name: name.to_string(),
            is_shared: false,
            items: self.items.clone(),
            extra: self.extra.clone(),
        }
    }

    /// True if any view references a grouping configuration whose id starts with `prefix`.
    pub fn has_view_with_group_prefix(&self, prefix: &str) -> bool {
        self.items.iter().any(|view| {
            view.group_id
                .as_deref()
                .is_some_and(|group_id| group_id.starts_with(prefix))
        })
    }
}

/// First dashboard named `name`, in server order.
pub fn find_by_name<'a>(dashboards: &'a [Dashboard], name: &str) -> Option<&'a Dashboard> {
    dashboards.iter().find(|d| d.name == name)
}

/// A dashboard counts as a previous templating result only when both its name
/// matches and one of its views carries the scope identifier prefix.
pub fn find_scoped_duplicate<'a>(
    dashboards: &'a [Dashboard],
    name: &str,
    base_identifier: &str,
) -> Option<&'a Dashboard> {
    dashboards
        .iter()
        .filter(|d| d.name == name)
        .find(|d| d.has_view_with_group_prefix(base_identifier))
}
