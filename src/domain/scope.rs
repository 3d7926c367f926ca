// Scope domain model - ordered dimension/value pairs a templated dashboard is bound to
use super::dashboard::{FilterExpression, FilterLogic, MetricFilter, ViewFilter};
use super::group_configuration::GroupBy;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScopeEntry {
    pub dimension: String,
    pub value: String,
}

impl ScopeEntry {
    pub fn new(dimension: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            dimension: dimension.into(),
            value: value.into(),
        }
    }
}

/// Ordered list of scope entries. Order is part of the identity of a scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Scope {
    entries: Vec<ScopeEntry>,
}

impl Scope {
    pub fn new(entries: Vec<ScopeEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ScopeEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Base identifier: the dashboard name followed by every dimension and
    /// value in scope order, concatenated without separators.
    pub fn identifier(&self, dashboard_name: &str) -> String {
        self.entries
            .iter()
            .fold(dashboard_name.to_string(), |mut id, entry| {
                id.push_str(&entry.dimension);
                id.push_str(&entry.value);
                id
            })
    }

    /// Filter matching every scope entry by equality, combined with AND.
    pub fn filter(&self) -> ViewFilter {
        let filters = self
            .entries
            .iter()
            .map(|e| MetricFilter::equals(&e.dimension, &e.value))
            .collect();

        ViewFilter::Scoped {
            filters: FilterExpression {
                logic: FilterLogic::And,
                filters,
            },
        }
    }

    /// Group-by list over the scope dimensions, values dropped.
    pub fn group_by(&self) -> Vec<GroupBy> {
        self.entries
            .iter()
            .map(|e| GroupBy::new(&e.dimension))
            .collect()
    }
}

impl<D, V> FromIterator<(D, V)> for Scope
where
    D: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (D, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(d, v)| ScopeEntry::new(d, v)).collect())
    }
}

/// Identifier of the grouping configuration backing the `ordinal`-th view (1-based).
pub fn view_identifier(base: &str, ordinal: usize) -> String {
    format!("{}{}", base, ordinal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_concatenates_in_order() {
        let scope: Scope = [("env", "prod")].into_iter().collect();
        assert_eq!(
            scope.identifier("Host Overview for prod"),
            "Host Overview for prodenvprod"
        );

        let scope: Scope = [("host.mac", "00:11:22"), ("env", "prod")]
            .into_iter()
            .collect();
        assert_eq!(scope.identifier("db"), "dbhost.mac00:11:22envprod");
    }

    #[test]
    fn test_identifier_is_deterministic() {
        let scope: Scope = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(scope.identifier("x"), scope.identifier("x"));
        assert_eq!(scope.clone().identifier("x"), scope.identifier("x"));
    }

    #[test]
    fn test_identifier_is_order_sensitive() {
        let ab: Scope = [("a", "1"), ("b", "2")].into_iter().collect();
        let ba: Scope = [("b", "2"), ("a", "1")].into_iter().collect();
        assert_ne!(ab.identifier("x"), ba.identifier("x"));
    }

    #[test]
    fn test_empty_scope_identifier_is_name() {
        assert_eq!(Scope::default().identifier("plain"), "plain");
    }

    #[test]
    fn test_view_identifier_appends_ordinal() {
        assert_eq!(view_identifier("baseenvprod", 1), "baseenvprod1");
        assert_eq!(view_identifier("baseenvprod", 12), "baseenvprod12");
    }

    #[test]
    fn test_filter_and_group_by_follow_scope_order() {
        let scope: Scope = [("kubernetes.namespace.name", "web"), ("env", "prod")]
            .into_iter()
            .collect();

        let group_by = scope.group_by();
        let metrics: Vec<&str> = group_by.iter().map(|g| g.metric.as_str()).collect();
        assert_eq!(metrics, vec!["kubernetes.namespace.name", "env"]);

        let json = serde_json::to_value(scope.filter()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "filters": {
                    "logic": "and",
                    "filters": [
                        {"metric": "kubernetes.namespace.name", "op": "=", "value": "web", "filters": null},
                        {"metric": "env", "op": "=", "value": "prod", "filters": null}
                    ]
                }
            })
        );
    }
}
