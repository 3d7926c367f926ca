// Dashboard service - Use case for cloning a template dashboard into a scoped one
use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::dashboard::{find_by_name, find_scoped_duplicate, Dashboard};
use crate::domain::group_configuration::GroupConfiguration;
use crate::domain::scope::{view_identifier, Scope};
use crate::error::{Result, TemplateError, TemplateStage};
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn DashboardRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_dashboards(&self) -> Result<Vec<Dashboard>> {
        self.repository.fetch_dashboards().await
    }

    /// Clone the dashboard named `template_name` into a private dashboard named
    /// `new_name` whose views are all filtered and grouped by `scope`.
    ///
    /// Every view gets its own grouping configuration, with an id derived from
    /// `new_name` and `scope`. If a dashboard called `new_name` already has a
    /// view using that id prefix, nothing is created and
    /// [`TemplateError::AlreadyExists`] is returned.
    ///
    /// Calls are issued one at a time. A failure stops the workflow, and
    /// grouping configurations created before it are left in place (they are
    /// listed in the error).
    pub async fn create_dashboard_from_template(
        &self,
        new_name: &str,
        template_name: &str,
        scope: &Scope,
    ) -> Result<Dashboard, TemplateError> {
        let base_identifier = scope.identifier(new_name);
        tracing::debug!("Scope identifier for {}: {}", new_name, base_identifier);

        let dashboards = self
            .repository
            .fetch_dashboards()
            .await
            .map_err(|source| TemplateError::Failed {
                stage: TemplateStage::Resolving,
                orphaned: Vec::new(),
                source,
            })?;

        let template = find_by_name(&dashboards, template_name)
            .ok_or_else(|| TemplateError::TemplateNotFound(template_name.to_string()))?;

        if find_scoped_duplicate(&dashboards, new_name, &base_identifier).is_some() {
            tracing::info!(
                "Dashboard {} already exists - {}",
                new_name,
                base_identifier
            );
            return Err(TemplateError::AlreadyExists {
                name: new_name.to_string(),
                identifier: base_identifier,
            });
        }

        // Same name without the scope prefix is not treated as a duplicate
        if find_by_name(&dashboards, new_name).is_some() {
            tracing::warn!(
                "Dashboard {} exists but has no view scoped to {}; creating another dashboard with the same name",
                new_name,
                base_identifier
            );
        }

        let mut draft = template.to_draft(new_name);
        let created = self
            .materialize_views(&mut draft, scope, &base_identifier)
            .await?;

        self.publish(&draft, created).await
    }

    /// Creates one grouping configuration per view and points the view at it.
    /// Returns the ids created, in view order.
    async fn materialize_views(
        &self,
        draft: &mut Dashboard,
        scope: &Scope,
        base_identifier: &str,
    ) -> Result<Vec<String>, TemplateError> {
        let filter = scope.filter();
        let group_by = scope.group_by();
        let mut created = Vec::with_capacity(draft.items.len());

        for (index, view) in draft.items.iter_mut().enumerate() {
            let ordinal = index + 1;
            let group_id = view_identifier(base_identifier, ordinal);
            let configuration = GroupConfiguration::single_group(group_id.clone(), group_by.clone());

            tracing::debug!("Creating grouping configuration {}", group_id);
            if let Err(source) = self
                .repository
                .create_group_configuration(&configuration)
                .await
            {
                tracing::error!(
                    "Creating grouping configuration {} failed, {} left orphaned: {}",
                    group_id,
                    created.len(),
                    source
                );
                return Err(TemplateError::Failed {
                    stage: TemplateStage::Materializing {
                        view: ordinal,
                        group_id,
                    },
                    orphaned: created,
                    source,
                });
            }

            view.filter = Some(filter.clone());
            view.group_id = Some(group_id.clone());
            created.push(group_id);
        }

        Ok(created)
    }

    async fn publish(
        &self,
        draft: &Dashboard,
        created: Vec<String>,
    ) -> Result<Dashboard, TemplateError> {
        match self.repository.create_dashboard(draft).await {
            Ok(dashboard) => {
                tracing::info!(
                    "Created dashboard {} with {} views",
                    dashboard.name,
                    dashboard.items.len()
                );
                Ok(dashboard)
            }
            Err(source) => {
                tracing::error!(
                    "Creating dashboard {} failed, {} grouping configurations left orphaned: {}",
                    draft.name,
                    created.len(),
                    source
                );
                Err(TemplateError::Failed {
                    stage: TemplateStage::Publishing,
                    orphaned: created,
                    source,
                })
            }
        }
    }
}
