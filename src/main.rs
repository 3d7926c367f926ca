// Main entry point - Creates the configured dashboards from their templates
use std::sync::Arc;

use sdc_client::infrastructure::config::{load_sdc_config, load_templates_config};
use sdc_client::{DashboardService, MonitoringRepository, SdcClient, TemplateError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let sdc_config = load_sdc_config()?;
    let templates_config = load_templates_config()?;

    let settings = sdc_config.sdc;
    let client = Arc::new(SdcClient::new(&settings.url, &settings.token, settings.timeout())?);

    // Fail early on a bad token
    let user = client.user_info().await?;
    tracing::info!(
        "Connected to {} as {}",
        client.url(),
        user.user.username.as_deref().unwrap_or("<unknown user>")
    );

    let dashboard_service = DashboardService::new(client.clone());

    let total = templates_config.dashboards.len();
    let mut failed = 0;
    for job in &templates_config.dashboards {
        match dashboard_service
            .create_dashboard_from_template(&job.name, &job.template, &job.scope)
            .await
        {
            Ok(dashboard) => {
                tracing::info!("Dashboard {} created (id {:?})", dashboard.name, dashboard.id);
            }
            Err(TemplateError::AlreadyExists { name, identifier }) => {
                tracing::info!("Skipping {}: already exists - {}", name, identifier);
            }
            Err(TemplateError::Failed {
                stage,
                orphaned,
                source,
            }) => {
                failed += 1;
                tracing::error!("Dashboard {}: {} failed: {}", job.name, stage, source);
                if !orphaned.is_empty() {
                    tracing::warn!(
                        "Grouping configurations left without a dashboard: {}",
                        orphaned.join(", ")
                    );
                }
            }
            Err(e) => {
                failed += 1;
                tracing::error!("Dashboard {}: {}", job.name, e);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} dashboards could not be created", failed, total);
    }

    Ok(())
}
