// Alert service - Use case for creating alerts once per description
use crate::application::monitoring_repository::MonitoringRepository;
use crate::domain::alert::{Alert, AlertDefinition, NewAlert};
use crate::error::{Result, SdcError};
use std::sync::Arc;

#[derive(Clone)]
pub struct AlertService {
    repository: Arc<dyn MonitoringRepository>,
}

impl AlertService {
    pub fn new(repository: Arc<dyn MonitoringRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_alerts(&self) -> Result<Vec<Alert>> {
        self.repository.alerts().await
    }

    /// Create a manual alert, unless one with the same description exists.
    pub async fn create_alert(&self, alert: NewAlert) -> Result<Alert> {
        let existing = self.repository.alerts().await?;

        if existing
            .iter()
            .any(|a| a.description.as_deref() == Some(alert.description.as_str()))
        {
            return Err(SdcError::AlreadyExists(format!("alert {}", alert.name)));
        }

        tracing::info!("Creating alert {}", alert.description);
        self.repository
            .create_alert(&AlertDefinition::from(alert))
            .await
    }
}
