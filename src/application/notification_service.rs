// Notification service - Use case for managing email notification recipients
use crate::application::monitoring_repository::MonitoringRepository;
use crate::domain::notification::NotificationSettings;
use crate::error::{Result, SdcError};
use std::sync::Arc;

#[derive(Clone)]
pub struct NotificationService {
    repository: Arc<dyn MonitoringRepository>,
}

impl NotificationService {
    pub fn new(repository: Arc<dyn MonitoringRepository>) -> Self {
        Self { repository }
    }

    /// Enable email notifications and add `email` as a recipient.
    pub async fn add_email_recipient(&self, email: &str) -> Result<NotificationSettings> {
        let mut settings = self.repository.notification_settings().await?;

        if !settings.add_email_recipient(email) {
            return Err(SdcError::AlreadyExists(format!(
                "notification target {}",
                email
            )));
        }

        tracing::debug!("Adding email notification recipient {}", email);
        self.repository.set_notification_settings(&settings).await
    }
}
