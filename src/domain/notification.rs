// Notification settings domain model
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub user_notification: UserNotification,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserNotification {
    pub email: EmailNotification,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailNotification {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NotificationSettings {
    /// Turns email notifications on and appends `email` to the recipients.
    /// Returns false if the recipient was already present.
    pub fn add_email_recipient(&mut self, email: &str) -> bool {
        let settings = &mut self.user_notification.email;
        settings.enabled = true;

        if settings.recipients.iter().any(|r| r == email) {
            return false;
        }
        settings.recipients.push(email.to_string());
        true
    }
}
