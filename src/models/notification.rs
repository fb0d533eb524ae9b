//! Notifications broadcast to the technician app.

use serde::{Deserialize, Serialize};

/// Notification urgency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Informational.
    Low,
    /// Default priority.
    #[default]
    Normal,
    /// Needs attention.
    High,
}

/// How the technician app should present a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Plain information.
    #[default]
    Info,
    /// A warning.
    Warning,
    /// An alert.
    Alert,
}

/// A notification authored on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique identifier.
    pub id: String,
    /// Title line.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Day the notification refers to.
    pub date: String,
    /// Creation time, epoch milliseconds.
    pub timestamp: i64,
    /// Urgency.
    #[serde(default)]
    pub priority: Priority,
    /// Presentation.
    #[serde(default, rename = "type")]
    pub kind: NotificationKind,
    /// Explicit recipient user ids.
    #[serde(default)]
    pub recipients: Vec<String>,
    /// Technician categories whose active members receive it.
    #[serde(default)]
    pub recipient_categories: Vec<String>,
    /// When it was handed to the sync channel; `None` while pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<String>,
}

impl Notification {
    /// Returns true until the notification has been sent.
    pub fn is_pending(&self) -> bool {
        self.sent_at.is_none()
    }
}
