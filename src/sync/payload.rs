//! Building the payload pushed to the technician app.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculation::compare_it;
use crate::config::MasterSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{Notification, NotificationKind, Priority};

/// Broadcast target used when a notification names no recipients.
pub const ALL_USERS: &str = "all";

/// Fallback author when no master user id is configured.
pub const DEFAULT_CREATED_BY: &str = "master";

/// A notification as delivered to the technician app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncNotification {
    /// Notification id.
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
    pub priority: Priority,
    /// Presentation.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Resolved recipient user ids, or `["all"]`.
    pub target_users: Vec<String>,
    /// Author identity.
    pub created_by: String,
}

/// A technician category with the names of its active members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianCategoryList {
    /// Category label.
    pub category: String,
    /// Active member names, in Italian collation order.
    pub technicians: Vec<String>,
}

/// Everything a sync run hands to the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPayload {
    /// Notifications not yet sent.
    pub notifications: Vec<SyncNotification>,
    /// One entry per configured category.
    pub technician_categories: Vec<TechnicianCategoryList>,
    /// Active ship names, sorted.
    pub ships: Vec<String>,
    /// Active location names, sorted.
    pub locations: Vec<String>,
}

/// Resolves who receives a notification.
///
/// Explicit recipients come first, followed by the user ids of active
/// technicians in each recipient category. Duplicates keep their first
/// position. An empty result becomes `["all"]`.
pub fn resolve_target_users(notification: &Notification, settings: &MasterSettings) -> Vec<String> {
    let category_members = notification
        .recipient_categories
        .iter()
        .flat_map(|category| settings.active_in_category(category))
        .map(|t| t.user_id.clone());

    let mut targets: Vec<String> = Vec::new();
    for user in notification.recipients.iter().cloned().chain(category_members) {
        if !targets.contains(&user) {
            targets.push(user);
        }
    }

    if targets.is_empty() {
        targets.push(ALL_USERS.to_string());
    }
    targets
}

fn sorted_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut names: Vec<String> = names.map(str::to_string).collect();
    names.sort_by(|a, b| compare_it(a, b));
    names
}

/// Builds the sync payload from the current settings.
///
/// # Errors
///
/// [`EngineError::SyncDisabled`] when sync is turned off.
pub fn build_sync_payload(settings: &MasterSettings) -> EngineResult<SyncPayload> {
    if !settings.sync.enabled {
        return Err(EngineError::SyncDisabled);
    }

    let created_by = settings
        .master_user_id
        .clone()
        .unwrap_or_else(|| DEFAULT_CREATED_BY.to_string());

    let notifications: Vec<SyncNotification> = settings
        .notifications
        .iter()
        .filter(|n| n.is_pending())
        .map(|n| SyncNotification {
            id: n.id.clone(),
            title: n.title.clone(),
            message: n.message.clone(),
            date: n.date.clone(),
            timestamp: n.timestamp,
            priority: n.priority,
            kind: n.kind,
            target_users: resolve_target_users(n, settings),
            created_by: created_by.clone(),
        })
        .collect();

    let technician_categories = settings
        .technician_categories
        .iter()
        .map(|category| TechnicianCategoryList {
            category: category.clone(),
            technicians: sorted_names(
                settings
                    .active_in_category(category)
                    .map(|t| t.name.as_str()),
            ),
        })
        .collect();

    let payload = SyncPayload {
        notifications,
        technician_categories,
        ships: sorted_names(
            settings
                .ships
                .iter()
                .filter(|s| s.active)
                .map(|s| s.name.as_str()),
        ),
        locations: sorted_names(
            settings
                .locations
                .iter()
                .filter(|l| l.active)
                .map(|l| l.name.as_str()),
        ),
    };

    info!(
        notifications = payload.notifications.len(),
        categories = payload.technician_categories.len(),
        ships = payload.ships.len(),
        locations = payload.locations.len(),
        "Sync payload built"
    );

    Ok(payload)
}

/// Stamps every pending notification as sent and records the sync time.
///
/// Returns how many notifications were stamped.
pub fn mark_notifications_sent(settings: &mut MasterSettings, now: DateTime<Utc>) -> usize {
    let stamp = now.to_rfc3339();
    let mut marked = 0;

    for notification in settings.notifications.iter_mut().filter(|n| n.is_pending()) {
        notification.sent_at = Some(stamp.clone());
        marked += 1;
    }
    settings.sync.last_sync_at = Some(stamp);

    marked
}
