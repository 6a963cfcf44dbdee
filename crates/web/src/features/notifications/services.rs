use storage::{Database, error::Result, models::Notification};
use uuid::Uuid;

/// Notification feed, newest first
pub async fn list_notifications(db: &Database, unread_only: bool) -> Vec<Notification> {
    db.read().await.notifications.list(unread_only)
}

/// Mark a notification as read
pub async fn mark_read(db: &Database, notification_id: Uuid) -> Result<Notification> {
    db.write().await.notifications.mark_read(notification_id)
}
