use uuid::Uuid;

use super::memory::now;
use crate::error::{Result, StorageError};
use crate::models::Notification;
use crate::services::notification::{NotificationSink, ScoreEvent};

/// In-app notification feed.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest first
    pub fn list(&self, unread_only: bool) -> Vec<Notification> {
        self.entries
            .iter()
            .rev()
            .filter(|n| !unread_only || !n.is_read)
            .cloned()
            .collect()
    }

    pub fn mark_read(&mut self, notification_id: Uuid) -> Result<Notification> {
        let entry = self
            .entries
            .iter_mut()
            .find(|n| n.notification_id == notification_id)
            .ok_or(StorageError::NotFound("Notification"))?;

        entry.is_read = true;
        Ok(entry.clone())
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&mut self, event: ScoreEvent) {
        let message = event.message();
        tracing::info!(kind = ?event.kind(), "{}", message);

        self.entries.push(Notification {
            notification_id: Uuid::new_v4(),
            kind: event.kind(),
            message,
            is_read: false,
            created_at: now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;

    #[test]
    fn test_feed_is_newest_first_and_filters_read() {
        let mut log = NotificationLog::new();
        log.notify(ScoreEvent::Saved {
            player_name: "Ian".to_string(),
            points: 17,
        });
        log.notify(ScoreEvent::Verified {
            player_name: "Ian".to_string(),
            points: 17,
        });

        let all = log.list(false);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].kind, NotificationKind::ScoreVerified);
        assert_eq!(all[1].message, "Score saved for Ian: 17 points");

        log.mark_read(all[0].notification_id).unwrap();
        let unread = log.list(true);
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].kind, NotificationKind::ScoreSaved);
    }

    #[test]
    fn test_mark_read_unknown() {
        let mut log = NotificationLog::new();
        assert!(log.mark_read(Uuid::new_v4()).unwrap_err().is_not_found());
    }
}
