use chrono::Utc;

use super::Store;
use crate::models::{LogPatch, MaintenanceLog, NewLog};

impl Store {
    /// Unfiltered listing is most-recent-first by `started_at`; with a site
    /// filter the insertion order is kept, matching what log views expect.
    pub fn list_logs(&self, site_id: Option<u64>) -> Vec<MaintenanceLog> {
        let inner = self.lock();
        match site_id {
            Some(site_id) => {
                let mut logs: Vec<MaintenanceLog> = inner
                    .logs
                    .values()
                    .filter(|log| log.site_id == site_id)
                    .cloned()
                    .collect();
                logs.sort_by_key(|log| log.id);
                logs
            }
            None => {
                let mut logs: Vec<MaintenanceLog> = inner.logs.values().cloned().collect();
                logs.sort_by(|a, b| b.started_at.cmp(&a.started_at));
                logs
            }
        }
    }

    pub fn get_log(&self, id: u64) -> Option<MaintenanceLog> {
        self.lock().logs.get(&id).cloned()
    }

    pub fn create_log(&self, new: NewLog) -> MaintenanceLog {
        let mut inner = self.lock();
        let id = inner.next_log_id;
        inner.next_log_id += 1;
        let log = MaintenanceLog {
            id,
            site_id: new.site_id,
            kind: new.kind,
            status: new.status,
            message: new.message,
            details: new.details,
            started_at: Utc::now(),
            completed_at: None,
        };
        inner.logs.insert(id, log.clone());
        log
    }

    pub fn update_log(&self, id: u64, patch: LogPatch) -> Option<MaintenanceLog> {
        let mut inner = self.lock();
        let log = inner.logs.get_mut(&id)?;
        log.apply(patch);
        Some(log.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LogStatus, LogType};

    fn log(site_id: u64, message: &str) -> NewLog {
        NewLog {
            site_id,
            kind: LogType::Backup,
            status: LogStatus::InProgress,
            message: message.into(),
            details: serde_json::json!({}),
        }
    }

    #[test]
    fn unfiltered_listing_is_most_recent_first() {
        let store = Store::new();
        store.create_log(log(1, "first"));
        store.create_log(log(2, "second"));
        store.create_log(log(1, "third"));

        let messages: Vec<String> = store
            .list_logs(None)
            .into_iter()
            .map(|l| l.message)
            .collect();
        assert_eq!(messages, ["third", "second", "first"]);
    }

    #[test]
    fn filtered_listing_keeps_insertion_order() {
        let store = Store::new();
        store.create_log(log(1, "a"));
        store.create_log(log(2, "noise"));
        store.create_log(log(1, "b"));

        let messages: Vec<String> = store
            .list_logs(Some(1))
            .into_iter()
            .map(|l| l.message)
            .collect();
        assert_eq!(messages, ["a", "b"]);
    }

    #[test]
    fn completion_patch_preserves_started_at() {
        let store = Store::new();
        let created = store.create_log(log(1, "run"));
        let done = store
            .update_log(
                created.id,
                LogPatch {
                    status: Some(LogStatus::Success),
                    completed_at: Some(Utc::now()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(done.started_at, created.started_at);
        assert_eq!(done.status, LogStatus::Success);
        assert!(done.completed_at.is_some());

        assert!(store.update_log(999, LogPatch::default()).is_none());
    }
}
