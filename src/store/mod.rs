mod logs;
mod reports;
mod screenshots;
mod sites;
mod users;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::{MaintenanceLog, Report, Screenshot, Site, User};

/// In-memory entity store. One mutex guards all tables, so every operation is
/// atomic with respect to the others; delayed workflow steps interleave
/// between operations, never inside one. Ids are per-entity monotonic
/// counters owned by the store and are never reused.
///
/// Absent ids are a valid outcome: lookups return `None` and deletes return
/// `false`, callers decide whether that is an error. There is no referential
/// integrity, a log may outlive the site it references.
pub struct Store {
    inner: Arc<Mutex<StoreInner>>,
}

struct StoreInner {
    users: HashMap<u64, User>,
    sites: HashMap<u64, Site>,
    logs: HashMap<u64, MaintenanceLog>,
    reports: HashMap<u64, Report>,
    screenshots: HashMap<u64, Screenshot>,
    next_user_id: u64,
    next_site_id: u64,
    next_log_id: u64,
    next_report_id: u64,
    next_screenshot_id: u64,
}

impl Store {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                users: HashMap::new(),
                sites: HashMap::new(),
                logs: HashMap::new(),
                reports: HashMap::new(),
                screenshots: HashMap::new(),
                next_user_id: 1,
                next_site_id: 1,
                next_log_id: 1,
                next_report_id: 1,
                next_screenshot_id: 1,
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Store {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
