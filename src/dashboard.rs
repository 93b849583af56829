use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{LogStatus, SiteStatus};
use crate::store::Store;

/// Snapshot summary for the dashboard landing page. Recomputed in full on
/// every request, nothing is cached.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_sites: usize,
    pub sites_ok: usize,
    pub need_updates: usize,
    pub errors: usize,
    pub recent_activity: Vec<ActivityEntry>,
}

/// A maintenance log projected down to what the activity feed shows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: u64,
    pub message: String,
    pub status: LogStatus,
    pub timestamp: DateTime<Utc>,
}

/// Sites in `updating` are counted in the total but deliberately in none of
/// the three status buckets; the dashboard treats an in-flight run as neither
/// healthy nor broken.
pub fn compute_stats(store: &Store) -> DashboardStats {
    let sites = store.list_sites();
    let logs = store.list_logs(None);

    DashboardStats {
        total_sites: sites.len(),
        sites_ok: sites.iter().filter(|s| s.status == SiteStatus::Ok).count(),
        need_updates: sites
            .iter()
            .filter(|s| s.status == SiteStatus::NeedsUpdates)
            .count(),
        errors: sites
            .iter()
            .filter(|s| s.status == SiteStatus::Error)
            .count(),
        recent_activity: logs
            .into_iter()
            .take(10)
            .map(|log| ActivityEntry {
                id: log.id,
                message: log.message,
                status: log.status,
                timestamp: log.started_at,
            })
            .collect(),
    }
}
