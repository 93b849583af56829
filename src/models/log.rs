use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Audit record of one workflow run or sub-step. Logs reference their site by
/// id only; deleting the site orphans them, it does not cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceLog {
    pub id: u64,
    pub site_id: u64,
    #[serde(rename = "type")]
    pub kind: LogType,
    pub status: LogStatus,
    pub message: String,
    /// Free-form per-step detail payload (sizes, page lists, error strings).
    pub details: Value,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogType {
    FullMaintenance,
    Backup,
    Screenshot,
    Update,
    Comparison,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogStatus {
    InProgress,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct NewLog {
    pub site_id: u64,
    pub kind: LogType,
    pub status: LogStatus,
    pub message: String,
    pub details: Value,
}

/// Completion patch for a log. `started_at` is set at creation and immutable.
#[derive(Debug, Clone, Default)]
pub struct LogPatch {
    pub status: Option<LogStatus>,
    pub message: Option<String>,
    pub details: Option<Value>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl MaintenanceLog {
    pub fn apply(&mut self, patch: LogPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
        if let Some(details) = patch.details {
            self.details = details;
        }
        if let Some(completed_at) = patch.completed_at {
            self.completed_at = Some(completed_at);
        }
    }
}
