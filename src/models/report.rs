use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference to a generated summary artifact. The file path is synthetic, no
/// file is written. `kind` is an open string (weekly, monthly, backup_status,
/// error_summary by convention) since clients may name their own report types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: Option<String>,
    pub file_path: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewReport {
    pub name: String,
    pub kind: String,
    pub description: Option<String>,
    pub file_path: String,
}
