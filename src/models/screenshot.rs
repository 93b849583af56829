use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Before/after capture of one page. No workflow step populates these yet;
/// the entity exists so the comparison step has somewhere to land once real
/// capture is wired in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screenshot {
    pub id: u64,
    pub site_id: u64,
    pub page: String,
    pub before_path: Option<String>,
    pub after_path: Option<String>,
    pub comparison_result: Option<ComparisonResult>,
    pub taken_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub differences: u32,
    pub threshold: f64,
    pub passed: bool,
}

#[derive(Debug, Clone)]
pub struct NewScreenshot {
    pub site_id: u64,
    pub page: String,
    pub before_path: Option<String>,
    pub after_path: Option<String>,
    pub comparison_result: Option<ComparisonResult>,
}
