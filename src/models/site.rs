use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A managed WordPress installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub status: SiteStatus,
    pub last_backup: Option<DateTime<Utc>>,
    pub last_update: Option<DateTime<Utc>>,
    pub last_check: Option<DateTime<Utc>>,
    pub wp_cli_path: Option<String>,
    pub ssh_host: Option<String>,
    pub ssh_user: Option<String>,
    pub ssh_key: Option<String>,
    pub pages_to_scan: Vec<String>,
    pub plugin_update_count: u32,
    pub last_error: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Status is a derived field: workflows and API callers overwrite it freely,
/// the store does not enforce transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteStatus {
    Ok,
    Error,
    Updating,
    NeedsUpdates,
}

/// Connection and scan settings accepted at site creation. Everything else
/// (status, timestamps, counters) is owned by the store.
#[derive(Debug, Clone, Default)]
pub struct NewSite {
    pub name: String,
    pub url: String,
    pub wp_cli_path: Option<String>,
    pub ssh_host: Option<String>,
    pub ssh_user: Option<String>,
    pub ssh_key: Option<String>,
    pub pages_to_scan: Vec<String>,
}

/// Shallow-merge patch for a site: fields absent from the patch are
/// preserved, nullable fields can be cleared by sending `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SitePatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub status: Option<SiteStatus>,
    #[serde(deserialize_with = "super::patch_field")]
    pub last_backup: Option<Option<DateTime<Utc>>>,
    #[serde(deserialize_with = "super::patch_field")]
    pub last_update: Option<Option<DateTime<Utc>>>,
    #[serde(deserialize_with = "super::patch_field")]
    pub last_check: Option<Option<DateTime<Utc>>>,
    #[serde(deserialize_with = "super::patch_field")]
    pub wp_cli_path: Option<Option<String>>,
    #[serde(deserialize_with = "super::patch_field")]
    pub ssh_host: Option<Option<String>>,
    #[serde(deserialize_with = "super::patch_field")]
    pub ssh_user: Option<Option<String>>,
    #[serde(deserialize_with = "super::patch_field")]
    pub ssh_key: Option<Option<String>>,
    pub pages_to_scan: Option<Vec<String>>,
    pub plugin_update_count: Option<u32>,
    #[serde(deserialize_with = "super::patch_field")]
    pub last_error: Option<Option<String>>,
}

impl Site {
    pub fn apply(&mut self, patch: SitePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(last_backup) = patch.last_backup {
            self.last_backup = last_backup;
        }
        if let Some(last_update) = patch.last_update {
            self.last_update = last_update;
        }
        if let Some(last_check) = patch.last_check {
            self.last_check = last_check;
        }
        if let Some(wp_cli_path) = patch.wp_cli_path {
            self.wp_cli_path = wp_cli_path;
        }
        if let Some(ssh_host) = patch.ssh_host {
            self.ssh_host = ssh_host;
        }
        if let Some(ssh_user) = patch.ssh_user {
            self.ssh_user = ssh_user;
        }
        if let Some(ssh_key) = patch.ssh_key {
            self.ssh_key = ssh_key;
        }
        if let Some(pages_to_scan) = patch.pages_to_scan {
            self.pages_to_scan = pages_to_scan;
        }
        if let Some(plugin_update_count) = patch.plugin_update_count {
            self.plugin_update_count = plugin_update_count;
        }
        if let Some(last_error) = patch.last_error {
            self.last_error = last_error;
        }
    }
}
