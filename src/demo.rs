//! Demo fixtures so a fresh instance has something to show: one admin
//! account, a small fleet in assorted states, a few historical logs and two
//! report records.

use chrono::{Duration, Utc};
use serde_json::json;

use crate::errors::FleetError;
use crate::models::{
    LogPatch, LogStatus, LogType, NewLog, NewReport, NewSite, NewUser, SitePatch, SiteStatus,
};
use crate::store::Store;

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin";

/// Creates the admin login. Required even without the demo fleet, since
/// there is no signup endpoint.
pub fn seed_admin(store: &Store) -> Result<(), FleetError> {
    let password_hash = bcrypt::hash(DEMO_PASSWORD, bcrypt::DEFAULT_COST)?;
    store.create_user(NewUser {
        username: DEMO_USERNAME.into(),
        password_hash,
        email: "admin@example.com".into(),
    });
    Ok(())
}

pub fn seed_demo_data(store: &Store) -> Result<(), FleetError> {
    seed_admin(store)?;

    let now = Utc::now();
    let fleet = [
        (
            "Company Website",
            "https://company.com",
            SiteStatus::Ok,
            vec!["/", "/about", "/contact"],
            0u32,
            None::<&str>,
        ),
        (
            "Blog Platform",
            "https://blog.company.com",
            SiteStatus::NeedsUpdates,
            vec!["/", "/blog", "/category/tech"],
            5,
            None,
        ),
        (
            "E-commerce Store",
            "https://shop.company.com",
            SiteStatus::Error,
            vec!["/", "/shop", "/cart"],
            3,
            Some("Plugin update failed - conflict detected"),
        ),
        (
            "Portfolio Site",
            "https://portfolio.company.com",
            SiteStatus::Ok,
            vec!["/", "/portfolio", "/contact"],
            0,
            None,
        ),
    ];

    for (i, (name, url, status, pages, plugin_updates, last_error)) in fleet.into_iter().enumerate()
    {
        let site = store.create_site(NewSite {
            name: name.into(),
            url: url.into(),
            wp_cli_path: Some("/usr/local/bin/wp".into()),
            ssh_host: Some(url.trim_start_matches("https://").into()),
            ssh_user: Some("admin".into()),
            ssh_key: None,
            pages_to_scan: pages.into_iter().map(String::from).collect(),
        });
        store.update_site(
            site.id,
            SitePatch {
                status: Some(status),
                last_backup: Some(Some(now - Duration::hours(2 + i as i64 * 2))),
                last_update: Some(if status == SiteStatus::Error {
                    None
                } else {
                    Some(now - Duration::days(1 + i as i64))
                }),
                last_check: Some(Some(now - Duration::minutes(15 * (i as i64 + 1)))),
                plugin_update_count: Some(plugin_updates),
                last_error: Some(last_error.map(String::from)),
                ..Default::default()
            },
        );
    }

    let history = [
        (
            1u64,
            LogType::Backup,
            LogStatus::Success,
            "Backup completed for Company Website",
            json!({ "backupSize": "245MB", "location": "backblaze-b2://bucket/backup-2024-01-15.zip" }),
        ),
        (
            2,
            LogType::Update,
            LogStatus::Success,
            "Plugin updates available for Blog Platform",
            json!({ "pluginsFound": 5, "pluginsUpdated": 5 }),
        ),
        (
            3,
            LogType::Update,
            LogStatus::Error,
            "Update failed for E-commerce Store",
            json!({ "error": "Plugin conflict detected between WooCommerce and Custom Payment Gateway" }),
        ),
    ];

    for (site_id, kind, status, message, details) in history {
        let log = store.create_log(NewLog {
            site_id,
            kind,
            status: LogStatus::InProgress,
            message: message.into(),
            details,
        });
        store.update_log(
            log.id,
            LogPatch {
                status: Some(status),
                completed_at: Some(now),
                ..Default::default()
            },
        );
    }

    store.create_report(NewReport {
        name: "Weekly Maintenance Report".into(),
        kind: "weekly".into(),
        description: Some("All sites maintenance summary".into()),
        file_path: "/reports/weekly-2024-01-15.pdf".into(),
    });
    store.create_report(NewReport {
        name: "Backup Status Export".into(),
        kind: "backup_status".into(),
        description: Some("CSV export of all backup statuses".into()),
        file_path: "/reports/backup-status-2024-01-14.csv".into(),
    });

    Ok(())
}
