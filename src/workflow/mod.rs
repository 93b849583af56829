pub mod executor;
pub mod oracle;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};

use crate::errors::FleetError;
use crate::models::{LogPatch, LogStatus, LogType, MaintenanceLog, NewLog, Site, SitePatch, SiteStatus};
use crate::store::Store;
use executor::{StepExecutor, StepKind, StepOutcome};

/// Drives maintenance runs against sites. Each `start_*` call inserts an
/// `in_progress` parent log, spawns the remaining steps as a detached task
/// and returns the log immediately; clients observe progress by polling.
///
/// Runs are keyed by that log id only. There is no per-site exclusion, no
/// dedup and no cancellation: two overlapping runs for one site both execute
/// and the last step to finish wins, and a run outlives its site if the site
/// is deleted mid-flight (its store updates become no-ops).
pub struct WorkflowRunner {
    store: Store,
    executor: Arc<dyn StepExecutor>,
    kickoff: Duration,
}

impl WorkflowRunner {
    pub fn new(store: Store, executor: Arc<dyn StepExecutor>, kickoff: Duration) -> Self {
        Self {
            store,
            executor,
            kickoff,
        }
    }

    /// Starts the full backup → screenshot → update sequence. Must be called
    /// from within a tokio runtime.
    pub fn start_maintenance(&self, site: &Site) -> MaintenanceLog {
        let log = self.store.create_log(NewLog {
            site_id: site.id,
            kind: LogType::FullMaintenance,
            status: LogStatus::InProgress,
            message: format!("Starting full maintenance for {}", site.name),
            details: json!({ "steps": ["backup", "screenshot", "update", "comparison"] }),
        });
        info!(site_id = site.id, log_id = log.id, "maintenance run started");

        let runner = self.handle();
        let site = site.clone();
        let log_id = log.id;
        tokio::spawn(async move {
            if let Err(error) = runner.run_maintenance(&site, log_id).await {
                warn!(site_id = site.id, log_id, %error, "maintenance run aborted");
                runner.store.update_log(
                    log_id,
                    LogPatch {
                        status: Some(LogStatus::Error),
                        message: Some("Maintenance failed due to system error".into()),
                        completed_at: Some(Utc::now()),
                        ..Default::default()
                    },
                );
            }
        });
        log
    }

    /// Starts a standalone backup. Two states only: `in_progress`, then
    /// `success` once the simulated backup delay elapses.
    pub fn start_backup(&self, site: &Site) -> MaintenanceLog {
        let log = self.store.create_log(NewLog {
            site_id: site.id,
            kind: LogType::Backup,
            status: LogStatus::InProgress,
            message: format!("Starting backup for {}", site.name),
            details: json!({}),
        });
        info!(site_id = site.id, log_id = log.id, "backup run started");

        let runner = self.handle();
        let site = site.clone();
        let log_id = log.id;
        tokio::spawn(async move {
            if let Err(error) = runner.run_backup(&site, log_id).await {
                warn!(site_id = site.id, log_id, %error, "backup run aborted");
            }
        });
        log
    }

    async fn run_maintenance(&self, site: &Site, log_id: u64) -> Result<(), FleetError> {
        tokio::time::sleep(self.kickoff).await;
        self.store.update_site(
            site.id,
            SitePatch {
                status: Some(SiteStatus::Updating),
                last_check: Some(Some(Utc::now())),
                ..Default::default()
            },
        );

        let backup = self.executor.run_step(StepKind::Backup, site).await?;
        self.record_step(site.id, LogType::Backup, &backup);

        let screenshot = self.executor.run_step(StepKind::Screenshot, site).await?;
        self.record_step(site.id, LogType::Screenshot, &screenshot);

        let update = self.executor.run_step(StepKind::Update, site).await?;
        self.record_step(site.id, LogType::Update, &update);

        let succeeded = update.succeeded();
        if succeeded {
            self.store.update_site(
                site.id,
                SitePatch {
                    status: Some(SiteStatus::Ok),
                    last_update: Some(Some(Utc::now())),
                    plugin_update_count: Some(0),
                    last_error: Some(None),
                    ..Default::default()
                },
            );
        } else {
            self.store.update_site(
                site.id,
                SitePatch {
                    status: Some(SiteStatus::Error),
                    last_error: Some(Some("Plugin update failed - conflict detected".into())),
                    ..Default::default()
                },
            );
        }

        self.store.update_log(
            log_id,
            LogPatch {
                status: Some(if succeeded {
                    LogStatus::Success
                } else {
                    LogStatus::Error
                }),
                message: Some(if succeeded {
                    "Maintenance completed successfully".into()
                } else {
                    "Maintenance completed with errors".into()
                }),
                completed_at: Some(Utc::now()),
                ..Default::default()
            },
        );
        info!(site_id = site.id, log_id, succeeded, "maintenance run finished");
        Ok(())
    }

    async fn run_backup(&self, site: &Site, log_id: u64) -> Result<(), FleetError> {
        let outcome = self.executor.run_step(StepKind::Backup, site).await?;
        self.store.update_log(
            log_id,
            LogPatch {
                status: Some(LogStatus::Success),
                message: Some("Backup completed successfully".into()),
                details: Some(outcome.report().details.clone()),
                completed_at: Some(Utc::now()),
            },
        );
        self.store.update_site(
            site.id,
            SitePatch {
                last_backup: Some(Some(Utc::now())),
                ..Default::default()
            },
        );
        info!(site_id = site.id, log_id, "backup run finished");
        Ok(())
    }

    /// Sub-log for one executed step, mirroring the step outcome.
    fn record_step(&self, site_id: u64, kind: LogType, outcome: &StepOutcome) {
        let report = outcome.report();
        self.store.create_log(NewLog {
            site_id,
            kind,
            status: if outcome.succeeded() {
                LogStatus::Success
            } else {
                LogStatus::Error
            },
            message: report.message.clone(),
            details: report.details.clone(),
        });
    }

    fn handle(&self) -> WorkflowRunner {
        WorkflowRunner {
            store: self.store.clone(),
            executor: self.executor.clone(),
            kickoff: self.kickoff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use executor::{SimulatedStepExecutor, WorkflowTiming};
    use oracle::FixedOracle;

    use crate::models::NewSite;

    fn fixture() -> (Store, Site) {
        let store = Store::new();
        let site = store.create_site(NewSite {
            name: "Unit Site".into(),
            url: "https://unit.example.com".into(),
            pages_to_scan: vec!["/".into(), "/contact".into()],
            ..Default::default()
        });
        (store, site)
    }

    fn runner(store: &Store, force_success: bool) -> WorkflowRunner {
        WorkflowRunner::new(
            store.clone(),
            Arc::new(SimulatedStepExecutor::new(
                WorkflowTiming::instant(),
                Arc::new(FixedOracle(force_success)),
            )),
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn successful_run_restores_the_site_and_writes_four_logs() {
        let (store, site) = fixture();
        let runner = runner(&store, true);
        let parent = store.create_log(NewLog {
            site_id: site.id,
            kind: LogType::FullMaintenance,
            status: LogStatus::InProgress,
            message: "Starting full maintenance for Unit Site".into(),
            details: json!({}),
        });

        runner.run_maintenance(&site, parent.id).await.unwrap();

        let refreshed = store.get_site(site.id).unwrap();
        assert_eq!(refreshed.status, SiteStatus::Ok);
        assert!(refreshed.last_update.is_some());
        assert!(refreshed.last_check.is_some());
        assert_eq!(refreshed.plugin_update_count, 0);
        assert!(refreshed.last_error.is_none());

        let logs = store.list_logs(Some(site.id));
        assert_eq!(logs.len(), 4);
        let kinds: Vec<LogType> = logs.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            [
                LogType::FullMaintenance,
                LogType::Backup,
                LogType::Screenshot,
                LogType::Update,
            ]
        );

        let parent = store.get_log(parent.id).unwrap();
        assert_eq!(parent.status, LogStatus::Success);
        assert_eq!(parent.message, "Maintenance completed successfully");
        assert!(parent.completed_at.is_some());
    }

    #[tokio::test]
    async fn failed_update_marks_site_and_parent_log() {
        let (store, site) = fixture();
        let runner = runner(&store, false);
        let parent = store.create_log(NewLog {
            site_id: site.id,
            kind: LogType::FullMaintenance,
            status: LogStatus::InProgress,
            message: "Starting full maintenance for Unit Site".into(),
            details: json!({}),
        });

        runner.run_maintenance(&site, parent.id).await.unwrap();

        let refreshed = store.get_site(site.id).unwrap();
        assert_eq!(refreshed.status, SiteStatus::Error);
        assert_eq!(
            refreshed.last_error.as_deref(),
            Some("Plugin update failed - conflict detected")
        );

        let update_log = store
            .list_logs(Some(site.id))
            .into_iter()
            .find(|l| l.kind == LogType::Update)
            .unwrap();
        assert_eq!(update_log.status, LogStatus::Error);
        assert_eq!(update_log.details["error"], "Plugin conflict detected");

        let parent = store.get_log(parent.id).unwrap();
        assert_eq!(parent.status, LogStatus::Error);
        assert_eq!(parent.message, "Maintenance completed with errors");
    }

    #[tokio::test]
    async fn run_survives_site_deletion_mid_flight() {
        let (store, site) = fixture();
        let runner = runner(&store, true);
        store.delete_site(site.id);
        let parent = store.create_log(NewLog {
            site_id: site.id,
            kind: LogType::FullMaintenance,
            status: LogStatus::InProgress,
            message: "Starting full maintenance for Unit Site".into(),
            details: json!({}),
        });

        // every step still runs against the stale site snapshot
        runner.run_maintenance(&site, parent.id).await.unwrap();

        assert!(store.get_site(site.id).is_none());
        let parent = store.get_log(parent.id).unwrap();
        assert_eq!(parent.status, LogStatus::Success);
        assert_eq!(store.list_logs(Some(site.id)).len(), 4);
    }

    struct BrokenExecutor;

    #[async_trait]
    impl StepExecutor for BrokenExecutor {
        async fn run_step(&self, _step: StepKind, _site: &Site) -> Result<StepOutcome, FleetError> {
            Err(FleetError::Internal("step executor offline".into()))
        }
    }

    #[tokio::test]
    async fn executor_failure_forces_system_error_completion() {
        let (store, site) = fixture();
        let runner = WorkflowRunner::new(store.clone(), Arc::new(BrokenExecutor), Duration::ZERO);

        let log = runner.start_maintenance(&site);
        assert_eq!(log.status, LogStatus::InProgress);

        // the detached task finishes quickly with zero delays; poll for it
        for _ in 0..100 {
            if store.get_log(log.id).unwrap().completed_at.is_some() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let parent = store.get_log(log.id).unwrap();
        assert_eq!(parent.status, LogStatus::Error);
        assert_eq!(parent.message, "Maintenance failed due to system error");
        assert!(parent.completed_at.is_some());
    }

    #[tokio::test]
    async fn standalone_backup_stamps_the_site() {
        let (store, site) = fixture();
        let runner = runner(&store, true);
        let parent = store.create_log(NewLog {
            site_id: site.id,
            kind: LogType::Backup,
            status: LogStatus::InProgress,
            message: "Starting backup for Unit Site".into(),
            details: json!({}),
        });

        runner.run_backup(&site, parent.id).await.unwrap();

        let refreshed = store.get_site(site.id).unwrap();
        assert!(refreshed.last_backup.is_some());

        let parent = store.get_log(parent.id).unwrap();
        assert_eq!(parent.status, LogStatus::Success);
        assert_eq!(parent.message, "Backup completed successfully");
        assert_eq!(parent.details["backupSize"], "150MB");
    }
}
