use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::oracle::UpdateOracle;
use crate::errors::FleetError;
use crate::models::Site;

/// One step of a maintenance run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Backup,
    Screenshot,
    Update,
}

/// What a finished step reports back: the log message and the free-form
/// detail payload attached to its audit log.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub message: String,
    pub details: Value,
}

/// Step result as seen by the state machine. `Failed` is a business outcome
/// (the step ran and reported a problem); transport and programming errors
/// surface as `Err(FleetError)` instead and abort the whole run.
#[derive(Debug, Clone)]
pub enum StepOutcome {
    Success(StepReport),
    Failed(StepReport),
}

impl StepOutcome {
    pub fn report(&self) -> &StepReport {
        match self {
            StepOutcome::Success(report) | StepOutcome::Failed(report) => report,
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, StepOutcome::Success(_))
    }
}

/// Seam between the maintenance state machine and step execution. The
/// simulated executor below sleeps and fabricates results; a real one would
/// drive SSH/WP-CLI against the site without the state machine changing.
#[async_trait]
pub trait StepExecutor: Send + Sync {
    async fn run_step(&self, step: StepKind, site: &Site) -> Result<StepOutcome, FleetError>;
}

/// Per-step delays standing in for remote-execution latency.
#[derive(Debug, Clone)]
pub struct WorkflowTiming {
    /// Pause before the run flips the site to `updating`.
    pub kickoff: Duration,
    pub backup: Duration,
    pub screenshot: Duration,
    pub update: Duration,
}

impl Default for WorkflowTiming {
    fn default() -> Self {
        Self {
            kickoff: Duration::from_millis(100),
            backup: Duration::from_secs(2),
            screenshot: Duration::from_secs(1),
            update: Duration::from_secs(3),
        }
    }
}

impl WorkflowTiming {
    /// Zero delays everywhere, for tests.
    pub fn instant() -> Self {
        Self {
            kickoff: Duration::ZERO,
            backup: Duration::ZERO,
            screenshot: Duration::ZERO,
            update: Duration::ZERO,
        }
    }
}

/// Fixed-delay stand-in for real backup/screenshot/update execution. Sizes
/// and destinations are canned, only the update step can fail, and only via
/// the oracle draw.
pub struct SimulatedStepExecutor {
    timing: WorkflowTiming,
    oracle: Arc<dyn UpdateOracle>,
}

impl SimulatedStepExecutor {
    pub fn new(timing: WorkflowTiming, oracle: Arc<dyn UpdateOracle>) -> Self {
        Self { timing, oracle }
    }
}

#[async_trait]
impl StepExecutor for SimulatedStepExecutor {
    async fn run_step(&self, step: StepKind, site: &Site) -> Result<StepOutcome, FleetError> {
        match step {
            StepKind::Backup => {
                tokio::time::sleep(self.timing.backup).await;
                Ok(StepOutcome::Success(StepReport {
                    message: "Backup completed successfully".into(),
                    details: json!({
                        "backupSize": "150MB",
                        "location": "backblaze-b2://bucket/backup.zip",
                    }),
                }))
            }
            StepKind::Screenshot => {
                tokio::time::sleep(self.timing.screenshot).await;
                Ok(StepOutcome::Success(StepReport {
                    message: "Pre-update screenshots captured".into(),
                    details: json!({ "pages": site.pages_to_scan }),
                }))
            }
            StepKind::Update => {
                tokio::time::sleep(self.timing.update).await;
                if self.oracle.draw() {
                    Ok(StepOutcome::Success(StepReport {
                        message: "Plugin updates completed successfully".into(),
                        details: json!({ "pluginsUpdated": site.plugin_update_count }),
                    }))
                } else {
                    Ok(StepOutcome::Failed(StepReport {
                        message: "Plugin update failed".into(),
                        details: json!({ "error": "Plugin conflict detected" }),
                    }))
                }
            }
        }
    }
}
