use chrono::Utc;

use super::Store;
use crate::models::{NewReport, Report};

impl Store {
    /// Most recently generated first.
    pub fn list_reports(&self) -> Vec<Report> {
        let inner = self.lock();
        let mut reports: Vec<Report> = inner.reports.values().cloned().collect();
        reports.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
        reports
    }

    pub fn create_report(&self, new: NewReport) -> Report {
        let mut inner = self.lock();
        let id = inner.next_report_id;
        inner.next_report_id += 1;
        let report = Report {
            id,
            name: new.name,
            kind: new.kind,
            description: new.description,
            file_path: new.file_path,
            generated_at: Utc::now(),
        };
        inner.reports.insert(id, report.clone());
        report
    }

    pub fn delete_report(&self, id: u64) -> bool {
        self.lock().reports.remove(&id).is_some()
    }
}
