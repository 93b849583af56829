use chrono::Utc;

use super::Store;
use crate::models::{NewScreenshot, Screenshot};

impl Store {
    pub fn list_screenshots(&self, site_id: u64) -> Vec<Screenshot> {
        let inner = self.lock();
        let mut shots: Vec<Screenshot> = inner
            .screenshots
            .values()
            .filter(|shot| shot.site_id == site_id)
            .cloned()
            .collect();
        shots.sort_by(|a, b| b.taken_at.cmp(&a.taken_at));
        shots
    }

    pub fn create_screenshot(&self, new: NewScreenshot) -> Screenshot {
        let mut inner = self.lock();
        let id = inner.next_screenshot_id;
        inner.next_screenshot_id += 1;
        let shot = Screenshot {
            id,
            site_id: new.site_id,
            page: new.page,
            before_path: new.before_path,
            after_path: new.after_path,
            comparison_result: new.comparison_result,
            taken_at: Utc::now(),
        };
        inner.screenshots.insert(id, shot.clone());
        shot
    }
}
