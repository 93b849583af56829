use chrono::Utc;

use super::Store;
use crate::models::{NewSite, Site, SitePatch, SiteStatus};

impl Store {
    /// All sites in creation order.
    pub fn list_sites(&self) -> Vec<Site> {
        let inner = self.lock();
        let mut sites: Vec<Site> = inner.sites.values().cloned().collect();
        sites.sort_by_key(|site| site.id);
        sites
    }

    pub fn get_site(&self, id: u64) -> Option<Site> {
        self.lock().sites.get(&id).cloned()
    }

    pub fn create_site(&self, new: NewSite) -> Site {
        let mut inner = self.lock();
        let id = inner.next_site_id;
        inner.next_site_id += 1;
        let site = Site {
            id,
            name: new.name,
            url: new.url,
            status: SiteStatus::Ok,
            last_backup: None,
            last_update: None,
            last_check: None,
            wp_cli_path: new.wp_cli_path,
            ssh_host: new.ssh_host,
            ssh_user: new.ssh_user,
            ssh_key: new.ssh_key,
            pages_to_scan: new.pages_to_scan,
            plugin_update_count: 0,
            last_error: None,
            created_at: Utc::now(),
        };
        inner.sites.insert(id, site.clone());
        site
    }

    /// Shallow-merges `patch` into the site. `None` for an unknown id; a
    /// workflow step finishing after its site was deleted lands here and the
    /// update is simply dropped.
    pub fn update_site(&self, id: u64, patch: SitePatch) -> Option<Site> {
        let mut inner = self.lock();
        let site = inner.sites.get_mut(&id)?;
        site.apply(patch);
        Some(site.clone())
    }

    /// Removes the site only. Its maintenance logs stay behind, orphaned.
    pub fn delete_site(&self, id: u64) -> bool {
        self.lock().sites.remove(&id).is_some()
    }
}
