pub mod log;
pub mod report;
pub mod screenshot;
pub mod site;
pub mod user;

pub use log::{LogPatch, LogStatus, LogType, MaintenanceLog, NewLog};
pub use report::{NewReport, Report};
pub use screenshot::{ComparisonResult, NewScreenshot, Screenshot};
pub use site::{NewSite, Site, SitePatch, SiteStatus};
pub use user::{NewUser, User, UserProfile};

use serde::{Deserialize, Deserializer};

/// Distinguishes an absent patch field from one explicitly set to `null`.
/// Absent fields fall back to the struct default (`None`); present fields,
/// including `null`, deserialize to `Some(..)`.
pub(crate) fn patch_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
