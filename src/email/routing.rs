//! Recipient routing for the owner/admin notification email.

use crate::core::config::AppConfig;

/// Substring of the cave name that marks the access-restricted site whose
/// owner must approve each waiver.
const PROTECTED_SITE_MARKER: &str = "Hatcher";

/// Where the notification email goes, and whether both emails carry the
/// owner-approval notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub notify_address: String,
    pub needs_owner_approval: bool,
}

/// Pure function of the cave name and the two configured addresses. The
/// owner address wins only when the cave is the protected site AND the
/// address is actually configured; otherwise everything falls back to the
/// admin address with no approval notice.
#[must_use]
pub fn route_for(cave: &str, config: &AppConfig) -> Route {
    let is_protected_site = cave.contains(PROTECTED_SITE_MARKER);

    match (&config.property_owner_email, is_protected_site) {
        (Some(owner), true) => Route {
            notify_address: owner.clone(),
            needs_owner_approval: true,
        },
        _ => Route {
            notify_address: config.admin_email.clone(),
            needs_owner_approval: false,
        },
    }
}
