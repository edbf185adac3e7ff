pub mod diff;
pub mod options;
pub mod sync;

use keysync_core::LocaleCode;
use keysync_sync::SyncScope;

/// Scope for a list of locale arguments; empty means every locale.
pub(crate) fn scope_for(locales: &[String]) -> SyncScope {
    if locales.is_empty() {
        SyncScope::All
    } else {
        SyncScope::Locales(locales.iter().map(|l| LocaleCode::from(l.as_str())).collect())
    }
}
