use std::rc::Rc;

use platform_host::{HostServices, HostStrategy, NoopPrefsStore, PrefsStore, PrefsStoreFuture};

use crate::WebPrefsStore;

/// Returns the host strategy for the active compilation target.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// `localStorage` preferences.
    Browser(WebPrefsStore),
    /// Inert store for headless targets.
    Headless(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Headless(store) => store.load_pref(key),
        }
    }
}

/// Builds the preference store for the selected strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Headless => PrefsStoreAdapter::Headless(NoopPrefsStore),
    }
}

/// Assembles the host bundle injected into `desktop_runtime::DesktopProvider`.
pub fn build_host_services() -> HostServices {
    HostServices::new(Rc::new(prefs_store()), selected_host_strategy())
}
