//! Host service bundle injected into the desktop runtime by the entry layer.

use std::rc::Rc;

use crate::{NoopPrefsStore, PrefsStore};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser page with `localStorage`-backed preferences.
    Browser,
    /// Headless composition used by tests and non-browser targets.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host services.
///
/// All environment-specific adapter selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime decoupled from browser APIs.
#[derive(Clone)]
pub struct HostServices {
    /// Lightweight typed preference store (wallpaper preference lives here).
    pub prefs: Rc<dyn PrefsStore>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle around an explicit preference store.
    pub fn new(prefs: Rc<dyn PrefsStore>, host_strategy: HostStrategy) -> Self {
        Self {
            prefs,
            host_strategy,
        }
    }

    /// Bundle with no persisted preferences.
    pub fn headless() -> Self {
        Self::new(Rc::new(NoopPrefsStore), HostStrategy::Headless)
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::headless()
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
