//! Read-only preference lookup used at boot.

use std::{collections::HashMap, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future returned by [`PrefsStore::load_pref`].
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service exposing raw JSON preference values by key.
///
/// The desktop only reads preferences another session wrote, so the contract has no write side.
pub trait PrefsStore {
    /// Returns the raw value stored under `key`, or `None` when the key is absent.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Preference store that never holds anything. Used off-browser.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }
}

#[derive(Debug, Clone, Default)]
/// Fixed set of raw entries, for seeding tests and headless sessions.
pub struct MemoryPrefsStore {
    entries: Rc<HashMap<String, String>>,
}

impl MemoryPrefsStore {
    /// Creates a store holding one raw entry.
    pub fn with_raw(key: impl Into<String>, raw_json: impl Into<String>) -> Self {
        Self {
            entries: Rc::new(HashMap::from([(key.into(), raw_json.into())])),
        }
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let value = self.entries.get(key).cloned();
        Box::pin(async move { Ok(value) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_store_returns_only_seeded_key() {
        let store = MemoryPrefsStore::with_raw("pref.key", "{\"k\":1}");
        let store_obj: &dyn PrefsStore = &store;

        assert_eq!(
            block_on(store_obj.load_pref("pref.key")).expect("load"),
            Some("{\"k\":1}".to_string())
        );
        assert_eq!(block_on(store_obj.load_pref("other")).expect("load"), None);
    }

    #[test]
    fn noop_store_is_empty() {
        let store_obj: &dyn PrefsStore = &NoopPrefsStore;
        assert_eq!(block_on(store_obj.load_pref("k")).expect("load"), None);
    }
}
