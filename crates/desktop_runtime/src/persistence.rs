//! Boot-time preference loading.

use leptos::logging;
use platform_host::{PrefsStore, WALLPAPER_PREF_KEY};

use crate::wallpaper::{parse_wallpaper_pref, wallpaper_background};

/// Resolves the persisted wallpaper into a CSS background.
///
/// A missing key, an unreadable store and an unusable value all yield `None`, so the desktop
/// keeps its default styling.
pub async fn load_wallpaper_background<S: PrefsStore + ?Sized>(store: &S) -> Option<String> {
    let raw = match store.load_pref(WALLPAPER_PREF_KEY).await {
        Ok(raw) => raw?,
        Err(err) => {
            logging::warn!("wallpaper preference load failed: {err}");
            return None;
        }
    };
    match parse_wallpaper_pref(&raw) {
        Ok(pref) => Some(wallpaper_background(&pref)),
        Err(err) => {
            logging::log!("ignoring wallpaper preference: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryPrefsStore, NoopPrefsStore};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stored_css_wallpaper_is_resolved() {
        let store =
            MemoryPrefsStore::with_raw(WALLPAPER_PREF_KEY, r##"{"type":"css","value":"#004466"}"##);
        assert_eq!(
            block_on(load_wallpaper_background(&store)),
            Some("#004466".to_string())
        );
    }

    #[test]
    fn wallpaper_is_read_from_the_namixos_key() {
        let store = MemoryPrefsStore::with_raw(
            "namixos_wallpaper",
            r##"{"type":"css","value":"#123456"}"##,
        );
        assert_eq!(
            block_on(load_wallpaper_background(&store)),
            Some("#123456".to_string())
        );

        let other_key =
            MemoryPrefsStore::with_raw("webdesk.wallpaper.v1", r##"{"type":"css","value":"#123456"}"##);
        assert_eq!(block_on(load_wallpaper_background(&other_key)), None);
    }

    #[test]
    fn missing_and_invalid_preferences_fall_back_to_default() {
        assert_eq!(block_on(load_wallpaper_background(&NoopPrefsStore)), None);

        let malformed = MemoryPrefsStore::with_raw(WALLPAPER_PREF_KEY, "not json");
        assert_eq!(block_on(load_wallpaper_background(&malformed)), None);

        let unknown =
            MemoryPrefsStore::with_raw(WALLPAPER_PREF_KEY, r#"{"type":"video","value":"a"}"#);
        assert_eq!(block_on(load_wallpaper_background(&unknown)), None);
    }
}
