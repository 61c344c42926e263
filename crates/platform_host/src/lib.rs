//! Typed host-domain contracts shared by the desktop runtime and its browser adapters.
//!
//! The runtime only talks to the page environment through these traits. Concrete browser
//! adapters live in `platform_host_web`; tests use the in-memory variants defined here.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod storage;
pub mod wallpaper;

pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture};
pub use wallpaper::{WallpaperPreference, WALLPAPER_PREF_KEY};
