//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Off-browser builds compile the same adapters with inert bodies so the runtime and its tests
//! build natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
/// Browser-backed storage adapters.
pub mod storage;

pub use adapters::{build_host_services, prefs_store, selected_host_strategy, PrefsStoreAdapter};
pub use storage::local_prefs::WebPrefsStore;
