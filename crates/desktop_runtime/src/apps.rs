//! App registry loaded from the build-time catalog and app content mounting.

mod placeholders;

use std::sync::OnceLock;

use desktop_app_contract::{AppModule, AppMountContext};
use desktop_app_explorer::mount_explorer_app;
use desktop_app_notepad::mount_notepad_app;
use desktop_app_terminal::mount_terminal_app;
use leptos::View;
use serde::Deserialize;

use crate::model::{AppId, PointerPosition, WindowId};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

/// Glyph shown for apps the catalog does not know.
pub const FALLBACK_APP_GLYPH: &str = "📦";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Static metadata for one application and its window surface.
pub struct AppDescriptor {
    pub app_id: AppId,
    pub window_id: WindowId,
    pub display_name: String,
    pub glyph: String,
    pub show_on_desktop: bool,
    pub show_in_dock: bool,
    pub show_in_start_menu: bool,
    pub default_position: PointerPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Ordered app catalog with lookups by app and by window.
pub struct AppRegistry {
    apps: Vec<AppDescriptor>,
}

impl AppRegistry {
    /// Returns the registry compiled from `app_catalog.toml`.
    pub fn builtin() -> &'static AppRegistry {
        static REGISTRY: OnceLock<AppRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let apps: Vec<AppDescriptor> = serde_json::from_str(APP_CATALOG_JSON)
                .expect("generated app catalog should parse");
            AppRegistry::from_apps(apps)
        })
    }

    pub fn from_apps(apps: Vec<AppDescriptor>) -> Self {
        Self { apps }
    }

    pub fn apps(&self) -> &[AppDescriptor] {
        &self.apps
    }

    pub fn by_app(&self, app_id: &AppId) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| &app.app_id == app_id)
    }

    pub fn by_window(&self, window_id: &WindowId) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| &app.window_id == window_id)
    }

    /// Dock/taskbar glyph for `app_id`, falling back to [`FALLBACK_APP_GLYPH`].
    pub fn glyph_for(&self, app_id: &AppId) -> &str {
        self.by_app(app_id)
            .map(|app| app.glyph.as_str())
            .unwrap_or(FALLBACK_APP_GLYPH)
    }

    pub fn desktop_apps(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.iter().filter(|app| app.show_on_desktop)
    }

    pub fn dock_apps(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.iter().filter(|app| app.show_in_dock)
    }

    pub fn start_menu_apps(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.iter().filter(|app| app.show_in_start_menu)
    }
}

/// Content module for an app. Apps without a dedicated crate get a placeholder surface.
pub fn app_module(app_id: &AppId) -> AppModule {
    match app_id.as_str() {
        "terminal" => AppModule::new(mount_terminal_app),
        "notes" => AppModule::new(mount_notepad_app),
        "files" => AppModule::new(mount_explorer_app),
        "browser" => AppModule::new(placeholders::mount_browser_placeholder_app),
        "settings" => AppModule::new(placeholders::mount_settings_placeholder_app),
        "about" => AppModule::new(placeholders::mount_about_app),
        _ => AppModule::new(placeholders::mount_unknown_app),
    }
}

/// Mounts the content of `context.app_id` into its window surface.
pub fn mount_app_content(context: AppMountContext) -> View {
    app_module(&context.app_id).mount(context)
}
