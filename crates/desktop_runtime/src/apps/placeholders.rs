//! Built-in placeholder surfaces for apps without a dedicated content crate.

use desktop_app_contract::AppMountContext;
use leptos::*;

/// Mounts the Browser placeholder.
pub(super) fn mount_browser_placeholder_app(_: AppMountContext) -> View {
    view! {
        <div class="app-shell app-browser-shell">
            <div class="app-toolbar" role="group" aria-label="Browser placeholder controls">
                <button type="button" class="app-action" disabled=true>"Back"</button>
                <button type="button" class="app-action" disabled=true>"Forward"</button>
                <input class="app-field" type="text" value="about:blank" readonly=true />
            </div>
            <div class="app-placeholder-card">
                <p><strong>"Browser"</strong></p>
                <p>"Web browsing is not available in this session."</p>
            </div>
        </div>
    }
    .into_view()
}

/// Mounts the Settings placeholder.
pub(super) fn mount_settings_placeholder_app(_: AppMountContext) -> View {
    view! {
        <div class="app-shell app-settings-shell">
            <div class="app-placeholder-card">
                <p><strong>"Settings"</strong></p>
                <p>"Nothing to configure yet."</p>
            </div>
        </div>
    }
    .into_view()
}

/// Mounts the About dialog. Its OK button closes the hosting window.
pub(super) fn mount_about_app(context: AppMountContext) -> View {
    let hooks = context.hooks;
    view! {
        <div class="app-shell app-about-shell">
            <div class="app-placeholder-card">
                <p><strong>"Web Desktop"</strong></p>
                <p>{format!("Version {}", env!("CARGO_PKG_VERSION"))}</p>
            </div>
            <div class="app-toolbar">
                <button type="button" class="app-action" on:click=move |_| hooks.close()>
                    "OK"
                </button>
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn mount_unknown_app(context: AppMountContext) -> View {
    view! {
        <div class="app-shell">
            <p>{format!("No content for `{}`.", context.app_id)}</p>
        </div>
    }
    .into_view()
}
