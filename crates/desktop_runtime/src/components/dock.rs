use leptos::*;

use super::MenuTrigger;
use crate::{
    apps::AppRegistry,
    context_menu::{ContextMenuKind, ContextMenuRequest},
    model::{AppId, WindowId},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
    window_manager::RecentEntry,
};

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let registry = AppRegistry::builtin();
    let recent = move || state.with(|desktop| desktop.windows.recent_entries());

    view! {
        <nav id="dock" class="dock" aria-label="Dock">
            <div class="dock-main">
                {registry
                    .dock_apps()
                    .map(|app| {
                        view! {
                            <DockItem
                                app_id=app.app_id.clone()
                                window_id=Some(app.window_id.clone())
                                glyph=app.glyph.clone()
                                label=app.display_name.clone()
                                kind=ContextMenuKind::DockMain
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || !recent().is_empty() fallback=|| ()>
                <div class="dock-divider" aria-hidden="true"></div>
                <div class="dock-recent">
                    <For
                        each=recent
                        key=|entry| (entry.app_id.clone(), entry.running_in_background)
                        let:entry
                    >
                        <RecentDockItem entry />
                    </For>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn RecentDockItem(entry: RecentEntry) -> impl IntoView {
    let registry = AppRegistry::builtin();
    let running = entry.running_in_background;
    let glyph = registry.glyph_for(&entry.app_id).to_string();
    let label = registry
        .by_app(&entry.app_id)
        .map(|app| app.display_name.clone())
        .unwrap_or_else(|| entry.app_id.to_string());

    view! {
        <div class="dock-recent-item" class:running=running>
            <DockItem
                app_id=entry.app_id
                window_id=entry.window_id
                glyph
                label
                kind=ContextMenuKind::DockRecent
            />
            <Show when=move || running fallback=|| ()>
                <span class="dock-indicator" aria-label="Running in background"></span>
            </Show>
        </div>
    }
}

#[component]
fn DockItem(
    app_id: AppId,
    window_id: Option<WindowId>,
    glyph: String,
    label: String,
    kind: ContextMenuKind,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let trigger = MenuTrigger::new(
        runtime,
        ContextMenuRequest::new(kind, app_id.clone(), window_id.clone()),
    );
    let target = store_value((app_id, window_id));

    view! {
        <button
            class="dock-item"
            title=label.clone()
            aria-label=label
            on:click=move |_| {
                let (app_id, window_id) = target.get_value();
                let action = match window_id {
                    Some(window_id) => DesktopAction::OpenWindow { window_id },
                    None => DesktopAction::OpenApp { app_id },
                };
                runtime.dispatch_action(action);
            }
            on:contextmenu:undelegated=move |ev| trigger.on_contextmenu(ev)
            on:touchstart:undelegated=move |ev| trigger.on_touchstart(ev)
            on:touchmove:undelegated=move |ev| trigger.on_touchmove(ev)
        >
            <span aria-hidden="true">{glyph}</span>
        </button>
    }
}
