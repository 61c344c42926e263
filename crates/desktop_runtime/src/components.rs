//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod menus;
mod overlays;
mod taskbar;
mod window;

use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use self::{
    dock::Dock,
    menus::{DesktopContextMenu, StartMenu},
    overlays::PowerOverlayLayer,
    taskbar::Taskbar,
    window::DesktopWindow,
};

use crate::{
    apps::AppRegistry,
    context_menu::{ContextMenuKind, ContextMenuRequest, TriggerSnapshot},
    gesture::{touch_feeds_tracker, TapGestureTracker, TapOutcome},
    model::{AppId, PointerPosition, WindowId},
    reducer::{single_tap_action, DesktopAction},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell UI.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let registry = AppRegistry::builtin();

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        if runtime.state.get_untracked().context_menu.is_open() {
            runtime.dispatch_action(DesktopAction::DismissContextMenu);
        }
    });
    on_cleanup(move || scroll_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    };
    let wallpaper_style = move || {
        state.with(|desktop| {
            desktop
                .wallpaper_background
                .as_ref()
                .map(|background| format!("background:{background};"))
                .unwrap_or_default()
        })
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            class:mobile=move || state.with(|desktop| desktop.is_mobile())
            on:click=move |_| {
                let desktop = runtime.state.get_untracked();
                if desktop.start_menu_open || desktop.context_menu.is_open() {
                    runtime.dispatch_action(DesktopAction::DismissTransientUi);
                }
            }
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div id="desktop" class="desktop" style=wallpaper_style>
                <div class="desktop-icons">
                    <For
                        each={move || registry.desktop_apps().cloned().collect::<Vec<_>>()}
                        key=|app| app.app_id.clone()
                        let:app
                    >
                        <DesktopIcon
                            app_id=app.app_id
                            window_id=app.window_id
                            label=app.display_name
                            glyph=app.glyph
                        />
                    </For>
                </div>

                <div class="desktop-window-layer">
                    <For
                        each=move || registry.apps().to_vec()
                        key=|app| app.window_id.clone()
                        let:app
                    >
                        <DesktopWindow
                            window_id=app.window_id
                            app_id=app.app_id
                            title=app.display_name
                            glyph=app.glyph
                        />
                    </For>
                </div>
            </div>

            <Dock />
            <StartMenu />
            <Taskbar />
            <DesktopContextMenu />
            <PowerOverlayLayer />
        </div>
    }
}

#[component]
fn DesktopIcon(app_id: AppId, window_id: WindowId, label: String, glyph: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let trigger = MenuTrigger::new(
        runtime,
        ContextMenuRequest::new(ContextMenuKind::DesktopIcon, app_id.clone(), Some(window_id.clone())),
    );
    let open_on_click = window_id.clone();
    let open_on_dblclick = window_id;

    view! {
        <div
            class="icon"
            data-app-id=app_id.to_string()
            on:click=move |_| {
                if runtime.state.get_untracked().is_mobile() {
                    runtime.dispatch_action(DesktopAction::OpenWindow {
                        window_id: open_on_click.clone(),
                    });
                }
            }
            on:dblclick=move |_| {
                runtime.dispatch_action(DesktopAction::OpenWindow {
                    window_id: open_on_dblclick.clone(),
                })
            }
            on:contextmenu:undelegated=move |ev| trigger.on_contextmenu(ev)
            on:touchstart:undelegated=move |ev| trigger.on_touchstart(ev)
            on:touchmove:undelegated=move |ev| trigger.on_touchmove(ev)
        >
            <span class="icon-glyph" aria-hidden="true">{glyph}</span>
            <span class="icon-label">{label}</span>
        </div>
    }
}

/// Right-click and tap-gesture wiring shared by every context menu trigger.
#[derive(Clone, Copy)]
pub(crate) struct MenuTrigger {
    runtime: DesktopRuntimeContext,
    request: StoredValue<ContextMenuRequest>,
    tracker: StoredValue<TapGestureTracker>,
}

impl MenuTrigger {
    pub(crate) fn new(runtime: DesktopRuntimeContext, request: ContextMenuRequest) -> Self {
        let gestures = runtime.state.get_untracked().config.gestures;
        Self {
            runtime,
            request: store_value(request),
            tracker: store_value(TapGestureTracker::new(gestures)),
        }
    }

    pub(crate) fn on_contextmenu(self, ev: web_sys::MouseEvent) {
        ev.prevent_default();
        ev.stop_propagation();
        let pointer = PointerPosition::new(ev.client_x(), ev.client_y());
        self.show(event_trigger_element(&ev), pointer);
    }

    pub(crate) fn on_touchstart(self, ev: web_sys::TouchEvent) {
        if !touch_feeds_tracker(touch_path_tags(&ev).iter().map(String::as_str)) {
            return;
        }
        let Some(point) = first_touch_point(&ev) else {
            return;
        };
        let Some(outcome) = self.tracker.try_update_value(|t| t.touch_start(point)) else {
            return;
        };
        // Touch input goes through the tracker alone; no synthesized click or dblclick.
        ev.prevent_default();
        ev.stop_propagation();
        match outcome {
            TapOutcome::ArmTimer { token, delay } => {
                set_timeout(move || self.on_tap_timer(token), delay);
            }
            TapOutcome::ShowMenu { at } => {
                self.show(event_trigger_element(&ev), at);
            }
            TapOutcome::Idle | TapOutcome::Open | TapOutcome::Cancelled => {}
        }
    }

    pub(crate) fn on_touchmove(self, ev: web_sys::TouchEvent) {
        if let Some(point) = first_touch_point(&ev) {
            self.tracker.update_value(|t| {
                t.touch_move(point);
            });
        }
    }

    fn on_tap_timer(self, token: u64) {
        if self.tracker.try_update_value(|t| t.timer_elapsed(token)) != Some(TapOutcome::Open) {
            return;
        }
        let Some(action) = self.request.try_with_value(single_tap_action) else {
            return;
        };
        self.runtime.dispatch_action(action);
    }

    fn show(self, trigger: Option<web_sys::Element>, pointer: PointerPosition) {
        let snapshot = trigger
            .map(|element| self.runtime.host.get_value().inspect_trigger(&element))
            .unwrap_or_else(TriggerSnapshot::visible);
        self.runtime.dispatch_action(DesktopAction::ShowContextMenu {
            pointer,
            request: self.request.get_value(),
            snapshot,
        });
    }
}

fn event_trigger_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    #[cfg(target_arch = "wasm32")]
    {
        ev.current_target()?.dyn_into::<web_sys::Element>().ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ev;
        None
    }
}

/// Tags from the touched element up to, but excluding, the element the listener sits on.
fn touch_path_tags(ev: &web_sys::TouchEvent) -> Vec<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let trigger = ev.current_target();
        let mut tags = Vec::new();
        let mut node = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok());
        while let Some(element) = node {
            if trigger
                .as_ref()
                .is_some_and(|trigger| js_sys::Object::is(trigger.as_ref(), element.as_ref()))
            {
                break;
            }
            tags.push(element.tag_name());
            node = element.parent_element();
        }
        tags
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ev;
        Vec::new()
    }
}

fn first_touch_point(ev: &web_sys::TouchEvent) -> Option<PointerPosition> {
    let touch = ev.touches().get(0)?;
    Some(PointerPosition::new(touch.client_x(), touch.client_y()))
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}
