use desktop_app_contract::AppMountContext;
use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::{pointer_from_pointer_event, stop_mouse_event, MenuTrigger};
use crate::{
    apps::mount_app_content,
    context_menu::{ContextMenuKind, ContextMenuRequest},
    model::{AppId, WindowId},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(
    window_id: WindowId,
    app_id: AppId,
    title: String,
    glyph: String,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(window_id.clone());

    let record = Signal::derive(move || {
        runtime
            .state
            .with(|desktop| id.with_value(|id| desktop.windows.record(id).cloned()))
    });
    let is_active = Signal::derive(move || {
        runtime
            .state
            .with(|desktop| id.with_value(|id| desktop.windows.is_active(id)))
    });
    let trigger = MenuTrigger::new(
        runtime,
        ContextMenuRequest::new(ContextMenuKind::Window, app_id.clone(), Some(window_id.clone())),
    );

    let style = move || match record.get() {
        Some(win) if win.displayed => format!(
            "display:flex;left:{}px;top:{}px;z-index:{};",
            win.position.x, win.position.y, win.z_index
        ),
        _ => "display:none;".to_string(),
    };
    let focus = move |_| {
        if !is_active.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: id.get_value(),
            });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id: id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let minimize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            window_id: id.get_value(),
        });
    };
    let toggle_fullscreen = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleFullscreen {
            window_id: id.get_value(),
        });
    };
    let close = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: id.get_value(),
        });
    };
    let fullscreen_label = move || {
        if record.get().is_some_and(|win| win.fullscreen) {
            "Restore window"
        } else {
            "Enter full screen"
        }
    };

    let body = untrack(|| {
        mount_app_content(AppMountContext {
            app_id: app_id.clone(),
            window_id: window_id.clone(),
            hooks: runtime.window_hooks(window_id.clone()),
        })
    });

    view! {
        <section
            id=window_id.to_string()
            class="window"
            class:active=is_active
            class:fullscreen=move || record.get().is_some_and(|win| win.fullscreen)
            style=style
            role="dialog"
            aria-label=title.clone()
            on:pointerdown=focus
            on:contextmenu:undelegated=move |ev| trigger.on_contextmenu(ev)
        >
            <header class="window-header" on:pointerdown=begin_move>
                <div
                    class="window-title"
                    on:touchstart:undelegated=move |ev| trigger.on_touchstart(ev)
                    on:touchmove:undelegated=move |ev| trigger.on_touchmove(ev)
                >
                    <span class="window-glyph" aria-hidden="true">{glyph}</span>
                    <span>{title}</span>
                </div>
                <div class="window-controls">
                    <button
                        class="window-control minimize"
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=minimize
                    >
                        "–"
                    </button>
                    <button
                        class="window-control fullscreen"
                        aria-label=fullscreen_label
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=toggle_fullscreen
                    >
                        "□"
                    </button>
                    <button
                        class="window-control close"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=close
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-body">{body}</div>
        </section>
    }
}
