use leptos::*;

use super::stop_mouse_event;
use crate::{
    apps::AppRegistry,
    context_menu::{available_actions, MenuAction},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let registry = AppRegistry::builtin();

    let run_and_close = move |action: DesktopAction| {
        runtime.dispatch_action(action);
        runtime.dispatch_action(DesktopAction::CloseStartMenu);
    };

    view! {
        <Show when=move || state.with(|desktop| desktop.start_menu_open) fallback=|| ()>
            <div
                id="start-menu"
                class="start-menu"
                role="menu"
                aria-label="Start menu"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="start-menu-apps">
                    {registry
                        .start_menu_apps()
                        .map(|app| {
                            let window_id = app.window_id.clone();
                            view! {
                                <button
                                    role="menuitem"
                                    class="start-menu-item"
                                    on:click:undelegated=move |ev| {
                                        stop_mouse_event(&ev);
                                        run_and_close(DesktopAction::OpenWindow {
                                            window_id: window_id.clone(),
                                        });
                                    }
                                >
                                    <span class="start-menu-glyph" aria-hidden="true">
                                        {app.glyph.clone()}
                                    </span>
                                    <span>{app.display_name.clone()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="start-menu-power">
                    <button
                        role="menuitem"
                        class="start-menu-item"
                        on:click:undelegated=move |ev| {
                            stop_mouse_event(&ev);
                            run_and_close(DesktopAction::RequestStandby);
                        }
                    >
                        "Standby"
                    </button>
                    <button
                        role="menuitem"
                        class="start-menu-item"
                        on:click:undelegated=move |ev| {
                            stop_mouse_event(&ev);
                            run_and_close(DesktopAction::RequestReboot);
                        }
                    >
                        "Restart"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub(super) fn DesktopContextMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let menu = move || {
        state.with(|desktop| {
            desktop.context_menu.current().map(|open| {
                (
                    open.position,
                    available_actions(&open.request, &desktop.windows),
                )
            })
        })
    };

    move || {
        let Some((position, actions)) = menu() else {
            return ().into_view();
        };
        let style = format!("display:block;left:{}px;top:{}px;", position.x, position.y);

        view! {
            <div
                id="context-menu"
                class="context-menu"
                role="menu"
                style=style
                on:contextmenu=move |ev| stop_mouse_event(&ev)
            >
                {actions
                    .into_iter()
                    .map(|action| view! { <ContextMenuItem action /> })
                    .collect_view()}
            </div>
        }
        .into_view()
    }
}

#[component]
fn ContextMenuItem(action: MenuAction) -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <button
            role="menuitem"
            class="context-menu-item"
            on:click:undelegated=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(DesktopAction::ChooseContextMenuAction { action });
            }
        >
            {action.label()}
        </button>
    }
}
