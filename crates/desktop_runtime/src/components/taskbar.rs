use std::time::Duration;

use leptos::*;

use super::MenuTrigger;
use crate::{
    context_menu::{ContextMenuKind, ContextMenuRequest},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
    window_manager::TaskbarEntry,
};

const CLOCK_REFRESH: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

fn format_clock(snapshot: ClockSnapshot) -> String {
    format!("{:02}:{:02}", snapshot.hour, snapshot.minute)
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) =
        set_interval_with_handle(move || clock_now.set(ClockSnapshot::now()), CLOCK_REFRESH)
    {
        on_cleanup(move || interval.clear());
    }

    view! {
        <footer id="taskbar" class="taskbar" role="toolbar" aria-label="Taskbar">
            <button
                id="start-button"
                class="taskbar-start"
                class:active=move || state.with(|desktop| desktop.start_menu_open)
                aria-haspopup="menu"
                aria-expanded=move || state.with(|desktop| desktop.start_menu_open)
                on:click=move |ev| {
                    ev.stop_propagation();
                    runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                }
            >
                "Start"
            </button>

            <div id="taskbar-apps" class="taskbar-apps">
                <For
                    each=move || state.with(|desktop| desktop.windows.taskbar_entries().to_vec())
                    key=|entry| entry.window_id.clone()
                    let:entry
                >
                    <TaskbarButton entry />
                </For>
            </div>

            <div class="taskbar-clock" aria-label="Current time">
                {move || format_clock(clock_now.get())}
            </div>
        </footer>
    }
}

#[component]
fn TaskbarButton(entry: TaskbarEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let TaskbarEntry {
        window_id,
        app_id,
        label,
    } = entry;
    let trigger = MenuTrigger::new(
        runtime,
        ContextMenuRequest::new(ContextMenuKind::Taskbar, app_id, Some(window_id.clone())),
    );
    let id = store_value(window_id);
    let is_active = move || {
        runtime
            .state
            .with(|desktop| id.with_value(|id| desktop.windows.is_active(id)))
    };

    view! {
        <button
            class="taskbar-item"
            class:active=is_active
            on:click=move |_| {
                runtime.dispatch_action(DesktopAction::ActivateTaskbarWindow {
                    window_id: id.get_value(),
                })
            }
            on:contextmenu:undelegated=move |ev| trigger.on_contextmenu(ev)
            on:touchstart:undelegated=move |ev| trigger.on_touchstart(ev)
            on:touchmove:undelegated=move |ev| trigger.on_touchmove(ev)
        >
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_pads_hours_and_minutes() {
        assert_eq!(format_clock(ClockSnapshot { hour: 7, minute: 5 }), "07:05");
        assert_eq!(format_clock(ClockSnapshot { hour: 23, minute: 59 }), "23:59");
    }
}
