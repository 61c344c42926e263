//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    context_menu::{
        resolve_target_window, ContextMenuKind, ContextMenuRequest, MenuAction, TriggerSnapshot,
    },
    model::{AppId, DesktopState, InteractionState, PointerPosition, Viewport, WindowId},
    power::{PowerCommand, PowerError, PowerEvent, PowerStep, ScheduledTransition},
    window_manager::WindowError,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Show, raise and add a taskbar entry for a window.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Open the window registered for an app.
    OpenApp {
        /// App whose window should open.
        app_id: AppId,
    },
    /// Raise a displayed window.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window to the taskbar.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Close a window.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Taskbar button click: reopen if off screen, otherwise focus.
    ActivateTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Flip a window's fullscreen flag.
    ToggleFullscreen {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag where it is.
    EndMove,
    /// Record the new viewport and re-apply the mobile fullscreen rule.
    ViewportResized {
        /// Current page viewport.
        viewport: Viewport,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Right-click or double tap on a menu trigger.
    ShowContextMenu {
        /// Requested menu anchor.
        pointer: PointerPosition,
        /// Trigger surface and target.
        request: ContextMenuRequest,
        /// Visibility of the trigger element.
        snapshot: TriggerSnapshot,
    },
    /// Close the context menu if open.
    DismissContextMenu,
    /// Run a context menu entry against the menu's target.
    ChooseContextMenuAction {
        /// Chosen entry.
        action: MenuAction,
    },
    /// Click outside any menu: close the start menu and the context menu.
    DismissTransientUi,
    /// Initial power-on at page load.
    PowerOn,
    /// Start menu "standby" entry.
    RequestStandby,
    /// Click on the standby screen.
    RequestWake,
    /// Start menu "reboot" entry.
    RequestReboot,
    /// A scheduled power transition timer fired.
    PowerTimerElapsed {
        /// Token of the scheduled transition.
        token: u64,
    },
    /// Apply the resolved wallpaper background (or the default when `None`).
    ApplyWallpaper {
        /// CSS `background` value.
        background: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Arm a timer that dispatches [`DesktopAction::PowerTimerElapsed`].
    ScheduleTransition(ScheduledTransition),
    /// Vibrate the device, when supported.
    HapticPulse {
        /// Pulse length in milliseconds.
        duration_ms: u32,
    },
    /// Move focus into the newly opened window's primary input.
    FocusWindowInput(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference unknown surfaces or break the power table.
pub enum ReducerError {
    #[error(transparent)]
    Window(#[from] WindowError),
    #[error(transparent)]
    Power(#[from] PowerError),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::Window`] when an action names a window or app the registry does not
/// know, and [`ReducerError::Power`] for power events the current state does not accept. The
/// caller discards the mutated copy on error.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { window_id } => {
            open_window(state, &window_id, &mut effects)?;
        }
        DesktopAction::OpenApp { app_id } => {
            let window_id = state
                .windows
                .window_for_app(&app_id)
                .ok_or(WindowError::UnknownApp(app_id))?;
            open_window(state, &window_id, &mut effects)?;
        }
        DesktopAction::FocusWindow { window_id } => state.windows.focus(&window_id)?,
        DesktopAction::MinimizeWindow { window_id } => {
            end_drag_of(interaction, &window_id);
            state.windows.minimize(&window_id)?;
        }
        DesktopAction::CloseWindow { window_id } => {
            end_drag_of(interaction, &window_id);
            state.windows.close(&window_id)?;
        }
        DesktopAction::ActivateTaskbarWindow { window_id } => {
            let was_displayed = state
                .windows
                .record(&window_id)
                .is_some_and(|r| r.displayed);
            state
                .windows
                .activate_from_taskbar(&window_id, state.viewport.width)?;
            if !was_displayed {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::ToggleFullscreen { window_id } => {
            state.windows.toggle_fullscreen(&window_id)?;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            interaction.dragging = state.windows.start_drag(&window_id, pointer)?;
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                state.windows.update_drag(session, pointer);
            }
        }
        DesktopAction::EndMove => interaction.dragging = None,
        DesktopAction::ViewportResized { viewport } => {
            state.viewport = viewport;
            state.windows.apply_viewport_mode(viewport.width);
        }
        DesktopAction::ToggleStartMenu => state.start_menu_open = !state.start_menu_open,
        DesktopAction::CloseStartMenu => state.start_menu_open = false,
        DesktopAction::ShowContextMenu {
            pointer,
            request,
            snapshot,
        } => {
            if state
                .context_menu
                .request_show(pointer, request, snapshot, state.viewport)
            {
                effects.push(RuntimeEffect::HapticPulse {
                    duration_ms: state.config.haptic_pulse_ms,
                });
            }
        }
        DesktopAction::DismissContextMenu => {
            state.context_menu.dismiss();
        }
        DesktopAction::ChooseContextMenuAction { action } => {
            let Some(request) = state.context_menu.dismiss() else {
                return Ok(effects);
            };
            let Some(window_id) = resolve_target_window(&request, &state.windows) else {
                return Ok(effects);
            };
            match action {
                MenuAction::Open => open_window(state, &window_id, &mut effects)?,
                MenuAction::Hide => {
                    end_drag_of(interaction, &window_id);
                    state.windows.minimize(&window_id)?;
                }
                MenuAction::Close => {
                    end_drag_of(interaction, &window_id);
                    state.windows.close(&window_id)?;
                }
            }
        }
        DesktopAction::DismissTransientUi => {
            state.start_menu_open = false;
            state.context_menu.dismiss();
        }
        DesktopAction::PowerOn => {
            let step = state.power.fire(PowerEvent::PowerOn)?;
            apply_power_step(state, interaction, step, &mut effects);
        }
        DesktopAction::RequestStandby => {
            let step = state.power.fire(PowerEvent::StandbyRequested)?;
            apply_power_step(state, interaction, step, &mut effects);
        }
        DesktopAction::RequestWake => {
            let step = state.power.fire(PowerEvent::WakeRequested)?;
            apply_power_step(state, interaction, step, &mut effects);
        }
        DesktopAction::RequestReboot => {
            let step = state.power.fire(PowerEvent::RebootRequested)?;
            apply_power_step(state, interaction, step, &mut effects);
        }
        DesktopAction::PowerTimerElapsed { token } => {
            let step = state.power.timer_elapsed(token)?;
            apply_power_step(state, interaction, step, &mut effects);
        }
        DesktopAction::ApplyWallpaper { background } => state.wallpaper_background = background,
    }

    Ok(effects)
}

/// Action a confirmed single tap on a menu trigger performs.
///
/// Taskbar buttons behave like a click on them. Every other trigger opens its window, or the
/// app's window when the trigger names no window.
pub fn single_tap_action(request: &ContextMenuRequest) -> DesktopAction {
    match (request.kind, &request.window_id) {
        (ContextMenuKind::Taskbar, Some(window_id)) => DesktopAction::ActivateTaskbarWindow {
            window_id: window_id.clone(),
        },
        (_, Some(window_id)) => DesktopAction::OpenWindow {
            window_id: window_id.clone(),
        },
        (_, None) => DesktopAction::OpenApp {
            app_id: request.app_id.clone(),
        },
    }
}

fn open_window(
    state: &mut DesktopState,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), WindowError> {
    state.windows.open(window_id, state.viewport.width)?;
    effects.push(RuntimeEffect::FocusWindowInput(window_id.clone()));
    Ok(())
}

fn end_drag_of(interaction: &mut InteractionState, window_id: &WindowId) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|session| &session.window_id == window_id)
    {
        interaction.dragging = None;
    }
}

fn apply_power_step(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    step: PowerStep,
    effects: &mut Vec<RuntimeEffect>,
) {
    if let Some(command) = step.command {
        match command {
            PowerCommand::HideAllWindows => state.windows.hide_all(),
            PowerCommand::ResetSession => state.windows.reset(),
        }
        state.context_menu.dismiss();
        state.start_menu_open = false;
        interaction.dragging = None;
    }
    if let Some(scheduled) = step.scheduled {
        effects.push(RuntimeEffect::ScheduleTransition(scheduled));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::AppId,
        power::{PowerOverlay, PowerState},
        window_manager::RecentEntry,
    };

    #[test]
    fn single_tap_matches_the_click_of_each_trigger() {
        let taskbar = ContextMenuRequest::new(
            ContextMenuKind::Taskbar,
            app("terminal"),
            Some(win("win-terminal")),
        );
        assert_eq!(
            single_tap_action(&taskbar),
            DesktopAction::ActivateTaskbarWindow {
                window_id: win("win-terminal")
            }
        );

        let icon = ContextMenuRequest::new(
            ContextMenuKind::DesktopIcon,
            app("notes"),
            Some(win("win-notes")),
        );
        assert_eq!(
            single_tap_action(&icon),
            DesktopAction::OpenWindow {
                window_id: win("win-notes")
            }
        );

        let recent = ContextMenuRequest::new(ContextMenuKind::DockRecent, app("files"), None);
        assert_eq!(
            single_tap_action(&recent),
            DesktopAction::OpenApp { app_id: app("files") }
        );
    }

    #[test]
    fn taskbar_tap_on_active_window_keeps_recent_order() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                window_id: win("win-terminal"),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                window_id: win("win-files"),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                window_id: win("win-terminal"),
            },
        );

        let taskbar = ContextMenuRequest::new(
            ContextMenuKind::Taskbar,
            app("terminal"),
            Some(win("win-terminal")),
        );
        dispatch(&mut state, &mut interaction, single_tap_action(&taskbar));

        assert_eq!(state.windows.recent_apps(), &[app("files"), app("terminal")]);
        assert!(state.windows.is_active(&win("win-terminal")));
    }

    fn win(raw: &str) -> WindowId {
        WindowId::trusted(raw)
    }

    fn app(raw: &str) -> AppId {
        AppId::trusted(raw)
    }

    fn dispatch(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn run_pending_timer(state: &mut DesktopState, interaction: &mut InteractionState) {
        let token = state.power.pending().expect("pending power timer").token;
        dispatch(state, interaction, DesktopAction::PowerTimerElapsed { token });
    }

    fn booted() -> (DesktopState, InteractionState) {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        dispatch(&mut state, &mut interaction, DesktopAction::PowerOn);
        run_pending_timer(&mut state, &mut interaction);
        assert_eq!(state.power.state(), PowerState::Active);
        (state, interaction)
    }

    #[test]
    fn power_on_schedules_splash_timer() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let effects = dispatch(&mut state, &mut interaction, DesktopAction::PowerOn);
        let pending = state.power.pending().expect("pending");
        assert_eq!(effects, vec![RuntimeEffect::ScheduleTransition(pending)]);
        assert_eq!(pending.delay, Duration::from_millis(2500));
    }

    #[test]
    fn open_minimize_close_scenario_drives_dock_recent() {
        let (mut state, mut interaction) = booted();
        let terminal = win("win-terminal");

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                window_id: terminal.clone(),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(terminal.clone())]);
        assert_eq!(state.windows.taskbar_entries().len(), 1);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: terminal.clone(),
            },
        );
        assert_eq!(
            state.windows.recent_entries(),
            vec![RecentEntry {
                app_id: app("terminal"),
                window_id: Some(terminal.clone()),
                running_in_background: true,
            }]
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: terminal.clone(),
            },
        );
        assert!(state.windows.recent_entries().is_empty());
        assert!(state.windows.taskbar_entries().is_empty());
    }

    #[test]
    fn unknown_window_is_an_error() {
        let (mut state, mut interaction) = booted();
        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                window_id: win("win-paint"),
            },
        )
        .unwrap_err();
        assert_eq!(err, ReducerError::Window(WindowError::UnknownWindow(win("win-paint"))));

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: app("paint"),
            },
        )
        .unwrap_err();
        assert_eq!(err, ReducerError::Window(WindowError::UnknownApp(app("paint"))));
    }

    #[test]
    fn open_app_resolves_registered_window() {
        let (mut state, mut interaction) = booted();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: app("notes"),
            },
        );
        assert!(state.windows.record(&win("win-notes")).is_some_and(|r| r.displayed));
    }

    #[test]
    fn standby_hides_everything_and_wake_does_not_restore() {
        let (mut state, mut interaction) = booted();
        for id in ["win-terminal", "win-files"] {
            dispatch(
                &mut state,
                &mut interaction,
                DesktopAction::OpenWindow { window_id: win(id) },
            );
        }
        dispatch(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);

        let effects = dispatch(&mut state, &mut interaction, DesktopAction::RequestStandby);
        assert!(matches!(effects.as_slice(), [RuntimeEffect::ScheduleTransition(_)]));
        assert!(!state.start_menu_open);
        assert_eq!(state.power.overlay(), PowerOverlay::Paused);
        for record in state.windows.records() {
            assert!(record.open && !record.hidden && !record.displayed);
        }
        assert_eq!(state.windows.taskbar_entries().len(), 2);

        run_pending_timer(&mut state, &mut interaction);
        assert_eq!(state.power.state(), PowerState::Standby);

        dispatch(&mut state, &mut interaction, DesktopAction::RequestWake);
        run_pending_timer(&mut state, &mut interaction);
        run_pending_timer(&mut state, &mut interaction);
        assert_eq!(state.power.state(), PowerState::Active);
        assert!(state.windows.records().all(|r| !r.displayed));

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateTaskbarWindow {
                window_id: win("win-files"),
            },
        );
        assert!(state.windows.record(&win("win-files")).is_some_and(|r| r.displayed));
    }

    #[test]
    fn reboot_clears_records_recent_and_taskbar() {
        let (mut state, mut interaction) = booted();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                window_id: win("win-terminal"),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: win("win-terminal"),
            },
        );

        let effects = dispatch(&mut state, &mut interaction, DesktopAction::RequestReboot);
        let RuntimeEffect::ScheduleTransition(scheduled) = &effects[0] else {
            panic!("expected scheduled reboot, got {effects:?}");
        };
        assert_eq!(scheduled.event, PowerEvent::RebootFinished);
        assert_eq!(scheduled.delay, Duration::from_millis(3000));
        assert!(state
            .windows
            .records()
            .all(|r| !r.open && !r.hidden && !r.displayed));
        assert!(state.windows.recent_apps().is_empty());
        assert!(state.windows.taskbar_entries().is_empty());

        run_pending_timer(&mut state, &mut interaction);
        assert_eq!(state.power.overlay(), PowerOverlay::Splash);
        run_pending_timer(&mut state, &mut interaction);
        assert_eq!(state.power.state(), PowerState::Active);
    }

    #[test]
    fn invalid_power_requests_are_errors() {
        let (mut state, mut interaction) = booted();
        assert!(matches!(
            reduce_desktop(&mut state, &mut interaction, DesktopAction::RequestWake),
            Err(ReducerError::Power(PowerError::InvalidTransition { .. }))
        ));
        assert!(matches!(
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::PowerTimerElapsed { token: 99 }
            ),
            Err(ReducerError::Power(PowerError::StaleTimer { token: 99 }))
        ));
    }

    #[test]
    fn context_menu_show_pulses_and_actions_resolve_by_app() {
        let (mut state, mut interaction) = booted();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                window_id: win("win-files"),
            },
        );

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ShowContextMenu {
                pointer: PointerPosition::new(4000, 4000),
                request: ContextMenuRequest::new(ContextMenuKind::DockRecent, app("files"), None),
                snapshot: TriggerSnapshot::visible(),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::HapticPulse { duration_ms: 10 }]);
        let menu = state.context_menu.current().expect("menu open");
        assert_eq!(menu.position, PointerPosition::new(1280 - 160 - 5, 800 - 112 - 5));

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ChooseContextMenuAction {
                action: MenuAction::Hide,
            },
        );
        assert!(!state.context_menu.is_open());
        assert!(state
            .windows
            .record(&win("win-files"))
            .is_some_and(|r| r.hidden));
    }

    #[test]
    fn hidden_trigger_does_not_open_menu() {
        let (mut state, mut interaction) = booted();
        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ShowContextMenu {
                pointer: PointerPosition::new(10, 10),
                request: ContextMenuRequest::new(
                    ContextMenuKind::Window,
                    app("terminal"),
                    Some(win("win-terminal")),
                ),
                snapshot: TriggerSnapshot {
                    width: 0.0,
                    height: 0.0,
                    center_hits_self_or_descendant: false,
                },
            },
        );
        assert!(effects.is_empty());
        assert!(!state.context_menu.is_open());
    }

    #[test]
    fn menu_action_without_open_menu_is_noop() {
        let (mut state, mut interaction) = booted();
        let before = state.clone();
        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ChooseContextMenuAction {
                action: MenuAction::Close,
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn outside_click_dismisses_start_and_context_menus() {
        let (mut state, mut interaction) = booted();
        dispatch(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ShowContextMenu {
                pointer: PointerPosition::new(10, 10),
                request: ContextMenuRequest::new(ContextMenuKind::DockMain, app("browser"), None),
                snapshot: TriggerSnapshot::visible(),
            },
        );
        dispatch(&mut state, &mut interaction, DesktopAction::DismissTransientUi);
        assert!(!state.start_menu_open);
        assert!(!state.context_menu.is_open());
    }

    #[test]
    fn drag_session_moves_window_and_ends_without_snapping() {
        let (mut state, mut interaction) = booted();
        let id = win("win-terminal");
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                window_id: id.clone(),
            },
        );
        let start = state.windows.record(&id).unwrap().position;

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id.clone(),
                pointer: PointerPosition::new(start.x + 4, start.y + 4),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition::new(-50, 2000),
            },
        );
        dispatch(&mut state, &mut interaction, DesktopAction::EndMove);

        assert_eq!(interaction.dragging, None);
        assert_eq!(
            state.windows.record(&id).unwrap().position,
            PointerPosition::new(-54, 1996)
        );
    }

    #[test]
    fn resize_below_breakpoint_makes_displayed_windows_fullscreen() {
        let (mut state, mut interaction) = booted();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                window_id: win("win-notes"),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ViewportResized {
                viewport: Viewport {
                    width: 390,
                    height: 844,
                },
            },
        );
        assert!(state.is_mobile());
        assert!(state.windows.record(&win("win-notes")).unwrap().fullscreen);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                window_id: win("win-about"),
            },
        );
        assert!(state.windows.record(&win("win-about")).unwrap().fullscreen);
    }
}
