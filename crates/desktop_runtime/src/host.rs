//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics never touch the DOM. Timers, haptics, focus and geometry queries live behind
//! [`DesktopHostContext`] so the headless state machines stay testable off-browser.

mod boot;
mod host_ui;

use std::rc::Rc;

use leptos::{logging, set_timeout, Callback};
use platform_host::{HostServices, PrefsStore};

use crate::{
    context_menu::TriggerSnapshot,
    model::{Viewport, WindowId},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone, Default)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    /// Wraps the services assembled by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured lightweight preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Installs boot side effects: viewport sync, power-on and wallpaper loading.
    pub fn install_boot(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ScheduleTransition(scheduled) => {
                let token = scheduled.token;
                set_timeout(
                    move || runtime.dispatch_action(DesktopAction::PowerTimerElapsed { token }),
                    scheduled.delay,
                );
            }
            RuntimeEffect::HapticPulse { duration_ms } => {
                if !host_ui::vibrate(duration_ms) {
                    logging::log!("haptic feedback unavailable");
                }
            }
            RuntimeEffect::FocusWindowInput(window_id) => self.focus_window_input(&window_id),
        }
    }

    /// Moves keyboard focus into a window's primary input.
    ///
    /// Apps opt in by rendering [`desktop_app_contract::window_primary_input_dom_id`] on their
    /// primary text field.
    pub fn focus_window_input(&self, window_id: &WindowId) {
        host_ui::focus_window_input(window_id);
    }

    /// Returns the current page viewport.
    pub fn viewport(&self) -> Viewport {
        host_ui::viewport()
    }

    /// Measures a context menu trigger and hit-tests its centre.
    pub fn inspect_trigger(&self, element: &web_sys::Element) -> TriggerSnapshot {
        host_ui::inspect_trigger(element)
    }
}
