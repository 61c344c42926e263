//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue and host bootstrap
//! wiring. UI composition stays in [`crate::components`].

use desktop_app_contract::{WindowHookCommand, WindowHooks};
use leptos::*;
use platform_host::HostServices;

use crate::{
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState, WindowId},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Builds the open/minimize/close hooks handed to the app mounted in `window_id`.
    pub fn window_hooks(&self, window_id: WindowId) -> WindowHooks {
        let runtime = *self;
        WindowHooks::new(Callback::new(move |command: WindowHookCommand| {
            let action = match command {
                WindowHookCommand::Open { window_id } => DesktopAction::OpenWindow { window_id },
                WindowHookCommand::MinimizeSelf => DesktopAction::MinimizeWindow {
                    window_id: window_id.clone(),
                },
                WindowHookCommand::CloseSelf => DesktopAction::CloseWindow {
                    window_id: window_id.clone(),
                },
            };
            runtime.dispatch_action(action);
        }))
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    effect_executor::install(runtime);
    runtime.host.get_value().install_boot(runtime.dispatch);

    let resize_listener = window_event_listener(ev::resize, move |_| {
        let viewport = runtime.host.get_value().viewport();
        runtime.dispatch_action(DesktopAction::ViewportResized { viewport });
    });
    on_cleanup(move || resize_listener.remove());
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and powers the desktop on.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    logging::log!(
        "desktop runtime starting with {} host",
        host_services.host_strategy.as_str()
    );
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
