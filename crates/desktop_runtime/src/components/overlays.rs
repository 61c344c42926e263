use leptos::*;

use super::stop_mouse_event;
use crate::{power::PowerOverlay, reducer::DesktopAction, runtime_context::use_desktop_runtime};

#[component]
/// Full-screen splash, transition and standby layers driven by the power state.
pub(super) fn PowerOverlayLayer() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let overlay = Signal::derive(move || runtime.state.with(|desktop| desktop.power.overlay()));

    move || match overlay.get() {
        PowerOverlay::None => ().into_view(),
        PowerOverlay::Splash => view! {
            <div id="splash-screen" class="power-overlay splash" aria-busy="true">
                <div class="splash-logo" aria-hidden="true">"🖥️"</div>
                <div class="splash-title">"Starting up"</div>
            </div>
        }
        .into_view(),
        PowerOverlay::Paused | PowerOverlay::Rebooting => {
            let glyph = overlay.get_untracked().glyph().unwrap_or_default();
            view! {
                <div class="power-overlay black-screen" aria-busy="true">
                    <span class="black-screen-glyph" aria-hidden="true">{glyph}</span>
                </div>
            }
            .into_view()
        }
        PowerOverlay::Standby => view! {
            <div
                id="standby-screen"
                class="power-overlay standby"
                role="button"
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::RequestWake);
                }
            >
                <div class="standby-message">"Click anywhere to wake up"</div>
            </div>
        }
        .into_view(),
    }
}
