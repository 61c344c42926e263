//! Notes desktop app: a single free-text scratch pad.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{window_primary_input_dom_id, AppMountContext};
use leptos::*;

/// Text shown when a notes window is mounted.
pub const DEFAULT_NOTE_TEXT: &str = "Write here...";

#[component]
/// Notes window content.
pub fn NotepadApp(
    /// Mount context injected by the desktop runtime.
    context: AppMountContext,
) -> impl IntoView {
    let text = create_rw_signal(DEFAULT_NOTE_TEXT.to_string());
    let char_count = Signal::derive(move || text.with(|t| t.chars().count()));

    view! {
        <div class="app-shell app-notepad-shell">
            <textarea
                id=window_primary_input_dom_id(&context.window_id)
                class="notepad-editor"
                spellcheck="false"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            <div class="app-statusbar">
                <span>{move || format!("{} character(s)", char_count.get())}</span>
            </div>
        </div>
    }
}

/// Mount entry point registered with the desktop app registry.
pub fn mount_notepad_app(context: AppMountContext) -> View {
    view! { <NotepadApp context /> }.into_view()
}
