//! Files desktop app: a static folder listing.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::AppMountContext;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FolderEntry {
    name: &'static str,
    location: &'static str,
}

const FOLDERS: [FolderEntry; 3] = [
    FolderEntry {
        name: "Documents",
        location: "/home/documents",
    },
    FolderEntry {
        name: "Pictures",
        location: "/home/pictures",
    },
    FolderEntry {
        name: "Music",
        location: "/home/music",
    },
];

#[component]
/// File manager window content.
pub fn ExplorerApp(
    /// Mount context injected by the desktop runtime.
    context: AppMountContext,
) -> impl IntoView {
    let selected = create_rw_signal::<Option<usize>>(None);

    view! {
        <div class="app-shell app-explorer-shell" data-app-id=context.app_id.to_string()>
            <p class="explorer-title">"File Manager"</p>
            <ul class="explorer-list" aria-label="Folders">
                <For each=move || 0..FOLDERS.len() key=|idx| *idx let:idx>
                    <FolderRow idx=idx entry=FOLDERS[idx] selected=selected />
                </For>
            </ul>
            <div class="app-statusbar">
                <span>{format!("{} folder(s)", FOLDERS.len())}</span>
                <span>{move || {
                    selected
                        .get()
                        .map(|idx| FOLDERS[idx].location.to_string())
                        .unwrap_or_else(|| "Ready".to_string())
                }}</span>
            </div>
        </div>
    }
}

#[component]
fn FolderRow(idx: usize, entry: FolderEntry, selected: RwSignal<Option<usize>>) -> impl IntoView {
    let is_selected = Signal::derive(move || selected.get() == Some(idx));
    view! {
        <li
            class=move || if is_selected.get() { "explorer-folder selected" } else { "explorer-folder" }
            on:mousedown=move |_| selected.set(Some(idx))
        >
            {entry.name}
        </li>
    }
}

/// Mount entry point registered with the desktop app registry.
pub fn mount_explorer_app(context: AppMountContext) -> View {
    view! { <ExplorerApp context /> }.into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn folder_listing_matches_home_layout() {
        let names: Vec<_> = FOLDERS.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Documents", "Pictures", "Music"]);
    }
}
