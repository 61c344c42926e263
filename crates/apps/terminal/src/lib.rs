//! Terminal desktop app: a line-echo console rendered into a window surface.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{window_primary_input_dom_id, AppMountContext};
use leptos::ev::KeyboardEvent;
use leptos::*;

const MAX_TERMINAL_LINES: usize = 200;

/// Echo transcript shown in the terminal screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalTranscript {
    lines: Vec<String>,
}

impl TerminalTranscript {
    /// Appends the echo of one submitted line. Empty submissions are echoed as well.
    pub fn submit(&mut self, line: &str) {
        self.lines.push(format!("> {line}"));
        if self.lines.len() > MAX_TERMINAL_LINES {
            let overflow = self.lines.len() - MAX_TERMINAL_LINES;
            self.lines.drain(..overflow);
        }
    }

    /// Drops every echoed line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Echoed lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[component]
/// Terminal window content.
pub fn TerminalApp(
    /// Mount context injected by the desktop runtime.
    context: AppMountContext,
) -> impl IntoView {
    let transcript = create_rw_signal(TerminalTranscript::default());
    let input = create_rw_signal(String::new());
    let input_id = window_primary_input_dom_id(&context.window_id);

    let submit = move || {
        let line = input.get_untracked();
        transcript.update(|t| t.submit(&line));
        input.set(String::new());
    };

    let indexed_lines = move || {
        transcript
            .get()
            .lines()
            .iter()
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="app-shell app-terminal-shell">
            <div class="app-toolbar">
                <button
                    type="button"
                    class="app-action"
                    on:click=move |_| transcript.update(TerminalTranscript::clear)
                >
                    "Clear"
                </button>
            </div>

            <div class="terminal-screen" role="log" aria-live="polite">
                <For each=indexed_lines key=|(idx, line)| (*idx, line.clone()) let:entry>
                    <div class="terminal-line">{entry.1}</div>
                </For>
            </div>

            <div class="terminal-input-row">
                <input
                    id=input_id
                    class="terminal-input app-field"
                    type="text"
                    placeholder="Type a command..."
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| match ev.key().as_str() {
                        "Enter" => submit(),
                        "l" | "L" if ev.ctrl_key() => {
                            ev.prevent_default();
                            transcript.update(TerminalTranscript::clear);
                        }
                        _ => {}
                    }
                />
            </div>
        </div>
    }
}

/// Mount entry point registered with the desktop app registry.
pub fn mount_terminal_app(context: AppMountContext) -> View {
    view! { <TerminalApp context /> }.into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn submit_echoes_with_prompt_prefix() {
        let mut transcript = TerminalTranscript::default();
        transcript.submit("ls");
        transcript.submit("");
        assert_eq!(transcript.lines(), &["> ls".to_string(), "> ".to_string()]);
    }

    #[test]
    fn transcript_keeps_only_the_newest_lines() {
        let mut transcript = TerminalTranscript::default();
        for idx in 0..(MAX_TERMINAL_LINES + 3) {
            transcript.submit(&idx.to_string());
        }
        assert_eq!(transcript.lines().len(), MAX_TERMINAL_LINES);
        assert_eq!(transcript.lines()[0], "> 3");
    }

    #[test]
    fn clear_empties_transcript() {
        let mut transcript = TerminalTranscript::default();
        transcript.submit("echo");
        transcript.clear();
        assert!(transcript.lines().is_empty());
    }
}
