//! Shared contract types between the desktop window manager runtime and app content providers.
//!
//! Apps render into a window surface the runtime owns. The only way back into the window
//! manager is the [`WindowHooks`] handle passed in [`AppMountContext`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, View};
use serde::{Deserialize, Serialize};

fn is_valid_identifier(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 32 {
        return false;
    }
    let bytes = raw.as_bytes();
    if !bytes[0].is_ascii_lowercase() || raw.ends_with('-') {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

/// Stable identifier for a virtual application (for example `terminal`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` is a lowercase kebab-case token.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_identifier(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected a lowercase kebab-case token"
            ))
        }
    }

    /// Creates an id without validation for catalog-trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of the on-screen window surface bound to one application.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowSurfaceId(String);

impl WindowSurfaceId {
    /// Returns a surface identifier when `raw` is a lowercase kebab-case token.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_identifier(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid window id `{raw}`; expected a lowercase kebab-case token"
            ))
        }
    }

    /// Creates an id without validation for catalog-trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowSurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the DOM id apps should put on their primary text input.
pub fn window_primary_input_dom_id(window_id: &WindowSurfaceId) -> String {
    format!("window-primary-input-{}", window_id.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Window-manager requests an app may issue.
pub enum WindowHookCommand {
    /// Open (or re-focus) another window surface.
    Open {
        /// Surface to open.
        window_id: WindowSurfaceId,
    },
    /// Minimize the window hosting the app.
    MinimizeSelf,
    /// Close the window hosting the app.
    CloseSelf,
}

#[derive(Clone, Copy)]
/// Open/minimize/close hooks handed to app content.
pub struct WindowHooks {
    sender: Callback<WindowHookCommand>,
}

impl WindowHooks {
    /// Wraps the runtime callback that turns hook commands into window-manager actions.
    pub fn new(sender: Callback<WindowHookCommand>) -> Self {
        Self { sender }
    }

    /// Requests that `window_id` be opened and focused.
    pub fn open(&self, window_id: WindowSurfaceId) {
        self.sender.call(WindowHookCommand::Open { window_id });
    }

    /// Requests that the hosting window be minimized.
    pub fn minimize(&self) {
        self.sender.call(WindowHookCommand::MinimizeSelf);
    }

    /// Requests that the hosting window be closed.
    pub fn close(&self) {
        self.sender.call(WindowHookCommand::CloseSelf);
    }
}

#[derive(Clone)]
/// Mount context injected by the desktop runtime per window surface.
pub struct AppMountContext {
    /// App rendered into the surface.
    pub app_id: ApplicationId,
    /// Surface hosting the app.
    pub window_id: WindowSurfaceId,
    /// Hooks back into the window manager.
    pub hooks: WindowHooks,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// App module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn identifiers_are_lowercase_kebab_tokens() {
        assert!(ApplicationId::new("terminal").is_ok());
        assert!(ApplicationId::new("file-manager").is_ok());
        assert!(ApplicationId::new("Terminal").is_err());
        assert!(ApplicationId::new("").is_err());
        assert!(ApplicationId::new("notes-").is_err());
        assert!(WindowSurfaceId::new("win-terminal").is_ok());
        assert!(WindowSurfaceId::new("win terminal").is_err());
    }

    #[test]
    fn primary_input_dom_id_is_scoped_to_surface() {
        let id = WindowSurfaceId::trusted("win-terminal");
        assert_eq!(
            window_primary_input_dom_id(&id),
            "window-primary-input-win-terminal"
        );
    }
}
