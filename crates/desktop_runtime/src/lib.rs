//! Desktop session runtime: window manager, context menu, power sequencing and the shell UI.

pub mod apps;
pub mod components;
pub mod config;
pub mod context_menu;
mod effect_executor;
pub mod gesture;
mod host;
pub mod model;
pub mod persistence;
pub mod power;
pub mod recent;
pub mod reducer;
mod runtime_context;
pub mod wallpaper;
pub mod window_manager;

pub use apps::{AppDescriptor, AppRegistry};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::ShellConfig;
pub use model::*;
pub use persistence::load_wallpaper_background;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use host::DesktopHostContext;
