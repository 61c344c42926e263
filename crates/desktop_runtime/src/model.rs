//! Session state owned by the desktop runtime provider.

use serde::Deserialize;

use crate::{
    apps::AppRegistry, config::ShellConfig, context_menu::ContextMenuController,
    power::PowerStateMachine, window_manager::WindowManager,
};

pub use desktop_app_contract::{ApplicationId as AppId, WindowSurfaceId as WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visible page area in CSS pixels.
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-surface window state.
///
/// `hidden` implies `open`, and `displayed` implies `open && !hidden`. Standby clears
/// `displayed` alone, which is why it is tracked apart from the app flags.
pub struct WindowRecord {
    pub window_id: WindowId,
    pub app_id: AppId,
    pub open: bool,
    pub hidden: bool,
    pub displayed: bool,
    pub z_index: u32,
    pub position: PointerPosition,
    pub fullscreen: bool,
}

impl WindowRecord {
    pub(crate) fn closed(window_id: WindowId, app_id: AppId, position: PointerPosition) -> Self {
        Self {
            window_id,
            app_id,
            open: false,
            hidden: false,
            displayed: false,
            z_index: 0,
            position,
            fullscreen: false,
        }
    }

    /// Whether the app is open but its window is minimized.
    pub const fn running_in_background(&self) -> bool {
        self.open && self.hidden
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub offset: PointerPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}

#[derive(Debug, Clone, PartialEq)]
/// Whole-desktop session state mutated only by [`crate::reducer::reduce_desktop`].
pub struct DesktopState {
    pub config: ShellConfig,
    pub windows: WindowManager,
    pub context_menu: ContextMenuController,
    pub power: PowerStateMachine,
    pub start_menu_open: bool,
    pub viewport: Viewport,
    /// CSS `background` value resolved from the wallpaper preference.
    pub wallpaper_background: Option<String>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(AppRegistry::builtin(), ShellConfig::default())
    }
}

impl DesktopState {
    pub fn new(registry: &AppRegistry, config: ShellConfig) -> Self {
        Self {
            config,
            windows: WindowManager::new(registry, &config),
            context_menu: ContextMenuController::new(config.context_menu_size, config.menu_margin_px),
            power: PowerStateMachine::new(config.power),
            start_menu_open: false,
            viewport: Viewport::default(),
            wallpaper_background: None,
        }
    }

    /// Whether the current viewport uses the mobile layout.
    pub fn is_mobile(&self) -> bool {
        self.config.is_mobile_width(self.viewport.width)
    }
}
