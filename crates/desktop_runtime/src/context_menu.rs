//! Context menu controller: single active menu, placement clamping and action resolution.

use crate::{
    config::MenuSize,
    model::{AppId, PointerPosition, Viewport, WindowId},
    window_manager::WindowManager,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Surface the menu was requested from.
pub enum ContextMenuKind {
    DesktopIcon,
    DockMain,
    DockRecent,
    Taskbar,
    Window,
}

impl ContextMenuKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DesktopIcon => "desktop-icon",
            Self::DockMain => "dock-main",
            Self::DockRecent => "dock-recent",
            Self::Taskbar => "taskbar",
            Self::Window => "window",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuRequest {
    pub kind: ContextMenuKind,
    pub app_id: AppId,
    pub window_id: Option<WindowId>,
}

impl ContextMenuRequest {
    pub fn new(kind: ContextMenuKind, app_id: AppId, window_id: Option<WindowId>) -> Self {
        Self {
            kind,
            app_id,
            window_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Rendered geometry of the element that asked for a menu.
pub struct TriggerSnapshot {
    pub width: f64,
    pub height: f64,
    /// Whether the topmost element at the trigger's centre is the trigger or inside it.
    pub center_hits_self_or_descendant: bool,
}

impl TriggerSnapshot {
    /// Snapshot for a trigger that is rendered and uncovered.
    pub const fn visible() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            center_hits_self_or_descendant: true,
        }
    }

    /// A menu may only open for a trigger that has a size and is not covered at its centre.
    pub fn allows_menu(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.center_hits_self_or_descendant
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenContextMenu {
    pub request: ContextMenuRequest,
    pub position: PointerPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Entries offered by the menu.
pub enum MenuAction {
    Open,
    Hide,
    Close,
}

impl MenuAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Hide => "Hide",
            Self::Close => "Close",
        }
    }
}

/// Keeps a `size` menu at least `margin` pixels inside `viewport`.
///
/// Each axis is first pulled back from the far edge, then pushed off the near edge, so the near
/// edge wins when the viewport is smaller than the menu.
pub fn clamp_menu_position(
    pointer: PointerPosition,
    size: MenuSize,
    viewport: Viewport,
    margin: i32,
) -> PointerPosition {
    PointerPosition {
        x: pointer.x.min(viewport.width - size.width - margin).max(margin),
        y: pointer.y.min(viewport.height - size.height - margin).max(margin),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuController {
    open: Option<OpenContextMenu>,
    size: MenuSize,
    margin: i32,
}

impl ContextMenuController {
    pub fn new(size: MenuSize, margin: i32) -> Self {
        Self {
            open: None,
            size,
            margin,
        }
    }

    /// Opens (or moves) the menu for `request`. Returns `false` and leaves state untouched when
    /// the trigger is not visible.
    pub fn request_show(
        &mut self,
        pointer: PointerPosition,
        request: ContextMenuRequest,
        snapshot: TriggerSnapshot,
        viewport: Viewport,
    ) -> bool {
        if !snapshot.allows_menu() {
            return false;
        }
        self.open = Some(OpenContextMenu {
            request,
            position: clamp_menu_position(pointer, self.size, viewport, self.margin),
        });
        true
    }

    /// Closes the menu, returning the request it was showing.
    pub fn dismiss(&mut self) -> Option<ContextMenuRequest> {
        self.open.take().map(|menu| menu.request)
    }

    pub fn current(&self) -> Option<&OpenContextMenu> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

/// Resolves the window a request targets: the request's own window when the manager knows it,
/// otherwise the window registered for its app.
pub fn resolve_target_window(
    request: &ContextMenuRequest,
    windows: &WindowManager,
) -> Option<WindowId> {
    request
        .window_id
        .as_ref()
        .filter(|window_id| windows.is_known_window(window_id))
        .cloned()
        .or_else(|| windows.window_for_app(&request.app_id))
}

/// Actions listed for `request`: opening is always offered, hide and close only for open
/// windows.
pub fn available_actions(request: &ContextMenuRequest, windows: &WindowManager) -> Vec<MenuAction> {
    let open = resolve_target_window(request, windows).is_some_and(|id| windows.is_open(&id));
    if open {
        vec![MenuAction::Open, MenuAction::Hide, MenuAction::Close]
    } else {
        vec![MenuAction::Open]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{apps::AppRegistry, config::ShellConfig};

    const SIZE: MenuSize = MenuSize {
        width: 160,
        height: 112,
    };
    const VIEWPORT: Viewport = Viewport {
        width: 1024,
        height: 768,
    };

    fn request(kind: ContextMenuKind, app: &str, window: Option<&str>) -> ContextMenuRequest {
        ContextMenuRequest::new(kind, AppId::trusted(app), window.map(WindowId::trusted))
    }

    #[test]
    fn clamp_keeps_menu_inside_viewport_margin() {
        for (x, y) in [(0, 0), (1020, 760), (500, 400), (-30, 900)] {
            let pos = clamp_menu_position(PointerPosition::new(x, y), SIZE, VIEWPORT, 5);
            assert!(pos.x >= 5 && pos.y >= 5);
            assert!(pos.x + SIZE.width <= VIEWPORT.width - 5);
            assert!(pos.y + SIZE.height <= VIEWPORT.height - 5);
        }
        assert_eq!(
            clamp_menu_position(PointerPosition::new(1020, 760), SIZE, VIEWPORT, 5),
            PointerPosition::new(859, 651)
        );
    }

    #[test]
    fn clamp_prefers_near_edge_on_tiny_viewport() {
        let tiny = Viewport {
            width: 100,
            height: 50,
        };
        assert_eq!(
            clamp_menu_position(PointerPosition::new(80, 40), SIZE, tiny, 5),
            PointerPosition::new(5, 5)
        );
    }

    #[test]
    fn show_requires_visible_uncovered_trigger() {
        let mut menu = ContextMenuController::new(SIZE, 5);
        let covered = TriggerSnapshot {
            width: 48.0,
            height: 48.0,
            center_hits_self_or_descendant: false,
        };
        let collapsed = TriggerSnapshot {
            width: 0.0,
            height: 48.0,
            center_hits_self_or_descendant: true,
        };
        let req = request(ContextMenuKind::DesktopIcon, "terminal", Some("win-terminal"));

        assert!(!menu.request_show(PointerPosition::new(10, 10), req.clone(), covered, VIEWPORT));
        assert!(!menu.request_show(PointerPosition::new(10, 10), req.clone(), collapsed, VIEWPORT));
        assert!(!menu.is_open());

        assert!(menu.request_show(
            PointerPosition::new(10, 10),
            req.clone(),
            TriggerSnapshot::visible(),
            VIEWPORT
        ));
        assert_eq!(menu.current().map(|m| &m.request), Some(&req));
        assert_eq!(menu.dismiss(), Some(req));
        assert_eq!(menu.dismiss(), None);
    }

    #[test]
    fn second_show_replaces_active_menu() {
        let mut menu = ContextMenuController::new(SIZE, 5);
        let first = request(ContextMenuKind::Taskbar, "files", Some("win-files"));
        let second = request(ContextMenuKind::Window, "notes", Some("win-notes"));
        menu.request_show(PointerPosition::new(1, 1), first, TriggerSnapshot::visible(), VIEWPORT);
        menu.request_show(PointerPosition::new(2, 2), second.clone(), TriggerSnapshot::visible(), VIEWPORT);
        assert_eq!(menu.current().map(|m| m.request.clone()), Some(second));
    }

    #[test]
    fn target_resolution_falls_back_to_app_window() {
        let mut windows = WindowManager::new(AppRegistry::builtin(), &ShellConfig::default());
        let by_window = request(ContextMenuKind::DockRecent, "files", Some("win-files"));
        let by_app = request(ContextMenuKind::DockRecent, "files", None);
        let stale = request(ContextMenuKind::DockRecent, "files", Some("win-gone"));
        let unknown = request(ContextMenuKind::DockRecent, "paint", None);

        let files = WindowId::trusted("win-files");
        assert_eq!(resolve_target_window(&by_window, &windows), Some(files.clone()));
        assert_eq!(resolve_target_window(&by_app, &windows), Some(files.clone()));
        assert_eq!(resolve_target_window(&stale, &windows), Some(files.clone()));
        assert_eq!(resolve_target_window(&unknown, &windows), None);

        assert_eq!(available_actions(&by_app, &windows), vec![MenuAction::Open]);
        windows.open(&files, 1280).expect("open");
        assert_eq!(
            available_actions(&by_app, &windows),
            vec![MenuAction::Open, MenuAction::Hide, MenuAction::Close]
        );
    }
}
