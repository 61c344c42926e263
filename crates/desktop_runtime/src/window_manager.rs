//! Window manager: stacking, focus, taskbar entries, drag and viewport-driven fullscreen.
//!
//! Records are keyed by [`WindowId`] and created lazily the first time a known surface is
//! opened (or closed). The surface index is built once from the [`AppRegistry`].

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{
    apps::AppRegistry,
    config::ShellConfig,
    model::{AppId, DragSession, PointerPosition, WindowId, WindowRecord},
    recent::RecentList,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Lookups that do not resolve to a catalog surface.
pub enum WindowError {
    #[error("unknown window `{0}`")]
    UnknownWindow(WindowId),
    #[error("unknown app `{0}`")]
    UnknownApp(AppId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One taskbar button per open window, in insertion order.
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub app_id: AppId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Dock recent-section row.
pub struct RecentEntry {
    pub app_id: AppId,
    pub window_id: Option<WindowId>,
    pub running_in_background: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SurfaceInfo {
    app_id: AppId,
    label: String,
    default_position: PointerPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowManager {
    surfaces: BTreeMap<WindowId, SurfaceInfo>,
    records: BTreeMap<WindowId, WindowRecord>,
    recent: RecentList<AppId>,
    taskbar: Vec<TaskbarEntry>,
    z_counter: u32,
    active: Option<WindowId>,
    mobile_breakpoint_px: i32,
}

impl WindowManager {
    pub fn new(registry: &AppRegistry, config: &ShellConfig) -> Self {
        let surfaces = registry
            .apps()
            .iter()
            .map(|app| {
                (
                    app.window_id.clone(),
                    SurfaceInfo {
                        app_id: app.app_id.clone(),
                        label: app.display_name.clone(),
                        default_position: app.default_position,
                    },
                )
            })
            .collect();
        Self {
            surfaces,
            records: BTreeMap::new(),
            recent: RecentList::new(config.recent_capacity),
            taskbar: Vec::new(),
            z_counter: config.z_index_base,
            active: None,
            mobile_breakpoint_px: config.mobile_breakpoint_px,
        }
    }

    fn surface(&self, window_id: &WindowId) -> Result<&SurfaceInfo, WindowError> {
        self.surfaces
            .get(window_id)
            .ok_or_else(|| WindowError::UnknownWindow(window_id.clone()))
    }

    fn ensure_record(&mut self, window_id: &WindowId) -> Result<&mut WindowRecord, WindowError> {
        let surface = self.surface(window_id)?.clone();
        Ok(self
            .records
            .entry(window_id.clone())
            .or_insert_with(|| {
                WindowRecord::closed(window_id.clone(), surface.app_id, surface.default_position)
            }))
    }

    /// Shows `window_id`, pushes its app to the recent list, raises it and ensures one taskbar
    /// entry. Opening an already open window refreshes recency and focus only.
    pub fn open(&mut self, window_id: &WindowId, viewport_width: i32) -> Result<(), WindowError> {
        let mobile = viewport_width <= self.mobile_breakpoint_px;
        let record = self.ensure_record(window_id)?;
        record.open = true;
        record.hidden = false;
        record.displayed = true;
        if mobile {
            record.fullscreen = true;
        }
        let app_id = record.app_id.clone();

        self.recent.push(app_id.clone());
        self.raise(window_id);
        if !self.taskbar.iter().any(|entry| &entry.window_id == window_id) {
            let label = self.surface(window_id)?.label.clone();
            self.taskbar.push(TaskbarEntry {
                window_id: window_id.clone(),
                app_id,
                label,
            });
        }
        Ok(())
    }

    /// Raises `window_id` above every other window. Windows that are not displayed are left
    /// untouched.
    pub fn focus(&mut self, window_id: &WindowId) -> Result<(), WindowError> {
        self.surface(window_id)?;
        if self.records.get(window_id).is_some_and(|r| r.displayed) {
            self.raise(window_id);
        }
        Ok(())
    }

    fn raise(&mut self, window_id: &WindowId) {
        if let Some(record) = self.records.get_mut(window_id) {
            self.z_counter += 1;
            record.z_index = self.z_counter;
            self.active = Some(window_id.clone());
        }
    }

    fn deactivate(&mut self, window_id: &WindowId) {
        if self.active.as_ref() == Some(window_id) {
            self.active = None;
        }
    }

    /// Hides an open window while keeping it on the taskbar.
    pub fn minimize(&mut self, window_id: &WindowId) -> Result<(), WindowError> {
        self.surface(window_id)?;
        let Some(record) = self.records.get_mut(window_id).filter(|r| r.open) else {
            return Ok(());
        };
        record.displayed = false;
        record.hidden = true;
        let app_id = record.app_id.clone();
        self.recent.push(app_id);
        self.deactivate(window_id);
        Ok(())
    }

    /// Closes a window, dropping its taskbar entry and recent-list slot.
    pub fn close(&mut self, window_id: &WindowId) -> Result<(), WindowError> {
        let record = self.ensure_record(window_id)?;
        record.displayed = false;
        record.open = false;
        record.hidden = false;
        let app_id = record.app_id.clone();
        self.recent.remove(&app_id);
        self.taskbar.retain(|entry| &entry.window_id != window_id);
        self.deactivate(window_id);
        Ok(())
    }

    /// Taskbar click: reopen a window that is not on screen, otherwise bring it forward.
    pub fn activate_from_taskbar(
        &mut self,
        window_id: &WindowId,
        viewport_width: i32,
    ) -> Result<(), WindowError> {
        let displayed = self.records.get(window_id).is_some_and(|r| r.displayed);
        if displayed {
            self.focus(window_id)
        } else {
            self.open(window_id, viewport_width)
        }
    }

    /// Starts dragging a window by its title bar. Fullscreen windows do not move.
    pub fn start_drag(
        &mut self,
        window_id: &WindowId,
        pointer: PointerPosition,
    ) -> Result<Option<DragSession>, WindowError> {
        self.surface(window_id)?;
        let Some(record) = self.records.get(window_id) else {
            return Ok(None);
        };
        if record.fullscreen || !record.displayed {
            return Ok(None);
        }
        let offset = PointerPosition::new(pointer.x - record.position.x, pointer.y - record.position.y);
        self.raise(window_id);
        Ok(Some(DragSession {
            window_id: window_id.clone(),
            offset,
        }))
    }

    /// Moves the dragged window so the grab point stays under the pointer.
    pub fn update_drag(&mut self, session: &DragSession, pointer: PointerPosition) {
        if let Some(record) = self.records.get_mut(&session.window_id) {
            record.position =
                PointerPosition::new(pointer.x - session.offset.x, pointer.y - session.offset.y);
        }
    }

    pub fn toggle_fullscreen(&mut self, window_id: &WindowId) -> Result<(), WindowError> {
        let record = self.ensure_record(window_id)?;
        record.fullscreen = !record.fullscreen;
        Ok(())
    }

    /// Forces every displayed window into (or out of) fullscreen for the viewport width.
    pub fn apply_viewport_mode(&mut self, viewport_width: i32) {
        let mobile = viewport_width <= self.mobile_breakpoint_px;
        for record in self.records.values_mut().filter(|r| r.displayed) {
            record.fullscreen = mobile;
        }
    }

    /// Standby: takes every window off screen without touching open/hidden flags.
    pub fn hide_all(&mut self) {
        for record in self.records.values_mut() {
            record.displayed = false;
        }
        self.active = None;
    }

    /// Reboot: closes everything and empties the taskbar and recent list. The z counter keeps
    /// counting.
    pub fn reset(&mut self) {
        for record in self.records.values_mut() {
            record.open = false;
            record.hidden = false;
            record.displayed = false;
        }
        self.recent.clear();
        self.taskbar.clear();
        self.active = None;
    }

    pub fn record(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.records.get(window_id)
    }

    pub fn records(&self) -> impl Iterator<Item = &WindowRecord> {
        self.records.values()
    }

    pub fn window_for_app(&self, app_id: &AppId) -> Option<WindowId> {
        self.surfaces
            .iter()
            .find(|(_, surface)| &surface.app_id == app_id)
            .map(|(window_id, _)| window_id.clone())
    }

    pub fn app_for_window(&self, window_id: &WindowId) -> Option<&AppId> {
        self.surfaces.get(window_id).map(|surface| &surface.app_id)
    }

    pub fn is_known_window(&self, window_id: &WindowId) -> bool {
        self.surfaces.contains_key(window_id)
    }

    pub fn is_open(&self, window_id: &WindowId) -> bool {
        self.records.get(window_id).is_some_and(|r| r.open)
    }

    pub fn is_active(&self, window_id: &WindowId) -> bool {
        self.active.as_ref() == Some(window_id)
    }

    pub fn active_window(&self) -> Option<&WindowId> {
        self.active.as_ref()
    }

    pub fn taskbar_entries(&self) -> &[TaskbarEntry] {
        &self.taskbar
    }

    pub fn recent_apps(&self) -> &[AppId] {
        self.recent.entries()
    }

    /// Dock recent rows, most recent first.
    pub fn recent_entries(&self) -> Vec<RecentEntry> {
        self.recent
            .entries()
            .iter()
            .map(|app_id| {
                let window_id = self.window_for_app(app_id);
                let running_in_background = window_id
                    .as_ref()
                    .and_then(|id| self.records.get(id))
                    .is_some_and(WindowRecord::running_in_background);
                RecentEntry {
                    app_id: app_id.clone(),
                    window_id,
                    running_in_background,
                }
            })
            .collect()
    }

    /// Current top of the focus counter.
    pub fn z_counter(&self) -> u32 {
        self.z_counter
    }
}
