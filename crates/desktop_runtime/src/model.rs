pub use desktop_app_contract::ApplicationId;
use serde::{Deserialize, Serialize};

use crate::{config::DesktopConfig, taskbar::TaskbarState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }

    pub fn origin(self) -> PointerPosition {
        PointerPosition {
            x: self.x,
            y: self.y,
        }
    }
}

/// Host viewport size, including the taskbar band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowVisibility {
    Visible,
    Minimized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusState {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: ApplicationId,
    pub title: String,
    pub rect: WindowRect,
    pub z_index: u64,
    pub visibility: WindowVisibility,
    pub focus: FocusState,
    /// Visual-only override; `rect` keeps the restored geometry.
    pub maximized: bool,
}

impl WindowRecord {
    pub fn is_visible(&self) -> bool {
        self.visibility == WindowVisibility::Visible
    }

    pub fn is_active(&self) -> bool {
        self.focus == FocusState::Active
    }
}

/// One desktop instance: every window, the taskbar mirroring them, and the counters that
/// number and stack them.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub config: DesktopConfig,
    pub viewport: Viewport,
    pub next_window_id: u64,
    pub z_counter: u64,
    /// Creation order.
    pub windows: Vec<WindowRecord>,
    pub taskbar: TaskbarState,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl DesktopState {
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            viewport: config.fallback_viewport,
            next_window_id: 1,
            z_counter: config.base_z_index,
            windows: Vec::new(),
            taskbar: TaskbarState::default(),
            config,
        }
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn window_mut(&mut self, window_id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == window_id)
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_active()).map(|w| w.id)
    }

    /// Lowest y coordinate the taskbar band starts at.
    pub fn work_area_height(&self) -> i32 {
        self.viewport.height.saturating_sub(self.config.taskbar_height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub app_id: ApplicationId,
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl OpenWindowRequest {
    pub fn new(app_id: ApplicationId, title: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            app_id,
            title: title.into(),
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Part of a titlebar that received a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitlebarTarget {
    Caption,
    /// Minimize / maximize / close cluster; never starts a drag.
    Controls,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    /// Pointer position minus window origin at drag start.
    pub grab_offset: PointerPosition,
}

/// Desktop-wide pointer interaction state. `dragging == None` is the idle state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}

impl InteractionState {
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }
}
