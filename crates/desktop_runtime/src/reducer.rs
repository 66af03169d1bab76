//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::WindowDefaults;
use thiserror::Error;

use crate::{
    apps,
    model::{
        DesktopState, DragSession, InteractionState, OpenWindowRequest, PointerPosition,
        TitlebarTarget, Viewport, WindowId,
    },
    taskbar::{activation_for, TaskbarActivation},
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window for a registry app id. Unknown ids are ignored.
    ActivateApp {
        /// Raw app id, usually from a desktop icon.
        app_id: String,
    },
    /// Open a new window using the supplied request.
    OpenWindow(OpenWindowRequest),
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Move a window by a relative offset.
    DragWindow {
        /// Window to move.
        window_id: WindowId,
        /// Horizontal offset in pixels.
        dx: i32,
        /// Vertical offset in pixels.
        dy: i32,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Flip a window between maximized and its stored geometry.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Taskbar entry click: restore, minimize, or focus depending on window state.
    ActivateTaskbarEntry {
        /// Window associated with the taskbar entry.
        window_id: WindowId,
    },
    /// Pointer-down on a window titlebar.
    BeginMove {
        /// Window owning the titlebar.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
        /// Titlebar region under the pointer.
        target: TitlebarTarget,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Record the host viewport size.
    SetViewport {
        /// New viewport size.
        viewport: Viewport,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move focus into the newly focused window's primary input.
    FocusWindowInput(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions (for example, referencing a missing window).
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window {} not found", .window_id.0)]
    WindowNotFound {
        /// Requested window id.
        window_id: WindowId,
    },
    /// An open request asked for a window without positive dimensions.
    #[error("invalid window size {width}x{height}")]
    InvalidWindowSize {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// The host reported a viewport without positive dimensions.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Reported width.
        width: i32,
        /// Reported height.
        height: i32,
    },
}

fn require(found: bool, window_id: WindowId) -> Result<(), ReducerError> {
    if found {
        Ok(())
    } else {
        Err(ReducerError::WindowNotFound { window_id })
    }
}

fn open_window(
    state: &mut DesktopState,
    request: OpenWindowRequest,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let size = WindowDefaults {
        width: request.width,
        height: request.height,
    };
    if !size.is_valid() {
        return Err(ReducerError::InvalidWindowSize {
            width: request.width,
            height: request.height,
        });
    }
    let window_id = window_manager::create_window(state, request);
    Ok(vec![RuntimeEffect::FocusWindowInput(window_id)])
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// This function is the only place window and taskbar state changes. Every action either
/// applies completely or returns an error with `state` untouched.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window that is not
/// present, [`ReducerError::InvalidWindowSize`] for open requests with non-positive sizes, and
/// [`ReducerError::InvalidViewport`] for viewports without positive dimensions.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::ActivateApp { app_id } => {
            if let Some(request) = apps::open_request_for(&app_id) {
                effects = open_window(state, request)?;
            }
        }
        DesktopAction::OpenWindow(request) => {
            effects = open_window(state, request)?;
        }
        DesktopAction::FocusWindow { window_id } => {
            let was_active = state
                .window(window_id)
                .is_some_and(|window| window.is_active() && window.is_visible());
            require(window_manager::focus_window(state, window_id), window_id)?;
            // Re-focusing the active window only raises it; keyboard focus stays put.
            if !was_active {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::DragWindow { window_id, dx, dy } => {
            window_manager::drag_window_by(state, window_id, dx, dy)
                .ok_or(ReducerError::WindowNotFound { window_id })?;
        }
        DesktopAction::MinimizeWindow { window_id } => {
            require(window_manager::minimize_window(state, window_id), window_id)?;
        }
        DesktopAction::ToggleMaximize { window_id } => {
            require(window_manager::toggle_maximize(state, window_id), window_id)?;
        }
        DesktopAction::CloseWindow { window_id } => {
            require(window_manager::close_window(state, window_id), window_id)?;
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.window_id == window_id)
            {
                interaction.dragging = None;
            }
        }
        DesktopAction::ActivateTaskbarEntry { window_id } => {
            let window = state
                .window(window_id)
                .ok_or(ReducerError::WindowNotFound { window_id })?;
            match activation_for(window) {
                TaskbarActivation::Restore => {
                    window_manager::restore_window(state, window_id);
                    effects.push(RuntimeEffect::FocusWindowInput(window_id));
                }
                TaskbarActivation::Minimize => {
                    window_manager::minimize_window(state, window_id);
                }
                TaskbarActivation::Focus => {
                    window_manager::focus_window(state, window_id);
                    effects.push(RuntimeEffect::FocusWindowInput(window_id));
                }
            }
        }
        DesktopAction::BeginMove {
            window_id,
            pointer,
            target,
        } => {
            let window = state
                .window(window_id)
                .ok_or(ReducerError::WindowNotFound { window_id })?;
            if target == TitlebarTarget::Caption && !window.maximized {
                let origin = window.rect.origin();
                interaction.dragging = Some(DragSession {
                    window_id,
                    grab_offset: PointerPosition {
                        x: pointer.x.saturating_sub(origin.x),
                        y: pointer.y.saturating_sub(origin.y),
                    },
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.clone() {
                let moved = window_manager::move_window_to(
                    state,
                    session.window_id,
                    pointer.x.saturating_sub(session.grab_offset.x),
                    pointer.y.saturating_sub(session.grab_offset.y),
                );
                if moved.is_none() {
                    interaction.dragging = None;
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::SetViewport { viewport } => {
            if viewport.width <= 0 || viewport.height <= 0 {
                return Err(ReducerError::InvalidViewport {
                    width: viewport.width,
                    height: viewport.height,
                });
            }
            state.viewport = viewport;
        }
    }

    window_manager::sync_taskbar_highlights(state);
    Ok(effects)
}
