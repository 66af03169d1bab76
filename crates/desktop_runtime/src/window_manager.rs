//! Window-manager transition helpers used by the desktop reducer.
//!
//! Every helper either applies its change completely or returns `false`/`None` with the state
//! untouched; the reducer turns that into [`crate::reducer::ReducerError`].

use crate::model::{
    DesktopState, FocusState, OpenWindowRequest, Viewport, WindowId, WindowRecord, WindowRect,
    WindowVisibility,
};

/// Pins `value` into `0..=max` using `max(0, min(value, max))`.
///
/// When the window is larger than the work area `max` is negative and the result is `0`.
pub fn clamp_axis(value: i32, max: i32) -> i32 {
    value.min(max).max(0)
}

/// Clamps a window origin so it stays inside the viewport and above the taskbar band.
pub fn clamp_position(rect: WindowRect, viewport: Viewport, taskbar_height: i32) -> WindowRect {
    WindowRect {
        x: clamp_axis(rect.x, viewport.width.saturating_sub(rect.w)),
        y: clamp_axis(
            rect.y,
            viewport
                .height
                .saturating_sub(taskbar_height)
                .saturating_sub(rect.h),
        ),
        ..rect
    }
}

/// Centers a `w x h` window in the work area, then clamps it like a drag would.
pub fn centered_rect(w: i32, h: i32, viewport: Viewport, taskbar_height: i32) -> WindowRect {
    let rect = WindowRect {
        x: viewport.width.saturating_sub(w) / 2,
        y: viewport
            .height
            .saturating_sub(taskbar_height)
            .saturating_sub(h)
            / 2,
        w,
        h,
    };
    clamp_position(rect, viewport, taskbar_height)
}

fn next_z(state: &mut DesktopState) -> u64 {
    state.z_counter += 1;
    state.z_counter
}

/// Creates a window plus its taskbar entry and gives it focus.
pub fn create_window(state: &mut DesktopState, request: OpenWindowRequest) -> WindowId {
    let window_id = WindowId(state.next_window_id);
    state.next_window_id += 1;

    let rect = centered_rect(
        request.width,
        request.height,
        state.viewport,
        state.config.taskbar_height,
    );
    let z_index = next_z(state);
    for window in &mut state.windows {
        window.focus = FocusState::Inactive;
    }
    state.windows.push(WindowRecord {
        id: window_id,
        app_id: request.app_id,
        title: request.title.clone(),
        rect,
        z_index,
        visibility: WindowVisibility::Visible,
        focus: FocusState::Active,
        maximized: false,
    });
    state.taskbar.add_entry(window_id, request.title);
    sync_taskbar_highlights(state);
    window_id
}

/// Makes `window_id` the single active window and raises it above every other window.
///
/// Visibility is left alone; restoring a minimized window is the caller's job.
pub fn focus_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    if state.window(window_id).is_none() {
        return false;
    }
    let z_index = next_z(state);
    for window in &mut state.windows {
        if window.id == window_id {
            window.focus = FocusState::Active;
            window.z_index = z_index;
        } else {
            window.focus = FocusState::Inactive;
        }
    }
    sync_taskbar_highlights(state);
    true
}

pub fn minimize_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    window.visibility = WindowVisibility::Minimized;
    sync_taskbar_highlights(state);
    true
}

pub fn restore_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    window.visibility = WindowVisibility::Visible;
    focus_window(state, window_id)
}

/// Flips the maximized flag. Stored geometry is kept so un-maximizing restores it exactly.
pub fn toggle_maximize(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    window.maximized = !window.maximized;
    true
}

/// Removes the window and its taskbar entry together. No other window is focused in its place.
pub fn close_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(index) = state.windows.iter().position(|w| w.id == window_id) else {
        return false;
    };
    state.windows.remove(index);
    state.taskbar.remove_entry(window_id);
    true
}

/// Moves a window to `(x, y)` clamped into the work area. Maximized windows stay put.
///
/// Returns the resulting rect, or `None` if the window does not exist.
pub fn move_window_to(
    state: &mut DesktopState,
    window_id: WindowId,
    x: i32,
    y: i32,
) -> Option<WindowRect> {
    let viewport = state.viewport;
    let taskbar_height = state.config.taskbar_height;
    let window = state.window_mut(window_id)?;
    if !window.maximized {
        window.rect = clamp_position(WindowRect { x, y, ..window.rect }, viewport, taskbar_height);
    }
    Some(window.rect)
}

/// Offsets a window by `(dx, dy)`, clamped into the work area.
pub fn drag_window_by(
    state: &mut DesktopState,
    window_id: WindowId,
    dx: i32,
    dy: i32,
) -> Option<WindowRect> {
    let target = state.window(window_id)?.rect.offset(dx, dy);
    move_window_to(state, window_id, target.x, target.y)
}

/// Recomputes every taskbar highlight as `visible && active`.
pub fn sync_taskbar_highlights(state: &mut DesktopState) {
    let DesktopState {
        windows, taskbar, ..
    } = state;
    for window in windows.iter() {
        taskbar.set_highlight(window.id, window.is_visible() && window.is_active());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ApplicationId;
    use pretty_assertions::assert_eq;

    fn request(title: &str, width: i32, height: i32) -> OpenWindowRequest {
        OpenWindowRequest::new(
            ApplicationId::trusted("system.notepad"),
            title,
            width,
            height,
        )
    }

    fn desktop(width: i32, height: i32) -> DesktopState {
        let mut state = DesktopState::default();
        state.viewport = Viewport { width, height };
        state
    }

    #[test]
    fn clamp_axis_pins_instead_of_panicking_when_window_is_oversized() {
        assert_eq!(clamp_axis(40, 100), 40);
        assert_eq!(clamp_axis(140, 100), 100);
        assert_eq!(clamp_axis(-5, 100), 0);
        assert_eq!(clamp_axis(30, -200), 0);
    }

    #[test]
    fn create_centers_in_work_area_above_taskbar() {
        let mut state = desktop(1000, 800);
        let id = create_window(&mut state, request("Notepad", 600, 400));

        let window = state.window(id).expect("window");
        assert_eq!(
            window.rect,
            WindowRect {
                x: 200,
                y: 175,
                w: 600,
                h: 400
            }
        );
        assert_eq!(window.z_index, 101);
        assert!(window.is_active());
        assert_eq!(state.taskbar.entry(id).map(|e| e.highlighted), Some(true));
    }

    #[test]
    fn oversized_window_is_created_at_origin() {
        let mut state = desktop(500, 300);
        let id = create_window(&mut state, request("Browser", 900, 600));

        let rect = state.window(id).expect("window").rect;
        assert_eq!((rect.x, rect.y), (0, 0));
    }

    #[test]
    fn new_window_takes_focus_from_previous_one() {
        let mut state = desktop(1280, 800);
        let first = create_window(&mut state, request("A", 300, 200));
        let second = create_window(&mut state, request("B", 300, 200));

        assert!(!state.window(first).expect("first").is_active());
        assert!(state.window(second).expect("second").is_active());
        assert_eq!(state.taskbar.entry(first).map(|e| e.highlighted), Some(false));
    }

    #[test]
    fn focusing_active_window_only_raises_it() {
        let mut state = desktop(1280, 800);
        let id = create_window(&mut state, request("A", 300, 200));
        let before = state.window(id).expect("window").z_index;

        assert!(focus_window(&mut state, id));

        let window = state.window(id).expect("window");
        assert!(window.is_active());
        assert_eq!(window.z_index, before + 1);
    }

    #[test]
    fn focus_does_not_restore_minimized_window() {
        let mut state = desktop(1280, 800);
        let id = create_window(&mut state, request("A", 300, 200));
        minimize_window(&mut state, id);

        focus_window(&mut state, id);

        let window = state.window(id).expect("window");
        assert_eq!(window.visibility, WindowVisibility::Minimized);
        assert!(window.is_active());
        assert_eq!(state.taskbar.entry(id).map(|e| e.highlighted), Some(false));
    }

    #[test]
    fn minimize_keeps_focus_but_drops_highlight() {
        let mut state = desktop(1280, 800);
        let id = create_window(&mut state, request("A", 300, 200));

        minimize_window(&mut state, id);

        assert!(state.window(id).expect("window").is_active());
        assert_eq!(state.taskbar.entry(id).map(|e| e.highlighted), Some(false));
    }

    #[test]
    fn maximize_toggle_preserves_geometry() {
        let mut state = desktop(1280, 800);
        let id = create_window(&mut state, request("A", 300, 200));
        let rect = state.window(id).expect("window").rect;

        toggle_maximize(&mut state, id);
        assert!(state.window(id).expect("window").maximized);
        assert_eq!(drag_window_by(&mut state, id, 50, 50), Some(rect));

        toggle_maximize(&mut state, id);
        let window = state.window(id).expect("window");
        assert!(!window.maximized);
        assert_eq!(window.rect, rect);
    }

    #[test]
    fn drag_clamps_each_axis_independently() {
        let mut state = desktop(1000, 800);
        let id = create_window(&mut state, request("A", 600, 400));

        let moved = drag_window_by(&mut state, id, 10, -20).expect("window");
        assert_eq!((moved.x, moved.y), (210, 155));

        let moved = drag_window_by(&mut state, id, 5000, 5000).expect("window");
        assert_eq!((moved.x, moved.y), (400, 350));

        let moved = drag_window_by(&mut state, id, -5000, -5000).expect("window");
        assert_eq!((moved.x, moved.y), (0, 0));
    }

    #[test]
    fn close_removes_taskbar_entry_and_leaves_others_unfocused() {
        let mut state = desktop(1280, 800);
        let first = create_window(&mut state, request("A", 300, 200));
        let second = create_window(&mut state, request("B", 300, 200));

        assert!(close_window(&mut state, second));

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.taskbar.len(), 1);
        assert!(state.taskbar.entry(second).is_none());
        assert!(!state.window(first).expect("first").is_active());
        assert!(!close_window(&mut state, second));
    }

    #[test]
    fn ids_are_never_reused_after_close() {
        let mut state = desktop(1280, 800);
        let first = create_window(&mut state, request("A", 300, 200));
        close_window(&mut state, first);
        let second = create_window(&mut state, request("B", 300, 200));

        assert_eq!(first, WindowId(1));
        assert_eq!(second, WindowId(2));
    }
}
