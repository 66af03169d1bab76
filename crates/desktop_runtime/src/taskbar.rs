//! Taskbar entries mirroring the live window set.
//!
//! The taskbar keeps its own id index instead of windows holding a pointer to their entry, so a
//! window never needs to know where it is rendered in the taskbar.

use std::collections::HashMap;

use crate::model::{WindowId, WindowRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub label: String,
    pub highlighted: bool,
}

/// Entries in creation order plus a `WindowId -> slot` index for O(1) lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskbarState {
    entries: Vec<TaskbarEntry>,
    index: HashMap<WindowId, usize>,
}

impl TaskbarState {
    /// Appends an entry. Re-adding an id that already has an entry only refreshes its label.
    pub fn add_entry(&mut self, window_id: WindowId, label: impl Into<String>) {
        let label = label.into();
        if let Some(&slot) = self.index.get(&window_id) {
            self.entries[slot].label = label;
            return;
        }
        self.index.insert(window_id, self.entries.len());
        self.entries.push(TaskbarEntry {
            window_id,
            label,
            highlighted: false,
        });
    }

    pub fn set_highlight(&mut self, window_id: WindowId, active: bool) {
        if let Some(&slot) = self.index.get(&window_id) {
            self.entries[slot].highlighted = active;
        }
    }

    pub fn remove_entry(&mut self, window_id: WindowId) {
        let Some(slot) = self.index.remove(&window_id) else {
            return;
        };
        self.entries.remove(slot);
        for entry in &self.entries[slot..] {
            if let Some(position) = self.index.get_mut(&entry.window_id) {
                *position -= 1;
            }
        }
    }

    pub fn entry(&self, window_id: WindowId) -> Option<&TaskbarEntry> {
        self.index.get(&window_id).map(|&slot| &self.entries[slot])
    }

    pub fn entries(&self) -> &[TaskbarEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What a click on a window's taskbar entry should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarActivation {
    /// Window is minimized: make it visible and focus it.
    Restore,
    /// Window is visible and active: minimize it.
    Minimize,
    /// Window is visible but behind another: focus it.
    Focus,
}

pub fn activation_for(window: &WindowRecord) -> TaskbarActivation {
    if !window.is_visible() {
        TaskbarActivation::Restore
    } else if window.is_active() {
        TaskbarActivation::Minimize
    } else {
        TaskbarActivation::Focus
    }
}
