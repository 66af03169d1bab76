//! Window manager core and Leptos desktop shell.
//!
//! [`reduce_desktop`] is the only mutation entry point for window and taskbar state; the
//! [`DesktopProvider`] funnels every UI event through it.

pub mod apps;
pub mod components;
pub mod config;
pub mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod taskbar;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::DesktopConfig;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use taskbar::{TaskbarActivation, TaskbarEntry, TaskbarState};
