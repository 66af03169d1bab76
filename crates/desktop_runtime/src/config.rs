//! Desktop-wide configuration embedded from `desktop.toml` at build time.

use std::sync::OnceLock;

use leptos::logging;
use serde::{Deserialize, Serialize};

use crate::model::Viewport;

include!(concat!(env!("OUT_DIR"), "/desktop_config_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Layout and timing knobs shared by the window manager and shell UI.
pub struct DesktopConfig {
    /// Height of the bottom band reserved for the taskbar; windows never move into it.
    pub taskbar_height: i32,
    /// Starting value of the z counter. The first window gets `base_z_index + 1`.
    pub base_z_index: u64,
    /// Taskbar clock refresh period.
    pub clock_interval_ms: u64,
    /// Viewport assumed until the host reports a real one.
    pub fallback_viewport: Viewport,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            taskbar_height: 50,
            base_z_index: 100,
            clock_interval_ms: 1000,
            fallback_viewport: Viewport {
                width: 1280,
                height: 800,
            },
        }
    }
}

impl DesktopConfig {
    /// Returns the configuration compiled in from `desktop.toml`.
    ///
    /// Falls back to [`DesktopConfig::default`] when the embedded payload does not decode.
    pub fn builtin() -> &'static DesktopConfig {
        static CONFIG: OnceLock<DesktopConfig> = OnceLock::new();
        CONFIG.get_or_init(|| {
            serde_json::from_str(DESKTOP_CONFIG_JSON).unwrap_or_else(|err| {
                logging::warn!("desktop config decode failed, using defaults: {err}");
                DesktopConfig::default()
            })
        })
    }
}
