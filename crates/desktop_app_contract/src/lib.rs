//! Shared contract types between the desktop window manager runtime and hosted apps.
//!
//! An app is described by two halves: manifest metadata ([`AppRegistration`]) that the window
//! manager uses to size and title the window, and an [`AppModule`] holding the content builder
//! and optional content initializer that populate the window body.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::View;
use serde::{Deserialize, Serialize};

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

/// Stable identifier for an app package/module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` conforms to the `segment.segment...` policy.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected namespaced dotted segments"
            ))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time/runtime trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ApplicationId {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ApplicationId> for String {
    fn from(id: ApplicationId) -> Self {
        id.0
    }
}

/// Returns `true` when `raw` is a lowercase, dotted, at-least-two-segment identifier.
pub fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 120 {
        return false;
    }

    let mut count = 0usize;
    for part in raw.split('.') {
        count += 1;
        if part.is_empty() || part.len() > 32 {
            return false;
        }
        let bytes = part.as_bytes();
        if !bytes[0].is_ascii_lowercase() {
            return false;
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        {
            return false;
        }
        if part.ends_with('-') {
            return false;
        }
    }

    count >= 2
}

/// DOM id apps put on their primary text input so the runtime can focus it on window focus.
pub fn window_primary_input_dom_id(window_id: WindowRuntimeId) -> String {
    format!("desktop-window-input-{window_id}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Preferred window size declared by an app manifest.
pub struct WindowDefaults {
    /// Preferred window width in CSS pixels.
    pub width: i32,
    /// Preferred window height in CSS pixels.
    pub height: i32,
}

impl WindowDefaults {
    /// Returns `true` when both dimensions are strictly positive.
    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Manifest-backed registration metadata for a runtime app entry.
pub struct AppRegistration {
    /// Canonical app id.
    pub app_id: ApplicationId,
    /// Human-readable display name.
    pub display_name: String,
    /// Title shown in the window titlebar and taskbar entry.
    pub window_title: String,
    /// Short glyph rendered on desktop icons.
    pub icon: String,
    /// Label rendered under the desktop icon.
    pub desktop_icon_label: String,
    /// Desktop icon visibility flag.
    pub show_on_desktop: bool,
    /// Preferred window size.
    pub window_defaults: WindowDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Read-only view of the window an app instance is hosted in.
pub struct WindowHandle {
    /// Stable runtime window id.
    pub window_id: WindowRuntimeId,
    /// App that owns the window.
    pub app_id: ApplicationId,
    /// Window title at creation time.
    pub title: String,
}

#[derive(Debug, Clone)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Window hosting the mounted content.
    pub window: WindowHandle,
}

/// Content builder used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

/// Content initializer invoked once after the content builder.
pub type AppInitFn = fn(WindowHandle) -> Result<(), String>;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
    init_fn: Option<AppInitFn>,
}

impl AppModule {
    /// Creates a module from a content builder.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self {
            mount_fn,
            init_fn: None,
        }
    }

    /// Attaches a content initializer.
    pub const fn with_init(self, init_fn: AppInitFn) -> Self {
        Self {
            mount_fn: self.mount_fn,
            init_fn: Some(init_fn),
        }
    }

    /// Builds the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }

    /// Runs the content initializer, if any.
    ///
    /// # Errors
    ///
    /// Returns the initializer's error message unchanged. The runtime only reports it; the
    /// window stays alive either way.
    pub fn initialize(self, window: WindowHandle) -> Result<(), String> {
        match self.init_fn {
            Some(init) => init(window),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use leptos::IntoView;

    fn empty_view(_: AppMountContext) -> View {
        ().into_view()
    }

    fn failing_init(window: WindowHandle) -> Result<(), String> {
        Err(format!("window {} refused to start", window.window_id))
    }

    fn handle() -> WindowHandle {
        WindowHandle {
            window_id: 7,
            app_id: ApplicationId::trusted("system.notepad"),
            title: "Notepad".to_string(),
        }
    }

    #[test]
    fn application_id_requires_dotted_namespaces() {
        assert!(ApplicationId::new("system.calculator").is_ok());
        assert!(ApplicationId::new("system.browser").is_ok());
        assert!(ApplicationId::new("calculator").is_err());
        assert!(ApplicationId::new("System.calc").is_err());
        assert!(ApplicationId::new("system..calc").is_err());
        assert!(ApplicationId::new("system.calc-").is_err());
        assert!(ApplicationId::new(format!("system.{}", "a".repeat(33))).is_err());
    }

    #[test]
    fn application_id_deserialization_validates() {
        let ok: ApplicationId = serde_json::from_str("\"system.about\"").expect("valid id");
        assert_eq!(ok.as_str(), "system.about");
        assert!(serde_json::from_str::<ApplicationId>("\"About\"").is_err());
    }

    #[test]
    fn window_defaults_reject_non_positive_sizes() {
        assert!(WindowDefaults {
            width: 600,
            height: 400
        }
        .is_valid());
        assert!(!WindowDefaults {
            width: 0,
            height: 400
        }
        .is_valid());
        assert!(!WindowDefaults {
            width: 600,
            height: -1
        }
        .is_valid());
    }

    #[test]
    fn module_without_initializer_initializes_cleanly() {
        let module = AppModule::new(empty_view);
        assert_eq!(module.initialize(handle()), Ok(()));
    }

    #[test]
    fn module_initializer_errors_are_returned_to_the_host() {
        let module = AppModule::new(empty_view).with_init(failing_init);
        assert_eq!(
            module.initialize(handle()),
            Err("window 7 refused to start".to_string())
        );
    }
}
