//! App registry: manifest metadata compiled in by `build.rs` plus the content modules that fill
//! each window body.

use std::sync::OnceLock;

use desktop_app_contract::{AppModule, AppMountContext, AppRegistration, ApplicationId};
use leptos::*;

use crate::model::OpenWindowRequest;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

/// Registry metadata for one launchable app.
pub type AppDescriptor = AppRegistration;

/// App id of the built-in about panel, which ships with the runtime rather than its own crate.
pub const ABOUT_APP_ID: &str = "system.about";

const AUTHOR_PROFILE_URL: &str = "https://github.com/pranjal-coders";

/// Returns every registered app in desktop icon order.
pub fn app_registry() -> &'static [AppDescriptor] {
    static REGISTRY: OnceLock<Vec<AppDescriptor>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        serde_json::from_str(APP_MANIFEST_CATALOG_JSON)
            .expect("generated app manifest catalog should parse")
    })
}

pub fn app_descriptor(app_id: &str) -> Option<&'static AppDescriptor> {
    app_registry()
        .iter()
        .find(|entry| entry.app_id.as_str() == app_id)
}

pub fn desktop_icon_apps() -> Vec<&'static AppDescriptor> {
    app_registry()
        .iter()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

/// Builds the open request for a registered app, or `None` for unknown ids.
pub fn open_request_for(app_id: &str) -> Option<OpenWindowRequest> {
    let descriptor = app_descriptor(app_id)?;
    Some(OpenWindowRequest::new(
        descriptor.app_id.clone(),
        descriptor.window_title.clone(),
        descriptor.window_defaults.width,
        descriptor.window_defaults.height,
    ))
}

/// Returns the content builder/initializer pair for an app id.
pub fn app_module(app_id: &ApplicationId) -> Option<AppModule> {
    match app_id.as_str() {
        desktop_app_notepad::APP_ID => Some(desktop_app_notepad::app_module()),
        desktop_app_calculator::APP_ID => Some(desktop_app_calculator::app_module()),
        desktop_app_browser::APP_ID => Some(desktop_app_browser::app_module()),
        ABOUT_APP_ID => Some(AppModule::new(mount_about_panel)),
        _ => None,
    }
}

fn mount_about_panel(_: AppMountContext) -> View {
    view! { <AboutPanel /> }.into_view()
}

#[component]
fn AboutPanel() -> impl IntoView {
    view! {
        <div class="app app-about">
            <h1>"Desktop OS Portfolio"</h1>
            <p>"Welcome to my Desktop Operating System portfolio project!"</p>
            <p>"A desktop environment simulator that runs in the browser."</p>
            <p>"Features:"</p>
            <ul class="about-features">
                <li>"📝 Notepad - Text editor with download"</li>
                <li>"🔢 Calculator - Basic calculator with operations"</li>
                <li>"🌐 Browser - Web browser with iframe support"</li>
                <li>"🪟 Window Management - Draggable, focusable windows"</li>
            </ul>
            <div class="about-links">
                <a href=AUTHOR_PROFILE_URL target="_blank" rel="noopener" class="about-link">
                    "Visit My GitHub"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registry_lists_desktop_icons_in_manifest_order() {
        let ids: Vec<&str> = desktop_icon_apps()
            .iter()
            .map(|entry| entry.app_id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "system.notepad",
                "system.calculator",
                "system.browser",
                ABOUT_APP_ID
            ]
        );
    }

    #[test]
    fn every_registered_app_has_a_content_module() {
        for entry in app_registry() {
            assert!(
                app_module(&entry.app_id).is_some(),
                "missing module for {}",
                entry.app_id
            );
        }
    }

    #[test]
    fn catalog_entries_satisfy_contract_rules() {
        for entry in app_registry() {
            assert!(
                desktop_app_contract::is_valid_application_id(entry.app_id.as_str()),
                "bad id {}",
                entry.app_id
            );
            assert!(entry.window_defaults.is_valid(), "bad size for {}", entry.app_id);
        }
    }

    #[test]
    fn open_request_uses_manifest_title_and_size() {
        let request = open_request_for("system.browser").expect("browser registered");
        assert_eq!(request.title, "🌐 Browser");
        assert_eq!((request.width, request.height), (900, 600));

        let about = open_request_for(ABOUT_APP_ID).expect("about registered");
        assert_eq!(about.title, "👤 About Me");
        assert_eq!((about.width, about.height), (600, 400));
    }

    #[test]
    fn unknown_ids_resolve_to_nothing() {
        assert!(app_descriptor("system.paint").is_none());
        assert!(open_request_for("not an id").is_none());
        assert!(app_module(&ApplicationId::trusted("system.paint")).is_none());
    }
}
