//! Embedded browser window content: an address bar driving an `<iframe>`.
//!
//! Frame history is owned by the host page. Back and forward are best effort; cross-origin
//! frames refuse access and the refusal is only logged.

mod address;

use desktop_app_contract::{window_primary_input_dom_id, AppModule, AppMountContext, WindowHandle};
use leptos::ev::KeyboardEvent;
use leptos::*;

pub use address::{normalize_input, resolve_navigation, validate, BrowserError, ParsedUrl};

/// Registry id matching `app.manifest.toml`.
pub const APP_ID: &str = "system.browser";
/// Page loaded when a browser window opens.
pub const HOME_URL: &str = "https://www.wikipedia.org";

/// Quick links shown under the address bar.
pub const SHORTCUTS: [(&str, &str); 3] = [
    ("Wikipedia", "https://www.wikipedia.org"),
    ("ProxySite", "https://www.proxysite.com"),
    ("GitHub Profile", "https://github.com/pranjal-coders"),
];

pub fn app_module() -> AppModule {
    AppModule::new(mount).with_init(initialize)
}

fn mount(context: AppMountContext) -> View {
    view! { <BrowserApp window=context.window /> }.into_view()
}

/// Checks the built-in destinations before the first frame load.
fn initialize(window: WindowHandle) -> Result<(), String> {
    std::iter::once(HOME_URL)
        .chain(SHORTCUTS.iter().map(|(_, url)| *url))
        .try_for_each(|url| {
            validate(url)
                .map(|_| ())
                .map_err(|err| format!("window {}: bad built-in url {url}: {err}", window.window_id))
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryStep {
    Back,
    Forward,
}

fn step_frame_history(frame: &web_sys::HtmlIFrameElement, step: HistoryStep) {
    let result = frame
        .content_window()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("frame has no window"))
        .and_then(|window| window.history())
        .and_then(|history| match step {
            HistoryStep::Back => history.back(),
            HistoryStep::Forward => history.forward(),
        });
    if let Err(err) = result {
        logging::log!("Cannot navigate iframe history: {err:?}");
    }
}

#[component]
pub fn BrowserApp(window: WindowHandle) -> impl IntoView {
    let address = create_rw_signal(HOME_URL.to_string());
    let frame_src = create_rw_signal(HOME_URL.to_string());
    let error = create_rw_signal::<Option<String>>(None);
    let frame_ref = create_node_ref::<html::Iframe>();

    let navigate = move || match resolve_navigation(&address.get_untracked()) {
        Ok(Some(url)) => {
            error.set(None);
            address.set(url.clone());
            frame_src.set(url);
        }
        Ok(None) => {}
        Err(err) => error.set(Some(format!("Invalid URL format: {err}"))),
    };
    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            navigate();
        }
    };
    let reload = move |_| {
        if let Some(frame) = frame_ref.get_untracked() {
            frame.set_src(&frame.src());
        }
    };
    let step = move |direction: HistoryStep| {
        if let Some(frame) = frame_ref.get_untracked() {
            step_frame_history(&frame, direction);
        }
    };

    view! {
        <div class="browser-content">
            <div class="browser-toolbar">
                <button
                    type="button"
                    class="browser-back"
                    aria-label="Back"
                    on:click=move |_| step(HistoryStep::Back)
                >
                    "←"
                </button>
                <button
                    type="button"
                    class="browser-forward"
                    aria-label="Forward"
                    on:click=move |_| step(HistoryStep::Forward)
                >
                    "→"
                </button>
                <button type="button" class="browser-reload" aria-label="Reload" on:click=reload>
                    "⟳"
                </button>
                <input
                    type="text"
                    class="browser-url"
                    id=window_primary_input_dom_id(window.window_id)
                    placeholder="Enter URL or search..."
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button type="button" class="browser-go" on:click=move |_| navigate()>
                    "Go"
                </button>
            </div>
            <Show when=move || error.get().is_some() fallback=|| ()>
                <p class="browser-error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
            <div class="browser-shortcuts">
                {SHORTCUTS
                    .iter()
                    .map(|(label, url)| {
                        let url = *url;
                        view! {
                            <a
                                href=url
                                class="browser-shortcut"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    error.set(None);
                                    address.set(url.to_string());
                                    frame_src.set(url.to_string());
                                }
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <iframe
                class="browser-frame"
                title="Embedded page"
                node_ref=frame_ref
                src=move || frame_src.get()
            ></iframe>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desktop_app_contract::ApplicationId;

    fn handle() -> WindowHandle {
        WindowHandle {
            window_id: 3,
            app_id: ApplicationId::trusted(APP_ID),
            title: "🌐 Browser".to_string(),
        }
    }

    #[test]
    fn built_in_destinations_validate() {
        assert_eq!(initialize(handle()), Ok(()));
    }

    #[test]
    fn module_runs_initializer() {
        assert_eq!(app_module().initialize(handle()), Ok(()));
    }
}
