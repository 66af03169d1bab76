//! Host-side runtime helpers for executing reducer effects and querying browser environment state.

#[cfg(target_arch = "wasm32")]
use desktop_app_contract::window_primary_input_dom_id;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    config::DesktopConfig,
    model::{Viewport, WindowId},
    reducer::RuntimeEffect,
};

#[derive(Debug, Clone, Default)]
/// Browser environment queries and effect execution for the desktop runtime.
pub struct DesktopHostContext {
    config: DesktopConfig,
}

impl DesktopHostContext {
    pub fn new(config: DesktopConfig) -> Self {
        Self { config }
    }

    /// Reads the current browser viewport, or the configured fallback outside a browser.
    pub fn viewport(&self) -> Viewport {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let fallback = self.config.fallback_viewport;
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(fallback.width);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(fallback.height);
                return Viewport { width, height };
            }
        }

        self.config.fallback_viewport
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(window_id) => self.focus_window_input(window_id),
        }
    }

    /// Moves keyboard focus into the window's primary input, if the app rendered one.
    ///
    /// Deferred by a zero-delay timeout so a freshly opened window has mounted first.
    pub fn focus_window_input(&self, window_id: WindowId) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let dom_id = window_primary_input_dom_id(window_id.0);
            let callback = Closure::once_into_js(move || {
                let Some(element) = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.get_element_by_id(&dom_id))
                else {
                    return;
                };
                if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                    let _ = element.focus();
                }
            });
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = window_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn native_viewport_falls_back_to_configuration() {
        let config = DesktopConfig {
            fallback_viewport: Viewport {
                width: 800,
                height: 600,
            },
            ..DesktopConfig::default()
        };
        let host = DesktopHostContext::new(config);

        assert_eq!(
            host.viewport(),
            Viewport {
                width: 800,
                height: 600
            }
        );
    }
}
