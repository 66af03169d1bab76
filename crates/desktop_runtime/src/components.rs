//! Desktop shell UI composition and interaction surfaces.

mod taskbar;
mod window;

use leptos::*;

use self::{taskbar::Taskbar, window::DesktopWindow};

use crate::{apps, model::PointerPosition, reducer::DesktopAction};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell UI: icons, the window layer, and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(DesktopAction::SetViewport {
            viewport: runtime.host.get_value().viewport(),
        });
    });
    on_cleanup(move || resize_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().is_dragging() {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| {
        if runtime.interaction.get_untracked().is_dragging() {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            class:dragging=move || runtime.interaction.get().is_dragging()
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div class="desktop" data-ui-kind="desktop-icons">
                <For
                    each=move || apps::desktop_icon_apps()
                    key=|app| app.app_id.to_string()
                    let:app
                >
                    {{
                        let app_id = app.app_id.to_string();
                        view! {
                            <div
                                class="desktop-icon"
                                data-app=app_id.clone()
                                title=app.display_name.clone()
                                on:dblclick=move |_| {
                                    runtime.dispatch_action(DesktopAction::ActivateApp {
                                        app_id: app_id.clone(),
                                    });
                                }
                            >
                                <div class="icon" aria-hidden="true">{app.icon.clone()}</div>
                                <span>{app.desktop_icon_label.clone()}</span>
                            </div>
                        }
                    }}
                </For>
            </div>

            <div class="window-layer">
                <For each=move || state.get().windows key=|win| win.id.0 let:win>
                    <DesktopWindow window_id=win.id />
                </For>
            </div>

            <Taskbar />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}
