use super::*;
use crate::model::{TitlebarTarget, WindowId};
use desktop_app_contract::{AppMountContext, WindowHandle};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = Signal::derive(move || {
        runtime
            .state
            .get()
            .windows
            .into_iter()
            .find(|w| w.id == window_id)
    });

    let focus = move |_: web_sys::PointerEvent| {
        let needs_focus = window
            .get_untracked()
            .is_some_and(|w| !w.is_active() || !w.is_visible());
        if needs_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let minimize = move || runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
    let toggle_maximize =
        move || runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    let close = move || runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
            target: TitlebarTarget::Caption,
        });
    };
    let controls_pointerdown = move |ev: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
            target: TitlebarTarget::Controls,
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        toggle_maximize();
    };

    let Some(initial) = window.get_untracked() else {
        return ().into_view();
    };
    let taskbar_height = runtime.state.get_untracked().config.taskbar_height;
    let style = move || match window.get() {
        Some(win) if win.maximized => format!(
            "left:0;top:0;width:100%;height:calc(100% - {taskbar_height}px);z-index:{};",
            win.z_index
        ),
        Some(win) => format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
        ),
        None => "display:none;".to_string(),
    };
    let is_maximized = move || window.get().map(|w| w.maximized).unwrap_or(false);

    view! {
        <section
            class="window"
            class:active=move || window.get().map(|w| w.is_active()).unwrap_or(false)
            class:minimized=move || window.get().map(|w| !w.is_visible()).unwrap_or(false)
            class:maximized=is_maximized
            style=style
            on:pointerdown=focus
            role="dialog"
            aria-label=initial.title.clone()
        >
            <header
                class="window-header"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <div class="window-title">{initial.title.clone()}</div>
                <div
                    class="window-controls"
                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                        ev.stop_propagation();
                        controls_pointerdown(ev);
                    }
                    on:dblclick=move |ev| stop_mouse_event(&ev)
                >
                    <button
                        class="window-btn minimize"
                        aria-label="Minimize window"
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            minimize();
                        }
                    >
                        "−"
                    </button>
                    <button
                        class="window-btn maximize"
                        aria-label=move || {
                            if is_maximized() { "Restore window" } else { "Maximize window" }
                        }
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            toggle_maximize();
                        }
                    >
                        "□"
                    </button>
                    <button
                        class="window-btn close"
                        aria-label="Close window"
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            close();
                        }
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-content">
                <WindowBody window_id=window_id />
            </div>
        </section>
    }
    .into_view()
}

/// Mounts app content once per window: content builder first, then the initializer.
#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(record) = runtime.state.get_untracked().window(window_id).cloned() else {
        return view! { <p>"Closed"</p> }.into_view();
    };
    let Some(module) = apps::app_module(&record.app_id) else {
        logging::warn!("no content module registered for `{}`", record.app_id);
        return view! { <p class="window-error">"Nothing to show"</p> }.into_view();
    };

    let handle = WindowHandle {
        window_id: record.id.0,
        app_id: record.app_id.clone(),
        title: record.title.clone(),
    };
    let contents = module.mount(AppMountContext {
        window: handle.clone(),
    });
    let init_error = match module.initialize(handle) {
        Ok(()) => None,
        Err(err) => {
            logging::warn!("content init failed for window {}: {err}", window_id.0);
            Some(err)
        }
    };

    view! {
        <div class="window-body-content">
            {init_error.map(|err| view! { <p class="window-error" role="alert">{err}</p> })}
            {contents}
        </div>
    }
    .into_view()
}
