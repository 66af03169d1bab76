use std::time::Duration;

use platform_host::ClockTime;

use super::*;
use crate::taskbar::TaskbarEntry;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let taskbar_height = runtime.state.get_untracked().config.taskbar_height;
    let entries = move || runtime.state.get().taskbar.entries().to_vec();

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Taskbar"
            style=format!("height:{taskbar_height}px;")
        >
            // Present for the look of a desktop; it opens nothing.
            <button class="start-button" type="button">
                "⊞ Start"
            </button>
            <div class="taskbar-apps">
                <For each=entries key=|entry| (entry.window_id.0, entry.highlighted) let:entry>
                    <TaskbarButton entry=entry />
                </For>
            </div>
            <TaskbarClock />
        </footer>
    }
}

#[component]
fn TaskbarButton(entry: TaskbarEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = entry.window_id;

    view! {
        <button
            type="button"
            class="taskbar-app"
            class:active=entry.highlighted
            aria-pressed=entry.highlighted.to_string()
            on:click=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(DesktopAction::ActivateTaskbarEntry { window_id });
            }
        >
            {entry.label}
        </button>
    }
}

#[component]
fn TaskbarClock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let interval_ms = runtime.state.get_untracked().config.clock_interval_ms;
    let now = create_rw_signal(ClockTime::local_now());

    match set_interval_with_handle(
        move || now.set(ClockTime::local_now()),
        Duration::from_millis(interval_ms),
    ) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("taskbar clock interval failed: {err:?}"),
    }

    view! {
        <div class="taskbar-time" aria-live="off">
            {move || now.get().label()}
        </div>
    }
}
