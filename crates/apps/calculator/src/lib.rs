//! Calculator window content: a four-function keypad with a single pending operator.

mod engine;

use desktop_app_contract::{window_primary_input_dom_id, AppModule, AppMountContext, WindowHandle};
use leptos::ev::KeyboardEvent;
use leptos::*;

pub use engine::{calculate, format_number, CalcKey, CalculatorState, Operator, ERROR_DISPLAY};

/// Registry id matching `app.manifest.toml`.
pub const APP_ID: &str = "system.calculator";

/// Keypad labels in grid order, four per row.
const KEYPAD: [&str; 18] = [
    "C", "/", "*", "-", "7", "8", "9", "+", "4", "5", "6", "%", "1", "2", "3", ".", "0", "=",
];

fn key_class(label: &str) -> &'static str {
    match label {
        "C" => "calculator-button clear",
        "=" => "calculator-button equals",
        _ if Operator::from_symbol(label).is_some() => "calculator-button operator",
        _ => "calculator-button",
    }
}

pub fn app_module() -> AppModule {
    AppModule::new(mount)
}

fn mount(context: AppMountContext) -> View {
    view! { <CalculatorApp window=context.window /> }.into_view()
}

#[component]
pub fn CalculatorApp(window: WindowHandle) -> impl IntoView {
    let calc = create_rw_signal(CalculatorState::default());

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }

        if let Some(key) = engine::keyboard_key(&ev.key()) {
            ev.prevent_default();
            calc.update(|state| state.apply(key));
        }
    };

    view! {
        <div
            class="calculator-content"
            id=window_primary_input_dom_id(window.window_id)
            tabindex="0"
            on:keydown=on_keydown
        >
            <div class="calculator-display" role="status" aria-live="polite">
                {move || calc.with(|state| state.display().to_string())}
            </div>
            <div class="calculator-buttons" role="group" aria-label="Calculator keys">
                {KEYPAD
                    .iter()
                    .filter_map(|label| engine::key_for_label(label).map(|key| (*label, key)))
                    .map(|(label, key)| {
                        view! {
                            <button
                                type="button"
                                class=key_class(label)
                                on:click=move |_| calc.update(|state| state.apply(key))
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_keypad_label_maps_to_a_key() {
        let unmapped: Vec<&str> = KEYPAD
            .iter()
            .copied()
            .filter(|label| engine::key_for_label(label).is_none())
            .collect();
        assert_eq!(unmapped, Vec::<&str>::new());
    }

    #[test]
    fn keypad_classes_follow_button_roles() {
        assert_eq!(key_class("C"), "calculator-button clear");
        assert_eq!(key_class("%"), "calculator-button operator");
        assert_eq!(key_class("="), "calculator-button equals");
        assert_eq!(key_class("7"), "calculator-button");
    }
}
