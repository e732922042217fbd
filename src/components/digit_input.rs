//! Single digit cell of the verification code input.
//!
//! Each cell accepts at most one decimal digit per change; anything else is
//! dropped by restoring the previous value into the element. The cell stays
//! addressable as `code-input-<index>` and mirrors its invalid flag into a
//! `data-error` attribute for styling.

use crate::features::verification::code;
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn DigitInput(
    index: usize,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] invalid: Signal<bool>,
    node_ref: NodeRef<Input>,
    on_change: Callback<(usize, code::Slot)>,
    #[prop(optional)] on_paste: Option<Callback<String>>,
) -> impl IntoView {
    let on_input = move |ev| match code::sanitize_input(&event_target_value(&ev)) {
        Some(slot) => on_change.run((index, slot)),
        None => {
            // Rejected keystroke: put the previous value back into the element.
            if let Some(input) = node_ref.get() {
                input.set_value(&value.get_untracked());
            }
        }
    };

    let on_paste_input = move |ev| {
        let Some(handler) = on_paste else {
            return;
        };
        let ev: web_sys::ClipboardEvent = ev.unchecked_into();
        ev.prevent_default();
        let text = ev
            .clipboard_data()
            .and_then(|data| data.get_data("Text").ok())
            .unwrap_or_default();
        handler.run(text);
    };

    view! {
        <input
            id=format!("code-input-{index}")
            node_ref=node_ref
            type="text"
            maxlength="1"
            inputmode="numeric"
            autocomplete="off"
            class="h-12 w-10 rounded-lg border border-gray-300 bg-white text-center text-lg font-semibold text-gray-900 focus:border-indigo-500 focus:ring-2 focus:ring-indigo-300 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
            class:border-red-500=move || invalid.get()
            data-error=move || invalid.get().to_string()
            prop:value=move || value.get()
            on:input=on_input
            on:paste=on_paste_input
        />
    }
}
