use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-6 w-6 animate-spin rounded-full border-4 border-indigo-200 border-t-indigo-600"
            role="status"
            aria-live="polite"
            aria-label="Verifying"
        ></div>
    }
}
