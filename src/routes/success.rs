//! Static confirmation view shown after a successful verification.

use crate::components::{Alert, AlertKind, AppShell};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SuccessPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-sm mx-auto text-center">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Verified"</h1>
                <div class="mt-4">
                    <Alert
                        kind=AlertKind::Success
                        message="Your code was verified successfully.".to_string()
                    />
                </div>
                <div class="mt-6">
                    <A
                        href="/"
                        {..}
                        class="text-sm font-medium text-indigo-600 underline underline-offset-4 hover:text-indigo-800 dark:text-indigo-400"
                    >
                        "Enter another code"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
