//! Fallback page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-7xl font-black text-gray-200 dark:text-gray-700 select-none">
                    "404"
                </h1>
                <p class="mt-2 text-xl font-semibold text-gray-900 dark:text-white">
                    "Page not found"
                </p>
                <p class="mt-2 text-gray-500 dark:text-gray-400 max-w-sm">
                    "The page you requested does not exist."
                </p>
                <div class="mt-6">
                    <A
                        href="/"
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-indigo-600 rounded-lg hover:bg-indigo-700 focus:ring-4 focus:outline-none focus:ring-indigo-300"
                    >
                        "Go Home"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
