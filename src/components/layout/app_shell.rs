//! Shared layout wrapper with a header and content container so routes can
//! focus on their own markup.

use crate::app_lib::build_info;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header, main content container, and build footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
            <header class="border-b border-gray-200 bg-white dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-md flex items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-2">
                        <span class="font-semibold whitespace-nowrap text-gray-900 dark:text-white">
                            "Otpgate"
                        </span>
                    </A>
                </div>
            </header>
            <main class="flex-1 w-full max-w-screen-md mx-auto px-4 py-10">{children()}</main>
            <footer class="py-4 text-center text-xs text-gray-400 dark:text-gray-500">
                {format!("build {}", build_info::git_commit_hash())}
            </footer>
        </div>
    }
}
