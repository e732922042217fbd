mod not_found;
mod success;
mod verification;

pub(crate) use not_found::NotFoundPage;
pub(crate) use success::SuccessPage;
pub(crate) use verification::VerificationPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=VerificationPage />
            <Route path=path!("/success") view=SuccessPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
