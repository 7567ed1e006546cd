use crate::routes::routes::AppRoutes;
use crate::shared::theme::DarkModeProvider;
use crate::shared::toast::{Toaster, ToastService};
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are raised from every page, including the login portals.
    provide_context(ToastService::new());

    view! {
        <DarkModeProvider>
            <SessionProvider>
                <AppRoutes />
                <Toaster />
            </SessionProvider>
        </DarkModeProvider>
    }
}
