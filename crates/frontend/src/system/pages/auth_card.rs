use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::shared::theme::DarkModeToggle;

/// Split-screen frame shared by the login and password-reset pages.
#[component]
pub fn AuthCard(
    role: Role,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    let tagline = match role {
        Role::Admin => "Administrative access to the Disability Management System",
        Role::Officer => "Secure access for data entry officers",
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__hero">
                <h2>{format!("{} Portal", role.label())}</h2>
                <p>{tagline}</p>
            </div>
            <div class="auth-page__panel">
                <div class="auth-page__toggle">
                    <DarkModeToggle />
                </div>
                <div class="auth-box">
                    <h1 class="auth-box__title">{title}</h1>
                    <p class="auth-box__subtitle">{subtitle}</p>
                    {children()}
                </div>
            </div>
        </div>
    }
}
