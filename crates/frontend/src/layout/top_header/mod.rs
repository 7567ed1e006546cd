//! Dashboard top bar: sidebar toggle, dark mode, user name and logout.

use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::layout::global_context::use_shell;
use crate::shared::icons::icon;
use crate::shared::theme::DarkModeToggle;
use crate::system::auth::context::{do_logout, use_session};

#[component]
pub fn TopHeader(role: Role) -> impl IntoView {
    let shell = use_shell();
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        do_logout(session);
        navigate(role.login_path(), Default::default());
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn top-header__menu-btn"
                    on:click=move |_| shell.toggle_sidebar()
                    title="Toggle navigation"
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Disability Management System"</span>
            </div>

            <div class="top-header__actions">
                <DarkModeToggle />

                <a class="top-header__user" href=role.page("profile")>
                    {icon("user")}
                    <span>
                        {move || session.user.with(|u| {
                            u.as_ref().map(|u| u.display_name()).unwrap_or_default()
                        })}
                    </span>
                </a>

                <button class="top-header__icon-btn" on:click=logout title="Logout">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
