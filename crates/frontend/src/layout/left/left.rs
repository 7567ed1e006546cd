use crate::layout::global_context::use_shell;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let shell = use_shell();
    let is_open = move || shell.sidebar_open.get();

    view! {
        <div
            class="app-sidebar__backdrop"
            class:hidden=move || !is_open()
            on:click=move |_| shell.close_sidebar()
        ></div>
        <aside class="app-sidebar" class:app-sidebar--open=is_open>
            {children()}
        </aside>
    }
}
