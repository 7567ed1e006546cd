use contracts::system::auth::{guard, GuardDecision, Role};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::context::use_session;

/// Renders its children only for a session of `role`; anyone else is sent to
/// that role's login page.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let decision = move || session.user.with(|user| guard(user.as_ref(), role));

    Effect::new(move |_| {
        if let GuardDecision::Redirect(path) = decision() {
            log::debug!("guard: redirecting to {}", path);
            navigate(path, Default::default());
        }
    });

    view! {
        <Show
            when=move || decision() == GuardDecision::Allow
            fallback=|| view! { <div class="page__loading">"Redirecting..."</div> }
        >
            {children()}
        </Show>
    }
}
