use contracts::system::auth::{post_login_redirect, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::auth_card::AuthCard;
use crate::shared::components::ui::Checkbox;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::{do_login, use_session};

#[component]
pub fn LoginPage(role: Role) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let accept_terms = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let session = use_session();
    let toast = use_toast();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !accept_terms.get_untracked() {
            return;
        }

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        let navigate = navigate.clone();

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match do_login(session, username_val, password_val, role).await {
                Ok(user) => {
                    toast.success("Login successful");
                    navigate(post_login_redirect(user.role), Default::default());
                }
                Err(e) => {
                    toast.error(e.to_string());
                    error_message.set(Some(e.to_string()));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <AuthCard role=role title=format!("{} Login", role.label()) subtitle="Sign in to your account">
            <Show when=move || error_message.get().is_some()>
                <div class="alert alert--error">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <form class="auth-form" on:submit=on_submit>
                <div class="form__group">
                    <label class="form__label" for="username">"Username"</label>
                    <input
                        type="text"
                        id="username"
                        class="form__input"
                        autocomplete="username"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                        required
                        disabled=move || is_loading.get()
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="password">"Password"</label>
                    <div class="form__password">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            id="password"
                            class="form__input"
                            autocomplete="current-password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                        <button
                            type="button"
                            class="form__password-toggle"
                            title=move || if show_password.get() { "Hide password" } else { "Show password" }
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { icon("eye-off") } else { icon("eye") }}
                        </button>
                    </div>
                    <div class="auth-form__links">
                        <a href=role.forgot_password_path()>"Forgot password?"</a>
                    </div>
                </div>

                <Checkbox
                    id="terms"
                    checked=accept_terms
                    on_change=Callback::new(move |v| accept_terms.set(v))
                >
                    "I agree to the " <a href="#">"Terms and Conditions"</a>
                </Checkbox>

                <button
                    type="submit"
                    class="button button--primary button--block"
                    disabled=move || is_loading.get() || !accept_terms.get()
                >
                    {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
        </AuthCard>
    }
}
