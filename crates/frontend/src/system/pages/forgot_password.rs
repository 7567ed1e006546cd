use contracts::system::auth::Role;
use contracts::system::password_reset::validate_email;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::auth_card::AuthCard;
use crate::shared::toast::use_toast;
use crate::system::auth::api;

#[component]
pub fn ForgotPasswordPage(role: Role) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let toast = use_toast();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_val = email.get_untracked().trim().to_string();
        if let Err(e) = validate_email(&email_val) {
            toast.error(e.to_string());
            return;
        }
        let navigate = navigate.clone();
        is_loading.set(true);
        spawn_local(async move {
            match api::request_reset(email_val).await {
                Ok(ack) => {
                    toast.success(ack.message_or("Reset link sent! Check your email."));
                    navigate(role.otp_path(), Default::default());
                }
                Err(e) => toast.error(e.to_string()),
            }
            is_loading.set(false);
        });
    };

    view! {
        <AuthCard
            role=role
            title=format!("{} Forgot Password", role.label())
            subtitle="Enter your email to reset your password"
        >
            <form class="auth-form" on:submit=on_submit>
                <div class="form__group">
                    <label class="form__label" for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        class="form__input"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        required
                    />
                </div>
                <button
                    type="submit"
                    class="button button--primary button--block"
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Sending..." } else { "Send Reset Code" }}
                </button>
                <div class="auth-form__links">
                    <a href=role.login_path()>"Back to login"</a>
                </div>
            </form>
        </AuthCard>
    }
}
