use contracts::system::auth::Role;
use contracts::system::password_reset::validate_new_password;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::auth_card::AuthCard;
use crate::shared::toast::use_toast;
use crate::system::auth::{api, storage};

#[component]
pub fn ResetPasswordPage(role: Role) -> impl IntoView {
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);
    let toast = use_toast();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let new_val = new_password.get_untracked();
        if let Err(e) = validate_new_password(&new_val, &confirm_password.get_untracked()) {
            error.set(Some(e.to_string()));
            toast.error(e.to_string());
            return;
        }
        let Some(otp) = storage::get_reset_otp() else {
            toast.error("OTP not found. Please request a new one.");
            return;
        };
        let navigate = navigate.clone();
        is_loading.set(true);
        spawn_local(async move {
            match api::reset_password(otp, new_val).await {
                Ok(ack) => {
                    storage::clear_reset_otp();
                    toast.success(ack.message_or("Password reset successful"));
                    navigate(role.login_path(), Default::default());
                }
                Err(e) => toast.error(e.to_string()),
            }
            is_loading.set(false);
        });
    };

    view! {
        <AuthCard role=role title="Reset Password" subtitle="Enter your new password below">
            <form class="auth-form" on:submit=on_submit>
                <div class="form__group">
                    <label class="form__label" for="new-password">"New Password"</label>
                    <input
                        type="password"
                        id="new-password"
                        class="form__input"
                        placeholder="Enter new password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label" for="confirm-password">"Confirm Password"</label>
                    <input
                        type="password"
                        id="confirm-password"
                        class="form__input"
                        placeholder="Confirm new password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                </div>
                {move || error.get().map(|e| view! { <p class="form__error">{e}</p> })}
                <button
                    type="submit"
                    class="button button--primary button--block"
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Resetting..." } else { "Reset Password" }}
                </button>
            </form>
        </AuthCard>
    }
}
