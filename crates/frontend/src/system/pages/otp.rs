//! Six-box OTP entry with paste support and resend.

use contracts::system::auth::Role;
use contracts::system::password_reset::{is_complete_otp, sanitize_otp_paste, OTP_LENGTH};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use super::auth_card::AuthCard;
use crate::shared::toast::use_toast;
use crate::system::auth::{api, storage};

fn box_id(index: usize) -> String {
    format!("otp-{}", index)
}

fn focus_box(index: usize) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&box_id(index)))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(element) = element {
        let _ = element.focus();
    }
}

/// Spreads pasted digits over the boxes, starting at the first one.
pub fn spread_paste(raw: &str) -> Vec<String> {
    let digits = sanitize_otp_paste(raw);
    let mut boxes: Vec<String> = digits.chars().map(|c| c.to_string()).collect();
    boxes.resize(OTP_LENGTH, String::new());
    boxes
}

#[component]
pub fn OtpPage(role: Role) -> impl IntoView {
    let digits = RwSignal::new(vec![String::new(); OTP_LENGTH]);
    let is_loading = RwSignal::new(false);
    let is_resending = RwSignal::new(false);
    let toast = use_toast();
    let navigate = use_navigate();

    let set_digit = move |index: usize, raw: String| {
        let digit: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit())
            .last()
            .map(|c| c.to_string())
            .unwrap_or_default();
        let advance = !digit.is_empty();
        digits.update(|d| d[index] = digit);
        if advance && index + 1 < OTP_LENGTH {
            focus_box(index + 1);
        }
    };

    let on_paste = move |ev: leptos::ev::ClipboardEvent| {
        let Some(text) = ev.clipboard_data().and_then(|d| d.get_data("text").ok()) else {
            return;
        };
        ev.prevent_default();
        let boxes = spread_paste(&text);
        let filled = boxes.iter().filter(|b| !b.is_empty()).count();
        digits.set(boxes);
        focus_box(filled.min(OTP_LENGTH - 1));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let code = digits.get_untracked().concat();
        if !is_complete_otp(&code) {
            toast.error("Please enter the 6-digit OTP");
            return;
        }
        let navigate = navigate.clone();
        is_loading.set(true);
        spawn_local(async move {
            match api::verify_otp(code.clone()).await {
                Ok(ack) => {
                    storage::save_reset_otp(&code);
                    toast.success(ack.message_or("OTP verified successfully!"));
                    navigate(role.reset_password_path(), Default::default());
                }
                Err(e) => toast.error(e.to_string()),
            }
            is_loading.set(false);
        });
    };

    let on_resend = move |_| {
        is_resending.set(true);
        spawn_local(async move {
            match api::resend_otp().await {
                Ok(ack) => toast.success(ack.message_or("OTP resent! Check your email.")),
                Err(e) => toast.error(e.to_string()),
            }
            is_resending.set(false);
        });
    };

    view! {
        <AuthCard
            role=role
            title=format!("{} OTP Verification", role.label())
            subtitle="Enter the OTP sent to your email"
        >
            <form class="auth-form" on:submit=on_submit>
                <div class="otp-boxes" on:paste=on_paste>
                    {(0..OTP_LENGTH).map(|index| view! {
                        <input
                            id=box_id(index)
                            class="otp-boxes__box"
                            type="text"
                            inputmode="numeric"
                            maxlength="1"
                            prop:value=move || digits.with(|d| d[index].clone())
                            on:input=move |ev| set_digit(index, event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                let empty = digits.with_untracked(|d| d[index].is_empty());
                                if ev.key() == "Backspace" && empty && index > 0 {
                                    focus_box(index - 1);
                                }
                            }
                        />
                    }).collect_view()}
                </div>
                <button
                    type="submit"
                    class="button button--primary button--block"
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Verifying..." } else { "Verify OTP" }}
                </button>
                <div class="auth-form__links">
                    <span>"Didn't get a code? "</span>
                    <button
                        type="button"
                        class="button--link"
                        disabled=move || is_resending.get()
                        on:click=on_resend
                    >
                        {move || if is_resending.get() { "Resending..." } else { "Resend OTP" }}
                    </button>
                </div>
            </form>
        </AuthCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_paste_fills_boxes() {
        assert_eq!(spread_paste("12 34-56"), vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(spread_paste("98"), vec!["9", "8", "", "", "", ""]);
        assert_eq!(spread_paste("1234567890").concat(), "123456");
    }
}
