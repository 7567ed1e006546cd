use contracts::system::users::ProfileUpdateDto;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::avatar_url;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Input};
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_session;
use crate::system::users::api;

/// Own-account page: username, email and an optional new password.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let toast = use_toast();
    let session = use_session();
    let current = session.user.get_untracked();

    let username = RwSignal::new(
        current
            .as_ref()
            .and_then(|u| u.username.clone())
            .unwrap_or_default(),
    );
    let email = RwSignal::new(
        current
            .as_ref()
            .and_then(|u| u.email.clone())
            .unwrap_or_default(),
    );
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let display_name = move || {
        session
            .user
            .with(|u| u.as_ref().map(|u| u.display_name()).unwrap_or_default())
    };
    let role_label = move || {
        session
            .user
            .with(|u| u.as_ref().map(|u| u.role.label()).unwrap_or_default())
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = session.user_id() else {
            toast.error("Not authenticated. Please log in again.");
            return;
        };
        let dto = match ProfileUpdateDto::new(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(dto) => dto,
            Err(e) => {
                toast.error(e.to_string());
                return;
            }
        };
        saving.set(true);
        spawn_local(async move {
            match api::update_profile(user_id, &dto).await {
                Ok(ack) => {
                    session.update_profile(&dto.username, &dto.email);
                    password.set(String::new());
                    confirm.set(String::new());
                    toast.success(ack.message_or("Profile Updated!"));
                }
                Err(e) => toast.error(e.to_string()),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="page page--narrow">
            <PageHeader title="Profile" subtitle="Manage your account details" >
                ""
            </PageHeader>

            <div class="card profile">
                <div class="profile__summary">
                    <img class="profile__avatar" src=move || avatar_url(&display_name(), None) alt="Avatar" />
                    <div>
                        <div class="profile__name">{display_name}</div>
                        <Badge variant="accent".to_string()>{role_label}</Badge>
                    </div>
                </div>

                <form class="form" on:submit=on_submit>
                    <Input
                        label="Username"
                        value=username
                        on_input=Callback::new(move |v| username.set(v))
                        required=true
                        id="profile_username"
                    />
                    <Input
                        label="Email"
                        input_type="email"
                        value=email
                        on_input=Callback::new(move |v| email.set(v))
                        required=true
                        id="profile_email"
                    />
                    <Input
                        label="New Password"
                        input_type="password"
                        value=password
                        on_input=Callback::new(move |v| password.set(v))
                        placeholder="Leave blank to keep the current password"
                        id="profile_password"
                    />
                    <Input
                        label="Confirm Password"
                        input_type="password"
                        value=confirm
                        on_input=Callback::new(move |v| confirm.set(v))
                        id="profile_confirm"
                    />
                    <div class="form__actions">
                        <button type="submit" class="button button--primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Update Profile" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
