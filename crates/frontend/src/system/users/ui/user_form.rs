use contracts::system::auth::Role;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Input, Select};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use crate::system::users::api;

fn role_options() -> Vec<(String, String)> {
    Role::all()
        .iter()
        .map(|r| (r.code().to_string(), r.label().to_string()))
        .collect()
}

/// Add-user modal when `editing` is `None`, edit-user modal otherwise.
/// The password is only asked for new accounts.
#[component]
pub fn UserFormModal(
    editing: Option<User>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let user_id = editing.as_ref().map(|u| u.user_id);
    let is_new = user_id.is_none();
    let initial = editing
        .as_ref()
        .map(UpdateUserDto::from_user)
        .unwrap_or_default();

    let username = RwSignal::new(initial.username);
    let email = RwSignal::new(initial.email);
    let role = RwSignal::new(initial.role);
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        error_message.set(None);
        is_saving.set(true);

        spawn_local(async move {
            let result = match user_id {
                Some(id) => {
                    let dto = UpdateUserDto {
                        username: username.get_untracked().trim().to_string(),
                        email: email.get_untracked().trim().to_string(),
                        role: role.get_untracked(),
                    };
                    api::update_user(id, &dto)
                        .await
                        .map(|ack| ack.message_or("User updated successfully"))
                }
                None => {
                    let dto = CreateUserDto {
                        username: username.get_untracked().trim().to_string(),
                        email: email.get_untracked().trim().to_string(),
                        password: password.get_untracked(),
                        role: role.get_untracked(),
                    };
                    api::create_user(&dto)
                        .await
                        .map(|ack| ack.message_or("User created successfully"))
                }
            };
            is_saving.set(false);
            match result {
                Ok(message) => {
                    toast.success(message);
                    on_saved.run(());
                }
                Err(e) => error_message.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <Modal title=if is_new { "Add User" } else { "Edit User" } on_close=on_close>
            <form class="form" on:submit=on_submit>
                {move || error_message.get().map(|e| view! { <div class="error-box">{e}</div> })}

                <Input
                    label="Username"
                    value=username
                    on_input=Callback::new(move |v| username.set(v))
                    required=true
                    disabled=Signal::derive(move || is_saving.get())
                    id="user_username"
                />
                <Input
                    label="Email"
                    input_type="email"
                    value=email
                    on_input=Callback::new(move |v| email.set(v))
                    required=true
                    disabled=Signal::derive(move || is_saving.get())
                    id="user_email"
                />
                {is_new.then(|| view! {
                    <Input
                        label="Password"
                        input_type="password"
                        value=password
                        on_input=Callback::new(move |v| password.set(v))
                        required=true
                        disabled=Signal::derive(move || is_saving.get())
                        id="user_password"
                    />
                })}
                <Select
                    label="Role"
                    value=role
                    on_change=Callback::new(move |v| role.set(v))
                    options=Signal::derive(role_options)
                    placeholder="Select Role"
                    required=true
                    id="user_role"
                />

                <div class="form__actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| on_close.run(())
                        disabled=move || is_saving.get()
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="button button--primary" disabled=move || is_saving.get()>
                        {move || match (is_saving.get(), is_new) {
                            (true, _) => "Saving...",
                            (false, true) => "Create User",
                            (false, false) => "Save Changes",
                        }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_options() {
        assert_eq!(
            role_options(),
            vec![
                ("admin".to_string(), "Admin".to_string()),
                ("officer".to_string(), "Officer".to_string()),
            ]
        );
    }
}
