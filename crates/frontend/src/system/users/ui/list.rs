use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use super::user_form::UserFormModal;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput};
use crate::shared::modal::ConfirmDialog;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_session;
use crate::system::users::api;

/// Which modal is open over the list
#[derive(Clone)]
enum Dialog {
    Add,
    Edit(User),
    Delete(User),
}

#[component]
pub fn UsersList() -> impl IntoView {
    let toast = use_toast();
    let session = use_session();

    let (users, set_users) = signal::<Vec<User>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let search = RwSignal::new(String::new());
    let dialog = RwSignal::new(None::<Dialog>);
    let deleting = RwSignal::new(false);

    let load_users = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(list) => {
                    set_users.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    let filtered = Memo::new(move |_| {
        let q = search.get();
        users.with(|all| filter_list(all, &q))
    });

    let close = Callback::new(move |_: ()| dialog.set(None));
    let saved = Callback::new(move |_: ()| {
        dialog.set(None);
        load_users();
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(Dialog::Delete(user)) = dialog.get_untracked() else {
            return;
        };
        if session.user_id() == Some(user.user_id) {
            toast.error("You cannot delete your own account");
            dialog.set(None);
            return;
        }
        deleting.set(true);
        spawn_local(async move {
            match api::delete_user(user.user_id).await {
                Ok(ack) => {
                    toast.success(ack.message_or("User deleted successfully"));
                    set_users.update(|list| list.retain(|u| u.user_id != user.user_id));
                }
                Err(e) => toast.error(e.to_string()),
            }
            deleting.set(false);
            dialog.set(None);
        });
    });

    load_users();

    view! {
        <div class="page">
            <PageHeader title="User Management" subtitle="Manage system users and their roles">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(Some(Dialog::Add))>
                    {icon("user-plus")}
                    " Add User"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}

            <div class="filter-bar">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |v: String| search.set(v))
                    placeholder="Search by name, email or role..."
                />
            </div>

            <div class="table-wrapper">
                <table class="table__data">
                    <thead>
                        <tr>
                            <th>"User"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Created At"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                return view! { <tr><td class="table__cell--empty" colspan="5">"Loading users..."</td></tr> }.into_any();
                            }
                            let rows = filtered.get();
                            if rows.is_empty() {
                                return view! { <tr><td class="table__cell--empty" colspan="5">"No users found."</td></tr> }.into_any();
                            }
                            rows.into_iter().map(|user| {
                                let for_edit = user.clone();
                                let for_delete = user.clone();
                                let role_variant = if user.role.eq_ignore_ascii_case("admin") { "accent" } else { "info" };
                                view! {
                                    <tr>
                                        <td>{user.username.clone()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td><Badge variant=role_variant.to_string()>{user.role.to_uppercase()}</Badge></td>
                                        <td>{format_optional_date(user.created_at.as_deref())}</td>
                                        <td>
                                            <div class="table__actions">
                                                <button class="icon-btn" title="Edit" on:click=move |_| dialog.set(Some(Dialog::Edit(for_edit.clone())))>
                                                    {icon("edit")}
                                                </button>
                                                <button class="icon-btn icon-btn--danger" title="Delete" on:click=move |_| dialog.set(Some(Dialog::Delete(for_delete.clone())))>
                                                    {icon("trash")}
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            {move || dialog.get().map(|d| match d {
                Dialog::Add => view! {
                    <UserFormModal editing=None on_close=close on_saved=saved />
                }.into_any(),
                Dialog::Edit(user) => view! {
                    <UserFormModal editing=Some(user) on_close=close on_saved=saved />
                }.into_any(),
                Dialog::Delete(user) => view! {
                    <ConfirmDialog
                        title="Delete User"
                        message=format!("Are you sure you want to delete {}?", user.username)
                        on_confirm=confirm_delete
                        on_cancel=close
                        busy=deleting
                    />
                }.into_any(),
            })}
        </div>
    }
}
