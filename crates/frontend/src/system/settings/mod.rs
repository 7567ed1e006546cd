//! Settings: reference data maintained by admins, one tab per kind.

mod edit_modal;

use contracts::domain::common::{ReferenceItem, ReferenceKind};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::reference::{self, select_options};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::toast::use_toast;
use edit_modal::EditItemModal;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let toast = use_toast();

    let active = RwSignal::new(ReferenceKind::Communities);
    let items = RwSignal::new(Vec::<ReferenceItem>::new());
    let categories = RwSignal::new(Vec::<ReferenceItem>::new());
    let category = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let new_name = RwSignal::new(String::new());
    let adding = RwSignal::new(false);
    let editing = RwSignal::new(None::<ReferenceItem>);
    let deleting_item = RwSignal::new(None::<ReferenceItem>);
    let deleting = RwSignal::new(false);

    let category_id = move || category.get_untracked().parse::<i64>().ok();

    let load = move || {
        let kind = active.get_untracked();
        let cat = category_id();
        loading.set(true);
        spawn_local(async move {
            match reference::fetch_items(kind, cat).await {
                Ok(list) => {
                    // A late answer for a tab the user already left is dropped.
                    if active.get_untracked() == kind {
                        items.set(list);
                    }
                }
                Err(e) => {
                    log::warn!("failed to load {}: {}", kind.label(), e);
                    toast.error(e.to_string());
                    items.set(Vec::new());
                }
            }
            loading.set(false);
        });
    };

    // Categories feed the selector on the type tab.
    spawn_local(async move {
        match reference::fetch_items(ReferenceKind::Category, None).await {
            Ok(list) => categories.set(list),
            Err(e) => log::warn!("failed to load categories: {}", e),
        }
    });

    let switch_tab = move |kind: ReferenceKind| {
        active.set(kind);
        new_name.set(String::new());
        items.set(Vec::new());
        load();
    };

    let on_category = Callback::new(move |value: String| {
        category.set(value);
        load();
    });

    let on_add = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let kind = active.get_untracked();
        let name = new_name.get_untracked();
        let cat = category_id();
        adding.set(true);
        spawn_local(async move {
            match reference::create_item(kind, &name, cat).await {
                Ok(ack) => {
                    toast.success(ack.message_or("Added successfully!"));
                    new_name.set(String::new());
                    load();
                }
                Err(e) => toast.error(e.to_string()),
            }
            adding.set(false);
        });
    };

    let on_saved = Callback::new(move |_: ()| {
        editing.set(None);
        load();
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(item) = deleting_item.get_untracked() else {
            return;
        };
        let kind = active.get_untracked();
        let cat = item.category_id.or_else(category_id);
        deleting.set(true);
        spawn_local(async move {
            match reference::delete_item(kind, item.id, cat).await {
                Ok(ack) => {
                    toast.success(ack.message_or("Deleted successfully!"));
                    items.update(|list| list.retain(|i| i.id != item.id));
                }
                Err(e) => toast.error(e.to_string()),
            }
            deleting.set(false);
            deleting_item.set(None);
        });
    });

    load();

    view! {
        <div class="page">
            <PageHeader title="Settings" subtitle="Manage reference data used across the system">
                ""
            </PageHeader>

            <div class="tabs">
                {ReferenceKind::all().into_iter().map(|kind| view! {
                    <button
                        class="tabs__tab"
                        class:tabs__tab--active=move || active.get() == kind
                        on:click=move |_| switch_tab(kind)
                    >
                        {kind.label()}
                    </button>
                }).collect_view()}
            </div>

            <Show when=move || active.get().needs_category()>
                <div class="card">
                    <Select
                        label="Disability Category"
                        value=category
                        on_change=on_category
                        options=Signal::derive(move || categories.with(|c| select_options(c)))
                        placeholder="Select a category"
                        id="settings_category"
                    />
                </div>
            </Show>

            <Show when=move || active.get().is_editable()>
                <form class="card settings__add" on:submit=on_add>
                    <h2 class="card__title">{move || format!("Add New {}", active.get().label())}</h2>
                    <div class="settings__add-row">
                        <input
                            class="form__input"
                            placeholder=move || format!("Enter new {}", active.get().key())
                            prop:value=move || new_name.get()
                            on:input=move |ev| new_name.set(event_target_value(&ev))
                        />
                        <button type="submit" class="button button--primary" disabled=move || adding.get()>
                            {icon("plus-circle")}
                            " Add"
                        </button>
                    </div>
                </form>
            </Show>

            <div class="card">
                <h2 class="card__title">{move || format!("All {}", active.get().label())}</h2>
                <table class="table__data">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                return view! { <tr><td class="table__cell--empty" colspan="2">"Loading..."</td></tr> }.into_any();
                            }
                            let kind = active.get();
                            let rows = items.get();
                            if rows.is_empty() {
                                let message = if kind.needs_category() && category.get().is_empty() {
                                    "Select a category to see its types."
                                } else {
                                    "No data found."
                                };
                                return view! { <tr><td class="table__cell--empty" colspan="2">{message}</td></tr> }.into_any();
                            }
                            rows.into_iter().map(|item| {
                                let for_edit = item.clone();
                                let for_delete = item.clone();
                                view! {
                                    <tr>
                                        <td>{item.name.clone()}</td>
                                        <td>
                                            {kind.is_editable().then(|| view! {
                                                <div class="table__actions">
                                                    <button class="icon-btn" title="Edit" on:click=move |_| editing.set(Some(for_edit.clone()))>
                                                        {icon("edit")}
                                                    </button>
                                                    <button class="icon-btn icon-btn--danger" title="Delete" on:click=move |_| deleting_item.set(Some(for_delete.clone()))>
                                                        {icon("trash")}
                                                    </button>
                                                </div>
                                            })}
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            {move || editing.get().map(|item| view! {
                <EditItemModal
                    kind=active.get_untracked()
                    item=item
                    categories=categories
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=on_saved
                />
            })}

            <Show when=move || deleting_item.get().is_some()>
                <ConfirmDialog
                    title="Are you sure?"
                    message="This item will be permanently deleted."
                    confirm_label="Yes, delete it!"
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting_item.set(None))
                    busy=deleting
                />
            </Show>
        </div>
    }
}
