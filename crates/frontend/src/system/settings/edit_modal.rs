use contracts::domain::common::{ReferenceItem, ReferenceKind};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

use crate::domain::reference::{self, select_options};
use crate::shared::components::ui::{Input, Select};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;

/// Rename a reference item; types can also be moved to another category.
#[component]
pub fn EditItemModal(
    kind: ReferenceKind,
    item: ReferenceItem,
    #[prop(into)] categories: Signal<Vec<ReferenceItem>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let name = RwSignal::new(item.name.clone());
    let category = RwSignal::new(
        item.category_id
            .map(|c| c.to_string())
            .unwrap_or_default(),
    );
    let saving = RwSignal::new(false);
    let id = item.id;

    let save = move |_| {
        let value = name.get_untracked();
        let cat = category.get_untracked().parse::<i64>().ok();
        saving.set(true);
        spawn_local(async move {
            match reference::update_item(kind, id, &value, cat).await {
                Ok(ack) => {
                    toast.success(ack.message_or("Updated successfully!"));
                    on_saved.run(());
                }
                Err(e) => toast.error(e.to_string()),
            }
            saving.set(false);
        });
    };

    view! {
        <Modal
            title=format!("Edit {}", kind.label())
            on_close=on_close
            footer=Arc::new(move || view! {
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="button button--primary" disabled=move || saving.get() on:click=save>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            }.into_any())
        >
            <Input
                label="Name"
                value=name
                on_input=Callback::new(move |v: String| name.set(v))
                required=true
                id="edit_item_name"
            />
            {kind.needs_category().then(|| view! {
                <Select
                    label="Disability Category"
                    value=category
                    on_change=Callback::new(move |v: String| category.set(v))
                    options=Signal::derive(move || categories.with(|c| select_options(c)))
                    id="edit_item_category"
                />
            })}
        </Modal>
    }
}
