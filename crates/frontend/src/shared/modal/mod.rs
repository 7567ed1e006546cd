use crate::shared::icons::icon;
use std::sync::Arc;
use leptos::ev;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional buttons rendered under the body
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|f| view! { <div class="modal-footer">{f()}</div> })}
            </div>
        </div>
    }
}

/// Yes/no confirmation before a destructive action
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, into)] confirm_label: MaybeProp<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    /// Disables the confirm button while the request runs
    #[prop(optional, into)]
    busy: Signal<bool>,
) -> impl IntoView {
    let confirm_label = move || confirm_label.get().unwrap_or_else(|| "Delete".to_string());

    view! {
        <Modal
            title=title
            on_close=on_cancel
            footer=Arc::new(move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || busy.get())
                    on_click=move |_| on_confirm.run(())
                >
                    {move || if busy.get() { "Please wait...".to_string() } else { confirm_label() }}
                </Button>
            }.into_any())
        >
            <p class="modal__message">{message}</p>
        </Modal>
    }
}

/// Free-text prompt; the note is passed to `on_submit`
#[component]
pub fn NoteDialog(
    #[prop(into)] title: String,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] submit_label: MaybeProp<String>,
    on_submit: Callback<String>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] busy: Signal<bool>,
) -> impl IntoView {
    let note = RwSignal::new(String::new());
    let submit_label = move || submit_label.get().unwrap_or_else(|| "Submit".to_string());

    view! {
        <Modal
            title=title
            on_close=on_cancel
            footer=Arc::new(move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || busy.get())
                    on_click=move |_| on_submit.run(note.get_untracked())
                >
                    {submit_label}
                </Button>
            }.into_any())
        >
            <textarea
                class="form__textarea"
                rows=4
                placeholder=move || placeholder.get().unwrap_or_default()
                prop:value=move || note.get()
                on:input=move |ev| note.set(event_target_value(&ev))
            />
        </Modal>
    }
}
