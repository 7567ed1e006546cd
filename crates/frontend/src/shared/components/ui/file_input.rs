use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

/// Files picked in an `<input type="file">` change event
pub fn selected_files(ev: &leptos::ev::Event) -> Vec<File> {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// File picker; `on_select` receives every picked file
#[component]
pub fn FileInput(
    /// Label text
    #[prop(into)]
    label: String,
    /// Allows picking several files
    #[prop(optional)]
    multiple: bool,
    /// e.g. "image/*"
    #[prop(optional, into)]
    accept: MaybeProp<String>,
    on_select: Callback<Vec<File>>,
    /// Names of the currently selected files
    #[prop(into)]
    selected: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="file"
                class="form__file"
                multiple=multiple
                accept=move || accept.get()
                on:change=move |ev| on_select.run(selected_files(&ev))
            />
            <Show when=move || !selected.get().is_empty()>
                <ul class="form__file-list">
                    {move || selected.get().into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
