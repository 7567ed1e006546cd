/// Client-side list filtering and the debounced search box
use contracts::domain::a002_assistance_request::{matches_search, AssistanceRequest};
use contracts::system::users::User;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

const DEBOUNCE_MS: i32 = 300;

/// Rows that can be matched against a free-text query
pub trait Searchable {
    /// True when the row matches the query (already non-empty)
    fn matches_filter(&self, filter: &str) -> bool;
}

impl Searchable for User {
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches(filter)
    }
}

impl Searchable for AssistanceRequest {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_search(self, filter)
    }
}

/// Keeps the rows matching `filter`; an empty filter keeps everything
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter.trim()))
        .cloned()
        .collect()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value after the debounce delay
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::once(move || {
            on_change.run(new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            DEBOUNCE_MS,
        ) {
            Ok(id) => debounce_timeout.set_value(Some(id)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
        closure.forget();
    };

    let clear_filter = move |_| {
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class=move || if value.get().trim().is_empty() { "form__input" } else { "form__input form__input--active" }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, role: &str) -> User {
        User {
            user_id: 1,
            username: name.into(),
            email: email.into(),
            role: role.into(),
            created_at: None,
        }
    }

    #[test]
    fn test_filter_users() {
        let users = vec![
            user("kofi", "kofi@dms.gh", "admin"),
            user("ama", "ama@dms.gh", "officer"),
        ];
        assert_eq!(filter_list(&users, "").len(), 2);
        assert_eq!(filter_list(&users, "OFFICER")[0].username, "ama");
        assert_eq!(filter_list(&users, " kofi@ ")[0].username, "kofi");
        assert!(filter_list(&users, "zzz").is_empty());
    }
}
