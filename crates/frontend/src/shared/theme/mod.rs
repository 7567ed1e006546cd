//! Dark mode for the whole application.
//!
//! The preference lives in localStorage under `theme` (`"light"`/`"dark"`).
//! Without a stored value the system `prefers-color-scheme` decides. The
//! `dark` class on `<html>` always follows the signal.

use leptos::prelude::*;
use web_sys::window;

const THEME_STORAGE_KEY: &str = "theme";

/// Stored value for a mode.
pub fn theme_value(is_dark: bool) -> &'static str {
    if is_dark {
        "dark"
    } else {
        "light"
    }
}

/// Initial mode from a stored value, falling back to the system preference.
pub fn initial_dark(stored: Option<&str>, system_prefers_dark: bool) -> bool {
    match stored {
        Some("dark") => true,
        Some("light") => false,
        _ => system_prefers_dark,
    }
}

fn load_theme_from_storage() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
}

fn save_theme_to_storage(is_dark: bool) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme_value(is_dark));
    }
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Toggle the `dark` class on the document element.
fn apply_dark_class(is_dark: bool) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = if is_dark {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
}

/// Dark mode context type.
#[derive(Clone, Copy)]
pub struct DarkModeContext {
    pub is_dark: RwSignal<bool>,
}

impl DarkModeContext {
    /// Flip the mode and persist the new value.
    pub fn toggle(&self) {
        let next = !self.is_dark.get_untracked();
        self.is_dark.set(next);
        save_theme_to_storage(next);
    }
}

/// Provides the dark mode context to children components.
#[component]
pub fn DarkModeProvider(children: Children) -> impl IntoView {
    let initial = initial_dark(load_theme_from_storage().as_deref(), system_prefers_dark());
    let is_dark = RwSignal::new(initial);

    Effect::new(move |_| apply_dark_class(is_dark.get()));

    provide_context(DarkModeContext { is_dark });

    children()
}

/// Hook to use the dark mode context.
pub fn use_dark_mode() -> DarkModeContext {
    use_context::<DarkModeContext>()
        .expect("DarkModeContext not found. Wrap your app with DarkModeProvider.")
}

/// Sun/moon button in the header.
#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let ctx = use_dark_mode();

    view! {
        <button
            class="top-header__icon-btn"
            title=move || if ctx.is_dark.get() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| ctx.toggle()
        >
            {move || {
                if ctx.is_dark.get() {
                    crate::shared::icons::icon("sun")
                } else {
                    crate::shared::icons::icon("moon")
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_value_wins_over_system() {
        assert!(initial_dark(Some("dark"), false));
        assert!(!initial_dark(Some("light"), true));
    }

    #[test]
    fn test_system_preference_fallback() {
        assert!(initial_dark(None, true));
        assert!(!initial_dark(Some("garbage"), false));
    }

    #[test]
    fn test_toggle_values() {
        assert_eq!(theme_value(!initial_dark(Some("light"), true)), "dark");
        assert_eq!(theme_value(!initial_dark(Some("dark"), false)), "light");
    }
}
