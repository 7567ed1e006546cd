use contracts::system::auth::Role;
use leptos::prelude::*;

/// Dashboard-wide UI state shared by the header, the sidebar and the pages.
#[derive(Clone, Copy)]
pub struct ShellContext {
    /// Portal the dashboard was opened for; page links are built from it.
    pub role: Role,
    /// Sidebar visibility on small screens; always shown on wide ones via CSS.
    pub sidebar_open: RwSignal<bool>,
}

impl ShellContext {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            sidebar_open: RwSignal::new(false),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn close_sidebar(&self) {
        self.sidebar_open.set(false);
    }

    /// Absolute path of a dashboard page, e.g. `page("pwd-records/3")`.
    pub fn page(&self, relative: &str) -> String {
        self.role.page(relative)
    }
}

pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>().expect("ShellContext not found")
}
