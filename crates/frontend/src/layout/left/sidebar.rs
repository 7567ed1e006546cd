//! Role menu with active-item highlighting.

use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::layout::global_context::use_shell;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    /// Path relative to the role's dashboard root, "" for the home page
    pub relative: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn item(relative: &'static str, label: &'static str, icon: &'static str) -> MenuItem {
    MenuItem {
        relative,
        label,
        icon,
    }
}

pub fn menu_items(role: Role) -> Vec<MenuItem> {
    let mut items = vec![
        item("", "Dashboard", "dashboard"),
        item("register-pwd", "Register PWD", "user-plus"),
        item("pwd-records", "PWD Records", "records"),
        item("assistance", "Assistance Tracking", "assistance"),
        item("log-assistance", "Log Assistance", "plus-circle"),
    ];
    if role == Role::Admin {
        items.push(item("reports", "Reports", "reports"));
        items.push(item("users", "User Management", "users"));
        items.push(item("settings", "Settings", "settings"));
    }
    items.push(item("profile", "Profile", "user"));
    items
}

/// The home entry matches only itself; the others also match their sub-pages.
pub fn is_active(pathname: &str, href: &str, is_home: bool) -> bool {
    let pathname = pathname.trim_end_matches('/');
    if is_home {
        pathname == href
    } else {
        pathname == href || pathname.starts_with(&format!("{}/", href))
    }
}

#[component]
pub fn Sidebar(role: Role) -> impl IntoView {
    let shell = use_shell();
    let pathname = use_location().pathname;

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <span class="app-sidebar__logo">"DMS"</span>
                <span class="app-sidebar__portal">{format!("{} Portal", role.label())}</span>
            </div>
            <nav>
                {menu_items(role).into_iter().map(|entry| {
                    let href = role.page(entry.relative);
                    let href_for_active = href.clone();
                    let is_home = entry.relative.is_empty();
                    view! {
                        <a
                            href=href
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                pathname.with(|p| is_active(p, &href_for_active, is_home))
                            }
                            on:click=move |_| shell.close_sidebar()
                        >
                            <div class="app-sidebar__item-content">
                                {icon(entry.icon)}
                                <span>{entry.label}</span>
                            </div>
                        </a>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: Role) -> Vec<&'static str> {
        menu_items(role).into_iter().map(|i| i.label).collect()
    }

    #[test]
    fn test_admin_menu() {
        assert_eq!(
            labels(Role::Admin),
            vec![
                "Dashboard",
                "Register PWD",
                "PWD Records",
                "Assistance Tracking",
                "Log Assistance",
                "Reports",
                "User Management",
                "Settings",
                "Profile"
            ]
        );
    }

    #[test]
    fn test_officer_menu_has_no_admin_pages() {
        let officer = labels(Role::Officer);
        assert_eq!(officer.len(), 6);
        assert!(!officer.contains(&"Settings"));
        assert_eq!(officer.last(), Some(&"Profile"));
    }

    #[test]
    fn test_active_item() {
        let home = "/admin-dashboard";
        assert!(is_active("/admin-dashboard/", home, true));
        assert!(!is_active("/admin-dashboard/pwd-records", home, true));
        assert!(is_active(
            "/admin-dashboard/pwd-records/12/edit",
            "/admin-dashboard/pwd-records",
            false
        ));
        assert!(!is_active(
            "/admin-dashboard/pwd-records-archive",
            "/admin-dashboard/pwd-records",
            false
        ));
    }
}
