pub mod global_context;
pub mod left;
pub mod top_header;

use contracts::system::auth::Role;
use global_context::ShellContext;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use top_header::TopHeader;

/// Dashboard shell for one role.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |    Outlet (nested route)      |
/// +------------------------------------------+
/// ```
#[component]
pub fn DashboardShell(role: Role) -> impl IntoView {
    provide_context(ShellContext::new(role));

    view! {
        <div class="app-layout">
            <TopHeader role=role />
            <div class="app-body">
                <left::Left>
                    <left::Sidebar role=role />
                </left::Left>
                <main class="app-main">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
