use contracts::dashboards::d400_overview::DashboardTotals;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d400_overview::api;
use crate::layout::global_context::use_shell;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

const CARD_ICONS: [&str; 3] = ["users", "user-plus", "assistance"];

#[component]
pub fn DashboardHome() -> impl IntoView {
    let shell = use_shell();
    let session = use_session();
    let (totals, set_totals) = signal(DashboardTotals::default());
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_totals().await {
                Ok(t) => set_totals.set(t),
                Err(e) => {
                    log::error!("Failed to load dashboard totals: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let username = move || {
        session
            .user
            .with(|u| u.as_ref().map(|u| u.display_name()).unwrap_or_default())
    };

    view! {
        <div class="page">
            <div class="card welcome">
                <h1 class="welcome__title">{move || format!("Welcome back, {}!", username())}</h1>
                <p class="welcome__text">
                    "Here's an overview of your services and requests. We're here to support you every step of the way."
                </p>
            </div>

            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}

            <div class="stat-grid">
                {move || {
                    totals
                        .get()
                        .cards()
                        .into_iter()
                        .zip(CARD_ICONS)
                        .map(|(card, icon_name)| view! { <StatCard card=card icon_name=icon_name /> })
                        .collect_view()
                }}
            </div>

            <div class="card quick-actions">
                <h3 class="card__title">"Quick Actions"</h3>
                <p class="card__subtitle">"Common tasks and shortcuts"</p>
                <a class="quick-actions__item" href=shell.page("register-pwd")>
                    <span class="quick-actions__icon">{icon("user-plus")}</span>
                    <span>
                        <strong>"Register a new PWD"</strong>
                        <small>"Add a new person with disability to the records"</small>
                    </span>
                </a>
                <a class="quick-actions__item" href=shell.page("pwd-records")>
                    <span class="quick-actions__icon">{icon("users")}</span>
                    <span>
                        <strong>"View PWD Records"</strong>
                        <small>"Browse and manage all PWD records"</small>
                    </span>
                </a>
            </div>
        </div>
    }
}
