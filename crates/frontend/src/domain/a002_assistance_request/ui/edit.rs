use crate::domain::a002_assistance_request::api;
use crate::layout::global_context::use_shell;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a002_assistance_request::{
    AssistanceRequest, AssistanceStatus, StatusUpdateDto,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

/// Quick status change without a note.
#[component]
#[allow(non_snake_case)]
pub fn EditAssistanceRequest() -> impl IntoView {
    let shell = use_shell();
    let toast = use_toast();
    let request_id = use_params_map()
        .get_untracked()
        .get("id")
        .and_then(|v| v.parse::<i64>().ok());

    let (request, set_request) = signal::<Option<AssistanceRequest>>(None);
    let (loading, set_loading) = signal(true);
    let updating = RwSignal::new(false);

    if let Some(id) = request_id {
        spawn_local(async move {
            match api::fetch_one(id).await {
                Ok(r) => set_request.set(Some(r)),
                Err(e) => log::warn!("failed to load assistance request {}: {}", id, e),
            }
            set_loading.set(false);
        });
    } else {
        set_loading.set(false);
    }

    let update_status = move |status: AssistanceStatus| {
        let Some(id) = request_id else {
            return;
        };
        updating.set(true);
        spawn_local(async move {
            match api::update_status(id, &StatusUpdateDto::status_only(status)).await {
                Ok(_) => {
                    set_request.update(|r| {
                        if let Some(r) = r {
                            r.status = status;
                        }
                    });
                    toast.success(format!("Status updated to {}!", status.label()));
                }
                Err(e) => toast.error(e.to_string()),
            }
            updating.set(false);
        });
    };

    view! {
        <div class="page page--narrow">
            <PageHeader title="Edit Assistance Request">
                <a class="button button--secondary" href=shell.page("assistance")>
                    {icon("arrow-left")}
                    " Back"
                </a>
            </PageHeader>
            {move || {
                if loading.get() {
                    return view! { <div class="page__loading">"Loading..."</div> }.into_any();
                }
                let Some(r) = request.get() else {
                    return view! { <div class="error-box">"Request not found."</div> }.into_any();
                };
                view! {
                    <div class="card details">
                        <p class="details__field"><strong>"Beneficiary: "</strong>{r.beneficiary().to_string()}</p>
                        <p class="details__field"><strong>"Type: "</strong>{r.type_name().to_string()}</p>
                        <p class="details__field"><strong>"Amount: "</strong>{r.amount_display()}</p>
                        <p class="details__field">
                            <strong>"Status: "</strong>
                            <Badge variant=r.status.badge_variant().to_string()>{r.status.label()}</Badge>
                        </p>
                        <p class="details__field"><strong>"Date: "</strong>{format_optional_date(r.created_at.as_deref())}</p>
                    </div>
                    <div class="status-actions">
                        {AssistanceStatus::editable().into_iter().map(|status| {
                            let current = r.status == status;
                            view! {
                                <button
                                    class="button"
                                    class:button--primary=current
                                    class:button--secondary=!current
                                    disabled=move || current || updating.get()
                                    on:click=move |_| update_status(status)
                                >
                                    {status.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
