use crate::domain::a002_assistance_request::api;
use crate::layout::global_context::use_shell;
use crate::shared::api_utils::media_url;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::modal::NoteDialog;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_session;
use contracts::domain::a002_assistance_request::{
    AssistanceRequest, AssistanceStatus, StatusUpdateDto,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::{Button, ButtonAppearance};

#[component]
fn InfoTile(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <div class="info-tile">
            <p class="info-tile__label">{label}</p>
            <div class="info-tile__value">{children()}</div>
        </div>
    }
}

/// Request details with the assessment workflow: every status change asks
/// for a note, which is stored as the admin review note.
#[component]
#[allow(non_snake_case)]
pub fn AssistanceDetails() -> impl IntoView {
    let shell = use_shell();
    let toast = use_toast();
    let session = use_session();
    let params = use_params_map();
    let request_id = params
        .get_untracked()
        .get("id")
        .and_then(|v| v.parse::<i64>().ok());

    let (request, set_request) = signal::<Option<AssistanceRequest>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let target_status = RwSignal::new(None::<AssistanceStatus>);
    let updating = RwSignal::new(false);

    let load = move || {
        let Some(id) = request_id else {
            set_loading.set(false);
            set_error.set(Some("Request not found.".to_string()));
            return;
        };
        spawn_local(async move {
            match api::fetch_one(id).await {
                Ok(r) => {
                    set_request.set(Some(r));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    let submit_note = Callback::new(move |note: String| {
        let (Some(id), Some(status)) = (request_id, target_status.get_untracked()) else {
            return;
        };
        let Some(user_id) = session.user_id() else {
            toast.error("Not authenticated. Please log in again.");
            return;
        };
        updating.set(true);
        spawn_local(async move {
            let dto = StatusUpdateDto::with_note(status, &note, user_id);
            match api::update_status(id, &dto).await {
                Ok(_) => {
                    toast.success(format!("Assessment {}", status.label()));
                    log::info!("assistance request {} set to {}", id, status.code());
                    set_request.update(|r| {
                        if let Some(r) = r {
                            r.status = status;
                            r.admin_review_notes = Some(note.trim().to_string());
                        }
                    });
                }
                Err(e) => toast.error(e.to_string()),
            }
            updating.set(false);
            target_status.set(None);
        });
    });

    load();

    view! {
        <div class="page page--narrow">
            <PageHeader title="Assistance Details">
                <a class="button button--secondary" href=shell.page("assistance")>
                    {icon("arrow-left")}
                    " Back"
                </a>
            </PageHeader>

            {move || {
                if loading.get() {
                    return view! { <div class="page__loading">"Loading..."</div> }.into_any();
                }
                if let Some(e) = error.get() {
                    return view! { <div class="error-box">{e}</div> }.into_any();
                }
                let Some(r) = request.get() else {
                    return view! { <div class="error-box">"Request not found."</div> }.into_any();
                };
                let logged = r.created_at.as_deref().map(format_datetime).unwrap_or_else(|| "N/A".to_string());
                let type_name = r.type_name().to_string();
                let beneficiary = r.beneficiary().to_string();
                let amount = r.amount_display();
                let description = r.description.clone().unwrap_or_else(|| "No description provided.".to_string());
                let notes = r.admin_review_notes.clone().filter(|n| !n.trim().is_empty()).unwrap_or_else(|| "No notes available.".to_string());
                view! {
                    <div class="card details">
                        <h3 class="details__heading">"Basic Information"</h3>
                        <div class="details__grid">
                            <InfoTile label="Logged">{logged}</InfoTile>
                            <InfoTile label="Assistance Type">{type_name}</InfoTile>
                            <InfoTile label="Beneficiary">{beneficiary}</InfoTile>
                            <InfoTile label="Amount">{amount}</InfoTile>
                        </div>
                        <InfoTile label="Description">
                            {description}
                        </InfoTile>

                        <h3 class="details__heading">"Assessment Details"</h3>
                        <InfoTile label="Assessment Status">
                            <Badge variant=r.status.badge_variant().to_string()>{r.status.label()}</Badge>
                        </InfoTile>
                        <InfoTile label="Assessment Notes">
                            {notes}
                        </InfoTile>

                        <h3 class="details__heading">"Supporting Documents"</h3>
                        {if r.supporting_documents.is_empty() {
                            view! { <p class="text-muted">"No documents available"</p> }.into_any()
                        } else {
                            view! {
                                <ul class="document-list">
                                    {r.supporting_documents.iter().map(|doc| view! {
                                        <li>
                                            {icon("file")}
                                            <a href=media_url(&doc.path) target="_blank" rel="noopener noreferrer">{doc.name.clone()}</a>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            }.into_any()
                        }}
                    </div>
                }.into_any()
            }}

            <Show when=move || request.with(|r| r.is_some())>
                <div class="status-actions">
                    {AssistanceStatus::all().into_iter().map(|status| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            class=format!("status-btn status-btn--{}", status.code())
                            disabled=Signal::derive(move || {
                                updating.get() || request.with(|r| r.as_ref().is_some_and(|r| r.status == status))
                            })
                            on_click=move |_| target_status.set(Some(status))
                        >
                            {format!("Set to {}", status.label())}
                        </Button>
                    }).collect_view()}
                </div>
            </Show>

            {move || target_status.get().map(|status| view! {
                <NoteDialog
                    title=format!("Add a note for changing status to \"{}\"", status.label())
                    placeholder="Enter your notes here..."
                    submit_label="Update Status"
                    on_submit=submit_note
                    on_cancel=Callback::new(move |_| target_status.set(None))
                    busy=updating
                />
            })}
        </div>
    }
}
