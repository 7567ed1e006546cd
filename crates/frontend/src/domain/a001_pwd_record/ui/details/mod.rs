//! Read-only record page: personal, work, disability and guardian sections,
//! uploaded files and the assistance requests logged for the person.

use crate::domain::a001_pwd_record::api;
use crate::domain::a002_assistance_request::api as assistance_api;
use crate::layout::global_context::use_shell;
use crate::shared::api_utils::{avatar_url, media_url};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date, format_optional_date};
use crate::shared::icons::icon;
use contracts::domain::a001_pwd_record::PwdRecord;
use contracts::domain::a002_assistance_request::AssistanceRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

fn text(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("N/A")
        .to_string()
}

#[component]
fn Field(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <p class="details__field">
            <strong>{label}": "</strong>
            {value}
        </p>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PwdRecordDetails() -> impl IntoView {
    let shell = use_shell();
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));

    let (record, set_record) = signal::<Option<PwdRecord>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (assistance, set_assistance) = signal::<Vec<AssistanceRequest>>(Vec::new());
    let (assist_loading, set_assist_loading) = signal(true);

    Effect::new(move |_| {
        let Some(id) = id() else {
            set_loading.set(false);
            set_error.set(Some("Record not found.".to_string()));
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_one(id).await {
                Ok(r) => {
                    let name = r.full_name.clone();
                    set_record.set(Some(r));
                    set_error.set(None);
                    set_loading.set(false);

                    match assistance_api::fetch_for_beneficiary(id, &name).await {
                        Ok(list) => set_assistance.set(list),
                        Err(e) => log::warn!("assistance requests for PWD {}: {}", id, e),
                    }
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_loading.set(false);
                }
            }
            set_assist_loading.set(false);
        });
    });

    let edit_path = move || id().map(|id| shell.page(&format!("pwd-records/{}/edit", id)));

    view! {
        <div class="page">
            <PageHeader title="PWD Details">
                <a class="button button--secondary" href=shell.page("pwd-records")>
                    {icon("arrow-left")}
                    " Back"
                </a>
                {move || edit_path().map(|href| view! {
                    <a class="button button--primary" href=href>
                        {icon("edit")}
                        " Edit"
                    </a>
                })}
            </PageHeader>

            {move || {
                if loading.get() {
                    return view! { <div class="page__loading">"Loading PWD details..."</div> }.into_any();
                }
                if let Some(e) = error.get() {
                    return view! { <div class="error-box">{e}</div> }.into_any();
                }
                let Some(r) = record.get() else {
                    return view! { <div class="error-box">"Record not found."</div> }.into_any();
                };
                let status = r.status();
                view! {
                    <div class="card details">
                        <div class="details__grid">
                            <section>
                                <h3 class="details__heading">"Personal Details"</h3>
                                <Field label="Full Name" value=r.full_name.clone() />
                                <Field label="Gender" value=text(&r.gender_name) />
                                <Field label="Date of Birth" value=format_optional_date(r.date_of_birth.as_deref()) />
                                <Field label="Age" value=r.age.map(|a| a.to_string()).unwrap_or_else(|| "N/A".to_string()) />
                                <Field label="Ghana Card Number" value=text(&r.gh_card_number) />
                                <Field label="NHIS Number" value=text(&r.nhis_number) />
                                <Field label="Contact" value=text(&r.contact) />
                            </section>
                            <section>
                                <h3 class="details__heading">"Work Details"</h3>
                                <Field label="Quarter" value=r.quarter_label() />
                                <Field label="Occupation" value=text(&r.occupation) />
                                <Field label="Community" value=text(&r.community_name) />
                                <Field label="Registration Date" value=r.registration_date() />
                                <Field label="Education Level" value=text(&r.education_level) />
                                <Field label="School Name" value=text(&r.school_name) />
                            </section>
                            <section>
                                <h3 class="details__heading">"Disability Details"</h3>
                                <Field label="Category" value=text(&r.disability_category) />
                                <Field label="Type" value=text(&r.disability_type) />
                                <Field label="Support Needs" value=text(&r.support_needs) />
                            </section>
                            <section>
                                <h3 class="details__heading">"Profile Image"</h3>
                                <img
                                    class="details__photo"
                                    src=avatar_url(&r.full_name, r.profile_image.as_deref())
                                    alt=format!("{}'s profile", r.full_name)
                                />
                            </section>
                        </div>

                        {r.has_guardian().then(|| view! {
                            <section>
                                <h3 class="details__heading">"Guardian Details"</h3>
                                <div class="details__grid">
                                    <Field label="Guardian Name" value=text(&r.guardian_name) />
                                    <Field label="Relationship" value=text(&r.guardian_relationship) />
                                    <Field label="Occupation" value=text(&r.guardian_occupation) />
                                    <Field label="Phone Number" value=text(&r.guardian_phone) />
                                </div>
                            </section>
                        })}

                        <section>
                            <h3 class="details__heading">"Documents"</h3>
                            {if r.supporting_documents.is_empty() {
                                view! { <p class="text-muted">"No documents available"</p> }.into_any()
                            } else {
                                r.supporting_documents.iter().map(|doc| view! {
                                    <div class="document-row">
                                        <span>{icon("file")}" "{doc.name.clone()}</span>
                                        <a href=media_url(&doc.path) target="_blank" rel="noopener noreferrer">
                                            {icon("eye")}
                                            " View"
                                        </a>
                                    </div>
                                }).collect_view().into_any()
                            }}
                        </section>

                        <section>
                            <h3 class="details__heading">"Record Status"</h3>
                            <Badge variant=status.badge_variant().to_string()>{status.label()}</Badge>
                        </section>
                    </div>
                }.into_any()
            }}

            <div class="details__related">
                <h2 class="details__subtitle">"Assistance Requests"</h2>
                {move || {
                    if assist_loading.get() {
                        return view! { <div class="page__loading">"Loading assistance requests..."</div> }.into_any();
                    }
                    let list = assistance.get();
                    if list.is_empty() {
                        return view! { <div class="text-muted">"No assistance requests found."</div> }.into_any();
                    }
                    list.into_iter().map(|req| {
                        let href = shell.page(&format!("assistance/{}", req.request_id));
                        view! {
                            <div class="card assistance-card">
                                <Field label="Type" value=req.type_name().to_string() />
                                <p class="details__field">
                                    <strong>"Status: "</strong>
                                    <Badge variant=req.status.badge_variant().to_string()>{req.status.label()}</Badge>
                                </p>
                                <Field label="Amount" value=req.amount_display() />
                                <Field label="Date Requested" value=req.created_at.as_deref().map(format_date).unwrap_or_default() />
                                <Field label="Description" value=text(&req.description) />
                                <a class="link" href=href>"Open request"</a>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </div>
    }
}
