use crate::domain::a001_pwd_record::api as pwd_api;
use crate::domain::a002_assistance_request::api;
use crate::domain::reference::{fetch_items, select_options};
use crate::layout::global_context::use_shell;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_session;
use contracts::domain::a001_pwd_record::PwdRecord;
use contracts::domain::a002_assistance_request::{BeneficiarySnapshot, LogAssistanceForm};
use contracts::domain::common::{ReferenceItem, ReferenceKind};
use contracts::shared::api::ApiError;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn beneficiary_options(records: &[PwdRecord]) -> Vec<(String, String)> {
    records
        .iter()
        .map(|r| (r.pwd_id.to_string(), r.full_name.clone()))
        .collect()
}

/// Log a new assistance request for a registered PWD. Picking the
/// beneficiary shows their details read-only.
#[component]
#[allow(non_snake_case)]
pub fn LogAssistancePage() -> impl IntoView {
    let shell = use_shell();
    let toast = use_toast();
    let session = use_session();

    let form = RwSignal::new(LogAssistanceForm::default());
    let snapshot = RwSignal::new(BeneficiarySnapshot::default());
    let assistance_types = RwSignal::new(Vec::<ReferenceItem>::new());
    let beneficiaries = RwSignal::new(Vec::<PwdRecord>::new());
    let submitting = RwSignal::new(false);

    spawn_local(async move {
        match fetch_items(ReferenceKind::Assistance, None).await {
            Ok(items) => assistance_types.set(items),
            Err(e) => log::warn!("failed to load assistance types: {}", e),
        }
    });
    spawn_local(async move {
        match pwd_api::fetch_all().await {
            Ok(records) => beneficiaries.set(records),
            Err(e) => log::warn!("failed to load beneficiaries: {}", e),
        }
    });

    let select_beneficiary = Callback::new(move |value: String| {
        form.update(|f| f.beneficiary_id = value.clone());
        snapshot.set(BeneficiarySnapshot::default());
        let Ok(id) = value.parse::<i64>() else {
            return;
        };
        spawn_local(async move {
            match pwd_api::fetch_one(id).await {
                Ok(record) => snapshot.set(BeneficiarySnapshot::from_record(&record)),
                Err(e) => {
                    // Fall back to the list entry when the detail call fails.
                    log::warn!("beneficiary {} details: {}", id, e);
                    if let Some(record) =
                        beneficiaries.with_untracked(|all| all.iter().find(|r| r.pwd_id == id).cloned())
                    {
                        snapshot.set(BeneficiarySnapshot::from_record(&record));
                    }
                }
            }
        });
    });

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let dto = session
            .user_id()
            .ok_or(ApiError::NotAuthenticated)
            .and_then(|user_id| form.with_untracked(|f| f.to_dto(user_id)));
        let dto = match dto {
            Ok(dto) => dto,
            Err(e) => {
                toast.error(e.to_string());
                return;
            }
        };
        submitting.set(true);
        spawn_local(async move {
            match api::create(&dto).await {
                Ok(ack) => {
                    toast.success(ack.message_or("Assistance request logged successfully."));
                    form.set(LogAssistanceForm::default());
                    snapshot.set(BeneficiarySnapshot::default());
                }
                Err(e) => toast.error(e.to_string()),
            }
            submitting.set(false);
        });
    };

    let snapshot_field = |label: &'static str, get: fn(&BeneficiarySnapshot) -> String| {
        view! {
            <Input
                label=label
                value=Signal::derive(move || snapshot.with(get))
                readonly=true
            />
        }
    };

    view! {
        <div class="page page--narrow">
            <PageHeader title="Log New Assistance" subtitle="Record support provided to a beneficiary">
                <a class="button button--secondary" href=shell.page("assistance")>
                    {icon("arrow-left")}
                    " Back"
                </a>
            </PageHeader>

            <form class="card form" on:submit=submit>
                <Select
                    label="Assistance Type"
                    value=Signal::derive(move || form.with(|f| f.assistance_type_id.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.assistance_type_id = v))
                    options=Signal::derive(move || assistance_types.with(|a| select_options(a)))
                    placeholder="Select assistance type"
                    required=true
                    id="assistance_type"
                />
                <Select
                    label="Beneficiary"
                    value=Signal::derive(move || form.with(|f| f.beneficiary_id.clone()))
                    on_change=select_beneficiary
                    options=Signal::derive(move || beneficiaries.with(|b| beneficiary_options(b)))
                    placeholder="Select beneficiary"
                    required=true
                    id="beneficiary"
                />

                <div class="form__grid">
                    {snapshot_field("Gender", |s| s.gender.clone())}
                    {snapshot_field("Contact", |s| s.contact.clone())}
                    {snapshot_field("Quarter", |s| s.quarter.clone())}
                    {snapshot_field("Disability Category", |s| s.disability_category.clone())}
                    {snapshot_field("Disability Type", |s| s.disability_type.clone())}
                </div>

                <Input
                    label="Amount Needed"
                    input_type="number"
                    value=Signal::derive(move || form.with(|f| f.amount.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.amount = v))
                    placeholder="0.00"
                    required=true
                    id="amount"
                />
                <Textarea
                    label="Description"
                    value=Signal::derive(move || form.with(|f| f.description.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.description = v))
                    placeholder="Describe the assistance needed..."
                    required=true
                    rows=4
                    id="description"
                />

                <div class="form__actions">
                    <button type="submit" class="button button--primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Submitting..." } else { "Submit Request" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beneficiary_options_use_pwd_ids() {
        let records = vec![
            PwdRecord {
                pwd_id: 4,
                full_name: "Ama Mensah".to_string(),
                ..Default::default()
            },
            PwdRecord {
                pwd_id: 9,
                full_name: "Kofi Boateng".to_string(),
                ..Default::default()
            },
        ];
        assert_eq!(
            beneficiary_options(&records),
            vec![
                ("4".to_string(), "Ama Mensah".to_string()),
                ("9".to_string(), "Kofi Boateng".to_string()),
            ]
        );
    }
}
