use crate::domain::a002_assistance_request::api;
use crate::layout::global_context::use_shell;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_optional_date;
use crate::shared::export::{export_list, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput};
use crate::shared::modal::ConfirmDialog;
use crate::shared::toast::use_toast;
use contracts::domain::a002_assistance_request::AssistanceRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

impl CsvExportable for AssistanceRequest {
    fn headers() -> Vec<&'static str> {
        vec!["Date", "Assistance Type", "Beneficiary", "Amount", "Status"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            format_optional_date(self.created_at.as_deref()),
            self.type_name().to_string(),
            self.beneficiary().to_string(),
            self.amount_display(),
            self.status.label().to_string(),
        ]
    }
}

/// Assistance Tracking: every logged request, searchable by type,
/// beneficiary or status.
#[component]
#[allow(non_snake_case)]
pub fn AssistanceList() -> impl IntoView {
    let shell = use_shell();
    let toast = use_toast();

    let (requests, set_requests) = signal::<Vec<AssistanceRequest>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let search = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<i64>);
    let deleting = RwSignal::new(false);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(list) => {
                    set_requests.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::warn!("failed to load assistance requests: {}", e);
                    toast.error(e.to_string());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let filtered = Memo::new(move |_| {
        let query = search.get();
        requests.with(|all| filter_list(all, &query))
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        spawn_local(async move {
            match api::delete(id).await {
                Ok(ack) => {
                    set_requests.update(|list| list.retain(|r| r.request_id != id));
                    toast.success(ack.message_or("Deleted successfully!"));
                }
                Err(e) => toast.error(e.to_string()),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    });

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Assistance Tracking" subtitle="Monitor assistance requests and their status">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        if let Err(e) = export_list(&filtered.get_untracked(), "assistance_requests.csv") {
                            toast.error(e);
                        }
                    }
                >
                    {icon("download")}
                    " Export"
                </Button>
                <a class="button button--primary" href=shell.page("log-assistance")>
                    {icon("plus-circle")}
                    " Log Assistance"
                </a>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}

            <div class="filter-bar">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |v: String| search.set(v))
                    placeholder="Search by type, beneficiary or status..."
                />
            </div>

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell>"Assistance Type"</TableHeaderCell>
                            <TableHeaderCell>"Beneficiary"</TableHeaderCell>
                            <TableHeaderCell>"Amount"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <tr><td class="table__cell--empty" colspan="6">"Loading..."</td></tr>
                                }.into_any();
                            }
                            let rows = filtered.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr><td class="table__cell--empty" colspan="6">"No assistance requests found."</td></tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|req| {
                                let id = req.request_id;
                                let view_path = shell.page(&format!("assistance/{}", id));
                                let edit_path = shell.page(&format!("assistance/{}/edit", id));
                                let logged = format_optional_date(req.created_at.as_deref());
                                let type_name = req.type_name().to_string();
                                let beneficiary = req.beneficiary().to_string();
                                let amount = req.amount_display();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{logged}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{type_name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{beneficiary}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{amount}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <Badge variant=req.status.badge_variant().to_string()>{req.status.label()}</Badge>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <a class="icon-btn" title="View" href=view_path>{icon("eye")}</a>
                                                <a class="icon-btn" title="Edit" href=edit_path>{icon("edit")}</a>
                                                <button class="icon-btn icon-btn--danger" title="Delete" on:click=move |_| pending_delete.set(Some(id))>
                                                    {icon("trash")}
                                                </button>
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view().into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Are you sure?"
                    message="This assistance request will be permanently deleted."
                    confirm_label="Yes, delete it!"
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                    busy=deleting
                />
            </Show>
        </div>
    }
}
