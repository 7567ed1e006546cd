use crate::domain::a001_pwd_record::api;
use crate::layout::global_context::use_shell;
use crate::shared::api_utils::avatar_url;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Badge;
use crate::shared::export::{export_list, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::toast::use_toast;
use contracts::domain::a001_pwd_record::{
    distinct_communities, distinct_quarters, PwdListFilter, PwdRecord,
};
use contracts::shared::quarter::display_code;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

impl CsvExportable for PwdRecord {
    fn headers() -> Vec<&'static str> {
        vec![
            "Full Name",
            "Quarter",
            "Gender",
            "Community",
            "Disability Type",
            "Registration Date",
            "Status",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.quarter_label(),
            self.gender_name.clone().unwrap_or_default(),
            self.community_name.clone().unwrap_or_default(),
            self.disability_type.clone().unwrap_or_default(),
            self.registration_date(),
            self.status().label().to_string(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PwdRecordList() -> impl IntoView {
    let shell = use_shell();
    let toast = use_toast();

    let (records, set_records) = signal::<Vec<PwdRecord>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let page = RwSignal::new(1_i64);
    let total_pages = RwSignal::new(1_i64);
    let filter = RwSignal::new(PwdListFilter::default());
    let pending_delete = RwSignal::new(None::<i64>);
    let deleting = RwSignal::new(false);

    let fetch = move |p: i64| {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_page(p).await {
                Ok(result) => {
                    set_records.set(result.items);
                    total_pages.set(result.total_pages.max(1));
                    set_error.set(None);
                }
                Err(e) => {
                    log::warn!("failed to load PWD records page {}: {}", p, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let change_page = Callback::new(move |p: i64| {
        if p < 1 || p > total_pages.get_untracked() {
            return;
        }
        page.set(p);
        fetch(p);
    });

    let filtered = Memo::new(move |_| {
        let f = filter.get();
        records.with(|all| f.apply(all).into_iter().cloned().collect::<Vec<_>>())
    });
    let quarters = Memo::new(move |_| records.with(|all| distinct_quarters(all)));
    let communities = Memo::new(move |_| records.with(|all| distinct_communities(all)));

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        spawn_local(async move {
            match api::delete(id).await {
                Ok(ack) => {
                    set_records.update(|list| list.retain(|r| r.pwd_id != id));
                    toast.success(ack.message_or("Record deleted successfully"));
                }
                Err(e) => toast.error(e.to_string()),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    });

    let export = move |_| {
        if let Err(e) = export_list(&filtered.get_untracked(), "pwd_records.csv") {
            toast.error(e);
        }
    };

    fetch(1);

    view! {
        <div class="page">
            <PageHeader title="PWD Records" subtitle="View and manage disability records">
                <Button appearance=ButtonAppearance::Secondary on_click=export>
                    {icon("download")}
                    " Export"
                </Button>
                <a class="button button--primary" href=shell.page("register-pwd")>
                    {icon("user-plus")}
                    " Register PWD"
                </a>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}

            <div class="filter-bar">
                <input
                    class="form__input"
                    placeholder="Search name, Ghana Card..."
                    prop:value=move || filter.get().search
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class="form__select"
                    prop:value=move || filter.get().quarter
                    on:change=move |ev| filter.update(|f| f.quarter = event_target_value(&ev))
                >
                    <option value="">"All Quarters"</option>
                    {move || quarters.get().into_iter().map(|q| {
                        let label = display_code(&q);
                        view! { <option value=q>{label}</option> }
                    }).collect_view()}
                </select>
                <select
                    class="form__select"
                    prop:value=move || filter.get().community
                    on:change=move |ev| filter.update(|f| f.community = event_target_value(&ev))
                >
                    <option value="">"All Communities"</option>
                    {move || communities.get().into_iter().map(|c| {
                        view! { <option value=c.clone()>{c.clone()}</option> }
                    }).collect_view()}
                </select>
            </div>

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Profile"</TableHeaderCell>
                            <TableHeaderCell>"Full Name"</TableHeaderCell>
                            <TableHeaderCell>"Quarter"</TableHeaderCell>
                            <TableHeaderCell>"Gender"</TableHeaderCell>
                            <TableHeaderCell>"Community"</TableHeaderCell>
                            <TableHeaderCell>"Disability Type"</TableHeaderCell>
                            <TableHeaderCell>"Registration Date"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <tr>
                                        <td class="table__cell--empty" colspan="9">"Loading..."</td>
                                    </tr>
                                }.into_any();
                            }
                            let rows = filtered.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="table__cell--empty" colspan="9">"No records found."</td>
                                    </tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|record| {
                                let id = record.pwd_id;
                                let status = record.status();
                                let avatar = avatar_url(&record.full_name, record.profile_image.as_deref());
                                let view_path = shell.page(&format!("pwd-records/{}", id));
                                let edit_path = shell.page(&format!("pwd-records/{}/edit", id));
                                let full_name = record.full_name.clone();
                                let alt_text = record.full_name.clone();
                                let quarter = record.quarter_label();
                                let gender = record.gender_name.clone().unwrap_or_default();
                                let community = record.community_name.clone().unwrap_or_default();
                                let disability = record.disability_type.clone().unwrap_or_default();
                                let registered = record.registration_date();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <img class="avatar" src=avatar alt=alt_text />
                                        </TableCell>
                                        <TableCell><TableCellLayout>{full_name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{quarter}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{gender}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{community}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{disability}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{registered}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <Badge variant=status.badge_variant().to_string()>{status.label()}</Badge>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <a class="icon-btn" title="View" href=view_path>
                                                    {icon("eye")}
                                                </a>
                                                <a class="icon-btn" title="Edit" href=edit_path>
                                                    {icon("edit")}
                                                </a>
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

            <PaginationControls
                current_page=page
                total_pages=total_pages
                on_page_change=change_page
            />

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Record"
                    message="Are you sure you want to delete this record? This action cannot be undone."
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                    busy=deleting
                />
            </Show>
        </div>
    }
}
