use super::view_model::PwdFormViewModel;
use crate::domain::reference::select_options;
use crate::layout::global_context::use_shell;
use crate::shared::api_utils::avatar_url;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{FileInput, Input, Select, Textarea};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_session;
use chrono::Datelike;
use contracts::domain::a001_pwd_record::{
    FormMode, PwdRecordForm, RegistrationStatus, EDUCATION_LEVELS,
};
use contracts::domain::a007_gender::Gender;
use contracts::shared::quarter::Quarter;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::rc::Rc;
use web_sys::File;

fn value_of(vm: PwdFormViewModel, get: fn(&PwdRecordForm) -> &String) -> Signal<String> {
    Signal::derive(move || vm.form.with(|f| get(f).clone()))
}

fn setter(vm: PwdFormViewModel, set: fn(&mut PwdRecordForm) -> &mut String) -> Callback<String> {
    Callback::new(move |v: String| vm.form.update(|f| *set(f) = v))
}

fn static_options(values: &[&str]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.to_string(), v.to_string())).collect()
}

#[component]
#[allow(non_snake_case)]
pub fn RegisterPwdPage() -> impl IntoView {
    let shell = use_shell();
    let toast = use_toast();
    let vm = PwdFormViewModel::new(FormMode::Create, None);
    vm.load_reference_data();

    let on_saved: Rc<dyn Fn(String)> = Rc::new(move |message| {
        toast.success(message);
        vm.reset();
    });

    view! {
        <div class="page">
            <PageHeader title="Register PWD" subtitle="Add a person with disability to the registry">
                <a class="button button--secondary" href=shell.page("")>
                    {icon("arrow-left")}
                    " Back"
                </a>
            </PageHeader>
            <PwdForm vm=vm on_saved=on_saved submit_label="Register PWD" />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EditPwdRecordPage() -> impl IntoView {
    let shell = use_shell();
    let toast = use_toast();
    let navigate = use_navigate();
    let record_id = use_params_map()
        .get_untracked()
        .get("id")
        .and_then(|v| v.parse::<i64>().ok());

    let vm = PwdFormViewModel::new(FormMode::Edit, record_id);
    vm.load_reference_data();
    vm.load_if_needed();
    if record_id.is_none() {
        vm.loading.set(false);
        vm.error.set(Some("Record not found.".to_string()));
    }

    let details_path = record_id
        .map(|id| shell.page(&format!("pwd-records/{}", id)))
        .unwrap_or_else(|| shell.page("pwd-records"));
    let back_path = details_path.clone();
    let on_saved: Rc<dyn Fn(String)> = Rc::new(move |message| {
        toast.success(message);
        navigate(&details_path, Default::default());
    });

    view! {
        <div class="page">
            <PageHeader title="Edit PWD Record" subtitle="Update the registration details">
                <a class="button button--secondary" href=back_path>
                    {icon("arrow-left")}
                    " Back"
                </a>
            </PageHeader>
            {move || vm.loading.get().then(|| view! { <div class="page__loading">"Loading record..."</div> })}
            <PwdForm vm=vm on_saved=on_saved submit_label="Save Changes" />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn PwdForm(
    vm: PwdFormViewModel,
    on_saved: Rc<dyn Fn(String)>,
    #[prop(into)] submit_label: String,
) -> impl IntoView {
    let session = use_session();
    let is_edit = vm.mode == FormMode::Edit;

    let quarter_options = Signal::derive(move || {
        let year = vm
            .form
            .with(|f| f.year.trim().parse::<i32>().ok())
            .unwrap_or_else(|| today().year());
        Quarter::all()
            .iter()
            .map(|q| (q.code().to_string(), q.label_with_year(year)))
            .collect::<Vec<_>>()
    });
    let gender_options = Signal::derive(|| {
        Gender::all()
            .iter()
            .map(|g| (g.gender_id.to_string(), g.name.to_string()))
            .collect::<Vec<_>>()
    });
    let community_options = Signal::derive(move || vm.communities.with(|c| select_options(c)));
    let category_options = Signal::derive(move || vm.categories.with(|c| select_options(c)));
    let type_options = Signal::derive(move || vm.types.with(|t| select_options(t)));
    let assistance_options = Signal::derive(move || vm.assistance_types.with(|a| select_options(a)));
    let education_options = Signal::derive(|| static_options(&EDUCATION_LEVELS));
    let status_options = Signal::derive(|| {
        RegistrationStatus::all()
            .iter()
            .map(|s| (s.code().to_string(), s.label().to_string()))
            .collect::<Vec<_>>()
    });

    let max_dob = today().format("%Y-%m-%d").to_string();
    let no_category = Signal::derive(move || vm.form.with(|f| f.disability_category_id.is_empty()));
    let image_names = Signal::derive(move || {
        vm.profile_image
            .with(|img| img.as_ref().map(|f| vec![f.name()]).unwrap_or_default())
    });
    let document_names = Signal::derive(move || vm.document_names());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if vm.saving.get_untracked() {
            return;
        }
        vm.save_command(session.user_id(), on_saved.clone());
    };

    view! {
        <form class="card form" on:submit=submit>
            {move || vm.error.get().map(|e| view! { <div class="error-box">{e}</div> })}

            <h3 class="form__section-title">"Registration"</h3>
            <div class="form__grid">
                <Select
                    label="Quarter"
                    value=value_of(vm, |f| &f.quarter)
                    on_change=setter(vm, |f| &mut f.quarter)
                    options=quarter_options
                    placeholder="Select Quarter"
                    required=true
                    id="quarter"
                />
                <Input
                    label="Year"
                    input_type="number"
                    value=value_of(vm, |f| &f.year)
                    on_input=setter(vm, |f| &mut f.year)
                    placeholder=today().year().to_string()
                    id="year"
                />
                {is_edit.then(|| view! {
                    <Select
                        label="Status"
                        value=value_of(vm, |f| &f.status)
                        on_change=setter(vm, |f| &mut f.status)
                        options=status_options
                        id="status"
                    />
                })}
            </div>

            <h3 class="form__section-title">"Personal Details"</h3>
            <div class="form__grid">
                <Input
                    label="Full Name"
                    value=value_of(vm, |f| &f.full_name)
                    on_input=setter(vm, |f| &mut f.full_name)
                    required=true
                    id="full_name"
                />
                <Select
                    label="Gender"
                    value=value_of(vm, |f| &f.gender_id)
                    on_change=setter(vm, |f| &mut f.gender_id)
                    options=gender_options
                    placeholder="Select Gender"
                    required=true
                    id="gender"
                />
                <Input
                    label="Contact Number"
                    input_type="tel"
                    value=value_of(vm, |f| &f.contact)
                    on_input=setter(vm, |f| &mut f.contact)
                    id="contact"
                />
                <Input
                    label="Date of Birth"
                    input_type="date"
                    value=value_of(vm, |f| &f.dob)
                    on_input=Callback::new(move |v| vm.set_dob(v))
                    max=max_dob
                    required=true
                    id="dob"
                />
                <Input
                    label="Age"
                    input_type="number"
                    value=value_of(vm, |f| &f.age)
                    on_input=Callback::new(move |v| vm.set_age(v))
                    id="age"
                />
                <Input
                    label="Occupation"
                    value=value_of(vm, |f| &f.occupation)
                    on_input=setter(vm, |f| &mut f.occupation)
                    id="occupation"
                />
                <Input
                    label="Ghana Card Number"
                    value=value_of(vm, |f| &f.gh_card_number)
                    on_input=setter(vm, |f| &mut f.gh_card_number)
                    placeholder="GHA-000000000-0"
                    id="gh_card_number"
                />
                <Input
                    label="NHIS Number"
                    value=value_of(vm, |f| &f.nhis_number)
                    on_input=setter(vm, |f| &mut f.nhis_number)
                    id="nhis_number"
                />
                <Select
                    label="Community"
                    value=value_of(vm, |f| &f.community_id)
                    on_change=setter(vm, |f| &mut f.community_id)
                    options=community_options
                    placeholder="Select Community"
                    required=true
                    id="community"
                />
            </div>

            <Show when=move || vm.is_minor()>
                <h3 class="form__section-title">"Guardian Details"</h3>
                <div class="form__grid">
                    <Input
                        label="Guardian Name"
                        value=value_of(vm, |f| &f.guardian_name)
                        on_input=setter(vm, |f| &mut f.guardian_name)
                        required=true
                        id="guardian_name"
                    />
                    <Input
                        label="Guardian Occupation"
                        value=value_of(vm, |f| &f.guardian_occupation)
                        on_input=setter(vm, |f| &mut f.guardian_occupation)
                        required=true
                        id="guardian_occupation"
                    />
                    <Input
                        label="Guardian Phone Number"
                        input_type="tel"
                        value=value_of(vm, |f| &f.guardian_phone)
                        on_input=setter(vm, |f| &mut f.guardian_phone)
                        required=true
                        id="guardian_phone"
                    />
                    <Input
                        label="Guardian Relationship"
                        value=value_of(vm, |f| &f.guardian_relationship)
                        on_input=setter(vm, |f| &mut f.guardian_relationship)
                        required=true
                        id="guardian_relationship"
                    />
                    <Select
                        label="Education Level"
                        value=value_of(vm, |f| &f.education_level)
                        on_change=setter(vm, |f| &mut f.education_level)
                        options=education_options
                        placeholder="Select Education Level"
                        id="education_level"
                    />
                    <Input
                        label="School Name"
                        value=value_of(vm, |f| &f.school_name)
                        on_input=setter(vm, |f| &mut f.school_name)
                        id="school_name"
                    />
                </div>
            </Show>

            <h3 class="form__section-title">"Disability Details"</h3>
            <div class="form__grid">
                <Select
                    label="Disability Category"
                    value=value_of(vm, |f| &f.disability_category_id)
                    on_change=Callback::new(move |v| vm.set_category(v))
                    options=category_options
                    placeholder="Select Category"
                    required=true
                    id="disability_category"
                />
                <Select
                    label="Disability Type"
                    value=value_of(vm, |f| &f.disability_type_id)
                    on_change=setter(vm, |f| &mut f.disability_type_id)
                    options=type_options
                    placeholder="Select Disability Type"
                    disabled=no_category
                    required=true
                    id="disability_type"
                />
                <Select
                    label="Assistance Type Needed"
                    value=value_of(vm, |f| &f.assistance_type_needed_id)
                    on_change=setter(vm, |f| &mut f.assistance_type_needed_id)
                    options=assistance_options
                    placeholder="Select Assistance Type"
                    id="assistance_type_needed"
                />
            </div>
            <Textarea
                label="Support Needs"
                value=value_of(vm, |f| &f.support_needs)
                on_input=setter(vm, |f| &mut f.support_needs)
                rows=3
                id="support_needs"
            />

            <h3 class="form__section-title">"Uploads"</h3>
            <div class="form__grid">
                <div>
                    {move || vm.current_image.get().map(|path| {
                        let name = vm.form.with_untracked(|f| f.full_name.clone());
                        view! { <img class="form__current-image" src=avatar_url(&name, Some(&path)) alt="Current profile" /> }
                    })}
                    <FileInput
                        label="Profile Image"
                        accept="image/*"
                        on_select=Callback::new(move |files: Vec<File>| {
                            vm.profile_image.set(files.into_iter().next());
                        })
                        selected=image_names
                    />
                </div>
                <div>
                    <FileInput
                        label="Supporting Documents"
                        multiple=true
                        on_select=Callback::new(move |files: Vec<File>| vm.add_documents(files))
                        selected=Signal::derive(Vec::<String>::new)
                    />
                    <ul class="form__file-list">
                        {move || document_names.get().into_iter().enumerate().map(|(i, name)| view! {
                            <li>
                                {name}
                                <button
                                    type="button"
                                    class="icon-btn icon-btn--danger"
                                    title="Remove"
                                    on:click=move |_| vm.remove_document(i)
                                >
                                    {icon("x")}
                                </button>
                            </li>
                        }).collect_view()}
                        {move || vm.current_documents.get().into_iter().map(|doc| view! {
                            <li class="text-muted">{icon("file")}" "{doc.name}</li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>

            <div class="form__actions">
                <button
                    type="submit"
                    class="button button--primary"
                    disabled=move || vm.saving.get()
                >
                    {move || if vm.saving.get() { "Saving...".to_string() } else { submit_label.clone() }}
                </button>
            </div>
        </form>
    }
}
