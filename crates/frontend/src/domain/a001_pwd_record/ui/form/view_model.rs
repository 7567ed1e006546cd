use crate::domain::a001_pwd_record::api;
use crate::domain::reference::fetch_items;
use crate::shared::api_utils::MultipartBody;
use crate::shared::date_utils::today;
use contracts::domain::a001_pwd_record::{DocumentRef, FormMode, PwdRecordForm};
use contracts::domain::common::{ReferenceItem, ReferenceKind};
use contracts::shared::api::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use web_sys::File;

/// Numeric id out of a `<select>` value; empty means "none chosen".
pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// State and commands of the register / edit PWD form.
#[derive(Clone, Copy)]
pub struct PwdFormViewModel {
    pub mode: FormMode,
    pub record_id: Option<i64>,
    pub form: RwSignal<PwdRecordForm>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub communities: RwSignal<Vec<ReferenceItem>>,
    pub categories: RwSignal<Vec<ReferenceItem>>,
    pub types: RwSignal<Vec<ReferenceItem>>,
    pub assistance_types: RwSignal<Vec<ReferenceItem>>,
    /// Newly picked files; `web_sys::File` is not `Send`
    pub profile_image: RwSignal<Option<File>, LocalStorage>,
    pub documents: RwSignal<Vec<File>, LocalStorage>,
    /// What the server already holds (edit mode)
    pub current_image: RwSignal<Option<String>>,
    pub current_documents: RwSignal<Vec<DocumentRef>>,
}

fn load_into(kind: ReferenceKind, category_id: Option<i64>, target: RwSignal<Vec<ReferenceItem>>) {
    spawn_local(async move {
        match fetch_items(kind, category_id).await {
            Ok(items) => target.set(items),
            Err(e) => log::warn!("failed to load {}: {}", kind.label(), e),
        }
    });
}

impl PwdFormViewModel {
    pub fn new(mode: FormMode, record_id: Option<i64>) -> Self {
        Self {
            mode,
            record_id,
            form: RwSignal::new(PwdRecordForm::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(mode == FormMode::Edit),
            saving: RwSignal::new(false),
            communities: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            types: RwSignal::new(Vec::new()),
            assistance_types: RwSignal::new(Vec::new()),
            profile_image: RwSignal::new_local(None),
            documents: RwSignal::new_local(Vec::new()),
            current_image: RwSignal::new(None),
            current_documents: RwSignal::new(Vec::new()),
        }
    }

    pub fn load_reference_data(&self) {
        load_into(ReferenceKind::Communities, None, self.communities);
        load_into(ReferenceKind::Category, None, self.categories);
        load_into(ReferenceKind::Assistance, None, self.assistance_types);
    }

    /// Types belong to a category; without one the list is empty.
    pub fn load_types(&self, category: &str) {
        match parse_id(category) {
            Some(id) => load_into(ReferenceKind::Type, Some(id), self.types),
            None => self.types.set(Vec::new()),
        }
    }

    /// Edit mode: fetch the record and fill the form.
    pub fn load_if_needed(&self) {
        let Some(id) = self.record_id.filter(|_| self.mode == FormMode::Edit) else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            match api::fetch_one(id).await {
                Ok(record) => {
                    let form = PwdRecordForm::from_record(&record);
                    this.load_types(&form.disability_category_id);
                    this.form.set(form);
                    this.current_image.set(record.profile_image.clone());
                    this.current_documents.set(record.supporting_documents);
                    this.error.set(None);
                }
                Err(e) => {
                    log::warn!("failed to load PWD record {}: {}", id, e);
                    this.error.set(Some(e.to_string()));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn set_dob(&self, value: String) {
        self.form.update(|f| f.set_dob(&value, today()));
    }

    pub fn set_age(&self, value: String) {
        self.form.update(|f| f.set_age(&value, today()));
    }

    /// Clears the chosen type and reloads the type list.
    pub fn set_category(&self, value: String) {
        self.form.update(|f| f.set_category(&value));
        self.load_types(&value);
    }

    pub fn add_documents(&self, files: Vec<File>) {
        self.documents.update(|docs| docs.extend(files));
    }

    pub fn remove_document(&self, index: usize) {
        self.documents.update(|docs| {
            if index < docs.len() {
                docs.remove(index);
            }
        });
    }

    pub fn document_names(&self) -> Vec<String> {
        self.documents.with(|docs| docs.iter().map(|f| f.name()).collect())
    }

    /// Empties the form after a successful registration.
    pub fn reset(&self) {
        self.form.set(PwdRecordForm::default());
        self.types.set(Vec::new());
        self.profile_image.set(None);
        self.documents.set(Vec::new());
        self.error.set(None);
    }

    pub fn is_minor(&self) -> bool {
        self.form.with(|f| f.is_minor())
    }

    /// Validates, then creates or patches the record. `on_saved` receives the
    /// message to show.
    pub fn save_command(&self, user_id: Option<i64>, on_saved: Rc<dyn Fn(String)>) {
        let Some(user_id) = user_id else {
            self.error.set(Some(ApiError::NotAuthenticated.to_string()));
            return;
        };
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        let body = MultipartBody {
            fields: current.multipart_fields(user_id, today(), self.mode),
            profile_image: self.profile_image.get_untracked(),
            documents: self.documents.get_untracked(),
        };
        let mode = self.mode;
        let record_id = self.record_id;
        let error = self.error;
        let saving = self.saving;

        saving.set(true);
        spawn_local(async move {
            let result = match (mode, record_id) {
                (FormMode::Edit, Some(id)) => api::update(id, &body)
                    .await
                    .map(|ack| ack.message_or("PWD record updated successfully")),
                _ => api::create(&body)
                    .await
                    .map(|ack| ack.message_or("PWD registered successfully!")),
            };
            saving.set(false);
            match result {
                Ok(message) => {
                    error.set(None);
                    log::info!("PWD record saved ({:?})", mode);
                    on_saved(message);
                }
                Err(e) => {
                    log::warn!("saving PWD record failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
    }
}
