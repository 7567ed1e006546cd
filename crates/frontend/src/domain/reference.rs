//! Reference-data CRUD behind the Settings tabs.
//!
//! Every kind is normalised to [`ReferenceItem`] rows; paths, methods and
//! bodies come from [`ReferenceKind`].

use contracts::domain::a007_gender::Gender;
use contracts::domain::common::{ReferenceItem, ReferenceKind, ReferenceRow, UpdateMethod};
use contracts::shared::api::ApiError;

use crate::domain::a003_community::api::fetch_communities;
use crate::domain::a004_disability_category::api::fetch_categories;
use crate::domain::a005_disability_type::api::fetch_types;
use crate::domain::a006_assistance_type::api::fetch_assistance_types;
use crate::shared::api_utils::{delete_plain, send_json, Ack, Method};

fn items<T: ReferenceRow>(rows: Vec<T>) -> Vec<ReferenceItem> {
    rows.iter().map(ReferenceRow::to_item).collect()
}

pub async fn fetch_items(
    kind: ReferenceKind,
    category_id: Option<i64>,
) -> Result<Vec<ReferenceItem>, ApiError> {
    Ok(match kind {
        ReferenceKind::Communities => items(fetch_communities().await?),
        ReferenceKind::Category => items(fetch_categories().await?),
        ReferenceKind::Type => items(fetch_types(category_id).await?),
        ReferenceKind::Assistance => items(fetch_assistance_types().await?),
        ReferenceKind::Gender => items(Gender::all().to_vec()),
    })
}

pub async fn create_item(
    kind: ReferenceKind,
    name: &str,
    category_id: Option<i64>,
) -> Result<Ack, ApiError> {
    let body = kind.create_body(name, category_id)?;
    send_json(Method::Post, kind.create_path()?, &body).await
}

pub async fn update_item(
    kind: ReferenceKind,
    id: i64,
    name: &str,
    category_id: Option<i64>,
) -> Result<Ack, ApiError> {
    let body = kind.update_body(name, category_id)?;
    let method = match kind.update_method() {
        UpdateMethod::Put => Method::Put,
        UpdateMethod::Patch => Method::Patch,
    };
    send_json(method, &kind.update_path(id)?, &body).await
}

pub async fn delete_item(
    kind: ReferenceKind,
    id: i64,
    category_id: Option<i64>,
) -> Result<Ack, ApiError> {
    delete_plain(&kind.delete_path(id, category_id)?).await
}

/// `(value, label)` pairs for a `<select>`
pub fn select_options(items: &[ReferenceItem]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|i| (i.id.to_string(), i.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_options_from_genders() {
        let genders = items(Gender::all().to_vec());
        assert_eq!(
            select_options(&genders),
            vec![
                ("1".to_string(), "Male".to_string()),
                ("2".to_string(), "Female".to_string())
            ]
        );
    }
}
