use contracts::domain::a005_disability_type::DisabilityType;
use contracts::domain::common::ReferenceKind;
use contracts::shared::api::ApiError;

use crate::shared::api_utils::get_data;

/// Types of one category; no category means no types
pub async fn fetch_types(category_id: Option<i64>) -> Result<Vec<DisabilityType>, ApiError> {
    if category_id.is_none() {
        return Ok(Vec::new());
    }
    match ReferenceKind::Type.list_path(category_id)? {
        Some(path) => get_data::<Vec<DisabilityType>>(&path).await,
        None => Ok(Vec::new()),
    }
}
