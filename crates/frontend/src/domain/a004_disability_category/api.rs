use contracts::domain::a004_disability_category::DisabilityCategory;
use contracts::shared::api::ApiError;

use crate::shared::api_utils::get_data;

pub async fn fetch_categories() -> Result<Vec<DisabilityCategory>, ApiError> {
    get_data::<Vec<DisabilityCategory>>("/v1/disability-categories").await
}
