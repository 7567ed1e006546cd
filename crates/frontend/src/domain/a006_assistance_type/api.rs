use contracts::domain::a006_assistance_type::{AssistanceType, DistributionRow};
use contracts::shared::api::ApiError;

use crate::shared::api_utils::get_data;

pub async fn fetch_assistance_types() -> Result<Vec<AssistanceType>, ApiError> {
    get_data::<Vec<AssistanceType>>("/v1/assistance-types").await
}

/// Usage counts per assistance type for the reports chart
pub async fn fetch_distribution() -> Result<Vec<DistributionRow>, ApiError> {
    get_data::<Vec<DistributionRow>>("/v1/assistance-types/distribution").await
}
