use contracts::domain::a003_community::Community;
use contracts::shared::api::ApiError;

use crate::shared::api_utils::get_data;

pub async fn fetch_communities() -> Result<Vec<Community>, ApiError> {
    get_data::<Vec<Community>>("/v1/communities").await
}
