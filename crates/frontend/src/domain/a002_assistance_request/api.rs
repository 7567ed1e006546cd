use contracts::domain::a002_assistance_request::{
    AssistanceRequest, CreateAssistanceRequestDto, StatusUpdateDto,
};
use contracts::shared::api::ApiError;

use crate::shared::api_utils::{delete_json, get_data, send_json, Ack, Method};

const BASE: &str = "/v1/assistance-requests";

pub async fn fetch_all() -> Result<Vec<AssistanceRequest>, ApiError> {
    get_data::<Vec<AssistanceRequest>>(BASE).await
}

pub async fn fetch_one(id: i64) -> Result<AssistanceRequest, ApiError> {
    get_data::<AssistanceRequest>(&format!("{}/{}", BASE, id)).await
}

/// Requests logged for one beneficiary
pub async fn fetch_for_beneficiary(
    pwd_id: i64,
    full_name: &str,
) -> Result<Vec<AssistanceRequest>, ApiError> {
    let all = fetch_all().await?;
    Ok(all
        .into_iter()
        .filter(|r| r.is_for(pwd_id, full_name))
        .collect())
}

pub async fn create(dto: &CreateAssistanceRequestDto) -> Result<Ack, ApiError> {
    send_json(Method::Post, BASE, dto).await
}

pub async fn update_status(id: i64, dto: &StatusUpdateDto) -> Result<Ack, ApiError> {
    send_json(Method::Patch, &format!("{}/{}/status", BASE, id), dto).await
}

pub async fn delete(id: i64) -> Result<Ack, ApiError> {
    delete_json(&format!("{}/{}", BASE, id)).await
}
