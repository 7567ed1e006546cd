use contracts::domain::a001_pwd_record::PwdRecord;
use contracts::shared::api::{ApiError, Page};

use crate::shared::api_utils::{
    delete_json, get_data, get_page, patch_multipart, post_multipart, Ack, MultipartBody,
};

const BASE: &str = "/v1/pwd-records";

/// One page of the records table
pub async fn fetch_page(page: i64) -> Result<Page<PwdRecord>, ApiError> {
    get_page::<PwdRecord>(BASE, page).await
}

/// Records for pickers (first page as served by the API)
pub async fn fetch_all() -> Result<Vec<PwdRecord>, ApiError> {
    get_data::<Vec<PwdRecord>>(BASE).await
}

pub async fn fetch_one(id: i64) -> Result<PwdRecord, ApiError> {
    get_data::<PwdRecord>(&format!("{}/{}", BASE, id)).await
}

pub async fn create(body: &MultipartBody) -> Result<Ack, ApiError> {
    post_multipart(BASE, body).await
}

pub async fn update(id: i64, body: &MultipartBody) -> Result<Ack, ApiError> {
    patch_multipart(&format!("{}/{}", BASE, id), body).await
}

pub async fn delete(id: i64) -> Result<Ack, ApiError> {
    delete_json(&format!("{}/{}", BASE, id)).await
}
