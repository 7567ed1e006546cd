use contracts::shared::api::ApiError;
use contracts::system::users::{CreateUserDto, ProfileUpdateDto, UpdateUserDto, User};

use crate::shared::api_utils::{delete_json, get_data, send_json, Ack, Method};

const BASE: &str = "/v1/users";

/// Fetch all users
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    get_data::<Vec<User>>(BASE).await
}

/// Create new user
pub async fn create_user(dto: &CreateUserDto) -> Result<Ack, ApiError> {
    dto.validate()?;
    send_json(Method::Post, BASE, dto).await
}

/// Update user
pub async fn update_user(user_id: i64, dto: &UpdateUserDto) -> Result<Ack, ApiError> {
    dto.validate()?;
    send_json(Method::Patch, &format!("{}/{}", BASE, user_id), dto).await
}

/// Delete user
pub async fn delete_user(user_id: i64) -> Result<Ack, ApiError> {
    delete_json(&format!("{}/{}", BASE, user_id)).await
}

/// Update the signed-in user's own account
pub async fn update_profile(user_id: i64, dto: &ProfileUpdateDto) -> Result<Ack, ApiError> {
    send_json(Method::Patch, &format!("{}/{}", BASE, user_id), dto).await
}
