use contracts::shared::api::{ApiError, STATUS_SUCCESS};
use contracts::system::auth::{LoginRequest, LoginResponse, SessionUser};
use contracts::system::password_reset::{
    RequestResetDto, ResendOtpDto, ResetPasswordDto, VerifyOtpDto,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, send_json, Ack, Method};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<SessionUser, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/v1/users/login"))
        .json(&request)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .json::<LoginResponse>()
        .await
        .map_err(|_| ApiError::Http(status))?;

    if body.status != STATUS_SUCCESS {
        log::warn!("login rejected: {:?}", body.message);
        return Err(ApiError::Rejected(
            body.message.unwrap_or_else(|| "Invalid credentials".to_string()),
        ));
    }
    body.user
        .ok_or_else(|| ApiError::Decode("login response without user".to_string()))
}

/// Ask for an OTP to be mailed
pub async fn request_reset(email: String) -> Result<Ack, ApiError> {
    send_json(
        Method::Post,
        "/v1/users/password/request-reset",
        &RequestResetDto { email },
    )
    .await
}

pub async fn verify_otp(otp: String) -> Result<Ack, ApiError> {
    send_json(Method::Post, "/v1/users/password/verify-otp", &VerifyOtpDto { otp }).await
}

pub async fn resend_otp() -> Result<Ack, ApiError> {
    send_json(
        Method::Post,
        "/v1/users/password/verify-otp",
        &ResendOtpDto { resend: true },
    )
    .await
}

pub async fn reset_password(otp: String, new_password: String) -> Result<Ack, ApiError> {
    send_json(
        Method::Post,
        "/v1/users/password/reset",
        &ResetPasswordDto { otp, new_password },
    )
    .await
}
