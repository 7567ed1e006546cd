use serde::{Deserialize, Serialize};

use crate::shared::api::ApiError;

pub const OTP_LENGTH: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestResetDto {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpDto {
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendOtpDto {
    pub resend: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordDto {
    pub otp: String,
    pub new_password: String,
}

/// Digits of a pasted code, at most `OTP_LENGTH` of them.
pub fn sanitize_otp_paste(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(OTP_LENGTH)
        .collect()
}

pub fn is_complete_otp(code: &str) -> bool {
    code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit())
}

pub fn validate_email(email: &str) -> Result<(), ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ApiError::validation("Enter a valid email address")),
    }
}

pub fn validate_new_password(new_password: &str, confirm: &str) -> Result<(), ApiError> {
    if new_password.is_empty() || confirm.is_empty() {
        return Err(ApiError::validation("Please fill in both password fields"));
    }
    if new_password != confirm {
        return Err(ApiError::validation("Passwords do not match"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paste_keeps_first_six_digits() {
        assert_eq!(sanitize_otp_paste("12-34 56 78"), "123456");
        assert_eq!(sanitize_otp_paste("ab1c2"), "12");
        assert_eq!(sanitize_otp_paste(""), "");
    }

    #[test]
    fn test_complete_otp() {
        assert!(is_complete_otp("000123"));
        assert!(!is_complete_otp("12345"));
        assert!(!is_complete_otp("12345a"));
    }

    #[test]
    fn test_new_password_rules() {
        assert!(validate_new_password("", "").is_err());
        assert_eq!(
            validate_new_password("secret1", "secret2").unwrap_err().to_string(),
            "Passwords do not match"
        );
        assert!(validate_new_password("secret1", "secret1").is_ok());
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("officer@dms.gov.gh").is_ok());
        assert!(validate_email("  ").is_err());
        assert!(validate_email("nobody").is_err());
        assert!(validate_email("@x.com").is_err());
    }
}
