use serde::{Deserialize, Serialize};

use super::auth::Role;
use super::password_reset::validate_email;
use crate::shared::api::ApiError;
use crate::shared::serde_ext::flexible_i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "flexible_i64", default)]
    pub user_id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn role(&self) -> Option<Role> {
        Role::from_code(&self.role)
    }

    /// Case-insensitive match on username, email or role.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty()
            || self.username.to_lowercase().contains(&q)
            || self.email.to_lowercase().contains(&q)
            || self.role.to_lowercase().contains(&q)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl CreateUserDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.username.trim().is_empty() {
            return Err(ApiError::validation("Username is required"));
        }
        validate_email(&self.email)?;
        if self.password.len() < 6 {
            return Err(ApiError::validation("Password must be at least 6 characters"));
        }
        if Role::from_code(&self.role).is_none() {
            return Err(ApiError::validation("Select a role"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub username: String,
    pub email: String,
    pub role: String,
}

impl UpdateUserDto {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.username.trim().is_empty() {
            return Err(ApiError::validation("Username is required"));
        }
        validate_email(&self.email)?;
        if Role::from_code(&self.role).is_none() {
            return Err(ApiError::validation("Select a role"));
        }
        Ok(())
    }
}

/// Own-account update; an empty password field leaves the password unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdateDto {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdateDto {
    pub fn new(username: &str, email: &str, password: &str, confirm: &str) -> Result<Self, ApiError> {
        if username.trim().is_empty() {
            return Err(ApiError::validation("Username is required"));
        }
        validate_email(email)?;
        let password = if password.is_empty() && confirm.is_empty() {
            None
        } else if password != confirm {
            return Err(ApiError::validation("Passwords do not match"));
        } else {
            Some(password.to_string())
        };
        Ok(Self {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_filter() {
        let u: User = serde_json::from_value(json!({
            "user_id": "4", "username": "Ama", "email": "ama@dms.org", "role": "officer"
        }))
        .unwrap();
        assert_eq!(u.user_id, 4);
        assert!(u.matches("AMA"));
        assert!(u.matches("dms.org"));
        assert!(u.matches("offi"));
        assert!(!u.matches("admin"));
        assert_eq!(u.role(), Some(Role::Officer));
    }

    #[test]
    fn test_create_requires_role_and_password() {
        let mut dto = CreateUserDto {
            username: "kofi".into(),
            email: "kofi@dms.org".into(),
            password: "123".into(),
            role: "officer".into(),
        };
        assert!(dto.validate().is_err());
        dto.password = "123456".into();
        assert!(dto.validate().is_ok());
        dto.role = "guest".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_profile_without_password_omits_key() {
        let dto = ProfileUpdateDto::new("ama", "ama@dms.org", "", "").unwrap();
        let body = serde_json::to_value(&dto).unwrap();
        assert_eq!(body, json!({"username": "ama", "email": "ama@dms.org"}));
    }

    #[test]
    fn test_profile_password_mismatch() {
        assert!(ProfileUpdateDto::new("ama", "ama@dms.org", "abc", "abd").is_err());
        let dto = ProfileUpdateDto::new("ama", "ama@dms.org", "abc", "abc").unwrap();
        assert_eq!(dto.password.as_deref(), Some("abc"));
    }
}
