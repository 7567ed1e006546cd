use serde::{Deserialize, Serialize};

use crate::shared::serde_ext::flexible_i64;

/// The two account roles. Each owns a parallel route tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Officer,
}

impl Role {
    pub fn all() -> [Role; 2] {
        [Role::Admin, Role::Officer]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Officer => "officer",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "officer" => Some(Role::Officer),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Officer => "Officer",
        }
    }

    /// Mount point of the role's dashboard tree.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin-dashboard",
            Role::Officer => "/officer-dashboard",
        }
    }

    pub fn login_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Officer => "/",
        }
    }

    pub fn forgot_password_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin-forgot-password",
            Role::Officer => "/officer-forgot-password",
        }
    }

    pub fn otp_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin-otp",
            Role::Officer => "/officer-otp",
        }
    }

    pub fn reset_password_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin-reset-password",
            Role::Officer => "/officer-reset-password",
        }
    }

    /// `home_path` joined with a relative page path, e.g. `pwd-records/12`.
    pub fn page(&self, relative: &str) -> String {
        let relative = relative.trim_start_matches('/');
        if relative.is_empty() {
            self.home_path().to_string()
        } else {
            format!("{}/{}", self.home_path(), relative)
        }
    }
}

/// The `dms_user` blob persisted after a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(deserialize_with = "flexible_i64", default)]
    pub user_id: i64,
    pub role: Role,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl SessionUser {
    /// Value for the `Authorization` header, when the API issued a token.
    pub fn bearer(&self) -> Option<String> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {}", t))
    }

    pub fn display_name(&self) -> String {
        self.username
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.role.label().to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login answers `{status, message, user}` rather than the usual `data` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Route gate for a role's tree: no session, or a session of the other role,
/// is sent to the required role's login page.
pub fn guard(session: Option<&SessionUser>, required: Role) -> GuardDecision {
    match session {
        Some(user) if user.role == required => GuardDecision::Allow,
        _ => GuardDecision::Redirect(required.login_path()),
    }
}

pub fn post_login_redirect(role: Role) -> &'static str {
    role.home_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session(role: Role) -> SessionUser {
        SessionUser {
            user_id: 3,
            role,
            token: Some("abc".into()),
            username: Some("kwame".into()),
            email: None,
        }
    }

    #[test]
    fn test_guard_allows_matching_role() {
        let s = session(Role::Admin);
        assert_eq!(guard(Some(&s), Role::Admin), GuardDecision::Allow);
    }

    #[test]
    fn test_guard_redirects_other_role_to_required_login() {
        let s = session(Role::Officer);
        assert_eq!(guard(Some(&s), Role::Admin), GuardDecision::Redirect("/admin"));
        let s = session(Role::Admin);
        assert_eq!(guard(Some(&s), Role::Officer), GuardDecision::Redirect("/"));
    }

    #[test]
    fn test_guard_redirects_without_session() {
        assert_eq!(guard(None, Role::Officer), GuardDecision::Redirect("/"));
    }

    #[test]
    fn test_session_blob_parses_string_id() {
        let s: SessionUser =
            serde_json::from_value(json!({"user_id": "9", "role": "officer", "token": "t"})).unwrap();
        assert_eq!(s.user_id, 9);
        assert_eq!(s.role, Role::Officer);
        assert_eq!(s.bearer().as_deref(), Some("Bearer t"));
        assert_eq!(s.display_name(), "Officer");
    }

    #[test]
    fn test_empty_token_has_no_bearer() {
        let mut s = session(Role::Admin);
        s.token = Some(String::new());
        assert_eq!(s.bearer(), None);
    }

    #[test]
    fn test_login_response_user_at_top_level() {
        let r: LoginResponse = serde_json::from_value(json!({
            "status": "success",
            "message": "Login successful",
            "user": {"user_id": 1, "role": "admin", "token": "x", "username": "root"}
        }))
        .unwrap();
        let user = r.user.unwrap();
        assert_eq!(post_login_redirect(user.role), "/admin-dashboard");
    }

    #[test]
    fn test_page_paths() {
        assert_eq!(Role::Officer.page("pwd-records/4"), "/officer-dashboard/pwd-records/4");
        assert_eq!(Role::Admin.page(""), "/admin-dashboard");
    }
}
