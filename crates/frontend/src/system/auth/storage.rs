use contracts::system::auth::SessionUser;
use web_sys::window;

const SESSION_KEY: &str = "dms_user";
const RESET_OTP_KEY: &str = "reset_otp";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the logged-in user blob to localStorage
pub fn save_session(user: &SessionUser) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(user) {
        Ok(json) => {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
        Err(e) => log::warn!("cannot serialize session: {}", e),
    }
}

/// Read the persisted session. A malformed blob counts as no session.
pub fn load_session() -> Option<SessionUser> {
    let raw = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    parse_session(&raw)
}

pub fn parse_session(raw: &str) -> Option<SessionUser> {
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::debug!("ignoring stored session: {}", e);
            None
        }
    }
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

/// OTP verified on the OTP screen, consumed by the reset screen
pub fn save_reset_otp(otp: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(RESET_OTP_KEY, otp);
    }
}

pub fn get_reset_otp() -> Option<String> {
    get_local_storage()?.get_item(RESET_OTP_KEY).ok()?
}

pub fn clear_reset_otp() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(RESET_OTP_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;

    #[test]
    fn test_parse_session_blob() {
        let user = parse_session(r#"{"user_id":"7","role":"officer","token":"abc"}"#).unwrap();
        assert_eq!(user.user_id, 7);
        assert_eq!(user.role, Role::Officer);
        assert_eq!(user.bearer().as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn test_malformed_session_is_none() {
        assert!(parse_session("not json").is_none());
        assert!(parse_session(r#"{"user_id":1,"role":"guest"}"#).is_none());
    }
}
