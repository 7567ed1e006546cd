use contracts::shared::api::ApiError;
use contracts::system::auth::{Role, SessionUser};
use leptos::prelude::*;

use super::{api, storage};

/// Logged-in user, restored from localStorage on start-up.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<Option<SessionUser>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(storage::load_session()),
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.with_untracked(|u| u.as_ref().map(|u| u.user_id))
    }

    /// Replace the stored name/email after a profile update.
    pub fn update_profile(&self, username: &str, email: &str) {
        self.user.update(|user| {
            if let Some(user) = user {
                user.username = Some(username.to_string());
                user.email = Some(email.to_string());
                storage::save_session(user);
            }
        });
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::new());
    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}

/// Log in against the role's portal. A user of the other role is refused
/// without being stored.
pub async fn do_login(
    session: SessionContext,
    username: String,
    password: String,
    portal: Role,
) -> Result<SessionUser, ApiError> {
    let mut user = api::login(username.clone(), password).await?;
    if user.role != portal {
        log::info!("login as {} refused on {} portal", user.role.code(), portal.code());
        return Err(ApiError::Rejected(format!(
            "This account cannot sign in to the {} portal",
            portal.label()
        )));
    }
    if user.username.is_none() {
        user.username = Some(username);
    }
    storage::save_session(&user);
    session.user.set(Some(user.clone()));
    log::info!("user {} logged in as {}", user.user_id, user.role.code());
    Ok(user)
}

pub fn do_logout(session: SessionContext) {
    storage::clear_session();
    session.user.set(None);
    log::info!("logged out");
}
