//! Session State
//!
//! Holds the authenticated user and drives sign-in, registration, and
//! sign-out against the API. The access token (and, in demo mode, a
//! serialized account record) persists in browser local storage and is
//! restored at startup.

use leptos::*;

use crate::api::client::{self, AuthResponse};
use crate::api::error::ApiError;
use crate::model::User;

/// Local storage flag that enables the offline demo account ("1" = on)
pub const DEMO_FLAG_KEY: &str = "splitgroup_demo";
/// Fixed demo credentials, only honored when the flag above is set
pub const DEMO_EMAIL: &str = "demo@splitgroup.dev";
pub const DEMO_PASSWORD: &str = "demo123";

const DEMO_TOKEN: &str = "demo-token";

/// Session state provided to all components
#[derive(Clone, Copy)]
pub struct SessionState {
    /// The signed-in user, if any
    pub user: RwSignal<Option<User>>,
    /// True until the startup session restore has finished
    pub loading: RwSignal<bool>,
}

/// Provide session state to the component tree
pub fn provide_session() {
    let session = SessionState {
        user: create_rw_signal(None),
        loading: create_rw_signal(true),
    };

    provide_context(session);
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>().expect("SessionState not found")
}

/// True when the explicit demo flag is set in local storage
pub fn demo_enabled() -> bool {
    client::local_storage()
        .and_then(|s| s.get_item(DEMO_FLAG_KEY).ok().flatten())
        .map(|v| v == "1")
        .unwrap_or(false)
}

/// Whether a credential pair matches the fixed demo account
pub fn is_demo_login(email: &str, password: &str) -> bool {
    email == DEMO_EMAIL && password == DEMO_PASSWORD
}

/// The fabricated local account used by the demo bypass
pub fn demo_user() -> User {
    User {
        id: "demo-user".to_string(),
        name: "Demo User".to_string(),
        email: DEMO_EMAIL.to_string(),
    }
}

fn store_demo_user(user: &User) {
    if let (Some(storage), Ok(json)) = (client::local_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(client::DEMO_USER_KEY, &json);
    }
}

fn stored_demo_user() -> Option<User> {
    client::local_storage()
        .and_then(|s| s.get_item(client::DEMO_USER_KEY).ok().flatten())
        .and_then(|json| serde_json::from_str(&json).ok())
}

impl SessionState {
    /// Restore the session at startup: with a stored token, fetch the
    /// current user; if the fetch fails the token is dropped.
    pub async fn restore(self) {
        match client::stored_token() {
            None => {}
            Some(token) if token == DEMO_TOKEN => match stored_demo_user() {
                Some(user) => self.user.set(Some(user)),
                None => client::clear_session_storage(),
            },
            Some(_) => match client::fetch_current_user().await {
                Ok(user) => self.user.set(Some(user)),
                Err(_) => client::clear_session_storage(),
            },
        }
        self.loading.set(false);
    }

    /// Authenticate with credentials, persist the token, and hold the user.
    ///
    /// With the demo flag set, the fixed demo pair short-circuits to a
    /// fabricated local account without touching the network.
    pub async fn login(self, email: &str, password: &str) -> Result<(), ApiError> {
        if demo_enabled() && is_demo_login(email, password) {
            let user = demo_user();
            client::store_token(DEMO_TOKEN);
            store_demo_user(&user);
            self.user.set(Some(user));
            return Ok(());
        }

        let AuthResponse { token, user } = client::login(email, password).await?;
        client::store_token(&token);
        self.user.set(Some(user));
        Ok(())
    }

    /// Create an account, persist the returned token, and hold the user
    pub async fn register(self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        let AuthResponse { token, user } = client::register(name, email, password).await?;
        client::store_token(&token);
        self.user.set(Some(user));
        Ok(())
    }

    /// Drop the session: clear persisted storage and the held user
    pub fn logout(self) {
        client::clear_session_storage();
        self.user.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_credentials_match_exactly() {
        assert!(is_demo_login(DEMO_EMAIL, DEMO_PASSWORD));
        assert!(!is_demo_login(DEMO_EMAIL, "wrong"));
        assert!(!is_demo_login("someone@example.com", DEMO_PASSWORD));
        assert!(!is_demo_login("", ""));
    }

    #[test]
    fn test_demo_user_is_fixed() {
        let user = demo_user();
        assert_eq!(user.id, "demo-user");
        assert_eq!(user.email, DEMO_EMAIL);
    }
}
