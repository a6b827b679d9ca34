//! Session store: owns the authenticated identity and its lifecycle
//! (anonymous → loading → authenticated, back to anonymous on logout or a
//! failed bootstrap).

use contracts::system::auth::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::fmt;

use super::{api, storage};

/// Why a login/signup attempt failed. Views usually only care that it
/// failed; the variants exist for logging and tests.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    Registration(String),
    TokenExchange(String),
    IdentityFetch(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Registration(msg) => write!(f, "Registration failed: {}", msg),
            SessionError::TokenExchange(msg) => write!(f, "Login failed: {}", msg),
            SessionError::IdentityFetch(msg) => write!(f, "Could not load profile: {}", msg),
        }
    }
}

#[derive(Clone, Copy)]
pub struct SessionStore {
    pub user: RwSignal<Option<User>>,
    pub is_loading: RwSignal<bool>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            is_loading: RwSignal::new(true),
        }
    }

    /// Restore the session from localStorage: hydrate optimistically from the
    /// snapshot, then confirm against `/auth/me`. A token that fails to
    /// resolve an identity invalidates the whole session without surfacing an
    /// error.
    pub fn bootstrap(&self) {
        let store = *self;
        spawn_local(async move {
            if let Some(snapshot) = storage::load_user_snapshot() {
                store.user.set(Some(snapshot));
            }

            if storage::get_access_token().is_some() {
                match api::me().await {
                    Ok(me) => {
                        let user = User::from_api(me);
                        storage::save_user_snapshot(&user);
                        store.user.set(Some(user));
                    }
                    Err(e) => {
                        log::warn!("Stored session is invalid: {}", e);
                        storage::clear_session();
                        store.user.set(None);
                    }
                }
            }

            store.is_loading.set(false);
        });
    }

    /// Exchange credentials for tokens, persist them, then fetch and publish
    /// the authoritative identity.
    pub async fn login(&self, email: String, password: String) -> Result<User, SessionError> {
        let tokens = api::login(email, password)
            .await
            .map_err(SessionError::TokenExchange)?;
        storage::save_tokens(&tokens.access_token, &tokens.refresh_token);

        let me = api::me().await.map_err(SessionError::IdentityFetch)?;
        let user = User::from_api(me);
        storage::save_user_snapshot(&user);
        self.user.set(Some(user.clone()));
        Ok(user)
    }

    /// Register the account, then log in with the same credentials
    pub async fn signup(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<User, SessionError> {
        api::register(name, email.clone(), password.clone())
            .await
            .map_err(SessionError::Registration)?;
        self.login(email, password).await
    }

    /// Clear the identity and every persisted session key. Idempotent.
    pub fn logout(&self) {
        self.user.set(None);
        storage::clear_session();
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the session store
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("SessionStore not found in context")
}
