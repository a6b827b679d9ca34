//! Persisted session state: identity snapshot plus the token pair, all under
//! fixed localStorage keys. Tokens and snapshot are written together on login
//! and removed together on logout or bootstrap failure.

use contracts::system::auth::User;
use web_sys::window;

const USER_KEY: &str = "shelfiq_user";
const ACCESS_TOKEN_KEY: &str = "shelfiq_access_token";
const REFRESH_TOKEN_KEY: &str = "shelfiq_refresh_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save both tokens from a successful login
pub fn save_tokens(access_token: &str, refresh_token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, access_token);
        let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh_token);
    }
}

/// Get the access token, if any
pub fn get_access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Remove both tokens (the session is invalid)
pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}

/// Persist the identity snapshot
pub fn save_user_snapshot(user: &User) {
    if let Some(storage) = local_storage() {
        if let Ok(snapshot) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &snapshot);
        }
    }
}

/// Parse a raw snapshot value. Corrupt snapshots yield `None`.
pub fn parse_user_snapshot(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

/// Load the persisted identity snapshot; a corrupt snapshot is removed
/// silently instead of failing the bootstrap.
pub fn load_user_snapshot() -> Option<User> {
    let storage = local_storage()?;
    let raw = storage.get_item(USER_KEY).ok()??;
    match parse_user_snapshot(&raw) {
        Some(user) => Some(user),
        None => {
            let _ = storage.remove_item(USER_KEY);
            None
        }
    }
}

pub fn remove_user_snapshot() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(USER_KEY);
    }
}

/// Clear every persisted session key (logout)
pub fn clear_session() {
    remove_user_snapshot();
    clear_tokens();
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::UserRole;

    #[test]
    fn test_corrupt_snapshot_parses_to_none() {
        assert!(parse_user_snapshot("not json").is_none());
        assert!(parse_user_snapshot("{\"id\":\"wrong type\"}").is_none());
        assert!(parse_user_snapshot("").is_none());
    }

    #[test]
    fn test_valid_snapshot_round_trips() {
        let user = User {
            id: 12,
            name: "Sam Chen".into(),
            email: "sam@example.com".into(),
            role: UserRole::Admin,
        };
        let raw = serde_json::to_string(&user).unwrap();
        assert_eq!(parse_user_snapshot(&raw), Some(user));
    }
}
