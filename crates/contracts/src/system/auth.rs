use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Identity as the server reports it (`GET /auth/me`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiUser {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: String,
}

/// Identity as the client holds it. Persisted as a JSON snapshot between
/// sessions and replaced by the authoritative `/auth/me` answer on bootstrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    /// Display name falls back to the email when the server has no full name;
    /// unrecognized roles map to analyst.
    pub fn from_api(me: ApiUser) -> Self {
        let name = me
            .full_name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| me.email.clone());
        User {
            id: me.id,
            name,
            email: me.email,
            role: UserRole::from_code_or_default(&me.role),
        }
    }
}
