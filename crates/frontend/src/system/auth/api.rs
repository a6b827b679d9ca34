use contracts::system::auth::{ApiUser, LoginRequest, RegisterRequest, TokenResponse};

use crate::shared::api;

/// Exchange credentials for a token pair
pub async fn login(email: String, password: String) -> Result<TokenResponse, String> {
    api::post("/auth/login", &LoginRequest { email, password }).await
}

/// Register a new account
pub async fn register(name: String, email: String, password: String) -> Result<ApiUser, String> {
    api::post(
        "/auth/register",
        &RegisterRequest {
            email,
            password,
            full_name: name,
        },
    )
    .await
}

/// Resolve the current identity with the stored access token
pub async fn me() -> Result<ApiUser, String> {
    api::get("/auth/me").await
}
