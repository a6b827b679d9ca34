//! Remote data gateway
//!
//! Thin typed helpers over `gloo-net` for talking to the analytics backend.
//! Every call prefixes the API base URL and attaches a bearer header when an
//! access token is present; callers decide whether authentication is
//! required. No retries, no timeouts, no caching.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location, using
/// port 8000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000/api", protocol, hostname)
}

/// Build a full API URL from a path (paths start with "/", e.g. "/stores")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        if message.is_empty() {
            return Err(format!("Request failed with status {}", status));
        }
        return Err(message);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET a JSON resource
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    handle_response(response).await
}

/// POST a JSON body, expecting a JSON response
pub async fn post<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, String> {
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    handle_response(response).await
}

/// POST a multipart form (file uploads), expecting a JSON response
pub async fn upload<T: DeserializeOwned>(path: &str, form: FormData) -> Result<T, String> {
    let response = with_auth(Request::post(&api_url(path)))
        .body(form)
        .map_err(|e| format!("Failed to attach form data: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    handle_response(response).await
}
