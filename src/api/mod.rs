//! Backend API Wrappers
//!
//! Async bindings to the REST backend, organized by domain. Every
//! wrapper returns `Result<T, ApiError>`; failures are converted to
//! user-facing state at the call site, never propagated as faults.

mod admin;
mod courses;
mod leads;
mod projects;
mod services;
mod team;
mod testimonials;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsValue;

pub use admin::*;
pub use courses::*;
pub use leads::*;
pub use projects::*;
pub use services::*;
pub use team::*;
pub use testimonials::*;

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// Token invalid or expired; the caller clears the session
    #[error("not authorized")]
    Unauthorized,
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Base URL for the backend, overridable at runtime by setting
/// `window.API_BASE_URL` in the host page.
pub fn base_url() -> String {
    web_sys::window()
        .and_then(|win| js_sys::Reflect::get(&win, &JsValue::from_str("API_BASE_URL")).ok())
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn endpoint(path: &str) -> String {
    format!("{}{}", base_url(), path)
}

fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn check(response: Result<Response, gloo_net::Error>) -> Result<Response, ApiError> {
    let response = response.map_err(|e| ApiError::Network(e.to_string()))?;
    match response.status() {
        200..=299 => Ok(response),
        401 => Err(ApiError::Unauthorized),
        status => Err(ApiError::Status(status)),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET with query parameters, decoded as JSON
pub(crate) async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
    token: Option<&str>,
) -> Result<T, ApiError> {
    let builder = with_bearer(Request::get(&endpoint(path)), token)
        .query(query.iter().map(|(k, v)| (*k, v.as_str())));
    let response = check(builder.send().await).await?;
    decode(response).await
}

/// POST a JSON body, decoded as JSON
pub(crate) async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let request = with_bearer(Request::post(&endpoint(path)), token)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = check(request.send().await).await?;
    decode(response).await
}

/// PATCH with no body, decoded as JSON
pub(crate) async fn patch_json<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let request = with_bearer(Request::patch(&endpoint(path)), token)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = check(request.send().await).await?;
    decode(response).await
}

/// DELETE, status-checked only
pub(crate) async fn delete(path: &str, token: Option<&str>) -> Result<(), ApiError> {
    let request = with_bearer(Request::delete(&endpoint(path)), token)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(request.send().await).await?;
    Ok(())
}
