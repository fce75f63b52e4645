//! Admin Auth Endpoints

use serde::{Deserialize, Serialize};

use super::{get_json, post_json, ApiError};
use crate::models::Admin;

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: Admin,
}

#[derive(Debug, Deserialize)]
struct MeResponse {
    admin: Admin,
}

/// `POST /admin/login`
pub async fn admin_login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    post_json("/admin/login", &LoginBody { email, password }, None).await
}

/// `GET /admin/me` - fresh profile for the current token
pub async fn fetch_me(token: &str) -> Result<Admin, ApiError> {
    let response: MeResponse = get_json("/admin/me", &[], Some(token)).await?;
    Ok(response.admin)
}
