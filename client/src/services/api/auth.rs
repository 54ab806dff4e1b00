//! Auth endpoints: register and login.

use reqwest::{Method, StatusCode};
use shared::{AuthResponse, LoginRequest, RegisterRequest};

use crate::core::error::Result;

use super::client::{send_json, ApiClient};

/// `POST /auth/register`. The backend answers 201 with the same shape as
/// login, so a successful registration can immediately establish a session.
pub async fn register(
    api: &ApiClient,
    username: String,
    email: String,
    password: String,
) -> Result<AuthResponse> {
    tracing::info!(username = %username, "registering new account");
    let request = api
        .request(Method::POST, "/auth/register", None)
        .json(&RegisterRequest {
            username,
            email,
            password,
        });
    send_json(request, StatusCode::CREATED).await
}

/// `POST /auth/login`. The identifier matches either username or email.
pub async fn login(api: &ApiClient, identifier: String, password: String) -> Result<AuthResponse> {
    tracing::info!(identifier = %identifier, "logging in");
    let request = api
        .request(Method::POST, "/auth/login", None)
        .json(&LoginRequest {
            identifier,
            password,
        });
    send_json(request, StatusCode::OK).await
}
