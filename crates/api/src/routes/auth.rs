//! Admin registration and login.

use std::net::SocketAddr;

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use shipdesk_core::Email;

use crate::{
    db::AdminRepository,
    error::ApiError,
    middleware::ApiJson,
    models::AdminView,
    services::passwords::{self, MIN_PASSWORD_LENGTH},
    services::tokens::ROLE_ADMIN,
    state::AppState,
};

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `POST /register` - Create an admin account.
#[instrument(skip(state, body))]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AdminView>), ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError::Validation("Name is required".to_string()));
    }

    let email = Email::parse(&body.email)
        .map_err(|e| ApiError::Validation(format!("Invalid email: {e}")))?;

    if body.password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let password_hash = passwords::hash(&body.password)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    // Duplicate emails surface as Conflict from the unique index
    let admin = AdminRepository::new(state.pool())
        .insert(body.name.trim(), &email, &password_hash)
        .await?;

    tracing::info!(admin_id = %admin.id, "admin registered");
    Ok((StatusCode::CREATED, Json(admin.into())))
}

/// `POST /login` - Exchange credentials for a bearer token.
///
/// Rate-limited per client IP. Unknown email and wrong password produce the
/// same response, so the endpoint does not leak which emails exist.
#[instrument(skip(state, body), fields(client = %addr.ip()))]
pub async fn login(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    if !state.login_limiter().check(addr.ip()).await {
        return Err(ApiError::RateLimited(
            "Too many login attempts, try again later".to_string(),
        ));
    }

    let invalid = || ApiError::Validation("Invalid credentials".to_string());

    let email = Email::parse(&body.email).map_err(|_| invalid())?;

    let admin = AdminRepository::new(state.pool())
        .find_by_email(&email)
        .await?
        .ok_or_else(invalid)?;

    if !passwords::verify(&body.password, &admin.password_hash) {
        return Err(invalid());
    }

    let token = state
        .tokens()
        .issue(&admin.id.to_string(), ROLE_ADMIN)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(admin_id = %admin.id, "admin logged in");
    Ok(Json(TokenResponse { token }))
}
