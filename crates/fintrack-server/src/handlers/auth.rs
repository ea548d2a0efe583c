//! Authentication handlers: register, login, identity

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::{issue_token, AppError, AppState, AuthUser};
use fintrack_core::models::User;

/// Minimum accepted password length
const MIN_PASSWORD_LEN: usize = 8;

/// Request body for registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for register/login: the user plus a bearer token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Response for the /api/me endpoint
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: i64,
    pub email: String,
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::from(anyhow::anyhow!("Failed to hash password: {}", e)))
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// POST /api/auth/register - Create a user and return a bearer token
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let name = body.name.trim();
    let email = body.email.trim().to_lowercase();

    if name.is_empty() {
        return Err(AppError::bad_request("Please provide a name"));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::bad_request("Please provide a valid email address"));
    }
    if body.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::bad_request(
            "Password must be at least 8 characters",
        ));
    }

    if state.db.get_user_by_email(&email)?.is_some() {
        return Err(AppError::bad_request("Email already registered"));
    }

    let password_hash = hash_password(&body.password)?;
    let id = state.db.create_user(name, &email, &password_hash)?;
    let user = state
        .db
        .get_user(id)?
        .ok_or_else(|| AppError::internal("User missing after insert"))?;

    let token = issue_token(user.id, &user.email, &state.config.jwt_secret)?;

    state
        .db
        .log_audit(&user.email, "register", Some("user"), Some(user.id), None)?;

    Ok(Json(AuthResponse { token, user }))
}

/// POST /api/auth/login - Verify credentials and return a bearer token
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = body.email.trim().to_lowercase();

    // Same response whether the email is unknown or the password is wrong
    let user = state
        .db
        .get_user_by_email(&email)?
        .filter(|user| verify_password(&body.password, &user.password_hash))
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

    let token = issue_token(user.id, &user.email, &state.config.jwt_secret)?;

    state
        .db
        .log_audit(&user.email, "login", Some("user"), Some(user.id), None)?;

    Ok(Json(AuthResponse { token, user }))
}

/// GET /api/me - The currently authenticated user
pub async fn get_me(Extension(user): Extension<AuthUser>) -> Json<MeResponse> {
    Json(MeResponse {
        id: user.id,
        email: user.email,
    })
}
