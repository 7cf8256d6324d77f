//! Registration, login, and session handlers

use axum::{
    extract::State,
    response::Redirect,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;

use crate::accounts::{Account, AccountResponse, LoginError, LoginRequest, RegisterRequest};
use crate::error::ApiError;
use crate::session::SESSION_COOKIE;
use crate::state::AppState;

/// Login response wrapper; the frontend reads `userData`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(rename = "userData")]
    pub user_data: AccountResponse,
}

/// POST /register - create an account with a hashed password
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<Account>, ApiError> {
    let account = state
        .account_service
        .register(req)
        .await
        .map_err(|e| ApiError::Storage(e.to_string()))?;

    Ok(Json(account))
}

/// POST /login - verify credentials, open a session, return the account
/// minus its password field
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    let account = state
        .account_service
        .login(&req.name, &req.password)
        .await
        .map_err(|e| match e {
            LoginError::UserNotFound => ApiError::NotFound(e.to_string()),
            LoginError::WrongPassword => ApiError::Auth(e.to_string()),
            LoginError::Hash(e) => ApiError::Internal(e.to_string()),
            LoginError::Db(e) => ApiError::Storage(e.to_string()),
        })?;

    let session_id = state.sessions.create(account.id, &account.name);
    let cookie = Cookie::build((SESSION_COOKIE, session_id.to_string()))
        .path("/")
        .http_only(true)
        .build();

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            user_data: account.into(),
        }),
    ))
}

/// GET /getlogin - one arbitrary stored account (may be null)
pub async fn get_login(
    State(state): State<AppState>,
) -> Result<Json<Option<Account>>, ApiError> {
    let account = state.account_service.first_account().await?;
    Ok(Json(account))
}

/// GET /logout - destroy the session and redirect home
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Ok(session_id) = cookie.value().parse() {
            state.sessions.destroy(&session_id);
        }
    }

    let removal = Cookie::build(SESSION_COOKIE).path("/").build();
    (jar.remove(removal), Redirect::to("/"))
}
