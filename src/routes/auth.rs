//! Auth routes: admin login, logout, current user, password change.

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::services::accounts::{self, AccountError, Role};
use crate::services::session;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

// =============================================================================
// AUTH EXTRACTORS
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_token(&jar).ok_or(StatusCode::UNAUTHORIZED)?;

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

/// Authenticated user whose role is `admin`.
pub struct AdminUser(pub AuthUser);

impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        require_admin(auth.user.role)?;
        Ok(Self(auth))
    }
}

fn session_token(jar: &CookieJar) -> Option<&str> {
    jar.get(COOKIE_NAME)
        .map(Cookie::value)
        .filter(|token| !token.is_empty())
}

pub(crate) fn require_admin(role: Role) -> Result<(), StatusCode> {
    match role {
        Role::Admin => Ok(()),
        Role::User => Err(StatusCode::FORBIDDEN),
    }
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

pub(crate) fn account_error_to_status(err: &AccountError) -> StatusCode {
    match err {
        AccountError::UserExists | AccountError::EmailTaken => StatusCode::CONFLICT,
        AccountError::InvalidCredentials | AccountError::WrongCurrentPassword => StatusCode::UNAUTHORIZED,
        AccountError::Inactive => StatusCode::FORBIDDEN,
        AccountError::Locked | AccountError::LockedNow => StatusCode::LOCKED,
        AccountError::NotFound => StatusCode::NOT_FOUND,
        AccountError::PasswordTooShort => StatusCode::BAD_REQUEST,
        AccountError::Hash(_) | AccountError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render an account error as `{ "error": message }` with its status.
/// Internal failures are logged and reported generically.
pub(crate) fn account_error_response(err: AccountError) -> Response {
    let status = account_error_to_status(&err);
    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "account operation failed");
        "Erro interno do servidor".to_owned()
    } else {
        err.to_string()
    };
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    usuario: String,
    senha: String,
}

/// `POST /api/auth/login`: verify credentials, set the session cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<LoginRequest>) -> Response {
    let usuario = body.usuario.trim();
    if usuario.is_empty() || body.senha.is_empty() {
        return account_error_response(AccountError::InvalidCredentials);
    }

    let user_id = match accounts::authenticate(&state.pool, usuario, &body.senha).await {
        Ok(id) => id,
        Err(e) => return account_error_response(e),
    };

    let token = match session::create_session(&state.pool, user_id).await {
        Ok(t) => t,
        Err(e) => return account_error_response(e.into()),
    };

    let user = match session::validate_session(&state.pool, &token).await {
        Ok(Some(user)) => user,
        Ok(None) => return StatusCode::UNAUTHORIZED.into_response(),
        Err(e) => return account_error_response(e.into()),
    };

    let jar = jar.add(session_cookie(token, state.cookie_secure));
    (jar, Json(user)).into_response()
}

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, "session delete failed during logout");
    }
    let jar = CookieJar::new().add(cleared_session_cookie(state.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    senha_atual: String,
    senha_nova: String,
}

/// `POST /api/auth/password`: change the current user's password.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<ChangePasswordRequest>,
) -> Response {
    match accounts::change_password(&state.pool, &auth.user.usuario, &body.senha_atual, &body.senha_nova).await {
        Ok(()) => Json(serde_json::json!({ "message": "Senha alterada com sucesso" })).into_response(),
        Err(e) => account_error_response(e),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
