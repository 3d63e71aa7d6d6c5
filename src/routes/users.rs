//! Admin-only account management routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

use super::auth::{AdminUser, account_error_response};
use crate::services::accounts::{self, NewUser, Role};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    usuario: String,
    senha: String,
    nome_completo: String,
    email: String,
    #[serde(default)]
    role: Option<String>,
}

impl CreateUserRequest {
    /// Trim identity fields; an absent role means a plain user.
    pub(crate) fn into_new_user(self) -> Result<NewUser, &'static str> {
        let usuario = self.usuario.trim().to_owned();
        let email = self.email.trim().to_ascii_lowercase();
        let nome_completo = self.nome_completo.trim().to_owned();
        if usuario.is_empty() || email.is_empty() || nome_completo.is_empty() || self.senha.is_empty() {
            return Err("Usuário, senha, nome completo e email são obrigatórios.");
        }
        let role = self.role.as_deref().map_or(Role::User, Role::from_db);
        Ok(NewUser { usuario, senha: self.senha, nome_completo, email, role })
    }
}

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    senha_nova: String,
}

/// `GET /api/users`: list accounts without password hashes.
pub async fn list_users(State(state): State<AppState>, _admin: AdminUser) -> Response {
    match accounts::list_users(&state.pool).await {
        Ok(users) => Json(json!({ "users": users })).into_response(),
        Err(e) => account_error_response(e),
    }
}

/// `POST /api/users`: create an account.
pub async fn create_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(body): Json<CreateUserRequest>,
) -> Response {
    let new_user = match body.into_new_user() {
        Ok(u) => u,
        Err(message) => return (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response(),
    };

    match accounts::create_user(&state.pool, &new_user).await {
        Ok(id) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Usuário criado com sucesso", "user_id": id })),
        )
            .into_response(),
        Err(e) => account_error_response(e),
    }
}

/// `POST /api/users/{usuario}/reset-password`: admin password reset.
pub async fn reset_password(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(usuario): Path<String>,
    Json(body): Json<ResetPasswordRequest>,
) -> Response {
    match accounts::reset_password(&state.pool, &usuario, &body.senha_nova).await {
        Ok(()) => Json(json!({ "message": "Senha resetada com sucesso" })).into_response(),
        Err(e) => account_error_response(e),
    }
}

/// `POST /api/users/{usuario}/deactivate`: disable an account.
pub async fn deactivate_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(usuario): Path<String>,
) -> Response {
    if admin.user.usuario == usuario {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Não é possível desativar a própria conta" })))
            .into_response();
    }
    match accounts::deactivate_user(&state.pool, &usuario).await {
        Ok(()) => Json(json!({ "message": "Usuário desativado com sucesso" })).into_response(),
        Err(e) => account_error_response(e),
    }
}
