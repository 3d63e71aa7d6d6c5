//! Admin account service: creation, login with lockout, password changes.
//!
//! DESIGN
//! ======
//! Lockout bookkeeping lives on the `users` row (`login_attempts`,
//! `locked_until`). The decision of what a failed or successful attempt does
//! to that bookkeeping is computed by pure functions (`precheck`,
//! `record_failure`) so it can be tested without a database; the async
//! functions only load the row, apply the decision, and write it back.
//!
//! TRADE-OFFS
//! ==========
//! Unknown user and wrong password produce the same error so the login form
//! does not reveal which usernames exist.

use serde::Serialize;
use sqlx::{PgPool, Row};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use super::leads::format_brt;
use super::password::{HashError, hash_password, verify_password};
use super::session;

/// Consecutive failures that trigger a lock.
pub const MAX_LOGIN_ATTEMPTS: i32 = 5;
/// How long a lock lasts.
pub const LOCKOUT_MINUTES: i64 = 15;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const ADMIN_USERNAME: &str = "admin";

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Usuário já existe")]
    UserExists,
    #[error("Email já cadastrado")]
    EmailTaken,
    #[error("Usuário ou senha inválidos")]
    InvalidCredentials,
    #[error("Conta desativada. Contate o administrador.")]
    Inactive,
    #[error("Conta temporariamente bloqueada. Tente novamente mais tarde.")]
    Locked,
    #[error("Conta bloqueada por 15 minutos devido a múltiplas tentativas falhas")]
    LockedNow,
    #[error("Usuário não encontrado")]
    NotFound,
    #[error("Senha atual incorreta")]
    WrongCurrentPassword,
    #[error("A nova senha deve ter no mínimo 6 caracteres")]
    PasswordTooShort,
    #[error(transparent)]
    Hash(#[from] HashError),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Unknown role strings degrade to `User`.
    #[must_use]
    pub fn from_db(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("admin") { Self::Admin } else { Self::User }
    }
}

/// Fields needed to create an account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub usuario: String,
    pub senha: String,
    pub nome_completo: String,
    pub email: String,
    pub role: Role,
}

/// Account listing row; never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub usuario: String,
    pub nome_completo: String,
    pub email: String,
    pub role: Role,
    pub ativo: bool,
    pub data_criacao: String,
    pub ultimo_login: Option<String>,
}

// =============================================================================
// LOCKOUT RULES
// =============================================================================

/// Lockout-relevant slice of a `users` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginState {
    pub ativo: bool,
    pub attempts: i32,
    pub locked_until: Option<OffsetDateTime>,
}

/// Bookkeeping to write back after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailedAttempt {
    pub attempts: i32,
    pub locked_until: Option<OffsetDateTime>,
}

/// Reject inactive or currently locked accounts before checking the password.
///
/// # Errors
///
/// [`AccountError::Inactive`] or [`AccountError::Locked`].
pub fn precheck(state: &LoginState, now: OffsetDateTime) -> Result<(), AccountError> {
    if !state.ativo {
        return Err(AccountError::Inactive);
    }
    if state.locked_until.is_some_and(|until| until > now) {
        return Err(AccountError::Locked);
    }
    Ok(())
}

/// Compute the new attempt counter and lock after a wrong password.
/// An expired lock starts the count over.
#[must_use]
pub fn record_failure(state: &LoginState, now: OffsetDateTime) -> FailedAttempt {
    let previous = if state.locked_until.is_some_and(|until| until <= now) { 0 } else { state.attempts };
    let attempts = previous + 1;
    let locked_until = (attempts >= MAX_LOGIN_ATTEMPTS).then(|| now + Duration::minutes(LOCKOUT_MINUTES));
    FailedAttempt { attempts, locked_until }
}

/// Reject passwords shorter than [`MIN_PASSWORD_LEN`] characters.
///
/// # Errors
///
/// [`AccountError::PasswordTooShort`].
pub fn validate_new_password(senha: &str) -> Result<(), AccountError> {
    if senha.chars().count() < MIN_PASSWORD_LEN {
        return Err(AccountError::PasswordTooShort);
    }
    Ok(())
}

// =============================================================================
// DATABASE OPERATIONS
// =============================================================================

/// Create an account. Username and email must both be unused.
pub async fn create_user(pool: &PgPool, new_user: &NewUser) -> Result<Uuid, AccountError> {
    let username_taken: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE usuario = $1)")
        .bind(&new_user.usuario)
        .fetch_one(pool)
        .await?;
    if username_taken {
        return Err(AccountError::UserExists);
    }

    let email_taken: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
        .bind(&new_user.email)
        .fetch_one(pool)
        .await?;
    if email_taken {
        return Err(AccountError::EmailTaken);
    }

    let senha_hash = hash_password(&new_user.senha)?;
    let row = sqlx::query(
        r"INSERT INTO users (usuario, senha_hash, nome_completo, email, role)
          VALUES ($1, $2, $3, $4, $5)
          RETURNING id",
    )
    .bind(&new_user.usuario)
    .bind(&senha_hash)
    .bind(&new_user.nome_completo)
    .bind(&new_user.email)
    .bind(new_user.role.as_str())
    .fetch_one(pool)
    .await?;

    let id: Uuid = row.get("id");
    tracing::info!(usuario = %new_user.usuario, %id, "user created");
    Ok(id)
}

/// Verify credentials, applying the lockout rules. Returns the user id.
///
/// The user row is locked for the whole check so concurrent attempts are
/// counted one after another.
pub async fn authenticate(pool: &PgPool, usuario: &str, senha: &str) -> Result<Uuid, AccountError> {
    let mut tx = pool.begin().await?;
    let row = sqlx::query(
        "SELECT id, senha_hash, ativo, login_attempts, locked_until FROM users WHERE usuario = $1 FOR UPDATE",
    )
    .bind(usuario)
    .fetch_optional(tx.as_mut())
    .await?;

    let Some(row) = row else {
        tracing::warn!(%usuario, "login attempt for unknown user");
        return Err(AccountError::InvalidCredentials);
    };

    let id: Uuid = row.get("id");
    let senha_hash: String = row.get("senha_hash");
    let state = LoginState {
        ativo: row.get("ativo"),
        attempts: row.get("login_attempts"),
        locked_until: row.get("locked_until"),
    };
    let now = OffsetDateTime::now_utc();

    precheck(&state, now)?;

    if verify_password(senha, &senha_hash) {
        sqlx::query("UPDATE users SET last_login = now(), login_attempts = 0, locked_until = NULL WHERE id = $1")
            .bind(id)
            .execute(tx.as_mut())
            .await?;
        tx.commit().await?;
        tracing::info!(%usuario, "login succeeded");
        return Ok(id);
    }

    let failed = record_failure(&state, now);
    sqlx::query("UPDATE users SET login_attempts = $2, locked_until = $3 WHERE id = $1")
        .bind(id)
        .bind(failed.attempts)
        .bind(failed.locked_until)
        .execute(tx.as_mut())
        .await?;
    tx.commit().await?;

    if failed.locked_until.is_some() {
        tracing::warn!(%usuario, attempts = failed.attempts, "account locked after repeated failures");
        return Err(AccountError::LockedNow);
    }
    tracing::warn!(%usuario, attempts = failed.attempts, "login failed");
    Err(AccountError::InvalidCredentials)
}

/// Change a password after verifying the current one.
pub async fn change_password(pool: &PgPool, usuario: &str, atual: &str, nova: &str) -> Result<(), AccountError> {
    let row = sqlx::query("SELECT id, senha_hash FROM users WHERE usuario = $1")
        .bind(usuario)
        .fetch_optional(pool)
        .await?
        .ok_or(AccountError::NotFound)?;

    let senha_hash: String = row.get("senha_hash");
    if !verify_password(atual, &senha_hash) {
        return Err(AccountError::WrongCurrentPassword);
    }
    validate_new_password(nova)?;

    let id: Uuid = row.get("id");
    let novo_hash = hash_password(nova)?;
    sqlx::query("UPDATE users SET senha_hash = $2 WHERE id = $1")
        .bind(id)
        .bind(novo_hash)
        .execute(pool)
        .await?;
    tracing::info!(%usuario, "password changed");
    Ok(())
}

/// Admin reset: set a new password without the old one and clear any lock.
pub async fn reset_password(pool: &PgPool, usuario: &str, nova: &str) -> Result<(), AccountError> {
    validate_new_password(nova)?;
    let novo_hash = hash_password(nova)?;
    let id: Uuid = sqlx::query_scalar(
        r"UPDATE users
          SET senha_hash = $2, login_attempts = 0, locked_until = NULL
          WHERE usuario = $1
          RETURNING id",
    )
    .bind(usuario)
    .bind(novo_hash)
    .fetch_optional(pool)
    .await?
    .ok_or(AccountError::NotFound)?;

    session::delete_user_sessions(pool, id).await?;
    tracing::info!(%usuario, "password reset by admin");
    Ok(())
}

/// List every account without password hashes.
pub async fn list_users(pool: &PgPool) -> Result<Vec<UserSummary>, AccountError> {
    let rows = sqlx::query(
        r"SELECT id, usuario, nome_completo, email, role, ativo, created_at, last_login
          FROM users ORDER BY created_at",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|r| {
            let role: String = r.get("role");
            let created_at: OffsetDateTime = r.get("created_at");
            let last_login: Option<OffsetDateTime> = r.get("last_login");
            UserSummary {
                id: r.get("id"),
                usuario: r.get("usuario"),
                nome_completo: r.get("nome_completo"),
                email: r.get("email"),
                role: Role::from_db(&role),
                ativo: r.get("ativo"),
                data_criacao: format_brt(created_at),
                ultimo_login: last_login.map(format_brt),
            }
        })
        .collect())
}

/// Deactivate an account (kept, not deleted) and end its sessions.
pub async fn deactivate_user(pool: &PgPool, usuario: &str) -> Result<(), AccountError> {
    let id: Uuid = sqlx::query_scalar("UPDATE users SET ativo = FALSE WHERE usuario = $1 RETURNING id")
        .bind(usuario)
        .fetch_optional(pool)
        .await?
        .ok_or(AccountError::NotFound)?;

    session::delete_user_sessions(pool, id).await?;
    tracing::info!(%usuario, "user deactivated");
    Ok(())
}

/// Create the `admin` account with `password` unless it already exists.
pub async fn ensure_admin(pool: &PgPool, password: &str) -> Result<(), AccountError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE usuario = $1)")
        .bind(ADMIN_USERNAME)
        .fetch_one(pool)
        .await?;
    if exists {
        tracing::debug!("admin account already present");
        return Ok(());
    }

    create_user(
        pool,
        &NewUser {
            usuario: ADMIN_USERNAME.to_owned(),
            senha: password.to_owned(),
            nome_completo: "Administrador".to_owned(),
            email: "admin@evolutecode.com".to_owned(),
            role: Role::Admin,
        },
    )
    .await?;
    tracing::warn!("bootstrap admin account created; change its password");
    Ok(())
}

#[cfg(test)]
#[path = "accounts_test.rs"]
mod tests;
