//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the public lead endpoint (called cross-origin by
//! the marketing site), the admin auth/account API, and both historical
//! spellings of the admin panel's delete route. Everything else falls through
//! to the static directory holding the site, the admin panel, and the WASM
//! bundle under `/pkg`, so the panel's delete links post same-origin.

pub mod auth;
pub mod leads;
pub mod users;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Path prefixes under which the admin panel posts lead deletions.
pub const DELETE_LEAD_PREFIXES: [&str; 2] = ["/dashboard", "/painel"];

/// Build the application router, serving `static_dir` for non-API paths.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/", get(leads::home))
        .route("/healthz", get(healthz))
        .route("/api/leads", get(leads::list_leads).post(leads::create_lead))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/password", post(auth::change_password))
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route("/api/users/{usuario}/reset-password", post(users::reset_password))
        .route("/api/users/{usuario}/deactivate", post(users::deactivate_user));

    for prefix in DELETE_LEAD_PREFIXES {
        router = router.route(&format!("{prefix}/deletar_lead/{{id}}"), post(leads::delete_lead));
    }

    router
        .nest_service("/pkg", ServeDir::new(static_dir.join("pkg")))
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
