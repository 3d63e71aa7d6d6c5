//! Lead routes: public submission endpoint and admin-panel management.
//!
//! SYSTEM CONTEXT
//! ==============
//! The marketing site posts its contact form to `POST /api/leads` from a
//! different origin. The admin panel lists leads and deletes them through
//! `POST /{dashboard|painel}/deletar_lead/{id}`, which the browser-side
//! delete control calls without a body and judges by status alone.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use uuid::Uuid;

use super::auth::{AdminUser, AuthUser};
use crate::services::leads::{self, LeadError, LeadPayload, NewLead};
use crate::state::AppState;

pub(crate) fn lead_error_to_status(err: &LeadError) -> StatusCode {
    match err {
        LeadError::MissingFields => StatusCode::BAD_REQUEST,
        LeadError::NotFound(_) => StatusCode::NOT_FOUND,
        LeadError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn lead_error_response(err: LeadError) -> Response {
    let status = lead_error_to_status(&err);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "lead operation failed");
        return (status, Json(json!({ "error": "Erro interno do servidor" }))).into_response();
    }
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

/// Parse the opaque lead id carried by the delete link.
pub(crate) fn parse_lead_id(raw: &str) -> Result<Uuid, StatusCode> {
    Uuid::parse_str(raw.trim()).map_err(|_| StatusCode::BAD_REQUEST)
}

/// `GET /`: API banner.
pub async fn home() -> Json<serde_json::Value> {
    Json(json!({
        "message": "API EvoluteCode funcionando!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": { "leads": "/api/leads" },
    }))
}

/// `POST /api/leads`: validate and store a contact submission.
pub async fn create_lead(State(state): State<AppState>, Json(payload): Json<LeadPayload>) -> Response {
    let new_lead = match NewLead::from_payload(payload) {
        Ok(lead) => lead,
        Err(e) => return lead_error_response(e),
    };

    match leads::create_lead(&state.pool, &new_lead).await {
        Ok(lead) => {
            tracing::info!(lead_id = %lead.id, "lead captured");
            (StatusCode::CREATED, Json(json!({ "message": "Lead adicionado com sucesso!", "lead": lead })))
                .into_response()
        }
        Err(e) => lead_error_response(e),
    }
}

/// `GET /api/leads`: every lead, newest first.
pub async fn list_leads(State(state): State<AppState>, _admin: AdminUser) -> Response {
    match leads::list_leads(&state.pool).await {
        Ok(all) => Json(json!({ "leads": all })).into_response(),
        Err(e) => lead_error_response(e),
    }
}

/// `POST /dashboard/deletar_lead/{id}` and `POST /painel/deletar_lead/{id}`.
pub async fn delete_lead(State(state): State<AppState>, auth: AuthUser, Path(raw_id): Path<String>) -> Response {
    let id = match parse_lead_id(&raw_id) {
        Ok(id) => id,
        Err(status) => return status.into_response(),
    };

    match leads::delete_lead(&state.pool, id).await {
        Ok(()) => {
            tracing::info!(lead_id = %id, usuario = %auth.user.usuario, "lead deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => lead_error_response(e),
    }
}

#[cfg(test)]
#[path = "leads_test.rs"]
mod tests;
