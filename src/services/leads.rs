//! Lead service: validation, storage, and listing of contact submissions.
//!
//! DESIGN
//! ======
//! A lead is the `{nome, email, mensagem}` triple posted by the marketing
//! site's contact form. Timestamps are stored as `timestamptz` and rendered
//! in Brasília time (UTC-3) on the way out, matching what the admin panel
//! has always displayed.

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use time::{OffsetDateTime, UtcOffset};
use uuid::Uuid;

/// Fixed UTC-3 offset used for every rendered lead timestamp.
pub const BRT_OFFSET_HOURS: i8 = -3;

#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    #[error("Nome, email e mensagem são obrigatórios.")]
    MissingFields,
    #[error("lead not found: {0}")]
    NotFound(Uuid),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Incoming lead payload. Every field is optional at the wire level so a
/// partial body reaches validation instead of failing JSON extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadPayload {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub mensagem: Option<String>,
}

/// Validated lead ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub nome: String,
    pub email: String,
    pub mensagem: String,
}

impl NewLead {
    /// Trim all three fields and reject the payload if any is blank.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::MissingFields`] when a field is absent or blank.
    pub fn from_payload(payload: LeadPayload) -> Result<Self, LeadError> {
        let field = |value: Option<String>| {
            value
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .ok_or(LeadError::MissingFields)
        };
        Ok(Self { nome: field(payload.nome)?, email: field(payload.email)?, mensagem: field(payload.mensagem)? })
    }
}

/// Lead as returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub mensagem: String,
    /// `dd/mm/YYYY HH:MM:SS` in Brasília time.
    pub data: String,
}

/// Render a timestamp as `dd/mm/YYYY HH:MM:SS` in UTC-3.
#[must_use]
pub fn format_brt(ts: OffsetDateTime) -> String {
    let offset = UtcOffset::from_hms(BRT_OFFSET_HOURS, 0, 0).unwrap_or(UtcOffset::UTC);
    let local = ts.to_offset(offset);
    format!(
        "{:02}/{:02}/{:04} {:02}:{:02}:{:02}",
        local.day(),
        u8::from(local.month()),
        local.year(),
        local.hour(),
        local.minute(),
        local.second()
    )
}

fn lead_from_row(row: &sqlx::postgres::PgRow) -> Lead {
    let created_at: OffsetDateTime = row.get("created_at");
    Lead {
        id: row.get("id"),
        nome: row.get("nome"),
        email: row.get("email"),
        mensagem: row.get("mensagem"),
        data: format_brt(created_at),
    }
}

/// Insert a validated lead and return it with its id and timestamp.
pub async fn create_lead(pool: &PgPool, lead: &NewLead) -> Result<Lead, LeadError> {
    let row = sqlx::query(
        r"INSERT INTO leads (nome, email, mensagem)
          VALUES ($1, $2, $3)
          RETURNING id, nome, email, mensagem, created_at",
    )
    .bind(&lead.nome)
    .bind(&lead.email)
    .bind(&lead.mensagem)
    .fetch_one(pool)
    .await?;
    Ok(lead_from_row(&row))
}

/// List every lead, newest first.
pub async fn list_leads(pool: &PgPool) -> Result<Vec<Lead>, LeadError> {
    let rows = sqlx::query("SELECT id, nome, email, mensagem, created_at FROM leads ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(lead_from_row).collect())
}

/// Delete one lead by id.
pub async fn delete_lead(pool: &PgPool, id: Uuid) -> Result<(), LeadError> {
    let result = sqlx::query("DELETE FROM leads WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(LeadError::NotFound(id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "leads_test.rs"]
mod tests;
