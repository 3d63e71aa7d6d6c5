use super::*;
use crate::state::test_helpers;

async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn lead_error_to_status_maps_variants() {
    assert_eq!(lead_error_to_status(&LeadError::MissingFields), StatusCode::BAD_REQUEST);
    assert_eq!(lead_error_to_status(&LeadError::NotFound(Uuid::nil())), StatusCode::NOT_FOUND);
    assert_eq!(lead_error_to_status(&LeadError::Db(sqlx::Error::RowNotFound)), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn parse_lead_id_accepts_uuid() {
    let id = Uuid::new_v4();
    assert_eq!(parse_lead_id(&id.to_string()), Ok(id));
    assert_eq!(parse_lead_id(&format!(" {id} ")), Ok(id));
}

#[test]
fn parse_lead_id_rejects_garbage() {
    assert_eq!(parse_lead_id("undefined"), Err(StatusCode::BAD_REQUEST));
    assert_eq!(parse_lead_id(""), Err(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn home_lists_leads_endpoint() {
    let Json(body) = home().await;
    assert_eq!(body["message"], "API EvoluteCode funcionando!");
    assert_eq!(body["endpoints"]["leads"], "/api/leads");
}

#[tokio::test]
async fn create_lead_rejects_blank_fields_before_touching_db() {
    // The lazy pool never connects; a 400 proves validation short-circuits.
    let state = test_helpers::test_app_state();
    let payload = LeadPayload { nome: Some("Ana".into()), email: Some("   ".into()), mensagem: Some("oi".into()) };

    let resp = create_lead(State(state), Json(payload)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Nome, email e mensagem são obrigatórios.");
}

#[tokio::test]
async fn create_lead_rejects_empty_body() {
    let state = test_helpers::test_app_state();
    let resp = create_lead(State(state), Json(LeadPayload::default())).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn not_found_error_body_names_the_lead() {
    let id = Uuid::new_v4();
    let resp = lead_error_response(LeadError::NotFound(id));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains(&id.to_string()));
}
