use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionUser
// =============================================================================

#[test]
fn session_user_serializes_role_lowercase() {
    let user = SessionUser {
        id: Uuid::nil(),
        usuario: "admin".into(),
        nome_completo: "Administrador".into(),
        email: "admin@evolutecode.com".into(),
        role: Role::Admin,
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["usuario"], "admin");
    assert_eq!(json["role"], "admin");
    assert!(json.get("senha_hash").is_none());
}
