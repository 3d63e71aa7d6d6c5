use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/evolute")])).unwrap();
    assert_eq!(cfg.database_url, "postgres://localhost/evolute");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert!(!cfg.cookie_secure);
    assert!(cfg.admin_password.is_none());
    assert_eq!(cfg.static_dir, default_static_dir());
}

#[test]
fn from_lookup_requires_database_url() {
    assert_eq!(Config::from_lookup(lookup_from(&[])), Err(ConfigError::Missing("DATABASE_URL")));
    assert_eq!(
        Config::from_lookup(lookup_from(&[("DATABASE_URL", "   ")])),
        Err(ConfigError::Missing("DATABASE_URL"))
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = Config::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/evolute"),
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("COOKIE_SECURE", "yes"),
        ("ADMIN_PASSWORD", "Admin@123"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.db_max_connections, 12);
    assert!(cfg.cookie_secure);
    assert_eq!(cfg.admin_password.as_deref(), Some("Admin@123"));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db"), ("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "http".into() });
}

#[test]
fn from_lookup_rejects_bad_cookie_flag() {
    let err =
        Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db"), ("COOKIE_SECURE", "maybe")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "COOKIE_SECURE", value: "maybe".into() });
}

#[test]
fn empty_admin_password_is_ignored() {
    let cfg =
        Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db"), ("ADMIN_PASSWORD", "")])).unwrap();
    assert!(cfg.admin_password.is_none());
}

#[test]
fn parse_bool_variants() {
    for val in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
    for val in ["0", "False", "no", "off"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("maybe"), None);
}

#[test]
fn static_dir_override() {
    let cfg = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db"), ("STATIC_DIR", "/srv/evolute")]))
        .unwrap();
    assert_eq!(cfg.static_dir, std::path::PathBuf::from("/srv/evolute"));
}
