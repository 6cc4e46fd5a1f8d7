use std::{collections::HashMap, path::PathBuf};

use etsyproxy::config::*;

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn minimal() -> HashMap<String, String> {
    vars(&[
        (ETSY_API_KEYSTRING, "keystring123"),
        (ETSY_CODE_VERIFIER, "verifier456"),
    ])
}

#[test]
fn test_defaults() {
    let config = Config::from_vars(&minimal(), None, &Overrides::default()).unwrap();

    assert_eq!(config.server_addr.port(), DEFAULT_PORT);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.connect_url, DEFAULT_CONNECT_URL);
    assert_eq!(config.api_key, "keystring123");
    assert_eq!(config.scope, DEFAULT_SCOPE);
    assert_eq!(config.views_dir, PathBuf::from(DEFAULT_VIEWS_DIR));
    assert_eq!(config.refresh_token, None);

    // Client id falls back to the keystring
    assert_eq!(config.credentials.client_id, "keystring123");
    assert_eq!(config.credentials.code_verifier, "verifier456");
    assert_eq!(
        config.credentials.redirect_uri,
        "http://localhost:3003/oauth/redirect"
    );
}

#[test]
fn test_missing_keystring() {
    let vars = vars(&[(ETSY_CODE_VERIFIER, "verifier456")]);
    let err = Config::from_vars(&vars, None, &Overrides::default()).unwrap_err();

    assert!(matches!(err, ConfigError::Missing(ETSY_API_KEYSTRING)));
    assert_eq!(err.to_string(), "ETSY_API_KEYSTRING must be set");
}

#[test]
fn test_missing_code_verifier() {
    let vars = vars(&[(ETSY_API_KEYSTRING, "keystring123")]);
    let err = Config::from_vars(&vars, None, &Overrides::default()).unwrap_err();

    assert!(matches!(err, ConfigError::Missing(ETSY_CODE_VERIFIER)));
}

#[test]
fn test_empty_values_count_as_unset() {
    let mut vars = minimal();
    vars.insert(ETSY_REFRESH_TOKEN.to_string(), "".to_string());
    vars.insert(ETSY_CLIENT_ID.to_string(), "  ".to_string());
    vars.insert(SERVER_PORT.to_string(), "".to_string());

    let config = Config::from_vars(&vars, None, &Overrides::default()).unwrap();

    assert_eq!(config.refresh_token, None);
    assert_eq!(config.credentials.client_id, "keystring123");
    assert_eq!(config.server_addr.port(), DEFAULT_PORT);
}

#[test]
fn test_invalid_port() {
    let mut vars = minimal();
    vars.insert(SERVER_PORT.to_string(), "http".to_string());

    let err = Config::from_vars(&vars, None, &Overrides::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: SERVER_PORT, .. }));
}

#[test]
fn test_server_address_wins_over_port() {
    let mut vars = minimal();
    vars.insert(SERVER_PORT.to_string(), "4000".to_string());
    vars.insert(SERVER_ADDRESS.to_string(), "127.0.0.1:5000".to_string());

    let config = Config::from_vars(&vars, None, &Overrides::default()).unwrap();
    assert_eq!(config.server_addr.to_string(), "127.0.0.1:5000");
}

#[test]
fn test_port_override_moves_default_redirect() {
    let overrides = Overrides {
        port: Some(8080),
        views_dir: Some(PathBuf::from("/srv/views")),
    };

    let config = Config::from_vars(&minimal(), None, &overrides).unwrap();

    assert_eq!(config.server_addr.port(), 8080);
    assert_eq!(
        config.credentials.redirect_uri,
        "http://localhost:8080/oauth/redirect"
    );
    assert_eq!(config.views_dir, PathBuf::from("/srv/views"));
}

#[test]
fn test_explicit_values() {
    let vars = vars(&[
        (ETSY_API_KEYSTRING, "keystring123"),
        (ETSY_CLIENT_ID, "client789"),
        (ETSY_CODE_VERIFIER, "verifier456"),
        (ETSY_REDIRECT_URI, "https://example.com/oauth/redirect"),
        (ETSY_REFRESH_TOKEN, "123.refresh"),
        (ETSY_API_URL, "http://127.0.0.1:9999/v3/"),
        (ETSY_SCOPE, "shops_r"),
    ]);

    let config = Config::from_vars(&vars, None, &Overrides::default()).unwrap();

    assert_eq!(config.credentials.client_id, "client789");
    assert_eq!(
        config.credentials.redirect_uri,
        "https://example.com/oauth/redirect"
    );
    assert_eq!(config.refresh_token.as_deref(), Some("123.refresh"));
    // Trailing slash is dropped
    assert_eq!(config.api_url, "http://127.0.0.1:9999/v3");
    assert_eq!(config.scope, "shops_r");
}

#[test]
fn test_secrets_fill_gaps() {
    let vars = vars(&[(ETSY_CODE_VERIFIER, "verifier456")]);
    let secrets = Secrets {
        keystring: Some("from_secrets".to_string()),
        refresh_token: Some("secret.refresh".to_string()),
    };

    let config = Config::from_vars(&vars, Some(secrets), &Overrides::default()).unwrap();

    assert_eq!(config.api_key, "from_secrets");
    assert_eq!(config.credentials.client_id, "from_secrets");
    assert_eq!(config.refresh_token.as_deref(), Some("secret.refresh"));
}

#[test]
fn test_environment_wins_over_secrets() {
    let mut vars = minimal();
    vars.insert(ETSY_REFRESH_TOKEN.to_string(), "env.refresh".to_string());
    let secrets = Secrets {
        keystring: Some("from_secrets".to_string()),
        refresh_token: Some("secret.refresh".to_string()),
    };

    let config = Config::from_vars(&vars, Some(secrets), &Overrides::default()).unwrap();

    assert_eq!(config.api_key, "keystring123");
    assert_eq!(config.refresh_token.as_deref(), Some("env.refresh"));
}

#[tokio::test]
async fn test_read_secrets_file() {
    let path = std::env::temp_dir().join(format!("etsyproxy-secrets-{}.json", std::process::id()));
    async_fs::write(
        &path,
        r#"{"store_id": 123, "shared_secret": "s", "keystring": "ks", "access_token": "a", "refresh_token": "r"}"#,
    )
    .await
    .unwrap();

    let secrets = Secrets::read(&path).await.unwrap();
    async_fs::remove_file(&path).await.unwrap();

    assert_eq!(secrets.keystring.as_deref(), Some("ks"));
    assert_eq!(secrets.refresh_token.as_deref(), Some("r"));
}

#[tokio::test]
async fn test_read_missing_secrets_file() {
    let err = Secrets::read("/definitely/not/here/secrets.json")
        .await
        .unwrap_err();
    assert!(matches!(err, ConfigError::SecretsIo(_)));
}
