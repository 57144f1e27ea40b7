use crate::config::Config;
use crate::models::{SecretKeys, SecretsResponse};

pub const SECRETS_MESSAGE: &str = "Secrets loaded from Infisical via fetch-infisical-env.sh";

/// Body for `/secrets`: reports whether each secret is present, never its value.
pub fn secrets(config: &Config) -> SecretsResponse {
    SecretsResponse {
        message: SECRETS_MESSAGE.to_string(),
        env: config.app_env.clone(),
        keys: SecretKeys {
            api_key: config.api_key_status().to_string(),
            password: config.password_status().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{send, test_app};
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_secrets_missing_by_default() {
        let (status, content_type, body) = send(test_app(&[]), "GET", "/secrets").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/json");

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json,
            json!({
                "message": SECRETS_MESSAGE,
                "env": "dev",
                "keys": { "apiKey": "missing", "password": "missing" }
            })
        );
    }

    #[tokio::test]
    async fn test_secrets_loaded_without_echoing_values() {
        let app = test_app(&[
            ("APIkey", "sk-live-0123456789"),
            ("password", "correct-horse-battery"),
            ("APP_ENV", "staging"),
        ]);
        let (status, _, body) = send(app, "POST", "/secrets").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("sk-live-0123456789"));
        assert!(!body.contains("correct-horse-battery"));

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["env"], "staging");
        assert_eq!(json["keys"]["apiKey"], "loaded");
        assert_eq!(json["keys"]["password"], "loaded");
    }

    #[tokio::test]
    async fn test_secrets_literal_sentinel_is_missing() {
        let app = test_app(&[("APIkey", "NOT SET"), ("password", "x")]);
        let (_, _, body) = send(app, "GET", "/secrets").await;

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["keys"]["apiKey"], "missing");
        assert_eq!(json["keys"]["password"], "loaded");
    }

    #[tokio::test]
    async fn test_secrets_is_pretty_printed() {
        let (_, _, body) = send(test_app(&[]), "GET", "/secrets").await;

        assert!(body.starts_with("{\n  \"message\": "));
        assert!(body.contains("\n  \"keys\": {\n    \"apiKey\": \"missing\",\n"));
    }
}
