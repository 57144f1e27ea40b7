use serde::{Deserialize, Serialize};

/// Response body for `/health`
#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Response body for `/secrets`
#[derive(Serialize, Deserialize)]
pub struct SecretsResponse {
    pub message: String,
    pub env: String,
    pub keys: SecretKeys,
}

/// Presence status per secret, `"loaded"` or `"missing"`
#[derive(Serialize, Deserialize)]
pub struct SecretKeys {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    pub password: String,
}

/// Response body for every path that is not explicitly routed
#[derive(Serialize, Deserialize)]
pub struct InfoResponse {
    pub app: String,
    pub env: String,
    #[serde(rename = "gitSha")]
    pub git_sha: String,
    pub routes: Vec<String>,
}
