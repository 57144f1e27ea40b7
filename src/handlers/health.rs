use crate::models::HealthResponse;

/// Liveness body for `/health`. Always `{"status":"ok"}`.
pub fn health() -> HealthResponse {
    HealthResponse {
        status: "ok".to_string(),
    }
}
