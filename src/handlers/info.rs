use crate::config::Config;
use crate::models::InfoResponse;
use crate::routes::KNOWN_ROUTES;

pub const APP_NAME: &str = "Test Workflow App";

/// Default body served for any path without its own route.
pub fn info(config: &Config) -> InfoResponse {
    InfoResponse {
        app: APP_NAME.to_string(),
        env: config.app_env.clone(),
        git_sha: config.git_sha.clone(),
        routes: KNOWN_ROUTES.iter().map(|route| route.to_string()).collect(),
    }
}
