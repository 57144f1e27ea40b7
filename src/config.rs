use std::env;
use std::fmt;

/// Fallback value for secrets that are absent from the environment.
pub const SECRET_SENTINEL: &str = "NOT SET";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_APP_ENV: &str = "dev";
pub const DEFAULT_GIT_SHA: &str = "local";
pub const SERVICE_HOST: &str = "0.0.0.0";

/// Process configuration, read once at startup and never reloaded.
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub api_key: String,
    pub password: String,
    pub app_env: String,
    pub git_sha: String,
}

/// Derived presence indicator for a secret. The value itself is never exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretStatus {
    Loaded,
    Missing,
}

impl SecretStatus {
    /// Compares against the literal sentinel. An operator who sets the
    /// variable to `NOT SET` gets `Missing`.
    pub fn of(value: &str) -> Self {
        if value != SECRET_SENTINEL {
            SecretStatus::Loaded
        } else {
            SecretStatus::Missing
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SecretStatus::Loaded => "loaded",
            SecretStatus::Missing => "missing",
        }
    }
}

impl fmt::Display for SecretStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values count as unset. A `PORT` that is not a valid `u16`
    /// falls back to [`DEFAULT_PORT`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = var("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_key = var("APIkey").unwrap_or_else(|| SECRET_SENTINEL.to_string());
        let password = var("password").unwrap_or_else(|| SECRET_SENTINEL.to_string());
        let app_env = var("APP_ENV").unwrap_or_else(|| DEFAULT_APP_ENV.to_string());
        let git_sha = var("GIT_SHA").unwrap_or_else(|| DEFAULT_GIT_SHA.to_string());

        Config {
            port,
            api_key,
            password,
            app_env,
            git_sha,
        }
    }

    pub fn api_key_status(&self) -> SecretStatus {
        SecretStatus::of(&self.api_key)
    }

    pub fn password_status(&self) -> SecretStatus {
        SecretStatus::of(&self.password)
    }

    pub fn log_startup(&self) {
        tracing::info!(
            port = self.port,
            env = %self.app_env,
            git_sha = %self.git_sha,
            api_key = %self.api_key_status(),
            password = %self.password_status(),
            "Configuration loaded"
        );
    }

    /// Fixed-format banner announcing a bound listener.
    pub fn startup_banner(&self, port: u16) -> String {
        let divider = "─".repeat(40);
        format!(
            "{divider}\n  Server running on port {port}\n  ENV        : {}\n  APIkey     : {}\n  password   : {}\n{divider}",
            self.app_env,
            self.api_key_status(),
            self.password_status(),
        )
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("api_key", &self.api_key_status())
            .field("password", &self.password_status())
            .field("app_env", &self.app_env)
            .field("git_sha", &self.git_sha)
            .finish()
    }
}
