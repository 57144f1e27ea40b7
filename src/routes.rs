// Route path constants - single source of truth for all served paths

pub const HEALTH: &str = "/health";
pub const SECRETS: &str = "/secrets";

/// Paths advertised by the info response, in order.
pub const KNOWN_ROUTES: [&str; 2] = [HEALTH, SECRETS];

/// Closed set of responses the server can give.
///
/// `Other` is a total catch-all: unknown paths get the info body with a
/// 200, never a 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Health,
    Secrets,
    Other(String),
}

impl Route {
    /// Exact, case-sensitive match on the request path (query excluded).
    pub fn from_path(path: &str) -> Self {
        match path {
            HEALTH => Route::Health,
            SECRETS => Route::Secrets,
            other => Route::Other(other.to_string()),
        }
    }
}
