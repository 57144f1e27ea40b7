pub mod health;
pub mod info;
pub mod secrets;

use crate::response::PrettyJson;
use crate::routes::Route;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Json,
};

/// Catch-all handler for every request.
///
/// Method, headers and body are ignored; only the URI path selects the
/// response, and every branch answers 200.
pub async fn dispatch(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let route = Route::from_path(uri.path());
    tracing::debug!(%method, path = uri.path(), ?route, "Dispatching request");

    match route {
        Route::Health => Json(health::health()).into_response(),
        Route::Secrets => PrettyJson(secrets::secrets(&state.config)).into_response(),
        Route::Other(_) => PrettyJson(info::info(&state.config)).into_response(),
    }
}
