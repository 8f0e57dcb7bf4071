pub mod artist;
pub mod health;
pub mod label;
pub mod recording;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /recordings                     index
/// /recordings/create              blank form (GET), submit (POST)
/// /recordings/edit?id=            pre-populated form (GET)
/// /recordings/edit                submit, id in body (POST)
/// /recordings/details?id=         flattened view
///
/// /artists                        list, create
/// /labels                         list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/recordings", recording::router())
        .nest("/artists", artist::router())
        .nest("/labels", label::router())
}
