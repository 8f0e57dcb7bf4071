//! Route definitions for recordings.

use axum::routing::get;
use axum::Router;

use crate::handlers::recording;
use crate::state::AppState;

/// Routes mounted at `/recordings`.
///
/// ```text
/// GET  /          -> index
/// GET  /create    -> create_form
/// POST /create    -> create
/// GET  /edit      -> edit_form
/// POST /edit      -> edit
/// GET  /details   -> details
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recording::index))
        .route("/create", get(recording::create_form).post(recording::create))
        .route("/edit", get(recording::edit_form).post(recording::edit))
        .route("/details", get(recording::details))
}
