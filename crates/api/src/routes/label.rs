//! Route definitions for labels.

use axum::routing::get;
use axum::Router;

use crate::handlers::label;
use crate::state::AppState;

/// Routes mounted at `/labels`.
///
/// ```text
/// GET  /   -> list
/// POST /   -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(label::list).post(label::create))
}
