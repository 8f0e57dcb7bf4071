//! Handlers for the `/labels` reference list.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use medialib_core::reference::CreateLabel;
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/labels
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let labels = state.catalog.list_labels().await?;
    Ok(Json(DataResponse { data: labels }))
}

/// POST /api/v1/labels
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateLabel>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.validate()?;
    let label = state.catalog.add_label(&input).await?;
    tracing::info!(label_id = label.id, "Label created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: label })))
}
