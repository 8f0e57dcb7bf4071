//! Handlers for the `/artists` reference list.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use medialib_core::reference::CreateArtist;
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/artists
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let artists = state.catalog.list_artists().await?;
    Ok(Json(DataResponse { data: artists }))
}

/// POST /api/v1/artists
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateArtist>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.validate()?;
    let artist = state.catalog.add_artist(&input).await?;
    tracing::info!(artist_id = artist.id, "Artist created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: artist })))
}
