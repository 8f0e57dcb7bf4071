//! Handlers for the `/recordings` resource.
//!
//! Each handler runs one [`RecordingWorkflow`] request and translates its
//! terminal state into an HTTP response:
//!
//! | State        | Response                                         |
//! |--------------|--------------------------------------------------|
//! | `Initial`    | 200 with the form view                           |
//! | `Persisted`  | 303 to the recording index                       |
//! | `ReRendered` | 422 with the submitted form, errors, ref lists   |
//! | `BadRequest` | 400                                              |
//! | `NotFound`   | 404                                              |

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use medialib_core::error::CoreError;
use medialib_core::recording::form::RecordingForm;
use medialib_core::types::DbId;
use medialib_core::workflow::{DetailsOutcome, FormState, RecordingWorkflow};

use crate::error::{AppError, AppResult};
use crate::query::IdParams;
use crate::response::{DataResponse, PersistedResponse};
use crate::state::AppState;

/// Where clients are sent after a successful create or edit.
pub const INDEX_LOCATION: &str = "/api/v1/recordings";

fn workflow(state: &AppState) -> RecordingWorkflow<'_, dyn medialib_core::store::CatalogStore> {
    RecordingWorkflow::new(state.catalog.as_ref(), state.config.locale)
}

fn missing_id() -> AppError {
    AppError::BadRequest("Recording id is required".to_string())
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Recording",
        id,
    })
}

/// Translate a terminal form state into a response.
fn respond(state: FormState) -> AppResult<Response> {
    match state {
        FormState::Initial(view) => Ok(Json(DataResponse { data: view }).into_response()),
        FormState::Persisted(id) => Ok((
            StatusCode::SEE_OTHER,
            [(header::LOCATION, INDEX_LOCATION)],
            Json(DataResponse {
                data: PersistedResponse { id },
            }),
        )
            .into_response()),
        FormState::ReRendered(view) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(DataResponse { data: view }),
        )
            .into_response()),
        FormState::BadRequest => Err(missing_id()),
        FormState::NotFound(id) => Err(not_found(id)),
        other => Err(AppError::Core(CoreError::Internal(format!(
            "recording workflow stopped in non-terminal state {other:?}"
        )))),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/recordings
///
/// List all recordings with artist, label and tracks.
pub async fn index(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let recordings = workflow(&state).index().await?;
    Ok(Json(DataResponse { data: recordings }))
}

/// GET /api/v1/recordings/create
///
/// Blank form with one empty track slot and the artist/label lists.
pub async fn create_form(State(state): State<AppState>) -> AppResult<Response> {
    respond(workflow(&state).create_form().await?)
}

/// POST /api/v1/recordings/create
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<RecordingForm>, JsonRejection>,
) -> AppResult<Response> {
    let Json(form) = payload?;
    respond(workflow(&state).submit_create(form).await?)
}

/// GET /api/v1/recordings/edit?id=
///
/// The stored recording as a pre-populated form.
pub async fn edit_form(
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = params?;
    respond(workflow(&state).edit_form(params.id).await?)
}

/// POST /api/v1/recordings/edit
///
/// The recording id is part of the form payload.
pub async fn edit(
    State(state): State<AppState>,
    payload: Result<Json<RecordingForm>, JsonRejection>,
) -> AppResult<Response> {
    let Json(form) = payload?;
    respond(workflow(&state).submit_edit(form).await?)
}

/// GET /api/v1/recordings/details?id=
pub async fn details(
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    match workflow(&state).details(params.id).await? {
        DetailsOutcome::Found(details) => Ok(Json(DataResponse { data: details })),
        DetailsOutcome::BadRequest => Err(missing_id()),
        DetailsOutcome::NotFound(id) => Err(not_found(id)),
    }
}
