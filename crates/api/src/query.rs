//! Shared query parameter types for API handlers.

use medialib_core::types::DbId;
use serde::Deserialize;

/// Optional `?id=` parameter of the edit and details pages.
///
/// Absence is a distinct outcome (bad request), so it is not a path segment.
#[derive(Debug, Deserialize)]
pub struct IdParams {
    #[serde(default)]
    pub id: Option<DbId>,
}
