//! Track model. Tracks are written and read only through their recording.

use medialib_core::recording;
use medialib_core::types::DbId;
use sqlx::FromRow;

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow)]
pub struct Track {
    pub id: DbId,
    pub recording_id: DbId,
    /// Zero-based index within the recording.
    pub position: i32,
    pub title: String,
    pub duration_secs: i32,
}

/// DTO for one track of a recording being written.
#[derive(Debug, Clone)]
pub struct CreateTrack {
    pub title: String,
    pub duration_secs: i32,
}

impl From<Track> for recording::Track {
    fn from(row: Track) -> Self {
        Self::new(row.title, row.duration_secs)
    }
}

impl From<&recording::Track> for CreateTrack {
    fn from(track: &recording::Track) -> Self {
        Self {
            title: track.title.clone(),
            duration_secs: track.duration,
        }
    }
}
