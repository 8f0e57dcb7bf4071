//! Recording entity model and DTOs.

use chrono::NaiveDate;
use medialib_core::recording::{self as domain, RecordingDraft};
use medialib_core::reference;
use medialib_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::track::{CreateTrack, Track};

/// A row from the `recordings` table joined with its artist and label names.
#[derive(Debug, Clone, FromRow)]
pub struct Recording {
    pub id: DbId,
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub artist_id: DbId,
    pub artist_name: String,
    pub label_id: DbId,
    pub label_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A recording row with its tracks in position order.
#[derive(Debug, Clone)]
pub struct RecordingWithTracks {
    pub recording: Recording,
    pub tracks: Vec<Track>,
}

/// DTO for inserting or fully replacing a recording and its tracks.
#[derive(Debug, Clone)]
pub struct CreateRecording {
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub artist_id: DbId,
    pub label_id: DbId,
    pub tracks: Vec<CreateTrack>,
}

impl From<&RecordingDraft> for CreateRecording {
    fn from(draft: &RecordingDraft) -> Self {
        Self {
            title: draft.title.clone(),
            release_date: draft.release_date,
            artist_id: draft.artist.id,
            label_id: draft.label.id,
            tracks: draft.tracks.iter().map(CreateTrack::from).collect(),
        }
    }
}

impl From<RecordingWithTracks> for domain::Recording {
    fn from(row: RecordingWithTracks) -> Self {
        let RecordingWithTracks { recording, tracks } = row;
        Self {
            id: recording.id,
            title: recording.title,
            release_date: recording.release_date,
            artist: reference::Artist {
                id: recording.artist_id,
                name: recording.artist_name,
            },
            label: reference::Label {
                id: recording.label_id,
                name: recording.label_name,
            },
            tracks: tracks.into_iter().map(Into::into).collect(),
        }
    }
}
