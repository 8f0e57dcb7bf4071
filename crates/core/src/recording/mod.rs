//! The Recording aggregate and its form representation.
//!
//! - [`track_list`] classifies the parallel title/duration slots of a form.
//! - [`form`] holds the wire form, the row-based form model and field errors.
//! - [`mapper`] converts between the form model and the aggregate.

pub mod form;
pub mod mapper;
pub mod track_list;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::reference::{Artist, Label};
use crate::types::{DbId, DurationSecs};

/// One track of a recording. Owned by its recording; no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    /// Length in seconds, always positive.
    pub duration: DurationSecs,
}

impl Track {
    pub fn new(title: impl Into<String>, duration: DurationSecs) -> Self {
        Self {
            title: title.into(),
            duration,
        }
    }
}

/// A validated recording that has not been assigned an id by storage yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingDraft {
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub artist: Artist,
    pub label: Label,
    /// Order is significant and preserved end-to-end.
    pub tracks: Vec<Track>,
}

impl RecordingDraft {
    pub fn with_id(self, id: DbId) -> Recording {
        Recording {
            id,
            title: self.title,
            release_date: self.release_date,
            artist: self.artist,
            label: self.label,
            tracks: self.tracks,
        }
    }
}

/// A persisted recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub id: DbId,
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub artist: Artist,
    pub label: Label,
    pub tracks: Vec<Track>,
}

impl Recording {
    /// Everything but the id.
    pub fn to_draft(&self) -> RecordingDraft {
        RecordingDraft {
            title: self.title.clone(),
            release_date: self.release_date,
            artist: self.artist.clone(),
            label: self.label.clone(),
            tracks: self.tracks.clone(),
        }
    }
}

/// Flattened read-only projection used by the details view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordingDetails {
    pub id: DbId,
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub artist_name: String,
    pub label_name: String,
    pub tracks: Vec<Track>,
}

impl From<Recording> for RecordingDetails {
    fn from(recording: Recording) -> Self {
        Self {
            id: recording.id,
            title: recording.title,
            release_date: recording.release_date,
            artist_name: recording.artist.name,
            label_name: recording.label.name,
            tracks: recording.tracks,
        }
    }
}
