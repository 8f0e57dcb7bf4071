//! Form representations of a recording.
//!
//! [`RecordingForm`] is the literal wire shape with parallel `track_titles`
//! and `durations` sequences. It is converted into [`RecordingFormModel`],
//! which holds one [`TrackRow`] per slot, as soon as it is received.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::track_list::{pair_rows, StructuralMismatch, TrackRow};
use crate::reference::{Artist, Label, ReferenceData};
use crate::types::{DbId, DurationSecs};

pub const TITLE_FIELD: &str = "title";
pub const ARTIST_FIELD: &str = "selected_artist_id";
pub const LABEL_FIELD: &str = "selected_label_id";

/// Inbound/outbound form payload in wire shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingForm {
    /// Only present when editing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub track_titles: Vec<String>,
    #[serde(default)]
    pub durations: Vec<Option<DurationSecs>>,
    #[serde(default)]
    pub selected_artist_id: Option<DbId>,
    #[serde(default)]
    pub selected_label_id: Option<DbId>,
}

/// Form state with tracks as rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingFormModel {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub tracks: Vec<TrackRow>,
    pub selected_artist_id: Option<DbId>,
    pub selected_label_id: Option<DbId>,
}

impl RecordingFormModel {
    /// The create form before any input: one empty slot so the first row renders.
    pub fn blank() -> Self {
        Self {
            tracks: vec![TrackRow::empty()],
            ..Self::default()
        }
    }
}

impl TryFrom<RecordingForm> for RecordingFormModel {
    type Error = StructuralMismatch;

    fn try_from(form: RecordingForm) -> Result<Self, Self::Error> {
        let tracks = pair_rows(form.track_titles, form.durations)?;
        Ok(Self {
            id: form.id,
            title: form.title,
            release_date: form.release_date,
            tracks,
            selected_artist_id: form.selected_artist_id,
            selected_label_id: form.selected_label_id,
        })
    }
}

impl From<RecordingFormModel> for RecordingForm {
    fn from(model: RecordingFormModel) -> Self {
        let (track_titles, durations) = model
            .tracks
            .into_iter()
            .map(|row| (row.title, row.duration))
            .unzip();
        Self {
            id: model.id,
            title: model.title,
            release_date: model.release_date,
            track_titles,
            durations,
            selected_artist_id: model.selected_artist_id,
            selected_label_id: model.selected_label_id,
        }
    }
}

/// Field path -> messages, in field path order.
///
/// Field paths are the wire names: `title`, `selected_artist_id`,
/// `selected_label_id`, `track_titles[i]`, `durations[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of messages over all fields.
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// What the presentation layer needs to (re)display the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub form: RecordingForm,
    pub errors: FieldErrors,
    pub artists: Vec<Artist>,
    pub labels: Vec<Label>,
}

impl FormView {
    pub fn new(model: RecordingFormModel, errors: FieldErrors, reference: ReferenceData) -> Self {
        Self {
            form: model.into(),
            errors,
            artists: reference.artists,
            labels: reference.labels,
        }
    }
}
