//! Form model <-> aggregate mapping.

use super::form::{FieldErrors, RecordingFormModel, ARTIST_FIELD, LABEL_FIELD, TITLE_FIELD};
use super::track_list::{validate_rows, TrackListOutcome, TrackRow};
use super::{Recording, RecordingDraft};
use crate::locale::Locale;
use crate::reference::{Artist, Label};
use crate::types::DbId;

/// Build a persist-ready draft from a submitted form model.
///
/// Every problem is collected before returning: title, track slots and
/// artist/label selection. Artist and label ids are only resolved once the
/// form is otherwise valid.
pub fn to_aggregate<A, L>(
    model: &RecordingFormModel,
    locale: Locale,
    resolve_artist: A,
    resolve_label: L,
) -> Result<RecordingDraft, FieldErrors>
where
    A: FnOnce(DbId) -> Option<Artist>,
    L: FnOnce(DbId) -> Option<Label>,
{
    let mut errors = FieldErrors::default();

    let title = model.title.as_deref().filter(|t| !t.trim().is_empty());
    if title.is_none() {
        errors.add(TITLE_FIELD, locale.title_required());
    }

    let tracks = match validate_rows(&model.tracks) {
        TrackListOutcome::Valid(tracks) => tracks,
        TrackListOutcome::Invalid(slot_errors) => {
            for err in slot_errors {
                errors.add(err.field_path(), err.message());
            }
            Vec::new()
        }
    };

    if model.selected_artist_id.is_none() {
        errors.add(ARTIST_FIELD, locale.artist_required());
    }
    if model.selected_label_id.is_none() {
        errors.add(LABEL_FIELD, locale.label_required());
    }

    let (Some(title), Some(artist_id), Some(label_id), true) = (
        title,
        model.selected_artist_id,
        model.selected_label_id,
        errors.is_empty(),
    ) else {
        return Err(errors);
    };

    let artist = resolve_artist(artist_id);
    let label = resolve_label(label_id);
    match (artist, label) {
        (Some(artist), Some(label)) => Ok(RecordingDraft {
            title: title.to_string(),
            release_date: model.release_date,
            artist,
            label,
            tracks,
        }),
        (artist, label) => {
            if artist.is_none() {
                errors.add(ARTIST_FIELD, locale.unknown_artist());
            }
            if label.is_none() {
                errors.add(LABEL_FIELD, locale.unknown_label());
            }
            Err(errors)
        }
    }
}

/// Pre-populate the edit form from a stored recording.
///
/// One row per track, in order, with no empty slots.
pub fn from_aggregate(recording: &Recording) -> RecordingFormModel {
    RecordingFormModel {
        id: Some(recording.id),
        title: Some(recording.title.clone()),
        release_date: recording.release_date,
        tracks: recording
            .tracks
            .iter()
            .map(|track| TrackRow::new(track.title.clone(), Some(track.duration)))
            .collect(),
        selected_artist_id: Some(recording.artist.id),
        selected_label_id: Some(recording.label.id),
    }
}
