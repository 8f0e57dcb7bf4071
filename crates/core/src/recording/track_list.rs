//! Track slot validation -- pure logic, no storage access.
//!
//! A form carries tracks as two parallel sequences (titles and durations).
//! Each index is a *slot* that is one of:
//!
//! - empty: blank title and no duration; ignored,
//! - complete: title present and a positive duration; becomes a [`Track`],
//! - incomplete: anything else; reported as a [`SlotError`] at that index.
//!
//! Unequal sequence lengths are a contract violation of the payload, not a
//! user mistake, and are reported as [`StructuralMismatch`] instead.

use serde::{Deserialize, Serialize};

use super::Track;
use crate::types::DurationSecs;

/// The parallel title/duration sequences had different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Track list mismatch: {titles} titles but {durations} durations")]
pub struct StructuralMismatch {
    pub titles: usize,
    pub durations: usize,
}

/// One slot of the form's track list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRow {
    pub title: String,
    pub duration: Option<DurationSecs>,
}

impl TrackRow {
    pub fn new(title: impl Into<String>, duration: Option<DurationSecs>) -> Self {
        Self {
            title: title.into(),
            duration,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Which half of a slot an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotField {
    Title,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotErrorKind {
    TitleRequired,
    DurationRequired,
    InvalidDuration,
}

impl SlotErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            SlotErrorKind::TitleRequired => "title required",
            SlotErrorKind::DurationRequired => "duration required",
            SlotErrorKind::InvalidDuration => "invalid duration",
        }
    }

    pub fn field(self) -> SlotField {
        match self {
            SlotErrorKind::TitleRequired => SlotField::Title,
            SlotErrorKind::DurationRequired | SlotErrorKind::InvalidDuration => {
                SlotField::Duration
            }
        }
    }
}

/// A user-facing problem with one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotError {
    pub index: usize,
    pub kind: SlotErrorKind,
}

impl SlotError {
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Wire field path, e.g. `durations[3]`.
    pub fn field_path(&self) -> String {
        match self.kind.field() {
            SlotField::Title => format!("track_titles[{}]", self.index),
            SlotField::Duration => format!("durations[{}]", self.index),
        }
    }
}

/// Result of classifying every slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackListOutcome {
    /// All slots were empty or complete; tracks in slot order.
    Valid(Vec<Track>),
    /// At least one slot was incomplete; every problem is listed.
    Invalid(Vec<SlotError>),
}

impl TrackListOutcome {
    pub fn into_result(self) -> Result<Vec<Track>, Vec<SlotError>> {
        match self {
            TrackListOutcome::Valid(tracks) => Ok(tracks),
            TrackListOutcome::Invalid(errors) => Err(errors),
        }
    }
}

/// Validate the parallel title/duration sequences of a form.
pub fn validate(
    titles: &[String],
    durations: &[Option<DurationSecs>],
) -> Result<TrackListOutcome, StructuralMismatch> {
    check_lengths(titles.len(), durations.len())?;
    Ok(classify(
        titles.iter().map(String::as_str).zip(durations.iter().copied()),
    ))
}

/// Validate slots that were already paired into rows.
pub fn validate_rows(rows: &[TrackRow]) -> TrackListOutcome {
    classify(rows.iter().map(|row| (row.title.as_str(), row.duration)))
}

/// Pair the wire sequences into rows, failing on unequal lengths.
pub fn pair_rows(
    titles: Vec<String>,
    durations: Vec<Option<DurationSecs>>,
) -> Result<Vec<TrackRow>, StructuralMismatch> {
    check_lengths(titles.len(), durations.len())?;
    Ok(titles
        .into_iter()
        .zip(durations)
        .map(|(title, duration)| TrackRow { title, duration })
        .collect())
}

fn check_lengths(titles: usize, durations: usize) -> Result<(), StructuralMismatch> {
    if titles == durations {
        Ok(())
    } else {
        Err(StructuralMismatch { titles, durations })
    }
}

fn classify<'a>(slots: impl Iterator<Item = (&'a str, Option<DurationSecs>)>) -> TrackListOutcome {
    let mut tracks = Vec::new();
    let mut errors = Vec::new();

    for (index, (title, duration)) in slots.enumerate() {
        let has_title = !title.trim().is_empty();
        let mut fail = |kind| errors.push(SlotError { index, kind });

        match (has_title, duration) {
            (false, None) => {}
            (true, Some(secs)) if secs > 0 => tracks.push(Track::new(title, secs)),
            (true, Some(_)) => fail(SlotErrorKind::InvalidDuration),
            (true, None) => fail(SlotErrorKind::DurationRequired),
            (false, Some(secs)) => {
                fail(SlotErrorKind::TitleRequired);
                if secs <= 0 {
                    fail(SlotErrorKind::InvalidDuration);
                }
            }
        }
    }

    if errors.is_empty() {
        TrackListOutcome::Valid(tracks)
    } else {
        TrackListOutcome::Invalid(errors)
    }
}
