//! Artist and label reference data.
//!
//! Recordings point at one artist and one label. The full lists are offered
//! to the form for selection and re-display; they are never validated by the
//! recording workflow itself.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new artist.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArtist {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
}

/// DTO for creating a new label.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLabel {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
}

/// Artist and label lists loaded once per request.
///
/// Used both to resolve the selected ids of a submission and to re-display
/// the selection lists when the form is rendered again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceData {
    pub artists: Vec<Artist>,
    pub labels: Vec<Label>,
}

impl ReferenceData {
    pub fn artist(&self, id: DbId) -> Option<&Artist> {
        self.artists.iter().find(|a| a.id == id)
    }

    pub fn label(&self, id: DbId) -> Option<&Label> {
        self.labels.iter().find(|l| l.id == id)
    }
}
