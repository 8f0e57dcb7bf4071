//! Storage collaborator used by the recording workflow.
//!
//! Implementations persist a recording and its tracks as one unit. The
//! workflow treats every call as opaque: no retries, no timeouts.

mod memory;

pub use memory::MemoryCatalogStore;

use async_trait::async_trait;

use crate::recording::{Recording, RecordingDraft};
use crate::reference::{Artist, CreateArtist, CreateLabel, Label};
use crate::types::DbId;

/// Boxed error from a storage backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(#[source] BoxError),
}

impl StoreError {
    pub fn backend(err: impl Into<BoxError>) -> Self {
        StoreError::Backend(err.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Persist a new recording with its tracks, returning the assigned id.
    async fn add_recording(&self, draft: &RecordingDraft) -> StoreResult<DbId>;

    /// Replace a stored recording and its whole track list.
    ///
    /// Returns `false` if no recording with `id` exists.
    async fn update_recording(&self, id: DbId, draft: &RecordingDraft) -> StoreResult<bool>;

    async fn find_recording(&self, id: DbId) -> StoreResult<Option<Recording>>;

    /// All recordings, oldest first.
    async fn list_recordings(&self) -> StoreResult<Vec<Recording>>;

    /// Remove every recording (and its tracks). Artists and labels stay.
    async fn delete_all(&self) -> StoreResult<()>;

    async fn list_artists(&self) -> StoreResult<Vec<Artist>>;

    async fn list_labels(&self) -> StoreResult<Vec<Label>>;

    async fn add_artist(&self, input: &CreateArtist) -> StoreResult<Artist>;

    async fn add_label(&self, input: &CreateLabel) -> StoreResult<Label>;

    /// Cheap reachability check used by the health endpoint.
    async fn ping(&self) -> StoreResult<()>;
}
