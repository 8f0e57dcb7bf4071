use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CatalogStore, StoreResult};
use crate::recording::{Recording, RecordingDraft};
use crate::reference::{Artist, CreateArtist, CreateLabel, Label};
use crate::types::DbId;

/// In-process [`CatalogStore`] for tests and database-less runs.
///
/// Ids start at 1 and are never reused, like a BIGSERIAL column.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    recordings: Vec<Recording>,
    artists: Vec<Artist>,
    labels: Vec<Label>,
    last_recording_id: DbId,
    last_artist_id: DbId,
    last_label_id: DbId,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn add_recording(&self, draft: &RecordingDraft) -> StoreResult<DbId> {
        let mut inner = self.inner.write().await;
        inner.last_recording_id += 1;
        let id = inner.last_recording_id;
        inner.recordings.push(draft.clone().with_id(id));
        Ok(id)
    }

    async fn update_recording(&self, id: DbId, draft: &RecordingDraft) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.recordings.iter_mut().find(|r| r.id == id) {
            Some(slot) => {
                *slot = draft.clone().with_id(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_recording(&self, id: DbId) -> StoreResult<Option<Recording>> {
        let inner = self.inner.read().await;
        Ok(inner.recordings.iter().find(|r| r.id == id).cloned())
    }

    async fn list_recordings(&self) -> StoreResult<Vec<Recording>> {
        Ok(self.inner.read().await.recordings.clone())
    }

    async fn delete_all(&self) -> StoreResult<()> {
        self.inner.write().await.recordings.clear();
        Ok(())
    }

    async fn list_artists(&self) -> StoreResult<Vec<Artist>> {
        let mut artists = self.inner.read().await.artists.clone();
        artists.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(artists)
    }

    async fn list_labels(&self) -> StoreResult<Vec<Label>> {
        let mut labels = self.inner.read().await.labels.clone();
        labels.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(labels)
    }

    async fn add_artist(&self, input: &CreateArtist) -> StoreResult<Artist> {
        let mut inner = self.inner.write().await;
        inner.last_artist_id += 1;
        let artist = Artist {
            id: inner.last_artist_id,
            name: input.name.clone(),
        };
        inner.artists.push(artist.clone());
        Ok(artist)
    }

    async fn add_label(&self, input: &CreateLabel) -> StoreResult<Label> {
        let mut inner = self.inner.write().await;
        inner.last_label_id += 1;
        let label = Label {
            id: inner.last_label_id,
            name: input.name.clone(),
        };
        inner.labels.push(label.clone());
        Ok(label)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
