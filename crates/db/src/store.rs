//! [`CatalogStore`] backed by PostgreSQL.

use async_trait::async_trait;
use medialib_core::recording::{Recording, RecordingDraft};
use medialib_core::reference::{Artist, CreateArtist, CreateLabel, Label};
use medialib_core::store::{CatalogStore, StoreError, StoreResult};
use medialib_core::types::DbId;

use crate::models::recording::CreateRecording;
use crate::repositories::{ArtistRepo, LabelRepo, RecordingRepo};
use crate::DbPool;

/// Storage collaborator over a connection pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "Catalog store query failed");
    StoreError::backend(err)
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn add_recording(&self, draft: &RecordingDraft) -> StoreResult<DbId> {
        RecordingRepo::create(&self.pool, &CreateRecording::from(draft))
            .await
            .map_err(backend)
    }

    async fn update_recording(&self, id: DbId, draft: &RecordingDraft) -> StoreResult<bool> {
        RecordingRepo::update(&self.pool, id, &CreateRecording::from(draft))
            .await
            .map_err(backend)
    }

    async fn find_recording(&self, id: DbId) -> StoreResult<Option<Recording>> {
        let row = RecordingRepo::find_by_id(&self.pool, id)
            .await
            .map_err(backend)?;
        Ok(row.map(Into::into))
    }

    async fn list_recordings(&self) -> StoreResult<Vec<Recording>> {
        let rows = RecordingRepo::list_with_tracks(&self.pool)
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_all(&self) -> StoreResult<()> {
        let removed = RecordingRepo::delete_all(&self.pool)
            .await
            .map_err(backend)?;
        tracing::info!(removed, "Deleted all recordings");
        Ok(())
    }

    async fn list_artists(&self) -> StoreResult<Vec<Artist>> {
        let rows = ArtistRepo::list(&self.pool).await.map_err(backend)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_labels(&self) -> StoreResult<Vec<Label>> {
        let rows = LabelRepo::list(&self.pool).await.map_err(backend)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn add_artist(&self, input: &CreateArtist) -> StoreResult<Artist> {
        let row = ArtistRepo::create(&self.pool, input)
            .await
            .map_err(backend)?;
        Ok(row.into())
    }

    async fn add_label(&self, input: &CreateLabel) -> StoreResult<Label> {
        let row = LabelRepo::create(&self.pool, input)
            .await
            .map_err(backend)?;
        Ok(row.into())
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await.map_err(backend)
    }
}
