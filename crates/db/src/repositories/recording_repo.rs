//! Repository for the `recordings` table and its owned `tracks`.

use std::collections::HashMap;

use medialib_core::types::DbId;
use sqlx::PgPool;

use crate::models::recording::{CreateRecording, Recording, RecordingWithTracks};
use crate::repositories::TrackRepo;

/// Column list for recordings joined with artist and label names.
const JOINED_COLUMNS: &str = "r.id, r.title, r.release_date, \
    r.artist_id, a.name AS artist_name, r.label_id, l.name AS label_name, \
    r.created_at, r.updated_at";

const JOINS: &str = "FROM recordings r \
    JOIN artists a ON a.id = r.artist_id \
    JOIN labels l ON l.id = r.label_id";

/// Provides CRUD operations for recordings. Tracks are always written in the
/// same transaction as their recording.
pub struct RecordingRepo;

impl RecordingRepo {
    /// Insert a recording and its tracks, returning the new id.
    pub async fn create(pool: &PgPool, input: &CreateRecording) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO recordings (title, release_date, artist_id, label_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&input.title)
        .bind(input.release_date)
        .bind(input.artist_id)
        .bind(input.label_id)
        .fetch_one(&mut *tx)
        .await?;

        TrackRepo::replace_inner(&mut tx, id, &input.tracks).await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Replace a recording's fields and its whole track list.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateRecording,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE recordings SET \
                title = $2, \
                release_date = $3, \
                artist_id = $4, \
                label_id = $5, \
                updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(input.release_date)
        .bind(input.artist_id)
        .bind(input.label_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        TrackRepo::replace_inner(&mut tx, id, &input.tracks).await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Find a recording by ID, enriched with its tracks.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RecordingWithTracks>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} {JOINS} WHERE r.id = $1");
        let recording = sqlx::query_as::<_, Recording>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match recording {
            Some(recording) => {
                let tracks = TrackRepo::list_for_recording(pool, recording.id).await?;
                Ok(Some(RecordingWithTracks { recording, tracks }))
            }
            None => Ok(None),
        }
    }

    /// List all recordings with their tracks, oldest first.
    pub async fn list_with_tracks(pool: &PgPool) -> Result<Vec<RecordingWithTracks>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} {JOINS} ORDER BY r.id");
        let recordings = sqlx::query_as::<_, Recording>(&query)
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = recordings.iter().map(|r| r.id).collect();
        let mut tracks_by_recording: HashMap<DbId, Vec<_>> = HashMap::new();
        for track in TrackRepo::list_for_recordings(pool, &ids).await? {
            tracks_by_recording
                .entry(track.recording_id)
                .or_default()
                .push(track);
        }

        Ok(recordings
            .into_iter()
            .map(|recording| {
                let tracks = tracks_by_recording.remove(&recording.id).unwrap_or_default();
                RecordingWithTracks { recording, tracks }
            })
            .collect())
    }

    /// Delete every recording. Tracks go with them via `ON DELETE CASCADE`.
    ///
    /// Returns the number of recordings removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recordings").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
