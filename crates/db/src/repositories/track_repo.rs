//! Repository for the `tracks` table.
//!
//! Tracks are owned by their recording; writes only happen inside the
//! recording's transaction.

use medialib_core::types::DbId;
use sqlx::PgPool;

use crate::models::track::{CreateTrack, Track};

const COLUMNS: &str = "id, recording_id, position, title, duration_secs";

/// Provides read access and transactional replacement of a recording's tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Tracks of one recording in position order.
    pub async fn list_for_recording(
        pool: &PgPool,
        recording_id: DbId,
    ) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tracks WHERE recording_id = $1 ORDER BY position"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(recording_id)
            .fetch_all(pool)
            .await
    }

    /// Tracks of several recordings, ordered by recording then position.
    pub async fn list_for_recordings(
        pool: &PgPool,
        recording_ids: &[DbId],
    ) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tracks \
             WHERE recording_id = ANY($1) \
             ORDER BY recording_id, position"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(recording_ids)
            .fetch_all(pool)
            .await
    }

    /// Replace all tracks of a recording within an existing transaction.
    ///
    /// Positions are assigned from the slice order, starting at 0.
    pub async fn replace_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        recording_id: DbId,
        tracks: &[CreateTrack],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM tracks WHERE recording_id = $1")
            .bind(recording_id)
            .execute(&mut **tx)
            .await?;

        for (position, track) in tracks.iter().enumerate() {
            sqlx::query(
                "INSERT INTO tracks (recording_id, position, title, duration_secs) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(recording_id)
            .bind(position_column(position)?)
            .bind(&track.title)
            .bind(track.duration_secs)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}

/// `tracks.position` is an `INTEGER`; a list longer than that is refused.
fn position_column(index: usize) -> Result<i32, sqlx::Error> {
    i32::try_from(index).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}
