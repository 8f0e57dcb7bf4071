//! Repository for the `artists` table.

use medialib_core::reference::CreateArtist;
use sqlx::PgPool;

use crate::models::artist::Artist;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!("INSERT INTO artists (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List all artists ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists ORDER BY name, id");
        sqlx::query_as::<_, Artist>(&query).fetch_all(pool).await
    }
}
