//! Repository for the `labels` table.

use medialib_core::reference::CreateLabel;
use sqlx::PgPool;

use crate::models::label::Label;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for labels.
pub struct LabelRepo;

impl LabelRepo {
    /// Insert a new label, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLabel) -> Result<Label, sqlx::Error> {
        let query = format!("INSERT INTO labels (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Label>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List all labels ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Label>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labels ORDER BY name, id");
        sqlx::query_as::<_, Label>(&query).fetch_all(pool).await
    }
}
