//! Artist entity model.

use medialib_core::reference;
use medialib_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Artist> for reference::Artist {
    fn from(row: Artist) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}
