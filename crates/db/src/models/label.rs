//! Label entity model.

use medialib_core::reference;
use medialib_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `labels` table.
#[derive(Debug, Clone, FromRow)]
pub struct Label {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Label> for reference::Label {
    fn from(row: Label) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}
