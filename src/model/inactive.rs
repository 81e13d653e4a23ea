use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// A subject that was checked by the availability pipeline and classified
/// inactive. Everything besides `idna_subject` is carried through as-is,
/// this crate never interprets it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InactiveRecord {
    pub id: i64,
    pub created_at: i64,
    pub idna_subject: String,
    pub status: String,
    pub status_source: Option<String>,
    pub checker_type: String,
    pub tested_at: Option<i64>,
    pub session_id: Option<String>,
}

impl FromRow<'_, SqliteRow> for InactiveRecord {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get(0)?,
            created_at: row.try_get(1)?,
            idna_subject: row.try_get(2)?,
            status: row.try_get(3)?,
            status_source: row.try_get(4)?,
            checker_type: row.try_get(5)?,
            tested_at: row.try_get(6)?,
            session_id: row.try_get(7)?,
        })
    }
}
