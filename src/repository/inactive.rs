use crate::model::inactive::InactiveRecord;
use crate::service::database::{Error, Pool, Session};

#[async_trait::async_trait]
pub trait InactiveDataset {
    /// Checks if at least one record was stored for the given subject.
    async fn contains(&self, idna_subject: &str) -> Result<bool, Error>;
    /// Fetches the record stored for the given subject, if any.
    async fn find(&self, idna_subject: &str) -> Result<Option<InactiveRecord>, Error>;
}

#[derive(Clone, Debug)]
pub struct DatabaseInactiveService {
    database: Pool,
}

impl DatabaseInactiveService {
    pub fn new(database: Pool) -> Self {
        Self { database }
    }
}

#[async_trait::async_trait]
impl InactiveDataset for DatabaseInactiveService {
    #[tracing::instrument(skip(self))]
    async fn contains(&self, idna_subject: &str) -> Result<bool, Error> {
        tracing::debug!("checking in the inactive dataset");
        let mut session: Session = self.database.acquire().await?;
        sqlx::query_scalar("SELECT count(id) > 0 FROM inactive WHERE idna_subject = ?")
            .bind(idna_subject)
            .fetch_one(&mut *session)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, idna_subject: &str) -> Result<Option<InactiveRecord>, Error> {
        tracing::debug!("fetching from the inactive dataset");
        let mut session: Session = self.database.acquire().await?;
        let mut found: Vec<InactiveRecord> = sqlx::query_as(
            r#"SELECT id, created_at, idna_subject, status, status_source, checker_type, tested_at, session_id
FROM inactive
WHERE idna_subject = ?"#,
        )
        .bind(idna_subject)
        .fetch_all(&mut *session)
        .await?;
        match found.len() {
            0 => Ok(None),
            1 => Ok(found.pop()),
            count => {
                // the schema doesn't forbid several records per subject,
                // the oldest row wins so that the pick stays stable
                tracing::warn!("found {count} records for the same subject, taking the oldest");
                sqlx::query_as(
                    r#"SELECT id, created_at, idna_subject, status, status_source, checker_type, tested_at, session_id
FROM inactive
WHERE idna_subject = ?
ORDER BY id
LIMIT 1"#,
                )
                .bind(idna_subject)
                .fetch_optional(&mut *session)
                .await
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryInactiveService {
    inner: Vec<InactiveRecord>,
}

#[cfg(test)]
impl MemoryInactiveService {
    pub fn with_record(mut self, record: InactiveRecord) -> Self {
        self.inner.push(record);
        self
    }
}

#[async_trait::async_trait]
impl InactiveDataset for MemoryInactiveService {
    #[tracing::instrument(skip(self))]
    async fn contains(&self, idna_subject: &str) -> Result<bool, Error> {
        tracing::debug!("checking in the inactive dataset");
        Ok(self
            .inner
            .iter()
            .any(|record| record.idna_subject == idna_subject))
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, idna_subject: &str) -> Result<Option<InactiveRecord>, Error> {
        tracing::debug!("fetching from the inactive dataset");
        Ok(self
            .inner
            .iter()
            .filter(|record| record.idna_subject == idna_subject)
            .min_by_key(|record| record.id)
            .cloned())
    }
}
