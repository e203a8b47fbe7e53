//! Record reads and inserts.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::{Row, Sqlite, Transaction};

use super::db::{unix_timestamp, RecordStore};
use super::types::{Record, RecordError, RecordId};

fn record_from_row(row: &SqliteRow) -> Record {
    Record {
        id: row.get("id"),
        filename: row.get("filename"),
        checksum: row.get("checksum"),
        created_at: row.get("created_at"),
    }
}

async fn checksum_exists(
    conn: &mut SqliteConnection,
    checksum: &str,
) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 FROM records WHERE checksum = ?1")
        .bind(checksum)
        .fetch_optional(conn)
        .await?;
    Ok(row.is_some())
}

/// An inserted record whose transaction is still open.
pub struct PendingRecord {
    id: RecordId,
    tx: Transaction<'static, Sqlite>,
}

impl PendingRecord {
    pub fn id(&self) -> RecordId {
        self.id
    }

    pub async fn commit(self) -> Result<RecordId, RecordError> {
        self.tx.commit().await?;
        Ok(self.id)
    }
}

impl RecordStore {
    /// Look up the record holding `checksum`, if any.
    pub async fn find_by_checksum(&self, checksum: &str) -> Result<Option<Record>> {
        let row = sqlx::query(
            r#"
            SELECT id, filename, checksum, created_at
            FROM records
            WHERE checksum = ?1
            "#,
        )
        .bind(checksum)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(record_from_row))
    }

    /// Insert a new record and commit it.
    pub async fn insert(&self, filename: &str, checksum: &str) -> Result<RecordId, RecordError> {
        self.begin_insert(filename, checksum).await?.commit().await
    }

    /// Insert a new record inside an open transaction. The row becomes visible
    /// only when the returned [`PendingRecord`] is committed; dropping it rolls
    /// the insert back. Fails with `DuplicateChecksum` / `FilenameTaken` when a
    /// UNIQUE constraint rejects the row.
    pub async fn begin_insert(
        &self,
        filename: &str,
        checksum: &str,
    ) -> Result<PendingRecord, RecordError> {
        let now = unix_timestamp();
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query(
            r#"
            INSERT INTO records (filename, checksum, created_at)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(filename)
        .bind(checksum)
        .bind(now)
        .execute(&mut *tx)
        .await;

        match res {
            Ok(done) => Ok(PendingRecord {
                id: done.last_insert_rowid(),
                tx,
            }),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                // SQLite names the column that failed, but only the first one;
                // a repeated checksum wins over a clashing name.
                if e.message().contains("records.checksum")
                    || checksum_exists(&mut *tx, checksum).await?
                {
                    Err(RecordError::DuplicateChecksum {
                        checksum: checksum.to_string(),
                    })
                } else {
                    Err(RecordError::FilenameTaken {
                        filename: filename.to_string(),
                    })
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    /// All records, oldest first.
    pub async fn list_records(&self) -> Result<Vec<Record>> {
        let rows = sqlx::query(
            r#"
            SELECT id, filename, checksum, created_at
            FROM records
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(record_from_row).collect())
    }

    pub async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM records")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("n"))
    }
}
