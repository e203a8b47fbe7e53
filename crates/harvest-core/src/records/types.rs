//! Types used by the record store.

/// Record identifier (SQLite rowid).
pub type RecordId = i64;

/// A file already ingested: its save name and content checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub filename: String,
    pub checksum: String,
    /// Unix seconds.
    pub created_at: i64,
}

/// Insert failure. Uniqueness violations are split out so callers can treat
/// a repeated checksum as a duplicate rather than a storage fault.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("checksum {checksum} is already recorded")]
    DuplicateChecksum { checksum: String },
    #[error("filename {filename} is already recorded with different content")]
    FilenameTaken { filename: String },
    #[error("record database: {0}")]
    Database(#[from] sqlx::Error),
}
