//! Persistent checksum records (SQLite via sqlx).
//!
//! One row per stored file: its save name and content checksum, both unique.
//! The UNIQUE constraint on `checksum` is the authoritative duplicate guard.

pub mod db;
mod ops;
pub mod types;

pub use db::RecordStore;
pub use ops::PendingRecord;
pub use types::*;
