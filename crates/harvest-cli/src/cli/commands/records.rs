//! `harvest records` – list stored records.

use anyhow::Result;
use harvest_core::records::RecordStore;

pub async fn run_records(store: &RecordStore) -> Result<()> {
    let records = store.list_records().await?;
    if records.is_empty() {
        println!("No records in database.");
    } else {
        println!("{:<6} {:<64} {}", "ID", "CHECKSUM", "FILENAME");
        for r in records {
            println!("{:<6} {:<64} {}", r.id, r.checksum, r.filename);
        }
    }
    Ok(())
}
