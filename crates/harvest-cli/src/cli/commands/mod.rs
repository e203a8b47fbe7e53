//! CLI command handlers, one per file.

mod checksum;
mod records;
mod run;

pub use checksum::run_checksum;
pub use records::run_records;
pub use run::{apply_overrides, run_harvest, RunOverrides};
