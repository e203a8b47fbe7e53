//! `harvest run` – one pass over the listing page.

use harvest_core::config::{HarvestConfig, ItemErrorPolicy};
use harvest_core::harvest::{self, RunOutcome};
use harvest_core::records::RecordStore;
use std::path::PathBuf;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct RunOverrides {
    pub url: Option<String>,
    pub suffix: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub continue_on_error: bool,
}

pub fn apply_overrides(cfg: &mut HarvestConfig, o: RunOverrides) {
    if let Some(url) = o.url {
        cfg.listing_url = url;
    }
    if let Some(suffix) = o.suffix {
        cfg.link_suffix = suffix;
    }
    if let Some(dir) = o.output_dir {
        cfg.output_dir = dir;
    }
    if o.continue_on_error {
        cfg.on_item_error = ItemErrorPolicy::Continue;
    }
}

/// Runs the pipeline and logs how it ended. Returns the exit code.
pub async fn run_harvest(store: &RecordStore, cfg: &HarvestConfig) -> i32 {
    let outcome = harvest::run(store, cfg).await;
    let s = *outcome.summary();
    match &outcome {
        RunOutcome::Completed(_) => {
            tracing::info!(
                "run completed: {} link(s), {} stored, {} duplicate(s)",
                s.links_found,
                s.stored,
                s.duplicates
            );
        }
        RunOutcome::Partial { failures, .. } => {
            tracing::warn!(
                "run finished with {} failed link(s): {} link(s), {} stored, {} duplicate(s)",
                failures.len(),
                s.links_found,
                s.stored,
                s.duplicates
            );
            eprintln!(
                "harvest: {} of {} link(s) failed; see the log for details",
                failures.len(),
                s.links_found
            );
        }
        RunOutcome::Aborted { error, .. } => {
            tracing::error!("error occurred: {:#}", error);
            eprintln!("harvest error: {:#}", error);
        }
    }
    outcome.exit_code()
}
