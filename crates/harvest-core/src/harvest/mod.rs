//! The pipeline: listing page → matching links → per-link download, checksum,
//! and record-or-discard.
//!
//! Links are processed one at a time in document order. What a failed link
//! does to the rest of the run is set by `HarvestConfig::on_item_error`.

mod item;
mod outcome;

pub use item::{process_link, ItemOutcome};
pub use outcome::{ItemFailure, RunOutcome, RunSummary};

use anyhow::{Context, Result};

use crate::config::{HarvestConfig, ItemErrorPolicy};
use crate::fetch;
use crate::links;
use crate::records::RecordStore;
use crate::storage;

/// Runs the whole pipeline once against `store`.
pub async fn run(store: &RecordStore, cfg: &HarvestConfig) -> RunOutcome {
    let mut summary = RunSummary::default();

    let hrefs = match collect_links(cfg).await {
        Ok(hrefs) => hrefs,
        Err(error) => return RunOutcome::Aborted { summary, error },
    };
    summary.links_found = hrefs.len();
    tracing::info!(
        "{} link(s) ending in {} on {}",
        hrefs.len(),
        cfg.link_suffix,
        cfg.listing_url
    );

    let mut failures = Vec::new();
    for href in hrefs {
        match process_link(store, cfg, &href).await {
            Ok(ItemOutcome::Stored { .. }) => summary.stored += 1,
            Ok(ItemOutcome::Duplicate { .. }) => summary.duplicates += 1,
            Err(error) => match cfg.on_item_error {
                ItemErrorPolicy::Abort => {
                    return RunOutcome::Aborted {
                        summary,
                        error: error.context(format!("link {}", href)),
                    };
                }
                ItemErrorPolicy::Continue => {
                    tracing::error!("link {} failed: {:#}", href, error);
                    failures.push(ItemFailure { href, error });
                }
            },
        }
    }

    if failures.is_empty() {
        RunOutcome::Completed(summary)
    } else {
        RunOutcome::Partial { summary, failures }
    }
}

async fn collect_links(cfg: &HarvestConfig) -> Result<Vec<String>> {
    let page = tokio::task::spawn_blocking({
        let url = cfg.listing_url.clone();
        let opts = cfg.fetch_options();
        move || fetch::fetch_bytes(&url, &opts)
    })
    .await
    .context("listing fetch task join")?
    .context("fetch listing page")?;

    tracing::debug!(
        "listing page: {} bytes, {} anchor(s)",
        page.len(),
        links::count_anchors(&page)
    );
    let found = links::extract_links(&page, &cfg.link_suffix);
    storage::ensure_dir(&cfg.output_dir).await?;
    Ok(found)
}
