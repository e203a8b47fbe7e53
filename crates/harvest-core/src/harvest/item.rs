//! One link: download, checksum, then record or discard.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::config::HarvestConfig;
use crate::fetch::{self, FetchOptions};
use crate::records::{RecordError, RecordStore};
use crate::storage;
use crate::url_model;

/// What happened to a single link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// New content, kept at `path` and recorded.
    Stored { path: PathBuf, checksum: String },
    /// Content already recorded; the download was removed.
    Duplicate { path: PathBuf, checksum: String },
}

/// Downloads `href` into the output directory and keeps it only if its
/// checksum is new. The download goes to `<name>.part` first, which is
/// removed on any error.
pub async fn process_link(
    store: &RecordStore,
    cfg: &HarvestConfig,
    href: &str,
) -> Result<ItemOutcome> {
    let url = url_model::resolve_link(&cfg.listing_url, href, cfg.link_resolution)?;
    let name = url_model::save_name(href)
        .ok_or_else(|| anyhow::anyhow!("no usable file name in href {:?}", href))?;
    let final_path = cfg.output_dir.join(&name);
    let part = storage::temp_path(&final_path);

    let result = ingest(store, &url, &name, &part, &final_path, cfg.fetch_options()).await;
    if result.is_err() {
        if let Err(e) = storage::discard(&part).await {
            tracing::warn!("cleanup after failed download: {:#}", e);
        }
    }
    result
}

async fn ingest(
    store: &RecordStore,
    url: &str,
    name: &str,
    part: &Path,
    final_path: &Path,
    opts: FetchOptions,
) -> Result<ItemOutcome> {
    let bytes = tokio::task::spawn_blocking({
        let url = url.to_string();
        let part = part.to_path_buf();
        move || fetch::download_to_file(&url, &part, &opts)
    })
    .await
    .context("download task join")??;
    tracing::debug!("downloaded {} ({} bytes) to {}", url, bytes, part.display());

    let checksum = tokio::task::spawn_blocking({
        let part = part.to_path_buf();
        move || checksum::sha256_path(&part)
    })
    .await
    .context("checksum task join")??;

    if let Some(existing) = store.find_by_checksum(&checksum).await? {
        storage::discard(part).await?;
        tracing::info!(
            "duplicate found and removed: {} (same content as {})",
            final_path.display(),
            existing.filename
        );
        return Ok(ItemOutcome::Duplicate {
            path: final_path.to_path_buf(),
            checksum,
        });
    }

    keep_new(store, name, checksum, part, final_path).await
}

/// Records `checksum` under `name` and moves `part` into place. The insert
/// is committed only after the rename, so a failed rename leaves no record.
/// A checksum rejected by the UNIQUE constraint (recorded after our lookup)
/// is handled as a duplicate.
async fn keep_new(
    store: &RecordStore,
    name: &str,
    checksum: String,
    part: &Path,
    final_path: &Path,
) -> Result<ItemOutcome> {
    match store.begin_insert(name, &checksum).await {
        Ok(pending) => {
            storage::finalize(part, final_path).await?;
            let id = match pending.commit().await {
                Ok(id) => id,
                Err(e) => {
                    if let Err(cleanup) = storage::discard(final_path).await {
                        tracing::warn!("cleanup after failed commit: {:#}", cleanup);
                    }
                    return Err(e).with_context(|| format!("record {}", name));
                }
            };
            tracing::info!(
                "downloaded and stored: {} (record {})",
                final_path.display(),
                id
            );
            Ok(ItemOutcome::Stored {
                path: final_path.to_path_buf(),
                checksum,
            })
        }
        Err(RecordError::DuplicateChecksum { .. }) => {
            storage::discard(part).await?;
            tracing::info!(
                "duplicate found and removed: {} (detected on insert)",
                final_path.display()
            );
            Ok(ItemOutcome::Duplicate {
                path: final_path.to_path_buf(),
                checksum,
            })
        }
        Err(e) => Err(e).with_context(|| format!("record {}", name)),
    }
}
