//! CLI for harvest.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use harvest_core::config::{self, HarvestConfig};
use harvest_core::records::RecordStore;
use std::path::PathBuf;

use commands::{apply_overrides, run_checksum, run_harvest, run_records, RunOverrides};

/// Top-level CLI. With no subcommand, runs the pipeline once using the config file.
#[derive(Debug, Parser)]
#[command(name = "harvest")]
#[command(
    about = "Download the files linked from a listing page, keeping one copy per checksum",
    long_about = None
)]
pub struct Cli {
    /// Config file to use instead of ~/.config/harvest/config.toml (created if missing).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the listing page and ingest every matching link (the default).
    Run {
        /// Listing page URL (overrides config).
        #[arg(long)]
        url: Option<String>,
        /// Link suffix to match, case-sensitive (overrides config).
        #[arg(long)]
        suffix: Option<String>,
        /// Directory downloaded files are kept in (overrides config).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Keep going after a failed link instead of stopping the run.
        #[arg(long)]
        continue_on_error: bool,
    },

    /// List stored records.
    Records,

    /// Print the content checksum of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl Default for CliCommand {
    fn default() -> Self {
        CliCommand::Run {
            url: None,
            suffix: None,
            output_dir: None,
            continue_on_error: false,
        }
    }
}

impl Cli {
    /// Returns the process exit code.
    pub async fn run_from_args() -> Result<i32> {
        Cli::parse().dispatch().await
    }

    async fn dispatch(self) -> Result<i32> {
        let mut cfg = match &self.config {
            Some(path) => config::load_or_init_at(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command.unwrap_or_default() {
            CliCommand::Run {
                url,
                suffix,
                output_dir,
                continue_on_error,
            } => {
                apply_overrides(
                    &mut cfg,
                    RunOverrides {
                        url,
                        suffix,
                        output_dir,
                        continue_on_error,
                    },
                );
                let store = open_store(&cfg).await?;
                let code = run_harvest(&store, &cfg).await;
                store.close().await;
                Ok(code)
            }
            CliCommand::Records => {
                let store = open_store(&cfg).await?;
                let res = run_records(&store).await;
                store.close().await;
                res.map(|()| 0)
            }
            CliCommand::Checksum { path } => {
                run_checksum(&path).await?;
                Ok(0)
            }
        }
    }
}

async fn open_store(cfg: &HarvestConfig) -> Result<RecordStore> {
    match &cfg.database_path {
        Some(path) => RecordStore::open_at(path).await,
        None => RecordStore::open_default().await,
    }
}

#[cfg(test)]
mod tests;
