//! CLI parse tests.

use super::{Cli, CliCommand};
use crate::cli::commands::{apply_overrides, RunOverrides};
use clap::Parser;
use harvest_core::config::{HarvestConfig, ItemErrorPolicy};
use std::path::{Path, PathBuf};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn no_arguments_means_default_run() {
    let cli = parse(&["harvest"]);
    assert!(cli.config.is_none());
    assert!(cli.command.is_none());
    match cli.command.unwrap_or_default() {
        CliCommand::Run {
            url,
            suffix,
            output_dir,
            continue_on_error,
        } => {
            assert!(url.is_none());
            assert!(suffix.is_none());
            assert!(output_dir.is_none());
            assert!(!continue_on_error);
        }
        other => panic!("expected Run, got {:?}", other),
    }
}

#[test]
fn run_with_overrides() {
    let cli = parse(&[
        "harvest",
        "run",
        "--url",
        "https://example.com/list.htm",
        "--suffix",
        ".zip",
        "--output-dir",
        "/tmp/out",
        "--continue-on-error",
    ]);
    match cli.command {
        Some(CliCommand::Run {
            url,
            suffix,
            output_dir,
            continue_on_error,
        }) => {
            assert_eq!(url.as_deref(), Some("https://example.com/list.htm"));
            assert_eq!(suffix.as_deref(), Some(".zip"));
            assert_eq!(output_dir.as_deref(), Some(Path::new("/tmp/out")));
            assert!(continue_on_error);
        }
        other => panic!("expected Run, got {:?}", other),
    }
}

#[test]
fn records_and_checksum() {
    assert!(matches!(
        parse(&["harvest", "records"]).command,
        Some(CliCommand::Records)
    ));
    match parse(&["harvest", "checksum", "pdfs/a.pdf"]).command {
        Some(CliCommand::Checksum { path }) => assert_eq!(path, PathBuf::from("pdfs/a.pdf")),
        other => panic!("expected Checksum, got {:?}", other),
    }
}

#[test]
fn global_config_flag_after_subcommand() {
    let cli = parse(&["harvest", "records", "--config", "/etc/harvest.toml"]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/harvest.toml")));
}

#[test]
fn checksum_requires_path() {
    assert!(Cli::try_parse_from(["harvest", "checksum"]).is_err());
}

#[test]
fn overrides_replace_config_values() {
    let mut cfg = HarvestConfig::default();
    apply_overrides(
        &mut cfg,
        RunOverrides {
            url: Some("https://example.com/".to_string()),
            suffix: None,
            output_dir: Some(PathBuf::from("out")),
            continue_on_error: true,
        },
    );
    assert_eq!(cfg.listing_url, "https://example.com/");
    assert_eq!(cfg.link_suffix, ".pdf");
    assert_eq!(cfg.output_dir, PathBuf::from("out"));
    assert_eq!(cfg.on_item_error, ItemErrorPolicy::Continue);

    let mut untouched = HarvestConfig::default();
    apply_overrides(&mut untouched, RunOverrides::default());
    assert_eq!(untouched.on_item_error, ItemErrorPolicy::Abort);
}
