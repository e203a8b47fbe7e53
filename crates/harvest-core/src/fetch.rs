//! HTTP GET of the listing page and of each linked file.
//!
//! Uses the curl crate (libcurl easy interface). Every call runs in the
//! current thread; call from `spawn_blocking` if used from async code.
//! Non-2xx responses are errors, so an error page is never stored as content.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Timeouts applied to every request.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(120),
        }
    }
}

fn easy_get(url: &str, opts: &FetchOptions) -> Result<curl::easy::Easy> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    Ok(easy)
}

fn check_status(easy: &mut curl::easy::Easy, url: &str) -> Result<()> {
    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }
    Ok(())
}

/// GET `url` and return the whole response body.
pub fn fetch_bytes(url: &str, opts: &FetchOptions) -> Result<Vec<u8>> {
    let mut easy = easy_get(url, opts)?;
    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer
            .perform()
            .with_context(|| format!("GET {} failed", url))?;
    }
    check_status(&mut easy, url)?;
    tracing::debug!("fetched {} ({} bytes)", url, body.len());
    Ok(body)
}

/// GET `url` and write the body to `path` (created or truncated).
/// Returns the number of bytes written. On HTTP error the file may hold a
/// partial or error body; the caller owns cleanup.
pub fn download_to_file(url: &str, path: &Path, opts: &FetchOptions) -> Result<u64> {
    let mut file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut easy = easy_get(url, opts)?;
    let mut written = 0u64;
    let mut write_err: Option<std::io::Error> = None;
    let perform = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => {
                written += data.len() as u64;
                Ok(data.len())
            }
            Err(e) => {
                write_err = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };
    if let Some(e) = write_err {
        return Err(e).with_context(|| format!("write {}", path.display()));
    }
    perform.with_context(|| format!("GET {} failed", url))?;
    check_status(&mut easy, url)?;
    file.sync_all()
        .with_context(|| format!("sync {}", path.display()))?;
    Ok(written)
}
