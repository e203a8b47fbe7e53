//! Output directory file lifecycle.
//!
//! Downloads land in `<name>.part`; a new file is renamed into place, a
//! duplicate is removed, so a stored file is never overwritten by a repeat.

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename into place.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `a.pdf` → `a.pdf.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Create the output directory (and parents) if missing.
pub async fn ensure_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("create output dir {}", dir.display()))
}

/// Move a finished temp file to its final name, replacing any file already there.
pub async fn finalize(temp: &Path, final_path: &Path) -> Result<()> {
    tokio::fs::rename(temp, final_path)
        .await
        .with_context(|| format!("rename {} -> {}", temp.display(), final_path.display()))
}

/// Remove a file; a file that is already gone is not an error.
pub async fn discard(path: &Path) -> Result<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("remove {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("a.pdf"));
        assert_eq!(p.to_string_lossy(), "a.pdf.part");
        let p2 = temp_path(Path::new("/tmp/pdfs/b.pdf"));
        assert_eq!(p2.to_string_lossy(), "/tmp/pdfs/b.pdf.part");
    }

    #[tokio::test]
    async fn finalize_moves_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("a.pdf");
        let tp = temp_path(&final_path);
        std::fs::write(&final_path, b"old").unwrap();
        std::fs::write(&tp, b"new").unwrap();

        finalize(&tp, &final_path).await.unwrap();
        assert!(!tp.exists());
        assert_eq!(std::fs::read(&final_path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn discard_tolerates_missing() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("gone.pdf.part");
        discard(&p).await.unwrap();
        std::fs::write(&p, b"x").unwrap();
        discard(&p).await.unwrap();
        assert!(!p.exists());
    }

    #[tokio::test]
    async fn ensure_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a").join("b");
        ensure_dir(&out).await.unwrap();
        ensure_dir(&out).await.unwrap();
        assert!(out.is_dir());
    }
}
