//! Href to download URL.

use anyhow::{Context, Result};

use crate::config::LinkResolution;

/// Builds the download URL for `href` found on the page at `base`.
pub fn resolve_link(base: &str, href: &str, mode: LinkResolution) -> Result<String> {
    match mode {
        LinkResolution::Resolve => {
            let base_url =
                url::Url::parse(base).with_context(|| format!("invalid listing URL: {}", base))?;
            let joined = base_url
                .join(href)
                .with_context(|| format!("cannot resolve {} against {}", href, base))?;
            Ok(joined.into())
        }
        LinkResolution::PathJoin => Ok(path_join(base, href)),
    }
}

/// POSIX path-join semantics applied to URL strings.
fn path_join(base: &str, href: &str) -> String {
    if href.starts_with('/') {
        return href.to_string();
    }
    if base.is_empty() || base.ends_with('/') {
        format!("{}{}", base, href)
    } else {
        format!("{}/{}", base, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "http://example.com/ExamResults/main.htm";

    #[test]
    fn resolve_relative() {
        assert_eq!(
            resolve_link(PAGE, "2024/a.pdf", LinkResolution::Resolve).unwrap(),
            "http://example.com/ExamResults/2024/a.pdf"
        );
    }

    #[test]
    fn resolve_root_relative_and_absolute() {
        assert_eq!(
            resolve_link(PAGE, "/files/a.pdf", LinkResolution::Resolve).unwrap(),
            "http://example.com/files/a.pdf"
        );
        assert_eq!(
            resolve_link(PAGE, "https://cdn.example.org/b.pdf", LinkResolution::Resolve).unwrap(),
            "https://cdn.example.org/b.pdf"
        );
    }

    #[test]
    fn resolve_rejects_bad_base() {
        assert!(resolve_link("not a url", "a.pdf", LinkResolution::Resolve).is_err());
    }

    #[test]
    fn path_join_appends_to_page_url() {
        assert_eq!(
            resolve_link(PAGE, "2024/a.pdf", LinkResolution::PathJoin).unwrap(),
            "http://example.com/ExamResults/main.htm/2024/a.pdf"
        );
        assert_eq!(
            resolve_link("http://example.com/dir/", "a.pdf", LinkResolution::PathJoin).unwrap(),
            "http://example.com/dir/a.pdf"
        );
    }

    #[test]
    fn path_join_root_relative_replaces_base() {
        assert_eq!(
            resolve_link(PAGE, "/files/a.pdf", LinkResolution::PathJoin).unwrap(),
            "/files/a.pdf"
        );
    }
}
