//! Link resolution and local filename derivation.
//!
//! Turns an href from the listing page into a download URL and a safe
//! basename for the output directory.

mod resolve;
mod sanitize;

pub use resolve::resolve_link;
pub use sanitize::sanitize_filename;

/// Derives the local save name from an href: its basename (text after the
/// last `/`), sanitized for Linux. Returns `None` when nothing usable remains.
///
/// # Examples
///
/// - `save_name("results/2024/sem1.pdf")` → `Some("sem1.pdf")`
/// - `save_name("https://cdn.example.com/x/y.pdf")` → `Some("y.pdf")`
/// - `save_name("dir/")` → `None`
pub fn save_name(href: &str) -> Option<String> {
    let base = href.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(href);
    let sanitized = sanitize_filename(base);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        None
    } else {
        Some(sanitized)
    }
}
