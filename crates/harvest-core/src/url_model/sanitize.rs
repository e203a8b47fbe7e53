//! Filesystem-safe save names.

use crate::storage::TEMP_SUFFIX;

/// Linux NAME_MAX in bytes.
const NAME_MAX: usize = 255;

/// Longest save name whose `.part` temp name still fits in NAME_MAX.
const MAX_SAVE_NAME: usize = NAME_MAX - TEMP_SUFFIX.len();

fn is_forbidden(c: char) -> bool {
    c == '\0' || c == '/' || c == '\\' || c.is_control() || c.is_whitespace()
}

/// Makes a basename safe to create under the output directory.
///
/// Separators, control characters and whitespace become `_` (runs collapse
/// to one), leading/trailing dots and underscores are trimmed, and names
/// longer than NAME_MAX minus the temp suffix are shortened in the stem so
/// the extension survives.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let c = if is_forbidden(c) { '_' } else { c };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    if trimmed.len() <= MAX_SAVE_NAME {
        return trimmed.to_string();
    }

    let (stem, ext) = match trimmed.rfind('.') {
        Some(dot) if trimmed.len() - dot <= 16 => trimmed.split_at(dot),
        _ => (trimmed, ""),
    };
    let mut take = MAX_SAVE_NAME - ext.len();
    while !stem.is_char_boundary(take) {
        take -= 1;
    }
    format!("{}{}", &stem[..take], ext)
}
