// src/config/parsing.rs

use crate::errors::{Error, Result};

/// Normalizes a user-supplied extension so it always starts with a single `.`.
///
/// Surrounding whitespace is ignored. An empty extension (or a bare `.`) is rejected.
///
/// # Examples
///
/// ```
/// use srccombine::config::normalize_extension;
///
/// assert_eq!(normalize_extension("cs").unwrap(), ".cs");
/// assert_eq!(normalize_extension(".rs").unwrap(), ".rs");
/// assert!(normalize_extension("").is_err());
/// ```
pub fn normalize_extension(extension: &str) -> Result<String> {
    let trimmed = extension.trim();
    let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if bare.is_empty() {
        return Err(Error::Config(format!(
            "File extension must not be empty (got '{}')",
            extension
        )));
    }
    Ok(format!(".{}", bare))
}

/// Splits a comma-separated exclusion list.
///
/// Entries are whitespace-trimmed, empty entries are dropped and duplicates
/// keep their first position.
pub fn parse_exclude_list(raw: &str) -> Vec<String> {
    dedup_masks(raw.split(',').map(str::trim).map(str::to_string))
}

/// Removes empty and repeated masks while keeping the original order.
pub(super) fn dedup_masks<I: IntoIterator<Item = String>>(masks: I) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for mask in masks {
        if !mask.is_empty() && !unique.contains(&mask) {
            unique.push(mask);
        }
    }
    unique
}
