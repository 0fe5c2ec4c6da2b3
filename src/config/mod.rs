//! Defines the `Config` struct consumed by a combine run.
//!
//! A `Config` is produced once (from the CLI or programmatically through
//! [`ConfigBuilder`]) and is never mutated afterwards; discovery and the
//! combiner only borrow it.

use crate::constants;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;

pub use parsing::{normalize_extension, parse_exclude_list};

/// Settings of one combine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root folder searched recursively for source files.
    pub input_folder: PathBuf,
    /// File the combined output is written to.
    pub output_file: PathBuf,
    /// Extension to collect, always starting with `.` (e.g. `.cs`).
    pub file_extension: String,
    /// Substrings; a file whose full path contains any of them is skipped.
    pub exclude_masks: Vec<String>,
    /// Sort discovered files by path instead of keeping enumeration order.
    pub sort_by_path: bool,
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            input_folder: PathBuf::from(constants::DEFAULT_INPUT_FOLDER),
            output_file: PathBuf::from(constants::DEFAULT_OUTPUT_FILE),
            file_extension: constants::DEFAULT_EXTENSION.to_string(),
            exclude_masks: default_exclude_masks(),
            sort_by_path: false,
        }
    }
}

/// The masks applied when none are configured.
pub fn default_exclude_masks() -> Vec<String> {
    constants::DEFAULT_EXCLUDE_MASKS
        .iter()
        .map(|mask| mask.to_string())
        .collect()
}
