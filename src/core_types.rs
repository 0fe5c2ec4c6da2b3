//! Defines core data structures used throughout the combine pipeline.
//!
//! `SourceFile` flows from discovery into the combiner; `CombineResult` is
//! what the combiner hands back once the output file is complete.

use std::path::PathBuf;
use std::time::Duration;

/// A file selected by discovery, waiting to be appended to the output.
///
/// # Examples
///
/// ```
/// use srccombine::core_types::SourceFile;
/// use std::path::PathBuf;
///
/// let file = SourceFile {
///     path: PathBuf::from("./src/Program.cs"),
///     full_path: PathBuf::from("/work/src/Program.cs"),
/// };
///
/// assert_eq!(file.full_path.file_name().unwrap(), "Program.cs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// The path as the filesystem listing produced it.
    pub path: PathBuf,
    /// The absolute path with symlinks left in place, used for filtering and
    /// relative-path display.
    pub full_path: PathBuf,
}

/// Statistics of one completed combine run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombineResult {
    /// Sum of the line counts of every combined file.
    pub total_lines: usize,
    /// The canonical output path, as a display string.
    pub output_path: String,
    /// Size of the written output file in bytes.
    pub file_size: u64,
    /// Number of source files written into the output.
    pub original_file_count: usize,
    /// Number of distinct parent directories among the source files.
    pub directories_processed: usize,
    /// Wall-clock time spent writing segments.
    pub processing_time: Duration,
}
