//! The combiner engine.
//!
//! Streams every discovered file into the output as one segment, in discovery
//! order, while accumulating the statistics returned in a [`CombineResult`].
//! Work is sequential and fail-fast: the first read or write error aborts the
//! run and the partially written output is left in place.

use crate::config::Config;
use crate::constants::WRITE_BUFFER_SIZE;
use crate::core_types::{CombineResult, SourceFile};
use crate::errors::{write_error_with_path, Result};
use crate::fs::FileSystem;
use crate::output::{relative_display_path, write_segment};
use crate::progress::ProgressReporter;
use log::{debug, info};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

mod counter;

pub use counter::count_lines;

/// Writes `files` into `output_path` and returns the run statistics.
///
/// Any existing file at `output_path` is replaced without confirmation.
/// `processing_time` covers the segment loop only, not setup or the final stat.
///
/// # Arguments
/// * `files` - Files from discovery, written in this order.
/// * `output_path` - The canonical absolute output path.
/// * `config` - The configuration of the run (its input folder anchors header paths).
/// * `fs` - The filesystem to read from and write to.
/// * `progress` - Receives `update(i, total)` after each file.
///
/// # Errors
/// * [`crate::Error::Read`] if a source file cannot be read as UTF-8 text.
/// * [`crate::Error::Write`] if the output cannot be created, written or flushed.
/// * [`crate::Error::Io`] if the written output cannot be stat'ed.
///
/// # Examples
///
/// ```
/// use srccombine::{combine_files, discover_files, ConfigBuilder, NoOpProgress};
/// use srccombine::fs::MemoryFileSystem;
/// use std::path::Path;
///
/// # fn main() -> srccombine::errors::Result<()> {
/// let fs = MemoryFileSystem::new();
/// fs.add_file("/proj/a.cs", "class A{}\n");
///
/// let config = ConfigBuilder::new().input_folder("/proj").output_file("/all.txt").build()?;
/// let output = Path::new("/all.txt");
/// let files = discover_files(&config, output, &fs)?;
/// let result = combine_files(&files, output, &config, &fs, &NoOpProgress)?;
///
/// assert_eq!(fs.contents("/all.txt").unwrap(), "// File: a.cs\nclass A{}\n");
/// assert_eq!(result.total_lines, 2);
/// # Ok(())
/// # }
/// ```
pub fn combine_files(
    files: &[SourceFile],
    output_path: &Path,
    config: &Config,
    fs: &dyn FileSystem,
    progress: &dyn ProgressReporter,
) -> Result<CombineResult> {
    let input_root = fs.absolute(&config.input_folder)?;

    fs.delete_if_exists(output_path)?;
    let mut writer = fs.open_write_stream(output_path, WRITE_BUFFER_SIZE)?;

    let total = files.len();
    let mut result = CombineResult {
        output_path: output_path.display().to_string(),
        original_file_count: total,
        ..Default::default()
    };

    progress.reset();
    let started = Instant::now();
    for (index, file) in files.iter().enumerate() {
        let content = fs.read_all_text(&file.full_path)?;
        let relative_path = relative_display_path(&file.full_path, &input_root);
        debug!("Appending '{}' ({} bytes)", relative_path, content.len());

        write_segment(&mut *writer, &relative_path, &content)
            .map_err(|e| write_error_with_path(e, output_path))?;

        result.total_lines += count_lines(&content);
        progress.update(index + 1, total);
    }
    result.processing_time = started.elapsed();

    writer
        .flush()
        .map_err(|e| write_error_with_path(e, output_path))?;
    drop(writer);
    progress.finish();

    result.file_size = fs.file_size(output_path)?;
    result.directories_processed = count_directories(files);

    info!(
        "Combined {} file(s) ({} lines) into '{}'",
        result.original_file_count, result.total_lines, result.output_path
    );
    Ok(result)
}

/// Number of distinct parent directories among `files`.
fn count_directories(files: &[SourceFile]) -> usize {
    files
        .iter()
        .filter_map(|file| file.full_path.parent())
        .collect::<BTreeSet<_>>()
        .len()
}
