//! `srccombine` is a library and command-line tool that combines every source
//! file of one extension under a directory into a single output file.
//!
//! Each file becomes one *segment* of the output: a `// File: <relative path>`
//! header line followed by the file's content, always newline-terminated. The
//! result is meant for reading a whole codebase as one document (review,
//! analysis, feeding it to an LLM).
//!
//! As a library it provides a two-stage pipeline over an abstract
//! [`fs::FileSystem`]:
//! 1.  **Discover**: find files with the configured extension, minus the output
//!     file itself and anything whose path contains an exclusion mask.
//! 2.  **Combine**: stream the files into the output and collect statistics.
//!
//! # Example: Library Usage
//!
//! ```
//! use srccombine::{run, ConfigBuilder};
//! use srccombine::fs::MemoryFileSystem;
//!
//! # fn main() -> srccombine::errors::Result<()> {
//! // 1. Set up an in-memory source tree.
//! let fs = MemoryFileSystem::new();
//! fs.add_file("/proj/a.cs", "class A{}\n");
//! fs.add_file("/proj/sub/b.cs", "class B{}");
//! fs.add_file("/proj/sub/Form.Designer.cs", "ignored");
//!
//! // 2. Configure the run.
//! let config = ConfigBuilder::new()
//!     .input_folder("/proj")
//!     .output_file("/combined.txt")
//!     .build()?;
//!
//! // 3. Execute the pipeline.
//! let result = run(&config, &fs, None)?;
//!
//! assert_eq!(result.original_file_count, 2);
//! assert_eq!(result.directories_processed, 2);
//! let combined = fs.contents("/combined.txt").unwrap();
//! assert!(combined.starts_with("// File: a.cs\nclass A{}\n// File: sub"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod fs;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod progress;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder};
pub use core_types::{CombineResult, SourceFile};
pub use discovery::discover_files;
pub use errors::{Error, Result};
pub use processing::{combine_files, count_lines};
pub use progress::{NoOpProgress, ProgressReporter};

use crate::fs::FileSystem;
use std::sync::Arc;

/// Executes a complete combine run: resolve the output path, discover, combine.
///
/// # Arguments
/// * `config` - The configuration for the run.
/// * `fs` - The filesystem to operate on (e.g. [`fs::RealFileSystem`]).
/// * `progress` - An optional progress reporter; `None` reports nothing.
///
/// # Errors
/// Fails with [`Error::DirectoryNotFound`] or [`Error::NoMatchingFiles`]
/// before the output is touched, and with [`Error::Read`], [`Error::Write`]
/// or [`Error::Io`] while combining. No error is retried.
pub fn run(
    config: &Config,
    fs: &dyn FileSystem,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<CombineResult> {
    let output_path = fs.canonicalize(&config.output_file)?;
    log::debug!("Resolved output path: {:?}", output_path);

    let files = discover_files(config, &output_path, fs)?;
    log::info!(
        "Found {} '{}' file(s) under '{}'",
        files.len(),
        config.file_extension,
        config.input_folder.display()
    );

    let progress: Arc<dyn ProgressReporter> = progress.unwrap_or_else(|| Arc::new(NoOpProgress));
    combine_files(&files, &output_path, config, fs, progress.as_ref())
}
