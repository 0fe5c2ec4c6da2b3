//! The `srccombine` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions.
//!
//! # Example
//!
//! ```
//! use srccombine::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let fs = MemoryFileSystem::new();
//! fs.add_file("/src/Main.cs", "class Main {}");
//!
//! let config = ConfigBuilder::new().input_folder("/src").output_file("/all.cs").build()?;
//! let result = run(&config, &fs, None)?;
//! assert_eq!(result.original_file_count, 1);
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, ConfigBuilder};
pub use crate::core_types::{CombineResult, SourceFile};
pub use crate::discovery::{discover_files, matching_mask};
pub use crate::errors::{Error, Result};
pub use crate::fs::{FileSystem, MemoryFileSystem, RealFileSystem};
pub use crate::output::{relative_display_path, write_report, write_segment};
pub use crate::processing::{combine_files, count_lines};
pub use crate::progress::{NoOpProgress, ProgressReporter};
pub use crate::run;
