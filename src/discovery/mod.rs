//! Discovers the source files of a combine run.
use crate::config::Config;
use crate::core_types::SourceFile;
use crate::errors::{Error, Result};
use crate::fs::FileSystem;
use log::debug;
use std::path::Path;

mod filter;

pub use filter::{file_pattern, is_output_file, matching_mask};

/// Finds every file under `config.input_folder` (recursively) whose name ends
/// with the configured extension, then drops the output file itself and any
/// file whose absolute path contains an exclusion mask.
///
/// Files come back in the order the filesystem enumerates them, which differs
/// between platforms, unless `config.sort_by_path` is set.
///
/// # Arguments
/// * `config` - The configuration of the run.
/// * `output_path` - The canonical absolute path of the output file.
/// * `fs` - The filesystem to search.
///
/// # Errors
/// * [`Error::DirectoryNotFound`] if the input folder does not exist.
/// * [`Error::NoMatchingFiles`] if no file survives filtering.
/// * Listing or canonicalization failures from `fs`.
///
/// # Examples
///
/// ```
/// use srccombine::{discover_files, ConfigBuilder};
/// use srccombine::fs::MemoryFileSystem;
/// use std::path::Path;
///
/// # fn main() -> srccombine::errors::Result<()> {
/// let fs = MemoryFileSystem::new();
/// fs.add_file("/proj/App.cs", "class App {}");
/// fs.add_file("/proj/App.Designer.cs", "partial class App {}");
///
/// let config = ConfigBuilder::new()
///     .input_folder("/proj")
///     .output_file("/out.txt")
///     .build()?;
/// let files = discover_files(&config, Path::new("/out.txt"), &fs)?;
///
/// assert_eq!(files.len(), 1);
/// assert!(files[0].full_path.ends_with("App.cs"));
/// # Ok(())
/// # }
/// ```
pub fn discover_files(
    config: &Config,
    output_path: &Path,
    fs: &dyn FileSystem,
) -> Result<Vec<SourceFile>> {
    if !fs.directory_exists(&config.input_folder) {
        return Err(Error::DirectoryNotFound {
            path: config.input_folder.display().to_string(),
        });
    }

    let pattern = file_pattern(&config.file_extension);
    let listed = fs.list_files(&config.input_folder, &pattern, true)?;
    debug!(
        "Listed {} file(s) matching '{}' under '{}'",
        listed.len(),
        pattern,
        config.input_folder.display()
    );

    let mut files = Vec::with_capacity(listed.len());
    for path in listed {
        // Symlinked sources keep their path under the input folder; only the
        // self-exclusion check looks through links.
        let full_path = fs.absolute(&path)?;
        if is_output_file(&fs.canonicalize(&path)?, output_path) {
            debug!("Skipping the output file itself: {:?}", full_path);
            continue;
        }
        if let Some(mask) = matching_mask(&full_path, &config.exclude_masks) {
            debug!("Skipping {:?} (matches exclusion mask '{}')", full_path, mask);
            continue;
        }
        files.push(SourceFile { path, full_path });
    }

    if files.is_empty() {
        return Err(Error::NoMatchingFiles {
            extension: config.file_extension.clone(),
            path: config.input_folder.display().to_string(),
        });
    }

    if config.sort_by_path {
        files.sort_by(|a, b| a.full_path.cmp(&b.full_path));
    }

    debug!("Discovery complete. {} file(s) selected.", files.len());
    Ok(files)
}
